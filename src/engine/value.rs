/// Tags, base categories and determinism.
///
/// Defines the closed set of eight tags, the four base categories they group
/// into, and the determinism label with its combination rule.
pub mod tag;

/// The tagged value type.
///
/// Defines `Value` and its payload, the per-tag predicates every conversion
/// and operator validates with, and typed payload accessors.
pub mod core;

/// Comparability of values.
///
/// Decides whether two values share a base category, ignoring determinism.
pub mod comparable;
