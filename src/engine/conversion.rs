/// The `Conversion` type and its dispatch.
///
/// Wraps the four conversion families into one value that operator tables
/// store, and routes validation and application to the right family.
pub mod core;

/// Conversions from `number` and `random-number`.
pub mod number;

/// Conversions from `string` and `random-string`.
pub mod string;

/// Conversions from `boolean` and `random-boolean`.
pub mod boolean;

/// Conversions from `array` and `random-array`.
pub mod array;
