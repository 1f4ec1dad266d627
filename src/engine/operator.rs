/// The `Operator` type, operator families and the shared determinism rule.
pub mod core;

/// Arithmetic on numbers.
pub mod number;

/// Concatenation of strings.
pub mod string;

/// Membership tests on arrays.
pub mod array;

/// Equality across any pair of comparable values.
pub mod generic;
