/// Static result-type tables for operators and conversions.
pub mod table;

/// Type checking of whole trees against the tables.
pub mod check;
