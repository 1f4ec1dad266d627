//! # opertree
//!
//! opertree evaluates binary operation trees over tagged values.
//! Every value is a number, string, boolean or array, and is either fixed or
//! random. Randomness propagates: any result computed from a random operand is
//! random itself. Static result-type tables predict the tag each node produces,
//! so a caller can type check a tree before evaluating it.
//!
//! ```
//! use opertree::{
//!     check_tree, evaluate_tree,
//!     engine::{
//!         conversion::{array::ArrayConversion, number::NumberConversion},
//!         operator::{array::ArrayOperator, number::NumberOperator},
//!         tree::node::{OperationEntry, OperationNode, OperatorTable},
//!         value::{core::Value, tag::Tag},
//!     },
//! };
//!
//! let table = OperatorTable::new().with(1,
//!                                       OperationEntry::new(ArrayConversion::Length,
//!                                                           NumberConversion::Identity,
//!                                                           NumberOperator::Add));
//!
//! // length([1, 2, 3]) + random 4
//! let tree = OperationNode::new(1,
//!                               Value::array(vec![1.0.into(), 2.0.into(), 3.0.into()]),
//!                               Value::random_number(4.0));
//!
//! assert_eq!(check_tree(&tree, &table).unwrap(), Tag::RandomNumber);
//! assert_eq!(evaluate_tree(&tree, &table).unwrap(), Value::random_number(7.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type shared by the whole engine.
///
/// This module defines every error that can be raised while converting,
/// combining, evaluating or type checking values. Errors carry the offending
/// tags and the name of the function that rejected them.
///
/// # Responsibilities
/// - Defines the `EvalError` enum for all failure modes.
/// - Implements `std::error::Error` and `Display` through `thiserror`.
pub mod error;
/// The tagged-value evaluation engine.
///
/// This module ties together the value model, the conversion and operator
/// families, the static result-type tables and the tree evaluator.
///
/// # Responsibilities
/// - Defines values, tags and the determinism rule.
/// - Validates operand tags in every conversion and operator.
/// - Predicts result tags statically and evaluates trees at runtime.
pub mod engine;
/// General numeric helpers.
///
/// Lenient integer parsing and number formatting used by the text
/// conversions, and length conversion used by the array conversions.
pub mod util;

pub use engine::{
    result_type::{check::check_tree, table::predicted_tag},
    tree::evaluator::{EvalResult, Evaluator, evaluate_pair, evaluate_tree},
};
pub use error::EvalError;
