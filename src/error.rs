/// Evaluation errors.
///
/// Contains every error that conversions, operators, the tree evaluator and
/// the static tree checker can raise. Errors are returned, never caught inside
/// the engine, so one failure aborts the whole evaluation.
pub mod eval_error;

pub use eval_error::EvalError;
