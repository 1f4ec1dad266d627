/// Tree nodes and the operator table.
///
/// An operation node holds two operands and the id of the operation that
/// combines them. The operator table maps that id to the conversions and the
/// operator the node uses.
pub mod node;

/// Evaluation of operation trees.
///
/// Contains the evaluator, its configuration and the `EvalResult` alias shared
/// by the whole engine.
pub mod evaluator;
