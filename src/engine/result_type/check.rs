use crate::engine::{
    conversion::core::Conversion,
    result_type::table::{conversion_result_type, operator_result_type},
    tree::{
        evaluator::EvalResult,
        node::{Operand, OperationEntry, OperationNode, OperatorTable},
    },
    value::tag::Tag,
};

/// Predicts the tag of a conversion output from the tag of its input.
///
/// # Parameters
/// - `conversion`: The conversion to check.
/// - `input`: Tag of the conversion input.
///
/// # Returns
/// The tag the conversion would produce.
///
/// # Errors
/// Returns a tag mismatch if the conversion does not accept `input`.
pub fn check_conversion(conversion: Conversion, input: Tag) -> EvalResult<Tag> {
    conversion.check(input)?;

    Ok(conversion_result_type(conversion).select(input.determinism()))
}

/// Predicts the tag a node produces from the tags of its two operands.
///
/// Applies the entry's conversions to the operand tags, validates the
/// converted tags against the operator, and looks up the operator's result
/// type. Nothing is evaluated.
///
/// # Parameters
/// - `entry`: Conversions and operator of a node.
/// - `left`: Tag of the left operand, before conversion.
/// - `right`: Tag of the right operand, before conversion.
///
/// # Returns
/// The tag the node would produce.
///
/// # Example
/// ```
/// use opertree::engine::{
///     conversion::{number::NumberConversion, string::StringConversion},
///     operator::number::NumberOperator,
///     result_type::check::check_entry,
///     tree::node::OperationEntry,
///     value::tag::Tag,
/// };
///
/// let entry = OperationEntry::new(StringConversion::ParseInt,
///                                 NumberConversion::Identity,
///                                 NumberOperator::Add);
///
/// assert_eq!(check_entry(&entry, Tag::RandomString, Tag::Number).unwrap(),
///            Tag::RandomNumber);
/// assert!(check_entry(&entry, Tag::Number, Tag::Number).is_err());
/// ```
pub fn check_entry(entry: &OperationEntry, left: Tag, right: Tag) -> EvalResult<Tag> {
    let left = check_conversion(entry.left, left)?;
    let right = check_conversion(entry.right, right)?;

    entry.operator.check(left, right)?;

    let determinism = left.determinism().combine(right.determinism());

    Ok(operator_result_type(entry.operator).select(determinism))
}

/// Type checks a whole tree without evaluating it.
///
/// Walks the tree bottom-up on tags alone, using the static result-type
/// tables, and returns the tag the root would produce. Conversions and
/// operators are validated with the same tag checks evaluation runs, so a
/// tree that passes raises no tag mismatch when evaluated with the same table.
///
/// # Parameters
/// - `node`: Root of the tree.
/// - `table`: Operator table used to look up every node.
///
/// # Returns
/// The tag the root would produce.
///
/// # Errors
/// - `UnknownOperation` if a node's id is missing from `table`.
/// - Any tag mismatch a conversion or an operator would raise.
///
/// # Example
/// ```
/// use opertree::engine::{
///     conversion::{array::ArrayConversion, number::NumberConversion},
///     operator::number::NumberOperator,
///     result_type::check::check_tree,
///     tree::node::{OperationEntry, OperationNode, OperatorTable},
///     value::{core::Value, tag::Tag},
/// };
///
/// let table = OperatorTable::new().with(1,
///                                       OperationEntry::new(ArrayConversion::Length,
///                                                           NumberConversion::Identity,
///                                                           NumberOperator::Minus));
///
/// let tree = OperationNode::new(1, Value::random_array(vec![]), Value::number(1.0));
/// assert_eq!(check_tree(&tree, &table).unwrap(), Tag::RandomNumber);
///
/// let bad = OperationNode::new(1, Value::number(3.0), Value::number(1.0));
/// assert!(check_tree(&bad, &table).is_err());
/// ```
pub fn check_tree(node: &OperationNode, table: &OperatorTable) -> EvalResult<Tag> {
    let entry = table.get(node.operation)?;

    let left = check_operand(&node.left, table)?;
    let right = check_operand(&node.right, table)?;

    check_entry(entry, left, right)
}

fn check_operand(operand: &Operand, table: &OperatorTable) -> EvalResult<Tag> {
    match operand {
        Operand::Value(value) => Ok(value.tag()),
        Operand::Operation(child) => check_tree(child, table),
    }
}
