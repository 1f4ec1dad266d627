use std::borrow::Cow;

use tracing::{debug, trace};

use crate::{
    engine::{
        conversion::core::Conversion,
        operator::core::Operator,
        tree::node::{Operand, OperationNode, OperatorTable},
        value::core::Value,
    },
    error::EvalError,
};

/// Result type used by the engine.
///
/// All conversions, operators and evaluation functions return either a value
/// of type `T` or an `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Default depth limit: none. Depth is bounded only by the tree the caller
/// supplies.
pub const DEFAULT_MAX_DEPTH: Option<usize> = None;

/// Evaluates operation trees.
///
/// The evaluator holds no state besides its configuration. Trees and operator
/// tables are only borrowed, so one evaluator can be shared freely and any
/// number of evaluations can run at the same time.
///
/// # Usage
///
/// Most callers use the free functions [`evaluate_tree`] and
/// [`evaluate_pair`], which run on `Evaluator::default()`. Build an evaluator
/// with [`Evaluator::with_max_depth`] to reject untrusted trees that are nested
/// too deeply for the call stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    /// Maximum number of nested operation nodes, counting the root.
    pub max_depth: Option<usize>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Creates an evaluator that fails with `DepthLimitExceeded` on trees
    /// deeper than `limit` operation nodes.
    ///
    /// # Parameters
    /// - `limit`: Maximum number of nested operation nodes, counting the root.
    ///
    /// # Returns
    /// A configured evaluator.
    #[must_use]
    pub const fn with_max_depth(limit: usize) -> Self {
        Self { max_depth: Some(limit) }
    }

    /// Evaluates a node whose two children are value leaves.
    ///
    /// The conversions and the operator are given directly instead of being
    /// looked up, and the node's operation id is ignored.
    ///
    /// # Parameters
    /// - `node`: A node with two value leaves.
    /// - `left`: Conversion for the left leaf.
    /// - `right`: Conversion for the right leaf.
    /// - `operator`: Operator combining the converted leaves.
    ///
    /// # Returns
    /// The result of the operator wrapped in `EvalResult`.
    ///
    /// # Errors
    /// - `StructuralMismatch` if either child is a nested operation.
    /// - Any tag mismatch raised by the conversions or the operator.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::{
    ///     conversion::{array::ArrayConversion, number::NumberConversion},
    ///     operator::{core::Operator, number::NumberOperator},
    ///     tree::{evaluator::Evaluator, node::OperationNode},
    ///     value::core::Value,
    /// };
    ///
    /// let node = OperationNode::new(0,
    ///                               Value::array(vec![1.0.into(), 2.0.into()]),
    ///                               Value::random_number(10.0));
    ///
    /// let result = Evaluator::new().evaluate_pair(&node,
    ///                                             ArrayConversion::Length.into(),
    ///                                             NumberConversion::Identity.into(),
    ///                                             NumberOperator::Multiply.into())
    ///                              .unwrap();
    ///
    /// assert_eq!(result, Value::random_number(20.0));
    /// ```
    pub fn evaluate_pair(&self,
                         node: &OperationNode,
                         left: Conversion,
                         right: Conversion,
                         operator: Operator)
                         -> EvalResult<Value> {
        let (Operand::Value(left_value), Operand::Value(right_value)) = (&node.left, &node.right)
        else {
            let err = EvalError::StructuralMismatch {
                details: format!("operation {} has a nested operation as a child, but a pair \
                                  needs two value leaves",
                                 node.operation),
            };
            debug!(operation = node.operation, error = %err, "pair evaluation failed");
            return Err(err);
        };

        Self::combine(left_value, right_value, left, right, operator)
            .inspect_err(|err| debug!(operation = node.operation, error = %err, "pair evaluation failed"))
    }

    /// Evaluates a whole tree bottom-up.
    ///
    /// For every node, the conversions and the operator are looked up in
    /// `table` by the node's operation id. Each child is either taken as is
    /// (value leaf) or evaluated first (nested operation). Either way it then
    /// passes through the node's conversion for its side, and the node's
    /// operator combines the two converted values. The left subtree is
    /// evaluated before the right one, and the first failure aborts the
    /// whole evaluation.
    ///
    /// # Parameters
    /// - `node`: Root of the tree.
    /// - `table`: Operator table mapping every operation id in the tree.
    ///
    /// # Returns
    /// The value of the root wrapped in `EvalResult`.
    ///
    /// # Errors
    /// - `UnknownOperation` if a node's id is missing from `table`.
    /// - `DepthLimitExceeded` if a depth limit is configured and exceeded.
    /// - Any tag mismatch raised by a conversion or an operator.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::{
    ///     conversion::number::NumberConversion,
    ///     operator::number::NumberOperator,
    ///     tree::{
    ///         evaluator::Evaluator,
    ///         node::{OperationEntry, OperationNode, OperatorTable},
    ///     },
    ///     value::core::Value,
    /// };
    ///
    /// let table =
    ///     OperatorTable::new().with(1,
    ///                               OperationEntry::new(NumberConversion::Identity,
    ///                                                   NumberConversion::Identity,
    ///                                                   NumberOperator::Add))
    ///                         .with(2,
    ///                               OperationEntry::new(NumberConversion::Identity,
    ///                                                   NumberConversion::Identity,
    ///                                                   NumberOperator::Multiply));
    ///
    /// // (1 + 2) * 4
    /// let tree = OperationNode::new(2,
    ///                               OperationNode::new(1, Value::number(1.0), Value::number(2.0)),
    ///                               Value::number(4.0));
    ///
    /// assert_eq!(Evaluator::new().evaluate_tree(&tree, &table).unwrap(),
    ///            Value::number(12.0));
    /// ```
    pub fn evaluate_tree(&self, node: &OperationNode, table: &OperatorTable) -> EvalResult<Value> {
        self.eval_node(node, table, 1)
            .inspect_err(|err| debug!(operation = node.operation, error = %err, "tree evaluation failed"))
    }

    fn eval_node(&self,
                 node: &OperationNode,
                 table: &OperatorTable,
                 depth: usize)
                 -> EvalResult<Value> {
        if let Some(limit) = self.max_depth
           && depth > limit
        {
            return Err(EvalError::DepthLimitExceeded { limit });
        }

        let entry = table.get(node.operation)?;

        let left = self.eval_operand(&node.left, table, depth)?;
        let right = self.eval_operand(&node.right, table, depth)?;

        let value = Self::combine(&left, &right, entry.left, entry.right, entry.operator)?;

        trace!(operation = node.operation,
               depth,
               operator = %entry.operator,
               tag = %value.tag(),
               "evaluated operation node");

        Ok(value)
    }

    /// Resolves one child of a node to a value, before conversion.
    fn eval_operand<'a>(&self,
                        operand: &'a Operand,
                        table: &OperatorTable,
                        depth: usize)
                        -> EvalResult<Cow<'a, Value>> {
        match operand {
            Operand::Value(value) => Ok(Cow::Borrowed(value)),
            Operand::Operation(child) => {
                Ok(Cow::Owned(self.eval_node(child, table, depth + 1)?))
            },
        }
    }

    /// Converts both operands and applies the operator.
    fn combine(left: &Value,
               right: &Value,
               left_conversion: Conversion,
               right_conversion: Conversion,
               operator: Operator)
               -> EvalResult<Value> {
        let left = left_conversion.apply(left)?;
        let right = right_conversion.apply(right)?;

        operator.apply(&left, &right)
    }
}

/// Evaluates a node with two value leaves using the default evaluator.
///
/// See [`Evaluator::evaluate_pair`].
pub fn evaluate_pair(node: &OperationNode,
                     left: Conversion,
                     right: Conversion,
                     operator: Operator)
                     -> EvalResult<Value> {
    Evaluator::default().evaluate_pair(node, left, right, operator)
}

/// Evaluates a tree using the default evaluator.
///
/// See [`Evaluator::evaluate_tree`].
pub fn evaluate_tree(node: &OperationNode, table: &OperatorTable) -> EvalResult<Value> {
    Evaluator::default().evaluate_tree(node, table)
}
