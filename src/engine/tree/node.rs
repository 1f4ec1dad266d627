use std::collections::HashMap;

use crate::{
    engine::{
        conversion::core::Conversion, operator::core::Operator, tree::evaluator::EvalResult,
        value::core::Value,
    },
    error::EvalError,
};

/// Identifies an entry of an [`OperatorTable`].
pub type OperationId = u32;

/// One child of an operation node.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A value leaf.
    Value(Value),
    /// A nested operation whose result becomes the operand.
    Operation(Box<OperationNode>),
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<OperationNode> for Operand {
    fn from(node: OperationNode) -> Self {
        Self::Operation(Box::new(node))
    }
}

/// A binary node of an operation tree.
///
/// Children are owned, so a tree is always finite and acyclic.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationNode {
    /// The operator table entry that combines the two operands.
    pub operation: OperationId,
    /// Left operand.
    pub left:      Operand,
    /// Right operand.
    pub right:     Operand,
}

impl OperationNode {
    /// Creates a node from an operation id and two operands.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::{
    ///     tree::node::{Operand, OperationNode},
    ///     value::core::Value,
    /// };
    ///
    /// let inner = OperationNode::new(1, Value::number(1.0), Value::number(2.0));
    /// let outer = OperationNode::new(2, inner, Value::number(3.0));
    ///
    /// assert!(matches!(outer.left, Operand::Operation(_)));
    /// assert_eq!(outer.depth(), 2);
    /// ```
    #[must_use]
    pub fn new(operation: OperationId,
               left: impl Into<Operand>,
               right: impl Into<Operand>)
               -> Self {
        Self { operation,
               left: left.into(),
               right: right.into() }
    }

    /// Number of operation nodes on the longest path from this node down to
    /// a value leaf, counting this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        let side = |operand: &Operand| match operand {
            Operand::Value(_) => 0,
            Operand::Operation(node) => node.depth(),
        };

        1 + side(&self.left).max(side(&self.right))
    }
}

/// The conversions and the operator one operation id stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationEntry {
    /// Conversion applied to the left operand.
    pub left:     Conversion,
    /// Conversion applied to the right operand.
    pub right:    Conversion,
    /// Operator applied to the two converted operands.
    pub operator: Operator,
}

impl OperationEntry {
    /// Creates an entry.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::{
    ///     conversion::{array::ArrayConversion, number::NumberConversion},
    ///     operator::number::NumberOperator,
    ///     tree::node::OperationEntry,
    /// };
    ///
    /// // length(left) + right
    /// let entry = OperationEntry::new(ArrayConversion::Length,
    ///                                 NumberConversion::Identity,
    ///                                 NumberOperator::Add);
    /// assert_eq!(entry.operator.name(), "add");
    /// ```
    #[must_use]
    pub fn new(left: impl Into<Conversion>,
               right: impl Into<Conversion>,
               operator: impl Into<Operator>)
               -> Self {
        Self { left:     left.into(),
               right:    right.into(),
               operator: operator.into(), }
    }
}

/// Maps operation ids to their conversions and operator.
///
/// Owned by the caller and only read during evaluation, so one table can
/// serve any number of trees and evaluations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorTable {
    entries: HashMap<OperationId, OperationEntry>,
}

impl OperatorTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the entry previously stored under `id`.
    ///
    /// # Parameters
    /// - `id`: Operation id.
    /// - `entry`: Conversions and operator for `id`.
    ///
    /// # Returns
    /// The replaced entry, if any.
    pub fn insert(&mut self, id: OperationId, entry: OperationEntry) -> Option<OperationEntry> {
        self.entries.insert(id, entry)
    }

    /// Builder form of [`OperatorTable::insert`].
    #[must_use]
    pub fn with(mut self, id: OperationId, entry: OperationEntry) -> Self {
        self.entries.insert(id, entry);
        self
    }

    /// Looks up the entry for `id`.
    ///
    /// # Parameters
    /// - `id`: Operation id to look up.
    ///
    /// # Returns
    /// The entry stored under `id`.
    ///
    /// # Errors
    /// Returns `EvalError::UnknownOperation` if the table has no such id.
    pub fn get(&self, id: OperationId) -> EvalResult<&OperationEntry> {
        self.entries
            .get(&id)
            .ok_or(EvalError::UnknownOperation { id })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (OperationId, &OperationEntry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }
}

impl FromIterator<(OperationId, OperationEntry)> for OperatorTable {
    fn from_iter<I: IntoIterator<Item = (OperationId, OperationEntry)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
