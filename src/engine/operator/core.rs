use crate::engine::{
    operator::{
        array::ArrayOperator, generic::GenericOperator, number::NumberOperator,
        string::StringOperator,
    },
    tree::evaluator::EvalResult,
    value::{
        core::Value,
        tag::{Determinism, Tag},
    },
};

function_family! {
    /// The operator families.
    pub enum OperatorFamily {
        /// Arithmetic on numbers.
        Number => "number",
        /// Operations on strings.
        String => "string",
        /// Operations with an array on the left.
        Array => "array",
        /// Operations on any comparable pair.
        Generic => "generic",
    }
}

/// Determinism of an operator result.
///
/// Random as soon as one operand is random, fixed otherwise. Every operator
/// family derives its result determinism here.
///
/// # Parameters
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// The combined determinism.
#[must_use]
pub const fn result_determinism(left: &Value, right: &Value) -> Determinism {
    left.determinism().combine(right.determinism())
}

/// A binary operator from any family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// An arithmetic operator.
    Number(NumberOperator),
    /// A string operator.
    String(StringOperator),
    /// An array operator.
    Array(ArrayOperator),
    /// A generic operator.
    Generic(GenericOperator),
}

impl Operator {
    /// Every operator of every family.
    pub const ALL: [Self; 7] = [Self::Number(NumberOperator::Add),
                                Self::Number(NumberOperator::Minus),
                                Self::Number(NumberOperator::Multiply),
                                Self::Number(NumberOperator::Divide),
                                Self::String(StringOperator::Concat),
                                Self::Array(ArrayOperator::Includes),
                                Self::Generic(GenericOperator::IsEqual)];

    /// Looks up an operator by family and identifier.
    ///
    /// # Parameters
    /// - `family`: Operator family.
    /// - `name`: Identifier of the operator, e.g. `"isEqual"`.
    ///
    /// # Returns
    /// The operator, or `None` if the family has no such identifier.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::operator::{
    ///     core::{Operator, OperatorFamily},
    ///     generic::GenericOperator,
    /// };
    ///
    /// assert_eq!(Operator::from_name(OperatorFamily::Generic, "isEqual"),
    ///            Some(Operator::Generic(GenericOperator::IsEqual)));
    /// assert_eq!(Operator::from_name(OperatorFamily::Number, "concat"), None);
    /// ```
    #[must_use]
    pub fn from_name(family: OperatorFamily, name: &str) -> Option<Self> {
        match family {
            OperatorFamily::Number => NumberOperator::from_name(name).map(Self::Number),
            OperatorFamily::String => StringOperator::from_name(name).map(Self::String),
            OperatorFamily::Array => ArrayOperator::from_name(name).map(Self::Array),
            OperatorFamily::Generic => GenericOperator::from_name(name).map(Self::Generic),
        }
    }

    /// The family the operator belongs to.
    #[must_use]
    pub const fn family(self) -> OperatorFamily {
        match self {
            Self::Number(_) => OperatorFamily::Number,
            Self::String(_) => OperatorFamily::String,
            Self::Array(_) => OperatorFamily::Array,
            Self::Generic(_) => OperatorFamily::Generic,
        }
    }

    /// The identifier of the operator within its family.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number(op) => op.name(),
            Self::String(op) => op.name(),
            Self::Array(op) => op.name(),
            Self::Generic(op) => op.name(),
        }
    }

    /// Validates a pair of operand tags without evaluating anything.
    ///
    /// # Parameters
    /// - `left`: Tag of the left operand.
    /// - `right`: Tag of the right operand.
    ///
    /// # Returns
    /// `Ok(())` if the operator accepts both tags.
    pub fn check(self, left: Tag, right: Tag) -> EvalResult<()> {
        match self {
            Self::Number(op) => op.check(left, right),
            Self::String(op) => op.check(left, right),
            Self::Array(op) => op.check(left, right),
            Self::Generic(op) => op.check(left, right),
        }
    }

    /// Validates the operands and evaluates the operator.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The result of the operator wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::{
    ///     operator::{core::Operator, string::StringOperator},
    ///     value::core::Value,
    /// };
    ///
    /// let concat = Operator::String(StringOperator::Concat);
    /// let result = concat.apply(&Value::random_string("a"), &Value::string("b")).unwrap();
    ///
    /// assert_eq!(result, Value::random_string("ab"));
    /// ```
    pub fn apply(self, left: &Value, right: &Value) -> EvalResult<Value> {
        match self {
            Self::Number(op) => op.apply(left, right),
            Self::String(op) => op.apply(left, right),
            Self::Array(op) => op.apply(left, right),
            Self::Generic(op) => op.apply(left, right),
        }
    }
}

impl From<NumberOperator> for Operator {
    fn from(op: NumberOperator) -> Self {
        Self::Number(op)
    }
}

impl From<StringOperator> for Operator {
    fn from(op: StringOperator) -> Self {
        Self::String(op)
    }
}

impl From<ArrayOperator> for Operator {
    fn from(op: ArrayOperator) -> Self {
        Self::Array(op)
    }
}

impl From<GenericOperator> for Operator {
    fn from(op: GenericOperator) -> Self {
        Self::Generic(op)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.family(), self.name())
    }
}
