use crate::engine::{
    conversion::{
        array::ArrayConversion, boolean::BooleanConversion, core::Conversion,
        number::NumberConversion, string::StringConversion,
    },
    operator::{
        array::ArrayOperator,
        core::{Operator, OperatorFamily},
        generic::GenericOperator,
        number::NumberOperator,
        string::StringOperator,
    },
    value::tag::{Determinism, Tag},
};

/// The tags a function produces, one per determinism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultType {
    /// The tag produced when every input is deterministic.
    pub fixed:  Tag,
    /// The tag produced when at least one input is random.
    pub random: Tag,
}

impl ResultType {
    const NUMBER: Self = Self { fixed:  Tag::Number,
                                random: Tag::RandomNumber, };
    const STRING: Self = Self { fixed:  Tag::String,
                                random: Tag::RandomString, };
    const BOOLEAN: Self = Self { fixed:  Tag::Boolean,
                                 random: Tag::RandomBoolean, };
    const ARRAY: Self = Self { fixed:  Tag::Array,
                               random: Tag::RandomArray, };

    /// Picks the tag for a determinism.
    ///
    /// # Parameters
    /// - `determinism`: Determinism of the result, usually the combined
    ///   determinism of the inputs.
    ///
    /// # Returns
    /// `fixed` for [`Determinism::Fixed`], `random` for
    /// [`Determinism::Random`].
    #[must_use]
    pub const fn select(self, determinism: Determinism) -> Tag {
        match determinism {
            Determinism::Fixed => self.fixed,
            Determinism::Random => self.random,
        }
    }
}

/// The result types of an operator.
///
/// Every operator is listed explicitly, so adding an operator without an
/// entry here does not compile.
///
/// # Parameters
/// - `operator`: Any operator.
///
/// # Returns
/// The fixed and random result tags of the operator.
///
/// # Example
/// ```
/// use opertree::engine::{
///     operator::{array::ArrayOperator, core::Operator},
///     result_type::table::operator_result_type,
///     value::tag::Tag,
/// };
///
/// let includes = operator_result_type(Operator::Array(ArrayOperator::Includes));
///
/// assert_eq!(includes.fixed, Tag::Boolean);
/// assert_eq!(includes.random, Tag::RandomBoolean);
/// ```
#[must_use]
pub const fn operator_result_type(operator: Operator) -> ResultType {
    match operator {
        Operator::Number(NumberOperator::Add
                         | NumberOperator::Minus
                         | NumberOperator::Multiply
                         | NumberOperator::Divide) => ResultType::NUMBER,
        Operator::String(StringOperator::Concat) => ResultType::STRING,
        Operator::Array(ArrayOperator::Includes)
        | Operator::Generic(GenericOperator::IsEqual) => ResultType::BOOLEAN,
    }
}

/// The result types of a conversion.
///
/// Conversions keep the determinism of their input, so `select` is called
/// with the input's determinism.
///
/// # Parameters
/// - `conversion`: Any conversion.
///
/// # Returns
/// The fixed and random result tags of the conversion.
#[must_use]
pub const fn conversion_result_type(conversion: Conversion) -> ResultType {
    match conversion {
        Conversion::Number(NumberConversion::Identity)
        | Conversion::String(StringConversion::ParseInt)
        | Conversion::Array(ArrayConversion::Length) => ResultType::NUMBER,
        Conversion::Number(NumberConversion::Stringify)
        | Conversion::String(StringConversion::Identity) => ResultType::STRING,
        Conversion::Boolean(BooleanConversion::Identity) => ResultType::BOOLEAN,
        Conversion::Array(ArrayConversion::Identity) => ResultType::ARRAY,
    }
}

/// Predicts the tag an operator produces, looked up by family and
/// identifier.
///
/// Returns `None` if the family has no operator with that identifier.
///
/// # Parameters
/// - `family`: The operator family.
/// - `name`: The operator identifier, e.g. `"add"`.
/// - `is_random`: Whether at least one operand is random.
///
/// # Returns
/// The predicted tag, or `None` for an unknown identifier.
///
/// # Example
/// ```
/// use opertree::engine::{
///     operator::core::OperatorFamily, result_type::table::predicted_tag, value::tag::Tag,
/// };
///
/// assert_eq!(predicted_tag(OperatorFamily::Number, "add", false), Some(Tag::Number));
/// assert_eq!(predicted_tag(OperatorFamily::Number, "add", true), Some(Tag::RandomNumber));
/// assert_eq!(predicted_tag(OperatorFamily::String, "concat", true), Some(Tag::RandomString));
/// assert_eq!(predicted_tag(OperatorFamily::Generic, "add", false), None);
/// ```
#[must_use]
pub fn predicted_tag(family: OperatorFamily, name: &str, is_random: bool) -> Option<Tag> {
    let determinism = Determinism::from_random_flag(is_random);

    Operator::from_name(family, name).map(|operator| {
                                         operator_result_type(operator).select(determinism)
                                     })
}
