use crate::engine::{
    conversion::{
        array::ArrayConversion, boolean::BooleanConversion, number::NumberConversion,
        string::StringConversion,
    },
    tree::evaluator::EvalResult,
    value::{
        core::Value,
        tag::{BaseType, Tag},
    },
};

/// A unary conversion from any of the four families.
///
/// Operator tables hold one conversion per side of a node. The wrapped family
/// decides which tags the conversion accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// A conversion from `number` / `random-number`.
    Number(NumberConversion),
    /// A conversion from `string` / `random-string`.
    String(StringConversion),
    /// A conversion from `boolean` / `random-boolean`.
    Boolean(BooleanConversion),
    /// A conversion from `array` / `random-array`.
    Array(ArrayConversion),
}

impl Conversion {
    /// The pass-through conversion for a base category.
    ///
    /// # Parameters
    /// - `base`: Base category to pass through.
    ///
    /// # Returns
    /// The identity conversion of that category.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::{
    ///     conversion::{core::Conversion, number::NumberConversion},
    ///     value::tag::BaseType,
    /// };
    ///
    /// assert_eq!(Conversion::identity(BaseType::Number),
    ///            Conversion::Number(NumberConversion::Identity));
    /// ```
    #[must_use]
    pub const fn identity(base: BaseType) -> Self {
        match base {
            BaseType::Number => Self::Number(NumberConversion::Identity),
            BaseType::String => Self::String(StringConversion::Identity),
            BaseType::Boolean => Self::Boolean(BooleanConversion::Identity),
            BaseType::Array => Self::Array(ArrayConversion::Identity),
        }
    }

    /// Looks up a conversion by the base category it accepts and its
    /// identifier.
    ///
    /// # Parameters
    /// - `source`: Base category the conversion accepts.
    /// - `name`: Identifier of the conversion, e.g. `"toNumber"`.
    ///
    /// # Returns
    /// The conversion, or `None` if the family has no such identifier.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::{
    ///     conversion::{array::ArrayConversion, core::Conversion},
    ///     value::tag::BaseType,
    /// };
    ///
    /// assert_eq!(Conversion::from_name(BaseType::Array, "length"),
    ///            Some(Conversion::Array(ArrayConversion::Length)));
    /// assert_eq!(Conversion::from_name(BaseType::Boolean, "length"), None);
    /// ```
    #[must_use]
    pub fn from_name(source: BaseType, name: &str) -> Option<Self> {
        match source {
            BaseType::Number => NumberConversion::from_name(name).map(Self::Number),
            BaseType::String => StringConversion::from_name(name).map(Self::String),
            BaseType::Boolean => BooleanConversion::from_name(name).map(Self::Boolean),
            BaseType::Array => ArrayConversion::from_name(name).map(Self::Array),
        }
    }

    /// The identifier of the conversion within its family.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number(c) => c.name(),
            Self::String(c) => c.name(),
            Self::Boolean(c) => c.name(),
            Self::Array(c) => c.name(),
        }
    }

    /// The base category the conversion accepts.
    #[must_use]
    pub const fn source(self) -> BaseType {
        match self {
            Self::Number(_) => NumberConversion::SOURCE,
            Self::String(_) => StringConversion::SOURCE,
            Self::Boolean(_) => BooleanConversion::SOURCE,
            Self::Array(_) => ArrayConversion::SOURCE,
        }
    }

    /// The base category the conversion produces.
    #[must_use]
    pub const fn target(self) -> BaseType {
        match self {
            Self::Number(c) => c.target(),
            Self::String(c) => c.target(),
            Self::Boolean(c) => c.target(),
            Self::Array(c) => c.target(),
        }
    }

    /// Validates an input tag without converting anything.
    ///
    /// # Parameters
    /// - `tag`: Tag of the input.
    ///
    /// # Returns
    /// `Ok(())` if the conversion accepts the tag, otherwise a `TagMismatch`.
    pub fn check(self, tag: Tag) -> EvalResult<()> {
        match self {
            Self::Number(c) => c.check(tag),
            Self::String(c) => c.check(tag),
            Self::Boolean(c) => c.check(tag),
            Self::Array(c) => c.check(tag),
        }
    }

    /// Validates and converts a value.
    ///
    /// # Parameters
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The converted value wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::{
    ///     conversion::{core::Conversion, string::StringConversion},
    ///     value::core::Value,
    /// };
    ///
    /// let conversion = Conversion::String(StringConversion::ParseInt);
    ///
    /// assert_eq!(conversion.apply(&Value::string("7")).unwrap(), Value::number(7.0));
    /// assert!(conversion.apply(&Value::number(7.0)).is_err());
    /// ```
    pub fn apply(self, value: &Value) -> EvalResult<Value> {
        match self {
            Self::Number(c) => c.apply(value),
            Self::String(c) => c.apply(value),
            Self::Boolean(c) => c.apply(value),
            Self::Array(c) => c.apply(value),
        }
    }
}

impl From<NumberConversion> for Conversion {
    fn from(c: NumberConversion) -> Self {
        Self::Number(c)
    }
}

impl From<StringConversion> for Conversion {
    fn from(c: StringConversion) -> Self {
        Self::String(c)
    }
}

impl From<BooleanConversion> for Conversion {
    fn from(c: BooleanConversion) -> Self {
        Self::Boolean(c)
    }
}

impl From<ArrayConversion> for Conversion {
    fn from(c: ArrayConversion) -> Self {
        Self::Array(c)
    }
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.source(), self.name())
    }
}
