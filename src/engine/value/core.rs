use std::sync::Arc;

use crate::{
    engine::{
        tree::evaluator::EvalResult,
        value::tag::{BaseType, Determinism, Tag},
    },
    error::EvalError,
    util::num::format_number,
};

/// The raw data of a value, one variant per base category.
///
/// The variant decides the base category of the owning [`Value`], so a value
/// can never carry a tag that does not match its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A text value.
    String(String),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// An ordered sequence of tagged values. Elements carry their own tags.
    Array(Arc<Vec<Value>>),
}

impl Payload {
    /// Returns the base category this payload belongs to.
    #[must_use]
    pub const fn base(&self) -> BaseType {
        match self {
            Self::Number(_) => BaseType::Number,
            Self::String(_) => BaseType::String,
            Self::Boolean(_) => BaseType::Boolean,
            Self::Array(_) => BaseType::Array,
        }
    }
}

/// Represents a tagged value.
///
/// A value is a payload plus a determinism label. Its [`Tag`] is derived from
/// both and is never stored separately.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    payload:     Payload,
    determinism: Determinism,
}

impl Value {
    /// Creates a value from a payload and a determinism.
    ///
    /// # Parameters
    /// - `payload`: Contents of the value.
    /// - `determinism`: Whether the value is fixed or random.
    #[must_use]
    pub const fn new(payload: Payload, determinism: Determinism) -> Self {
        Self { payload,
               determinism }
    }

    /// Creates a `number` value.
    #[must_use]
    pub const fn number(n: f64) -> Self {
        Self::new(Payload::Number(n), Determinism::Fixed)
    }

    /// Creates a `random-number` value.
    #[must_use]
    pub const fn random_number(n: f64) -> Self {
        Self::new(Payload::Number(n), Determinism::Random)
    }

    /// Creates a `string` value.
    #[must_use]
    pub fn string(s: impl Into<String>) -> Self {
        Self::new(Payload::String(s.into()), Determinism::Fixed)
    }

    /// Creates a `random-string` value.
    #[must_use]
    pub fn random_string(s: impl Into<String>) -> Self {
        Self::new(Payload::String(s.into()), Determinism::Random)
    }

    /// Creates a `boolean` value.
    #[must_use]
    pub const fn boolean(b: bool) -> Self {
        Self::new(Payload::Boolean(b), Determinism::Fixed)
    }

    /// Creates a `random-boolean` value.
    #[must_use]
    pub const fn random_boolean(b: bool) -> Self {
        Self::new(Payload::Boolean(b), Determinism::Random)
    }

    /// Creates an `array` value.
    #[must_use]
    pub fn array(elements: Vec<Self>) -> Self {
        Self::new(Payload::Array(Arc::new(elements)), Determinism::Fixed)
    }

    /// Creates a `random-array` value.
    #[must_use]
    pub fn random_array(elements: Vec<Self>) -> Self {
        Self::new(Payload::Array(Arc::new(elements)), Determinism::Random)
    }

    /// Returns the tag of the value.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::value::{core::Value, tag::Tag};
    ///
    /// assert_eq!(Value::random_string("x").tag(), Tag::RandomString);
    /// assert_eq!(Value::array(vec![]).tag(), Tag::Array);
    /// ```
    #[must_use]
    pub const fn tag(&self) -> Tag {
        Tag::new(self.payload.base(), self.determinism)
    }

    /// Returns the base category of the value.
    #[must_use]
    pub const fn base(&self) -> BaseType {
        self.payload.base()
    }

    /// Returns the determinism of the value.
    #[must_use]
    pub const fn determinism(&self) -> Determinism {
        self.determinism
    }

    /// Returns the raw payload.
    #[must_use]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Returns the same payload with a different determinism.
    ///
    /// # Parameters
    /// - `determinism`: The new determinism.
    ///
    /// # Returns
    /// The same payload with `determinism`.
    #[must_use]
    pub fn with_determinism(self, determinism: Determinism) -> Self {
        Self { determinism,
               ..self }
    }

    /// Returns `true` if the value is tagged `number`.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        self.tag().is_number()
    }

    /// Returns `true` if the value is tagged `random-number`.
    #[must_use]
    pub const fn is_random_number(&self) -> bool {
        self.tag().is_random_number()
    }

    /// Returns `true` if the value is tagged `string`.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        self.tag().is_string()
    }

    /// Returns `true` if the value is tagged `random-string`.
    #[must_use]
    pub const fn is_random_string(&self) -> bool {
        self.tag().is_random_string()
    }

    /// Returns `true` if the value is tagged `boolean`.
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        self.tag().is_boolean()
    }

    /// Returns `true` if the value is tagged `random-boolean`.
    #[must_use]
    pub const fn is_random_boolean(&self) -> bool {
        self.tag().is_random_boolean()
    }

    /// Returns `true` if the value is tagged `array`.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        self.tag().is_array()
    }

    /// Returns `true` if the value is tagged `random-array`.
    #[must_use]
    pub const fn is_random_array(&self) -> bool {
        self.tag().is_random_array()
    }

    /// Returns the number payload, or a tag mismatch if the value is not a
    /// number.
    ///
    /// # Parameters
    /// - `function`: Name of the caller, used in the error.
    ///
    /// # Returns
    /// The number wrapped in `EvalResult`.
    pub fn as_number(&self, function: &'static str) -> EvalResult<f64> {
        match self.payload {
            Payload::Number(n) => Ok(n),
            _ => Err(self.mismatch(function, "number or random-number")),
        }
    }

    /// Returns the string payload, or a tag mismatch if the value is not a
    /// string.
    ///
    /// # Parameters
    /// - `function`: Name of the caller, used in the error.
    ///
    /// # Returns
    /// The text wrapped in `EvalResult`.
    pub fn as_str(&self, function: &'static str) -> EvalResult<&str> {
        match &self.payload {
            Payload::String(s) => Ok(s),
            _ => Err(self.mismatch(function, "string or random-string")),
        }
    }

    /// Returns the boolean payload, or a tag mismatch if the value is not a
    /// boolean.
    ///
    /// # Parameters
    /// - `function`: Name of the caller, used in the error.
    ///
    /// # Returns
    /// The boolean wrapped in `EvalResult`.
    pub fn as_bool(&self, function: &'static str) -> EvalResult<bool> {
        match self.payload {
            Payload::Boolean(b) => Ok(b),
            _ => Err(self.mismatch(function, "boolean or random-boolean")),
        }
    }

    /// Returns the array elements, or a tag mismatch if the value is not an
    /// array.
    ///
    /// # Parameters
    /// - `function`: Name of the caller, used in the error.
    ///
    /// # Returns
    /// The elements wrapped in `EvalResult`.
    pub fn as_array(&self, function: &'static str) -> EvalResult<&[Self]> {
        match &self.payload {
            Payload::Array(elements) => Ok(elements),
            _ => Err(self.mismatch(function, "array or random-array")),
        }
    }

    /// Builds the tag mismatch error for this value.
    ///
    /// # Parameters
    /// - `function`: Name of the conversion or operator rejecting the value.
    /// - `expected`: Description of the accepted tags.
    ///
    /// # Returns
    /// A `TagMismatch` naming the tag of this value.
    #[must_use]
    pub const fn mismatch(&self, function: &'static str, expected: &'static str) -> EvalError {
        EvalError::TagMismatch { function,
                                 expected,
                                 found: self.tag() }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::string(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::boolean(b)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::array(v)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.determinism.is_random() {
            write!(f, "random ")?;
        }

        match &self.payload {
            Payload::Number(n) => write!(f, "{}", format_number(*n)),
            Payload::String(s) => write!(f, "{s:?}"),
            Payload::Boolean(b) => write!(f, "{b}"),
            Payload::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}
