use crate::{
    engine::{
        tree::evaluator::EvalResult,
        value::{
            core::{Payload, Value},
            tag::{BaseType, Tag},
        },
    },
    error::EvalError,
    util::num::format_number,
};

function_family! {
    /// Conversions accepting `number` and `random-number` values.
    pub enum NumberConversion {
        /// Returns the value unchanged.
        Identity => "identity",
        /// Formats the number as text.
        Stringify => "toString",
    }
}

impl NumberConversion {
    /// The base category every member accepts.
    pub const SOURCE: BaseType = BaseType::Number;

    /// The base category the conversion produces.
    #[must_use]
    pub const fn target(self) -> BaseType {
        match self {
            Self::Identity => BaseType::Number,
            Self::Stringify => BaseType::String,
        }
    }

    /// Validates that `tag` is `number` or `random-number`.
    ///
    /// # Parameters
    /// - `tag`: Tag of the input.
    ///
    /// # Returns
    /// `Ok(())` if the conversion accepts the tag, otherwise a `TagMismatch`.
    pub fn check(self, tag: Tag) -> EvalResult<()> {
        if tag.is_number_like() {
            Ok(())
        } else {
            Err(EvalError::TagMismatch { function: self.name(),
                                         expected: "number or random-number",
                                         found:    tag, })
        }
    }

    /// Applies the conversion.
    ///
    /// The determinism of the input is kept.
    ///
    /// # Parameters
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The converted value, with the determinism of `value`.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::{
    ///     conversion::number::NumberConversion,
    ///     value::{core::Value, tag::Tag},
    /// };
    ///
    /// let text = NumberConversion::Stringify.apply(&Value::random_number(12.5)).unwrap();
    /// assert_eq!(text, Value::random_string("12.5"));
    /// assert_eq!(text.tag(), Tag::RandomString);
    ///
    /// assert!(NumberConversion::Identity.apply(&Value::string("12")).is_err());
    /// ```
    pub fn apply(self, value: &Value) -> EvalResult<Value> {
        self.check(value.tag())?;

        match self {
            Self::Identity => Ok(value.clone()),
            Self::Stringify => {
                let n = value.as_number(self.name())?;
                Ok(Value::new(Payload::String(format_number(n)), value.determinism()))
            },
        }
    }
}
