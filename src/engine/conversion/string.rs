use crate::{
    engine::{
        tree::evaluator::EvalResult,
        value::{
            core::{Payload, Value},
            tag::{BaseType, Tag},
        },
    },
    error::EvalError,
    util::num::parse_int,
};

function_family! {
    /// Conversions accepting `string` and `random-string` values.
    pub enum StringConversion {
        /// Returns the value unchanged.
        Identity => "identity",
        /// Parses the leading integer of the text.
        ParseInt => "toNumber",
    }
}

impl StringConversion {
    /// The base category every member accepts.
    pub const SOURCE: BaseType = BaseType::String;

    /// The base category the conversion produces.
    #[must_use]
    pub const fn target(self) -> BaseType {
        match self {
            Self::Identity => BaseType::String,
            Self::ParseInt => BaseType::Number,
        }
    }

    /// Validates that `tag` is `string` or `random-string`.
    ///
    /// # Parameters
    /// - `tag`: Tag of the input.
    ///
    /// # Returns
    /// `Ok(())` if the conversion accepts the tag, otherwise a `TagMismatch`.
    pub fn check(self, tag: Tag) -> EvalResult<()> {
        if tag.is_string_like() {
            Ok(())
        } else {
            Err(EvalError::TagMismatch { function: self.name(),
                                         expected: "string or random-string",
                                         found:    tag, })
        }
    }

    /// Applies the conversion.
    ///
    /// `ParseInt` does not validate the text: input without a numeric prefix
    /// produces `NaN`, which later operators carry along.
    ///
    /// # Parameters
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The converted value, with the determinism of `value`.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::{conversion::string::StringConversion, value::core::Value};
    ///
    /// let n = StringConversion::ParseInt.apply(&Value::string("42")).unwrap();
    /// assert_eq!(n, Value::number(42.0));
    ///
    /// let nan = StringConversion::ParseInt.apply(&Value::random_string("n/a")).unwrap();
    /// assert!(nan.is_random_number());
    /// assert!(nan.as_number("test").unwrap().is_nan());
    /// ```
    pub fn apply(self, value: &Value) -> EvalResult<Value> {
        self.check(value.tag())?;

        match self {
            Self::Identity => Ok(value.clone()),
            Self::ParseInt => {
                let text = value.as_str(self.name())?;
                Ok(Value::new(Payload::Number(parse_int(text)), value.determinism()))
            },
        }
    }
}
