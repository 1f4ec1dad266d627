use crate::{
    engine::{
        tree::evaluator::EvalResult,
        value::{
            core::{Payload, Value},
            tag::{BaseType, Tag},
        },
    },
    error::EvalError,
    util::num::length_to_f64,
};

function_family! {
    /// Conversions accepting `array` and `random-array` values.
    pub enum ArrayConversion {
        /// Returns the value unchanged.
        Identity => "identity",
        /// Counts the elements.
        Length => "length",
    }
}

impl ArrayConversion {
    /// The base category every member accepts.
    pub const SOURCE: BaseType = BaseType::Array;

    /// The base category the conversion produces.
    #[must_use]
    pub const fn target(self) -> BaseType {
        match self {
            Self::Identity => BaseType::Array,
            Self::Length => BaseType::Number,
        }
    }

    /// Validates that `tag` is `array` or `random-array`.
    ///
    /// # Parameters
    /// - `tag`: Tag of the input.
    ///
    /// # Returns
    /// `Ok(())` if the conversion accepts the tag, otherwise a `TagMismatch`.
    pub fn check(self, tag: Tag) -> EvalResult<()> {
        if tag.is_array_like() {
            Ok(())
        } else {
            Err(EvalError::TagMismatch { function: self.name(),
                                         expected: "array or random-array",
                                         found:    tag, })
        }
    }

    /// Applies the conversion.
    ///
    /// `Length` counts only the top level; nested arrays count as one
    /// element each.
    ///
    /// # Parameters
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The converted value, with the determinism of `value`.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::{conversion::array::ArrayConversion, value::core::Value};
    ///
    /// let array = Value::random_array(vec![1.0.into(), "two".into(), Value::array(vec![])]);
    /// let length = ArrayConversion::Length.apply(&array).unwrap();
    ///
    /// assert_eq!(length, Value::random_number(3.0));
    /// ```
    pub fn apply(self, value: &Value) -> EvalResult<Value> {
        self.check(value.tag())?;

        match self {
            Self::Identity => Ok(value.clone()),
            Self::Length => {
                let elements = value.as_array(self.name())?;
                Ok(Value::new(Payload::Number(length_to_f64(elements.len())),
                              value.determinism()))
            },
        }
    }
}
