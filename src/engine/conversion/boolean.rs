use crate::{
    engine::{
        tree::evaluator::EvalResult,
        value::{
            core::Value,
            tag::{BaseType, Tag},
        },
    },
    error::EvalError,
};

function_family! {
    /// Conversions accepting `boolean` and `random-boolean` values.
    pub enum BooleanConversion {
        /// Returns the value unchanged.
        Identity => "identity",
    }
}

impl BooleanConversion {
    /// The base category every member accepts.
    pub const SOURCE: BaseType = BaseType::Boolean;

    /// The base category the conversion produces.
    #[must_use]
    pub const fn target(self) -> BaseType {
        match self {
            Self::Identity => BaseType::Boolean,
        }
    }

    /// Validates that `tag` is `boolean` or `random-boolean`.
    ///
    /// # Parameters
    /// - `tag`: Tag of the input.
    ///
    /// # Returns
    /// `Ok(())` if the conversion accepts the tag, otherwise a `TagMismatch`.
    pub fn check(self, tag: Tag) -> EvalResult<()> {
        if tag.is_boolean_like() {
            Ok(())
        } else {
            Err(EvalError::TagMismatch { function: self.name(),
                                         expected: "boolean or random-boolean",
                                         found:    tag, })
        }
    }

    /// Applies the conversion.
    ///
    /// # Parameters
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The converted value, with the determinism of `value`.
    pub fn apply(self, value: &Value) -> EvalResult<Value> {
        self.check(value.tag())?;

        match self {
            Self::Identity => Ok(value.clone()),
        }
    }
}
