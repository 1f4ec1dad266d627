use crate::{
    engine::{
        operator::core::result_determinism,
        tree::evaluator::EvalResult,
        value::{
            core::{Payload, Value},
            tag::Tag,
        },
    },
    error::EvalError,
};

function_family! {
    /// Operators over `string` and `random-string` operands.
    pub enum StringOperator {
        /// Joins the left and right text.
        Concat => "concat",
    }
}

impl StringOperator {
    /// Validates that both operand tags are strings.
    ///
    /// # Parameters
    /// - `left`: Tag of the left operand.
    /// - `right`: Tag of the right operand.
    ///
    /// # Returns
    /// `Ok(())` if the operator accepts both tags.
    pub fn check(self, left: Tag, right: Tag) -> EvalResult<()> {
        for tag in [left, right] {
            if !tag.is_string_like() {
                return Err(EvalError::TagMismatch { function: self.name(),
                                                    expected: "string or random-string",
                                                    found:    tag, });
            }
        }

        Ok(())
    }

    /// Evaluates the string operation.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// A string value. It is random if either operand is random.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::{operator::string::StringOperator, value::core::Value};
    ///
    /// let joined = StringOperator::Concat.apply(&Value::string("ab"), &Value::string("cd"))
    ///                                    .unwrap();
    /// assert_eq!(joined, Value::string("abcd"));
    /// ```
    pub fn apply(self, left: &Value, right: &Value) -> EvalResult<Value> {
        self.check(left.tag(), right.tag())?;

        let l = left.as_str(self.name())?;
        let r = right.as_str(self.name())?;

        let result = match self {
            Self::Concat => format!("{l}{r}"),
        };

        Ok(Value::new(Payload::String(result), result_determinism(left, right)))
    }
}
