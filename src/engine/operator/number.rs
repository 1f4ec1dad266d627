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
    /// Arithmetic operators over `number` and `random-number` operands.
    pub enum NumberOperator {
        /// `left + right`
        Add => "add",
        /// `left - right`
        Minus => "minus",
        /// `left * right`
        Multiply => "multiply",
        /// `left / right`
        Divide => "divide",
    }
}

impl NumberOperator {
    /// Validates that both operand tags are numbers.
    ///
    /// # Parameters
    /// - `left`: Tag of the left operand.
    /// - `right`: Tag of the right operand.
    ///
    /// # Returns
    /// `Ok(())` if the operator accepts both tags.
    pub fn check(self, left: Tag, right: Tag) -> EvalResult<()> {
        for tag in [left, right] {
            if !tag.is_number_like() {
                return Err(EvalError::TagMismatch { function: self.name(),
                                                    expected: "number or random-number",
                                                    found:    tag, });
            }
        }

        Ok(())
    }

    /// Evaluates the arithmetic operation.
    ///
    /// Plain IEEE 754 arithmetic: dividing by zero yields an infinity or
    /// `NaN`, not an error.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// A `number`, or a `random-number` if either operand is random.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::{operator::number::NumberOperator, value::core::Value};
    ///
    /// let sum = NumberOperator::Add.apply(&Value::number(2.0), &Value::random_number(3.0))
    ///                              .unwrap();
    /// assert_eq!(sum, Value::random_number(5.0));
    ///
    /// let quotient = NumberOperator::Divide.apply(&Value::number(1.0), &Value::number(0.0))
    ///                                      .unwrap();
    /// assert_eq!(quotient, Value::number(f64::INFINITY));
    /// ```
    pub fn apply(self, left: &Value, right: &Value) -> EvalResult<Value> {
        self.check(left.tag(), right.tag())?;

        let l = left.as_number(self.name())?;
        let r = right.as_number(self.name())?;

        let result = match self {
            Self::Add => l + r,
            Self::Minus => l - r,
            Self::Multiply => l * r,
            Self::Divide => l / r,
        };

        Ok(Value::new(Payload::Number(result), result_determinism(left, right)))
    }
}
