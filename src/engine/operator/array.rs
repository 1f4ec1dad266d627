use ordered_float::OrderedFloat;

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
    /// Operators taking an `array` or `random-array` on the left.
    pub enum ArrayOperator {
        /// Tests whether the right operand is an element of the left array.
        Includes => "includes",
    }
}

impl ArrayOperator {
    /// Validates that the left tag is an array and the right tag is not.
    ///
    /// # Parameters
    /// - `left`: Tag of the left operand.
    /// - `right`: Tag of the right operand.
    ///
    /// # Returns
    /// `Ok(())` if the operator accepts both tags.
    pub fn check(self, left: Tag, right: Tag) -> EvalResult<()> {
        if !left.is_array_like() {
            return Err(EvalError::TagMismatch { function: self.name(),
                                                expected: "array or random-array",
                                                found:    left, });
        }
        if right.is_array_like() {
            return Err(EvalError::TagMismatch { function: self.name(),
                                                expected: "a non-array value",
                                                found:    right, });
        }

        Ok(())
    }

    /// Evaluates the array operation.
    ///
    /// Membership compares payloads only; the determinism of an element does
    /// not matter. Numbers match when equal, and `NaN` matches `NaN`.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// A boolean value. It is random if either operand is random.
    ///
    /// # Example
    /// ```
    /// use opertree::engine::{operator::array::ArrayOperator, value::core::Value};
    ///
    /// let array = Value::array(vec![1.0.into(), 2.0.into()]);
    ///
    /// let found = ArrayOperator::Includes.apply(&array, &Value::number(2.0)).unwrap();
    /// assert_eq!(found, Value::boolean(true));
    ///
    /// let missing = ArrayOperator::Includes.apply(&array, &Value::random_number(5.0)).unwrap();
    /// assert_eq!(missing, Value::random_boolean(false));
    /// ```
    pub fn apply(self, left: &Value, right: &Value) -> EvalResult<Value> {
        self.check(left.tag(), right.tag())?;

        let elements = left.as_array(self.name())?;

        let result = match self {
            Self::Includes => {
                elements.iter()
                        .any(|element| same_value_zero(element.payload(), right.payload()))
            },
        };

        Ok(Value::new(Payload::Boolean(result), result_determinism(left, right)))
    }
}

/// Scalar membership equality.
///
/// Like plain equality except that `NaN` equals `NaN`. Arrays never match.
fn same_value_zero(element: &Payload, needle: &Payload) -> bool {
    match (element, needle) {
        (Payload::Number(a), Payload::Number(b)) => OrderedFloat(*a) == OrderedFloat(*b),
        (Payload::String(a), Payload::String(b)) => a == b,
        (Payload::Boolean(a), Payload::Boolean(b)) => a == b,
        _ => false,
    }
}
