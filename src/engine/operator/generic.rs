use crate::{
    engine::{
        operator::core::result_determinism,
        tree::evaluator::EvalResult,
        value::{
            comparable::tags_comparable,
            core::{Payload, Value},
            tag::Tag,
        },
    },
    error::EvalError,
};

function_family! {
    /// Operators accepting any two comparable operands.
    pub enum GenericOperator {
        /// Tests the operands for equality.
        IsEqual => "isEqual",
    }
}

impl GenericOperator {
    /// Validates that the operand tags are comparable.
    ///
    /// # Parameters
    /// - `left`: Tag of the left operand.
    /// - `right`: Tag of the right operand.
    ///
    /// # Returns
    /// `Ok(())` if the operator accepts both tags.
    pub fn check(self, left: Tag, right: Tag) -> EvalResult<()> {
        if tags_comparable(left, right) {
            Ok(())
        } else {
            Err(EvalError::NotComparable { function: self.name(),
                                           left,
                                           right })
        }
    }

    /// Evaluates the generic operation.
    ///
    /// Arrays are compared deeply, element by element, on payloads only.
    /// Numbers use IEEE 754 equality, so `NaN` is never equal to itself.
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
    /// use opertree::engine::{operator::generic::GenericOperator, value::core::Value};
    ///
    /// let left = Value::array(vec![1.0.into(), "a".into()]);
    /// let right = Value::random_array(vec![1.0.into(), "a".into()]);
    ///
    /// let equal = GenericOperator::IsEqual.apply(&left, &right).unwrap();
    /// assert_eq!(equal, Value::random_boolean(true));
    ///
    /// assert!(GenericOperator::IsEqual.apply(&Value::number(1.0), &Value::string("1"))
    ///                                 .is_err());
    /// ```
    pub fn apply(self, left: &Value, right: &Value) -> EvalResult<Value> {
        self.check(left.tag(), right.tag())?;

        let result = match self {
            Self::IsEqual => payloads_equal(left.payload(), right.payload()),
        };

        Ok(Value::new(Payload::Boolean(result), result_determinism(left, right)))
    }
}

/// Structural equality of two payloads, ignoring determinism at every level.
///
/// # Parameters
/// - `left`: Left payload.
/// - `right`: Right payload.
///
/// # Returns
/// `true` if both payloads have the same category and equal contents.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn payloads_equal(left: &Payload, right: &Payload) -> bool {
    match (left, right) {
        (Payload::Number(a), Payload::Number(b)) => a == b,
        (Payload::String(a), Payload::String(b)) => a == b,
        (Payload::Boolean(a), Payload::Boolean(b)) => a == b,
        (Payload::Array(a), Payload::Array(b)) => {
            a.len() == b.len()
            && a.iter()
                .zip(b.iter())
                .all(|(x, y)| payloads_equal(x.payload(), y.payload()))
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_arrays_compare_deeply() {
        let a = Value::array(vec![Value::array(vec![1.0.into()]), true.into()]);
        let b = Value::array(vec![Value::random_array(vec![1.0.into()]), true.into()]);
        let c = Value::array(vec![Value::array(vec![2.0.into()]), true.into()]);

        assert!(payloads_equal(a.payload(), b.payload()));
        assert!(!payloads_equal(a.payload(), c.payload()));
    }

    #[test]
    fn arrays_of_different_length_differ() {
        let a = Value::array(vec![1.0.into()]);
        let b = Value::array(vec![1.0.into(), 1.0.into()]);

        assert!(!payloads_equal(a.payload(), b.payload()));
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        assert!(!payloads_equal(&Payload::Number(f64::NAN), &Payload::Number(f64::NAN)));
    }
}
