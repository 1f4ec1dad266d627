use crate::engine::value::{core::Value, tag::Tag};

/// Returns `true` if two tags belong to the same base category.
///
/// Determinism is ignored: `number` and `random-number` are comparable, while
/// `number` and `string` are not. This is the only comparability rule in the
/// crate; generic equality and the static tree checker both go through it.
///
/// # Parameters
/// - `left`: Tag of the left operand.
/// - `right`: Tag of the right operand.
///
/// # Returns
/// `true` if both tags share a base category.
///
/// # Example
/// ```
/// use opertree::engine::value::{comparable::tags_comparable, tag::Tag};
///
/// assert!(tags_comparable(Tag::Number, Tag::RandomNumber));
/// assert!(tags_comparable(Tag::RandomArray, Tag::Array));
/// assert!(!tags_comparable(Tag::Boolean, Tag::String));
/// ```
#[must_use]
pub const fn tags_comparable(left: Tag, right: Tag) -> bool {
    left.base() as u8 == right.base() as u8
}

/// Returns `true` if two values belong to the same base category.
///
/// # Parameters
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// `true` if both values share a base category.
///
/// # Example
/// ```
/// use opertree::engine::value::{comparable::comparable, core::Value};
///
/// assert!(comparable(&Value::number(1.0), &Value::random_number(2.0)));
/// assert!(!comparable(&Value::string("1"), &Value::number(1.0)));
/// ```
#[must_use]
pub const fn comparable(left: &Value, right: &Value) -> bool {
    tags_comparable(left.tag(), right.tag())
}
