/// Numeric helpers.
///
/// Lenient integer parsing for text-to-number conversion, number formatting
/// for number-to-text conversion, and length conversion for arrays. None of
/// these fail: invalid text yields `NaN` instead of an error.
pub mod num;
