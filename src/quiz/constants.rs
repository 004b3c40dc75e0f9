use std::ops::RangeInclusive;

/// Largest absolute difference at which an answer still counts as correct
pub const TOLERANCE: f64 = 0.01;

pub const ADD_OPERAND_RANGE: RangeInclusive<i64> = 1..=50;
pub const SUBTRACT_MINUEND_RANGE: RangeInclusive<i64> = 26..=75;
pub const SUBTRACT_SUBTRAHEND_RANGE: RangeInclusive<i64> = 1..=25;
pub const MULTIPLY_OPERAND_RANGE: RangeInclusive<i64> = 1..=12;
pub const DIVIDE_DIVISOR_RANGE: RangeInclusive<i64> = 1..=10;
pub const DIVIDE_QUOTIENT_RANGE: RangeInclusive<i64> = 1..=10;

pub const CORRECT_MESSAGE: &str = "Correct! 🎉";
pub const INVALID_EXPRESSION_MESSAGE: &str = "Invalid mathematical expression";
