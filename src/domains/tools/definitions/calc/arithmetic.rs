//! Arithmetic primitives behind the calculator tools.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Integer overflow in {0}")]
    Overflow(&'static str),

    /// The quotient is infinite or NaN and has no JSON number form.
    #[error("Result is not a finite number")]
    NonFinite,
}

pub fn add(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    a.checked_add(b).ok_or(ArithmeticError::Overflow("add"))
}

pub fn subtract(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    a.checked_sub(b).ok_or(ArithmeticError::Overflow("subtract"))
}

pub fn multiply(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    a.checked_mul(b).ok_or(ArithmeticError::Overflow("multiply"))
}

pub fn divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    let quotient = a / b;
    if !quotient.is_finite() {
        return Err(ArithmeticError::NonFinite);
    }
    Ok(quotient)
}
