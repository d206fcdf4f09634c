pub mod operation;

pub use operation::Operation;

use log::debug;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b` with IEEE-754 semantics.
///
/// A zero divisor is not an error: the result is signed infinity, or NaN
/// when `a` is also zero.
pub fn divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        debug!("Dividing {} by zero", a);
    }
    a / b
}
