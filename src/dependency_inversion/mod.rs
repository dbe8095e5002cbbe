//! Question 5: Dependency Inversion
//!
//! High-level code should depend on an abstraction, not on a concrete
//! low-level type. The question's `MathOperations` owns a `ScreenLogger`
//! outright; the solution takes any [`solution::Logger`] at construction.

pub mod question;
pub mod solution;

/// `"{a} {op} {b} = {result}"`, the line both variants log.
pub(crate) fn describe(a: f64, op: char, b: f64, result: f64) -> String {
    format!("{a} {op} {b} = {result}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(describe(3.0, '+', 5.0, 8.0), "3 + 5 = 8");
        assert_eq!(describe(8.0, '-', 12.5, -4.5), "8 - 12.5 = -4.5");
    }
}
