//! Question 2: Open/Closed
//!
//! Types should be open for extension and closed for modification. Adding a
//! role to the question's `Employee` means editing `calculate_salary`; in the
//! solution a new role is a new type implementing [`solution::Payroll`].

pub mod question;
pub mod solution;
