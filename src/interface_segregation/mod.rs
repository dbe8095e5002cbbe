//! Question 4: Interface Segregation
//!
//! Callers should not depend on methods they never use. The question's
//! `DataSource` hands its reader a way to write and its writer a way to read;
//! the solution gives each side its own trait.

pub mod question;
pub mod solution;
