//! # SOLID Principles in Rust
//!
//! Five question/solution pairs, one per principle. Each `question` module
//! holds a deliberately flawed design; the sibling `solution` module refactors it.
//!
//! ## Question 1: Single Responsibility
//! - A widget repository that also creates and renames widgets
//! - Split into repository, factory and operations
//!
//! ## Question 2: Open/Closed
//! - Salary calculation switching on a role string
//! - One type per role behind a `Payroll` trait
//!
//! ## Question 3: Liskov Substitution
//! - A line that cannot honour `Shape::area`
//! - One-dimensional and two-dimensional shape traits
//!
//! ## Question 4: Interface Segregation
//! - A data source trait that forces readers to see writes and vice versa
//! - Separate `RecordReader` and `RecordWriter` traits
//!
//! ## Question 5: Dependency Inversion
//! - Math operations coupled to a concrete screen logger
//! - A `Logger` trait injected at construction
//!
//! Run a demo with: `cargo run --bin q01_single_responsibility_solution`

pub mod config;
pub mod console;
pub mod dependency_inversion;
pub mod error;
pub mod interface_segregation;
pub mod liskov_substitution;
pub mod logging;
pub mod open_closed;
pub mod single_responsibility;

pub use config::DemoConfig;
pub use error::{Result, SolidError};
