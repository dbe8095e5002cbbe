//! Question 5: Dependency Inversion
//! `MathOperations` can only ever log to the screen.
//!
//! Run with: cargo run --bin q05_dependency_inversion_question

use solid_principles::console::{banner, question_prompt};
use solid_principles::dependency_inversion::question::{MathOperations, ScreenLogger};
use solid_principles::logging;

fn main() {
    logging::init();

    println!("{}", banner("Math Operations (question)"));
    let math = MathOperations::new(ScreenLogger);
    let result = math.add(3.0, 5.0);
    math.subtract(result, 12.0);

    println!("\n{}", question_prompt());
}
