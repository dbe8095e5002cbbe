//! Question 3: Liskov Substitution
//! A line is a `Shape` but cannot produce an area, so the run stops there.
//!
//! Run with: cargo run --bin q03_liskov_substitution_question

use solid_principles::console::{banner, question_prompt};
use solid_principles::liskov_substitution::question::{
    CircleShape, LineShape, Shape, SquareShape,
};
use solid_principles::logging;
use solid_principles::Result;

fn main() -> Result<()> {
    logging::init();

    println!("{}", banner("Shapes (question)"));
    println!("{}\n", question_prompt());

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(CircleShape::new(5.0)),
        Box::new(SquareShape::new(7.0)),
        Box::new(LineShape),
    ];

    for shape in &shapes {
        println!("Area of shape: {:.2}", shape.area()?);
    }
    Ok(())
}
