//! Question 3: Liskov Substitution
//! Only two-dimensional shapes are asked for an area.
//!
//! Run with: cargo run --bin q03_liskov_substitution_solution

use solid_principles::console::banner;
use solid_principles::liskov_substitution::solution::{
    areas, total_length, CircleShape, LineShape, Shape, SquareShape,
};
use solid_principles::logging;

fn main() {
    logging::init();

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(CircleShape::new(5.0)),
        Box::new(SquareShape::new(7.0)),
        Box::new(LineShape::new(4.0)),
    ];

    println!("{}", banner("Shapes"));
    for shape in &shapes {
        println!("Shape: {}", shape.name());
    }

    println!("\n{}", banner("Two-dimensional"));
    for area in areas(&shapes) {
        println!("Area of shape: {area:.2}");
    }

    println!("\n{}", banner("One-dimensional"));
    println!("Total length: {:.2}", total_length(&shapes));
}
