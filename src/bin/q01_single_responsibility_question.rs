//! Question 1: Single Responsibility
//! The repository stores, creates and renames widgets all by itself.
//!
//! Run with: cargo run --bin q01_single_responsibility_question

use solid_principles::console::{banner, question_prompt};
use solid_principles::logging;
use solid_principles::single_responsibility::question::WidgetRepository;
use solid_principles::Result;

fn main() -> Result<()> {
    logging::init();

    println!("{}", banner("Widget Repository (question)"));
    let mut repository = WidgetRepository::new();

    let mut widget = repository.create_widget("gear");
    repository.change_widget_name(&mut widget, "Sprocket");
    repository.add_widget(widget);

    let found = repository.get_widget_by_name("sprocket")?;
    println!("Found widget: {}", found.name());
    println!("Widgets stored: {}", repository.len());

    println!("\n{}", question_prompt());
    Ok(())
}
