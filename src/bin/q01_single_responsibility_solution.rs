//! Question 1: Single Responsibility
//! Repository, factory and operations each have one job.
//!
//! Run with: cargo run --bin q01_single_responsibility_solution

use solid_principles::console::{banner, failure};
use solid_principles::logging;
use solid_principles::single_responsibility::solution::{
    Widget, WidgetFactory, WidgetOperations, WidgetRepository,
};
use solid_principles::Result;

fn main() -> Result<()> {
    logging::init();

    println!("{}", banner("Factory"));
    let mut repository = WidgetRepository::new();
    for name in ["Gear", "Spring", "Lever"] {
        let widget = WidgetFactory::create_widget(name);
        println!("Created widget: {}", widget.name());
        repository.add_widget(widget);
    }

    println!("\n{}", banner("Operations"));
    let spring = repository.get_widget_by_name_mut("spring")?;
    WidgetOperations::change_widget_name(spring, "Coil");
    println!("Renamed 'Spring' to '{}'", spring.name());

    println!("\n{}", banner("Repository"));
    let removed = repository.remove_widget(&Widget::new("Lever"));
    println!("Removed: {:?}", removed.map(|w| w.name().to_string()));
    for widget in &repository {
        println!("Stored: {}", widget.name());
    }

    match repository.get_widget_by_name("Lever") {
        Ok(widget) => println!("Found: {}", widget.name()),
        Err(err) => println!("{}", failure(&err.to_string())),
    }
    Ok(())
}
