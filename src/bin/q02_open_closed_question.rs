//! Question 2: Open/Closed
//! Salaries come from a switch over the role name.
//!
//! Run with: cargo run --bin q02_open_closed_question

use std::path::Path;

use solid_principles::config::{DemoConfig, DEFAULT_CONFIG_FILE};
use solid_principles::console::{banner, question_prompt};
use solid_principles::logging;
use solid_principles::open_closed::question::Employee;
use solid_principles::Result;

fn main() -> Result<()> {
    logging::init();
    let config = DemoConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?;
    let hours = config.hours_reported;

    println!("{}", banner("Payroll (question)"));
    let employees = [
        Employee::new("Joseph", "Junior"),
        Employee::new("Petter", "Senior"),
        Employee::new("John", "Principal"),
    ];
    for employee in &employees {
        println!(
            "{} salary: ${:.2}",
            employee.full_name(),
            employee.calculate_salary(hours)
        );
    }

    println!("\n{}", question_prompt());
    Ok(())
}
