//! Question 2: Open/Closed
//! One type per role behind the `Payroll` trait.
//!
//! Run with: cargo run --bin q02_open_closed_solution

use std::path::Path;

use solid_principles::config::{DemoConfig, DEFAULT_CONFIG_FILE};
use solid_principles::console::banner;
use solid_principles::logging;
use solid_principles::open_closed::solution::{
    total_payroll, Employee, Junior, Payroll, Principal, Senior,
};
use solid_principles::Result;

fn main() -> Result<()> {
    logging::init();
    let config = DemoConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?;
    let hours = config.hours_reported;

    println!("{}", banner("Payroll"));
    let employees: Vec<Box<dyn Employee>> = vec![
        Box::new(Junior::new("Joseph", hours)),
        Box::new(Senior::new("Petter", hours)),
        Box::new(Principal::new("John", hours)),
    ];

    for employee in &employees {
        println!(
            "{} salary: ${:.2}",
            employee.full_name(),
            employee.calculate_salary()
        );
    }
    println!("Total: ${:.2}", total_payroll(&employees));
    Ok(())
}
