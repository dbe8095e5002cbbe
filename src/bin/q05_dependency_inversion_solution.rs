//! Question 5: Dependency Inversion
//! The logger is injected, so the same operations can go to screen or file.
//!
//! Run with: cargo run --bin q05_dependency_inversion_solution

use std::fs;
use std::path::Path;

use solid_principles::config::{DemoConfig, DEFAULT_CONFIG_FILE};
use solid_principles::console::banner;
use solid_principles::dependency_inversion::solution::{
    FileLogger, Logger, MathOperations, ScreenLogger,
};
use solid_principles::logging;
use solid_principles::Result;

fn run<L: Logger>(math: &MathOperations<L>) {
    math.add(3.0, 5.0);
    math.subtract(8.0, 12.0);
}

fn main() -> Result<()> {
    logging::init();
    let config = DemoConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?;

    println!("{}", banner("Screen Logger"));
    run(&MathOperations::new(ScreenLogger));

    println!("\n{}", banner("File Logger"));
    if let Some(dir) = config.log_path.parent() {
        fs::create_dir_all(dir)?;
    }
    let math = MathOperations::new(FileLogger::new(&config.log_path));
    run(&math);
    println!("Appended 2 lines to {}", math.logger().file_path().display());
    Ok(())
}
