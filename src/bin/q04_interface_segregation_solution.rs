//! Question 4: Interface Segregation
//! `RecordReader` and `RecordWriter` expose only what each caller needs.
//!
//! Run with: cargo run --bin q04_interface_segregation_solution

use std::path::Path;

use solid_principles::config::{DemoConfig, DEFAULT_CONFIG_FILE};
use solid_principles::console::banner;
use solid_principles::interface_segregation::solution::{
    DataSourceReader, DataSourceWriter, InMemoryDataSource, Record,
};
use solid_principles::logging;
use solid_principles::Result;

fn main() -> Result<()> {
    logging::init();
    let config = DemoConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?;

    let mut source = InMemoryDataSource::with_records(config.seed_records);

    println!("{}", banner("Writer"));
    let records = vec![Record::new(3, "Margot")];
    for record in &records {
        println!("Writing {record}");
    }
    DataSourceWriter::write_records(&mut source, records);

    println!("\n{}", banner("Reader"));
    for record in DataSourceReader::read_records(&source, &[1, 2, 3])? {
        println!("{record}");
    }
    Ok(())
}
