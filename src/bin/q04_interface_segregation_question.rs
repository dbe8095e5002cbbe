//! Question 4: Interface Segregation
//! Reader and writer share one fat `DataSource` trait.
//!
//! Run with: cargo run --bin q04_interface_segregation_question

use solid_principles::console::{banner, question_prompt};
use solid_principles::interface_segregation::question::{
    DataSource, DataSourceReader, DataSourceWriter, InMemoryDataSource, Record,
};
use solid_principles::logging;
use solid_principles::Result;

fn record(id: i32, name: &str) -> Record {
    let mut record = Record::default();
    record.set_id(id);
    record.set_name(name);
    record
}

fn main() -> Result<()> {
    logging::init();

    println!("{}", banner("Records (question)"));
    let mut source = InMemoryDataSource::default();
    DataSourceWriter::write_records(&mut source, vec![record(1, "Jeff"), record(2, "Luca")]);

    // Nothing stops the reading side from writing.
    source.write_record(record(3, "Margot"));

    for record in DataSourceReader::read_records(&mut source, &[1, 2, 3])? {
        println!("{record}");
    }

    println!("\n{}", question_prompt());
    Ok(())
}
