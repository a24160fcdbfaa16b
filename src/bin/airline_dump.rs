use airline_data::{catalog::airline_schema, common::Error, config::Config, loader::Loader};
use anyhow::Context;
use indexmap::IndexMap;

const DUMP_ROW_COUNT: usize = 3;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env()?;
    if !config.db_path.exists() {
        println!("Database {} does not exist", config.db_path.display());
        return Ok(());
    }

    let loader = Loader::open(&config.db_path)?;

    for (table_name, table_schema) in &airline_schema().tables {
        println!("Table #{table_name}");
        println!(
            "\tSCHEMA = {}",
            serde_json::to_string(table_schema).context("Failed serializing schema")?
        );

        println!("\tROWS = {}", loader.row_count(table_name)?);

        let rows = loader.sample_rows(table_name, DUMP_ROW_COUNT)?;
        for (row_idx, row) in rows.iter().enumerate() {
            let json_row: IndexMap<&str, serde_json::Value> = row
                .iter()
                .map(|(column, value)| (column.as_str(), value.to_json()))
                .collect();
            println!(
                "\tRow #{row_idx}: {}",
                serde_json::to_string(&json_row).context("Failed serializing row")?
            );
        }
    }

    Ok(())
}
