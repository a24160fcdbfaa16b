use airline_data::{
    catalog::airline_schema, common::Error, config::Config, generator::DataGenerator,
    loader::Loader,
};
use log::{error, info};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let schema = airline_schema();

    info!("Generating synthetic data...");
    let dataset = DataGenerator::from_seed(config.seed).generate_dataset(&config.counts)?;
    info!("Synthetic data generation complete.");

    println!("{}", dataset.preview(&schema));

    // The loader closes its connection when it goes out of scope, on every path.
    match Loader::open(&config.db_path) {
        Ok(loader) => {
            if let Err(err) = loader.load(&schema, &dataset) {
                error!("Error during database operations: {err}");
            }
        }
        Err(err) => {
            error!("Error during database operations: {err}");
            info!("Database connection closed.");
        }
    }

    Ok(())
}
