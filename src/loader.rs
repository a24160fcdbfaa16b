use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{debug, info};
use sqlite::{Connection, State};

use crate::{
    common::{AirlineDataError, Error},
    dataset::{Dataset, TableData},
    schema::{DatabaseSchema, TableSchema},
    value::Value,
};

/// Owns the single database connection of a run. The connection is closed
/// when the loader is dropped, whatever the outcome of the load.
pub struct Loader {
    connection: Connection,
    path: PathBuf,
}

impl Loader {
    /// # Errors
    ///
    /// When the database cannot be opened.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let connection = sqlite::open(path)?;
        connection.execute("PRAGMA foreign_keys = ON;")?;
        info!("Connected to {}", path.display());

        Ok(Self {
            connection,
            path: path.to_path_buf(),
        })
    }

    /// Creates missing tables, parents first, in one transaction.
    ///
    /// # Errors
    ///
    /// When the schema is not in dependency order, or on DDL failure.
    pub fn create_tables(&self, schema: &DatabaseSchema) -> Result<(), Error> {
        schema.validate_order()?;

        info!("Creating tables (if they don't exist)...");
        self.in_transaction(|connection| {
            for table_schema in schema.tables.values() {
                debug!("{}", table_schema.create_table_sql());
                connection.execute(table_schema.create_table_sql())?;
            }
            Ok(())
        })?;
        info!("Tables created or already exist.");

        Ok(())
    }

    /// Appends all rows of `table` with a single prepared statement.
    /// A failing row discards the rows of this table inserted so far.
    ///
    /// # Errors
    ///
    /// On a row of the wrong width, or any insert failure (e.g. a key conflict).
    pub fn insert_table(
        &self,
        table_schema: &TableSchema,
        table: &TableData,
    ) -> Result<usize, Error> {
        let expected = table_schema.fields.len();
        if let Some((row, values)) = table
            .rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != expected)
        {
            return Err(AirlineDataError::RowShapeMismatch {
                table: table_schema.name.clone(),
                row,
                expected,
                actual: values.len(),
            }
            .into());
        }

        info!("Inserting data into {}...", table_schema.name);
        self.in_transaction(|connection| {
            let mut statement = connection.prepare(table_schema.insert_sql())?;
            for values in &table.rows {
                statement.reset()?;
                for (i, value) in values.iter().enumerate() {
                    statement.bind((i + 1, value.to_sqlite()))?;
                }
                while statement.next()? != State::Done {}
            }
            Ok(())
        })?;
        debug!("Inserted {} rows into {}", table.len(), table_schema.name);

        Ok(table.len())
    }

    /// Creates the tables, then appends every generated table in insert order.
    ///
    /// # Errors
    ///
    /// On the first failing step. Tables appended before it stay committed.
    pub fn load(&self, schema: &DatabaseSchema, dataset: &Dataset) -> Result<(), Error> {
        self.create_tables(schema)?;

        info!("Inserting data into tables...");
        for table in dataset.tables() {
            let table_schema = schema
                .table(table.name)
                .ok_or_else(|| AirlineDataError::UnknownTable(table.name.to_string()))?;
            self.insert_table(table_schema, &table)?;
        }
        info!("All data successfully inserted into {}.", self.path.display());

        Ok(())
    }

    /// # Errors
    ///
    /// When the table does not exist.
    pub fn row_count(&self, table_name: &str) -> Result<i64, Error> {
        let mut statement = self
            .connection
            .prepare(format!("SELECT COUNT(*) FROM {table_name};"))?;
        statement.next()?;
        Ok(statement.read::<i64, _>(0)?)
    }

    /// First `limit` rows of a table, keyed by column name.
    ///
    /// # Errors
    ///
    /// When the table does not exist.
    pub fn sample_rows(
        &self,
        table_name: &str,
        limit: usize,
    ) -> Result<Vec<IndexMap<String, Value>>, Error> {
        let mut statement = self
            .connection
            .prepare(format!("SELECT * FROM {table_name} LIMIT {limit};"))?;
        let column_names: Vec<String> = statement.column_names().to_vec();

        let mut rows = vec![];
        while statement.next()? == State::Row {
            let mut row = IndexMap::new();
            for (i, column_name) in column_names.iter().enumerate() {
                let value = statement.read::<sqlite::Value, _>(i)?;
                row.insert(column_name.clone(), Value::from_sqlite(value));
            }
            rows.push(row);
        }

        Ok(rows)
    }

    /// Commits when `body` succeeds, rolls back otherwise.
    fn in_transaction(
        &self,
        body: impl FnOnce(&Connection) -> Result<(), Error>,
    ) -> Result<(), Error> {
        self.connection.execute("BEGIN;")?;

        match body(&self.connection) {
            Ok(()) => {
                self.connection.execute("COMMIT;")?;
                Ok(())
            }
            Err(err) => {
                if let Err(rollback_err) = self.connection.execute("ROLLBACK;") {
                    debug!("Rollback failed: {rollback_err}");
                }
                Err(err)
            }
        }
    }
}

impl Drop for Loader {
    fn drop(&mut self) {
        info!("Database connection closed.");
    }
}
