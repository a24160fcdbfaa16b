use log::debug;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum AirlineDataError {
    #[error("{dependent} generation requires non-empty {parents} tables")]
    MissingParentTable {
        dependent: &'static str,
        parents: &'static str,
    },
    #[error("Flight generation requires at least 2 airports, got {0}")]
    NotEnoughAirports(usize),
    #[error("Could not generate an unused {kind} after {attempts} attempts")]
    CodeSpaceExhausted { kind: &'static str, attempts: usize },
    #[error("Table {0} is not part of the schema")]
    UnknownTable(String),
    #[error("Row #{row} of table {table} has {actual} values, schema expects {expected}")]
    RowShapeMismatch {
        table: String,
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Table {table} references {parent} which is not created before it")]
    SchemaOrderError { table: String, parent: String },
    #[error("Invalid value {value:?} for environment variable {var}")]
    InvalidEnvVar { var: &'static str, value: String },
}

/// Removes every file in the current directory matching `pattern`.
/// Used to reset database files between runs.
pub fn delete_all_files_by_glob(pattern: &str) {
    let Ok(paths) = glob::glob(pattern) else {
        return;
    };

    for path in paths.flatten() {
        debug!("Deleting {}", path.display());
        let _ = std::fs::remove_file(path);
    }
}
