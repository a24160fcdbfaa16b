use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::common::{AirlineDataError, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Int,
    Varchar(u16),
    Decimal(u8, u8),
    Boolean,
    Date,
    DateTime,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "INT"),
            Self::Varchar(len) => write!(f, "VARCHAR({len})"),
            Self::Decimal(precision, scale) => write!(f, "DECIMAL({precision}, {scale})"),
            Self::Boolean => write!(f, "BOOLEAN"),
            Self::Date => write!(f, "DATE"),
            Self::DateTime => write!(f, "DATETIME"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub field_type: FieldType,
    pub required: bool,
    pub unique: bool,
}

impl FieldSchema {
    #[must_use]
    pub const fn nullable(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            unique: false,
        }
    }

    #[must_use]
    pub const fn required(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: true,
            unique: false,
        }
    }

    #[must_use]
    pub const fn unique(self) -> Self {
        Self {
            unique: true,
            ..self
        }
    }

    fn column_definition(&self, name: &str) -> String {
        let mut out = format!("{name} {}", self.field_type);
        if self.unique {
            out.push_str(" UNIQUE");
        }
        if self.required {
            out.push_str(" NOT NULL");
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub field: String,
    pub table: String,
    pub references: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub primary_key: String,
    /// Column order here is the row order of generated records.
    pub fields: IndexMap<String, FieldSchema>,
    pub foreign_keys: Vec<ForeignKey>,
}

impl TableSchema {
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn create_table_sql(&self) -> String {
        let mut lines: Vec<String> = self
            .fields
            .iter()
            .map(|(name, field_schema)| {
                if *name == self.primary_key {
                    format!("{name} {} PRIMARY KEY", field_schema.field_type)
                } else {
                    field_schema.column_definition(name)
                }
            })
            .collect();

        lines.extend(self.foreign_keys.iter().map(|foreign_key| {
            format!(
                "FOREIGN KEY ({}) REFERENCES {}({})",
                foreign_key.field, foreign_key.table, foreign_key.references
            )
        }));

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n);",
            self.name,
            lines.join(",\n    ")
        )
    }

    #[must_use]
    pub fn insert_sql(&self) -> String {
        let placeholders: Vec<String> = (1..=self.fields.len()).map(|i| format!("?{i}")).collect();

        format!(
            "INSERT INTO {} ({}) VALUES ({});",
            self.name,
            self.column_names().join(", "),
            placeholders.join(", ")
        )
    }
}

/// Tables in creation order: every table comes after the tables it references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSchema {
    pub tables: IndexMap<String, TableSchema>,
}

impl DatabaseSchema {
    #[must_use]
    pub fn new(tables: Vec<TableSchema>) -> Self {
        Self {
            tables: tables
                .into_iter()
                .map(|table| (table.name.clone(), table))
                .collect(),
        }
    }

    #[must_use]
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.get(name)
    }

    /// # Errors
    ///
    /// When a table references a table that is created after it (or not at all).
    pub fn validate_order(&self) -> Result<(), Error> {
        let mut created: HashSet<&str> = HashSet::new();

        for table in self.tables.values() {
            for foreign_key in &table.foreign_keys {
                if foreign_key.table != table.name && !created.contains(foreign_key.table.as_str())
                {
                    return Err(AirlineDataError::SchemaOrderError {
                        table: table.name.clone(),
                        parent: foreign_key.table.clone(),
                    }
                    .into());
                }
            }
            created.insert(&table.name);
        }

        Ok(())
    }
}
