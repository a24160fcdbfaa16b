use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single cell of a generated row.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    NULL,
    Integer(i64),
    Real(f64),
    Text(String),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::NULL)
    }

    /// Dates and timestamps are stored as text, booleans as 0/1.
    #[must_use]
    pub fn to_sqlite(&self) -> sqlite::Value {
        match self {
            Self::NULL => sqlite::Value::Null,
            Self::Integer(v) => sqlite::Value::Integer(*v),
            Self::Real(v) => sqlite::Value::Float(*v),
            Self::Text(v) => sqlite::Value::String(v.clone()),
            Self::Bool(v) => sqlite::Value::Integer(i64::from(*v)),
            Self::Date(v) => sqlite::Value::String(v.format(DATE_FORMAT).to_string()),
            Self::DateTime(v) => sqlite::Value::String(v.format(DATE_TIME_FORMAT).to_string()),
        }
    }

    #[must_use]
    pub fn from_sqlite(value: sqlite::Value) -> Self {
        match value {
            sqlite::Value::Null => Self::NULL,
            sqlite::Value::Integer(v) => Self::Integer(v),
            sqlite::Value::Float(v) => Self::Real(v),
            sqlite::Value::String(v) => Self::Text(v),
            sqlite::Value::Binary(v) => Self::Text(String::from_utf8_lossy(&v).into_owned()),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::NULL => serde_json::Value::Null,
            Self::Integer(v) => (*v).into(),
            Self::Real(v) => (*v).into(),
            Self::Text(v) => v.clone().into(),
            Self::Bool(v) => (*v).into(),
            Self::Date(_) | Self::DateTime(_) => self.to_string().into(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NULL => write!(f, "None"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v:.2}"),
            Self::Text(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Date(v) => write!(f, "{}", v.format(DATE_FORMAT)),
            Self::DateTime(v) => write!(f, "{}", v.format(DATE_TIME_FORMAT)),
        }
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::NULL, Into::into)
    }
}
