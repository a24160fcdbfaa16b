use crate::{
    catalog::INSERT_ORDER,
    model::{Aircraft, Airline, Airport, Booking, Flight, Passenger, Record},
    schema::DatabaseSchema,
    value::Value,
};

pub const PREVIEW_ROW_COUNT: usize = 5;

/// Rows of one table, flattened to cells.
#[derive(Debug, Clone, PartialEq)]
pub struct TableData {
    pub name: &'static str,
    pub rows: Vec<Vec<Value>>,
}

impl TableData {
    #[must_use]
    pub fn from_records<T: Record>(records: &[T]) -> Self {
        Self {
            name: T::TABLE,
            rows: records.iter().map(Record::values).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the first `limit` rows as an aligned text table.
    #[must_use]
    pub fn preview(&self, columns: &[&str], limit: usize) -> String {
        let head: Vec<Vec<String>> = self
            .rows
            .iter()
            .take(limit)
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();

        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                head.iter()
                    .filter_map(|row| row.get(i))
                    .map(String::len)
                    .fold(column.len(), usize::max)
            })
            .collect();

        let render_line = |cells: Vec<&str>| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut lines = vec![render_line(columns.to_vec())];
        for row in &head {
            lines.push(render_line(row.iter().map(String::as_str).collect()));
        }
        lines.join("\n")
    }
}

/// All generated tables. Never mutated once generated.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub airlines: Vec<Airline>,
    pub airports: Vec<Airport>,
    pub aircrafts: Vec<Aircraft>,
    pub flights: Vec<Flight>,
    pub passengers: Vec<Passenger>,
    pub bookings: Vec<Booking>,
}

impl Dataset {
    /// Tables in insertion order.
    #[must_use]
    pub fn tables(&self) -> Vec<TableData> {
        let tables = vec![
            TableData::from_records(&self.airlines),
            TableData::from_records(&self.airports),
            TableData::from_records(&self.aircrafts),
            TableData::from_records(&self.passengers),
            TableData::from_records(&self.flights),
            TableData::from_records(&self.bookings),
        ];
        debug_assert!(tables
            .iter()
            .zip(INSERT_ORDER)
            .all(|(table, name)| table.name == name));
        tables
    }

    #[must_use]
    pub fn preview(&self, schema: &DatabaseSchema) -> String {
        let mut out = String::from("--- Sample Generated Data ---\n");

        for table in self.tables() {
            let columns = schema
                .table(table.name)
                .map(|table_schema| table_schema.column_names())
                .unwrap_or_default();
            out.push_str(&format!(
                "{} Data:\n{}\n\n",
                table.name,
                table.preview(&columns, PREVIEW_ROW_COUNT)
            ));
        }

        out.push_str("----------------------------");
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::catalog::airline_schema;

    fn airline(id: u32, iata: &str) -> Airline {
        Airline {
            airline_id: id,
            airline_name: format!("Airline {id} Airlines"),
            iata_code: iata.into(),
            icao_code: format!("{iata}X"),
            contact_email: "ops@example.com".into(),
            phone_number: "555-0100".into(),
        }
    }

    #[test]
    fn test_table_data_from_records() {
        let table = TableData::from_records(&[airline(1, "AB"), airline(2, "CD")]);

        assert_eq!("Airlines", table.name);
        assert_eq!(2, table.len());
        assert_eq!(Value::Text("CD".into()), table.rows[1][2]);
    }

    #[test]
    fn test_preview_limits_and_aligns() {
        let table = TableData::from_records(&[airline(1, "AB"), airline(2, "CD"), airline(3, "EF")]);
        let preview = table.preview(&["AirlineID", "AirlineName"], 2);
        let lines: Vec<&str> = preview.lines().collect();

        assert_eq!(3, lines.len());
        assert_eq!("AirlineID  AirlineName", lines[0]);
        assert!(lines[1].starts_with("1          Airline 1 Airlines"));
        assert!(lines[2].starts_with("2          Airline 2 Airlines"));
    }

    #[test]
    fn test_empty_dataset_tables() {
        let dataset = Dataset::default();
        let tables = dataset.tables();

        assert_eq!(6, tables.len());
        assert!(tables.iter().all(TableData::is_empty));
        assert!(dataset
            .preview(&airline_schema())
            .contains("Bookings Data:\nBookingID"));
    }
}
