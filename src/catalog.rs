//! Table definitions of the airline database.

use indexmap::IndexMap;

use crate::schema::{DatabaseSchema, FieldSchema, FieldType, ForeignKey, TableSchema};

pub const AIRLINES: &str = "Airlines";
pub const AIRPORTS: &str = "Airports";
pub const AIRCRAFTS: &str = "Aircrafts";
pub const FLIGHTS: &str = "Flights";
pub const PASSENGERS: &str = "Passengers";
pub const BOOKINGS: &str = "Bookings";

/// Order in which generated tables are appended. Passengers go before Flights,
/// both before Bookings.
pub const INSERT_ORDER: [&str; 6] = [AIRLINES, AIRPORTS, AIRCRAFTS, PASSENGERS, FLIGHTS, BOOKINGS];

fn int() -> FieldSchema {
    FieldSchema::nullable(FieldType::Int)
}

fn varchar(len: u16) -> FieldSchema {
    FieldSchema::nullable(FieldType::Varchar(len))
}

fn required_varchar(len: u16) -> FieldSchema {
    FieldSchema::required(FieldType::Varchar(len))
}

fn field(name: &str, field_schema: FieldSchema) -> (String, FieldSchema) {
    (name.to_string(), field_schema)
}

fn references(field: &str, table: &str, references: &str) -> ForeignKey {
    ForeignKey {
        field: field.into(),
        table: table.into(),
        references: references.into(),
    }
}

#[must_use]
pub fn airlines_table() -> TableSchema {
    TableSchema {
        name: AIRLINES.into(),
        primary_key: "AirlineID".into(),
        fields: IndexMap::from([
            field("AirlineID", int()),
            field("AirlineName", required_varchar(100)),
            field("IATA_Code", varchar(2).unique()),
            field("ICAO_Code", varchar(3).unique()),
            field("ContactEmail", varchar(100)),
            field("PhoneNumber", varchar(20)),
        ]),
        foreign_keys: vec![],
    }
}

#[must_use]
pub fn airports_table() -> TableSchema {
    TableSchema {
        name: AIRPORTS.into(),
        primary_key: "AirportID".into(),
        fields: IndexMap::from([
            field("AirportID", int()),
            field("AirportCode", required_varchar(3).unique()),
            field("AirportName", required_varchar(100)),
            field("City", varchar(100)),
            field("Country", varchar(100)),
            field("Timezone", varchar(50)),
        ]),
        foreign_keys: vec![],
    }
}

#[must_use]
pub fn aircrafts_table() -> TableSchema {
    TableSchema {
        name: AIRCRAFTS.into(),
        primary_key: "AircraftID".into(),
        fields: IndexMap::from([
            field("AircraftID", int()),
            field("AircraftType", required_varchar(50)),
            field("Capacity", int()),
            field("AirlineID", int()),
            field("Manufacturer", varchar(50)),
            field("YearOfManufacture", int()),
        ]),
        foreign_keys: vec![references("AirlineID", AIRLINES, "AirlineID")],
    }
}

#[must_use]
pub fn flights_table() -> TableSchema {
    TableSchema {
        name: FLIGHTS.into(),
        primary_key: "FlightID".into(),
        fields: IndexMap::from([
            field("FlightID", int()),
            field("FlightNumber", required_varchar(10)),
            field("AirlineID", int()),
            field("DepartureAirportID", int()),
            field("ArrivalAirportID", int()),
            field("AircraftID", int()),
            field(
                "ScheduledDepartureTime",
                FieldSchema::required(FieldType::DateTime),
            ),
            field(
                "ActualDepartureTime",
                FieldSchema::nullable(FieldType::DateTime),
            ),
            field(
                "ScheduledArrivalTime",
                FieldSchema::required(FieldType::DateTime),
            ),
            field("ActualArrivalTime", FieldSchema::nullable(FieldType::DateTime)),
            field("FlightStatus", varchar(20)),
            field("Gate", varchar(10)),
            field("Terminal", varchar(10)),
            field("Price", FieldSchema::nullable(FieldType::Decimal(10, 2))),
        ]),
        foreign_keys: vec![
            references("AirlineID", AIRLINES, "AirlineID"),
            references("DepartureAirportID", AIRPORTS, "AirportID"),
            references("ArrivalAirportID", AIRPORTS, "AirportID"),
            references("AircraftID", AIRCRAFTS, "AircraftID"),
        ],
    }
}

#[must_use]
pub fn passengers_table() -> TableSchema {
    TableSchema {
        name: PASSENGERS.into(),
        primary_key: "PassengerID".into(),
        fields: IndexMap::from([
            field("PassengerID", int()),
            field("FirstName", required_varchar(50)),
            field("LastName", required_varchar(50)),
            field("Email", varchar(100).unique()),
            field("PhoneNumber", varchar(20)),
            field("PassportNumber", varchar(20).unique()),
            field("DateOfBirth", FieldSchema::nullable(FieldType::Date)),
            field("Nationality", varchar(50)),
        ]),
        foreign_keys: vec![],
    }
}

#[must_use]
pub fn bookings_table() -> TableSchema {
    TableSchema {
        name: BOOKINGS.into(),
        primary_key: "BookingID".into(),
        fields: IndexMap::from([
            field("BookingID", int()),
            field("PassengerID", FieldSchema::required(FieldType::Int)),
            field("FlightID", FieldSchema::required(FieldType::Int)),
            field("BookingDate", FieldSchema::required(FieldType::DateTime)),
            field("SeatNumber", varchar(5)),
            field("Class", varchar(20)),
            field("PaymentStatus", varchar(20)),
            field("BookingStatus", varchar(20)),
            field("BaggageAllowance", int()),
            field("CheckinStatus", FieldSchema::nullable(FieldType::Boolean)),
        ]),
        foreign_keys: vec![
            references("PassengerID", PASSENGERS, "PassengerID"),
            references("FlightID", FLIGHTS, "FlightID"),
        ],
    }
}

/// The six airline tables, parents before children.
#[must_use]
pub fn airline_schema() -> DatabaseSchema {
    DatabaseSchema::new(vec![
        airlines_table(),
        airports_table(),
        aircrafts_table(),
        flights_table(),
        passengers_table(),
        bookings_table(),
    ])
}
