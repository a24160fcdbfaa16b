use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    catalog::{AIRCRAFTS, AIRLINES, AIRPORTS, BOOKINGS, FLIGHTS, PASSENGERS},
    value::Value,
};

/// A generated row of one table.
pub trait Record {
    const TABLE: &'static str;

    fn id(&self) -> u32;

    /// Cells in the column order of the table schema.
    fn values(&self) -> Vec<Value>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airline {
    pub airline_id: u32,
    pub airline_name: String,
    pub iata_code: String,
    pub icao_code: String,
    pub contact_email: String,
    pub phone_number: String,
}

impl Record for Airline {
    const TABLE: &'static str = AIRLINES;

    fn id(&self) -> u32 {
        self.airline_id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.airline_id.into(),
            self.airline_name.as_str().into(),
            self.iata_code.as_str().into(),
            self.icao_code.as_str().into(),
            self.contact_email.as_str().into(),
            self.phone_number.as_str().into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    pub airport_id: u32,
    pub airport_code: String,
    pub airport_name: String,
    pub city: String,
    pub country: String,
    pub timezone: String,
}

impl Record for Airport {
    const TABLE: &'static str = AIRPORTS;

    fn id(&self) -> u32 {
        self.airport_id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.airport_id.into(),
            self.airport_code.as_str().into(),
            self.airport_name.as_str().into(),
            self.city.as_str().into(),
            self.country.as_str().into(),
            self.timezone.as_str().into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aircraft {
    pub aircraft_id: u32,
    pub aircraft_type: String,
    pub capacity: u32,
    pub airline_id: Option<u32>,
    pub manufacturer: String,
    pub year_of_manufacture: i32,
}

impl Record for Aircraft {
    const TABLE: &'static str = AIRCRAFTS;

    fn id(&self) -> u32 {
        self.aircraft_id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.aircraft_id.into(),
            self.aircraft_type.as_str().into(),
            self.capacity.into(),
            self.airline_id.into(),
            self.manufacturer.as_str().into(),
            self.year_of_manufacture.into(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    Scheduled,
    Departed,
    Arrived,
    Cancelled,
    Delayed,
}

impl FlightStatus {
    /// Statuses a flight whose scheduled departure is in the past can have.
    pub const PAST: [Self; 4] = [Self::Departed, Self::Arrived, Self::Cancelled, Self::Delayed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Departed => "Departed",
            Self::Arrived => "Arrived",
            Self::Cancelled => "Cancelled",
            Self::Delayed => "Delayed",
        }
    }

    /// The aircraft has left the gate.
    #[must_use]
    pub const fn has_departed(self) -> bool {
        matches!(self, Self::Departed | Self::Arrived | Self::Delayed)
    }

    #[must_use]
    pub const fn has_arrived(self) -> bool {
        matches!(self, Self::Arrived)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub flight_id: u32,
    pub flight_number: String,
    pub airline_id: u32,
    pub departure_airport_id: u32,
    pub arrival_airport_id: u32,
    pub aircraft_id: u32,
    pub scheduled_departure_time: NaiveDateTime,
    pub actual_departure_time: Option<NaiveDateTime>,
    pub scheduled_arrival_time: NaiveDateTime,
    pub actual_arrival_time: Option<NaiveDateTime>,
    pub flight_status: FlightStatus,
    pub gate: String,
    pub terminal: String,
    pub price: f64,
}

impl Record for Flight {
    const TABLE: &'static str = FLIGHTS;

    fn id(&self) -> u32 {
        self.flight_id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.flight_id.into(),
            self.flight_number.as_str().into(),
            self.airline_id.into(),
            self.departure_airport_id.into(),
            self.arrival_airport_id.into(),
            self.aircraft_id.into(),
            self.scheduled_departure_time.into(),
            self.actual_departure_time.into(),
            self.scheduled_arrival_time.into(),
            self.actual_arrival_time.into(),
            self.flight_status.as_str().into(),
            self.gate.as_str().into(),
            self.terminal.as_str().into(),
            self.price.into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    pub passenger_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub passport_number: String,
    pub date_of_birth: NaiveDate,
    pub nationality: String,
}

impl Record for Passenger {
    const TABLE: &'static str = PASSENGERS;

    fn id(&self) -> u32 {
        self.passenger_id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.passenger_id.into(),
            self.first_name.as_str().into(),
            self.last_name.as_str().into(),
            self.email.as_str().into(),
            self.phone_number.as_str().into(),
            self.passport_number.as_str().into(),
            self.date_of_birth.into(),
            self.nationality.as_str().into(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingClass {
    Economy,
    Business,
    First,
}

impl BookingClass {
    pub const ALL: [Self; 3] = [Self::Economy, Self::Business, Self::First];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::Business => "Business",
            Self::First => "First",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Refunded,
}

impl PaymentStatus {
    pub const ALL: [Self; 3] = [Self::Paid, Self::Pending, Self::Refunded];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Refunded => "Refunded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    CheckedIn,
}

impl BookingStatus {
    pub const ALL: [Self; 3] = [Self::Confirmed, Self::Cancelled, Self::CheckedIn];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
            Self::CheckedIn => "Checked-in",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub booking_id: u32,
    pub passenger_id: u32,
    pub flight_id: u32,
    pub booking_date: NaiveDateTime,
    pub seat_number: String,
    pub class: BookingClass,
    pub payment_status: PaymentStatus,
    pub booking_status: BookingStatus,
    pub baggage_allowance: u32,
    pub checkin_status: bool,
}

impl Record for Booking {
    const TABLE: &'static str = BOOKINGS;

    fn id(&self) -> u32 {
        self.booking_id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.booking_id.into(),
            self.passenger_id.into(),
            self.flight_id.into(),
            self.booking_date.into(),
            self.seat_number.as_str().into(),
            self.class.as_str().into(),
            self.payment_status.as_str().into(),
            self.booking_status.as_str().into(),
            self.baggage_allowance.into(),
            self.checkin_status.into(),
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_flight_status_progress() {
        assert!(!FlightStatus::Scheduled.has_departed());
        assert!(!FlightStatus::Cancelled.has_departed());
        assert!(FlightStatus::Delayed.has_departed());
        assert!(FlightStatus::Departed.has_departed());
        assert!(!FlightStatus::Departed.has_arrived());
        assert!(FlightStatus::Arrived.has_departed());
        assert!(FlightStatus::Arrived.has_arrived());
        assert!(!FlightStatus::PAST.contains(&FlightStatus::Scheduled));
    }

    #[test]
    fn test_aircraft_without_airline() {
        let aircraft = Aircraft {
            aircraft_id: 3,
            aircraft_type: "Embraer 190".into(),
            capacity: 100,
            airline_id: None,
            manufacturer: "Embraer".into(),
            year_of_manufacture: 2010,
        };

        let values = aircraft.values();
        assert_eq!(Value::Integer(3), values[0]);
        assert!(values[3].is_null());
    }

    #[test]
    fn test_booking_status_labels() {
        assert_eq!("Checked-in", BookingStatus::CheckedIn.as_str());
        assert_eq!("Refunded", PaymentStatus::Refunded.as_str());
        assert_eq!("First", BookingClass::First.as_str());
    }
}
