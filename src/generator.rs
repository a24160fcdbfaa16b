use std::collections::{HashMap, HashSet};

use chrono::{Duration, Local, NaiveDateTime};
use fake::faker::address::en::{CityName, CountryName, TimeZone};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use log::{info, warn};
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::{
    common::{AirlineDataError, Error},
    config::RecordCounts,
    dataset::Dataset,
    model::{
        Aircraft, Airline, Airport, Booking, BookingClass, BookingStatus, Flight, FlightStatus,
        Passenger, PaymentStatus,
    },
};

/// (type, manufacturer)
const AIRCRAFT_MODELS: [(&str, &str); 5] = [
    ("Boeing 737", "Boeing"),
    ("Airbus A320", "Airbus"),
    ("Boeing 787", "Boeing"),
    ("Airbus A350", "Airbus"),
    ("Embraer 190", "Embraer"),
];

/// ISO 3166-1 alpha-3.
const NATIONALITIES: &[&str] = &[
    "ABW", "AFG", "AGO", "AIA", "ALA", "ALB", "AND", "ARE", "ARG", "ARM", "ASM", "ATA", "ATF",
    "ATG", "AUS", "AUT", "AZE", "BDI", "BEL", "BEN", "BES", "BFA", "BGD", "BGR", "BHR", "BHS",
    "BIH", "BLM", "BLR", "BLZ", "BMU", "BOL", "BRA", "BRB", "BRN", "BTN", "BVT", "BWA", "CAF",
    "CAN", "CCK", "CHE", "CHL", "CHN", "CIV", "CMR", "COD", "COG", "COK", "COL", "COM", "CPV",
    "CRI", "CUB", "CUW", "CXR", "CYM", "CYP", "CZE", "DEU", "DJI", "DMA", "DNK", "DOM", "DZA",
    "ECU", "EGY", "ERI", "ESH", "ESP", "EST", "ETH", "FIN", "FJI", "FLK", "FRA", "FRO", "FSM",
    "GAB", "GBR", "GEO", "GGY", "GHA", "GIB", "GIN", "GLP", "GMB", "GNB", "GNQ", "GRC", "GRD",
    "GRL", "GTM", "GUF", "GUM", "GUY", "HKG", "HMD", "HND", "HRV", "HTI", "HUN", "IDN", "IMN",
    "IND", "IOT", "IRL", "IRN", "IRQ", "ISL", "ISR", "ITA", "JAM", "JEY", "JOR", "JPN", "KAZ",
    "KEN", "KGZ", "KHM", "KIR", "KNA", "KOR", "KWT", "LAO", "LBN", "LBR", "LBY", "LCA", "LIE",
    "LKA", "LSO", "LTU", "LUX", "LVA", "MAC", "MAF", "MAR", "MCO", "MDA", "MDG", "MDV", "MEX",
    "MHL", "MKD", "MLI", "MLT", "MMR", "MNE", "MNG", "MNP", "MOZ", "MRT", "MSR", "MTQ", "MUS",
    "MWI", "MYS", "MYT", "NAM", "NCL", "NER", "NFK", "NGA", "NIC", "NIU", "NLD", "NOR", "NPL",
    "NRU", "NZL", "OMN", "PAK", "PAN", "PCN", "PER", "PHL", "PLW", "PNG", "POL", "PRI", "PRK",
    "PRT", "PRY", "PSE", "PYF", "QAT", "REU", "ROU", "RUS", "RWA", "SAU", "SDN", "SEN", "SGP",
    "SGS", "SHN", "SJM", "SLB", "SLE", "SLV", "SMR", "SOM", "SPM", "SRB", "SSD", "STP", "SUR",
    "SVK", "SVN", "SWE", "SWZ", "SXM", "SYC", "SYR", "TCA", "TCD", "TGO", "THA", "TJK", "TKL",
    "TKM", "TLS", "TON", "TTO", "TUN", "TUR", "TUV", "TWN", "TZA", "UGA", "UKR", "UMI", "URY",
    "USA", "UZB", "VAT", "VCT", "VEN", "VGB", "VIR", "VNM", "VUT", "WLF", "WSM", "YEM", "ZAF",
    "ZMB", "ZWE",
];

const TERMINALS: [&str; 3] = ["A", "B", "C"];

const PHONE_NUMBER_MAX_LEN: usize = 20;

const SEATS_PER_ROW: u32 = 6;
const SEAT_LETTERS: [char; SEATS_PER_ROW as usize] = ['A', 'B', 'C', 'D', 'E', 'F'];
const FALLBACK_SEAT_ROWS: u32 = 30;

const CHECKIN_PROBABILITY: f64 = 0.7;
const MAX_UNIQUE_ATTEMPTS: usize = 10_000;
const DAYS_PER_YEAR: i64 = 365;

/// Produces the airline tables. Parent tables are passed in so children only
/// ever reference keys that exist.
pub struct DataGenerator<R: Rng> {
    rng: R,
    now: NaiveDateTime,
}

impl DataGenerator<StdRng> {
    /// Seeded for a reproducible run, or from OS entropy when `seed` is `None`.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::new(rng, Local::now().naive_local())
    }
}

impl<R: Rng> DataGenerator<R> {
    /// `now` decides which flights are in the past.
    #[must_use]
    pub const fn new(rng: R, now: NaiveDateTime) -> Self {
        Self { rng, now }
    }

    /// # Errors
    ///
    /// When a dependent table is generated without its parents.
    pub fn generate_dataset(&mut self, counts: &RecordCounts) -> Result<Dataset, Error> {
        let airlines = self.generate_airlines(counts.airlines)?;
        info!("Generated {} airlines", airlines.len());
        let airports = self.generate_airports(counts.airports)?;
        info!("Generated {} airports", airports.len());
        let aircrafts = self.generate_aircrafts(counts.aircrafts, &airlines);
        info!("Generated {} aircrafts", aircrafts.len());
        let flights = self.generate_flights(counts.flights, &airlines, &airports, &aircrafts)?;
        info!("Generated {} flights", flights.len());
        let passengers = self.generate_passengers(counts.passengers)?;
        info!("Generated {} passengers", passengers.len());
        let bookings =
            self.generate_bookings(counts.bookings, &passengers, &flights, &aircrafts)?;
        info!("Generated {} bookings", bookings.len());

        Ok(Dataset {
            airlines,
            airports,
            aircrafts,
            flights,
            passengers,
            bookings,
        })
    }

    /// # Errors
    ///
    /// When no unused IATA or ICAO code can be found.
    pub fn generate_airlines(&mut self, count: u32) -> Result<Vec<Airline>, Error> {
        let mut iata_codes = HashSet::new();
        let mut icao_codes = HashSet::new();

        (1..=count)
            .map(|airline_id| -> Result<Airline, Error> {
                let company: String = CompanyName().fake_with_rng(&mut self.rng);
                Ok(Airline {
                    airline_id,
                    airline_name: format!("{company} Airlines"),
                    iata_code: self.unique(&mut iata_codes, "IATA code", |g| g.letters(2))?,
                    icao_code: self.unique(&mut icao_codes, "ICAO code", |g| g.letters(3))?,
                    contact_email: SafeEmail().fake_with_rng(&mut self.rng),
                    phone_number: self.phone_number(),
                })
            })
            .collect()
    }

    /// # Errors
    ///
    /// When no unused airport code can be found.
    pub fn generate_airports(&mut self, count: u32) -> Result<Vec<Airport>, Error> {
        let mut codes = HashSet::new();

        (1..=count)
            .map(|airport_id| -> Result<Airport, Error> {
                let city: String = CityName().fake_with_rng(&mut self.rng);
                Ok(Airport {
                    airport_id,
                    airport_code: self.unique(&mut codes, "airport code", |g| g.letters(3))?,
                    airport_name: format!("{city} International Airport"),
                    city,
                    country: CountryName().fake_with_rng(&mut self.rng),
                    timezone: TimeZone().fake_with_rng(&mut self.rng),
                })
            })
            .collect()
    }

    /// Without airlines every aircraft is left unassigned.
    pub fn generate_aircrafts(&mut self, count: u32, airlines: &[Airline]) -> Vec<Aircraft> {
        if airlines.is_empty() {
            warn!("No airlines provided, generating aircrafts without airline association");
        }

        (1..=count)
            .map(|aircraft_id| {
                let (aircraft_type, manufacturer) = AIRCRAFT_MODELS
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(AIRCRAFT_MODELS[0]);
                Aircraft {
                    aircraft_id,
                    aircraft_type: aircraft_type.into(),
                    capacity: self.rng.random_range(100..=400),
                    airline_id: airlines
                        .choose(&mut self.rng)
                        .map(|airline| airline.airline_id),
                    manufacturer: manufacturer.into(),
                    year_of_manufacture: self.rng.random_range(2000..=2024),
                }
            })
            .collect()
    }

    /// # Errors
    ///
    /// When any parent table is empty, or there are fewer than 2 airports.
    pub fn generate_flights(
        &mut self,
        count: u32,
        airlines: &[Airline],
        airports: &[Airport],
        aircrafts: &[Aircraft],
    ) -> Result<Vec<Flight>, Error> {
        if airlines.is_empty() || airports.is_empty() || aircrafts.is_empty() {
            return Err(missing_flight_parents());
        }
        if airports.len() < 2 {
            return Err(AirlineDataError::NotEnoughAirports(airports.len()).into());
        }

        let mut flights = vec![];
        for flight_id in 1..=count {
            let airline = airlines
                .choose(&mut self.rng)
                .ok_or_else(missing_flight_parents)?;
            let departure_airport_id = self.choose_airport(airports)?;
            let mut arrival_airport_id = departure_airport_id;
            while arrival_airport_id == departure_airport_id {
                arrival_airport_id = self.choose_airport(airports)?;
            }
            let aircraft_id = aircrafts
                .choose(&mut self.rng)
                .ok_or_else(missing_flight_parents)?
                .aircraft_id;

            let scheduled_departure_time = self.date_time_between(
                self.now - Duration::days(DAYS_PER_YEAR),
                self.now + Duration::days(DAYS_PER_YEAR),
            );
            let scheduled_arrival_time = scheduled_departure_time
                + Duration::hours(self.rng.random_range(1..=10))
                + Duration::minutes(self.rng.random_range(0..=59));

            // Early departures up to an hour, delays up to three.
            let delay = Duration::minutes(self.rng.random_range(-60..=180));
            let actual_departure_time = scheduled_departure_time + delay;
            let actual_arrival_time = scheduled_arrival_time
                + delay
                + Duration::minutes(self.rng.random_range(-30..=30));

            let flight_status = if scheduled_departure_time < self.now {
                FlightStatus::PAST
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(FlightStatus::Departed)
            } else {
                FlightStatus::Scheduled
            };

            flights.push(Flight {
                flight_id,
                flight_number: format!(
                    "{}{:04}",
                    airline.iata_code,
                    self.rng.random_range(0..10_000)
                ),
                airline_id: airline.airline_id,
                departure_airport_id,
                arrival_airport_id,
                aircraft_id,
                scheduled_departure_time,
                actual_departure_time: flight_status
                    .has_departed()
                    .then_some(actual_departure_time),
                scheduled_arrival_time,
                actual_arrival_time: flight_status.has_arrived().then_some(actual_arrival_time),
                flight_status,
                gate: format!("G{:02}", self.rng.random_range(0..100)),
                terminal: TERMINALS
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(TERMINALS[0])
                    .into(),
                price: (self.rng.random_range(50.0..1000.0_f64) * 100.0).round() / 100.0,
            });
        }

        Ok(flights)
    }

    /// # Errors
    ///
    /// When no unused passport number can be found.
    pub fn generate_passengers(&mut self, count: u32) -> Result<Vec<Passenger>, Error> {
        let mut emails = HashSet::new();
        let mut passport_numbers = HashSet::new();

        (1..=count)
            .map(|passenger_id| -> Result<Passenger, Error> {
                let mut email: String = SafeEmail().fake_with_rng(&mut self.rng);
                if !emails.insert(email.clone()) {
                    email = format!("{passenger_id}.{email}");
                    emails.insert(email.clone());
                }
                let age_in_days = self.rng.random_range(DAYS_PER_YEAR..=90 * DAYS_PER_YEAR);

                Ok(Passenger {
                    passenger_id,
                    first_name: FirstName().fake_with_rng(&mut self.rng),
                    last_name: LastName().fake_with_rng(&mut self.rng),
                    email,
                    phone_number: self.phone_number(),
                    passport_number: self.unique(&mut passport_numbers, "passport number", |g| {
                        format!("{}{}", g.letters(2), g.digits(8))
                    })?,
                    date_of_birth: self.now.date() - Duration::days(age_in_days),
                    nationality: NATIONALITIES
                        .choose(&mut self.rng)
                        .copied()
                        .unwrap_or("USA")
                        .into(),
                })
            })
            .collect()
    }

    /// # Errors
    ///
    /// When any parent table is empty.
    pub fn generate_bookings(
        &mut self,
        count: u32,
        passengers: &[Passenger],
        flights: &[Flight],
        aircrafts: &[Aircraft],
    ) -> Result<Vec<Booking>, Error> {
        if passengers.is_empty() || flights.is_empty() || aircrafts.is_empty() {
            return Err(missing_booking_parents());
        }

        let capacity_by_aircraft: HashMap<u32, u32> = aircrafts
            .iter()
            .map(|aircraft| (aircraft.aircraft_id, aircraft.capacity))
            .collect();

        let mut bookings = vec![];
        for booking_id in 1..=count {
            let passenger_id = passengers
                .choose(&mut self.rng)
                .ok_or_else(missing_booking_parents)?
                .passenger_id;
            let flight = flights
                .choose(&mut self.rng)
                .ok_or_else(missing_booking_parents)?;

            let seat_rows = capacity_by_aircraft
                .get(&flight.aircraft_id)
                .map_or(FALLBACK_SEAT_ROWS, |capacity| (capacity / SEATS_PER_ROW).max(1));
            let seat_number = format!(
                "{}{}",
                self.rng.random_range(1..=seat_rows),
                SEAT_LETTERS.choose(&mut self.rng).copied().unwrap_or('A')
            );

            bookings.push(Booking {
                booking_id,
                passenger_id,
                flight_id: flight.flight_id,
                booking_date: self
                    .date_time_between(self.now - Duration::days(DAYS_PER_YEAR), self.now),
                seat_number,
                class: BookingClass::ALL
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(BookingClass::Economy),
                payment_status: PaymentStatus::ALL
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(PaymentStatus::Pending),
                booking_status: BookingStatus::ALL
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(BookingStatus::Confirmed),
                baggage_allowance: self.rng.random_range(15..=50),
                checkin_status: self.rng.random_bool(CHECKIN_PROBABILITY),
            });
        }

        Ok(bookings)
    }

    fn choose_airport(&mut self, airports: &[Airport]) -> Result<u32, Error> {
        airports
            .choose(&mut self.rng)
            .map(|airport| airport.airport_id)
            .ok_or_else(missing_flight_parents)
    }

    /// Drops any extension and keeps the number within `VARCHAR(20)`.
    fn phone_number(&mut self) -> String {
        let phone_number: String = PhoneNumber().fake_with_rng(&mut self.rng);
        phone_number
            .split(" x")
            .next()
            .unwrap_or_default()
            .chars()
            .take(PHONE_NUMBER_MAX_LEN)
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn letters(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(self.rng.random_range(b'A'..=b'Z')))
            .collect()
    }

    fn digits(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(self.rng.random_range(b'0'..=b'9')))
            .collect()
    }

    /// Redraws until `make` yields a value not in `taken`.
    fn unique(
        &mut self,
        taken: &mut HashSet<String>,
        kind: &'static str,
        make: impl Fn(&mut Self) -> String,
    ) -> Result<String, Error> {
        for _ in 0..MAX_UNIQUE_ATTEMPTS {
            let candidate = make(&mut *self);
            if taken.insert(candidate.clone()) {
                return Ok(candidate);
            }
        }

        Err(AirlineDataError::CodeSpaceExhausted {
            kind,
            attempts: MAX_UNIQUE_ATTEMPTS,
        }
        .into())
    }

    fn date_time_between(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> NaiveDateTime {
        let span = (end - start).num_seconds().max(0);
        start + Duration::seconds(self.rng.random_range(0..=span))
    }
}

fn missing_flight_parents() -> Error {
    AirlineDataError::MissingParentTable {
        dependent: "Flights",
        parents: "Airlines, Airports and Aircrafts",
    }
    .into()
}

fn missing_booking_parents() -> Error {
    AirlineDataError::MissingParentTable {
        dependent: "Bookings",
        parents: "Passengers, Flights and Aircrafts",
    }
    .into()
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::*;

    fn generator(seed: u64) -> DataGenerator<StdRng> {
        let now = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        DataGenerator::new(StdRng::seed_from_u64(seed), now)
    }

    #[test]
    fn test_airline_ids_and_codes() {
        let airlines = generator(1).generate_airlines(5).unwrap();

        assert_eq!(
            vec![1, 2, 3, 4, 5],
            airlines.iter().map(|a| a.airline_id).collect::<Vec<_>>()
        );
        for airline in &airlines {
            assert!(airline.airline_name.ends_with(" Airlines"));
            assert_eq!(2, airline.iata_code.len());
            assert_eq!(3, airline.icao_code.len());
            assert!(airline.iata_code.chars().all(|c| c.is_ascii_uppercase()));
        }
        let iata: HashSet<&str> = airlines.iter().map(|a| a.iata_code.as_str()).collect();
        assert_eq!(5, iata.len());
    }

    #[test]
    fn test_iata_code_space_exhausted() {
        let result = generator(1).generate_airlines(26 * 26 + 1);

        assert!(result.is_err());
        assert_eq!(
            "Could not generate an unused IATA code after 10000 attempts",
            result.unwrap_err().to_string()
        );
    }

    #[test]
    fn test_aircraft_manufacturer_matches_type() {
        let mut generator = generator(2);
        let airlines = generator.generate_airlines(3).unwrap();
        let aircrafts = generator.generate_aircrafts(50, &airlines);

        for aircraft in &aircrafts {
            assert!(aircraft.aircraft_type.starts_with(&aircraft.manufacturer));
            assert!((100..=400).contains(&aircraft.capacity));
            assert!((2000..=2024).contains(&aircraft.year_of_manufacture));
            assert!(aircraft.airline_id.is_some_and(|id| (1..=3).contains(&id)));
        }
    }

    #[test]
    fn test_aircraft_without_airlines() {
        let aircrafts = generator(3).generate_aircrafts(4, &[]);

        assert_eq!(4, aircrafts.len());
        assert!(aircrafts.iter().all(|a| a.airline_id.is_none()));
    }

    #[test]
    fn test_flights_need_two_airports() {
        let mut generator = generator(4);
        let airlines = generator.generate_airlines(1).unwrap();
        let airports = generator.generate_airports(1).unwrap();
        let aircrafts = generator.generate_aircrafts(1, &airlines);

        let err = generator
            .generate_flights(3, &airlines, &airports, &aircrafts)
            .unwrap_err();
        assert_eq!(
            "Flight generation requires at least 2 airports, got 1",
            err.to_string()
        );
    }

    #[test]
    fn test_flight_times_follow_status() {
        let mut generator = generator(5);
        let now = generator.now;
        let airlines = generator.generate_airlines(5).unwrap();
        let airports = generator.generate_airports(20).unwrap();
        let aircrafts = generator.generate_aircrafts(10, &airlines);
        let flights = generator
            .generate_flights(200, &airlines, &airports, &aircrafts)
            .unwrap();

        for flight in &flights {
            assert!(flight.scheduled_arrival_time > flight.scheduled_departure_time);
            assert_eq!(3, flight.gate.len());
            assert!(flight.gate.starts_with('G'));
            assert!((50.0..=1000.0).contains(&flight.price));
            if flight.scheduled_departure_time < now {
                assert_ne!(FlightStatus::Scheduled, flight.flight_status);
            } else {
                assert_eq!(FlightStatus::Scheduled, flight.flight_status);
            }
            assert_eq!(
                flight.flight_status.has_departed(),
                flight.actual_departure_time.is_some()
            );
            assert_eq!(
                flight.flight_status.has_arrived(),
                flight.actual_arrival_time.is_some()
            );
        }
    }

    #[test]
    fn test_passengers() {
        let mut generator = generator(6);
        let today = generator.now.date();
        let passengers = generator.generate_passengers(300).unwrap();

        let emails: HashSet<&str> = passengers.iter().map(|p| p.email.as_str()).collect();
        assert_eq!(300, emails.len());
        for passenger in &passengers {
            assert_eq!(10, passenger.passport_number.len());
            assert!(passenger.passport_number[..2]
                .chars()
                .all(|c| c.is_ascii_uppercase()));
            assert!(passenger.passport_number[2..]
                .chars()
                .all(|c| c.is_ascii_digit()));
            assert_eq!(3, passenger.nationality.len());
            let age_in_days = (today - passenger.date_of_birth).num_days();
            assert!((DAYS_PER_YEAR..=90 * DAYS_PER_YEAR).contains(&age_in_days));
        }
    }

    #[test]
    fn test_phone_numbers_fit_column() {
        let mut generator = generator(8);
        let airlines = generator.generate_airlines(50).unwrap();
        let passengers = generator.generate_passengers(500).unwrap();

        for phone_number in airlines
            .iter()
            .map(|a| &a.phone_number)
            .chain(passengers.iter().map(|p| &p.phone_number))
        {
            assert!(!phone_number.is_empty());
            assert!(phone_number.chars().count() <= PHONE_NUMBER_MAX_LEN);
            assert!(!phone_number.contains(" x"));
        }
    }

    #[test]
    fn test_nationality_codes() {
        assert_eq!(249, NATIONALITIES.len());
        assert_eq!(
            NATIONALITIES.len(),
            NATIONALITIES.iter().collect::<HashSet<_>>().len()
        );
        assert!(NATIONALITIES
            .iter()
            .all(|code| code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn test_seat_number_bounded_by_capacity() {
        let mut generator = generator(7);
        let airlines = generator.generate_airlines(2).unwrap();
        let airports = generator.generate_airports(2).unwrap();
        let aircrafts = generator.generate_aircrafts(5, &airlines);
        let flights = generator
            .generate_flights(10, &airlines, &airports, &aircrafts)
            .unwrap();
        let passengers = generator.generate_passengers(10).unwrap();
        let bookings = generator
            .generate_bookings(200, &passengers, &flights, &aircrafts)
            .unwrap();

        for booking in &bookings {
            let flight = &flights[booking.flight_id as usize - 1];
            let capacity = aircrafts[flight.aircraft_id as usize - 1].capacity;
            let (row, letter) = booking.seat_number.split_at(booking.seat_number.len() - 1);
            let row: u32 = row.parse().unwrap();

            assert!(row >= 1 && row <= (capacity / SEATS_PER_ROW).max(1));
            assert!(SEAT_LETTERS.contains(&letter.chars().next().unwrap()));
            assert!((15..=50).contains(&booking.baggage_allowance));
            assert!(booking.booking_date <= generator.now);
        }
    }

    #[test]
    fn test_seat_number_fallback_when_aircraft_unknown() {
        let mut generator = generator(8);
        let airlines = generator.generate_airlines(1).unwrap();
        let airports = generator.generate_airports(2).unwrap();
        let aircrafts = generator.generate_aircrafts(1, &airlines);
        let flights = generator
            .generate_flights(5, &airlines, &airports, &aircrafts)
            .unwrap();
        let passengers = generator.generate_passengers(5).unwrap();
        let other_aircrafts = vec![Aircraft {
            aircraft_id: 99,
            ..aircrafts[0].clone()
        }];

        let bookings = generator
            .generate_bookings(100, &passengers, &flights, &other_aircrafts)
            .unwrap();
        for booking in &bookings {
            let row: u32 = booking.seat_number[..booking.seat_number.len() - 1]
                .parse()
                .unwrap();
            assert!((1..=FALLBACK_SEAT_ROWS).contains(&row));
        }
    }

    #[test]
    fn test_bookings_need_parents() {
        let mut generator = generator(9);
        let passengers = generator.generate_passengers(3).unwrap();

        let err = generator
            .generate_bookings(10, &passengers, &[], &[])
            .unwrap_err();
        assert_eq!(
            "Bookings generation requires non-empty Passengers, Flights and Aircrafts tables",
            err.to_string()
        );
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let counts = RecordCounts {
            airlines: 2,
            airports: 3,
            aircrafts: 4,
            flights: 5,
            passengers: 6,
            bookings: 7,
        };

        let lhs = generator(10).generate_dataset(&counts).unwrap();
        let rhs = generator(10).generate_dataset(&counts).unwrap();

        assert_eq!(lhs.tables(), rhs.tables());
    }
}
