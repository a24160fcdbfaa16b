#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]
// Not published, so there is no repository URL to declare.
#![allow(clippy::cargo_common_metadata)]

pub mod catalog;
pub mod common;
pub mod config;
pub mod dataset;
pub mod generator;
pub mod loader;
pub mod model;
pub mod schema;
pub mod value;
