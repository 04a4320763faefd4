//! This crate implements a calendar entity for Trondheim's municipal waste collection.
//! The pickup schedule is read from <https://trv.no/wp-json/wasteplan/v2/calendar/>.
//!
//! [`coordinator::PickupCoordinator`] fetches and caches the raw plan,
//! [`calendar::WastePlanCalendar`] rebuilds the upcoming pickup events on every
//! refresh, and [`ics`] renders them as an iCalendar for the CLI and the server.

pub use ical;

pub mod calendar;
pub mod config;
pub mod coordinator;
pub mod entity;
mod error;
pub mod ics;
pub mod wasteplan_client;

pub use error::{Error, Result};
