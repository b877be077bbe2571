//! Weekly calendar store.
//!
//! The grid is a fixed 13x5 table: hours 8시..20시 by weekdays 월..금.

mod grid;
mod slot;

pub use grid::{BookingPolicy, CalendarGrid};
pub use slot::{Day, Hour, Slot};
