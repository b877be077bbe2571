//! # PlanSage Core Library
//!
//! This library provides the core logic for PlanSage, a personal scheduling
//! assistant that suggests open weekly time slots based on how tired you are.
//! All operations are plain function calls; the CLI binary is a thin shell
//! over the same library.
//!
//! ## Architecture
//!
//! - **Fatigue**: sleep hours and mood folded into a 1-10 score
//! - **Calendar**: fixed weekly grid (8시..20시 by 월..금) of slot occupants
//! - **Recommend**: ranks free slots by time of day minus fatigue
//! - **Task**: append-only list of tasks used to label bookings
//! - **Session**: explicit context object tying the above together
//!
//! ## Key Components
//!
//! - [`estimate_fatigue`]: fatigue heuristic
//! - [`recommend`]: slot scorer
//! - [`CalendarGrid`]: weekly grid with point lookup and booking
//! - [`Session`]: state of one interactive sitting
//! - [`Config`]: application configuration management

pub mod calendar;
pub mod error;
pub mod fatigue;
pub mod recommend;
pub mod session;
pub mod storage;
pub mod task;

pub use calendar::{BookingPolicy, CalendarGrid, Day, Hour, Slot};
pub use error::{ConfigError, CoreError, Result};
pub use fatigue::{estimate_fatigue, FatigueLevel, FatigueScore, Mood};
pub use recommend::{recommend, recommend_with, time_weight, RecommendConfig, Recommendation};
pub use session::{BookingLabel, BookingReceipt, Session};
pub use storage::Config;
pub use task::{Priority, Task, TaskList};
