//! Interactive planning session.
//!
//! A [`Session`] is owned by whatever shell drives the interaction and holds
//! everything that lives for one sitting: the task list, the weekly grid, the
//! last fatigue check-in and the last set of recommendations. Nothing here is
//! persisted.

use serde::Serialize;
use uuid::Uuid;

use crate::calendar::{BookingPolicy, CalendarGrid, Slot};
use crate::error::{CoreError, Result};
use crate::fatigue::{estimate_fatigue, FatigueScore, Mood};
use crate::recommend::{recommend_with, RecommendConfig, Recommendation};
use crate::storage::{Config, DEFAULT_FALLBACK_LABEL};
use crate::task::{Task, TaskList};

/// How to label a booked slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingLabel {
    /// Use this text.
    Text(String),
    /// Use the name of the task with this id.
    Task(Uuid),
    /// Use the most recently added task, or the fallback label if none.
    LatestTask,
}

/// Result of a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingReceipt {
    pub slot: Slot,
    pub label: String,
    /// Occupant that was overwritten, if any.
    pub replaced: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Session {
    tasks: TaskList,
    grid: CalendarGrid,
    fatigue: Option<FatigueScore>,
    recommendations: Vec<Recommendation>,
    policy: BookingPolicy,
    recommend_config: RecommendConfig,
    fallback_label: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Empty session with default settings.
    pub fn new() -> Self {
        Self {
            tasks: TaskList::new(),
            grid: CalendarGrid::new(),
            fatigue: None,
            recommendations: Vec::new(),
            policy: BookingPolicy::default(),
            recommend_config: RecommendConfig::default(),
            fallback_label: DEFAULT_FALLBACK_LABEL.to_string(),
        }
    }

    /// Empty session using the recommendation and booking settings of `config`.
    pub fn with_config(config: &Config) -> Self {
        Self {
            policy: config.booking.policy,
            recommend_config: config.recommend_config(),
            fallback_label: config.booking.fallback_label.clone(),
            ..Self::new()
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    pub fn fatigue(&self) -> Option<FatigueScore> {
        self.fatigue
    }

    pub fn policy(&self) -> BookingPolicy {
        self.policy
    }

    /// Recommendations from the last refresh. Empty after a booking.
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Append a task and return a reference to it.
    pub fn add_task(&mut self, task: Task) -> &Task {
        self.tasks.push(task)
    }

    /// Record today's sleep and mood and return the fatigue estimate.
    pub fn check_in(&mut self, sleep_hours: u8, mood: Mood) -> FatigueScore {
        let score = estimate_fatigue(sleep_hours, mood);
        self.fatigue = Some(score);
        score
    }

    /// Recompute recommendations from the current grid and fatigue.
    ///
    /// # Errors
    ///
    /// [`CoreError::MissingCheckIn`] if no fatigue score has been recorded.
    pub fn refresh_recommendations(&mut self) -> Result<&[Recommendation]> {
        let fatigue = self.fatigue.ok_or(CoreError::MissingCheckIn)?;
        self.recommendations = recommend_with(&self.grid, fatigue, &self.recommend_config);
        Ok(&self.recommendations)
    }

    /// Mark a slot as taken by an existing commitment.
    ///
    /// Goes through the configured booking policy but does not require the
    /// slot to be recommended. Held recommendations are dropped since they may
    /// now point at an occupied slot.
    pub fn block(&mut self, slot: Slot, label: &str) -> Result<BookingReceipt> {
        let replaced = self
            .grid
            .book_with_policy(slot.day, slot.hour, label, self.policy)?;
        self.recommendations.clear();
        Ok(BookingReceipt {
            slot,
            label: label.to_string(),
            replaced,
        })
    }

    /// Book one of the held recommendations.
    ///
    /// # Errors
    ///
    /// - [`CoreError::EmptySelection`] when no recommendations are held
    /// - [`CoreError::InvalidInput`] when `slot` is not among them
    /// - [`CoreError::UnknownTask`] when the label names a missing task
    /// - [`CoreError::SlotOccupied`] under the strict policy
    ///
    /// The grid is untouched on any error.
    pub fn book_selection(&mut self, slot: Slot, label: BookingLabel) -> Result<BookingReceipt> {
        if self.recommendations.is_empty() {
            return Err(CoreError::EmptySelection);
        }
        if !self.recommendations.iter().any(|r| r.slot() == slot) {
            return Err(CoreError::invalid(
                "selection",
                format!("{slot} is not one of the current recommendations"),
            ));
        }

        let label = self.resolve_label(&label)?;
        let receipt = self.block(slot, &label)?;
        tracing::info!(%slot, label = %receipt.label, "booked recommended slot");
        Ok(receipt)
    }

    fn resolve_label(&self, label: &BookingLabel) -> Result<String> {
        match label {
            BookingLabel::Text(text) => Ok(text.clone()),
            BookingLabel::Task(id) => self
                .tasks
                .get(*id)
                .map(|t| t.name.clone())
                .ok_or_else(|| CoreError::UnknownTask(id.to_string())),
            BookingLabel::LatestTask => Ok(self
                .tasks
                .last()
                .map(|t| t.name.clone())
                .unwrap_or_else(|| self.fallback_label.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Day, Hour};
    use crate::task::Priority;
    use chrono::NaiveDate;

    fn task(name: &str) -> Task {
        let due = NaiveDate::from_ymd_opt(2026, 10, 23).unwrap();
        Task::new(name, due, 1.0, Priority::Medium).unwrap()
    }

    fn slot(day: Day, hour: u8) -> Slot {
        Slot::new(day, Hour::new(hour).unwrap())
    }

    #[test]
    fn test_refresh_requires_check_in() {
        let mut session = Session::new();
        assert!(matches!(
            session.refresh_recommendations(),
            Err(CoreError::MissingCheckIn)
        ));
    }

    #[test]
    fn test_booking_without_recommendations() {
        let mut session = Session::new();
        let err = session
            .book_selection(slot(Day::Mon, 10), BookingLabel::LatestTask)
            .unwrap_err();
        assert!(matches!(err, CoreError::EmptySelection));
        assert_eq!(session.grid(), &CalendarGrid::new());
    }

    #[test]
    fn test_booking_slot_not_recommended() {
        let mut session = Session::new();
        session.check_in(7, Mood::Neutral);
        session.refresh_recommendations().unwrap();
        let err = session
            .book_selection(slot(Day::Fri, 20), BookingLabel::Text("x".into()))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { .. }));
        assert!(session.grid().is_free(Day::Fri, Hour::new(20).unwrap()));
        assert_eq!(session.recommendations().len(), 5);
    }

    #[test]
    fn test_latest_task_label_and_fallback() {
        let mut session = Session::new();
        session.check_in(8, Mood::Good);
        session.refresh_recommendations().unwrap();
        let receipt = session
            .book_selection(slot(Day::Mon, 10), BookingLabel::LatestTask)
            .unwrap();
        assert_eq!(receipt.label, DEFAULT_FALLBACK_LABEL);

        session.add_task(task("Essay"));
        session.add_task(task("Slides"));
        session.refresh_recommendations().unwrap();
        let receipt = session
            .book_selection(slot(Day::Mon, 11), BookingLabel::LatestTask)
            .unwrap();
        assert_eq!(receipt.label, "Slides");
    }

    #[test]
    fn test_explicit_task_label() {
        let mut session = Session::new();
        let essay_id = session.add_task(task("Essay")).id;
        session.add_task(task("Slides"));
        session.check_in(6, Mood::Neutral);
        session.refresh_recommendations().unwrap();

        let receipt = session
            .book_selection(slot(Day::Mon, 12), BookingLabel::Task(essay_id))
            .unwrap();
        assert_eq!(receipt.label, "Essay");
        assert_eq!(session.grid().get(Day::Mon, Hour::new(12).unwrap()), "Essay");
    }

    #[test]
    fn test_unknown_task_does_not_mutate() {
        let mut session = Session::new();
        session.check_in(6, Mood::Neutral);
        session.refresh_recommendations().unwrap();
        let err = session
            .book_selection(slot(Day::Mon, 10), BookingLabel::Task(Uuid::new_v4()))
            .unwrap_err();
        assert!(matches!(err, CoreError::UnknownTask(_)));
        assert_eq!(session.grid().occupied().count(), 0);
    }

    #[test]
    fn test_booking_clears_recommendations() {
        let mut session = Session::new();
        session.check_in(7, Mood::Neutral);
        session.refresh_recommendations().unwrap();
        session
            .book_selection(slot(Day::Mon, 10), BookingLabel::Text("Read".into()))
            .unwrap();
        assert!(session.recommendations().is_empty());

        let recs = session.refresh_recommendations().unwrap();
        assert!(recs.iter().all(|r| r.slot() != slot(Day::Mon, 10)));
    }

    #[test]
    fn test_strict_block_rejects_occupied() {
        let mut config = Config::default();
        config.booking.policy = BookingPolicy::Strict;
        let mut session = Session::with_config(&config);

        session.block(slot(Day::Wed, 9), "Class").unwrap();
        let err = session.block(slot(Day::Wed, 9), "Gym").unwrap_err();
        assert!(matches!(err, CoreError::SlotOccupied { .. }));
        assert_eq!(session.grid().get(Day::Wed, Hour::new(9).unwrap()), "Class");
    }

    #[test]
    fn test_overwrite_block_reports_replaced() {
        let mut session = Session::new();
        session.block(slot(Day::Thu, 14), "Class").unwrap();
        let receipt = session.block(slot(Day::Thu, 14), "Lab").unwrap();
        assert_eq!(receipt.replaced.as_deref(), Some("Class"));
    }

    #[test]
    fn test_with_config_applies_top_n() {
        let mut config = Config::default();
        config.recommend.top_n = 2;
        let mut session = Session::with_config(&config);
        session.check_in(7, Mood::Neutral);
        assert_eq!(session.refresh_recommendations().unwrap().len(), 2);
    }
}
