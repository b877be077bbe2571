//! Task records and the append-only task list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{CoreError, Result};

/// Smallest estimate accepted, also the estimate granularity.
pub const HOURS_STEP: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        f.write_str(name)
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" | "높음" => Ok(Priority::High),
            "medium" | "중간" => Ok(Priority::Medium),
            "low" | "낮음" => Ok(Priority::Low),
            other => Err(CoreError::invalid(
                "priority",
                format!("unknown priority '{other}', expected high, medium or low"),
            )),
        }
    }
}

/// A task the user wants to fit into the week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub due_date: NaiveDate,
    pub estimated_hours: f64,
    pub priority: Priority,
}

impl Task {
    /// Validate the fields and assign a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] for a blank name or an estimate
    /// that is not a positive multiple of half an hour.
    pub fn new(
        name: impl Into<String>,
        due_date: NaiveDate,
        estimated_hours: f64,
        priority: Priority,
    ) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(CoreError::invalid("name", "task name must not be empty"));
        }
        validate_hours(estimated_hours)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            due_date,
            estimated_hours,
            priority,
        })
    }
}

fn validate_hours(hours: f64) -> Result<()> {
    if !hours.is_finite() || hours < HOURS_STEP {
        return Err(CoreError::invalid(
            "estimated_hours",
            format!("{hours} must be at least {HOURS_STEP}"),
        ));
    }
    if (hours / HOURS_STEP).fract() != 0.0 {
        return Err(CoreError::invalid(
            "estimated_hours",
            format!("{hours} is not a multiple of {HOURS_STEP}"),
        ));
    }
    Ok(())
}

/// Ordered, append-only list of tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task and return a reference to the stored copy.
    pub fn push(&mut self, task: Task) -> &Task {
        tracing::debug!(task_id = %task.id, name = %task.name, "task added");
        let index = self.tasks.len();
        self.tasks.push(task);
        &self.tasks[index]
    }

    /// Most recently added task.
    pub fn last(&self) -> Option<&Task> {
        self.tasks.last()
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
    }

    #[test]
    fn test_task_new_trims_name() {
        let task = Task::new("  Report  ", due(), 1.5, Priority::High).unwrap();
        assert_eq!(task.name, "Report");
        assert_eq!(task.estimated_hours, 1.5);
    }

    #[test]
    fn test_task_rejects_blank_name() {
        assert!(Task::new("   ", due(), 1.0, Priority::Low).is_err());
    }

    #[test]
    fn test_estimated_hours_validation() {
        assert!(Task::new("a", due(), 0.5, Priority::Low).is_ok());
        assert!(Task::new("a", due(), 3.0, Priority::Low).is_ok());
        assert!(Task::new("a", due(), 0.0, Priority::Low).is_err());
        assert!(Task::new("a", due(), 0.25, Priority::Low).is_err());
        assert!(Task::new("a", due(), 1.2, Priority::Low).is_err());
        assert!(Task::new("a", due(), f64::NAN, Priority::Low).is_err());
        assert!(Task::new("a", due(), -1.0, Priority::Low).is_err());
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("중간".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("낮음".parse::<Priority>().unwrap(), Priority::Low);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut list = TaskList::new();
        assert!(list.last().is_none());

        let first = Task::new("first", due(), 1.0, Priority::High).unwrap();
        let second = Task::new("second", due(), 2.0, Priority::Low).unwrap();
        let first_id = first.id;
        list.push(first);
        list.push(second);

        assert_eq!(list.iter().count(), 2);
        assert_eq!(list.last().unwrap().name, "second");
        assert_eq!(list.get(first_id).unwrap().name, "first");
        let names: Vec<&str> = list.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }
}
