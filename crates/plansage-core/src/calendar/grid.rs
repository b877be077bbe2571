//! Weekly calendar grid: 13 hour rows by 5 weekday columns.

use serde::{Deserialize, Serialize};

use super::slot::{Day, Hour, Slot};
use crate::error::{CoreError, Result};

/// What to do when booking a cell that already has an occupant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingPolicy {
    /// Replace the occupant silently.
    #[default]
    Overwrite,
    /// Refuse with [`CoreError::SlotOccupied`].
    Strict,
}

/// Weekly grid of free-text occupants. An empty string marks a free cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGrid {
    cells: [[String; Day::COUNT]; Hour::COUNT],
}

impl CalendarGrid {
    /// Every cell free.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current occupant, `""` when free.
    pub fn get(&self, day: Day, hour: Hour) -> &str {
        &self.cells[hour.index()][day.index()]
    }

    pub fn is_free(&self, day: Day, hour: Hour) -> bool {
        self.get(day, hour).is_empty()
    }

    /// Write `label` into the cell regardless of what is there.
    ///
    /// Returns the previous occupant when one was replaced. A blank label is
    /// rejected because it would leave the cell looking free.
    pub fn book(&mut self, day: Day, hour: Hour, label: &str) -> Result<Option<String>> {
        self.book_with_policy(day, hour, label, BookingPolicy::Overwrite)
    }

    /// Write `label` into the cell, honouring `policy` for occupied cells.
    pub fn book_with_policy(
        &mut self,
        day: Day,
        hour: Hour,
        label: &str,
        policy: BookingPolicy,
    ) -> Result<Option<String>> {
        if label.trim().is_empty() {
            return Err(CoreError::invalid("label", "booking label must not be empty"));
        }

        let cell = &mut self.cells[hour.index()][day.index()];
        if !cell.is_empty() && policy == BookingPolicy::Strict {
            return Err(CoreError::SlotOccupied {
                day: day.to_string(),
                hour: hour.to_string(),
                occupant: cell.clone(),
            });
        }

        let previous = std::mem::replace(cell, label.to_string());
        if previous.is_empty() {
            tracing::debug!(%day, %hour, label, "booked slot");
            Ok(None)
        } else {
            tracing::warn!(%day, %hour, label, previous = %previous, "overwrote booked slot");
            Ok(Some(previous))
        }
    }

    /// Label-keyed lookup for callers holding raw labels.
    pub fn is_free_label(&self, day: &str, hour: &str) -> Result<bool> {
        let (day, hour) = parse_labels(day, hour)?;
        Ok(self.is_free(day, hour))
    }

    /// Label-keyed booking. Unknown labels fail before anything is written.
    pub fn book_label(&mut self, day: &str, hour: &str, label: &str) -> Result<Option<String>> {
        let (day, hour) = parse_labels(day, hour)?;
        self.book(day, hour, label)
    }

    /// Occupied cells in enumeration order.
    pub fn occupied(&self) -> impl Iterator<Item = (Slot, &str)> + '_ {
        Slot::all().filter_map(move |slot| {
            let occupant = self.get(slot.day, slot.hour);
            (!occupant.is_empty()).then_some((slot, occupant))
        })
    }

    /// Free cells in enumeration order.
    pub fn free_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        Slot::all().filter(move |slot| self.is_free(slot.day, slot.hour))
    }

    /// Plain-text weekly table, one row per hour.
    pub fn render_table(&self) -> String {
        const WIDTH: usize = 12;
        let mut output = String::from("      ");
        for day in Day::ALL {
            output.push_str(&pad(day.label(), WIDTH));
        }
        output.push('\n');

        for hour in Hour::all() {
            output.push_str(&pad(&hour.label(), 6));
            for day in Day::ALL {
                let occupant = self.get(day, hour);
                let shown = if occupant.is_empty() { "·" } else { occupant };
                output.push_str(&pad(&truncate(shown, WIDTH - 1), WIDTH));
            }
            output.push('\n');
        }
        output
    }
}

fn parse_labels(day: &str, hour: &str) -> Result<(Day, Hour)> {
    Ok((day.parse()?, hour.parse()?))
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        text.to_string()
    }
}
