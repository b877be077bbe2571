//! Interactive planning session.
//!
//! Reads one command per line from stdin and keeps a single in-memory
//! [`Session`] until `quit` or end of input.

use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use plansage_core::{BookingLabel, Mood, Priority, Session, Slot, Task};
use uuid::Uuid;

use super::fatigue::describe;
use super::load_config;
use super::recommend::render_recommendations;

#[derive(Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: ReplCommand,
}

#[derive(Subcommand)]
enum ReplCommand {
    /// Task list management
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Record sleep and mood
    Checkin {
        /// Hours slept last night (0-12)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=12))]
        sleep: u8,
        /// Current mood: good, neutral or bad
        #[arg(long)]
        mood: Mood,
    },
    /// Recompute slot recommendations
    Recommend,
    /// Book the N-th recommendation
    Book {
        /// Position in the last recommendation list (1-based)
        choice: usize,
        /// Label the slot with this text
        #[arg(long, conflicts_with = "task")]
        label: Option<String>,
        /// Label the slot with this task's name
        #[arg(long)]
        task: Option<Uuid>,
    },
    /// Mark a slot as taken by an existing commitment
    Block {
        /// Slot such as 월:10시 or mon:10
        slot: Slot,
        /// What occupies it
        label: String,
    },
    /// Show the weekly calendar
    Calendar,
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand)]
enum TaskAction {
    /// Add a task
    Add {
        /// Task name
        name: String,
        /// Due date (YYYY-MM-DD, default: today)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Estimated hours, in steps of 0.5
        #[arg(long, default_value = "1")]
        hours: f64,
        /// Priority: high, medium or low
        #[arg(long, default_value = "medium")]
        priority: Priority,
    },
    /// List tasks
    List,
}

enum Flow {
    Continue,
    Quit,
}

pub fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let mut session = Session::with_config(&config);
    tracing::debug!(policy = ?session.policy(), "session started");
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_repl(&mut session, stdin.lock(), stdout.lock())
}

/// Drive `session` from `input` until `quit` or end of input.
///
/// Command errors are printed and the loop continues; only I/O errors end it.
pub fn run_repl<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut output: W,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(output, "PlanSage session. Type 'help' for commands, 'quit' to leave.")?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let tokens = split_args(&line);
        if !tokens.is_empty() {
            match Line::try_parse_from(&tokens) {
                Ok(parsed) => match execute(session, parsed.command, &mut output) {
                    Ok(Flow::Quit) => return Ok(()),
                    Ok(Flow::Continue) => {}
                    Err(e) => writeln!(output, "error: {e}")?,
                },
                Err(e) => write!(output, "{e}")?,
            }
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}

fn execute<W: Write>(
    session: &mut Session,
    command: ReplCommand,
    out: &mut W,
) -> Result<Flow, Box<dyn std::error::Error>> {
    match command {
        ReplCommand::Task { action: TaskAction::Add { name, due, hours, priority } } => {
            let due = due.unwrap_or_else(|| Local::now().date_naive());
            let task = session.add_task(Task::new(name, due, hours, priority)?);
            writeln!(out, "added '{}' ({})", task.name, task.id)?;
        }
        ReplCommand::Task { action: TaskAction::List } => {
            if session.tasks().is_empty() {
                writeln!(out, "no tasks yet")?;
            }
            for (i, task) in session.tasks().iter().enumerate() {
                writeln!(
                    out,
                    "  {}. {}  due {}  {}h  {}  [{}]",
                    i + 1,
                    task.name,
                    task.due_date,
                    task.estimated_hours,
                    task.priority,
                    task.id
                )?;
            }
        }
        ReplCommand::Checkin { sleep, mood } => {
            let score = session.check_in(sleep, mood);
            writeln!(out, "{}", describe(score))?;
        }
        ReplCommand::Recommend => {
            let recs = session.refresh_recommendations()?;
            write!(out, "{}", render_recommendations(recs))?;
        }
        ReplCommand::Book { choice, label, task } => {
            let slot = choice
                .checked_sub(1)
                .and_then(|i| session.recommendations().get(i))
                .map(|r| r.slot());
            let slot = match slot {
                Some(slot) => slot,
                None if session.recommendations().is_empty() => {
                    return Err(plansage_core::CoreError::EmptySelection.into())
                }
                None => {
                    return Err(format!(
                        "choice must be between 1 and {}",
                        session.recommendations().len()
                    )
                    .into())
                }
            };
            let label = match (label, task) {
                (Some(text), _) => BookingLabel::Text(text),
                (None, Some(id)) => BookingLabel::Task(id),
                (None, None) => BookingLabel::LatestTask,
            };
            let receipt = session.book_selection(slot, label)?;
            writeln!(out, "booked {} with '{}'", receipt.slot, receipt.label)?;
            if let Some(previous) = receipt.replaced {
                writeln!(out, "  (replaced '{previous}')")?;
            }
        }
        ReplCommand::Block { slot, label } => {
            let receipt = session.block(slot, &label)?;
            writeln!(out, "blocked {} with '{}'", receipt.slot, receipt.label)?;
        }
        ReplCommand::Calendar => {
            write!(out, "{}", session.grid().render_table())?;
        }
        ReplCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Whitespace split that keeps double-quoted runs together.
fn split_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if has_token {
        args.push(current);
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use plansage_core::{Day, Hour};

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        run_repl(session, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn split_args_handles_quotes() {
        assert_eq!(split_args("task add \"Lab report\" --hours 2"), ["task", "add", "Lab report", "--hours", "2"]);
        assert_eq!(split_args("  recommend  "), ["recommend"]);
        assert_eq!(split_args("block 월:10시 \"\""), ["block", "월:10시", ""]);
        assert!(split_args("   ").is_empty());
    }

    #[test]
    fn full_session_books_latest_task() {
        let mut session = Session::new();
        let output = run_script(
            &mut session,
            "task add \"Lab report\" --due 2026-10-30 --hours 2 --priority high\n\
             checkin --sleep 7 --mood neutral\n\
             recommend\n\
             book 1\n\
             quit\n\
             recommend\n",
        );

        assert!(output.contains("added 'Lab report'"));
        assert!(output.contains("low fatigue (score: 3/10)"));
        assert!(output.contains("1. 월 10시  (score 9)"));
        assert!(output.contains("booked 월 10시 with 'Lab report'"));
        assert_eq!(session.grid().get(Day::Mon, Hour::new(10).unwrap()), "Lab report");
        // Nothing after quit runs.
        assert!(session.recommendations().is_empty());
    }

    #[test]
    fn book_before_recommend_is_reported() {
        let mut session = Session::new();
        let output = run_script(&mut session, "book 1\n");
        assert!(output.contains("error: No recommendations available"));
        assert_eq!(session.grid().occupied().count(), 0);
    }

    #[test]
    fn recommend_before_checkin_is_reported() {
        let mut session = Session::new();
        let output = run_script(&mut session, "recommend\n");
        assert!(output.contains("error: No fatigue score recorded"));
    }

    #[test]
    fn book_out_of_range_choice() {
        let mut session = Session::new();
        let output = run_script(
            &mut session,
            "checkin --sleep 8 --mood good\nrecommend\nbook 9\nbook 0\n",
        );
        assert_eq!(output.matches("error: choice must be between 1 and 5").count(), 2);
        assert_eq!(session.grid().occupied().count(), 0);
    }

    #[test]
    fn block_and_calendar() {
        let mut session = Session::new();
        let output = run_script(&mut session, "block mon:8 Standup\ncalendar\n");
        assert!(output.contains("blocked 월 8시 with 'Standup'"));
        assert!(output.contains("Standup"));
        assert!(!session.grid().is_free(Day::Mon, Hour::new(8).unwrap()));
    }

    #[test]
    fn unknown_command_keeps_going() {
        let mut session = Session::new();
        let output = run_script(&mut session, "dance\ncheckin --sleep 6 --mood bad\n");
        assert!(output.contains("error"));
        assert_eq!(session.fatigue().map(|s| s.value()), Some(5));
    }

    #[test]
    fn explicit_label_wins() {
        let mut session = Session::new();
        run_script(
            &mut session,
            "task add Essay\ncheckin --sleep 7 --mood neutral\nrecommend\nbook 2 --label Reading\n",
        );
        assert_eq!(session.grid().get(Day::Mon, Hour::new(11).unwrap()), "Reading");
    }
}
