//! One-shot slot recommendation.

use std::path::Path;

use clap::Args;
use plansage_core::{
    estimate_fatigue, recommend_with, CalendarGrid, FatigueScore, Mood, Recommendation, Slot,
};
use serde::Serialize;

use super::fatigue::describe;
use super::load_config;

#[derive(Serialize)]
struct RecommendReport<'a> {
    fatigue: FatigueScore,
    recommendations: &'a [Recommendation],
}

#[derive(Args)]
pub struct RecommendArgs {
    /// Hours slept last night (0-12)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=12))]
    sleep: u8,
    /// Current mood: good, neutral or bad
    #[arg(long)]
    mood: Mood,
    /// Already booked slot, e.g. 월:10시 or mon:10 (repeatable)
    #[arg(long = "booked", value_name = "DAY:HOUR")]
    booked: Vec<Slot>,
    /// Number of slots to return (defaults to recommend.top_n)
    #[arg(long)]
    top: Option<usize>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(args: RecommendArgs, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let mut recommend_config = config.recommend_config();
    if let Some(top) = args.top {
        if top == 0 {
            return Err("--top must be at least 1".into());
        }
        recommend_config.top_n = top;
    }

    let mut grid = CalendarGrid::new();
    for slot in &args.booked {
        grid.book(slot.day, slot.hour, "busy")?;
    }

    let fatigue = estimate_fatigue(args.sleep, args.mood);
    let recs = recommend_with(&grid, fatigue, &recommend_config);

    if args.json {
        let out = RecommendReport {
            fatigue,
            recommendations: &recs,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", describe(fatigue));
    print!("{}", render_recommendations(&recs));
    Ok(())
}

/// Numbered list, or a notice when nothing is free.
pub fn render_recommendations(recs: &[Recommendation]) -> String {
    if recs.is_empty() {
        return "No free slots left this week.\n".to_string();
    }
    let mut out = String::from("Recommended slots:\n");
    for (i, rec) in recs.iter().enumerate() {
        out.push_str(&format!("  {}. {} {}  (score {})\n", i + 1, rec.day, rec.hour, rec.score));
    }
    out
}
