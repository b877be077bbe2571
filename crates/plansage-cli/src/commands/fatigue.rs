//! Fatigue estimate command.

use plansage_core::{estimate_fatigue, FatigueLevel, FatigueScore, Mood};
use serde::Serialize;

#[derive(Serialize)]
struct FatigueReport {
    sleep_hours: u8,
    mood: Mood,
    score: FatigueScore,
    level: FatigueLevel,
}

pub fn run(sleep: u8, mood: Mood, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let score = estimate_fatigue(sleep, mood);
    if json {
        let out = FatigueReport {
            sleep_hours: sleep,
            mood,
            score,
            level: score.level(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", describe(score));
    }
    Ok(())
}

/// One-line summary such as `low fatigue (score: 3/10)`.
pub fn describe(score: FatigueScore) -> String {
    let marker = match score.level() {
        FatigueLevel::Low => "[ok]",
        FatigueLevel::Medium => "[!]",
        FatigueLevel::High => "[!!]",
    };
    format!("{marker} {} fatigue (score: {score})", score.level())
}
