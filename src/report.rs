//! Text rendering of results for the terminal.

use std::fmt::Write as _;

use crate::{CanadaDay, MAX_YEAR, MIN_YEAR};

const RULE_WIDTH: usize = 60;
const BANNER_WIDTH: usize = 50;

/// Greeting printed once when the prompt session starts.
pub fn welcome() -> String {
    format!(
        "\n🍁 Welcome to the Canada Day Calculator! 🍁\n{}\nFind out what day of the week Canada Day falls on\nfor any year between {MIN_YEAR} and {MAX_YEAR}.\n\n",
        "━".repeat(BANNER_WIDTH)
    )
}

/// Farewell printed when the prompt session ends normally.
pub fn farewell() -> String {
    "\n🍁 Thank you for using the Canada Day Calculator! 🍁\nHappy Canada Day! 🇨🇦\n\n".to_owned()
}

/// Hint printed when the prompt session has no terminal to talk to.
pub fn not_interactive() -> String {
    "\n❌ This CLI requires an interactive terminal.\nTry running it in a different terminal or use the web interface.\n\n".to_owned()
}

/// Usage hint printed when the one-shot year argument is rejected.
pub fn usage(program: &str) -> String {
    format!("Usage: {program} [year]\nExample: {program} 2024\n")
}

fn kind_label(result: &CanadaDay) -> &'static str {
    if result.is_weekend() { "Weekend" } else { "Weekday" }
}

fn kind_icon(result: &CanadaDay) -> &'static str {
    if result.is_weekend() { "🎈" } else { "📝" }
}

/// Full result block shown by the prompt session.
pub fn full(result: &CanadaDay) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "🎉 CANADA DAY {} RESULT 🎉", result.year());
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "📅 Date: {}", result.date());
    let _ = writeln!(out, "📆 Day: {}", result.weekday());
    let _ = writeln!(out, "{} Type: {}", kind_icon(result), kind_label(result));
    let _ = writeln!(out, "\n💡 Fun Fact:");
    let _ = writeln!(out, "{}", result.fun_fact());
    let _ = writeln!(out, "{rule}\n");
    out
}

/// Abbreviated result printed by the one-shot mode.
pub fn summary(result: &CanadaDay) -> String {
    format!(
        "\n🎉 Canada Day {}: {}\n📅 {}\n{} {}\n\n💡 {}\n\n",
        result.year(),
        result.weekday(),
        result.date(),
        kind_icon(result),
        kind_label(result),
        result.fun_fact()
    )
}
