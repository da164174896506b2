use chrono::{DateTime, TimeZone};

use crate::models::{CategoryGroup, Character, Progress, TaskView};
use crate::schedule::barrier::BARRIER_HOURS;
use crate::schedule::{
    format_countdown, time_until_daily_reset, time_until_weekly_reset, BarrierStatus, ResetOutcome,
};

pub fn print_character_list(characters: &[Character], selected: Option<&str>) {
    if characters.is_empty() {
        println!("No characters yet.");
        return;
    }
    for c in characters {
        let marker = if Some(c.id.as_str()) == selected { " *" } else { "" };
        println!("  {} ({}){}", c.name, c.id, marker);
    }
}

pub fn task_line(v: &TaskView) -> String {
    let check = if v.done { "x" } else { " " };
    match v.task.required_count() {
        Some(required) => format!(
            "[{check}] {} ({}) {}/{}",
            v.task.name(),
            v.task.id(),
            v.count,
            required
        ),
        None => format!("[{check}] {} ({})", v.task.name(), v.task.id()),
    }
}

pub fn print_task_groups(groups: &[CategoryGroup]) {
    if groups.is_empty() {
        println!("No tasks found.");
        return;
    }
    for g in groups {
        println!("{}", g.category);
        for v in &g.tasks {
            println!("  {}", task_line(v));
        }
    }
}

pub fn print_progress(label: &str, p: &Progress) {
    println!("{label}: {:.1}% ({}/{})", p.percentage, p.done, p.total);
}

pub fn print_countdowns<Tz: TimeZone>(now: &DateTime<Tz>) {
    println!("Daily reset in {}", format_countdown(time_until_daily_reset(now)));
    println!("Weekly reset in {}", format_countdown(time_until_weekly_reset(now)));
}

pub fn print_barrier<Tz: TimeZone>(status: &BarrierStatus<Tz>, alarm: bool) {
    match status.active_hour {
        Some(hour) => println!("Barrier: {hour:02}:00 window is open (15 minutes)"),
        None => println!("Barrier: next in {}", format_countdown(status.until_next)),
    }
    let hours: Vec<String> = BARRIER_HOURS.iter().map(|h| format!("{h:02}:00")).collect();
    println!("  Windows: {}", hours.join(", "));
    println!("  Alarm: {}", if alarm { "on" } else { "off" });
}

pub fn print_reset(outcome: &ResetOutcome) {
    if outcome.daily_reset {
        println!("Daily progress cleared for {} character(s).", outcome.characters);
    }
    if outcome.weekly_reset {
        println!("Weekly progress cleared for {} character(s).", outcome.characters);
    }
}
