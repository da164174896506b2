use chrono::{DateTime, TimeZone};
use serde_json::{json, Value};

use crate::error::MobihwError;
use crate::models::{Cadence, CategoryGroup, Character, Progress, TaskView};
use crate::schedule::{BarrierStatus, ResetOutcome};

pub fn print(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &MobihwError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn progress_json(p: &Progress) -> Value {
    json!({
        "total": p.total,
        "done": p.done,
        "percentage": (p.percentage * 10.0).round() / 10.0
    })
}

pub fn character_json(c: &Character, selected: bool) -> Value {
    json!({
        "id": c.id,
        "name": c.name,
        "selected": selected,
        "daily": progress_json(&c.progress(Cadence::Daily)),
        "weekly": progress_json(&c.progress(Cadence::Weekly))
    })
}

pub fn task_json(v: &TaskView) -> Value {
    let mut out = json!({
        "id": v.task.id(),
        "name": v.task.name(),
        "category": v.task.category(),
        "done": v.done
    });
    if let Some(required) = v.task.required_count() {
        out["count"] = json!(v.count);
        out["required_count"] = json!(required);
    }
    out
}

pub fn groups_json(groups: &[CategoryGroup]) -> Value {
    let groups: Vec<Value> = groups
        .iter()
        .map(|g| {
            json!({
                "category": g.category,
                "tasks": g.tasks.iter().map(task_json).collect::<Vec<_>>()
            })
        })
        .collect();
    json!(groups)
}

pub fn reset_json(outcome: &ResetOutcome) -> Value {
    json!({
        "daily": outcome.daily_reset,
        "weekly": outcome.weekly_reset,
        "characters": outcome.characters
    })
}

pub fn countdown_json<Tz: TimeZone>(now: &DateTime<Tz>) -> Value
where
    Tz::Offset: std::fmt::Display,
{
    let daily = crate::schedule::next_daily_cutover(now);
    let weekly = crate::schedule::next_weekly_cutover(now);
    json!({
        "daily": {
            "next_reset": daily.to_rfc3339(),
            "remaining_secs": daily.signed_duration_since(now.clone()).num_seconds()
        },
        "weekly": {
            "next_reset": weekly.to_rfc3339(),
            "remaining_secs": weekly.signed_duration_since(now.clone()).num_seconds()
        }
    })
}

pub fn barrier_json<Tz: TimeZone>(status: &BarrierStatus<Tz>, alarm: bool) -> Value
where
    Tz::Offset: std::fmt::Display,
{
    json!({
        "active": status.is_active(),
        "active_hour": status.active_hour,
        "next_start": status.next_start.to_rfc3339(),
        "remaining_secs": status.until_next.num_seconds(),
        "alarm": alarm
    })
}
