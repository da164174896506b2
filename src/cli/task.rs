use serde_json::json;

use crate::cli::commands::TaskCommands;
use crate::cli::finish;
use crate::cli::session::{validate_name, Session};
use crate::config::Config;
use crate::error::MobihwError;
use crate::models::{Cadence, TaskView};
use crate::output;

#[derive(Clone, Copy)]
enum CountAction {
    Toggle,
    Increment,
    Decrement,
    Reset,
}

impl CountAction {
    fn label(self) -> &'static str {
        match self {
            Self::Toggle => "Toggled",
            Self::Increment => "Counted",
            Self::Decrement => "Uncounted",
            Self::Reset => "Counter reset",
        }
    }
}

pub fn run(cmd: TaskCommands, config: &Config, json_output: bool) -> i32 {
    let result = match cmd {
        TaskCommands::List { weekly } => run_list(Cadence::from_weekly_flag(weekly), config, json_output),
        TaskCommands::Add { name, weekly, category, count } => run_add(
            &name,
            Cadence::from_weekly_flag(weekly),
            category.as_deref(),
            count,
            config,
            json_output,
        ),
        TaskCommands::Edit { id, name, weekly, category } => run_edit(
            &id,
            &name,
            Cadence::from_weekly_flag(weekly),
            category.as_deref(),
            config,
            json_output,
        ),
        TaskCommands::Delete { id, weekly } => {
            run_delete(&id, Cadence::from_weekly_flag(weekly), config, json_output)
        }
        TaskCommands::Toggle { id, weekly } => {
            run_count(&id, Cadence::from_weekly_flag(weekly), CountAction::Toggle, config, json_output)
        }
        TaskCommands::Inc { id, weekly } => {
            run_count(&id, Cadence::from_weekly_flag(weekly), CountAction::Increment, config, json_output)
        }
        TaskCommands::Dec { id, weekly } => {
            run_count(&id, Cadence::from_weekly_flag(weekly), CountAction::Decrement, config, json_output)
        }
        TaskCommands::ResetCount { id, weekly } => {
            run_count(&id, Cadence::from_weekly_flag(weekly), CountAction::Reset, config, json_output)
        }
    };
    finish(result, json_output)
}

fn run_list(cadence: Cadence, config: &Config, json_output: bool) -> Result<i32, MobihwError> {
    let session = Session::open(config)?;
    let character = session.selected()?;
    let groups = character.category_groups(cadence);
    let progress = character.progress(cadence);

    if json_output {
        output::json::print(&output::json::success(json!({
            "character": { "id": character.id, "name": character.name },
            "cadence": cadence.as_str(),
            "categories": cadence.known_categories(),
            "groups": output::json::groups_json(&groups),
            "progress": output::json::progress_json(&progress)
        })));
    } else {
        println!("{} - {} tasks", character.name, cadence);
        output::text::print_task_groups(&groups);
        println!();
        output::text::print_progress("Progress", &progress);
    }
    Ok(0)
}

fn run_add(
    name: &str,
    cadence: Cadence,
    category: Option<&str>,
    count: Option<u32>,
    config: &Config,
    json_output: bool,
) -> Result<i32, MobihwError> {
    validate_name(name, "Task")?;
    if count == Some(0) {
        return Err(MobihwError::validation("--count must be at least 1"));
    }

    let mut session = Session::open(config)?;
    session.selected()?;
    let id = match cadence {
        Cadence::Daily => session.store.add_daily_task(name, category, count),
        Cadence::Weekly => session.store.add_weekly_task(name, category),
    }
    .ok_or_else(MobihwError::no_selected_character)?;

    print_task(&session, cadence, &id, "Added task", json_output)
}

fn run_edit(
    reference: &str,
    name: &str,
    cadence: Cadence,
    category: Option<&str>,
    config: &Config,
    json_output: bool,
) -> Result<i32, MobihwError> {
    validate_name(name, "Task")?;
    let mut session = Session::open(config)?;
    let id = session.resolve_task(cadence, reference)?.id().to_string();
    match cadence {
        Cadence::Daily => session.store.edit_daily_task(&id, name, category),
        Cadence::Weekly => session.store.edit_weekly_task(&id, name),
    }

    print_task(&session, cadence, &id, "Updated task", json_output)
}

fn run_delete(reference: &str, cadence: Cadence, config: &Config, json_output: bool) -> Result<i32, MobihwError> {
    let mut session = Session::open(config)?;
    let task = session.resolve_task(cadence, reference)?;
    let (id, name) = (task.id().to_string(), task.name().to_string());
    match cadence {
        Cadence::Daily => session.store.delete_daily_task(&id),
        Cadence::Weekly => session.store.delete_weekly_task(&id),
    }

    if json_output {
        output::json::print(&output::json::success(json!({
            "deleted": { "id": id, "name": name, "cadence": cadence.as_str() }
        })));
    } else {
        println!("Deleted task: {name} ({id})");
    }
    Ok(0)
}

fn run_count(
    reference: &str,
    cadence: Cadence,
    action: CountAction,
    config: &Config,
    json_output: bool,
) -> Result<i32, MobihwError> {
    let mut session = Session::open(config)?;
    let id = session.resolve_task(cadence, reference)?.id().to_string();
    let store = &mut session.store;
    match (action, cadence) {
        (CountAction::Toggle, Cadence::Daily) => store.toggle_daily_task(&id),
        (CountAction::Toggle, Cadence::Weekly) => store.toggle_weekly_task(&id),
        (CountAction::Increment, _) => store.increment_task_count(&id, cadence),
        (CountAction::Decrement, _) => store.decrement_task_count(&id, cadence),
        (CountAction::Reset, _) => store.reset_task_count(&id, cadence),
    }

    print_task(&session, cadence, &id, action.label(), json_output)
}

fn print_task(session: &Session, cadence: Cadence, id: &str, label: &str, json_output: bool) -> Result<i32, MobihwError> {
    let character = session.selected()?;
    let task = character
        .find_task(cadence, id)
        .ok_or_else(|| MobihwError::task_not_found(id))?;
    let view = TaskView {
        task,
        done: character.is_done(cadence, id),
        count: character.count(cadence, id),
    };

    if json_output {
        output::json::print(&output::json::success(json!({
            "task": output::json::task_json(&view),
            "cadence": cadence.as_str()
        })));
    } else {
        println!("{label}: {}", output::text::task_line(&view));
    }
    Ok(0)
}
