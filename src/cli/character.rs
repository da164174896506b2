use serde_json::json;

use crate::cli::commands::CharCommands;
use crate::cli::finish;
use crate::cli::session::{validate_name, Session};
use crate::config::Config;
use crate::error::MobihwError;
use crate::output;

pub fn run(cmd: CharCommands, config: &Config, json_output: bool) -> i32 {
    let result = match cmd {
        CharCommands::Add { name } => run_add(&name, config, json_output),
        CharCommands::List => run_list(config, json_output),
        CharCommands::Select { reference } => run_select(&reference, config, json_output),
        CharCommands::Rename { reference, name } => run_rename(&reference, &name, config, json_output),
        CharCommands::Delete { reference } => run_delete(&reference, config, json_output),
    };
    finish(result, json_output)
}

fn run_add(name: &str, config: &Config, json_output: bool) -> Result<i32, MobihwError> {
    validate_name(name, "Character")?;
    let mut session = Session::open(config)?;
    let id = session
        .store
        .add_character(name)
        .ok_or_else(|| MobihwError::validation("Character name must not be empty"))?;

    let selected = session.store.selected_character_id() == Some(id.as_str());
    let character = session
        .store
        .character(&id)
        .ok_or_else(|| MobihwError::character_not_found(&id))?;
    if json_output {
        output::json::print(&output::json::success(output::json::character_json(character, selected)));
    } else {
        println!("Added character: {} ({})", character.name, character.id);
        if selected {
            println!("Selected {}.", character.name);
        }
    }
    Ok(0)
}

fn run_list(config: &Config, json_output: bool) -> Result<i32, MobihwError> {
    let session = Session::open(config)?;
    let selected = session.store.selected_character_id();

    if json_output {
        let characters: Vec<_> = session
            .store
            .characters()
            .iter()
            .map(|c| output::json::character_json(c, Some(c.id.as_str()) == selected))
            .collect();
        output::json::print(&output::json::success(json!({ "characters": characters })));
    } else {
        output::text::print_character_list(session.store.characters(), selected);
    }
    Ok(0)
}

fn run_select(reference: &str, config: &Config, json_output: bool) -> Result<i32, MobihwError> {
    let mut session = Session::open(config)?;
    let character = session.resolve_character(reference)?;
    let (id, name) = (character.id.clone(), character.name.clone());
    session.store.select_character(&id);

    if json_output {
        output::json::print(&output::json::success(json!({
            "selected": { "id": id, "name": name }
        })));
    } else {
        println!("Selected character: {name} ({id})");
    }
    Ok(0)
}

fn run_rename(reference: &str, name: &str, config: &Config, json_output: bool) -> Result<i32, MobihwError> {
    validate_name(name, "Character")?;
    let mut session = Session::open(config)?;
    let id = session.resolve_character(reference)?.id.clone();
    session.store.edit_character(&id, name);

    if json_output {
        output::json::print(&output::json::success(json!({
            "renamed": { "id": id, "name": name.trim() }
        })));
    } else {
        println!("Renamed character {id} to {}", name.trim());
    }
    Ok(0)
}

fn run_delete(reference: &str, config: &Config, json_output: bool) -> Result<i32, MobihwError> {
    let mut session = Session::open(config)?;
    let character = session.resolve_character(reference)?;
    let (id, name) = (character.id.clone(), character.name.clone());
    session.store.delete_character(&id);
    let selected = session.store.selected_character_id().map(str::to_string);

    if json_output {
        output::json::print(&output::json::success(json!({
            "deleted": { "id": id, "name": name },
            "selected_character_id": selected
        })));
    } else {
        println!("Deleted character: {name} ({id})");
        match session.store.selected_character() {
            Some(c) => println!("Selected character: {} ({})", c.name, c.id),
            None => println!("No characters left."),
        }
    }
    Ok(0)
}
