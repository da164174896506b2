use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use mobihw::models::{Cadence, Task, TaskState, DEFAULT_DAILY_CATEGORY, DEFAULT_WEEKLY_CATEGORY};
use mobihw::TaskStore;

// ─── helpers ───────────────────────────────────────────────────────

fn store_with(names: &[&str]) -> (TaskStore, Vec<String>) {
    let mut store = TaskStore::new();
    let ids = names
        .iter()
        .map(|n| store.add_character(n).expect("character added"))
        .collect();
    (store, ids)
}

fn selected(store: &TaskStore) -> &mobihw::Character {
    store.selected_character().expect("a character is selected")
}

// ─── characters ────────────────────────────────────────────────────

#[test]
fn add_character_appends_with_unique_ids() {
    let (store, ids) = store_with(&["A", "B", "C", "D", "E"]);
    assert_eq!(store.characters().len(), 5);
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), 5);
}

#[test]
fn first_character_becomes_selected() {
    let (store, ids) = store_with(&["A", "B"]);
    assert_eq!(store.selected_character_id(), Some(ids[0].as_str()));
}

#[test]
fn blank_character_name_is_ignored() {
    let mut store = TaskStore::new();
    assert!(store.add_character("   ").is_none());
    assert!(store.characters().is_empty());
    assert_eq!(store.selected_character_id(), None);
}

#[test]
fn new_character_gets_fresh_default_tasks() {
    let (mut store, ids) = store_with(&["A", "B"]);
    let a = store.character(&ids[0]).unwrap();
    assert_eq!(a.daily_task_items.len(), 8);
    assert_eq!(a.weekly_task_items.len(), 10);
    assert!(a.daily_task_status.is_empty());
    assert!(a.daily_task_counts.is_empty());

    let black_hole = a.find_task(Cadence::Daily, "black_hole").unwrap();
    assert_eq!(black_hole.required_count(), Some(3));
    assert_eq!(black_hole.category(), "던전");
    let part_time = a.find_task(Cadence::Daily, "part_time").unwrap();
    assert_eq!(part_time.required_count(), None);
    assert_eq!(part_time.category(), "일반");
    assert!(a.weekly_task_items.iter().all(|t| !t.is_counter()));

    // editing one character's seeded task leaves the other untouched
    store.edit_daily_task("black_hole", "Black Hole", None);
    let b = store.character(&ids[1]).unwrap();
    assert_eq!(b.find_task(Cadence::Daily, "black_hole").unwrap().name(), "검은 구멍");
}

#[test]
fn edit_character_renames_known_ids_only() {
    let (mut store, ids) = store_with(&["A"]);
    store.edit_character(&ids[0], "Renamed");
    store.edit_character("missing", "Ghost");
    store.edit_character(&ids[0], "  ");
    assert_eq!(store.characters()[0].name, "Renamed");
    assert_eq!(store.characters().len(), 1);
}

#[test]
fn deleting_selected_character_moves_selection_to_first() {
    let (mut store, ids) = store_with(&["A", "B", "C"]);
    store.select_character(&ids[1]);
    store.delete_character(&ids[1]);
    assert_eq!(store.selected_character_id(), Some(ids[0].as_str()));

    store.delete_character(&ids[0]);
    assert_eq!(store.selected_character_id(), Some(ids[2].as_str()));

    store.delete_character(&ids[2]);
    assert_eq!(store.selected_character_id(), None);
    assert!(store.characters().is_empty());
}

#[test]
fn deleting_other_character_keeps_selection_and_state() {
    let (mut store, ids) = store_with(&["A", "B"]);
    store.increment_task_count("barrier", Cadence::Daily);
    store.delete_character(&ids[1]);

    assert_eq!(store.selected_character_id(), Some(ids[0].as_str()));
    assert!(store.character(&ids[1]).is_none());
    let a = selected(&store);
    assert_eq!(a.count(Cadence::Daily, "barrier"), 1);
    assert_eq!(a.daily_task_items.len(), 8);
}

// ─── counters ──────────────────────────────────────────────────────

#[test]
fn barrier_counter_scenario() {
    let (mut store, _) = store_with(&["A"]);
    store.increment_task_count("barrier", Cadence::Daily);
    assert!(!selected(&store).is_done(Cadence::Daily, "barrier"));
    store.increment_task_count("barrier", Cadence::Daily);
    let a = selected(&store);
    assert!(a.is_done(Cadence::Daily, "barrier"));
    assert_eq!(a.count(Cadence::Daily, "barrier"), 2);

    store.decrement_task_count("barrier", Cadence::Daily);
    let a = selected(&store);
    assert!(!a.is_done(Cadence::Daily, "barrier"));
    assert_eq!(a.count(Cadence::Daily, "barrier"), 1);
}

#[test]
fn increment_stops_at_required_count() {
    let (mut store, _) = store_with(&["A"]);
    for _ in 0..5 {
        store.increment_task_count("phantom_tower", Cadence::Daily);
    }
    store.increment_task_count("phantom_tower", Cadence::Daily);
    let a = selected(&store);
    assert_eq!(a.count(Cadence::Daily, "phantom_tower"), 5);
    assert!(a.is_done(Cadence::Daily, "phantom_tower"));
}

#[test]
fn decrement_stops_at_zero() {
    let (mut store, _) = store_with(&["A"]);
    store.decrement_task_count("black_hole", Cadence::Daily);
    let a = selected(&store);
    assert_eq!(a.count(Cadence::Daily, "black_hole"), 0);
    assert!(a.daily_task_counts.is_empty());
}

#[test]
fn increment_on_simple_task_completes_it() {
    let (mut store, _) = store_with(&["A"]);
    store.increment_task_count("glas_gibnen", Cadence::Weekly);
    store.increment_task_count("glas_gibnen", Cadence::Weekly);
    let a = selected(&store);
    assert_eq!(a.count(Cadence::Weekly, "glas_gibnen"), 1);
    assert!(a.is_done(Cadence::Weekly, "glas_gibnen"));
}

#[test]
fn unknown_task_ids_are_ignored() {
    let (mut store, _) = store_with(&["A"]);
    let before = store.state().clone();
    store.increment_task_count("nope", Cadence::Daily);
    store.decrement_task_count("nope", Cadence::Daily);
    store.reset_task_count("nope", Cadence::Daily);
    store.toggle_daily_task("nope");
    store.edit_daily_task("nope", "x", None);
    store.delete_weekly_task("nope");
    // daily ids do not resolve in the weekly list
    store.increment_task_count("barrier", Cadence::Weekly);
    assert_eq!(store.state(), &before);
}

#[test]
fn reset_task_count_zeroes_count_and_status() {
    let (mut store, _) = store_with(&["A"]);
    store.increment_task_count("barrier", Cadence::Daily);
    store.increment_task_count("barrier", Cadence::Daily);
    store.reset_task_count("barrier", Cadence::Daily);
    let a = selected(&store);
    assert_eq!(a.count(Cadence::Daily, "barrier"), 0);
    assert!(!a.is_done(Cadence::Daily, "barrier"));
}

// ─── toggles ───────────────────────────────────────────────────────

#[test]
fn toggle_flips_simple_tasks() {
    let (mut store, _) = store_with(&["A"]);
    store.toggle_daily_task("part_time");
    assert!(selected(&store).is_done(Cadence::Daily, "part_time"));
    store.toggle_daily_task("part_time");
    assert!(!selected(&store).is_done(Cadence::Daily, "part_time"));

    store.toggle_weekly_task("abyss_hall");
    let a = selected(&store);
    assert!(a.is_done(Cadence::Weekly, "abyss_hall"));
    assert!(!a.is_done(Cadence::Daily, "abyss_hall"));
}

#[test]
fn toggle_keeps_counter_consistent() {
    let (mut store, _) = store_with(&["A"]);
    store.increment_task_count("black_hole", Cadence::Daily);

    store.toggle_daily_task("black_hole");
    let a = selected(&store);
    assert!(a.is_done(Cadence::Daily, "black_hole"));
    assert_eq!(a.count(Cadence::Daily, "black_hole"), 3);

    store.toggle_daily_task("black_hole");
    let a = selected(&store);
    assert!(!a.is_done(Cadence::Daily, "black_hole"));
    assert_eq!(a.count(Cadence::Daily, "black_hole"), 0);
}

#[test]
fn operations_without_selection_are_noops() {
    let mut store = TaskStore::new();
    store.toggle_daily_task("barrier");
    store.increment_task_count("barrier", Cadence::Daily);
    store.reset_daily_tasks(None);
    assert!(store.add_daily_task("x", None, None).is_none());
    assert!(store.add_weekly_task("x", None).is_none());
    assert_eq!(store.state(), &TaskState::default());
}

// ─── task list edits ───────────────────────────────────────────────

#[test]
fn add_daily_task_with_count_creates_counter() {
    let (mut store, _) = store_with(&["A"]);
    let id = store.add_daily_task("Field boss", Some("기타"), Some(4)).unwrap();
    let a = selected(&store);
    let task = a.daily_task_items.last().unwrap();
    assert_eq!(task.id(), id);
    assert_eq!(task.required_count(), Some(4));
    assert_eq!(task.category(), "기타");
    assert_eq!(a.daily_task_counts.get(&id), Some(&0));
}

#[test]
fn added_tasks_default_their_category() {
    let (mut store, _) = store_with(&["A"]);
    let daily = store.add_daily_task("Fishing", None, None).unwrap();
    let weekly = store.add_weekly_task("Guild", Some("  ")).unwrap();
    let zero = store.add_daily_task("Zero", None, Some(0)).unwrap();
    let a = selected(&store);

    let daily = a.find_task(Cadence::Daily, &daily).unwrap();
    assert_eq!(daily.category(), DEFAULT_DAILY_CATEGORY);
    assert!(!a.daily_task_counts.contains_key(daily.id()));
    assert_eq!(a.find_task(Cadence::Weekly, &weekly).unwrap().category(), DEFAULT_WEEKLY_CATEGORY);
    assert!(matches!(a.find_task(Cadence::Daily, &zero), Some(Task::Simple { .. })));
}

#[test]
fn edit_updates_name_and_daily_category() {
    let (mut store, _) = store_with(&["A"]);
    store.edit_daily_task("part_time", "Part-time job", Some("기타"));
    store.edit_daily_task("cash_shop_free", "Free item", None);
    store.edit_weekly_task("weekly_boss_peri", "Peri");
    let a = selected(&store);

    let part_time = a.find_task(Cadence::Daily, "part_time").unwrap();
    assert_eq!(part_time.name(), "Part-time job");
    assert_eq!(part_time.category(), "기타");
    let free = a.find_task(Cadence::Daily, "cash_shop_free").unwrap();
    assert_eq!(free.category(), "캐쉬 샵");
    assert_eq!(a.find_task(Cadence::Weekly, "weekly_boss_peri").unwrap().name(), "Peri");
}

#[test]
fn delete_task_removes_status_and_count() {
    let (mut store, _) = store_with(&["A"]);
    store.increment_task_count("barrier", Cadence::Daily);
    store.toggle_weekly_task("demon_badge");
    store.delete_daily_task("barrier");
    store.delete_weekly_task("demon_badge");
    let a = selected(&store);

    assert!(a.find_task(Cadence::Daily, "barrier").is_none());
    assert!(!a.daily_task_status.contains_key("barrier"));
    assert!(!a.daily_task_counts.contains_key("barrier"));
    assert!(!a.weekly_task_status.contains_key("demon_badge"));
    assert_eq!(a.weekly_task_items.len(), 9);
}

// ─── resets ────────────────────────────────────────────────────────

#[test]
fn reset_clears_progress_of_target_only() {
    let (mut store, ids) = store_with(&["A", "B"]);
    store.increment_task_count("barrier", Cadence::Daily);
    store.toggle_weekly_task("abyss_ruins");
    store.select_character(&ids[1]);
    store.toggle_daily_task("part_time");

    store.reset_daily_tasks(Some(&ids[0]));
    let a = store.character(&ids[0]).unwrap();
    assert!(a.daily_task_status.is_empty());
    assert!(a.daily_task_counts.is_empty());
    assert_eq!(a.daily_task_items.len(), 8);
    assert!(a.is_done(Cadence::Weekly, "abyss_ruins"));
    assert!(store.character(&ids[1]).unwrap().is_done(Cadence::Daily, "part_time"));

    // omitted target means the selected character
    store.reset_daily_tasks(None);
    assert!(store.character(&ids[1]).unwrap().daily_task_status.is_empty());

    store.reset_weekly_tasks(Some(&ids[0]));
    let a = store.character(&ids[0]).unwrap();
    assert!(a.weekly_task_status.is_empty());
    assert_eq!(a.weekly_task_items.len(), 10);
}

// ─── views ─────────────────────────────────────────────────────────

#[test]
fn progress_and_category_groups() {
    let (mut store, _) = store_with(&["A"]);
    store.toggle_daily_task("part_time");
    store.toggle_daily_task("daily_dungeon");
    let a = selected(&store);

    let progress = a.progress(Cadence::Daily);
    assert_eq!(progress.total, 8);
    assert_eq!(progress.done, 2);
    assert!((progress.percentage - 25.0).abs() < f64::EPSILON);

    let groups = a.category_groups(Cadence::Daily);
    let names: Vec<&str> = groups.iter().map(|g| g.category).collect();
    assert_eq!(names, ["던전", "일반", "캐쉬 샵"]);
    assert_eq!(groups[0].tasks.len(), 4);
    assert!(groups[1].tasks[0].done);

    let weekly: Vec<&str> = a.category_groups(Cadence::Weekly).iter().map(|g| g.category).collect();
    assert_eq!(weekly, ["레이드", "어비스", "주간 보스", "캐쉬 샵", "교환"]);
}

// ─── subscriptions & state ─────────────────────────────────────────

#[test]
fn listeners_fire_on_change_only() {
    let mut store = TaskStore::new();
    let calls = Rc::new(RefCell::new(0));
    let seen = Rc::clone(&calls);
    let sub = store.subscribe(move |_| *seen.borrow_mut() += 1);

    store.add_character("A");
    assert_eq!(*calls.borrow(), 1);
    store.decrement_task_count("barrier", Cadence::Daily);
    store.edit_character("missing", "x");
    assert_eq!(*calls.borrow(), 1);
    store.toggle_daily_task("part_time");
    assert_eq!(*calls.borrow(), 2);

    assert!(store.unsubscribe(sub));
    assert!(!store.unsubscribe(sub));
    store.toggle_daily_task("part_time");
    assert_eq!(*calls.borrow(), 2);
}

#[test]
fn listener_sees_post_mutation_state() {
    let mut store = TaskStore::new();
    let snapshot: Rc<RefCell<Option<TaskState>>> = Rc::default();
    let sink = Rc::clone(&snapshot);
    store.subscribe(move |state| *sink.borrow_mut() = Some(state.clone()));

    let id = store.add_character("A").unwrap();
    let seen = snapshot.borrow().clone().unwrap();
    assert_eq!(seen.selected_character_id.as_deref(), Some(id.as_str()));
    assert_eq!(&seen, store.state());
}

#[test]
fn state_round_trips_through_json() {
    let (mut store, _) = store_with(&["A", "B"]);
    store.increment_task_count("black_hole", Cadence::Daily);
    store.toggle_weekly_task("food_material");
    store.add_daily_task("Custom", None, Some(2));

    let json = serde_json::to_string(store.state()).unwrap();
    assert!(json.contains("\"selectedCharacterId\""));
    assert!(json.contains("\"requiredCount\":3"));
    let restored: TaskState = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, store.state());
}

#[test]
fn from_state_repairs_dangling_selection() {
    let (store, ids) = store_with(&["A", "B"]);
    let mut state = store.state().clone();
    state.selected_character_id = Some("gone".to_string());
    let repaired = TaskStore::from_state(state);
    assert_eq!(repaired.selected_character_id(), Some(ids[0].as_str()));

    let empty = TaskStore::from_state(TaskState {
        characters: Vec::new(),
        selected_character_id: Some("gone".to_string()),
    });
    assert_eq!(empty.selected_character_id(), None);
}
