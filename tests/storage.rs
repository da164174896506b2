use std::rc::Rc;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use mobihw::db::{kv_repo, state_repo, Storage};
use mobihw::models::Cadence;
use mobihw::schedule::{MarkerStore, ResetScheduler};
use mobihw::{TaskState, TaskStore};

fn temp_storage() -> (TempDir, Storage) {
    let dir = TempDir::new().unwrap();
    let storage = Storage::open(&dir.path().join("nested").join("mobihw.db")).unwrap();
    (dir, storage)
}

#[test]
fn fresh_database_loads_empty_state() {
    let (_dir, storage) = temp_storage();
    assert_eq!(storage.load_state().unwrap(), TaskState::default());
    assert_eq!(storage.last_reset(Cadence::Daily).unwrap(), None);
    assert!(!storage.barrier_alarm_enabled().unwrap());
}

#[test]
fn state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mobihw.db");

    let mut store = TaskStore::new();
    store.add_character("A");
    store.increment_task_count("black_hole", Cadence::Daily);
    {
        let storage = Storage::open(&path).unwrap();
        storage.save_state(store.state()).unwrap();
    }

    let storage = Storage::open(&path).unwrap();
    assert_eq!(&storage.load_state().unwrap(), store.state());
}

#[test]
fn subscribed_store_persists_every_change() {
    let (_dir, storage) = temp_storage();
    let storage = Rc::new(storage);
    let mut store = TaskStore::from_state(storage.load_state().unwrap());
    let sink = Rc::clone(&storage);
    store.subscribe(move |state| sink.save_state(state).unwrap());

    store.add_character("A");
    store.toggle_weekly_task("abyss_altar");

    let reloaded = TaskStore::from_state(storage.load_state().unwrap());
    let a = reloaded.selected_character().unwrap();
    assert_eq!(a.name, "A");
    assert!(a.is_done(Cadence::Weekly, "abyss_altar"));
}

#[test]
fn malformed_blob_loads_as_empty() {
    let (_dir, storage) = temp_storage();
    kv_repo::set(storage.conn(), state_repo::STATE_KEY, "{not json").unwrap();
    assert_eq!(storage.load_state().unwrap(), TaskState::default());
}

#[test]
fn markers_round_trip_and_tolerate_garbage() {
    let (_dir, storage) = temp_storage();
    let at = Utc.with_ymd_and_hms(2024, 5, 14, 21, 0, 0).unwrap();
    storage.record_reset(Cadence::Weekly, at).unwrap();
    assert_eq!(storage.last_reset(Cadence::Weekly).unwrap(), Some(at));
    assert_eq!(storage.last_reset(Cadence::Daily).unwrap(), None);

    kv_repo::set(storage.conn(), state_repo::DAILY_RESET_KEY, "yesterday").unwrap();
    assert_eq!(storage.last_reset(Cadence::Daily).unwrap(), None);
}

#[test]
fn scheduler_records_markers_in_storage() {
    let (_dir, storage) = temp_storage();
    let storage = Rc::new(storage);
    let mut store = TaskStore::new();
    store.add_character("A");
    store.toggle_daily_task("part_time");

    let now = Utc.with_ymd_and_hms(2024, 5, 15, 0, 0, 0).unwrap();
    let scheduler = ResetScheduler::new(Rc::clone(&storage));
    let outcome = scheduler.tick(&mut store, &now).unwrap();

    assert!(outcome.daily_reset);
    assert_eq!(storage.last_reset(Cadence::Daily).unwrap(), Some(now));
    assert_eq!(storage.last_reset(Cadence::Weekly).unwrap(), Some(now));
}

#[test]
fn barrier_alarm_flag_persists() {
    let (_dir, storage) = temp_storage();
    storage.set_barrier_alarm(true).unwrap();
    assert!(storage.barrier_alarm_enabled().unwrap());
    storage.set_barrier_alarm(false).unwrap();
    assert!(!storage.barrier_alarm_enabled().unwrap());
}

#[test]
fn wipe_removes_every_key() {
    let (_dir, storage) = temp_storage();
    let mut store = TaskStore::new();
    store.add_character("A");
    storage.save_state(store.state()).unwrap();
    storage.record_reset(Cadence::Daily, Utc::now()).unwrap();
    storage.set_barrier_alarm(true).unwrap();

    assert_eq!(storage.wipe().unwrap(), 3);
    assert_eq!(storage.load_state().unwrap(), TaskState::default());
    assert_eq!(storage.last_reset(Cadence::Daily).unwrap(), None);
    assert!(!storage.barrier_alarm_enabled().unwrap());
    assert_eq!(storage.wipe().unwrap(), 0);
}

#[test]
fn in_memory_storage_works() {
    let storage = Storage::in_memory().unwrap();
    storage.set_barrier_alarm(true).unwrap();
    assert!(storage.barrier_alarm_enabled().unwrap());
}
