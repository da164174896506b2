use crate::models::{Task, DAILY_CATEGORIES, WEEKLY_CATEGORIES};

// (id, name, category, required count)
const DAILY_SEED: [(&str, &str, &str, Option<u32>); 8] = [
    ("black_hole", "검은 구멍", DAILY_CATEGORIES[0], Some(3)),
    ("barrier", "결계", DAILY_CATEGORIES[0], Some(2)),
    ("daily_dungeon", "요일 던전", DAILY_CATEGORIES[0], None),
    ("phantom_tower", "망령의 탑", DAILY_CATEGORIES[0], Some(5)),
    ("part_time", "아르바이트", DAILY_CATEGORIES[2], None),
    ("cash_shop_free", "무료 물품", DAILY_CATEGORIES[1], None),
    ("cash_shop_deca", "데카 은화", DAILY_CATEGORIES[1], None),
    ("cash_shop_gold", "골드 보석함", DAILY_CATEGORIES[1], None),
];

const WEEKLY_SEED: [(&str, &str, &str); 10] = [
    ("glas_gibnen", "글라스 기브넨", WEEKLY_CATEGORIES[0]),
    ("abyss_ruins", "가라앉은 유적", WEEKLY_CATEGORIES[1]),
    ("abyss_altar", "무너진 제단", WEEKLY_CATEGORIES[1]),
    ("abyss_hall", "파멸의 전당", WEEKLY_CATEGORIES[1]),
    ("weekly_boss_peri", "페리", WEEKLY_CATEGORIES[2]),
    ("weekly_boss_krav", "크라브바흐", WEEKLY_CATEGORIES[2]),
    ("weekly_boss_krama", "크라마", WEEKLY_CATEGORIES[2]),
    ("cash_shop_weekly", "데카 곡물", WEEKLY_CATEGORIES[3]),
    ("demon_badge", "마족의 증표", WEEKLY_CATEGORIES[4]),
    ("food_material", "음식 재료", WEEKLY_CATEGORIES[4]),
];

/// A fresh copy of the daily seed for a new character.
pub fn default_daily_tasks() -> Vec<Task> {
    DAILY_SEED
        .iter()
        .map(|&(id, name, category, count)| Task::new(id, name, category, count))
        .collect()
}

/// A fresh copy of the weekly seed for a new character.
pub fn default_weekly_tasks() -> Vec<Task> {
    WEEKLY_SEED
        .iter()
        .map(|&(id, name, category)| Task::new(id, name, category, None))
        .collect()
}
