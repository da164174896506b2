use std::fmt;

pub const DAILY_CATEGORIES: [&str; 4] = ["던전", "캐쉬 샵", "일반", "기타"];
pub const WEEKLY_CATEGORIES: [&str; 6] = ["레이드", "어비스", "주간 보스", "캐쉬 샵", "교환", "기타"];

pub const DEFAULT_DAILY_CATEGORY: &str = "던전";
pub const DEFAULT_WEEKLY_CATEGORY: &str = "레이드";

/// The reset period a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cadence {
    Daily,
    Weekly,
}

impl Cadence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            _ => None,
        }
    }

    pub fn from_weekly_flag(weekly: bool) -> Self {
        if weekly {
            Self::Weekly
        } else {
            Self::Daily
        }
    }

    pub fn default_category(&self) -> &'static str {
        match self {
            Self::Daily => DEFAULT_DAILY_CATEGORY,
            Self::Weekly => DEFAULT_WEEKLY_CATEGORY,
        }
    }

    /// Categories offered to users. Other labels are still accepted.
    pub fn known_categories(&self) -> &'static [&'static str] {
        match self {
            Self::Daily => &DAILY_CATEGORIES,
            Self::Weekly => &WEEKLY_CATEGORIES,
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
