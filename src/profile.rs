//! Built-in computer opponents, from trivial to strong.
//! Name and difficulty are display metadata; depth, heuristic and clear
//! thought drive the search.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::search::eval::Heuristic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    VeryEasy = 1,
    Easy = 2,
    Medium = 3,
    Hard = 4,
    VeryHard = 5,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiProfile {
    pub name: &'static str,
    pub difficulty: Difficulty,
    pub max_search_depth: u32,
    pub heuristic: Heuristic,
    /// 0.8 means each leaf score carries up to +/-20% error.
    pub clear_thought: f64,
}

pub const VERY_EASY: &str = "Very easy";
pub const EASY: &str = "Easy";
pub const MEDIUM: &str = "Medium";
pub const HARD: &str = "Hard";
pub const VERY_HARD: &str = "Very hard";

static PROFILES: [AiProfile; 5] = [
    AiProfile { name: VERY_EASY, difficulty: Difficulty::VeryEasy, max_search_depth: 2, heuristic: Heuristic::Material, clear_thought: 0.5 },
    AiProfile { name: EASY, difficulty: Difficulty::Easy, max_search_depth: 2, heuristic: Heuristic::Material, clear_thought: 0.8 },
    AiProfile { name: MEDIUM, difficulty: Difficulty::Medium, max_search_depth: 4, heuristic: Heuristic::Material, clear_thought: 0.8 },
    AiProfile { name: HARD, difficulty: Difficulty::Hard, max_search_depth: 6, heuristic: Heuristic::Material, clear_thought: 1.0 },
    // Looks ten plies ahead and never misjudges a leaf.
    AiProfile { name: VERY_HARD, difficulty: Difficulty::VeryHard, max_search_depth: 10, heuristic: Heuristic::Material, clear_thought: 1.0 },
];

/// Get all profiles, weakest first
pub fn all_profiles() -> &'static [AiProfile] { &PROFILES }

pub fn get_by_name(name: &str) -> EngineResult<&'static AiProfile> {
    PROFILES.iter().find(|p| p.name == name).ok_or_else(|| EngineError::UnknownProfile(name.to_string()))
}

/// Case-insensitive lookup that also accepts `very-easy` / `very_easy`,
/// for command lines.
pub fn lookup_loose(name: &str) -> EngineResult<&'static AiProfile> {
    let norm = |s: &str| s.to_lowercase().replace(['-', '_'], " ");
    let wanted = norm(name);
    PROFILES.iter().find(|p| norm(p.name) == wanted).ok_or_else(|| EngineError::UnknownProfile(name.to_string()))
}
