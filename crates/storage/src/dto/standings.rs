use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Capability, Championship, Driver, Race, ScoreSheet};

/// A driver's ranked position with its current score fields
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Standing {
    pub place: u32,
    pub driver: Driver,
    pub current_cp: i32,
    pub current_pi: i32,
    pub current_penalty: i32,
    /// `current_pi - current_penalty`, never below zero
    pub effective_pi: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RaceColumn {
    pub race_id: Uuid,
    pub round_number: i32,
    pub name: String,
    pub race_date: Option<NaiveDate>,
}

impl From<&Race> for RaceColumn {
    fn from(race: &Race) -> Self {
        Self {
            race_id: race.race_id,
            round_number: race.round_number,
            name: race.display_name(),
            race_date: race.race_date,
        }
    }
}

/// Per-race change of one driver's scores
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GridCell {
    pub delta_cp: i32,
    pub delta_pi: i32,
    pub delta_penalty: i32,
    /// Only present for admin callers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<EditableCell>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EditableCell {
    pub result_id: Uuid,
    #[serde(flatten)]
    pub sheet: ScoreSheet,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GridRow {
    pub driver_id: Uuid,
    pub driver_name: String,
    pub place: u32,
    /// One entry per race column, `null` where the driver has no result
    pub cells: Vec<Option<GridCell>>,
}

/// Standings and race grid computed in one pass from the stored rows
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChampionshipSnapshot {
    pub championship: Championship,
    pub capability: Capability,
    pub standings: Vec<Standing>,
    pub races: Vec<RaceColumn>,
    pub grid: Vec<GridRow>,
}
