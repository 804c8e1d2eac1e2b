use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Scoring transaction of one driver in one race.
///
/// The `*_before` columns hold the state entering the race. The after
/// columns are nullable; a missing value means the race left that field
/// unchanged. `penalty_for_next` only reduces the next effective score.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RaceResult {
    pub result_id: Uuid,
    pub driver_id: Uuid,
    pub race_id: Uuid,
    pub cp_before: i32,
    pub pi_before: i32,
    pub penalty_before: i32,
    pub cp_after: Option<i32>,
    pub pi_after: Option<i32>,
    pub penalty_for_next: Option<i32>,
    pub created_at: chrono::NaiveDateTime,
}

impl RaceResult {
    /// All six fields with missing after values resolved to their before value
    pub fn sheet(&self) -> ScoreSheet {
        ScoreSheet {
            cp_before: self.cp_before,
            pi_before: self.pi_before,
            penalty_before: self.penalty_before,
            cp_after: self.cp_after.unwrap_or(self.cp_before),
            pi_after: self.pi_after.unwrap_or(self.pi_before),
            penalty_for_next: self.penalty_for_next.unwrap_or(self.penalty_before),
        }
    }
}

/// A result row tagged with the round number of its race (0 when unknown)
#[derive(Debug, Clone, FromRow)]
pub struct RoundResult {
    #[sqlx(flatten)]
    pub result: RaceResult,
    pub round_number: i32,
}

/// The editable sextuple of a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct ScoreSheet {
    pub cp_before: i32,
    pub pi_before: i32,
    pub penalty_before: i32,
    pub cp_after: i32,
    pub pi_after: i32,
    pub penalty_for_next: i32,
}

impl ScoreSheet {
    /// A zero-delta sheet entering with the given state
    pub fn unchanged(cp: i32, pi: i32, penalty: i32) -> Self {
        Self {
            cp_before: cp,
            pi_before: pi,
            penalty_before: penalty,
            cp_after: cp,
            pi_after: pi,
            penalty_for_next: penalty,
        }
    }

    pub fn delta_cp(&self) -> i32 {
        self.cp_after.saturating_sub(self.cp_before)
    }

    pub fn delta_pi(&self) -> i32 {
        self.pi_after.saturating_sub(self.pi_before)
    }

    pub fn delta_penalty(&self) -> i32 {
        self.penalty_for_next.saturating_sub(self.penalty_before)
    }
}
