use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::ScoreSheet;

/// Largest magnitude accepted for any scoring field
pub const SCORE_LIMIT: i32 = 1_000_000;

impl Validate for ScoreSheet {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let fields = [
            ("cp_before", self.cp_before),
            ("pi_before", self.pi_before),
            ("penalty_before", self.penalty_before),
            ("cp_after", self.cp_after),
            ("pi_after", self.pi_after),
            ("penalty_for_next", self.penalty_for_next),
        ];

        let mut errors = ValidationErrors::new();
        for (field, value) in fields {
            if !(-SCORE_LIMIT..=SCORE_LIMIT).contains(&value) {
                let mut error = ValidationError::new("range");
                error.message = Some(Cow::Borrowed(
                    "Score must be between -1000000 and 1000000",
                ));
                errors.add(field, error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Request payload for recording a result for a driver in a race
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateResultRequest {
    pub driver_id: Uuid,
    pub race_id: Uuid,
    #[serde(flatten)]
    pub sheet: ScoreSheet,
}

impl Validate for CreateResultRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.sheet.validate()
    }
}

/// Request payload for saving all six fields of one result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateResultRequest {
    #[serde(flatten)]
    pub sheet: ScoreSheet,
}

impl Validate for UpdateResultRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.sheet.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_reads_flat_sextuple() {
        let req: UpdateResultRequest = serde_json::from_str(
            r#"{"cp_before": 100, "pi_before": 50, "penalty_before": 5,
                "cp_after": 120, "pi_after": 55, "penalty_for_next": 0}"#,
        )
        .unwrap();

        assert_eq!(req.sheet.cp_after, 120);
        assert_eq!(req.sheet.delta_penalty(), -5);
    }

    #[test]
    fn out_of_range_scores_are_rejected() {
        let req = UpdateResultRequest {
            sheet: ScoreSheet {
                pi_after: i32::MIN,
                penalty_for_next: 1,
                cp_after: i32::MAX,
                cp_before: -1,
                ..ScoreSheet::default()
            },
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("pi_after"));
        assert!(fields.contains_key("cp_after"));
        assert!(!fields.contains_key("cp_before"));
    }

    #[test]
    fn scores_at_the_limit_are_accepted() {
        let req = CreateResultRequest {
            driver_id: Uuid::new_v4(),
            race_id: Uuid::new_v4(),
            sheet: ScoreSheet::unchanged(SCORE_LIMIT, -SCORE_LIMIT, 0),
        };

        assert!(req.validate().is_ok());
    }
}
