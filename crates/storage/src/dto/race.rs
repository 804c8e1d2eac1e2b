use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::common::deserialize_nullable;
use crate::models::Race;

/// Request payload for creating a race; results are seeded for active drivers
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRaceRequest {
    #[validate(range(min = 1, message = "Round number must be at least 1"))]
    pub round_number: i32,

    #[validate(length(max = 255))]
    pub name: Option<String>,

    pub race_date: Option<NaiveDate>,
}

/// Absent fields are left unchanged; an explicit `null` clears the value
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRaceRequest {
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255))]
    pub name: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<NaiveDate>)]
    pub race_date: Option<Option<NaiveDate>>,
}

/// Created race with the number of results seeded for it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRaceResponse {
    pub race: Race,
    pub display_name: String,
    pub seeded_results: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_zero_is_rejected() {
        let req = CreateRaceRequest {
            round_number: 0,
            name: None,
            race_date: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn name_and_date_are_optional() {
        let req: CreateRaceRequest = serde_json::from_str(r#"{"round_number": 3}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.name.is_none());
        assert!(req.race_date.is_none());
    }

    #[test]
    fn update_with_null_name_clears_it() {
        let req: UpdateRaceRequest = serde_json::from_str(r#"{"name": null}"#).unwrap();

        assert_eq!(req.name, Some(None));
        assert_eq!(req.race_date, None);
        assert!(req.validate().is_ok());
    }
}
