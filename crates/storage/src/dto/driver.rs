use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::common::deserialize_nullable;

/// Request payload for adding a driver to a championship
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateDriverRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 255))]
    pub car: Option<String>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Request payload for updating a driver; absent fields are left unchanged,
/// `"car": null` clears the car label
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255))]
    pub car: Option<Option<String>>,

    pub is_active: Option<bool>,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drivers_default_to_active() {
        let req: CreateDriverRequest = serde_json::from_str(r#"{"name": "Ayrton"}"#).unwrap();
        assert!(req.is_active);
        assert!(req.car.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let req: CreateDriverRequest = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn update_tells_null_car_from_absent_car() {
        let cleared: UpdateDriverRequest = serde_json::from_str(r#"{"car": null}"#).unwrap();
        let untouched: UpdateDriverRequest = serde_json::from_str(r#"{"name": "Alain"}"#).unwrap();
        let renamed: UpdateDriverRequest = serde_json::from_str(r#"{"car": "Williams"}"#).unwrap();

        assert_eq!(cleared.car, Some(None));
        assert_eq!(untouched.car, None);
        assert_eq!(renamed.car, Some(Some("Williams".to_string())));
    }
}
