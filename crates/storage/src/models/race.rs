use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Race {
    pub race_id: Uuid,
    pub championship_id: Uuid,
    pub round_number: i32,
    pub name: Option<String>,
    pub race_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

impl Race {
    /// Stored name, or `Race {round_number}` when none was given
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Race {}", self.round_number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn race(round_number: i32, name: Option<&str>) -> Race {
        Race {
            race_id: Uuid::new_v4(),
            championship_id: Uuid::new_v4(),
            round_number,
            name: name.map(String::from),
            race_date: None,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn display_name_falls_back_to_round() {
        assert_eq!(race(4, None).display_name(), "Race 4");
        assert_eq!(race(2, Some("  ")).display_name(), "Race 2");
    }

    #[test]
    fn display_name_uses_stored_name() {
        assert_eq!(race(1, Some("Monza")).display_name(), "Monza");
    }
}
