use axum::extract::FromRef;
use storage::Database;

use crate::middleware::auth::SessionTokens;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub tokens: SessionTokens,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
