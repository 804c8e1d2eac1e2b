use std::collections::HashMap;

use anyhow::{Context, bail};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use storage::{models::Capability, repository::admin::AdminRepository};
use uuid::Uuid;

use crate::error::WebError;
use crate::state::AppState;

/// Bearer tokens issued by the external auth service, mapped to user ids
#[derive(Debug, Clone, Default)]
pub struct SessionTokens {
    users: HashMap<String, Uuid>,
}

impl SessionTokens {
    /// Parse `token=user-uuid` pairs separated by commas
    pub fn from_comma_separated(tokens_str: &str) -> anyhow::Result<Self> {
        let mut users = HashMap::new();

        for entry in tokens_str.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let Some((token, user_id)) = entry.split_once('=') else {
                bail!("Session token entry must look like token=user-uuid");
            };
            let token = token.trim();
            if token.is_empty() {
                bail!("Session token entry has an empty token");
            }
            let user_id = Uuid::parse_str(user_id.trim())
                .with_context(|| format!("Invalid user id for session token '{token}'"))?;
            users.insert(token.to_string(), user_id);
        }

        Ok(Self { users })
    }

    pub fn user_for(&self, token: &str) -> Option<Uuid> {
        self.users.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Identity and capability of the caller, attached to every request
#[derive(Debug, Clone, Copy, Default)]
pub struct Caller {
    pub user_id: Option<Uuid>,
    pub capability: Capability,
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
}

/// Resolve the bearer token (if any) into a `Caller` extension.
///
/// Unknown tokens are treated as anonymous viewers.
pub async fn resolve_caller(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let mut caller = Caller::default();

    let presented = bearer_token(&request).map(|token| state.tokens.user_for(token));
    match presented {
        Some(Some(user_id)) => {
            let is_admin = AdminRepository::new(state.db.pool()).is_admin(user_id).await?;
            caller = Caller {
                user_id: Some(user_id),
                capability: if is_admin {
                    Capability::Admin
                } else {
                    Capability::Viewer
                },
            };
        }
        Some(None) => tracing::warn!("Unknown session token presented"),
        None => {}
    }

    request.extensions_mut().insert(caller);
    Ok(next.run(request).await)
}

/// Reject callers without the admin capability
pub async fn require_admin(request: Request, next: Next) -> Result<Response, WebError> {
    let caller = request
        .extensions()
        .get::<Caller>()
        .copied()
        .unwrap_or_default();

    check_admin(&caller)?;

    Ok(next.run(request).await)
}

fn check_admin(caller: &Caller) -> Result<(), WebError> {
    match (caller.user_id, caller.capability) {
        (_, Capability::Admin) => Ok(()),
        (None, _) => Err(WebError::Unauthorized),
        (Some(user_id), _) => {
            tracing::warn!(%user_id, "Non-admin user attempted an admin action");
            Err(WebError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_pairs() {
        let user = Uuid::new_v4();
        let tokens =
            SessionTokens::from_comma_separated(&format!(" abc = {user} , ,")).unwrap();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens.user_for("abc"), Some(user));
        assert_eq!(tokens.user_for("other"), None);
    }

    #[test]
    fn empty_string_means_no_tokens() {
        assert!(SessionTokens::from_comma_separated("").unwrap().is_empty());
    }

    #[test]
    fn malformed_entries_are_rejected() {
        assert!(SessionTokens::from_comma_separated("just-a-token").is_err());
        assert!(SessionTokens::from_comma_separated("tok=not-a-uuid").is_err());
        assert!(SessionTokens::from_comma_separated(&format!("={}", Uuid::new_v4())).is_err());
    }

    #[test]
    fn admin_check_distinguishes_anonymous_and_forbidden() {
        let anonymous = Caller::default();
        let viewer = Caller {
            user_id: Some(Uuid::new_v4()),
            capability: Capability::Viewer,
        };
        let admin = Caller {
            user_id: Some(Uuid::new_v4()),
            capability: Capability::Admin,
        };

        assert!(matches!(check_admin(&anonymous), Err(WebError::Unauthorized)));
        assert!(matches!(check_admin(&viewer), Err(WebError::Forbidden)));
        assert!(check_admin(&admin).is_ok());
    }

    #[test]
    fn bearer_token_is_extracted() {
        let request = Request::builder()
            .header(AUTHORIZATION, "Bearer secret")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&request), Some("secret"));

        let request = Request::builder()
            .header(AUTHORIZATION, "Basic secret")
            .body(axum::body::Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&request), None);
    }
}
