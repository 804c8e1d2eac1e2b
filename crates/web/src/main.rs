use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod routes;
mod state;

use config::Config;
use features::{championships, drivers, races, results, session, standings};
use middleware::auth::SessionTokens;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        championships::handlers::list_championships,
        championships::handlers::get_championship,
        championships::handlers::create_championship,
        championships::handlers::delete_championship,
        drivers::handlers::list_drivers,
        drivers::handlers::create_driver,
        drivers::handlers::update_driver,
        drivers::handlers::delete_driver,
        races::handlers::list_races,
        races::handlers::create_race,
        races::handlers::update_race,
        races::handlers::delete_race,
        results::handlers::create_result,
        results::handlers::save_result,
        results::handlers::delete_result,
        standings::handlers::get_standings,
        standings::handlers::get_snapshot,
        session::handlers::get_session,
    ),
    components(
        schemas(
            storage::dto::championship::CreateChampionshipRequest,
            storage::dto::driver::CreateDriverRequest,
            storage::dto::driver::UpdateDriverRequest,
            storage::dto::race::CreateRaceRequest,
            storage::dto::race::UpdateRaceRequest,
            storage::dto::race::CreateRaceResponse,
            storage::dto::race_result::CreateResultRequest,
            storage::dto::race_result::UpdateResultRequest,
            storage::dto::standings::Standing,
            storage::dto::standings::RaceColumn,
            storage::dto::standings::GridCell,
            storage::dto::standings::EditableCell,
            storage::dto::standings::GridRow,
            storage::dto::standings::ChampionshipSnapshot,
            storage::dto::session::SessionResponse,
            storage::models::Championship,
            storage::models::Driver,
            storage::models::Race,
            storage::models::RaceResult,
            storage::models::ScoreSheet,
            storage::models::Capability,
            results::handlers::SaveResultResponse,
        )
    ),
    tags(
        (name = "championships", description = "Championship endpoints"),
        (name = "drivers", description = "Driver management"),
        (name = "races", description = "Race management and result seeding"),
        (name = "results", description = "Admin result editing"),
        (name = "standings", description = "Public standings and race grid"),
        (name = "session", description = "Caller identity"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Session token")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting championship tracker API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let tokens = SessionTokens::from_comma_separated(&config.session_tokens)
        .context("Failed to parse SESSION_TOKENS")?;
    if tokens.is_empty() {
        tracing::warn!("No session tokens configured, admin routes are unreachable");
    } else {
        tracing::info!("Loaded {} session tokens", tokens.len());
    }

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::with_max_connections(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState { db, tokens };

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(routes::api_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
