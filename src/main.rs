//! Server entry point: loads configuration, wires adapters into the router
//! and serves it.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use hr_assist::adapters::ai::{OpenAIConfig, OpenAIProvider};
use hr_assist::adapters::auth::{BcryptPasswordHasher, JwtSessionValidator, JwtTokenService};
use hr_assist::adapters::http::{api_router, AppState, FailureResponder};
use hr_assist::adapters::postgres::{
    PostgresDiagnosticLogRepository, PostgresGenerationLogRepository, PostgresTokenBlacklist,
    PostgresUserRepository,
};
use hr_assist::application::DiagnosticLogger;
use hr_assist::config::{AppConfig, ValidationError};
use hr_assist::domain::generation::GenerationSettings;
use hr_assist::ports::{TokenService, UserRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    tracing::info!(
        environment = ?config.server.environment,
        model = %config.ai.model,
        "starting hr-assist"
    );

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("database migrations applied");
    }

    let openai = OpenAIConfig::from_app_config(&config.ai)
        .ok_or(ValidationError::MissingRequired("OPENAI_API_KEY"))?;

    let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_config(&config.auth));
    let diagnostics = DiagnosticLogger::new(Arc::new(PostgresDiagnosticLogRepository::new(
        pool.clone(),
    )));

    let state = AppState {
        users: users.clone(),
        password_hasher: Arc::new(BcryptPasswordHasher::new(config.auth.bcrypt_cost)),
        tokens: tokens.clone(),
        token_blacklist: Arc::new(PostgresTokenBlacklist::new(pool.clone())),
        session_validator: Arc::new(JwtSessionValidator::new(tokens, users)),
        ai_provider: Arc::new(OpenAIProvider::new(openai)?),
        generation_logs: Arc::new(PostgresGenerationLogRepository::new(pool)),
        generation_settings: GenerationSettings {
            model: config.ai.model.clone(),
            temperature: config.ai.temperature,
            timeout: config.ai.timeout(),
        },
        generation_limits: config.generation,
        failures: FailureResponder::new(diagnostics),
    };

    let app = api_router(state, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over
/// the configured level.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let result = if config.is_production() {
        fmt().with_env_filter(filter).json().try_init()
    } else {
        fmt().with_env_filter(filter).pretty().try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing init failed: {e}");
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
