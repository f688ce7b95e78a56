use std::sync::Arc;

use anyhow::Context;
use auth::Authenticator;
use ems_service::config::BootstrapConfig;
use ems_service::config::Config;
use ems_service::domain::account::models::Password;
use ems_service::domain::account::models::Username;
use ems_service::domain::account::ports::AccountServicePort;
use ems_service::inbound::http::router::create_router;
use ems_service::inbound::http::router::AppState;
use ems_service::inbound::http::router::Repositories;
use ems_service::inbound::http::router::SecurityState;
use ems_service::outbound::repositories::InMemoryAccountRepository;
use ems_service::outbound::repositories::InMemoryApplicantRepository;
use ems_service::outbound::repositories::InMemoryAttendanceRepository;
use ems_service::outbound::repositories::InMemoryDepartmentRepository;
use ems_service::outbound::repositories::InMemoryEmployeeRepository;
use ems_service::outbound::repositories::InMemoryHrRepository;
use ems_service::outbound::repositories::InMemoryLeaveRepository;
use ems_service::outbound::repositories::PostgresAccountRepository;
use ems_service::outbound::repositories::PostgresApplicantRepository;
use ems_service::outbound::repositories::PostgresAttendanceRepository;
use ems_service::outbound::repositories::PostgresDepartmentRepository;
use ems_service::outbound::repositories::PostgresEmployeeRepository;
use ems_service::outbound::repositories::PostgresHrRepository;
use ems_service::outbound::repositories::PostgresLeaveRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ems_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "ems-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    let backend = if config.database.url.is_some() {
        "postgresql"
    } else {
        "memory"
    };
    tracing::info!(
        http_port = config.server.http_port,
        database = backend,
        custom_rules = config.security.rules.len(),
        "Configuration loaded"
    );

    let security = SecurityState {
        authenticator: Arc::new(Authenticator::new(
            config.jwt.secret.as_bytes(),
            chrono::Duration::hours(config.jwt.expiration_hours),
        )),
        access_policy: Arc::new(config.security.access_policy()?),
    };
    tracing::info!(
        access_rules = security.access_policy.rules().len(),
        token_ttl_hours = security.authenticator.token_ttl().num_hours(),
        "Security boundary configured"
    );

    let state = match &config.database.url {
        Some(url) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(url)
                .await
                .context("Failed to connect to PostgreSQL")?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let repositories = Repositories {
                accounts: Arc::new(PostgresAccountRepository::new(pg_pool.clone())),
                departments: Arc::new(PostgresDepartmentRepository::new(pg_pool.clone())),
                employees: Arc::new(PostgresEmployeeRepository::new(pg_pool.clone())),
                hrs: Arc::new(PostgresHrRepository::new(pg_pool.clone())),
                leaves: Arc::new(PostgresLeaveRepository::new(pg_pool.clone())),
                attendance: Arc::new(PostgresAttendanceRepository::new(pg_pool.clone())),
                applicants: Arc::new(PostgresApplicantRepository::new(pg_pool)),
            };
            AppState::from_repositories(repositories, security)
        }
        None => {
            tracing::warn!("No database.url configured, data lives in memory only");
            let repositories = Repositories {
                accounts: Arc::new(InMemoryAccountRepository::new()),
                departments: Arc::new(InMemoryDepartmentRepository::new()),
                employees: Arc::new(InMemoryEmployeeRepository::new()),
                hrs: Arc::new(InMemoryHrRepository::new()),
                leaves: Arc::new(InMemoryLeaveRepository::new()),
                attendance: Arc::new(InMemoryAttendanceRepository::new()),
                applicants: Arc::new(InMemoryApplicantRepository::new()),
            };
            AppState::from_repositories(repositories, security)
        }
    };

    bootstrap_admin(&config.bootstrap, state.account_service.as_ref()).await?;

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");
    Ok(())
}

async fn bootstrap_admin(
    bootstrap: &BootstrapConfig,
    accounts: &dyn AccountServicePort,
) -> Result<(), anyhow::Error> {
    match (&bootstrap.admin_username, &bootstrap.admin_password) {
        (Some(username), Some(password)) => {
            let username = Username::new(username.clone())?;
            let password = Password::new(password.clone())?;
            accounts.ensure_admin(username, password).await?;
        }
        (None, None) => {
            tracing::info!("No bootstrap admin configured");
        }
        _ => {
            tracing::warn!(
                "Bootstrap admin needs both admin_username and admin_password, skipping"
            );
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
