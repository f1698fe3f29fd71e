//! Hosting application that reads its configuration at startup.
//!
//! Run with e.g. `DEMO_DATABASE_URL=postgres://localhost/demo cargo run --example startup_config`.
//! Without `DEMO_DATABASE_URL` the process logs the error and exits non-zero.

use std::sync::Arc;

use anyhow::Context;
use envkit::{
    DotenvEnvironmentAdapter, EnvAccessor, EnvironmentPort, Fallback, SystemEnvironmentAdapter,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct DemoConfig {
    database_url: String,
    port: u16,
    workers: isize,
    sample_rate: f64,
    debug: bool,
    allowed_origins: Vec<String>,
}

impl DemoConfig {
    fn from_env(env: &EnvAccessor) -> Result<Self, envkit::EnvError> {
        Ok(Self {
            database_url: env.get_string("DATABASE_URL", Fallback::Required)?,
            port: env.get_or("PORT", 3000),
            workers: env.get_int("WORKERS", Fallback::Default(4))?,
            sample_rate: env.get_float("SAMPLE_RATE", Fallback::Default(0.1))?,
            debug: env.get_bool("DEBUG", Fallback::Default(false))?,
            allowed_origins: env.get_string_list("ALLOWED_ORIGINS", Fallback::Default(Vec::new()))?,
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "envkit=debug,startup_config=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // `.env.local` and `.env` from the working directory sit underneath the process environment.
    let base: Arc<dyn EnvironmentPort> = Arc::new(SystemEnvironmentAdapter::new());
    let environment = DotenvEnvironmentAdapter::from_dir(".", base)?;
    let env = EnvAccessor::new(Arc::new(environment)).with_prefix("DEMO_");

    let config = DemoConfig::from_env(&env).context("invalid startup configuration")?;
    tracing::info!(
        database_url = %config.database_url,
        port = config.port,
        workers = config.workers,
        sample_rate = config.sample_rate,
        debug = config.debug,
        allowed_origins = ?config.allowed_origins,
        "Configuration loaded"
    );

    Ok(())
}
