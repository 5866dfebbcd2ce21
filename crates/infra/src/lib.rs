mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, SmtpConfig};
use repos::Repos;
pub use repos::{IBookingRepo, ICallRequestRepo, IEmailLogRepo};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};

#[derive(Clone)]
pub struct TiffinContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub mailer: Arc<dyn IMailSender>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl TiffinContext {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let config = Config::new();
        let repos = Repos::create_postgres(&params.postgres_connection_string).await?;
        let mailer = SmtpMailSender::new(&config.smtp)?;
        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            mailer: Arc::new(mailer),
        })
    }

    /// Context backed by inmemory repositories and a mail sender that only
    /// records messages
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            mailer: Arc::new(InMemoryMailSender::new()),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<TiffinContext> {
    TiffinContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string()?,
    })
    .await
}

fn get_psql_connection_string() -> anyhow::Result<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .map_err(|_| anyhow::anyhow!("{} env var to be present.", PSQL_CONNECTION_STRING))
}
