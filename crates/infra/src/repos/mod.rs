mod booking;
mod call_request;
mod email_log;
mod shared;

pub use booking::IBookingRepo;
use booking::{InMemoryBookingRepo, PostgresBookingRepo};
pub use call_request::ICallRequestRepo;
use call_request::{InMemoryCallRequestRepo, PostgresCallRequestRepo};
pub use email_log::IEmailLogRepo;
use email_log::{InMemoryEmailLogRepo, PostgresEmailLogRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub bookings: Arc<dyn IBookingRepo>,
    pub call_requests: Arc<dyn ICallRequestRepo>,
    pub email_logs: Arc<dyn IEmailLogRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB RUNNING MIGRATIONS ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB RUNNING MIGRATIONS ... [done]");

        Ok(Self {
            bookings: Arc::new(PostgresBookingRepo::new(pool.clone())),
            call_requests: Arc::new(PostgresCallRequestRepo::new(pool.clone())),
            email_logs: Arc::new(PostgresEmailLogRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            bookings: Arc::new(InMemoryBookingRepo::new()),
            call_requests: Arc::new(InMemoryCallRequestRepo::new()),
            email_logs: Arc::new(InMemoryEmailLogRepo::new()),
        }
    }
}
