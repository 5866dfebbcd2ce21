mod inmemory;
mod postgres;

pub use inmemory::InMemoryEmailLogRepo;
pub use postgres::PostgresEmailLogRepo;
use tiffin_domain::{EmailLog, EmailStatus, NewEmailLog, ID};

/// Append only store of reminder delivery attempts
#[async_trait::async_trait]
pub trait IEmailLogRepo: Send + Sync {
    async fn insert(&self, log: &NewEmailLog) -> anyhow::Result<EmailLog>;
    /// The `limit` most recent entries, newest first
    async fn find_recent(&self, limit: i64) -> anyhow::Result<Vec<EmailLog>>;
    async fn count_by_status(&self, status: EmailStatus) -> anyhow::Result<i64>;
    /// Keeps the entries of a booking that is about to be deleted
    async fn unlink_booking(&self, booking_id: &ID) -> anyhow::Result<()>;
}
