mod inmemory;
mod postgres;

pub use inmemory::InMemoryBookingRepo;
pub use postgres::PostgresBookingRepo;
use tiffin_domain::{Booking, NewBooking, ReminderThreshold, ID};

#[async_trait::async_trait]
pub trait IBookingRepo: Send + Sync {
    async fn insert(&self, booking: &NewBooking) -> anyhow::Result<Booking>;
    async fn find(&self, booking_id: &ID) -> Option<Booking>;
    async fn find_many(&self, booking_ids: &[ID]) -> anyhow::Result<Vec<Booking>>;
    /// Newest first
    async fn find_all(&self) -> anyhow::Result<Vec<Booking>>;
    /// Every booking with a non empty email
    async fn find_emailable(&self) -> anyhow::Result<Vec<Booking>>;
    /// Fails when the booking does not exist
    async fn set_reminder_flag(
        &self,
        booking_id: &ID,
        threshold: ReminderThreshold,
    ) -> anyhow::Result<()>;
    async fn delete(&self, booking_id: &ID) -> Option<Booking>;
    async fn count(&self) -> anyhow::Result<i64>;
    async fn count_created_since(&self, since: i64) -> anyhow::Result<i64>;
}
