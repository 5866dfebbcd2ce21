mod inmemory;
mod postgres;

pub use inmemory::InMemoryCallRequestRepo;
pub use postgres::PostgresCallRequestRepo;
use tiffin_domain::{CallRequest, NewCallRequest, ID};

#[async_trait::async_trait]
pub trait ICallRequestRepo: Send + Sync {
    async fn insert(&self, call_request: &NewCallRequest) -> anyhow::Result<CallRequest>;
    /// Newest first
    async fn find_all(&self) -> anyhow::Result<Vec<CallRequest>>;
    async fn delete(&self, call_request_id: &ID) -> Option<CallRequest>;
    async fn count(&self) -> anyhow::Result<i64>;
    async fn count_created_since(&self, since: i64) -> anyhow::Result<i64>;
}
