mod inmemory;
mod smtp;

pub use inmemory::InMemoryMailSender;
pub use smtp::SmtpMailSender;
use tiffin_domain::{DeliveryResult, MailMessage};

/// Delivers rendered emails. Delivery failures are reported in the
/// `DeliveryResult` and are never returned as errors.
#[async_trait::async_trait]
pub trait IMailSender: Send + Sync {
    async fn send(&self, message: &MailMessage) -> DeliveryResult;
}
