use super::IMailSender;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};
use tiffin_domain::{DeliveryResult, MailMessage};

/// Records every message instead of delivering it.
/// Can be switched into failing mode to simulate transport errors.
pub struct InMemoryMailSender {
    sent: Mutex<Vec<MailMessage>>,
    failing: AtomicBool,
}

impl InMemoryMailSender {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Every message handed to this sender, including the failed ones
    pub fn messages(&self) -> Vec<MailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for InMemoryMailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IMailSender for InMemoryMailSender {
    async fn send(&self, message: &MailMessage) -> DeliveryResult {
        let mut sent = self.sent.lock().unwrap();
        sent.push(message.clone());
        if self.failing.load(Ordering::SeqCst) {
            DeliveryResult::failed("Connection refused".into())
        } else {
            DeliveryResult::delivered(format!("<{}@inmemory>", sent.len()))
        }
    }
}
