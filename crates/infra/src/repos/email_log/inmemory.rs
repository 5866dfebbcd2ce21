use super::IEmailLogRepo;
use crate::repos::shared::inmemory_repo::*;
use tiffin_domain::{EmailLog, EmailStatus, NewEmailLog, ID};

pub struct InMemoryEmailLogRepo {
    logs: std::sync::Mutex<Vec<EmailLog>>,
    sequence: Sequence,
}

impl InMemoryEmailLogRepo {
    pub fn new() -> Self {
        Self {
            logs: std::sync::Mutex::new(Vec::new()),
            sequence: Sequence::new(),
        }
    }
}

#[async_trait::async_trait]
impl IEmailLogRepo for InMemoryEmailLogRepo {
    async fn insert(&self, log: &NewEmailLog) -> anyhow::Result<EmailLog> {
        let log = log.clone().into_email_log(self.sequence.next());
        insert(&log, &self.logs);
        Ok(log)
    }

    async fn find_recent(&self, limit: i64) -> anyhow::Result<Vec<EmailLog>> {
        let mut logs = find_by(&self.logs, |_| true);
        logs.sort_by(|l1, l2| l2.sent_at.cmp(&l1.sent_at).then(l2.id.cmp(&l1.id)));
        logs.truncate(limit.max(0) as usize);
        Ok(logs)
    }

    async fn count_by_status(&self, status: EmailStatus) -> anyhow::Result<i64> {
        Ok(count_by(&self.logs, |l| l.status == status))
    }

    async fn unlink_booking(&self, booking_id: &ID) -> anyhow::Result<()> {
        update_many(
            &self.logs,
            |l| l.booking_id == Some(*booking_id),
            |l| l.booking_id = None,
        );
        Ok(())
    }
}
