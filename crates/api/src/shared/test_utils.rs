use std::sync::Arc;
use tiffin_domain::{
    Booking, EmailLog, EmailStatus, NaiveDate, NewBooking, NewEmailLog, ReminderThreshold, ID,
};
use tiffin_infra::{IBookingRepo, IEmailLogRepo, InMemoryMailSender, StaticTimeSys, TiffinContext};

/// Inmemory context frozen at `now` together with the mailer it sends through
pub fn setup_context(now: i64) -> (TiffinContext, Arc<InMemoryMailSender>) {
    let mut ctx = TiffinContext::create_inmemory();
    let mailer = Arc::new(InMemoryMailSender::new());
    ctx.mailer = mailer.clone();
    ctx.sys = Arc::new(StaticTimeSys(now));
    (ctx, mailer)
}

pub async fn insert_booking(
    ctx: &TiffinContext,
    plan_type: &str,
    start_date: &str,
    email: Option<&str>,
) -> Booking {
    insert_booking_starting(ctx, plan_type, start_date.parse().unwrap(), email).await
}

/// Stores the booking directly, skipping the checks done at intake
pub async fn insert_booking_starting(
    ctx: &TiffinContext,
    plan_type: &str,
    start_date: NaiveDate,
    email: Option<&str>,
) -> Booking {
    let booking = NewBooking {
        name: "Test Customer".into(),
        phone: "9000000000".into(),
        email: email.map(String::from),
        address: "1 Test Lane".into(),
        meal_type: "Veg".into(),
        plan_type: plan_type.into(),
        start_date,
        notes: None,
        created: 0,
    }
    .normalized();
    ctx.repos.bookings.insert(&booking).await.unwrap()
}

/// Booking store that breaks on demand and otherwise delegates to `inner`
pub struct FailingBookingRepo {
    pub inner: Arc<dyn IBookingRepo>,
    pub fail_fetch: bool,
    pub fail_flag_for: Option<ID>,
}

#[async_trait::async_trait]
impl IBookingRepo for FailingBookingRepo {
    async fn insert(&self, booking: &NewBooking) -> anyhow::Result<Booking> {
        self.inner.insert(booking).await
    }

    async fn find(&self, booking_id: &ID) -> Option<Booking> {
        self.inner.find(booking_id).await
    }

    async fn find_many(&self, booking_ids: &[ID]) -> anyhow::Result<Vec<Booking>> {
        self.inner.find_many(booking_ids).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Booking>> {
        self.inner.find_all().await
    }

    async fn find_emailable(&self) -> anyhow::Result<Vec<Booking>> {
        if self.fail_fetch {
            anyhow::bail!("Connection reset");
        }
        self.inner.find_emailable().await
    }

    async fn set_reminder_flag(
        &self,
        booking_id: &ID,
        threshold: ReminderThreshold,
    ) -> anyhow::Result<()> {
        if self.fail_flag_for == Some(*booking_id) {
            anyhow::bail!("Connection reset");
        }
        self.inner.set_reminder_flag(booking_id, threshold).await
    }

    async fn delete(&self, booking_id: &ID) -> Option<Booking> {
        self.inner.delete(booking_id).await
    }

    async fn count(&self) -> anyhow::Result<i64> {
        self.inner.count().await
    }

    async fn count_created_since(&self, since: i64) -> anyhow::Result<i64> {
        self.inner.count_created_since(since).await
    }
}

/// Email log store that refuses entries for one booking
pub struct FailingEmailLogRepo {
    pub inner: Arc<dyn IEmailLogRepo>,
    pub fail_for: ID,
}

#[async_trait::async_trait]
impl IEmailLogRepo for FailingEmailLogRepo {
    async fn insert(&self, log: &NewEmailLog) -> anyhow::Result<EmailLog> {
        if log.booking_id == self.fail_for {
            anyhow::bail!("Connection reset");
        }
        self.inner.insert(log).await
    }

    async fn find_recent(&self, limit: i64) -> anyhow::Result<Vec<EmailLog>> {
        self.inner.find_recent(limit).await
    }

    async fn count_by_status(&self, status: EmailStatus) -> anyhow::Result<i64> {
        self.inner.count_by_status(status).await
    }

    async fn unlink_booking(&self, booking_id: &ID) -> anyhow::Result<()> {
        self.inner.unlink_booking(booking_id).await
    }
}
