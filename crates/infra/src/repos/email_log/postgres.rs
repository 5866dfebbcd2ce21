use super::IEmailLogRepo;
use sqlx::{FromRow, PgPool};
use tiffin_domain::{EmailLog, EmailStatus, NewEmailLog, ID};
use tracing::error;

pub struct PostgresEmailLogRepo {
    pool: PgPool,
}

impl PostgresEmailLogRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EmailLogRaw {
    id: i64,
    booking_id: Option<i64>,
    days_left: i64,
    status: String,
    sent_at: i64,
}

impl From<EmailLogRaw> for EmailLog {
    fn from(e: EmailLogRaw) -> Self {
        // Only this repo writes the status column
        let status = e.status.parse().unwrap_or(EmailStatus::Failed);
        Self {
            id: e.id.into(),
            booking_id: e.booking_id.map(ID::from),
            days_left: e.days_left,
            status,
            sent_at: e.sent_at,
        }
    }
}

#[async_trait::async_trait]
impl IEmailLogRepo for PostgresEmailLogRepo {
    async fn insert(&self, log: &NewEmailLog) -> anyhow::Result<EmailLog> {
        let raw: EmailLogRaw = sqlx::query_as(
            r#"
            INSERT INTO email_logs (booking_id, days_left, status, sent_at)
            VALUES($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(log.booking_id.inner_ref())
        .bind(log.days_left)
        .bind(log.status.as_str())
        .bind(log.sent_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert email log: {:?}. DB returned error: {:?}",
                log, e
            );
            e
        })?;
        Ok(raw.into())
    }

    async fn find_recent(&self, limit: i64) -> anyhow::Result<Vec<EmailLog>> {
        let logs: Vec<EmailLogRaw> = sqlx::query_as(
            r#"
            SELECT * FROM email_logs
            ORDER BY sent_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find recent email logs failed. DB returned error: {:?}", e);
            e
        })?;
        Ok(logs.into_iter().map(|l| l.into()).collect())
    }

    async fn count_by_status(&self, status: EmailStatus) -> anyhow::Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM email_logs WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn unlink_booking(&self, booking_id: &ID) -> anyhow::Result<()> {
        sqlx::query("UPDATE email_logs SET booking_id = NULL WHERE booking_id = $1")
            .bind(booking_id.inner_ref())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    "Unable to unlink email logs of booking: {}. DB returned error: {:?}",
                    booking_id, e
                );
                e
            })?;
        Ok(())
    }
}
