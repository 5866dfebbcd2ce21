use super::IBookingRepo;
use sqlx::{FromRow, PgPool};
use tiffin_domain::{Booking, NaiveDate, NewBooking, ReminderFlags, ReminderThreshold, ID};
use tracing::error;

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BookingRaw {
    id: i64,
    name: String,
    phone: String,
    email: Option<String>,
    address: String,
    meal_type: String,
    plan_type: String,
    start_date: NaiveDate,
    notes: Option<String>,
    email_sent_7d: bool,
    email_sent_3d: bool,
    email_sent_1d: bool,
    created: i64,
}

impl From<BookingRaw> for Booking {
    fn from(e: BookingRaw) -> Self {
        Self {
            id: e.id.into(),
            name: e.name,
            phone: e.phone,
            email: e.email,
            address: e.address,
            meal_type: e.meal_type,
            plan_type: e.plan_type,
            start_date: e.start_date,
            notes: e.notes,
            reminders: ReminderFlags {
                sent_7d: e.email_sent_7d,
                sent_3d: e.email_sent_3d,
                sent_1d: e.email_sent_1d,
            },
            created: e.created,
        }
    }
}

#[async_trait::async_trait]
impl IBookingRepo for PostgresBookingRepo {
    async fn insert(&self, booking: &NewBooking) -> anyhow::Result<Booking> {
        let raw: BookingRaw = sqlx::query_as(
            r#"
            INSERT INTO bookings
            (name, phone, email, address, meal_type, plan_type, start_date, notes, created)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&booking.name)
        .bind(&booking.phone)
        .bind(&booking.email)
        .bind(&booking.address)
        .bind(&booking.meal_type)
        .bind(&booking.plan_type)
        .bind(booking.start_date)
        .bind(&booking.notes)
        .bind(booking.created)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert booking: {:?}. DB returned error: {:?}",
                booking, e
            );
            e
        })?;
        Ok(raw.into())
    }

    async fn find(&self, booking_id: &ID) -> Option<Booking> {
        let res: Option<BookingRaw> = sqlx::query_as(
            r#"
            SELECT * FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(booking_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find booking with id: {} failed. DB returned error: {:?}",
                booking_id, e
            );
            e
        })
        .ok()?;
        res.map(|booking| booking.into())
    }

    async fn find_many(&self, booking_ids: &[ID]) -> anyhow::Result<Vec<Booking>> {
        let ids = booking_ids.iter().map(|id| id.inner()).collect::<Vec<_>>();
        let bookings: Vec<BookingRaw> = sqlx::query_as(
            r#"
            SELECT * FROM bookings
            WHERE id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find bookings with ids: {:?} failed. DB returned error: {:?}",
                booking_ids, e
            );
            e
        })?;
        Ok(bookings.into_iter().map(|b| b.into()).collect())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Booking>> {
        let bookings: Vec<BookingRaw> = sqlx::query_as(
            r#"
            SELECT * FROM bookings
            ORDER BY created DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all bookings failed. DB returned error: {:?}", e);
            e
        })?;
        Ok(bookings.into_iter().map(|b| b.into()).collect())
    }

    async fn find_emailable(&self) -> anyhow::Result<Vec<Booking>> {
        let bookings: Vec<BookingRaw> = sqlx::query_as(
            r#"
            SELECT * FROM bookings
            WHERE email IS NOT NULL AND email <> ''
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find emailable bookings failed. DB returned error: {:?}", e);
            e
        })?;
        Ok(bookings.into_iter().map(|b| b.into()).collect())
    }

    async fn set_reminder_flag(
        &self,
        booking_id: &ID,
        threshold: ReminderThreshold,
    ) -> anyhow::Result<()> {
        // The column comes from a closed set and is never user input
        let query = format!(
            "UPDATE bookings SET {} = TRUE WHERE id = $1",
            threshold.flag_column()
        );
        let res = sqlx::query(&query)
            .bind(booking_id.inner_ref())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    "Unable to set {} for booking: {}. DB returned error: {:?}",
                    threshold.flag_column(),
                    booking_id,
                    e
                );
                e
            })?;
        if res.rows_affected() == 0 {
            anyhow::bail!("Booking with id: {} was not found", booking_id);
        }
        Ok(())
    }

    async fn delete(&self, booking_id: &ID) -> Option<Booking> {
        let res: Option<BookingRaw> = sqlx::query_as(
            r#"
            DELETE FROM bookings
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(booking_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete booking with id: {} failed. DB returned error: {:?}",
                booking_id, e
            );
            e
        })
        .ok()?;
        res.map(|booking| booking.into())
    }

    async fn count(&self) -> anyhow::Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_created_since(&self, since: i64) -> anyhow::Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE created >= $1")
            .bind(since)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
