use super::IBookingRepo;
use crate::repos::shared::inmemory_repo::*;
use tiffin_domain::{Booking, NewBooking, ReminderThreshold, ID};

pub struct InMemoryBookingRepo {
    bookings: std::sync::Mutex<Vec<Booking>>,
    sequence: Sequence,
}

impl InMemoryBookingRepo {
    pub fn new() -> Self {
        Self {
            bookings: std::sync::Mutex::new(Vec::new()),
            sequence: Sequence::new(),
        }
    }
}

#[async_trait::async_trait]
impl IBookingRepo for InMemoryBookingRepo {
    async fn insert(&self, booking: &NewBooking) -> anyhow::Result<Booking> {
        let booking = booking.clone().into_booking(self.sequence.next());
        insert(&booking, &self.bookings);
        Ok(booking)
    }

    async fn find(&self, booking_id: &ID) -> Option<Booking> {
        find(booking_id, &self.bookings)
    }

    async fn find_many(&self, booking_ids: &[ID]) -> anyhow::Result<Vec<Booking>> {
        Ok(find_by(&self.bookings, |b| booking_ids.contains(&b.id)))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Booking>> {
        let mut bookings = find_by(&self.bookings, |_| true);
        bookings.sort_by(|b1, b2| b2.created.cmp(&b1.created).then(b2.id.cmp(&b1.id)));
        Ok(bookings)
    }

    async fn find_emailable(&self) -> anyhow::Result<Vec<Booking>> {
        Ok(find_by(&self.bookings, |b| b.has_email()))
    }

    async fn set_reminder_flag(
        &self,
        booking_id: &ID,
        threshold: ReminderThreshold,
    ) -> anyhow::Result<()> {
        let updated = update_many(
            &self.bookings,
            |b| b.id == *booking_id,
            |b| b.reminders.mark_sent(threshold),
        );
        if updated == 0 {
            anyhow::bail!("Booking with id: {} was not found", booking_id);
        }
        Ok(())
    }

    async fn delete(&self, booking_id: &ID) -> Option<Booking> {
        delete(booking_id, &self.bookings)
    }

    async fn count(&self) -> anyhow::Result<i64> {
        Ok(count_by(&self.bookings, |_| true))
    }

    async fn count_created_since(&self, since: i64) -> anyhow::Result<i64> {
        Ok(count_by(&self.bookings, |b| b.created >= since))
    }
}
