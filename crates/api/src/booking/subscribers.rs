use super::create_booking::CreateBookingUseCase;
use crate::shared::usecase::Subscriber;
use tiffin_domain::{notification::booking_confirmation, Booking};
use tiffin_infra::TiffinContext;
use tracing::warn;

pub struct SendConfirmationOnBookingCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateBookingUseCase> for SendConfirmationOnBookingCreated {
    async fn notify(&self, booking: &Booking, ctx: &TiffinContext) {
        let message = match booking_confirmation(booking, &ctx.config.branding) {
            Some(message) => message,
            None => return,
        };

        // Sideeffect, the booking is created regardless of the delivery
        let res = ctx.mailer.send(&message).await;
        if !res.success {
            warn!(
                "Booking confirmation for booking: {} was not delivered: {:?}",
                booking.id, res.error
            );
        }
    }
}
