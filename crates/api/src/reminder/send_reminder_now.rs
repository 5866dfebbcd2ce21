use crate::{
    error::TiffinError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use tiffin_api_structs::send_reminder_now::*;
use tiffin_domain::{notification::renewal_reminder, DeliveryResult, ID};
use tiffin_infra::TiffinContext;

const DEFAULT_DAYS_LEFT: i64 = 3;

pub async fn send_reminder_now_controller(
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<TiffinContext>,
) -> Result<HttpResponse, TiffinError> {
    let usecase = SendReminderNowUseCase {
        booking_id: path_params.booking_id,
        days_left: days_left_or_default(query_params.days.as_deref()),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res)))
        .map_err(TiffinError::from)
}

fn days_left_or_default(days: Option<&str>) -> i64 {
    days
        .and_then(|days| days.trim().parse::<i64>().ok())
        .filter(|days| *days != 0)
        .unwrap_or(DEFAULT_DAYS_LEFT)
}

/// Sends a renewal reminder for a single booking right away, for any number
/// of days left. Does not look at or update the reminder flags.
#[derive(Debug)]
struct SendReminderNowUseCase {
    booking_id: ID,
    days_left: i64,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    NotFound(ID),
    MissingEmail(ID),
    DeliveryFailed(String),
}

impl From<UseCaseError> for TiffinError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(booking_id) => Self::NotFound(format!(
                "The booking with id: {}, was not found.",
                booking_id
            )),
            UseCaseError::MissingEmail(booking_id) => Self::BadClientData(format!(
                "The booking with id: {} has no email",
                booking_id
            )),
            UseCaseError::DeliveryFailed(e) => Self::MailDeliveryFailed(e),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendReminderNowUseCase {
    type Response = DeliveryResult;

    type Error = UseCaseError;

    const NAME: &'static str = "SendReminderNow";

    async fn execute(&mut self, ctx: &TiffinContext) -> Result<Self::Response, Self::Error> {
        let booking = ctx
            .repos
            .bookings
            .find(&self.booking_id)
            .await
            .ok_or(UseCaseError::NotFound(self.booking_id))?;

        let message = renewal_reminder(&booking, self.days_left, &ctx.config.branding)
            .ok_or(UseCaseError::MissingEmail(self.booking_id))?;

        let res = ctx.mailer.send(&message).await;
        if res.success {
            Ok(res)
        } else {
            Err(UseCaseError::DeliveryFailed(
                res.error.unwrap_or_else(|| "Unknown error".into()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::{insert_booking, setup_context};
    use tiffin_domain::ReminderFlags;

    #[test]
    fn missing_zero_or_garbage_days_use_the_default() {
        assert_eq!(days_left_or_default(None), 3);
        assert_eq!(days_left_or_default(Some("0")), 3);
        assert_eq!(days_left_or_default(Some("abc")), 3);
        assert_eq!(days_left_or_default(Some("")), 3);
        assert_eq!(days_left_or_default(Some("7")), 7);
        assert_eq!(days_left_or_default(Some("-2")), -2);
    }

    #[actix_web::main]
    #[test]
    async fn sends_regardless_of_due_date_and_leaves_state_alone() {
        let (ctx, mailer) = setup_context(0);
        let booking = insert_booking(&ctx, "6 Months", "2025-01-01", Some("a@example.com")).await;

        let res = execute(
            SendReminderNowUseCase {
                booking_id: booking.id,
                days_left: 5,
            },
            &ctx,
        )
        .await
        .unwrap();
        assert!(res.success);
        assert!(res.message_id.is_some());

        let messages = mailer.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].subject.ends_with("Ends in 5 Days"));

        let stored = ctx.repos.bookings.find(&booking.id).await.unwrap();
        assert_eq!(stored.reminders, ReminderFlags::default());
        assert!(ctx.repos.email_logs.find_recent(50).await.unwrap().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn reports_structured_failures() {
        let (ctx, mailer) = setup_context(0);
        let without_email = insert_booking(&ctx, "1 Week", "2025-01-01", None).await;
        let with_email = insert_booking(&ctx, "1 Week", "2025-01-01", Some("a@example.com")).await;

        let res = execute(
            SendReminderNowUseCase {
                booking_id: ID::from(404),
                days_left: 3,
            },
            &ctx,
        )
        .await;
        assert_eq!(res.unwrap_err(), UseCaseError::NotFound(ID::from(404)));

        let res = execute(
            SendReminderNowUseCase {
                booking_id: without_email.id,
                days_left: 3,
            },
            &ctx,
        )
        .await;
        assert_eq!(res.unwrap_err(), UseCaseError::MissingEmail(without_email.id));

        mailer.set_failing(true);
        let res = execute(
            SendReminderNowUseCase {
                booking_id: with_email.id,
                days_left: 3,
            },
            &ctx,
        )
        .await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::DeliveryFailed("Connection refused".into())
        );
    }
}
