use super::subscribers::SendConfirmationOnBookingCreated;
use crate::{
    error::TiffinError,
    shared::usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpResponse};
use tiffin_api_structs::create_booking::*;
use tiffin_domain::{plan, Booking, NaiveDate, NewBooking, Plan};
use tiffin_infra::TiffinContext;
use tracing::warn;

pub async fn create_booking_controller(
    ctx: web::Data<TiffinContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, TiffinError> {
    let body = body.0;
    let usecase = CreateBookingUseCase {
        name: body.name,
        phone: body.phone,
        email: body.email,
        address: body.address,
        meal_type: body.meal_type,
        plan_type: body.plan_type,
        start_date: body.start_date,
        notes: body.notes,
    };

    execute(usecase, &ctx)
        .await
        .map(|booking| HttpResponse::Created().json(APIResponse::new(booking)))
        .map_err(TiffinError::from)
}

#[derive(Debug)]
pub struct CreateBookingUseCase {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub meal_type: String,
    pub plan_type: String,
    pub start_date: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingFields(Vec<&'static str>),
    StartDateOutOfRange(NaiveDate),
    StorageError,
}

impl From<UseCaseError> for TiffinError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingFields(fields) => Self::BadClientData(format!(
                "Please provide all required fields. Missing: {}",
                fields.join(", ")
            )),
            UseCaseError::StartDateOutOfRange(start_date) => Self::BadClientData(format!(
                "The start date: {} is out of range",
                start_date
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateBookingUseCase {
    type Response = Booking;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateBooking";

    async fn execute(&mut self, ctx: &TiffinContext) -> Result<Self::Response, Self::Error> {
        let required = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
            ("mealType", &self.meal_type),
            ("planType", &self.plan_type),
        ];
        let missing = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(UseCaseError::MissingFields(missing));
        }

        let plan_type = self.plan_type.trim().to_string();
        if plan::checked_end_date(self.start_date, &plan_type).is_none() {
            return Err(UseCaseError::StartDateOutOfRange(self.start_date));
        }
        if plan_type.parse::<Plan>().is_err() {
            warn!(
                "Booking created with unknown plan: {}, it will last the default plan length",
                plan_type
            );
        }

        let booking = NewBooking {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.clone(),
            address: self.address.trim().to_string(),
            meal_type: self.meal_type.trim().to_string(),
            plan_type,
            start_date: self.start_date,
            notes: self.notes.clone(),
            created: ctx.sys.get_timestamp_millis(),
        }
        .normalized();

        ctx.repos
            .bookings
            .insert(&booking)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SendConfirmationOnBookingCreated)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::setup_context;

    fn usecase(email: Option<&str>) -> CreateBookingUseCase {
        CreateBookingUseCase {
            name: " Priya ".into(),
            phone: "9812345678".into(),
            email: email.map(String::from),
            address: "22 Park Street".into(),
            meal_type: "Veg".into(),
            plan_type: "2 Weeks".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            notes: None,
        }
    }

    #[actix_web::main]
    #[test]
    async fn creates_booking_and_sends_confirmation() {
        let (ctx, mailer) = setup_context(1000);

        let booking = execute(usecase(Some("priya@example.com")), &ctx)
            .await
            .unwrap();
        assert_eq!(booking.name, "Priya");
        assert_eq!(booking.created, 1000);
        assert!(ctx.repos.bookings.find(&booking.id).await.is_some());

        let messages = mailer.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].to, "priya@example.com");
        assert!(messages[0].subject.starts_with("Booking Confirmed"));
    }

    #[actix_web::main]
    #[test]
    async fn no_confirmation_without_email() {
        let (ctx, mailer) = setup_context(0);

        let booking = execute(usecase(Some("")), &ctx).await.unwrap();
        assert_eq!(booking.email, None);
        assert!(mailer.messages().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn failing_confirmation_still_creates_booking() {
        let (ctx, mailer) = setup_context(0);
        mailer.set_failing(true);

        let booking = execute(usecase(Some("priya@example.com")), &ctx)
            .await
            .unwrap();
        assert!(ctx.repos.bookings.find(&booking.id).await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_missing_fields() {
        let (ctx, _) = setup_context(0);

        let mut invalid = usecase(None);
        invalid.phone = "  ".into();
        invalid.meal_type = "".into();
        let res = execute(invalid, &ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::MissingFields(vec!["phone", "mealType"])
        );
        assert_eq!(ctx.repos.bookings.count().await.unwrap(), 0);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_start_date_without_representable_end() {
        let (ctx, mailer) = setup_context(0);

        let mut invalid = usecase(Some("priya@example.com"));
        invalid.start_date = NaiveDate::MAX - chrono::Duration::days(3);
        let start_date = invalid.start_date;
        let res = execute(invalid, &ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::StartDateOutOfRange(start_date)
        );
        assert_eq!(ctx.repos.bookings.count().await.unwrap(), 0);
        assert!(mailer.messages().is_empty());
    }
}
