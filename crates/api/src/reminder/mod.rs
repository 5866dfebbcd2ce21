pub mod send_expiry_reminders;
mod send_reminder_now;

use actix_web::web;
use send_reminder_now::send_reminder_now_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/bookings/{booking_id}/reminder",
        web::post().to(send_reminder_now_controller),
    );
}
