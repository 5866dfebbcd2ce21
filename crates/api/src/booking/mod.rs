pub mod create_booking;
mod delete_booking;
mod get_bookings;
mod subscribers;

use actix_web::web;
use create_booking::create_booking_controller;
use delete_booking::delete_booking_controller;
use get_bookings::get_bookings_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/bookings", web::post().to(create_booking_controller));
    cfg.route("/bookings", web::get().to(get_bookings_controller));
    cfg.route(
        "/bookings/{booking_id}",
        web::delete().to(delete_booking_controller),
    );
}
