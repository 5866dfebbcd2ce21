mod create_call_request;
mod delete_call_request;
mod get_call_requests;

use actix_web::web;
use create_call_request::create_call_request_controller;
use delete_call_request::delete_call_request_controller;
use get_call_requests::get_call_requests_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/call-requests",
        web::post().to(create_call_request_controller),
    );
    cfg.route("/call-requests", web::get().to(get_call_requests_controller));
    cfg.route(
        "/call-requests/{call_request_id}",
        web::delete().to(delete_call_request_controller),
    );
}
