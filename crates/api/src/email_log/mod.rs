mod get_email_logs;

use actix_web::web;
use get_email_logs::get_email_logs_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/email-logs", web::get().to(get_email_logs_controller));
}
