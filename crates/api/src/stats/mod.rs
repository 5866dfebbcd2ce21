mod get_stats;

use actix_web::web;
use get_stats::get_stats_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/stats", web::get().to(get_stats_controller));
}
