mod booking;
mod call_request;
mod email_log;
mod error;
mod job_schedulers;
mod reminder;
mod shared;
mod stats;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
pub use job_schedulers::ExpirySweepScheduler;
pub use reminder::send_expiry_reminders::SweepReport;
use std::net::TcpListener;
use tiffin_infra::TiffinContext;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    booking::configure_routes(cfg);
    call_request::configure_routes(cfg);
    email_log::configure_routes(cfg);
    reminder::configure_routes(cfg);
    stats::configure_routes(cfg);
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: TiffinContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: TiffinContext) {
        ExpirySweepScheduler::new(context).start();
    }

    async fn configure_server(context: TiffinContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
