use std::sync::Arc;
use tiffin_api::Application;
use tiffin_infra::{InMemoryMailSender, TiffinContext};
use tiffin_sdk::TiffinSDK;

pub struct TestApp {
    pub ctx: TiffinContext,
    pub mailer: Arc<InMemoryMailSender>,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, TiffinSDK, String) {
    let mut ctx = TiffinContext::create_inmemory();
    ctx.config.port = 0; // Random port
    let mailer = Arc::new(InMemoryMailSender::new());
    ctx.mailer = mailer.clone();

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { ctx, mailer };
    let sdk = TiffinSDK::new(address.clone());
    (app, sdk, address)
}
