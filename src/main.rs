mod telemetry;

use telemetry::{get_subscriber, init_subscriber};
use tiffin_api::Application;
use tiffin_infra::setup_context;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("tiffin".into(), "info".into());
    init_subscriber(subscriber)?;

    let context = setup_context().await?;

    let app = Application::new(context).await?;
    app.start().await?;
    Ok(())
}
