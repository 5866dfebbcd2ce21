use super::IMailSender;
use crate::config::SmtpConfig;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tiffin_domain::{DeliveryResult, MailMessage};
use tracing::{error, info};
use uuid::Uuid;

pub struct SmtpMailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    reply_to: Option<Mailbox>,
}

impl SmtpMailSender {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let from: Mailbox = config.from_email.parse()?;
        let reply_to = match &config.business_email {
            Some(email) => Some(email.parse::<Mailbox>()?),
            None => None,
        };
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.user.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from,
            reply_to,
        })
    }

    fn build_message(&self, message: &MailMessage, message_id: &str) -> anyhow::Result<Message> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(message.to.parse::<Mailbox>()?)
            .subject(message.subject.clone())
            .message_id(Some(message_id.to_string()))
            .header(ContentType::TEXT_HTML);
        if let Some(reply_to) = &self.reply_to {
            builder = builder.reply_to(reply_to.clone());
        }
        Ok(builder.body(message.html.clone())?)
    }
}

#[async_trait::async_trait]
impl IMailSender for SmtpMailSender {
    async fn send(&self, message: &MailMessage) -> DeliveryResult {
        let message_id = format!("<{}@{}>", Uuid::new_v4(), self.from.email.domain());
        let email = match self.build_message(message, &message_id) {
            Ok(email) => email,
            Err(e) => {
                error!("Unable to build email to {}: {:?}", message.to, e);
                return DeliveryResult::failed(e.to_string());
            }
        };

        match self.transport.send(email).await {
            Ok(_) => {
                info!("Email sent to {} - MessageId: {}", message.to, message_id);
                DeliveryResult::delivered(message_id)
            }
            Err(e) => {
                error!("Email send error to {}: {}", message.to, e);
                DeliveryResult::failed(e.to_string())
            }
        }
    }
}
