mod mail;

pub use mail::{IMailSender, InMemoryMailSender, SmtpMailSender};
