use chrono_tz::Tz;
use tiffin_domain::Branding;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Timezone deciding what "today" is for the expiry check and the stats
    pub timezone: Tz,
    /// Local hour of the day at which the daily expiry check runs
    pub expiry_check_hour: u32,
    pub smtp: SmtpConfig,
    pub branding: Branding,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Sender of every email, for example `"Ghar Ka Khana" <noreply@gharkhakhana.com>`
    pub from_email: String,
    /// Customer replies go to this address when it is set
    pub business_email: Option<String>,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env_or<T: std::str::FromStr + std::fmt::Display>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(value) => match value.parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

impl Config {
    pub fn new() -> Self {
        let port = parse_env_or("PORT", 5000);

        let timezone = parse_env_or("TIMEZONE", Tz::UTC);
        let mut expiry_check_hour = parse_env_or("EXPIRY_CHECK_HOUR", 8);
        if expiry_check_hour > 23 {
            warn!(
                "The given EXPIRY_CHECK_HOUR: {} is not an hour of the day, falling back to 8.",
                expiry_check_hour
            );
            expiry_check_hour = 8;
        }
        info!(
            "Expiry check runs daily at {}:00 in timezone {}",
            expiry_check_hour, timezone
        );

        let smtp = SmtpConfig {
            host: env_or("SMTP_HOST", "smtp.ethereal.email"),
            port: parse_env_or("SMTP_PORT", 587),
            user: env_or("SMTP_USER", "your_email@ethereal.email"),
            password: env_or("SMTP_PASS", "your_email_password"),
            from_email: env_or(
                "FROM_EMAIL",
                "\"Ghar Ka Khana\" <noreply@gharkhakhana.com>",
            ),
            business_email: std::env::var("BUSINESS_EMAIL").ok(),
        };

        let default_branding = Branding::default();
        let branding = Branding {
            business_name: env_or("BUSINESS_NAME", &default_branding.business_name),
            support_phone: env_or("SUPPORT_PHONE", &default_branding.support_phone),
            renewal_url: env_or("RENEWAL_URL", &default_branding.renewal_url),
        };

        Self {
            port,
            timezone,
            expiry_check_hour,
            smtp,
            branding,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
