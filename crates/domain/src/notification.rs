use crate::{
    booking::Booking,
    date::format_date,
    reminder::{urgency, Urgency},
};
use serde::{Deserialize, Serialize};

/// A rendered email ready to be handed to a mail transport
#[derive(Debug, Clone, PartialEq)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Outcome of handing a `MailMessage` to a mail transport.
/// Transport failures are reported here and never raised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryResult {
    pub success: bool,
    pub message_id: Option<String>,
    pub error: Option<String>,
}

impl DeliveryResult {
    pub fn delivered(message_id: String) -> Self {
        Self {
            success: true,
            message_id: Some(message_id),
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            success: false,
            message_id: None,
            error: Some(error),
        }
    }
}

/// Business details that go into every customer email
#[derive(Debug, Clone)]
pub struct Branding {
    pub business_name: String,
    pub support_phone: String,
    pub renewal_url: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            business_name: "Ghar Ka Khana".into(),
            support_phone: "+91 98765 43210".into(),
            renewal_url: "http://localhost:5000/#booking".into(),
        }
    }
}

fn plural(days: i64) -> &'static str {
    if days == 1 {
        ""
    } else {
        "s"
    }
}

pub fn renewal_subject(days_left: i64, branding: &Branding) -> String {
    let prefix = match urgency(days_left) {
        Urgency::Urgent => "Urgent: ",
        Urgency::Normal => "",
    };
    format!(
        "{}Your {} Subscription Ends in {} Day{}",
        prefix,
        branding.business_name,
        days_left,
        plural(days_left)
    )
}

/// Reminds the customer that the subscription ends in `days_left` days.
/// Returns `None` when the booking has no email to deliver to.
pub fn renewal_reminder(
    booking: &Booking,
    days_left: i64,
    branding: &Branding,
) -> Option<MailMessage> {
    let to = booking.email.clone().filter(|email| !email.is_empty())?;

    let (color, headline) = match urgency(days_left) {
        Urgency::Urgent => (
            "#e74c3c",
            format!(
                "EXPIRING IN {} DAY{}!",
                days_left,
                plural(days_left).to_uppercase()
            ),
        ),
        Urgency::Normal => ("#D97757", format!("{} days remaining", days_left)),
    };
    let end_date = format_date(&booking.end_date());

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"></head>
<body style="margin:0;padding:0;background:#FFF9F0;font-family:Georgia,serif;">
  <div style="max-width:600px;margin:0 auto;background:#ffffff;">
    <h1 style="color:#D97757;text-align:center;">{business}</h1>
    <p>Dear {name},</p>
    <p>We hope you have been enjoying your daily home-cooked tiffin meals!
      This is a friendly reminder that your subscription is coming to an end soon.</p>
    <div style="border-left:4px solid {color};padding:16px;">
      <strong style="color:{color};">{headline}</strong>
      <p>Your subscription ends on <strong>{end_date}</strong>. Renew now to avoid any interruption.</p>
    </div>
    <table>
      <tr><td>Plan</td><td>{plan}</td></tr>
      <tr><td>Meal Type</td><td>{meal}</td></tr>
      <tr><td>Started On</td><td>{start_date}</td></tr>
      <tr><td>Ends On</td><td>{end_date}</td></tr>
      <tr><td>Delivery Address</td><td>{address}</td></tr>
    </table>
    <p style="text-align:center;"><a href="{renewal_url}">Renew My Subscription</a></p>
    <p style="text-align:center;">Questions? Call us at <strong>{phone}</strong> or reply to this email.</p>
  </div>
</body>
</html>"#,
        business = escape_html(&branding.business_name),
        name = escape_html(&booking.name),
        color = color,
        headline = headline,
        end_date = end_date,
        plan = escape_html(&booking.plan_type),
        meal = escape_html(&booking.meal_type),
        start_date = format_date(&booking.start_date),
        address = escape_html(&booking.address),
        renewal_url = escape_html(&branding.renewal_url),
        phone = escape_html(&branding.support_phone),
    );

    Some(MailMessage {
        to,
        subject: renewal_subject(days_left, branding),
        html,
    })
}

/// Sent right after a booking with an email has been created
pub fn booking_confirmation(booking: &Booking, branding: &Branding) -> Option<MailMessage> {
    let to = booking.email.clone().filter(|email| !email.is_empty())?;

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"></head>
<body style="margin:0;padding:0;background:#FFF9F0;font-family:Georgia,serif;">
  <div style="max-width:600px;margin:0 auto;background:#ffffff;">
    <h1 style="color:#D97757;text-align:center;">{business}</h1>
    <p>Namaste, {name}!</p>
    <p>Your tiffin service has been successfully booked. Get ready to enjoy delicious
      home-cooked meals delivered fresh to your doorstep!</p>
    <table>
      <tr><td>Meal Type</td><td>{meal}</td></tr>
      <tr><td>Plan</td><td>{plan}</td></tr>
      <tr><td>Start Date</td><td>{start_date}</td></tr>
      <tr><td>End Date</td><td>{end_date}</td></tr>
      <tr><td>Address</td><td>{address}</td></tr>
    </table>
    <p style="text-align:center;">Questions? Call <strong>{phone}</strong></p>
  </div>
</body>
</html>"#,
        business = escape_html(&branding.business_name),
        name = escape_html(&booking.name),
        meal = escape_html(&booking.meal_type),
        plan = escape_html(&booking.plan_type),
        start_date = format_date(&booking.start_date),
        end_date = format_date(&booking.end_date()),
        address = escape_html(&booking.address),
        phone = escape_html(&branding.support_phone),
    );

    Some(MailMessage {
        to,
        subject: format!("Booking Confirmed - {}", branding.business_name),
        html,
    })
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
