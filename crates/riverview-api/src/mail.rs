//! Best-effort staff notifications over SMTP.
//!
//! Missing configuration disables the mailer entirely; sends happen on a
//! spawned task so a slow or unreachable relay never delays a response.
//! Delivery failures are logged and swallowed.

use std::sync::Arc;

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, warn};

use riverview_types::{BookingRequest, Inquiry};

#[derive(Clone)]
pub struct Mailer {
    inner: Option<Arc<MailerInner>>,
}

struct MailerInner {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl Mailer {
    /// Builds from `SMTP_HOST`, `SMTP_USERNAME`, `SMTP_PASSWORD`,
    /// `NOTIFY_FROM` and `NOTIFY_TO`; any of these missing or malformed
    /// yields a disabled mailer with a logged warning. `SMTP_PORT` is
    /// optional and defaults to 587 (submission with STARTTLS).
    pub fn from_env() -> Self {
        let vars = [
            "SMTP_HOST",
            "SMTP_USERNAME",
            "SMTP_PASSWORD",
            "NOTIFY_FROM",
            "NOTIFY_TO",
        ]
        .map(|name| std::env::var(name).ok().filter(|v| !v.is_empty()));

        let [Some(host), Some(username), Some(password), Some(from), Some(to)] = vars else {
            warn!("SMTP not configured; email notifications disabled");
            return Self { inner: None };
        };

        let port: u16 = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(587);

        let (from, to) = match (from.parse::<Mailbox>(), to.parse::<Mailbox>()) {
            (Ok(from), Ok(to)) => (from, to),
            _ => {
                warn!("NOTIFY_FROM/NOTIFY_TO is not a valid address; email notifications disabled");
                return Self { inner: None };
            }
        };

        let transport = match AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&host) {
            Ok(builder) => builder
                .port(port)
                .credentials(Credentials::new(username, password))
                .build(),
            Err(e) => {
                warn!("SMTP relay setup failed ({e}); email notifications disabled");
                return Self { inner: None };
            }
        };

        Self {
            inner: Some(Arc::new(MailerInner { transport, from, to })),
        }
    }

    /// No-op mailer for tests and unconfigured deployments.
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    pub fn notify_booking(&self, booking: &BookingRequest) {
        let body = format!(
            "New booking request #{id}\n\n\
             Name:      {name}\n\
             Email:     {email}\n\
             Phone:     {phone}\n\
             Check-in:  {check_in}\n\
             Check-out: {check_out}\n\
             Adults:    {adults}\n\
             Children:  {children}\n\
             Room type: {room_type}\n\n\
             {message}\n",
            id = booking.id,
            name = booking.name,
            email = booking.email,
            phone = booking.phone,
            check_in = fmt_date(booking.check_in),
            check_out = fmt_date(booking.check_out),
            adults = fmt_count(booking.adults),
            children = fmt_count(booking.children),
            room_type = booking.room_type.as_deref().unwrap_or("(not specified)"),
            message = booking.message.as_deref().unwrap_or(""),
        );
        self.send(format!("New booking request from {}", booking.name), body);
    }

    pub fn notify_inquiry(&self, inquiry: &Inquiry) {
        let body = format!(
            "New contact inquiry #{id}\n\n\
             Name:    {name}\n\
             Email:   {email}\n\
             Phone:   {phone}\n\
             Subject: {subject}\n\n\
             {message}\n",
            id = inquiry.id,
            name = inquiry.name,
            email = inquiry.email,
            phone = inquiry.phone,
            subject = inquiry.subject.as_deref().unwrap_or("(none)"),
            message = inquiry.message,
        );
        self.send(format!("New inquiry from {}", inquiry.name), body);
    }

    fn send(&self, subject: String, body: String) {
        let Some(inner) = self.inner.clone() else {
            debug!("mailer disabled, dropping notification: {subject}");
            return;
        };

        let message = Message::builder()
            .from(inner.from.clone())
            .to(inner.to.clone())
            .subject(&subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body);

        let message = match message {
            Ok(m) => m,
            Err(e) => {
                warn!("failed to build notification email: {e}");
                return;
            }
        };

        tokio::spawn(async move {
            match inner.transport.send(message).await {
                Ok(_) => debug!("notification email sent: {subject}"),
                Err(e) => warn!("failed to send notification email: {e}"),
            }
        });
    }
}

fn fmt_date(t: Option<chrono::DateTime<chrono::Utc>>) -> String {
    t.map_or_else(
        || "(not specified)".to_string(),
        |t| t.format("%Y-%m-%d").to_string(),
    )
}

fn fmt_count(n: Option<i64>) -> String {
    n.map_or_else(|| "(not specified)".to_string(), |n| n.to_string())
}
