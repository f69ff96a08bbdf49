use crate::error::EmailError;
use crate::results::JobRecord;
use chrono::{DateTime, Local};
use html_escape::{encode_double_quoted_attribute, encode_text};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::env;

/// Outbound relay the digest is submitted to
pub const SMTP_RELAY: &str = "smtp.gmail.com";
pub const SMTP_PORT: u16 = 587;

/// Sender credentials and recipient, read from the environment
#[derive(Clone)]
pub struct EmailSettings {
    pub sender: String,
    pub password: String,
    pub receiver: String,
}

impl EmailSettings {
    /// Reads `SENDER_EMAIL`, `EMAIL_PASSWORD` and `RECEIVER_EMAIL`
    pub fn from_env() -> Result<Self, EmailError> {
        let var = |name: &'static str| {
            env::var(name)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .ok_or(EmailError::MissingSecret(name))
        };

        Ok(Self {
            sender: var("SENDER_EMAIL")?,
            password: var("EMAIL_PASSWORD")?,
            receiver: var("RECEIVER_EMAIL")?,
        })
    }
}

impl std::fmt::Debug for EmailSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailSettings")
            .field("sender", &self.sender)
            .field("password", &"<redacted>")
            .field("receiver", &self.receiver)
            .finish()
    }
}

/// Subject and HTML body summarizing a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub subject: String,
    pub html: String,
}

impl Digest {
    pub fn new(records: &[JobRecord], now: DateTime<Local>) -> Self {
        let date = now.format("%Y-%m-%d");

        let jobs_html: String = records
            .iter()
            .map(|job| {
                format!(
                    r#"
        <div style="margin:10px 0; padding:10px; border-left:4px solid #2557a7; background:#fff; border-radius:5px;">
            <strong>{}</strong><br>
            <em>{}</em> - {}<br>
            <a href="{}" target="_blank">View Job</a><br>
            <small>Region: {}</small>
        </div>"#,
                    encode_text(&job.job_title),
                    encode_text(&job.company_name),
                    encode_text(&job.location),
                    encode_double_quoted_attribute(&job.job_url),
                    encode_text(&job.region),
                )
            })
            .collect();

        let html = format!(
            r#"<html><body>
    <h2>LinkedIn Jobs - {} found</h2>
    <p>Date: {}</p>
    {}
    <p><em>Automated Scraper • {}</em></p>
    </body></html>"#,
            records.len(),
            date,
            jobs_html,
            now.format("%Y-%m-%d %H:%M")
        );

        Self {
            subject: format!("{} New LinkedIn Jobs - {}", records.len(), date),
            html,
        }
    }
}

/// Something that can deliver a digest
pub trait SendDigest {
    fn send(&self, digest: &Digest) -> Result<(), EmailError>;
}

/// Delivers digests over authenticated SMTP submission
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    settings: EmailSettings,
}

impl SmtpMailer {
    pub fn new(settings: EmailSettings) -> Self {
        Self { settings }
    }

    pub fn receiver(&self) -> &str {
        &self.settings.receiver
    }

    fn message(&self, digest: &Digest) -> Result<Message, EmailError> {
        let from: Mailbox = self.settings.sender.parse()?;
        let to: Mailbox = self.settings.receiver.parse()?;

        Ok(Message::builder()
            .from(from)
            .to(to)
            .subject(digest.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(digest.html.clone())?)
    }
}

impl SendDigest for SmtpMailer {
    fn send(&self, digest: &Digest) -> Result<(), EmailError> {
        let message = self.message(digest)?;
        let creds = Credentials::new(self.settings.sender.clone(), self.settings.password.clone());

        let mailer = SmtpTransport::starttls_relay(SMTP_RELAY)?
            .port(SMTP_PORT)
            .credentials(creds)
            .build();

        mailer.send(&message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(title: &str, url: &str) -> JobRecord {
        JobRecord {
            region: "India".to_string(),
            job_title: title.to_string(),
            company_name: "Acme & Sons".to_string(),
            location: "Pune".to_string(),
            job_url: url.to_string(),
            ..JobRecord::default()
        }
    }

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 14, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_digest_subject_and_body() {
        let records = vec![
            record("Data Scientist", "https://www.linkedin.com/jobs/view/1"),
            record("ML Engineer", "https://www.linkedin.com/jobs/view/2"),
        ];
        let digest = Digest::new(&records, noon());

        assert_eq!(digest.subject, "2 New LinkedIn Jobs - 2025-03-14");
        assert!(digest.html.contains("<h2>LinkedIn Jobs - 2 found</h2>"));
        assert!(digest.html.contains("<p>Date: 2025-03-14</p>"));
        assert!(digest.html.contains("<strong>Data Scientist</strong>"));
        assert!(digest.html.contains("<strong>ML Engineer</strong>"));
        assert!(digest.html.contains(r#"href="https://www.linkedin.com/jobs/view/2""#));
        assert!(digest.html.contains("Region: India"));
        assert!(digest.html.contains("2025-03-14 12:30"));
    }

    #[test]
    fn test_digest_escapes_markup() {
        let records = vec![record("<script>alert(1)</script>", "https://x.test/?a=\"b\"")];
        let digest = Digest::new(&records, noon());

        assert!(!digest.html.contains("<script>"));
        assert!(digest.html.contains("&lt;script&gt;"));
        assert!(digest.html.contains("Acme &amp; Sons"));
        assert!(!digest.html.contains("a=\"b\""));
    }

    #[test]
    fn test_message_rejects_bad_address() {
        let mailer = SmtpMailer::new(EmailSettings {
            sender: "not an address".to_string(),
            password: "secret".to_string(),
            receiver: "me@example.com".to_string(),
        });
        let digest = Digest::new(&[record("Data Scientist", "")], noon());

        assert!(matches!(
            mailer.message(&digest),
            Err(EmailError::Address(_))
        ));
    }

    #[test]
    fn test_settings_debug_hides_password() {
        let settings = EmailSettings {
            sender: "a@example.com".to_string(),
            password: "hunter2".to_string(),
            receiver: "b@example.com".to_string(),
        };
        assert!(!format!("{:?}", settings).contains("hunter2"));
    }
}
