//! Email notification delivery using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport, message::header,
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

use greenloop_shared::ports::Notifier;

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "noreply@greenloop.eco".to_string()
}

/// Resolves a member id to a deliverable address.
///
/// Identity lives outside the core, so address lookup is a collaborator too.
#[async_trait]
pub trait Directory: Send + Sync {
    async fn email_of(&self, user_id: &str) -> anyhow::Result<Option<String>>;
}

/// SMTP-backed notifier.
pub struct EmailNotifier<D: Directory> {
    mailer: SmtpTransport,
    from: String,
    directory: D,
}

impl<D: Directory> EmailNotifier<D> {
    pub fn new(config: &EmailConfig, directory: D) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email notifier initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
            directory,
        })
    }
}

#[async_trait]
impl<D: Directory> Notifier for EmailNotifier<D> {
    async fn send(&self, user_id: &str, title: &str, message: &str) -> anyhow::Result<()> {
        let Some(to) = self.directory.email_of(user_id).await? else {
            anyhow::bail!("no deliverable address for user {user_id}");
        };

        tracing::info!(user_id = %user_id, subject = %title, "Sending email");

        let email = Message::builder()
            .from(self.from.parse()?)
            .to(to.parse()?)
            .subject(title)
            .header(header::ContentType::TEXT_PLAIN)
            .body(message.to_owned())?;

        self.mailer.send(&email)?;

        Ok(())
    }
}
