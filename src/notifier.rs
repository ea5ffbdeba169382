use lettre::address::AddressError;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::info;
use thiserror::Error;

use crate::config::{self, MailSettings};
use crate::digest::{build_digest, MatchRecord};

/// Delivery failures. Unlike fetch errors these end the run.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("bad mail address: {0}")]
    Address(#[from] AddressError),
    #[error("could not build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("smtp delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// A plain-text mail, before it is handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mail-transport capability used by [`Notifier`].
pub trait MailTransport {
    fn send(&self, mail: &OutgoingMail) -> Result<(), TransportError>;
}

/// Submits mail through an implicit-TLS SMTP relay with a login.
pub struct SmtpMailer {
    host: String,
    port: u16,
    username: String,
    password: String,
}

impl SmtpMailer {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        SmtpMailer {
            host: host.into(),
            port,
            username: username.into(),
            password: password.into(),
        }
    }

    /// The fixed relay, logging in as the configured sender.
    pub fn from_settings(settings: &MailSettings) -> Self {
        SmtpMailer::new(config::SMTP_HOST, config::SMTP_PORT, &settings.sender, &settings.password)
    }

    pub fn build_message(mail: &OutgoingMail) -> Result<Message, TransportError> {
        let from: Mailbox = mail.from.parse()?;
        let to: Mailbox = mail.to.parse()?;
        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(mail.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body.clone())?;
        Ok(message)
    }
}

impl MailTransport for SmtpMailer {
    fn send(&self, mail: &OutgoingMail) -> Result<(), TransportError> {
        let message = Self::build_message(mail)?;

        let mailer = SmtpTransport::relay(&self.host)?
            .port(self.port)
            .credentials(Credentials::new(self.username.clone(), self.password.clone()))
            .build();

        info!("Submitting digest to {}:{}", self.host, self.port);
        mailer.send(&message)?;
        Ok(())
    }
}

/// Addresses digests and hands them to a transport, once per call.
pub struct Notifier<T> {
    transport: T,
    sender: String,
    receiver: String,
}

impl<T: MailTransport> Notifier<T> {
    pub fn new(transport: T, sender: impl Into<String>, receiver: impl Into<String>) -> Self {
        Notifier {
            transport,
            sender: sender.into(),
            receiver: receiver.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn send(&self, body: &str) -> Result<(), TransportError> {
        let mail = OutgoingMail {
            from: self.sender.clone(),
            to: self.receiver.clone(),
            subject: config::MAIL_SUBJECT.to_string(),
            body: body.to_string(),
        };
        self.transport.send(&mail)
    }

    /// Sends the digest of `records` if there is one. Returns whether a mail went out.
    pub fn notify(&self, records: &[MatchRecord]) -> Result<bool, TransportError> {
        match build_digest(records) {
            Some(body) => {
                self.send(&body)?;
                info!("Digest with {} posting(s) sent to {}", records.len(), self.receiver);
                Ok(true)
            }
            None => {
                info!("No matching postings this run; nothing to send.");
                Ok(false)
            }
        }
    }
}

impl Notifier<SmtpMailer> {
    pub fn smtp(settings: &MailSettings) -> Self {
        Notifier::new(SmtpMailer::from_settings(settings), &settings.sender, &settings.receiver)
    }
}
