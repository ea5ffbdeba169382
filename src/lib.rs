pub mod catalog;
pub mod config;
pub mod digest;
pub mod fetcher;
pub mod filter;
pub mod logger;
pub mod monitor;
pub mod notifier;

// Exporting types for convenience
pub use catalog::KeywordCatalog;
pub use config::{MailSettings, RegionSource};
pub use digest::{build_digest, MatchRecord};
pub use fetcher::{FetchError, HttpFetcher, Page, PageFetcher};
pub use filter::KeywordFilter;
pub use monitor::Monitor;
pub use notifier::{MailTransport, Notifier, OutgoingMail, SmtpMailer, TransportError};
