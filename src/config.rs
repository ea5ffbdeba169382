use std::env;
use std::time::Duration;

/// Identifying header sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Per-request timeout for listing and detail pages.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub const SMTP_HOST: &str = "smtp.qq.com";
pub const SMTP_PORT: u16 = 465;
pub const MAIL_SUBJECT: &str = "【结构生物学岗位监控提醒】";

/// Regions are processed in this order, which is also the order of the digest.
const REGIONS: &[(&str, &str)] = &[
    ("广东人社", "http://hrss.gd.gov.cn/gkmlpt/index"),
    ("湖南人社", "http://rst.hunan.gov.cn/rst/xxgk/zpzl/"),
    ("重庆人社", "http://rlsbj.cq.gov.cn/zwxx_182/sydw/"),
    ("浙江人社", "http://rlsbt.zj.gov.cn/col/col1229743683/index.html"),
    ("上海人社", "https://rsj.sh.gov.cn/trsrc_177/"),
];

/// A provincial HR bureau and the listing page that announces its openings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSource {
    pub name: String,
    pub url: String,
}

impl RegionSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        RegionSource {
            name: name.into(),
            url: url.into(),
        }
    }
}

pub fn default_regions() -> Vec<RegionSource> {
    REGIONS
        .iter()
        .map(|(name, url)| RegionSource::new(*name, *url))
        .collect()
}

/// Mail credentials taken from the environment.
///
/// Missing variables are kept as empty strings; the failure surfaces when the
/// message is addressed or the relay rejects the login.
#[derive(Clone, Default)]
pub struct MailSettings {
    pub sender: String,
    pub password: String,
    pub receiver: String,
}

impl MailSettings {
    pub fn from_env() -> Self {
        MailSettings {
            sender: env::var("EMAIL_SENDER").unwrap_or_default(),
            password: env::var("EMAIL_PASSWORD").unwrap_or_default(),
            receiver: env::var("EMAIL_RECEIVER").unwrap_or_default(),
        }
    }
}

impl std::fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailSettings")
            .field("sender", &self.sender)
            .field("password", &"<redacted>")
            .field("receiver", &self.receiver)
            .finish()
    }
}
