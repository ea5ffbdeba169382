use std::fmt;

/// A posting whose detail page matched the keyword catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub region: String,
    pub title: String,
    pub url: String,
}

impl MatchRecord {
    pub fn new(
        region: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        MatchRecord {
            region: region.into(),
            title: title.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} | {}", self.region, self.title)?;
        writeln!(f, "{}", self.url)
    }
}

const ENTRY_SEPARATOR: &str = "\n\n";

/// Renders the run's matches into a mail body, or `None` when there is nothing to send.
pub fn build_digest(records: &[MatchRecord]) -> Option<String> {
    if records.is_empty() {
        return None;
    }
    let entries: Vec<String> = records.iter().map(|r| r.to_string()).collect();
    Some(entries.join(ENTRY_SEPARATOR))
}
