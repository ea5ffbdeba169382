use log::{debug, info, warn};
use scraper::{Html, Selector};
use url::Url;

use crate::config::RegionSource;
use crate::digest::MatchRecord;
use crate::fetcher::{FetchError, PageFetcher};
use crate::filter::KeywordFilter;

/// An `<a>` element from a listing page: its visible text and raw href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub title: String,
    pub href: Option<String>,
}

/// A listing link that passed the title gate, waiting for its detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLink {
    pub title: String,
    pub url: Url,
}

pub fn extract_anchors(html: &str) -> Vec<Anchor> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a").expect("`a` is a valid selector");

    document
        .select(&selector)
        .map(|element| Anchor {
            title: element.text().collect::<String>().trim().to_string(),
            href: element.value().attr("href").map(str::to_string),
        })
        .collect()
}

/// Turns an href from `base` into an absolute http(s) URL.
pub fn resolve_href(base: &Url, href: &str) -> Result<Url, FetchError> {
    let resolved = if href.starts_with("http") {
        Url::parse(href)
    } else {
        base.join(href)
    }
    .map_err(|source| FetchError::InvalidUrl { url: href.to_string(), source })?;

    match resolved.scheme() {
        "http" | "https" => Ok(resolved),
        _ => Err(FetchError::UnsupportedScheme { url: resolved.to_string() }),
    }
}

/// Walks every region once, in order, and collects the postings whose detail
/// pages match the keyword catalog.
pub struct Monitor<F> {
    fetcher: F,
    filter: KeywordFilter,
    regions: Vec<RegionSource>,
}

impl<F: PageFetcher> Monitor<F> {
    pub fn new(fetcher: F, filter: KeywordFilter, regions: Vec<RegionSource>) -> Self {
        Monitor { fetcher, filter, regions }
    }

    pub fn run(&self) -> Vec<MatchRecord> {
        let mut records = Vec::new();
        for (i, region) in self.regions.iter().enumerate() {
            info!("Checking {} / {} : {} ({})", i + 1, self.regions.len(), region.name, region.url);
            let found = self.fetch_region(region);
            info!("{}: {} matching posting(s)", region.name, found.len());
            records.extend(found);
        }
        info!("Run finished with {} matching posting(s) in total.", records.len());
        records
    }

    /// Matches for one region. A listing that cannot be fetched yields nothing.
    pub fn fetch_region(&self, region: &RegionSource) -> Vec<MatchRecord> {
        match self.scan_listing(region) {
            Ok(records) => records,
            Err(e) => {
                warn!("Skipping region {}: {}", region.name, e);
                Vec::new()
            }
        }
    }

    fn scan_listing(&self, region: &RegionSource) -> Result<Vec<MatchRecord>, FetchError> {
        let listing_url = Url::parse(&region.url)
            .map_err(|source| FetchError::InvalidUrl { url: region.url.clone(), source })?;
        let listing = self.fetcher.get(&listing_url)?;
        if !listing.is_success() {
            // Error pages still go through the title gate.
            debug!("{} answered with status {}", listing_url, listing.status);
        }

        let mut records = Vec::new();
        for anchor in extract_anchors(&listing.text) {
            let candidate = match self.candidate(&listing_url, anchor) {
                Some(Ok(c)) => c,
                Some(Err(e)) => {
                    warn!("Skipping link on {}: {}", region.name, e);
                    continue;
                }
                None => continue,
            };

            match self.confirm(&candidate) {
                Ok(true) => {
                    info!("Match: {} | {}", region.name, candidate.title);
                    let url = candidate.url.to_string();
                    records.push(MatchRecord::new(&region.name, candidate.title, url));
                }
                Ok(false) => debug!("No keyword in {} ({})", candidate.title, candidate.url),
                Err(e) => warn!("Skipping candidate '{}': {}", candidate.title, e),
            }
        }
        Ok(records)
    }

    /// `None` when the anchor is not worth opening at all.
    fn candidate(
        &self,
        listing_url: &Url,
        anchor: Anchor,
    ) -> Option<Result<CandidateLink, FetchError>> {
        if !self.filter.is_valid_title(&anchor.title) {
            return None;
        }
        let href = anchor.href.filter(|h| !h.is_empty())?;
        Some(resolve_href(listing_url, &href).map(|url| CandidateLink { title: anchor.title, url }))
    }

    fn confirm(&self, candidate: &CandidateLink) -> Result<bool, FetchError> {
        let detail = self.fetcher.get(&candidate.url)?;
        if !detail.is_success() {
            debug!("{} answered with status {}", candidate.url, detail.status);
        }
        Ok(self.filter.matches(&detail.text, &candidate.title))
    }
}
