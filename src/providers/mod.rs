//! Job-search providers and the page fetcher they share

mod headhunter;
mod superjob;

pub use headhunter::HeadHunter;
pub use superjob::SuperJob;

use crate::config::SurveyConfig;
use crate::types::{Result, VacancyPage};
use clap::ValueEnum;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Trait for a job-search API queried page by page
pub trait VacancyProvider: Send + Sync {
    /// Provider name (e.g., "headhunter")
    fn name(&self) -> &str;

    /// Search endpoint URL
    fn endpoint(&self) -> &str;

    /// Extra request headers (user agent, API keys)
    fn headers(&self) -> Vec<(&'static str, String)>;

    /// Query parameters for one page of a language search
    fn query(&self, language: &str, page: u32) -> Vec<(&'static str, String)>;

    /// Decode a response body into estimates and pagination state.
    /// `page` is the index the body was requested with.
    fn parse_page(&self, body: &str, page: u32) -> Result<VacancyPage>;
}

/// Fetches one page of search results for a language.
///
/// The aggregation loop only sees this trait, so both pagination styles
/// (page count and "more" flag) go through the same loop.
pub trait PageFetcher {
    fn name(&self) -> &str;

    fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage>;
}

/// Page fetcher backed by a real HTTP API
pub struct HttpFetcher<P> {
    client: Client,
    provider: P,
}

impl<P: VacancyProvider> HttpFetcher<P> {
    pub fn new(client: Client, provider: P) -> Self {
        Self { client, provider }
    }
}

impl<P: VacancyProvider> PageFetcher for HttpFetcher<P> {
    fn name(&self) -> &str {
        self.provider.name()
    }

    fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        let query = self.provider.query(language, page);
        debug!(provider = self.provider.name(), language, page, "requesting page");

        let mut request = self.client.get(self.provider.endpoint()).query(&query);
        for (name, value) in self.provider.headers() {
            request = request.header(name, value);
        }

        let body = request.send()?.error_for_status()?.text()?;
        self.provider.parse_page(&body, page)
    }
}

/// Build the blocking HTTP client shared by all providers
pub fn http_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// Providers selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderKind {
    /// HeadHunter (api.hh.ru)
    #[value(name = "hh")]
    HeadHunter,
    /// SuperJob (api.superjob.ru)
    #[value(name = "sj")]
    SuperJob,
}

impl ProviderKind {
    /// Run order of a full survey
    pub const ALL: [ProviderKind; 2] = [ProviderKind::HeadHunter, ProviderKind::SuperJob];

    /// Report title for this provider
    pub fn title<'a>(&self, config: &'a SurveyConfig) -> &'a str {
        match self {
            Self::HeadHunter => &config.headhunter.title,
            Self::SuperJob => &config.superjob.title,
        }
    }

    /// Build the HTTP fetcher for this provider.
    /// Fails if the provider's configuration is incomplete.
    pub fn fetcher(&self, config: &SurveyConfig, client: Client) -> Result<Box<dyn PageFetcher>> {
        let fetcher: Box<dyn PageFetcher> = match self {
            Self::HeadHunter => Box::new(HttpFetcher::new(
                client,
                HeadHunter::new(config.headhunter.clone()),
            )),
            Self::SuperJob => Box::new(HttpFetcher::new(
                client,
                SuperJob::new(config.superjob.clone())?,
            )),
        };
        Ok(fetcher)
    }
}
