//! Paginated fetch and per-language aggregation

use crate::providers::PageFetcher;
use crate::types::{LanguageStats, Result, SurveyReport};
use tracing::{debug, info};

/// Walk every page of one language's search and aggregate the estimates.
///
/// Always fetches page 0, then keeps going while the last page says more
/// pages follow. `vacancies_found` comes from the final page; estimates
/// accumulate across all pages.
pub fn collect_language(fetcher: &dyn PageFetcher, language: &str) -> Result<LanguageStats> {
    let mut estimates: Vec<f64> = Vec::new();
    let mut page_index: u32 = 0;

    let found = loop {
        let page = fetcher.fetch_page(language, page_index)?;
        debug!(
            provider = fetcher.name(),
            language,
            page = page_index,
            estimates = page.estimates.len(),
            has_more = page.has_more,
            "page fetched"
        );
        estimates.extend(page.estimates);

        if !page.has_more {
            break page.found;
        }
        page_index += 1;
    };

    let stats = LanguageStats::from_estimates(found, &estimates);
    info!(
        provider = fetcher.name(),
        language,
        pages = page_index + 1,
        found = stats.vacancies_found,
        processed = stats.vacancies_processed,
        average = stats.average_salary,
        "language done"
    );
    Ok(stats)
}

/// Survey every language in order. The first failure aborts the whole survey.
pub fn run_survey(
    fetcher: &dyn PageFetcher,
    title: &str,
    languages: &[String],
) -> Result<SurveyReport> {
    let mut report = SurveyReport::new(title);
    for language in languages {
        let stats = collect_language(fetcher, language)?;
        report.push(language.as_str(), stats);
    }
    Ok(report)
}
