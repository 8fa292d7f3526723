//! SuperJob (api.superjob.ru) vacancy search
//!
//! Pagination is flag style: every response says whether more pages follow.

use crate::config::SuperJobConfig;
use crate::services::estimator::SalaryRange;
use crate::types::{LangpayError, Result, VacancyPage};
use serde::Deserialize;

use super::VacancyProvider;

/// Currency code SuperJob uses for roubles
const TARGET_CURRENCY: &str = "rub";

#[derive(Deserialize)]
struct SjResponse {
    objects: Vec<SjVacancy>,
    more: bool,
    total: u64,
}

#[derive(Deserialize)]
struct SjVacancy {
    payment_from: Option<f64>,
    payment_to: Option<f64>,
    currency: Option<String>,
}

impl SjVacancy {
    fn salary_range(&self) -> SalaryRange<'_> {
        SalaryRange {
            from: self.payment_from,
            to: self.payment_to,
            currency: self.currency.as_deref().unwrap_or_default(),
        }
    }
}

/// SuperJob provider
pub struct SuperJob {
    config: SuperJobConfig,
    app_key: String,
}

impl SuperJob {
    /// Fails when no application key is configured
    pub fn new(config: SuperJobConfig) -> Result<Self> {
        let app_key = config
            .app_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LangpayError::Config("SJOB_KEY is not set".into()))?;
        Ok(Self { config, app_key })
    }
}

impl VacancyProvider for SuperJob {
    fn name(&self) -> &str {
        "superjob"
    }

    fn endpoint(&self) -> &str {
        &self.config.url
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![("X-Api-App-Id", self.app_key.clone())]
    }

    fn query(&self, language: &str, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("keyword", format!("{} {}", self.config.search_prefix, language)),
            ("town", self.config.town.clone()),
            ("page", page.to_string()),
        ]
    }

    fn parse_page(&self, body: &str, _page: u32) -> Result<VacancyPage> {
        let response: SjResponse = serde_json::from_str(body)?;

        let estimates = response
            .objects
            .iter()
            .filter_map(|v| v.salary_range().estimate(TARGET_CURRENCY))
            .collect();

        Ok(VacancyPage {
            estimates,
            found: response.total,
            has_more: response.more,
        })
    }
}
