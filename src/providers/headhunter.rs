//! HeadHunter (api.hh.ru) vacancy search
//!
//! Pagination is page-count style: every response carries the total
//! number of pages for the search.

use crate::config::HeadHunterConfig;
use crate::services::estimator::SalaryRange;
use crate::types::{Result, VacancyPage};
use serde::Deserialize;

use super::VacancyProvider;

/// Currency code HeadHunter uses for roubles
const TARGET_CURRENCY: &str = "RUR";

/// Search response (only the fields the survey reads)
#[derive(Deserialize)]
struct HhResponse {
    items: Vec<HhVacancy>,
    pages: u32,
    found: u64,
}

#[derive(Deserialize)]
struct HhVacancy {
    salary: Option<HhSalary>,
}

#[derive(Deserialize)]
struct HhSalary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

impl HhVacancy {
    fn salary_range(&self) -> Option<SalaryRange<'_>> {
        let salary = self.salary.as_ref()?;
        Some(SalaryRange {
            from: salary.from,
            to: salary.to,
            currency: salary.currency.as_deref().unwrap_or_default(),
        })
    }
}

/// HeadHunter provider
pub struct HeadHunter {
    config: HeadHunterConfig,
}

impl HeadHunter {
    pub fn new(config: HeadHunterConfig) -> Self {
        Self { config }
    }
}

impl VacancyProvider for HeadHunter {
    fn name(&self) -> &str {
        "headhunter"
    }

    fn endpoint(&self) -> &str {
        &self.config.url
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![("User-Agent", self.config.user_agent.clone())]
    }

    fn query(&self, language: &str, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("text", format!("{} {}", self.config.search_prefix, language)),
            ("period", self.config.period_days.to_string()),
            ("area", self.config.area_id.to_string()),
            ("page", page.to_string()),
        ]
    }

    fn parse_page(&self, body: &str, page: u32) -> Result<VacancyPage> {
        let response: HhResponse = serde_json::from_str(body)?;

        let estimates = response
            .items
            .iter()
            .filter_map(|v| v.salary_range())
            .filter_map(|range| range.estimate(TARGET_CURRENCY))
            .collect();

        Ok(VacancyPage {
            estimates,
            found: response.found,
            has_more: page + 1 < response.pages,
        })
    }
}
