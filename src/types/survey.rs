//! Survey types shared by providers, aggregation and rendering

use serde::Serialize;

/// Per-language figures for one provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LanguageStats {
    /// Total match count reported by the provider
    pub vacancies_found: u64,
    /// Number of vacancies that produced a salary estimate
    pub vacancies_processed: u64,
    /// Truncated mean of all estimates, 0 when there are none
    pub average_salary: u64,
}

impl LanguageStats {
    pub fn from_estimates(vacancies_found: u64, estimates: &[f64]) -> Self {
        if estimates.is_empty() {
            return Self {
                vacancies_found,
                vacancies_processed: 0,
                average_salary: 0,
            };
        }

        let total: f64 = estimates.iter().sum();
        let average = total / estimates.len() as f64;

        Self {
            vacancies_found,
            vacancies_processed: estimates.len() as u64,
            average_salary: average as u64,
        }
    }
}

/// One decoded page of search results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacancyPage {
    /// Estimates computed from this page's vacancies (absent ones dropped)
    pub estimates: Vec<f64>,
    /// Total match count as reported on this page
    pub found: u64,
    /// Whether the provider has another page after this one
    pub has_more: bool,
}

/// A row of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageRow {
    pub language: String,
    #[serde(flatten)]
    pub stats: LanguageStats,
}

/// Aggregated results of one provider, rows in query order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyReport {
    pub title: String,
    pub languages: Vec<LanguageRow>,
}

impl SurveyReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            languages: Vec::new(),
        }
    }

    pub fn push(&mut self, language: impl Into<String>, stats: LanguageStats) {
        self.languages.push(LanguageRow {
            language: language.into(),
            stats,
        });
    }
}
