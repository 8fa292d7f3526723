use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;

use crate::config::SurveyConfig;
use crate::providers::{http_client, PageFetcher, ProviderKind};
use crate::services::{render_json, render_table, run_survey};
use crate::telemetry;
use crate::types::Result;

/// Programming language salary survey over HeadHunter and SuperJob
#[derive(Parser)]
#[command(name = "langpay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Survey only this provider
    #[arg(long, value_enum)]
    provider: Option<ProviderKind>,

    /// Environment file to read instead of ./.env
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        let config = SurveyConfig::load(self.env_file.as_deref())?;
        telemetry::init(&config.log_filter)?;

        let client = http_client()?;
        let kinds = match self.provider {
            Some(kind) => vec![kind],
            None => ProviderKind::ALL.to_vec(),
        };
        let sections: Vec<Section> = kinds
            .into_iter()
            .map(|kind| Section {
                title: kind.title(&config).to_string(),
                fetcher: kind.fetcher(&config, client.clone()),
            })
            .collect();

        let stdout = io::stdout();
        let stderr = io::stderr();
        let all_ok = run_sections(
            sections,
            &config.languages,
            self.json,
            &mut stdout.lock(),
            &mut stderr.lock(),
        )?;

        Ok(if all_ok {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

/// One provider's run. A failure stays inside its section.
pub struct Section {
    pub title: String,
    /// Err when the provider could not be set up (e.g. missing key)
    pub fetcher: Result<Box<dyn PageFetcher>>,
}

/// Run sections in order, printing each report or its error.
/// Returns false if any section failed; later sections run regardless.
pub fn run_sections(
    sections: Vec<Section>,
    languages: &[String],
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    let mut all_ok = true;

    for section in sections {
        let rendered = section
            .fetcher
            .and_then(|fetcher| run_survey(fetcher.as_ref(), &section.title, languages))
            .and_then(|report| {
                if json {
                    render_json(&report)
                } else {
                    Ok(render_table(&report))
                }
            });

        match rendered {
            Ok(text) => writeln!(out, "{}", text)?,
            Err(e) => {
                warn!(section = %section.title, error = %e, "section failed");
                writeln!(err, "Получили ошибку: {}", e)?;
                all_ok = false;
            }
        }
    }

    Ok(all_ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::survey::testing::{flagged_page, ScriptedFetcher};
    use crate::types::LangpayError;

    fn languages() -> Vec<String> {
        vec!["go".to_string(), "Java".to_string()]
    }

    fn healthy() -> Box<dyn PageFetcher> {
        Box::new(
            ScriptedFetcher::new()
                .with_pages("go", vec![flagged_page(&[100_000.0], 4, false)])
                .with_pages("Java", vec![flagged_page(&[200_000.0, 300_000.0], 9, false)]),
        )
    }

    fn broken() -> Box<dyn PageFetcher> {
        Box::new(
            ScriptedFetcher::new()
                .with_pages("go", vec![flagged_page(&[1.0], 1, false)])
                .failing_at("Java", 0),
        )
    }

    fn section(title: &str, fetcher: Box<dyn PageFetcher>) -> Section {
        Section {
            title: title.to_string(),
            fetcher: Ok(fetcher),
        }
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["langpay"]).unwrap();
        assert!(!cli.json);
        assert!(cli.provider.is_none());
        assert!(cli.env_file.is_none());
    }

    #[test]
    fn test_cli_parse_provider() {
        let cli = Cli::try_parse_from(["langpay", "--provider", "sj", "--json"]).unwrap();
        assert_eq!(cli.provider, Some(ProviderKind::SuperJob));
        assert!(cli.json);
    }

    #[test]
    fn test_cli_rejects_unknown_provider() {
        assert!(Cli::try_parse_from(["langpay", "--provider", "linkedin"]).is_err());
    }

    #[test]
    fn test_all_sections_print() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let ok = run_sections(
            vec![section("HH", healthy()), section("SJ", healthy())],
            &languages(),
            false,
            &mut out,
            &mut err,
        )
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(ok);
        assert!(err.is_empty());
        assert!(out.contains("+HH-"));
        assert!(out.contains("+SJ-"));
        assert!(out.contains("| Java "));
    }

    #[test]
    fn test_first_failure_does_not_stop_second_section() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let ok = run_sections(
            vec![section("HH", broken()), section("SJ", healthy())],
            &languages(),
            false,
            &mut out,
            &mut err,
        )
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert!(!ok);
        assert!(!out.contains("+HH-"), "failed section must not print a table");
        assert!(out.contains("+SJ-"));
        assert!(err.starts_with("Получили ошибку: transport error"));
    }

    #[test]
    fn test_setup_failure_is_scoped() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let ok = run_sections(
            vec![
                section("HH", healthy()),
                Section {
                    title: "SJ".to_string(),
                    fetcher: Err(LangpayError::Config("SJOB_KEY is not set".into())),
                },
            ],
            &languages(),
            false,
            &mut out,
            &mut err,
        )
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert!(!ok);
        assert!(out.contains("+HH-"));
        assert!(err.contains("SJOB_KEY is not set"));
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        run_sections(
            vec![section("HH", healthy())],
            &languages(),
            true,
            &mut out,
            &mut err,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["title"], "HH");
        assert_eq!(value["languages"][1]["language"], "Java");
        assert_eq!(value["languages"][1]["average_salary"], 250_000);
        assert_eq!(value["languages"][1]["vacancies_found"], 9);
    }
}
