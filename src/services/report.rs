//! Report rendering: ASCII box tables and JSON

use crate::types::{Result, SurveyReport};

/// Column headers, in row order
const HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// Render a report as a box table with the title set into the top border.
///
/// ```text
/// +HeadHunter Moscow------+------------------+
/// | Язык программирования | Вакансий найдено | ...
/// +-----------------------+------------------+
/// | go                    | 1234             | ...
/// +-----------------------+------------------+
/// ```
pub fn render_table(report: &SurveyReport) -> String {
    let mut rows: Vec<[String; 4]> = Vec::with_capacity(report.languages.len() + 1);
    rows.push(HEADER.map(String::from));
    for row in &report.languages {
        rows.push([
            row.language.clone(),
            row.stats.vacancies_found.to_string(),
            row.stats.vacancies_processed.to_string(),
            row.stats.average_salary.to_string(),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = border_line(&widths);
    let mut out = String::new();
    out.push_str(&title_border(&border, &report.title));
    out.push('\n');
    for (i, row) in rows.iter().enumerate() {
        out.push_str(&row_line(row, &widths));
        out.push('\n');
        if i == 0 {
            out.push_str(&border);
            out.push('\n');
        }
    }
    out.push_str(&border);
    out
}

/// Render a report as pretty JSON
pub fn render_json(report: &SurveyReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// Overlay the title on the border after the left corner, if it fits
fn title_border(border: &str, title: &str) -> String {
    let border_len = border.chars().count();
    let title_len = title.chars().count();
    if title.is_empty() || title_len + 2 > border_len {
        return border.to_string();
    }

    let mut line = String::with_capacity(border.len() + title.len());
    line.push('+');
    line.push_str(title);
    line.extend(border.chars().skip(1 + title_len));
    line
}

fn row_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad + 1));
        line.push('|');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LanguageStats;

    fn sample_report() -> SurveyReport {
        let mut report = SurveyReport::new("SuperJob Moscow");
        report.push(
            "Python",
            LanguageStats {
                vacancies_found: 120,
                vacancies_processed: 45,
                average_salary: 151234,
            },
        );
        report.push(
            "go",
            LanguageStats {
                vacancies_found: 8,
                vacancies_processed: 0,
                average_salary: 0,
            },
        );
        report
    }

    #[test]
    fn test_render_table_layout() {
        let table = render_table(&sample_report());
        let expected = "\
+SuperJob Moscow--------+------------------+---------------------+------------------+
| Язык программирования | Вакансий найдено | Вакансий обработано | Средняя зарплата |
+-----------------------+------------------+---------------------+------------------+
| Python                | 120              | 45                  | 151234           |
| go                    | 8                | 0                   | 0                |
+-----------------------+------------------+---------------------+------------------+";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_lines_have_equal_char_width() {
        let table = render_table(&sample_report());
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }

    #[test]
    fn test_rows_follow_insertion_order() {
        let table = render_table(&sample_report());
        let python = table.find("| Python").unwrap();
        let go = table.find("| go").unwrap();
        assert!(python < go);
    }

    #[test]
    fn test_empty_report_renders_header_only() {
        let table = render_table(&SurveyReport::new("HeadHunter Moscow"));
        assert_eq!(table.lines().count(), 4);
        assert!(table.starts_with("+HeadHunter Moscow-"));
    }

    #[test]
    fn test_long_title_falls_back_to_plain_border() {
        let border = "+---+";
        assert_eq!(title_border(border, "A very long title"), border);
        assert_eq!(title_border(border, "ab"), "+ab-+");
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "SuperJob Moscow");
        assert_eq!(value["languages"][0]["language"], "Python");
        assert_eq!(value["languages"][0]["average_salary"], 151234);
        assert_eq!(value["languages"][1]["vacancies_processed"], 0);
    }
}
