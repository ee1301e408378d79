//! Rendering of search and sweep results for the terminal.

use anyhow::{bail, Result};
use clap::ValueEnum;
use extrema_benchmark::{BenchmarkResult, Comparison, CsvExporter, MarkdownReport, PointRow};
use extrema_core::{Sample, SearchResult};
use extrema_data::CategoryExtrema;
use serde::Serialize;

/// Report format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// A single comparison has no tabular CSV shape.
    pub(crate) fn ensure_search(self) -> Result<()> {
        if self == OutputFormat::Csv {
            bail!("search output supports markdown or json, not csv");
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct SearchReport<'a, T> {
    n: usize,
    #[serde(flatten)]
    extrema: SearchResult<T>,
    spread: Option<f64>,
    iterative_seconds: f64,
    recursive_seconds: Option<f64>,
    strategies_agree: bool,
    categories: &'a [CategoryExtrema],
}

#[derive(Serialize)]
struct SweepReport<'a> {
    name: &'a str,
    sample_len: usize,
    repeat_count: usize,
    recursion_ceiling: Option<usize>,
    points: Vec<PointRow>,
}

/// Renders a single-size comparison with its optional category breakdown.
pub fn render_search<T: Sample + Serialize>(
    comparison: &Comparison<T>,
    categories: &[CategoryExtrema],
    format: OutputFormat,
) -> Result<String> {
    format.ensure_search()?;

    if format == OutputFormat::Json {
        let report = SearchReport {
            n: comparison.n,
            extrema: comparison.extrema(),
            spread: comparison.extrema().spread(),
            iterative_seconds: comparison.iterative.elapsed.as_secs_f64(),
            recursive_seconds: comparison.recursive.map(|r| r.elapsed.as_secs_f64()),
            strategies_agree: comparison.strategies_agree(),
            categories,
        };
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        return Ok(json);
    }

    let mut md = MarkdownReport::comparison(comparison);
    if !categories.is_empty() {
        md.push_str("\n## By Category\n\n");
        md.push_str(&category_table(categories).render());
    }
    Ok(md)
}

/// Renders a sweep in the requested format.
pub fn render_sweep(result: &BenchmarkResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(MarkdownReport::to_string(result)),
        OutputFormat::Csv => Ok(CsvExporter::to_string(result)?),
        OutputFormat::Json => {
            let report = SweepReport {
                name: &result.name,
                sample_len: result.sample_len,
                repeat_count: result.repeat_count,
                recursion_ceiling: result.recursion_ceiling,
                points: result.rows(),
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn category_table(categories: &[CategoryExtrema]) -> MarkdownTable {
    let mut table = MarkdownTable::new(["Category", "Rows", "Minimum", "Maximum"]);
    for group in categories {
        table.add_row(vec![
            group.category.clone(),
            group.count.to_string(),
            format!("{:.2}", group.minimum),
            format!("{:.2}", group.maximum),
        ]);
    }
    table
}

/// Column-aligned Markdown table.
pub struct MarkdownTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl MarkdownTable {
    pub fn new<const N: usize>(headers: [&str; N]) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        // Separator cells need at least three dashes.
        let column_widths = headers.iter().map(|h| h.chars().count().max(3)).collect();
        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (cell, width) in row.iter().zip(self.column_widths.iter_mut()) {
            *width = (*width).max(cell.chars().count());
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_row(&mut out, &self.headers);

        out.push('|');
        for width in &self.column_widths {
            out.push_str(&format!("{}|", "-".repeat(width + 2)));
        }
        out.push('\n');

        for row in &self.rows {
            self.write_row(&mut out, row);
        }
        out
    }

    fn write_row(&self, out: &mut String, cells: &[String]) {
        out.push('|');
        for (cell, width) in cells.iter().zip(&self.column_widths) {
            out.push_str(&format!(" {:<width$} |", cell, width = width));
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extrema_benchmark::compare_prefix;

    #[test]
    fn test_markdown_table_aligns_columns() {
        let mut table = MarkdownTable::new(["Category", "Rows"]);
        table.add_row(vec!["Coffee".to_string(), "12".to_string()]);
        table.add_row(vec!["Drinking Chocolate".to_string(), "3".to_string()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("|--------------------|"));
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
        assert!(lines[2].contains("| Coffee             | 12   |"));
    }

    #[test]
    fn test_search_json_flattens_extrema() {
        let comparison = compare_prefix(&[4, 9, 1, 7], 4, None).unwrap();
        let json = render_search(&comparison, &[], OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["n"], 4);
        assert_eq!(value["minimum"], 1);
        assert_eq!(value["maximum"], 9);
        assert_eq!(value["spread"], 8.0);
        assert_eq!(value["strategies_agree"], true);
        assert!(value["recursive_seconds"].is_number());
    }

    #[test]
    fn test_search_markdown_appends_categories() {
        let comparison = compare_prefix(&[2.5, 6.0], 2, Some(1)).unwrap();
        let categories = vec![CategoryExtrema {
            category: "Tea".to_string(),
            minimum: 2.5,
            maximum: 6.0,
            count: 2,
        }];

        let md = render_search(&comparison, &categories, OutputFormat::Markdown).unwrap();
        assert!(md.contains("| Recursive | — |"));
        assert!(md.contains("## By Category"));
        assert!(md.contains("| Tea      | 2    | 2.50    | 6.00    |"));
    }

    #[test]
    fn test_search_rejects_csv() {
        let comparison = compare_prefix(&[1, 2], 2, None).unwrap();
        assert!(render_search(&comparison, &[], OutputFormat::Csv).is_err());
    }

    #[test]
    fn test_sweep_json_lists_points() {
        let result = BenchmarkResult::new("Empty", 0, 1, None);
        let json = render_sweep(&result, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Empty");
        assert!(value["recursion_ceiling"].is_null());
        assert_eq!(value["points"].as_array().map(Vec::len), Some(0));
    }
}
