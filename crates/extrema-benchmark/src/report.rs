//! Report generation for benchmark results.

use std::fmt::{self, Display};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use extrema_core::Sample;

use crate::result::{BenchmarkResult, Comparison};

/// Marker printed where the recursive search was not measured.
const NOT_MEASURED: &str = "—";

/// CSV exporter for benchmark results.
///
/// Writes one row per measured size with columns `n`, `iterative_seconds`
/// and `recursive_seconds`. The recursive cell is empty above the recursion
/// ceiling.
///
/// # Example
///
/// ```
/// use extrema_benchmark::{BenchmarkPoint, BenchmarkResult, CsvExporter};
/// use std::time::Duration;
///
/// let mut result = BenchmarkResult::new("Test", 200, 1, Some(100));
/// result.add_point(BenchmarkPoint {
///     n: 200,
///     iterative: Duration::from_millis(250),
///     recursive: None,
/// });
///
/// let csv = CsvExporter::to_string(&result).unwrap();
/// assert!(csv.starts_with("n,iterative_seconds,recursive_seconds\n"));
/// assert!(csv.contains("200,0.25,\n"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports benchmark result to CSV string.
    pub fn to_string(result: &BenchmarkResult) -> io::Result<String> {
        let mut buffer = Vec::new();
        Self::write(result, &mut buffer)?;
        String::from_utf8(buffer).map_err(io::Error::other)
    }

    /// Exports benchmark result to a CSV file.
    pub fn to_file(result: &BenchmarkResult, path: impl AsRef<Path>) -> io::Result<()> {
        let file = fs::File::create(path)?;
        Self::write(result, file)
    }

    /// Writes benchmark result as CSV to a writer.
    pub fn write<W: Write>(result: &BenchmarkResult, writer: W) -> io::Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        // An empty sweep still gets a header row.
        if result.is_empty() {
            csv.write_record(["n", "iterative_seconds", "recursive_seconds"])?;
        }
        for row in result.rows() {
            csv.serialize(row)?;
        }
        csv.flush()
    }
}

/// Markdown report generator.
///
/// Generates human-readable Markdown from sweep results and single-size
/// comparisons.
///
/// # Example
///
/// ```
/// use extrema_benchmark::{BenchmarkResult, MarkdownReport};
///
/// let result = BenchmarkResult::new("Test", 0, 3, Some(2000));
/// let md = MarkdownReport::to_string(&result);
/// assert!(md.contains("# Benchmark: Test"));
/// assert!(md.contains("*No sizes measured.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string for a sweep.
    ///
    /// # Example
    ///
    /// ```
    /// use extrema_benchmark::{BenchmarkPoint, BenchmarkResult, MarkdownReport};
    /// use std::time::Duration;
    ///
    /// let mut result = BenchmarkResult::new("Test", 200, 3, Some(100));
    /// result.add_point(BenchmarkPoint {
    ///     n: 100,
    ///     iterative: Duration::from_micros(4),
    ///     recursive: Some(Duration::from_micros(10)),
    /// });
    /// result.add_point(BenchmarkPoint {
    ///     n: 200,
    ///     iterative: Duration::from_micros(8),
    ///     recursive: None,
    /// });
    ///
    /// let md = MarkdownReport::to_string(&result);
    /// assert!(md.contains("## Summary"));
    /// assert!(md.contains("| n | Iterative (µs) | Recursive (µs) | Ratio |"));
    /// assert!(md.contains("| 100 | 4.00 | 10.00 | 2.50x |"));
    /// assert!(md.contains("| 200 | 8.00 | — | — |"));
    /// ```
    pub fn to_string(result: &BenchmarkResult) -> String {
        SweepMarkdown(result).to_string()
    }

    /// Writes Markdown report to a file.
    pub fn to_file(result: &BenchmarkResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes Markdown report to a writer.
    pub fn write<W: Write>(result: &BenchmarkResult, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", SweepMarkdown(result))
    }

    /// Generates a Markdown report for a single-size comparison.
    ///
    /// # Example
    ///
    /// ```
    /// use extrema_benchmark::{compare_prefix, MarkdownReport};
    ///
    /// let comparison = compare_prefix(&[7, 3, 9], 3, Some(2)).unwrap();
    /// let md = MarkdownReport::comparison(&comparison);
    /// assert!(md.contains("| Minimum | 3 |"));
    /// assert!(md.contains("| Maximum | 9 |"));
    /// assert!(md.contains("| Spread | 6 |"));
    /// assert!(md.contains("| Recursive | — |"));
    /// ```
    pub fn comparison<T: Sample>(comparison: &Comparison<T>) -> String {
        ComparisonMarkdown(comparison).to_string()
    }
}

fn micros(d: Duration) -> f64 {
    d.as_secs_f64() * 1_000_000.0
}

struct SweepMarkdown<'a>(&'a BenchmarkResult);

impl Display for SweepMarkdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        writeln!(f, "# Benchmark: {}", result.name)?;
        writeln!(f)?;
        writeln!(f, "- **Samples available**: {}", result.sample_len)?;
        writeln!(f, "- **Repetitions per size**: {}", result.repeat_count)?;
        match result.recursion_ceiling {
            Some(ceiling) => writeln!(f, "- **Recursion ceiling**: {}", ceiling)?,
            None => writeln!(f, "- **Recursion ceiling**: none")?,
        }
        writeln!(f)?;

        writeln!(f, "## Summary")?;
        writeln!(f)?;
        let Some(last) = result.points.last() else {
            writeln!(f, "*No sizes measured.*")?;
            return Ok(());
        };

        writeln!(f, "| Metric | Value |")?;
        writeln!(f, "|--------|-------|")?;
        writeln!(f, "| Sizes measured | {} |", result.len())?;
        writeln!(f, "| Largest n | {} |", last.n)?;
        writeln!(
            f,
            "| Iterative at largest n | {:.2} µs |",
            micros(last.iterative)
        )?;
        match result.largest_recursive_n() {
            Some(n) => writeln!(f, "| Largest recursive n | {} |", n)?,
            None => writeln!(f, "| Largest recursive n | {} |", NOT_MEASURED)?,
        }
        match result.avg_recursive_ratio() {
            Some(ratio) => writeln!(f, "| Avg Recursive/Iterative | {:.2}x |", ratio)?,
            None => writeln!(f, "| Avg Recursive/Iterative | {} |", NOT_MEASURED)?,
        }
        writeln!(f)?;

        writeln!(f, "## Results")?;
        writeln!(f)?;
        writeln!(f, "| n | Iterative (µs) | Recursive (µs) | Ratio |")?;
        writeln!(f, "|---|----------------|----------------|-------|")?;
        for point in &result.points {
            write!(f, "| {} | {:.2} | ", point.n, micros(point.iterative))?;
            match point.recursive {
                Some(recursive) => write!(f, "{:.2} | ", micros(recursive))?,
                None => write!(f, "{} | ", NOT_MEASURED)?,
            }
            match point.recursive_ratio() {
                Some(ratio) => writeln!(f, "{:.2}x |", ratio)?,
                None => writeln!(f, "{} |", NOT_MEASURED)?,
            }
        }

        Ok(())
    }
}

struct ComparisonMarkdown<'a, T>(&'a Comparison<T>);

impl<T: Sample> Display for ComparisonMarkdown<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comparison = self.0;
        let extrema = comparison.extrema();

        writeln!(f, "# Search: n = {}", comparison.n)?;
        writeln!(f)?;
        writeln!(f, "| Metric | Value |")?;
        writeln!(f, "|--------|-------|")?;
        writeln!(f, "| Minimum | {} |", extrema.minimum)?;
        writeln!(f, "| Maximum | {} |", extrema.maximum)?;
        match extrema.spread() {
            Some(spread) => writeln!(f, "| Spread | {} |", spread)?,
            None => writeln!(f, "| Spread | {} |", NOT_MEASURED)?,
        }
        writeln!(f)?;

        writeln!(f, "## Execution Time")?;
        writeln!(f)?;
        writeln!(f, "| Method | Time (s) |")?;
        writeln!(f, "|--------|----------|")?;
        writeln!(
            f,
            "| Iterative | {:.9} |",
            comparison.iterative.elapsed.as_secs_f64()
        )?;
        match comparison.recursive {
            Some(recursive) => writeln!(
                f,
                "| Recursive | {:.9} |",
                recursive.elapsed.as_secs_f64()
            )?,
            None => writeln!(f, "| Recursive | {} |", NOT_MEASURED)?,
        }

        Ok(())
    }
}
