//! Exporting datasets and integration results
//!
//! Every format carries the input samples followed by either a single result
//! with its step trace or a method comparison table.

use crate::error::{Error, Result};
use csv::WriterBuilder;
use numint_core::Dataset;
use numint_quadrature::{IntegrationResult, MethodComparison};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Text,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }

    /// Conventional download name, e.g. `integration_results.csv`
    pub fn default_filename(self) -> &'static str {
        match self {
            ExportFormat::Csv => "integration_results.csv",
            ExportFormat::Json => "integration_results.json",
            ExportFormat::Text => "integration_report.txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "txt" | "text" => Ok(ExportFormat::Text),
            other => Err(Error::InvalidInput(format!("Unknown export format: {other}"))),
        }
    }
}

/// What is being exported alongside the dataset
#[derive(Debug, Clone, Copy)]
pub enum Report<'a> {
    Single(&'a IntegrationResult),
    Comparison(&'a MethodComparison),
}

impl<'a> From<&'a IntegrationResult> for Report<'a> {
    fn from(result: &'a IntegrationResult) -> Self {
        Report::Single(result)
    }
}

impl<'a> From<&'a MethodComparison> for Report<'a> {
    fn from(comparison: &'a MethodComparison) -> Self {
        Report::Comparison(comparison)
    }
}

/// Write `report` in `format`
pub fn export<'a, W, R>(writer: W, format: ExportFormat, dataset: &Dataset, report: R) -> Result<()>
where
    W: Write,
    R: Into<Report<'a>>,
{
    let report = report.into();
    match format {
        ExportFormat::Csv => write_csv(writer, dataset, report),
        ExportFormat::Json => write_json(writer, dataset, report),
        ExportFormat::Text => {
            let mut writer = writer;
            writer.write_all(text_report(dataset, report).as_bytes())?;
            Ok(())
        }
    }
}

/// CSV report; rows have varying widths
pub fn write_csv<W: Write>(writer: W, dataset: &Dataset, report: Report<'_>) -> Result<()> {
    let mut csv = WriterBuilder::new().flexible(true).from_writer(writer);

    csv.write_record(["Numerical Integration Results"])?;
    csv.write_record([""])?;
    csv.write_record(["Data Points"])?;
    csv.write_record(["X", "Y"])?;
    for sample in dataset.samples() {
        csv.write_record([sample.x.to_string(), sample.y.to_string()])?;
    }
    csv.write_record([""])?;

    match report {
        Report::Single(result) => {
            csv.write_record(["Results"])?;
            csv.write_record(["Method".to_string(), result.method_name()])?;
            csv.write_record(["Result".to_string(), result.value().to_string()])?;
            csv.write_record(["Error Estimate".to_string(), result.error_estimate().to_string()])?;
            csv.write_record([""])?;
            csv.write_record(["Calculation Steps"])?;
            for (i, step) in result.steps().iter().enumerate() {
                csv.write_record([format!("Step {}", i + 1), step.to_string()])?;
            }
        }
        Report::Comparison(comparison) => {
            csv.write_record(["Comparison Results"])?;
            csv.write_record(["Method", "Result", "Error Estimate"])?;
            for outcome in comparison.outcomes() {
                match &outcome.outcome {
                    Ok(result) => csv.write_record([
                        result.method_name(),
                        result.value().to_string(),
                        result.error_estimate().to_string(),
                    ])?,
                    Err(e) => csv.write_record([
                        outcome.method.id().to_string(),
                        "Error".to_string(),
                        e.to_string(),
                    ])?,
                }
            }
        }
    }

    csv.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct DataPoints<'a> {
    x_values: &'a [f64],
    y_values: &'a [f64],
}

#[derive(Serialize)]
struct SingleExport<'a> {
    method_name: String,
    #[serde(flatten)]
    result: &'a IntegrationResult,
}

/// One comparison row; `id` is the method identifier
#[derive(Serialize)]
struct ComparisonEntry<'a> {
    id: &'static str,
    #[serde(flatten)]
    outcome: Outcome<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Outcome<'a> {
    Ok(SingleExport<'a>),
    Failed { error: String },
}

#[derive(Serialize)]
#[serde(untagged)]
enum Results<'a> {
    Single(SingleExport<'a>),
    Comparison(Vec<ComparisonEntry<'a>>),
}

#[derive(Serialize)]
struct JsonExport<'a> {
    data_points: DataPoints<'a>,
    results: Results<'a>,
}

fn single(result: &IntegrationResult) -> SingleExport<'_> {
    SingleExport {
        method_name: result.method_name(),
        result,
    }
}

/// Pretty-printed JSON document
pub fn to_json(dataset: &Dataset, report: Report<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json_export(dataset, report))?)
}

pub fn write_json<W: Write>(writer: W, dataset: &Dataset, report: Report<'_>) -> Result<()> {
    serde_json::to_writer_pretty(writer, &json_export(dataset, report))?;
    Ok(())
}

fn json_export<'a>(dataset: &'a Dataset, report: Report<'a>) -> JsonExport<'a> {
    let results = match report {
        Report::Single(result) => Results::Single(single(result)),
        Report::Comparison(comparison) => Results::Comparison(
            comparison
                .outcomes()
                .iter()
                .map(|outcome| ComparisonEntry {
                    id: outcome.method.id(),
                    outcome: match &outcome.outcome {
                        Ok(result) => Outcome::Ok(single(result)),
                        Err(e) => Outcome::Failed { error: e.to_string() },
                    },
                })
                .collect(),
        ),
    };

    JsonExport {
        data_points: DataPoints {
            x_values: dataset.xs(),
            y_values: dataset.ys(),
        },
        results,
    }
}

/// Plain-text report with data summary, results and step explanations
pub fn text_report(dataset: &Dataset, report: Report<'_>) -> String {
    let mut lines = vec![
        "NUMERICAL INTEGRATION CALCULATION REPORT".to_string(),
        "=".repeat(50),
        String::new(),
    ];

    let (x_min, x_max) = dataset.domain();
    let (y_min, y_max) = dataset.range();
    lines.push("DATA SUMMARY:".to_string());
    lines.push(format!("Number of data points: {}", dataset.len()));
    lines.push(format!("X range: [{x_min:.6}, {x_max:.6}]"));
    lines.push(format!("Y range: [{y_min:.6}, {y_max:.6}]"));
    lines.push(String::new());

    lines.push("DATA POINTS:".to_string());
    lines.push("X\t\tY".to_string());
    lines.push("-".repeat(20));
    for sample in dataset.samples() {
        lines.push(format!("{:.6}\t{:.6}", sample.x, sample.y));
    }
    lines.push(String::new());

    match report {
        Report::Single(result) => {
            lines.push("CALCULATION RESULTS:".to_string());
            lines.push(format!("Method: {}", result.method_name()));
            lines.push(format!("Result: {:.10}", result.value()));
            lines.push(format!("Error Estimate: ±{:.10}", result.error_estimate()));
            if result.has_heuristic_error() {
                lines.push("(error estimate is heuristic for at least one segment)".to_string());
            }
            lines.push(String::new());

            lines.push("CALCULATION STEPS:".to_string());
            for (i, step) in result.steps().iter().enumerate() {
                lines.push(format!("  Step {}:", i + 1));
                lines.extend(step.explain().into_iter().map(|line| format!("    {line}")));
            }
        }
        Report::Comparison(comparison) => {
            lines.push("COMPARISON RESULTS:".to_string());
            lines.push("-".repeat(30));
            for outcome in comparison.outcomes() {
                match &outcome.outcome {
                    Ok(result) => {
                        lines.push(format!("{}:", result.method_name()));
                        lines.push(format!("  Result: {:.10}", result.value()));
                        lines.push(format!("  Error Estimate: ±{:.10}", result.error_estimate()));
                    }
                    Err(e) => lines.push(format!("{}: Error - {}", outcome.method.id(), e)),
                }
                lines.push(String::new());
            }
        }
    }

    lines.join("\n")
}
