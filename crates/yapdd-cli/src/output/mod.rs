//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;
use yapdd::{DeleteResponse, DnsRecord};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed tables with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Flat CSV row; every record yields the same columns.
#[derive(Debug, Serialize)]
struct RecordRow<'a> {
    record_id: u32,
    #[serde(rename = "type")]
    record_type: &'static str,
    name: String,
    ttl: u32,
    priority: Option<u16>,
    content: &'a str,
}

impl<'a> From<&'a DnsRecord> for RecordRow<'a> {
    fn from(record: &'a DnsRecord) -> Self {
        Self {
            record_id: record.id,
            record_type: record.record_type.as_str(),
            name: record.name(),
            ttl: record.ttl,
            priority: record.priority.get(),
            content: &record.content,
        }
    }
}

/// Write records as CSV with a header row.
pub fn write_csv<'a, W: Write>(
    out: W,
    records: impl IntoIterator<Item = &'a DnsRecord>,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer.serialize(RecordRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}

/// Print a list of records.
pub fn print_records(format: OutputFormat, domain: &str, records: &[DnsRecord]) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(records)?);
        }
        OutputFormat::Csv => {
            write_csv(std::io::stdout().lock(), records)?;
        }
        OutputFormat::Pretty => {
            println!("{} {}", "Domain:".bold(), domain.cyan());
            println!();

            if records.is_empty() {
                println!("  {}", "(no records)".dimmed());
                return Ok(());
            }

            println!(
                "  {:>10} {:6} {:40} {:>6} {:>5} {}",
                "ID".bold(),
                "TYPE".bold(),
                "NAME".bold(),
                "TTL".bold(),
                "PRIO".bold(),
                "CONTENT".bold()
            );
            for record in records {
                println!(
                    "  {:>10} {:6} {:40} {:>6} {:>5} {}",
                    record.id,
                    record.record_type.as_str().yellow(),
                    record.name(),
                    record.ttl,
                    record.priority.to_string(),
                    record.content
                );
            }
        }
    }

    Ok(())
}

/// Print a single record returned by add or edit.
pub fn print_record(format: OutputFormat, action: &str, record: Option<&DnsRecord>) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Csv => {
            write_csv(std::io::stdout().lock(), record)?;
        }
        OutputFormat::Pretty => {
            let Some(record) = record else {
                println!("{} {}", "Success:".green().bold(), action);
                return Ok(());
            };
            println!(
                "{} {} {} {} {}",
                "Success:".green().bold(),
                action,
                record.record_type.as_str().yellow(),
                record.name().cyan(),
                record.content
            );
            println!("  {} {}", "record_id:".bold(), record.id);
            println!("  {} {}", "ttl:".bold(), record.ttl);
            if record.priority.is_set() {
                println!("  {} {}", "priority:".bold(), record.priority);
            }
            if !record.operation.is_empty() {
                println!("  {} {}", "operation:".bold(), record.operation);
            }
        }
    }

    Ok(())
}

/// Print the outcome of a delete.
pub fn print_delete(format: OutputFormat, resp: &DeleteResponse) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(resp)?);
        }
        OutputFormat::Csv => {
            println!("domain,record_id");
            println!("{},{}", resp.domain, resp.record_id);
        }
        OutputFormat::Pretty => {
            println!(
                "{} deleted record {} from {}",
                "Success:".green().bold(),
                resp.record_id,
                resp.domain.cyan()
            );
        }
    }

    Ok(())
}
