//! Domain scan command

use super::{load_catalog, percent, resolve_file_type, scanner};
use ::scan::ScanReport;
use anyhow::{Context, Result};
use plagscan_core::Config;
use std::path::Path;

/// Scan an uploaded file against every project in a domain
#[allow(clippy::too_many_arguments)]
pub async fn cmd_scan(
  mut config: Config,
  cwd: &Path,
  path: &Path,
  domain: &str,
  catalog_path: Option<&Path>,
  threshold: Option<f64>,
  limit: Option<usize>,
  file_type: Option<&str>,
  json_output: bool,
) -> Result<()> {
  if let Some(threshold) = threshold {
    config.scan.threshold = threshold;
  }
  if limit.is_some() {
    config.scan.max_results = limit;
  }
  config.validate()?;

  let catalog = load_catalog(&config, cwd, catalog_path)?;
  let domain = catalog.find_domain(domain)?.clone();
  let file_type = resolve_file_type(path, file_type)?;

  let report = scanner(&config)
    .scan_catalog(path, file_type, &catalog, domain.id)
    .await
    .with_context(|| format!("Scan of {:?} failed", path))?;

  if json_output {
    println!("{}", serde_json::to_string_pretty(&report)?);
    return Ok(());
  }

  print_report(&report, &domain.name);
  Ok(())
}

fn print_report(report: &ScanReport, domain_name: &str) {
  println!(
    "Scanned \"{}\" against {} (domain {})",
    report.upload_title, domain_name, report.domain_id
  );
  println!(
    "{} candidates, {} compared, {} skipped in {}",
    report.candidates,
    report.compared,
    report.skipped,
    format_duration(report.duration_ms)
  );
  println!();

  if report.matches.is_empty() {
    println!("No projects above {} similarity.", percent(report.threshold));
    return;
  }

  println!(
    "Found {} projects above {} similarity:\n",
    report.matches.len(),
    percent(report.threshold)
  );
  for (i, m) in report.matches.iter().enumerate() {
    let scores = &m.similarity;
    println!(
      "{}. [{}] {} ({} overall)",
      i + 1,
      m.project.id,
      m.project.title,
      percent(scores.overall_similarity)
    );
    println!(
      "   Title {} | Abstract {} | Content {}",
      percent(scores.title_similarity),
      percent(scores.abstract_similarity),
      percent(scores.content_similarity)
    );
    if !m.project.author_name.is_empty() {
      println!("   Author: {} <{}>", m.project.author_name, m.project.author_email);
    }
    println!();
  }
}

/// Format a duration in human-readable form
fn format_duration(ms: u64) -> String {
  if ms < 1000 {
    format!("{} ms", ms)
  } else if ms < 60_000 {
    format!("{:.1} sec", ms as f64 / 1000.0)
  } else {
    format!("{} min {} sec", ms / 60_000, (ms % 60_000) / 1000)
  }
}
