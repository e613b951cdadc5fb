//! Single-file commands (extract, compare)

use super::{percent, resolve_file_type, scanner};
use anyhow::{Context, Result};
use plagscan_core::Config;
use similarity::leading_chars;
use std::path::Path;

/// Print the title and text extracted from a file
pub async fn cmd_extract(
  config: &Config,
  path: &Path,
  file_type: Option<&str>,
  max_chars: usize,
  json_output: bool,
) -> Result<()> {
  let file_type = resolve_file_type(path, file_type)?;
  let document = scanner(config)
    .extract(path, file_type)
    .await
    .with_context(|| format!("Failed to extract {:?}", path))?;

  if json_output {
    let output = serde_json::json!({
      "file": path,
      "file_type": file_type,
      "title": document.title,
      "chars": document.text.chars().count(),
      "text": document.text,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    return Ok(());
  }

  let total = document.text.chars().count();
  println!("File:   {:?}", path);
  println!("Type:   {}", file_type);
  println!("Title:  {}", document.title);
  println!("Chars:  {}", total);
  println!();

  if max_chars == 0 || total <= max_chars {
    println!("{}", document.text);
  } else {
    println!("{}", leading_chars(&document.text, max_chars));
    println!("... ({} more characters, use --max-chars 0 to show all)", total - max_chars);
  }

  Ok(())
}

/// Score an uploaded file against a stored project file
pub async fn cmd_compare(
  config: &Config,
  upload: &Path,
  project: &Path,
  project_abstract: Option<&str>,
  json_output: bool,
) -> Result<()> {
  let upload_type = resolve_file_type(upload, None)?;
  let project_type = resolve_file_type(project, None)?;

  let scores = scanner(config)
    .compare((upload, upload_type), (project, project_type), project_abstract)
    .await
    .context("Comparison failed")?;

  if json_output {
    println!("{}", serde_json::to_string_pretty(&scores)?);
    return Ok(());
  }

  println!("Upload:   {:?}", upload);
  println!("Project:  {:?}", project);
  println!();
  println!("Title:    {}", percent(scores.title_similarity));
  println!("Abstract: {}", percent(scores.abstract_similarity));
  println!("Content:  {}", percent(scores.content_similarity));
  println!("Overall:  {}", percent(scores.overall_similarity));

  Ok(())
}
