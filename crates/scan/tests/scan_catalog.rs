use extract::FileExtractor;
use plagscan_core::{Catalog, FileType, ScanConfig};
use pretty_assertions::assert_eq;
use scan::{ScanError, Scanner};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const TRAFFIC: &str = "Adaptive traffic signal control using reinforcement learning. Sensors measure queue \
                       length at each intersection and an agent adjusts the phases to reduce congestion and \
                       waiting time.";

const BOTANY: &str = "Herbarium digitisation workflow where volunteers photograph pressed plant specimens, \
                      transcribe collection labels and publish botanical records for regional flora research.";

const CATALOG: &str = r#"{
  "domains": [
    { "id": 1, "name": "Smart Cities" },
    { "id": 2, "name": "Life Sciences" }
  ],
  "projects": [
    {
      "id": 1, "title": "Adaptive Traffic Control", "abstract": "Adaptive traffic signal control using reinforcement learning.",
      "file_path": "files/traffic.txt", "file_type": "txt", "domain_id": 1
    },
    {
      "id": 2, "title": "Herbarium Digitisation", "abstract": "Volunteers photograph pressed plant specimens.",
      "file_path": "files/botany.txt", "file_type": "txt", "domain_id": 1
    },
    {
      "id": 3, "title": "Lost Submission", "abstract": "Never uploaded.",
      "file_path": "files/missing.pdf", "file_type": "pdf", "domain_id": 1
    },
    {
      "id": 4, "title": "Adaptive Traffic Control", "abstract": "Same title, other domain.",
      "file_path": "files/traffic.txt", "file_type": "txt", "domain_id": 2
    }
  ]
}"#;

fn setup() -> (TempDir, Catalog) {
  let temp = TempDir::new().unwrap();
  let files = temp.path().join("files");
  std::fs::create_dir_all(&files).unwrap();
  std::fs::write(files.join("traffic.txt"), format!("Adaptive Traffic Control\n{}\n", TRAFFIC)).unwrap();
  std::fs::write(files.join("botany.txt"), format!("Herbarium Digitisation\n{}\n", BOTANY)).unwrap();

  let catalog_path = temp.path().join("catalog.json");
  std::fs::write(&catalog_path, CATALOG).unwrap();
  let catalog = Catalog::load(&catalog_path).unwrap();
  (temp, catalog)
}

fn scanner(config: ScanConfig) -> Scanner {
  Scanner::new(Arc::new(FileExtractor::new()), config)
}

fn write_upload(dir: &Path) -> std::path::PathBuf {
  let path = dir.join("upload.txt");
  std::fs::write(&path, format!("Adaptive Traffic Control\n{}\n", TRAFFIC)).unwrap();
  path
}

#[tokio::test]
async fn test_scan_catalog_domain() {
  let (temp, catalog) = setup();
  let upload = write_upload(temp.path());

  let report = scanner(ScanConfig::default())
    .scan_catalog(&upload, FileType::Text, &catalog, 1)
    .await
    .unwrap();

  assert_eq!(report.domain_id, 1);
  assert_eq!(report.upload_title, "Adaptive Traffic Control");
  assert_eq!(report.candidates, 3);
  assert_eq!(report.compared, 2);
  assert_eq!(report.skipped, 1);

  let ids: Vec<u64> = report.matches.iter().map(|m| m.project.id).collect();
  assert_eq!(ids, vec![1]);

  let best = report.best_match().unwrap();
  assert_eq!(best.similarity.title_similarity, 1.0);
  assert_eq!(best.similarity.content_similarity, 1.0);
  assert!(best.similarity.overall_similarity > 0.75);
}

#[tokio::test]
async fn test_scan_report_serializes() {
  let (temp, catalog) = setup();
  let upload = write_upload(temp.path());

  let report = scanner(ScanConfig::default())
    .scan_catalog(&upload, FileType::Text, &catalog, 1)
    .await
    .unwrap();

  let json = serde_json::to_value(&report).unwrap();
  assert_eq!(json["matches"][0]["project"]["title"], "Adaptive Traffic Control");
  assert!(json["matches"][0]["project"].get("abstract").is_some());
  assert!(json["matches"][0]["similarity"]["overall_similarity"].as_f64().unwrap() > 0.75);
  assert!(json["scanned_at"].is_string());
}

#[tokio::test]
async fn test_high_threshold_filters_everything() {
  let (temp, catalog) = setup();
  let upload = write_upload(temp.path());

  let config = ScanConfig {
    threshold: 1.0,
    ..ScanConfig::default()
  };
  let report = scanner(config)
    .scan_catalog(&upload, FileType::Text, &catalog, 1)
    .await
    .unwrap();

  assert_eq!(report.compared, 2);
  assert!(report.matches.is_empty());
  assert!(report.best_match().is_none());
}

#[tokio::test]
async fn test_missing_upload_fails_scan() {
  let (temp, catalog) = setup();

  let result = scanner(ScanConfig::default())
    .scan_catalog(&temp.path().join("nope.txt"), FileType::Text, &catalog, 1)
    .await;

  assert!(matches!(result, Err(ScanError::Extract(_))));
}

#[tokio::test]
async fn test_compare_files() {
  let (temp, _catalog) = setup();
  let upload = write_upload(temp.path());
  let stored = temp.path().join("files").join("traffic.txt");

  let scores = scanner(ScanConfig::default())
    .compare((&upload, FileType::Text), (&stored, FileType::Text), None)
    .await
    .unwrap();

  assert_eq!(scores.overall_similarity, 1.0);
}
