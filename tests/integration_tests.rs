//! Integration tests for chartup
//!
//! These tests verify:
//! - The read → compare → rewrite flow over real files
//! - Idempotence and dry-run guarantees
//! - Round-trip preservation of untouched manifest content

use chartup::domain::VersionChange;
use chartup::manifest::{read_local, requirements_path, ManifestWriter};
use chartup::update;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const REQUIREMENTS: &str = "\
dependencies:
  - name: binderhub
    version: 0.2.0-3b53fce
    repository: https://jupyterhub.github.io/helm-chart
  - name: nginx-ingress
    version: 1.29.2
    repository: https://kubernetes-charts.storage.googleapis.com
  - name: cert-manager
    version: v0.15.1
    repository: https://charts.jetstack.io
    condition: certmanager.enabled
";

/// Create a chart directory holding a requirements file
fn create_chart_dir() -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("requirements.yaml");
    fs::write(&path, REQUIREMENTS).unwrap();
    (temp_dir, path)
}

fn remote(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect()
}

mod read_compare_write_flow {
    use super::*;

    /// One dependency behind upstream: only that entry is rewritten
    #[test]
    fn test_selective_update_flow() {
        let (temp_dir, path) = create_chart_dir();

        let local = read_local(&requirements_path(temp_dir.path())).unwrap();
        assert_eq!(local.len(), 3);

        let remote = remote(&[
            ("binderhub", "0.2.0-9dc8a5a"),
            ("nginx-ingress", "1.29.2"),
            ("cert-manager", "v0.15.1"),
        ]);

        let behind = update::diff(&local, &remote).unwrap();
        assert_eq!(behind, vec!["binderhub"]);

        let changes: Vec<VersionChange> = behind
            .iter()
            .map(|name| VersionChange::new(name.as_str(), local[name].as_str(), remote[name].as_str()))
            .collect();

        let writer = ManifestWriter::new(false);
        let result = writer.apply_changes(&path, &changes).unwrap();
        assert_eq!(result.updates_applied, 1);
        assert!(result.file_modified);

        let reread = read_local(&path).unwrap();
        assert_eq!(reread["binderhub"], "0.2.0-9dc8a5a");
        assert_eq!(reread["nginx-ingress"], "1.29.2");
        assert_eq!(reread["cert-manager"], "v0.15.1");
    }

    /// After an update has been applied, a second pass finds nothing to do
    #[test]
    fn test_second_run_is_a_noop() {
        let (_guard, path) = create_chart_dir();

        let upstream = remote(&[
            ("binderhub", "0.2.0-9dc8a5a"),
            ("nginx-ingress", "1.30.0"),
            ("cert-manager", "v0.15.1"),
        ]);

        // First run: detect and apply
        let local = read_local(&path).unwrap();
        let behind = update::diff(&local, &upstream).unwrap();
        assert_eq!(behind.len(), 2);

        let changes: Vec<VersionChange> = behind
            .iter()
            .map(|name| VersionChange::new(name.as_str(), local[name].as_str(), upstream[name].as_str()))
            .collect();
        ManifestWriter::new(false)
            .apply_changes(&path, &changes)
            .unwrap();

        let bytes_after_first = fs::read(&path).unwrap();

        // Second run against the same upstream: empty diff, no write
        let local = read_local(&path).unwrap();
        let behind = update::diff(&local, &upstream).unwrap();
        assert!(behind.is_empty());
        assert_eq!(fs::read(&path).unwrap(), bytes_after_first);
    }

    /// Matching versions on every key produce an empty update set
    #[test]
    fn test_up_to_date_chart() {
        let (_guard, path) = create_chart_dir();

        let local = read_local(&path).unwrap();
        let behind = update::diff(&local, &local.clone()).unwrap();
        assert!(behind.is_empty());
    }

    /// A dependency resolved remotely but absent locally fails the compare
    #[test]
    fn test_key_mismatch_aborts_before_write() {
        let (_guard, path) = create_chart_dir();
        let before = fs::read(&path).unwrap();

        let local = read_local(&path).unwrap();
        let mut upstream = local.clone();
        upstream.insert("surprise-chart".to_string(), "1.0.0".to_string());

        assert!(update::diff(&local, &upstream).is_err());
        assert_eq!(fs::read(&path).unwrap(), before);
    }
}

mod dry_run {
    use super::*;

    /// A dry run detects changes but leaves the file bytes untouched
    #[test]
    fn test_dry_run_detects_without_writing() {
        let (_guard, path) = create_chart_dir();
        let before = fs::read(&path).unwrap();

        let local = read_local(&path).unwrap();
        let upstream = remote(&[
            ("binderhub", "0.3.0"),
            ("nginx-ingress", "2.0.0"),
            ("cert-manager", "v1.0.0"),
        ]);

        let behind = update::diff(&local, &upstream).unwrap();
        assert_eq!(behind.len(), 3);

        let changes: Vec<VersionChange> = behind
            .iter()
            .map(|name| VersionChange::new(name.as_str(), local[name].as_str(), upstream[name].as_str()))
            .collect();

        let writer = ManifestWriter::new(true);
        let result = writer.apply_changes(&path, &changes).unwrap();
        assert_eq!(result.updates_applied, 3);
        assert!(!result.file_modified);
        assert_eq!(fs::read(&path).unwrap(), before);
    }
}

mod round_trip_preservation {
    use super::*;
    use serde_yaml::Value;

    /// Top-level keys other than `dependencies` survive a rewrite
    #[test]
    fn test_extra_top_level_keys_survive() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("requirements.yaml");
        fs::write(
            &path,
            "\
dependencies:
  - name: chart
    version: 1.0.0
repositories:
  - name: stable
    url: https://kubernetes-charts.storage.googleapis.com
generated: \"2020-07-26T12:00:00Z\"
",
        )
        .unwrap();

        ManifestWriter::new(false)
            .apply_changes(&path, &[VersionChange::new("chart", "1.0.0", "2.0.0")])
            .unwrap();

        let doc: Value = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(doc.get("repositories").is_some());
        assert_eq!(
            doc.get("generated").unwrap().as_str(),
            Some("2020-07-26T12:00:00Z")
        );

        let deps = doc.get("dependencies").unwrap().as_sequence().unwrap();
        assert_eq!(deps[0].get("version").unwrap().as_str(), Some("2.0.0"));
    }

    /// Untouched dependency entries keep their fields and their order
    #[test]
    fn test_untouched_entries_survive() {
        let (_guard, path) = create_chart_dir();

        ManifestWriter::new(false)
            .apply_changes(
                &path,
                &[VersionChange::new("binderhub", "0.2.0-3b53fce", "0.3.0")],
            )
            .unwrap();

        let doc: Value = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let deps = doc.get("dependencies").unwrap().as_sequence().unwrap();

        let names: Vec<&str> = deps
            .iter()
            .map(|entry| entry.get("name").unwrap().as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["binderhub", "nginx-ingress", "cert-manager"]);

        assert_eq!(
            deps[2].get("condition").unwrap().as_str(),
            Some("certmanager.enabled")
        );
        assert_eq!(
            deps[1].get("repository").unwrap().as_str(),
            Some("https://kubernetes-charts.storage.googleapis.com")
        );
    }
}

mod chart_path_resolution {
    use super::*;

    /// A chart directory argument resolves to its requirements file
    #[test]
    fn test_directory_argument() {
        let (temp_dir, path) = create_chart_dir();
        let resolved = requirements_path(temp_dir.path());
        assert_eq!(resolved, path);
        assert_eq!(read_local(&resolved).unwrap().len(), 3);
    }

    /// A file argument is read directly
    #[test]
    fn test_file_argument() {
        let (_guard, path) = create_chart_dir();
        let resolved = requirements_path(&path);
        assert_eq!(resolved, path);
    }
}
