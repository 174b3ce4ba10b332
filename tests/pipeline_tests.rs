//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full parse → diff → report pipeline,
//! error handling paths, and the diff command handler with real fixture files.

use metrics_diff::cli::{run_diff, DiffOverrides};
use metrics_diff::config::{AppConfig, DiffConfig, DiffPaths, ExportConfig, SortKey};
use metrics_diff::pipeline::{
    build_report_config, compute_diff, exit_codes, output_export, output_report,
    parse_snapshot_with_context, write_output, OutputTarget, PipelineError,
};
use metrics_diff::reports::{ExportFormat, ReportFormat};
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn fixture_config(old: &str, new: &str) -> DiffConfig {
    let mut config = DiffConfig::new(
        DiffPaths {
            old: fixture_path(old),
            new: fixture_path(new),
        },
        AppConfig::default(),
    );
    config.behavior.quiet = true;
    config
}

// ============================================================================
// Pipeline Parse Stage Tests
// ============================================================================

mod parse_stage {
    use super::*;

    #[test]
    fn parse_json_fixture() {
        let parsed = parse_snapshot_with_context(&fixture_path("new.json"), true)
            .expect("parse should succeed");

        assert_eq!(parsed.snapshot().metric_count(), 2);
        assert_eq!(parsed.snapshot().numeric_field_count(), 3);
        assert!(parsed.display_path().ends_with("new.json"));
    }

    #[test]
    fn parse_yaml_fixture() {
        let parsed = parse_snapshot_with_context(&fixture_path("old.yaml"), true)
            .expect("parse should succeed");
        assert_eq!(parsed.snapshot().numeric_field_count(), 2);
    }

    #[test]
    fn parse_missing_file_returns_pipeline_error() {
        let err = parse_snapshot_with_context(&fixture_path("nope.json"), true).unwrap_err();

        assert!(matches!(err, PipelineError::ParseFailed { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn parse_invalid_content_returns_error() {
        for name in ["invalid_shape.json", "truncated.json"] {
            let err = parse_snapshot_with_context(&fixture_path(name), true).unwrap_err();
            assert!(
                err.to_string().contains(name),
                "error for {name} should name the file: {err}"
            );
        }
    }
}

// ============================================================================
// Pipeline Diff Stage Tests
// ============================================================================

mod diff_stage {
    use super::*;

    #[test]
    fn compute_diff_fixtures() {
        let config = fixture_config("old.json", "new.json");
        let old = parse_snapshot_with_context(&config.paths.old, true).unwrap();
        let new = parse_snapshot_with_context(&config.paths.new, true).unwrap();

        let result = compute_diff(&config, old.snapshot(), new.snapshot()).unwrap();
        assert_eq!(result.summary.total_changes(), 2);
        assert_eq!(result.changes.len(), 2);
    }

    #[test]
    fn compute_diff_cross_format() {
        let config = fixture_config("old.yaml", "old.json");
        let old = parse_snapshot_with_context(&config.paths.old, true).unwrap();
        let new = parse_snapshot_with_context(&config.paths.new, true).unwrap();

        let result = compute_diff(&config, old.snapshot(), new.snapshot()).unwrap();
        assert!(!result.has_changes());
        assert_eq!(result.summary.unchanged, 2);
    }
}

// ============================================================================
// Pipeline Report Stage Tests
// ============================================================================

mod report_stage {
    use super::*;

    fn render_to_file(format: ReportFormat, dir: &Path) -> String {
        let mut config = fixture_config("old.json", "new.json");
        config.output.format = format;
        config.output.file = Some(dir.join("report.out"));

        let old = parse_snapshot_with_context(&config.paths.old, true).unwrap();
        let new = parse_snapshot_with_context(&config.paths.new, true).unwrap();
        let result = compute_diff(&config, old.snapshot(), new.snapshot()).unwrap();
        let report_config = build_report_config(&config, &old, &new);

        output_report(&config, &result, &report_config).expect("report should be written");
        std::fs::read_to_string(dir.join("report.out")).unwrap()
    }

    #[test]
    fn output_report_table_to_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let report = render_to_file(ReportFormat::Table, dir.path());

        assert!(report.contains("Detailed Metrics Comparison"));
        assert!(report.contains("bench-run-42.log"));
        assert!(!report.contains("\x1b["), "file output is never colored");
    }

    #[test]
    fn output_report_json_to_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let report = render_to_file(ReportFormat::Json, dir.path());
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert!(value["metadata"]["old_snapshot"]["file_path"]
            .as_str()
            .unwrap()
            .ends_with("old.json"));
        assert_eq!(value["summary"]["total_changes"], 2);
    }

    #[test]
    fn output_export_json() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut config = fixture_config("old.json", "new.json");
        config.export = Some(ExportConfig {
            path: dir.path().join("export.json"),
            format: ExportFormat::Json,
        });

        let old = parse_snapshot_with_context(&config.paths.old, true).unwrap();
        let new = parse_snapshot_with_context(&config.paths.new, true).unwrap();
        let result = compute_diff(&config, old.snapshot(), new.snapshot()).unwrap();
        let report_config = build_report_config(&config, &old, &new);
        output_export(&config, &result, &report_config).unwrap();

        let export = std::fs::read_to_string(dir.path().join("export.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&export).unwrap();
        assert_eq!(value["changes"][0]["metric_name"], "errors");
    }

    #[test]
    fn write_output_to_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("out.txt");
        write_output("content", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "content");
    }
}

// ============================================================================
// Diff Command Tests
// ============================================================================

mod end_to_end {
    use super::*;

    #[test]
    fn run_diff_with_overrides() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut app = AppConfig::default();
        DiffOverrides {
            format: Some(ReportFormat::Json),
            output_file: Some(dir.path().join("report.json")),
            sort_by: Some(SortKey::Percentage),
            show_unchanged: true,
            ..DiffOverrides::default()
        }
        .apply(&mut app);

        let mut config = DiffConfig::new(
            DiffPaths {
                old: fixture_path("old.json"),
                new: fixture_path("new.json"),
            },
            app,
        );
        config.behavior.quiet = true;
        config.export = Some(ExportConfig {
            path: dir.path().join("report.html"),
            format: ExportFormat::Html,
        });

        assert_eq!(run_diff(config).unwrap(), exit_codes::SUCCESS);

        let json = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let changes = value["changes"].as_array().unwrap();
        assert_eq!(changes.len(), 3);
        assert_eq!(changes[0]["field_name"], "p50");

        let html = std::fs::read_to_string(dir.path().join("report.html")).unwrap();
        assert!(html.contains("Metrics Comparison Report"));
    }

    #[test]
    fn run_diff_fail_on_change() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut config = fixture_config("old.json", "new.json");
        config.output.file = Some(dir.path().join("report.txt"));
        config.behavior.fail_on_change = true;

        assert_eq!(run_diff(config).unwrap(), exit_codes::CHANGES_DETECTED);
    }

    #[test]
    fn run_diff_invalid_document_is_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut config = fixture_config("old.json", "invalid_shape.json");
        config.output.file = Some(dir.path().join("report.txt"));

        let err = run_diff(config).unwrap_err();
        assert!(err.to_string().contains("invalid_shape.json"));
        assert!(!dir.path().join("report.txt").exists());
    }
}
