#![no_main]
use libfuzzer_sys::fuzz_target;
use metrics_diff::parsers::{parse_snapshot_str, SnapshotFormat};
use metrics_diff::reports::{create_reporter_with_options, ReportConfig, ReportFormat};
use metrics_diff::DiffEngine;

/// Fuzz the diff engine and reporters with parsed documents.
///
/// The input is split at the first NUL byte into an old and a new document.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (old, new) = s.split_once('\0').unwrap_or((s, ""));
    let (Ok(old), Ok(new)) = (
        parse_snapshot_str(old, SnapshotFormat::Json),
        parse_snapshot_str(new, SnapshotFormat::Json),
    ) else {
        return;
    };

    let result = DiffEngine::default().compare(&old, &new);
    for format in [ReportFormat::Table, ReportFormat::Tree] {
        let _ = create_reporter_with_options(format, false)
            .generate_diff_report(&result, &ReportConfig::default());
    }
});
