#![no_main]
use libfuzzer_sys::fuzz_target;
use metrics_diff::parsers::{parse_snapshot_str, SnapshotFormat};

/// Fuzz the snapshot document parser.
///
/// Feeds arbitrary UTF-8 strings through content sniffing and both the JSON
/// and YAML paths.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_snapshot_str(s, SnapshotFormat::sniff(s));
        let _ = parse_snapshot_str(s, SnapshotFormat::Json);
        let _ = parse_snapshot_str(s, SnapshotFormat::Yaml);
    }
});
