//! Library integration tests.

use std::path::{Path, PathBuf};

use viewspec::check::ViewChecker;
use viewspec::report::{HumanFormatter, ReportFormatter, ValidationReport};
use viewspec::spec::{parse_catalog, CatalogKind};
use viewspec::views::MemorySource;
use viewspec::ViewSpecError;

fn channels(json: &str) -> viewspec::spec::Catalog {
    parse_catalog(json, CatalogKind::Channels, Path::new("channels.json")).unwrap()
}

fn devices(json: &str) -> viewspec::spec::Catalog {
    parse_catalog(json, CatalogKind::Devices, Path::new("devices.json")).unwrap()
}

#[test]
fn error_types_are_public() {
    let err = ViewSpecError::SpecNotFound {
        path: PathBuf::from("spec/devices/channels.json"),
    };
    assert!(err.to_string().contains("channels.json"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> viewspec::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use viewspec::cli::{Cli, Commands};

    let cli = Cli::parse_from(["viewspec", "tables", "--unmapped"]);
    if let Some(Commands::Tables(args)) = cli.command {
        assert!(args.unmapped);
    } else {
        panic!("Expected Tables command");
    }
}

#[test]
fn scenario_required_non_null_passes() {
    let catalog = channels(r#"{"battery": {"properties": {"level": {"required": true}}}}"#);
    let views = MemorySource::new().with_view(
        "battery",
        "LevelChannelPropertyView get level => properties.whereType<LevelChannelPropertyView>().first;",
    );

    let outcome = ViewChecker::new(CatalogKind::Channels).check(&catalog, &views);

    assert!(outcome.mismatches.is_empty());
    assert_eq!(outcome.checked_count(), 1);
}

#[test]
fn scenario_required_nullable_reports_one_mismatch() {
    let catalog = channels(r#"{"battery": {"properties": {"level": {"required": true}}}}"#);
    let views = MemorySource::new().with_view(
        "battery",
        "LevelChannelPropertyView? get level => properties.whereType<LevelChannelPropertyView>().firstOrNull;",
    );

    let outcome = ViewChecker::new(CatalogKind::Channels).check(&catalog, &views);

    assert_eq!(outcome.mismatches.len(), 1);
    assert_eq!(
        outcome.mismatches[0].to_string(),
        "battery.level: spec=required, view uses nullable accessor (should use non-null)"
    );
}

#[test]
fn scenario_missing_view_is_skipped() {
    let catalog = channels(r#"{"fan": {"properties": {"speed": {"required": false}}}}"#);

    let outcome = ViewChecker::new(CatalogKind::Channels).check(&catalog, &MemorySource::new());

    assert_eq!(outcome.skipped, vec!["fan".to_string()]);
    assert!(outcome.mismatches.is_empty());
}

#[test]
fn scenario_unmapped_key_is_ignored() {
    let catalog = channels(r#"{"battery": {"properties": {"charge_cycles": {"required": true}}}}"#);
    let views = MemorySource::new().with_view(
        "battery",
        "ChargeCyclesChannelPropertyView? get c => properties.whereType<ChargeCyclesChannelPropertyView>().firstOrNull;",
    );

    let outcome = ViewChecker::new(CatalogKind::Channels).check(&catalog, &views);

    assert_eq!(outcome.checked_count(), 0);
    assert!(outcome.mismatches.is_empty());
}

#[test]
fn report_passes_only_without_mismatches() {
    let channel_catalog = channels(r#"{"fan": {"properties": {"speed": {}}}}"#);
    let device_catalog = devices(r#"{"lighting": {"channels": {"light": {"required": true}}}}"#);
    let device_views = MemorySource::new().with_view(
        "lighting",
        "LightChannelView? get light => channels.whereType<LightChannelView>().firstOrNull;",
    );

    let report = ValidationReport {
        project_root: PathBuf::from("/repo"),
        channels: ViewChecker::new(CatalogKind::Channels)
            .check(&channel_catalog, &MemorySource::new()),
        devices: ViewChecker::new(CatalogKind::Devices).check(&device_catalog, &device_views),
    };

    assert!(!report.passed());
    assert_eq!(report.exit_code(), 1);

    let text = HumanFormatter::new(false).render(&report);
    assert!(text.contains("Skipped channels (no view file): fan"));
    assert!(text.contains(
        "lighting.light: spec=required, view uses nullable accessor (should use non-null)"
    ));
}
