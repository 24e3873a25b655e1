//! Cross-checking a catalog against its views.

use crate::spec::{Catalog, CatalogKind, GENERIC_CATEGORY};
use crate::views::{extract_accessors, view_name, Selection, ViewSource};

use super::mismatch::{Location, Mismatch};

/// An accessor that was compared against the spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedEntry {
    pub category: String,
    pub key: String,
    pub required: bool,
    pub observed: Selection,
}

/// Result of checking one catalog.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Which catalog was checked.
    pub kind: CatalogKind,
    /// Entries both defined in the spec and declared in a view.
    pub checked: Vec<CheckedEntry>,
    /// Disagreements, in catalog order.
    pub mismatches: Vec<Mismatch>,
    /// Categories with no view file.
    pub skipped: Vec<String>,
}

impl CheckOutcome {
    fn new(kind: CatalogKind) -> Self {
        Self {
            kind,
            checked: Vec::new(),
            mismatches: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Number of accessors compared.
    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    /// Whether no mismatches were found. Skips do not count against this.
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Checks one catalog's `required` flags against accessor nullability.
///
/// The channel catalog is checked against property accessors in channel
/// views; the device catalog against channel accessors in device views.
#[derive(Debug, Clone, Copy)]
pub struct ViewChecker {
    kind: CatalogKind,
}

impl ViewChecker {
    pub fn new(kind: CatalogKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    /// Check every non-generic category of `catalog`.
    ///
    /// Categories without a view are skipped. Entries whose key has no
    /// view-type mapping, or whose view type has no accessor in the view,
    /// are ignored.
    pub fn check(&self, catalog: &Catalog, source: &dyn ViewSource) -> CheckOutcome {
        let mut outcome = CheckOutcome::new(self.kind);

        for category in catalog.iter() {
            if category.key == GENERIC_CATEGORY {
                continue;
            }

            let Some(view) = source.view_for(&category.key) else {
                outcome.skipped.push(category.key.clone());
                continue;
            };

            let accessors = extract_accessors(&view.content, self.kind);

            for entry in &category.entries {
                let Some(expected) = view_name(self.kind, &entry.key) else {
                    tracing::debug!(
                        "{}.{}: no view type mapped for {} '{}'",
                        category.key,
                        entry.key,
                        self.kind.entry_noun(),
                        entry.key
                    );
                    continue;
                };

                let Some(accessor) = accessors.get(expected) else {
                    tracing::debug!(
                        "{}.{}: {} not declared in {}",
                        category.key,
                        entry.key,
                        expected,
                        view.path.display()
                    );
                    continue;
                };

                outcome.checked.push(CheckedEntry {
                    category: category.key.clone(),
                    key: entry.key.clone(),
                    required: entry.required,
                    observed: accessor.selection,
                });

                if let Some(mismatch) = Mismatch::detect(
                    &category.key,
                    &entry.key,
                    entry.required,
                    accessor.selection,
                ) {
                    outcome
                        .mismatches
                        .push(mismatch.with_location(Location::new(&view.path, accessor.line)));
                }
            }
        }

        tracing::debug!(
            "Checked {} {} accessor(s): {} mismatch(es), {} skipped",
            outcome.checked_count(),
            self.kind.entry_noun(),
            outcome.mismatches.len(),
            outcome.skipped.len()
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::parse_catalog;
    use crate::views::MemorySource;
    use std::path::Path;

    fn channels(json: &str) -> Catalog {
        parse_catalog(json, CatalogKind::Channels, Path::new("channels.json")).unwrap()
    }

    fn devices(json: &str) -> Catalog {
        parse_catalog(json, CatalogKind::Devices, Path::new("devices.json")).unwrap()
    }

    const BATTERY_SPEC: &str = r#"{"battery": {"properties": {"level": {"required": true}}}}"#;

    #[test]
    fn required_non_null_passes() {
        let source = MemorySource::new().with_view(
            "battery",
            "LevelChannelPropertyView get level => properties.whereType<LevelChannelPropertyView>().first;",
        );

        let outcome = ViewChecker::new(CatalogKind::Channels).check(&channels(BATTERY_SPEC), &source);

        assert!(outcome.passed());
        assert_eq!(outcome.checked_count(), 1);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn required_nullable_is_one_mismatch() {
        let source = MemorySource::new().with_view(
            "battery",
            "LevelChannelPropertyView? get level => properties.whereType<LevelChannelPropertyView>().firstOrNull;",
        );

        let outcome = ViewChecker::new(CatalogKind::Channels).check(&channels(BATTERY_SPEC), &source);

        assert_eq!(outcome.mismatches.len(), 1);
        assert_eq!(
            outcome.mismatches[0].to_string(),
            "battery.level: spec=required, view uses nullable accessor (should use non-null)"
        );
        assert_eq!(
            outcome.mismatches[0].location,
            Some(Location::new("battery.dart", 1))
        );
    }

    #[test]
    fn missing_view_is_skipped() {
        let catalog = channels(r#"{"fan": {"properties": {"speed": {"required": false}}}}"#);

        let outcome = ViewChecker::new(CatalogKind::Channels).check(&catalog, &MemorySource::new());

        assert_eq!(outcome.skipped, vec!["fan".to_string()]);
        assert_eq!(outcome.checked_count(), 0);
        assert!(outcome.passed());
    }

    #[test]
    fn unmapped_key_is_ignored() {
        let catalog = channels(
            r#"{"battery": {"properties": {"mystery": {"required": true}}}}"#,
        );
        let source = MemorySource::new().with_view(
            "battery",
            "MysteryChannelPropertyView? get m => properties.whereType<MysteryChannelPropertyView>().firstOrNull;",
        );

        let outcome = ViewChecker::new(CatalogKind::Channels).check(&catalog, &source);

        assert_eq!(outcome.checked_count(), 0);
        assert!(outcome.passed());
    }

    #[test]
    fn undeclared_accessor_is_not_a_violation() {
        let source = MemorySource::new().with_view("battery", "class BatteryChannelView {}");

        let outcome = ViewChecker::new(CatalogKind::Channels).check(&channels(BATTERY_SPEC), &source);

        assert_eq!(outcome.checked_count(), 0);
        assert!(outcome.passed());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn generic_is_never_checked_or_skipped() {
        let catalog = channels(r#"{"generic": {"properties": {"level": {"required": true}}}}"#);
        let source = MemorySource::new().with_view(
            "generic",
            "LevelChannelPropertyView? get l => properties.whereType<LevelChannelPropertyView>().firstOrNull;",
        );

        let outcome = ViewChecker::new(CatalogKind::Channels).check(&catalog, &source);

        assert_eq!(outcome.checked_count(), 0);
        assert!(outcome.skipped.is_empty());
        assert!(outcome.passed());
    }

    #[test]
    fn optional_non_null_is_mismatch() {
        let catalog = devices(
            r#"{"lighting": {"channels": {
                "light": {"required": true},
                "electrical_power": {}
            }}}"#,
        );
        let source = MemorySource::new().with_view(
            "lighting",
            r#"
LightChannelView get light => channels.whereType<LightChannelView>().first;
ElectricalPowerChannelView get power => channels.whereType<ElectricalPowerChannelView>().first;
"#,
        );

        let outcome = ViewChecker::new(CatalogKind::Devices).check(&catalog, &source);

        assert_eq!(outcome.checked_count(), 2);
        assert_eq!(outcome.mismatches.len(), 1);
        assert_eq!(
            outcome.mismatches[0].to_string(),
            "lighting.electrical_power: spec=optional, view uses non-null accessor (should use nullable)"
        );
        assert_eq!(outcome.mismatches[0].location.as_ref().unwrap().line, 3);
    }

    #[test]
    fn skipped_keeps_catalog_order() {
        let catalog = devices(r#"{"zeta": {}, "generic": {}, "alpha": {}, "mid": {}}"#);

        let outcome = ViewChecker::new(CatalogKind::Devices).check(&catalog, &MemorySource::new());

        assert_eq!(outcome.skipped, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let source = MemorySource::new().with_view(
            "battery",
            "LevelChannelPropertyView? get level => properties.whereType<LevelChannelPropertyView>().firstOrNull;",
        );
        let catalog = channels(BATTERY_SPEC);
        let checker = ViewChecker::new(CatalogKind::Channels);

        let first = checker.check(&catalog, &source);
        let second = checker.check(&catalog, &source);

        assert_eq!(first.mismatches, second.mismatches);
        assert_eq!(first.checked, second.checked);
    }
}
