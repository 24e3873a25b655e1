//! Accessor extraction from generated view sources.
//!
//! Generated views expose typed getters that pick one entry out of a
//! collection by its concrete view type:
//!
//! ```text
//! LevelChannelPropertyView get level => properties.whereType<LevelChannelPropertyView>().first;
//! StatusChannelPropertyView? get status => properties.whereType<StatusChannelPropertyView>().firstOrNull;
//! ```
//!
//! Only this exact shape is recognized. Getters written any other way are
//! not recorded and do not produce errors.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::spec::CatalogKind;

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(
    RE_PROPERTY_ACCESSOR,
    r"(\w+ChannelPropertyView)\??\s+get\s+(\w+)\s*=>\s*properties\.whereType<(\w+ChannelPropertyView)>\(\)\.(first(?:OrNull)?)"
);
lazy_regex!(
    RE_CHANNEL_ACCESSOR,
    r"(\w+ChannelView)\??\s+get\s+(\w+)\s*=>\s*channels\.whereType<(\w+ChannelView)>\(\)\.(first(?:OrNull)?)"
);

/// How an accessor selects its element from the filtered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// `.first` - throws when nothing matches.
    First,
    /// `.firstOrNull` - yields null when nothing matches.
    FirstOrNull,
}

impl Selection {
    fn from_token(token: &str) -> Self {
        if token == "firstOrNull" {
            Selection::FirstOrNull
        } else {
            Selection::First
        }
    }

    /// Whether this selection tolerates absence.
    pub fn is_nullable(&self) -> bool {
        matches!(self, Selection::FirstOrNull)
    }

    /// The Dart member used for this selection.
    pub fn member(&self) -> &'static str {
        match self {
            Selection::First => ".first",
            Selection::FirstOrNull => ".firstOrNull",
        }
    }
}

/// One recognized accessor declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    /// Declared return type of the getter.
    pub declared_type: String,
    /// Getter name.
    pub getter: String,
    /// Type passed to `whereType`.
    pub target: String,
    /// Selection idiom.
    pub selection: Selection,
    /// 1-based line of the declaration.
    pub line: usize,
}

impl Accessor {
    pub fn is_nullable(&self) -> bool {
        self.selection.is_nullable()
    }
}

/// Accessors found in one view source, keyed by `whereType` target.
#[derive(Debug, Clone, Default)]
pub struct AccessorRecord {
    accessors: HashMap<String, Accessor>,
}

impl AccessorRecord {
    /// Look up the accessor that filters by `target`.
    pub fn get(&self, target: &str) -> Option<&Accessor> {
        self.accessors.get(target)
    }

    pub fn contains(&self, target: &str) -> bool {
        self.accessors.contains_key(target)
    }

    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }

    fn insert(&mut self, accessor: Accessor) {
        if let Some(previous) = self.accessors.insert(accessor.target.clone(), accessor) {
            tracing::debug!(
                "Accessor for {} on line {} replaced by a later declaration",
                previous.target,
                previous.line
            );
        }
    }
}

fn pattern(kind: CatalogKind) -> &'static Regex {
    match kind {
        // Channel views hold property accessors; device views hold channel accessors.
        CatalogKind::Channels => &*RE_PROPERTY_ACCESSOR,
        CatalogKind::Devices => &*RE_CHANNEL_ACCESSOR,
    }
}

fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}

fn to_accessor(source: &str, caps: &Captures) -> Accessor {
    let start = caps.get(0).map_or(0, |m| m.start());
    Accessor {
        declared_type: caps[1].to_string(),
        getter: caps[2].to_string(),
        target: caps[3].to_string(),
        selection: Selection::from_token(&caps[4]),
        line: line_of(source, start),
    }
}

/// Extract accessor declarations from a view source.
///
/// For views of `CatalogKind::Channels` categories this finds property
/// accessors; for `CatalogKind::Devices` it finds channel accessors.
/// Declarations are scanned top to bottom and a later declaration for the
/// same target replaces an earlier one.
pub fn extract_accessors(source: &str, kind: CatalogKind) -> AccessorRecord {
    let mut record = AccessorRecord::default();
    for caps in pattern(kind).captures_iter(source) {
        record.insert(to_accessor(source, &caps));
    }
    tracing::debug!("Extracted {} {} accessor(s)", record.len(), kind.entry_noun());
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATTERY_VIEW: &str = r#"
import 'package:panel/modules/devices/views/channels/view.dart';

class BatteryChannelView extends ChannelView {
  BatteryChannelView({required super.properties});

  LevelChannelPropertyView get levelProp =>
      properties.whereType<LevelChannelPropertyView>().first;

  StatusChannelPropertyView? get statusProp =>
      properties.whereType<StatusChannelPropertyView>().firstOrNull;

  int get level => levelProp.value;
}
"#;

    #[test]
    fn extracts_non_null_accessor() {
        let record = extract_accessors(BATTERY_VIEW, CatalogKind::Channels);
        let level = record.get("LevelChannelPropertyView").unwrap();

        assert_eq!(level.selection, Selection::First);
        assert!(!level.is_nullable());
        assert_eq!(level.getter, "levelProp");
        assert_eq!(level.declared_type, "LevelChannelPropertyView");
        assert_eq!(level.line, 7);
    }

    #[test]
    fn extracts_nullable_accessor() {
        let record = extract_accessors(BATTERY_VIEW, CatalogKind::Channels);
        let status = record.get("StatusChannelPropertyView").unwrap();

        assert!(status.is_nullable());
        assert_eq!(status.selection.member(), ".firstOrNull");
        assert_eq!(status.line, 10);
    }

    #[test]
    fn ignores_plain_getters() {
        let record = extract_accessors(BATTERY_VIEW, CatalogKind::Channels);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn last_declaration_wins() {
        let source = r#"
LevelChannelPropertyView? get a => properties.whereType<LevelChannelPropertyView>().firstOrNull;
LevelChannelPropertyView get b => properties.whereType<LevelChannelPropertyView>().first;
"#;
        let record = extract_accessors(source, CatalogKind::Channels);

        let level = record.get("LevelChannelPropertyView").unwrap();
        assert_eq!(level.getter, "b");
        assert!(!level.is_nullable());
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn target_is_the_where_type_argument() {
        let source =
            "BaseChannelPropertyView get x => properties.whereType<HueChannelPropertyView>().first;";
        let record = extract_accessors(source, CatalogKind::Channels);

        assert!(record.contains("HueChannelPropertyView"));
        assert!(!record.contains("BaseChannelPropertyView"));
    }

    #[test]
    fn unexpected_shapes_are_skipped() {
        let source = r#"
LevelChannelPropertyView get a => properties.firstWhere((p) => p is LevelChannelPropertyView);
LevelChannelPropertyView get b { return properties.whereType<LevelChannelPropertyView>().first; }
LevelChannelPropertyView get c => items.whereType<LevelChannelPropertyView>().first;
"#;
        let record = extract_accessors(source, CatalogKind::Channels);
        assert!(record.is_empty());
    }

    #[test]
    fn channel_accessors_in_device_views() {
        let source = r#"
class LightingDeviceView extends DeviceView {
  LightChannelView get lightChannel => channels.whereType<LightChannelView>().first;
  ElectricalPowerChannelView? get powerChannel =>
      channels.whereType<ElectricalPowerChannelView>().firstOrNull;
}
"#;
        let record = extract_accessors(source, CatalogKind::Devices);

        assert!(!record.get("LightChannelView").unwrap().is_nullable());
        assert!(record.get("ElectricalPowerChannelView").unwrap().is_nullable());
    }

    #[test]
    fn kinds_do_not_cross_match() {
        let channel_src = "LightChannelView get l => channels.whereType<LightChannelView>().first;";
        let property_src =
            "OnChannelPropertyView get on => properties.whereType<OnChannelPropertyView>().first;";

        assert!(extract_accessors(channel_src, CatalogKind::Channels).is_empty());
        assert!(extract_accessors(property_src, CatalogKind::Devices).is_empty());
    }

    #[test]
    fn first_prefix_of_other_member_counts_as_first() {
        let source =
            "OnChannelPropertyView get on => properties.whereType<OnChannelPropertyView>().firstWhere;";
        let record = extract_accessors(source, CatalogKind::Channels);
        assert_eq!(
            record.get("OnChannelPropertyView").unwrap().selection,
            Selection::First
        );
    }
}
