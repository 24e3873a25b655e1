//! Static spec-key to view-type tables.
//!
//! Each spec key maps to the Dart view type that the generated code filters
//! by. Keys missing from these tables are never checked.

use crate::spec::CatalogKind;

/// Property key (channel catalog) to property view type.
pub static PROPERTY_VIEW_NAMES: &[(&str, &str)] = &[
    ("active", "ActiveChannelPropertyView"),
    ("angle", "AngleChannelPropertyView"),
    ("aqi", "AqiChannelPropertyView"),
    ("brightness", "BrightnessChannelPropertyView"),
    ("change_needed", "ChangeNeededChannelPropertyView"),
    ("child_lock", "ChildLockChannelPropertyView"),
    ("color_blue", "ColorBlueChannelPropertyView"),
    ("color_green", "ColorGreenChannelPropertyView"),
    ("color_red", "ColorRedChannelPropertyView"),
    ("color_temperature", "ColorTemperatureChannelPropertyView"),
    ("color_white", "ColorWhiteChannelPropertyView"),
    ("command", "CommandChannelPropertyView"),
    ("connection_type", "ConnectionTypeChannelPropertyView"),
    ("consumption", "ConsumptionChannelPropertyView"),
    ("current", "CurrentChannelPropertyView"),
    ("defrost_active", "DefrostActiveChannelPropertyView"),
    ("density", "DensityChannelPropertyView"),
    ("detected", "DetectedChannelPropertyView"),
    ("direction", "DirectionChannelPropertyView"),
    ("distance", "DistanceChannelPropertyView"),
    ("duration", "DurationChannelPropertyView"),
    ("event", "EventChannelPropertyView"),
    ("fault", "FaultChannelPropertyView"),
    ("firmware_revision", "FirmwareRevisionChannelPropertyView"),
    ("frequency", "FrequencyChannelPropertyView"),
    ("hardware_revision", "HardwareRevisionChannelPropertyView"),
    ("hue", "HueChannelPropertyView"),
    ("humidity", "HumidityChannelPropertyView"),
    ("in_use", "InUseChannelPropertyView"),
    ("infrared", "InfraredChannelPropertyView"),
    ("input_source", "InputSourceChannelPropertyView"),
    ("level", "LevelChannelPropertyView"),
    ("life_remaining", "LifeRemainingChannelPropertyView"),
    ("link_quality", "LinkQualityChannelPropertyView"),
    ("locked", "LockedChannelPropertyView"),
    ("manufacturer", "ManufacturerChannelPropertyView"),
    ("measured", "MeasuredChannelPropertyView"),
    ("mist_level", "MistLevelChannelPropertyView"),
    ("mode", "ModeChannelPropertyView"),
    ("model", "ModelChannelPropertyView"),
    ("natural_breeze", "NaturalBreezeChannelPropertyView"),
    ("obstruction", "ObstructionChannelPropertyView"),
    ("on", "OnChannelPropertyView"),
    ("over_current", "OverCurrentChannelPropertyView"),
    ("over_power", "OverPowerChannelPropertyView"),
    ("over_voltage", "OverVoltageChannelPropertyView"),
    ("pan", "PanChannelPropertyView"),
    ("peak_level", "PeakLevelChannelPropertyView"),
    ("percentage", "PercentageChannelPropertyView"),
    ("position", "PositionChannelPropertyView"),
    ("power", "PowerChannelPropertyView"),
    ("rate", "RateChannelPropertyView"),
    ("remaining", "RemainingChannelPropertyView"),
    ("remote_key", "RemoteKeyChannelPropertyView"),
    ("reset", "ResetChannelPropertyView"),
    ("saturation", "SaturationChannelPropertyView"),
    ("serial_number", "SerialNumberChannelPropertyView"),
    ("siren", "SirenChannelPropertyView"),
    ("source", "SourceChannelPropertyView"),
    ("speed", "SpeedChannelPropertyView"),
    ("state", "StateChannelPropertyView"),
    ("status", "StatusChannelPropertyView"),
    ("swing", "SwingChannelPropertyView"),
    ("tampered", "TamperedChannelPropertyView"),
    ("temperature", "TemperatureChannelPropertyView"),
    ("tilt", "TiltChannelPropertyView"),
    ("timer", "TimerChannelPropertyView"),
    ("track", "TrackChannelPropertyView"),
    ("triggered", "TriggeredChannelPropertyView"),
    ("type", "TypeChannelPropertyView"),
    ("units", "UnitsChannelPropertyView"),
    ("voltage", "VoltageChannelPropertyView"),
    ("volume", "VolumeChannelPropertyView"),
    ("warm_mist", "WarmMistChannelPropertyView"),
    ("water_tank_empty", "WaterTankEmptyChannelPropertyView"),
    ("water_tank_full", "WaterTankFullChannelPropertyView"),
    ("water_tank_level", "WaterTankLevelChannelPropertyView"),
    ("zoom", "ZoomChannelPropertyView"),
];

/// Channel key (device catalog) to channel view type.
pub static CHANNEL_VIEW_NAMES: &[(&str, &str)] = &[
    ("air_particulate", "AirParticulateChannelView"),
    ("air_quality", "AirQualityChannelView"),
    ("alarm", "AlarmChannelView"),
    ("battery", "BatteryChannelView"),
    ("camera", "CameraChannelView"),
    ("carbon_dioxide", "CarbonDioxideChannelView"),
    ("carbon_monoxide", "CarbonMonoxideChannelView"),
    ("contact", "ContactChannelView"),
    ("cooler", "CoolerChannelView"),
    ("dehumidifier", "DehumidifierChannelView"),
    ("device_information", "DeviceInformationChannelView"),
    ("door", "DoorChannelView"),
    ("doorbell", "DoorbellChannelView"),
    ("electrical_energy", "ElectricalEnergyChannelView"),
    ("electrical_power", "ElectricalPowerChannelView"),
    ("fan", "FanChannelView"),
    ("filter", "FilterChannelView"),
    ("flow", "FlowChannelView"),
    ("gas", "GasChannelView"),
    ("heater", "HeaterChannelView"),
    ("humidity", "HumidityChannelView"),
    ("humidifier", "HumidifierChannelView"),
    ("illuminance", "IlluminanceChannelView"),
    ("leak", "LeakChannelView"),
    ("light", "LightChannelView"),
    ("lock", "LockChannelView"),
    ("media_input", "MediaInputChannelView"),
    ("media_playback", "MediaPlaybackChannelView"),
    ("microphone", "MicrophoneChannelView"),
    ("motion", "MotionChannelView"),
    ("nitrogen_dioxide", "NitrogenDioxideChannelView"),
    ("occupancy", "OccupancyChannelView"),
    ("outlet", "OutletChannelView"),
    ("ozone", "OzoneChannelView"),
    ("pressure", "PressureChannelView"),
    ("robot_vacuum", "RobotVacuumChannelView"),
    ("smoke", "SmokeChannelView"),
    ("speaker", "SpeakerChannelView"),
    ("sulphur_dioxide", "SulphurDioxideChannelView"),
    ("switcher", "SwitcherChannelView"),
    ("television", "TelevisionChannelView"),
    ("temperature", "TemperatureChannelView"),
    ("thermostat", "ThermostatChannelView"),
    ("valve", "ValveChannelView"),
    ("volatile_organic_compounds", "VolatileOrganicCompoundsChannelView"),
    ("window_covering", "WindowCoveringChannelView"),
];

/// The name table used for sub-entities of the given catalog.
pub fn table(kind: CatalogKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        CatalogKind::Channels => PROPERTY_VIEW_NAMES,
        CatalogKind::Devices => CHANNEL_VIEW_NAMES,
    }
}

/// Expected view type for a sub-entity key, if the key is mapped.
pub fn view_name(kind: CatalogKind, key: &str) -> Option<&'static str> {
    table(kind)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn property_lookup() {
        assert_eq!(
            view_name(CatalogKind::Channels, "level"),
            Some("LevelChannelPropertyView")
        );
        assert_eq!(
            view_name(CatalogKind::Channels, "water_tank_level"),
            Some("WaterTankLevelChannelPropertyView")
        );
    }

    #[test]
    fn channel_lookup() {
        assert_eq!(
            view_name(CatalogKind::Devices, "battery"),
            Some("BatteryChannelView")
        );
        assert_eq!(
            view_name(CatalogKind::Devices, "volatile_organic_compounds"),
            Some("VolatileOrganicCompoundsChannelView")
        );
    }

    #[test]
    fn unmapped_key_is_none() {
        assert_eq!(view_name(CatalogKind::Channels, "not_a_property"), None);
        assert_eq!(view_name(CatalogKind::Devices, "level"), None);
    }

    #[test]
    fn table_sizes() {
        assert_eq!(PROPERTY_VIEW_NAMES.len(), 78);
        assert_eq!(CHANNEL_VIEW_NAMES.len(), 46);
    }

    #[test]
    fn keys_are_unique() {
        for kind in [CatalogKind::Channels, CatalogKind::Devices] {
            let keys: HashSet<&str> = table(kind).iter().map(|(k, _)| *k).collect();
            assert_eq!(keys.len(), table(kind).len());
        }
    }

    #[test]
    fn names_carry_expected_suffix() {
        assert!(PROPERTY_VIEW_NAMES
            .iter()
            .all(|(_, n)| n.ends_with("ChannelPropertyView")));
        assert!(CHANNEL_VIEW_NAMES
            .iter()
            .all(|(_, n)| n.ends_with("ChannelView") && !n.ends_with("PropertyView")));
    }
}
