use serde::{Deserialize, Serialize};

use super::AtonRecord;
use crate::constants::{AIS_CATEGORY, RADIO_STATION_CATEGORY, SEAMARK_TYPE};

/// The closed set of AtoN categories the engine knows how to map.
///
/// Derived from the `seamark:type` tag, with radio stations whose category
/// is `ais` reclassified as physical AIS aids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtonType {
    // Structures
    BeaconCardinal,
    BeaconLateral,
    BeaconIsolatedDanger,
    BeaconSafeWater,
    BeaconSpecialPurpose,
    BuoyCardinal,
    BuoyLateral,
    BuoyIsolatedDanger,
    BuoySafeWater,
    BuoySpecialPurpose,
    BuoyInstallation,
    Landmark,
    Lighthouse,
    LightVessel,
    LightFloat,
    VirtualAisAid,
    // Equipment
    Light,
    FogSignal,
    RadarReflector,
    RetroReflector,
    Topmark,
    Daymark,
    RadioStation,
    PhysicalAisAid,
    RadarTransponderBeacon,
    SiloTank,
    EnvironmentObservationEquipment,
}

impl AtonType {
    pub const ALL: [AtonType; 27] = [
        AtonType::BeaconCardinal,
        AtonType::BeaconLateral,
        AtonType::BeaconIsolatedDanger,
        AtonType::BeaconSafeWater,
        AtonType::BeaconSpecialPurpose,
        AtonType::BuoyCardinal,
        AtonType::BuoyLateral,
        AtonType::BuoyIsolatedDanger,
        AtonType::BuoySafeWater,
        AtonType::BuoySpecialPurpose,
        AtonType::BuoyInstallation,
        AtonType::Landmark,
        AtonType::Lighthouse,
        AtonType::LightVessel,
        AtonType::LightFloat,
        AtonType::VirtualAisAid,
        AtonType::Light,
        AtonType::FogSignal,
        AtonType::RadarReflector,
        AtonType::RetroReflector,
        AtonType::Topmark,
        AtonType::Daymark,
        AtonType::RadioStation,
        AtonType::PhysicalAisAid,
        AtonType::RadarTransponderBeacon,
        AtonType::SiloTank,
        AtonType::EnvironmentObservationEquipment,
    ];

    /// The seamark type token, also used as the tag key prefix segment
    pub fn key(&self) -> &'static str {
        match self {
            AtonType::BeaconCardinal => "beacon_cardinal",
            AtonType::BeaconLateral => "beacon_lateral",
            AtonType::BeaconIsolatedDanger => "beacon_isolated_danger",
            AtonType::BeaconSafeWater => "beacon_safe_water",
            AtonType::BeaconSpecialPurpose => "beacon_special_purpose",
            AtonType::BuoyCardinal => "buoy_cardinal",
            AtonType::BuoyLateral => "buoy_lateral",
            AtonType::BuoyIsolatedDanger => "buoy_isolated_danger",
            AtonType::BuoySafeWater => "buoy_safe_water",
            AtonType::BuoySpecialPurpose => "buoy_special_purpose",
            AtonType::BuoyInstallation => "buoy_installation",
            AtonType::Landmark => "landmark",
            AtonType::Lighthouse => "lighthouse",
            AtonType::LightVessel => "light_vessel",
            AtonType::LightFloat => "light_float",
            AtonType::VirtualAisAid => "virtual_aton",
            AtonType::Light => "light",
            AtonType::FogSignal => "fog_signal",
            AtonType::RadarReflector => "radar_reflector",
            AtonType::RetroReflector => "retro_reflector",
            AtonType::Topmark => "topmark",
            AtonType::Daymark => "daymark",
            AtonType::RadioStation => "radio_station",
            // Shares the radio station tag namespace; only the category differs
            AtonType::PhysicalAisAid => "radio_station",
            AtonType::RadarTransponderBeacon => "radar_transponder",
            AtonType::SiloTank => "silo_tank",
            AtonType::EnvironmentObservationEquipment => "environment_observation",
        }
    }

    /// Look up a `seamark:type` value. Physical AIS aids are never matched
    /// here since they need the category sub-tag.
    pub fn from_key(key: &str) -> Option<AtonType> {
        let found = match key.trim() {
            "beacon_cardinal" => AtonType::BeaconCardinal,
            "beacon_lateral" => AtonType::BeaconLateral,
            "beacon_isolated_danger" => AtonType::BeaconIsolatedDanger,
            "beacon_safe_water" => AtonType::BeaconSafeWater,
            "beacon_special_purpose" => AtonType::BeaconSpecialPurpose,
            "buoy_cardinal" => AtonType::BuoyCardinal,
            "buoy_lateral" => AtonType::BuoyLateral,
            "buoy_isolated_danger" => AtonType::BuoyIsolatedDanger,
            "buoy_safe_water" => AtonType::BuoySafeWater,
            "buoy_special_purpose" => AtonType::BuoySpecialPurpose,
            "buoy_installation" => AtonType::BuoyInstallation,
            "landmark" => AtonType::Landmark,
            "lighthouse" => AtonType::Lighthouse,
            "light_vessel" => AtonType::LightVessel,
            "light_float" => AtonType::LightFloat,
            "virtual_aton" => AtonType::VirtualAisAid,
            "light" | "light_major" | "light_minor" => AtonType::Light,
            "fog_signal" => AtonType::FogSignal,
            "radar_reflector" => AtonType::RadarReflector,
            "retro_reflector" => AtonType::RetroReflector,
            "topmark" => AtonType::Topmark,
            "daymark" => AtonType::Daymark,
            "radio_station" => AtonType::RadioStation,
            "radar_transponder" => AtonType::RadarTransponderBeacon,
            "silo_tank" => AtonType::SiloTank,
            "environment_observation" => AtonType::EnvironmentObservationEquipment,
            _ => return None,
        };
        Some(found)
    }

    /// Classify a record from its tags, applying the AIS correction
    pub fn classify(record: &AtonRecord) -> Option<AtonType> {
        let aton_type = AtonType::from_key(record.tag(SEAMARK_TYPE)?)?;
        if aton_type == AtonType::RadioStation
            && record
                .tag(RADIO_STATION_CATEGORY)
                .is_some_and(|c| c.trim().eq_ignore_ascii_case(AIS_CATEGORY))
        {
            return Some(AtonType::PhysicalAisAid);
        }
        Some(aton_type)
    }

    /// Structures stand alone and own equipment; everything else is equipment
    pub fn is_structure(&self) -> bool {
        matches!(
            self,
            AtonType::BeaconCardinal
                | AtonType::BeaconLateral
                | AtonType::BeaconIsolatedDanger
                | AtonType::BeaconSafeWater
                | AtonType::BeaconSpecialPurpose
                | AtonType::BuoyCardinal
                | AtonType::BuoyLateral
                | AtonType::BuoyIsolatedDanger
                | AtonType::BuoySafeWater
                | AtonType::BuoySpecialPurpose
                | AtonType::BuoyInstallation
                | AtonType::Landmark
                | AtonType::Lighthouse
                | AtonType::LightVessel
                | AtonType::LightFloat
                | AtonType::VirtualAisAid
        )
    }

    pub fn is_beacon(&self) -> bool {
        matches!(
            self,
            AtonType::BeaconCardinal
                | AtonType::BeaconLateral
                | AtonType::BeaconIsolatedDanger
                | AtonType::BeaconSafeWater
                | AtonType::BeaconSpecialPurpose
        )
    }

    pub fn is_buoy(&self) -> bool {
        matches!(
            self,
            AtonType::BuoyCardinal
                | AtonType::BuoyLateral
                | AtonType::BuoyIsolatedDanger
                | AtonType::BuoySafeWater
                | AtonType::BuoySpecialPurpose
                | AtonType::BuoyInstallation
        )
    }
}
