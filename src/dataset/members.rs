//! Per-variant member shapes of an S-125 dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::*;
use super::geometry::{Envelope, GeometryProperty};

/// A feature name in a given language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureName {
    pub name: String,
    pub language: String,
    pub display_name: bool,
}

/// Free-text information attached to a feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Information {
    pub text: String,
    pub language: String,
}

/// A cross-reference to another member of the same dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Local link of the form `#ID001`
    pub href: String,
    /// External unique code of the referenced aid
    pub title: String,
    pub role: String,
    pub arcrole: String,
}

impl Reference {
    /// The referenced member id without the leading `#`
    pub fn target_id(&self) -> &str {
        self.href.trim_start_matches('#')
    }
}

/// Attributes every AtoN member carries
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemberCommon {
    pub id: String,
    pub bounded_by: Option<Envelope>,
    pub geometry: Option<GeometryProperty>,
    pub feature_names: Vec<FeatureName>,
    pub information: Vec<Information>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub scale_minimum: Option<u64>,
}

/// Attributes shared by every beacon subtype
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BeaconAttributes {
    pub beacon_shape: Option<BeaconShape>,
    pub colours: Vec<Colour>,
    pub colour_patterns: Vec<ColourPattern>,
    pub height: Option<f64>,
    pub marks_navigational_system_of: Option<MarksNavigationalSystemOf>,
    pub nature_of_constructions: Vec<NatureOfConstruction>,
    pub radar_conspicuous: Option<RadarConspicuous>,
    pub visually_conspicuous: Option<VisuallyConspicuous>,
    pub statuses: Vec<Status>,
}

/// Attributes shared by every buoy subtype
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BuoyAttributes {
    pub buoy_shape: Option<BuoyShape>,
    pub colours: Vec<Colour>,
    pub colour_patterns: Vec<ColourPattern>,
    pub height: Option<f64>,
    pub marks_navigational_system_of: Option<MarksNavigationalSystemOf>,
    pub nature_of_constructions: Vec<NatureOfConstruction>,
    pub radar_conspicuous: Option<RadarConspicuous>,
    pub visually_conspicuous: Option<VisuallyConspicuous>,
    pub statuses: Vec<Status>,
}

/// Attributes shared by landmarks, lighthouses and light vessels/floats
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StructureAttributes {
    pub colours: Vec<Colour>,
    pub colour_patterns: Vec<ColourPattern>,
    pub height: Option<f64>,
    pub nature_of_constructions: Vec<NatureOfConstruction>,
    pub radar_conspicuous: Option<RadarConspicuous>,
    pub visually_conspicuous: Option<VisuallyConspicuous>,
    pub statuses: Vec<Status>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconCardinal {
    #[serde(flatten)]
    pub common: MemberCommon,
    #[serde(flatten)]
    pub beacon: BeaconAttributes,
    pub category_of_cardinal_mark: Option<CategoryOfCardinalMark>,
    pub children: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconLateral {
    #[serde(flatten)]
    pub common: MemberCommon,
    #[serde(flatten)]
    pub beacon: BeaconAttributes,
    pub category_of_lateral_mark: Option<CategoryOfLateralMark>,
    pub children: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconIsolatedDanger {
    #[serde(flatten)]
    pub common: MemberCommon,
    #[serde(flatten)]
    pub beacon: BeaconAttributes,
    pub children: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconSafeWater {
    #[serde(flatten)]
    pub common: MemberCommon,
    #[serde(flatten)]
    pub beacon: BeaconAttributes,
    pub children: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconSpecialPurpose {
    #[serde(flatten)]
    pub common: MemberCommon,
    #[serde(flatten)]
    pub beacon: BeaconAttributes,
    pub categories_of_special_purpose_mark: Vec<CategoryOfSpecialPurposeMark>,
    pub children: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuoyCardinal {
    #[serde(flatten)]
    pub common: MemberCommon,
    #[serde(flatten)]
    pub buoy: BuoyAttributes,
    pub category_of_cardinal_mark: Option<CategoryOfCardinalMark>,
    pub children: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuoyLateral {
    #[serde(flatten)]
    pub common: MemberCommon,
    #[serde(flatten)]
    pub buoy: BuoyAttributes,
    pub category_of_lateral_mark: Option<CategoryOfLateralMark>,
    pub children: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuoyIsolatedDanger {
    #[serde(flatten)]
    pub common: MemberCommon,
    #[serde(flatten)]
    pub buoy: BuoyAttributes,
    pub children: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuoySafeWater {
    #[serde(flatten)]
    pub common: MemberCommon,
    #[serde(flatten)]
    pub buoy: BuoyAttributes,
    pub children: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuoySpecialPurpose {
    #[serde(flatten)]
    pub common: MemberCommon,
    #[serde(flatten)]
    pub buoy: BuoyAttributes,
    pub categories_of_special_purpose_mark: Vec<CategoryOfSpecialPurposeMark>,
    pub children: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuoyInstallation {
    #[serde(flatten)]
    pub common: MemberCommon,
    #[serde(flatten)]
    pub buoy: BuoyAttributes,
    pub category_of_installation_buoy: Option<CategoryOfInstallationBuoy>,
    pub children: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    #[serde(flatten)]
    pub common: MemberCommon,
    #[serde(flatten)]
    pub structure: StructureAttributes,
    pub categories_of_landmark: Vec<CategoryOfLandmark>,
    pub functions: Vec<Function>,
    pub building_shape: Option<BuildingShape>,
    pub children: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lighthouse {
    #[serde(flatten)]
    pub common: MemberCommon,
    #[serde(flatten)]
    pub structure: StructureAttributes,
    pub children: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightVessel {
    #[serde(flatten)]
    pub common: MemberCommon,
    #[serde(flatten)]
    pub structure: StructureAttributes,
    pub children: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightFloat {
    #[serde(flatten)]
    pub common: MemberCommon,
    #[serde(flatten)]
    pub structure: StructureAttributes,
    pub children: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualAisAid {
    #[serde(flatten)]
    pub common: MemberCommon,
    pub mmsi_code: Option<String>,
    pub estimated_range_of_transmission: Option<u32>,
    pub virtual_ais_aid_to_navigation_type: Option<VirtualAisAidToNavigationType>,
    pub statuses: Vec<Status>,
    pub children: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    #[serde(flatten)]
    pub common: MemberCommon,
    pub categories_of_light: Vec<CategoryOfLight>,
    pub colours: Vec<Colour>,
    pub light_characteristic: Option<LightCharacteristic>,
    pub signal_group: Option<String>,
    pub signal_period: Option<f64>,
    pub value_of_nominal_range: Option<f64>,
    pub height: Option<f64>,
    pub orientation: Option<f64>,
    pub sector_limit_one: Option<f64>,
    pub sector_limit_two: Option<f64>,
    pub multiplicity_of_lights: u32,
    pub exhibition_condition_of_light: Option<ExhibitionConditionOfLight>,
    pub marks_navigational_system_of: Option<MarksNavigationalSystemOf>,
    pub statuses: Vec<Status>,
    pub parent: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FogSignal {
    #[serde(flatten)]
    pub common: MemberCommon,
    pub category_of_fog_signal: Option<CategoryOfFogSignal>,
    pub signal_group: Option<String>,
    pub signal_period: Option<f64>,
    pub value_of_maximum_range: Option<f64>,
    pub statuses: Vec<Status>,
    pub parent: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarReflector {
    #[serde(flatten)]
    pub common: MemberCommon,
    pub height: Option<f64>,
    pub statuses: Vec<Status>,
    pub parent: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetroReflector {
    #[serde(flatten)]
    pub common: MemberCommon,
    pub colours: Vec<Colour>,
    pub colour_patterns: Vec<ColourPattern>,
    pub marks_navigational_system_of: Option<MarksNavigationalSystemOf>,
    pub statuses: Vec<Status>,
    pub parent: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topmark {
    #[serde(flatten)]
    pub common: MemberCommon,
    pub topmark_daymark_shape: Option<TopmarkDaymarkShape>,
    pub colours: Vec<Colour>,
    pub colour_patterns: Vec<ColourPattern>,
    pub height: Option<f64>,
    pub statuses: Vec<Status>,
    pub parent: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Daymark {
    #[serde(flatten)]
    pub common: MemberCommon,
    pub topmark_daymark_shape: Option<TopmarkDaymarkShape>,
    pub colours: Vec<Colour>,
    pub colour_patterns: Vec<ColourPattern>,
    pub height: Option<f64>,
    pub nature_of_constructions: Vec<NatureOfConstruction>,
    pub statuses: Vec<Status>,
    pub parent: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioStation {
    #[serde(flatten)]
    pub common: MemberCommon,
    pub categories_of_radio_station: Vec<CategoryOfRadioStation>,
    pub estimated_range_of_transmission: Option<u32>,
    pub statuses: Vec<Status>,
    pub parent: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalAisAid {
    #[serde(flatten)]
    pub common: MemberCommon,
    pub mmsi_code: Option<String>,
    pub estimated_range_of_transmission: Option<u32>,
    pub statuses: Vec<Status>,
    pub parent: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarTransponderBeacon {
    #[serde(flatten)]
    pub common: MemberCommon,
    pub category_of_radar_transponder_beacon: Option<CategoryOfRadarTransponderBeacon>,
    pub signal_group: Option<String>,
    pub value_of_maximum_range: Option<f64>,
    pub statuses: Vec<Status>,
    pub parent: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiloTank {
    #[serde(flatten)]
    pub common: MemberCommon,
    pub category_of_silo_tank: Option<CategoryOfSiloTank>,
    pub building_shape: Option<BuildingShape>,
    pub colours: Vec<Colour>,
    pub colour_patterns: Vec<ColourPattern>,
    pub height: Option<f64>,
    pub nature_of_constructions: Vec<NatureOfConstruction>,
    pub radar_conspicuous: Option<RadarConspicuous>,
    pub visually_conspicuous: Option<VisuallyConspicuous>,
    pub statuses: Vec<Status>,
    pub parent: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentObservationEquipment {
    #[serde(flatten)]
    pub common: MemberCommon,
    pub type_of_equipment: Option<String>,
    pub height: Option<f64>,
    pub statuses: Vec<Status>,
    pub parent: Option<Reference>,
}

/// Groups several aids into one logical aid, e.g. the lights of a leading line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtonAggregation {
    pub id: String,
    pub category_of_aggregation: Option<CategoryOfAggregation>,
    pub peers: Vec<Reference>,
}

/// Relates separate aids, e.g. the marks of one channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtonAssociation {
    pub id: String,
    pub category_of_association: Option<CategoryOfAssociation>,
    pub peers: Vec<Reference>,
}
