//! Target-side data shapes: the S-125 dataset produced by one transformation.

use serde::{Deserialize, Serialize};

pub mod enums;
pub mod geometry;
pub mod members;

pub use geometry::{CurveProperty, Envelope, GeometryProperty, PointProperty, SurfaceProperty};
pub use members::*;

/// Caller-supplied dataset metadata, copied verbatim into the dataset
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetInfo {
    pub dataset_id: String,
    pub encoding_specification: String,
    pub encoding_specification_edition: String,
    pub product_identifier: String,
    pub product_edition: String,
    pub application_profile: String,
    pub agency: String,
    pub title: String,
    pub reference_date: Option<chrono::NaiveDate>,
    pub language: String,
    pub abstract_text: String,
}

/// Dataset identification block of the output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetIdentification {
    pub encoding_specification: String,
    pub encoding_specification_edition: String,
    pub product_identifier: String,
    pub product_edition: String,
    pub application_profile: String,
    pub dataset_file_identifier: String,
    pub producing_agency: String,
    pub dataset_title: String,
    pub dataset_reference_date: Option<chrono::NaiveDate>,
    pub dataset_language: String,
    pub dataset_abstract: String,
}

impl From<&DatasetInfo> for DatasetIdentification {
    fn from(info: &DatasetInfo) -> Self {
        Self {
            encoding_specification: info.encoding_specification.clone(),
            encoding_specification_edition: info.encoding_specification_edition.clone(),
            product_identifier: info.product_identifier.clone(),
            product_edition: info.product_edition.clone(),
            application_profile: info.application_profile.clone(),
            dataset_file_identifier: info.dataset_id.clone(),
            producing_agency: info.agency.clone(),
            dataset_title: info.title.clone(),
            dataset_reference_date: info.reference_date,
            dataset_language: info.language.clone(),
            dataset_abstract: info.abstract_text.clone(),
        }
    }
}

/// One member of the dataset: an AtoN feature or a peer link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "member_type")]
pub enum Member {
    BeaconCardinal(BeaconCardinal),
    BeaconLateral(BeaconLateral),
    BeaconIsolatedDanger(BeaconIsolatedDanger),
    BeaconSafeWater(BeaconSafeWater),
    BeaconSpecialPurpose(BeaconSpecialPurpose),
    BuoyCardinal(BuoyCardinal),
    BuoyLateral(BuoyLateral),
    BuoyIsolatedDanger(BuoyIsolatedDanger),
    BuoySafeWater(BuoySafeWater),
    BuoySpecialPurpose(BuoySpecialPurpose),
    BuoyInstallation(BuoyInstallation),
    Landmark(Landmark),
    Lighthouse(Lighthouse),
    LightVessel(LightVessel),
    LightFloat(LightFloat),
    VirtualAisAid(VirtualAisAid),
    Light(Light),
    FogSignal(FogSignal),
    RadarReflector(RadarReflector),
    RetroReflector(RetroReflector),
    Topmark(Topmark),
    Daymark(Daymark),
    RadioStation(RadioStation),
    PhysicalAisAid(PhysicalAisAid),
    RadarTransponderBeacon(RadarTransponderBeacon),
    SiloTank(SiloTank),
    EnvironmentObservationEquipment(EnvironmentObservationEquipment),
    Aggregation(AtonAggregation),
    Association(AtonAssociation),
}

impl Member {
    /// The member's allocated identifier
    pub fn id(&self) -> &str {
        match self {
            Member::Aggregation(m) => &m.id,
            Member::Association(m) => &m.id,
            other => other
                .common()
                .map(|c| c.id.as_str())
                .unwrap_or_default(),
        }
    }

    /// Short name of the variant, used in logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Member::BeaconCardinal(_) => "BeaconCardinal",
            Member::BeaconLateral(_) => "BeaconLateral",
            Member::BeaconIsolatedDanger(_) => "BeaconIsolatedDanger",
            Member::BeaconSafeWater(_) => "BeaconSafeWater",
            Member::BeaconSpecialPurpose(_) => "BeaconSpecialPurpose",
            Member::BuoyCardinal(_) => "BuoyCardinal",
            Member::BuoyLateral(_) => "BuoyLateral",
            Member::BuoyIsolatedDanger(_) => "BuoyIsolatedDanger",
            Member::BuoySafeWater(_) => "BuoySafeWater",
            Member::BuoySpecialPurpose(_) => "BuoySpecialPurpose",
            Member::BuoyInstallation(_) => "BuoyInstallation",
            Member::Landmark(_) => "Landmark",
            Member::Lighthouse(_) => "Lighthouse",
            Member::LightVessel(_) => "LightVessel",
            Member::LightFloat(_) => "LightFloat",
            Member::VirtualAisAid(_) => "VirtualAisAid",
            Member::Light(_) => "Light",
            Member::FogSignal(_) => "FogSignal",
            Member::RadarReflector(_) => "RadarReflector",
            Member::RetroReflector(_) => "RetroReflector",
            Member::Topmark(_) => "Topmark",
            Member::Daymark(_) => "Daymark",
            Member::RadioStation(_) => "RadioStation",
            Member::PhysicalAisAid(_) => "PhysicalAisAid",
            Member::RadarTransponderBeacon(_) => "RadarTransponderBeacon",
            Member::SiloTank(_) => "SiloTank",
            Member::EnvironmentObservationEquipment(_) => "EnvironmentObservationEquipment",
            Member::Aggregation(_) => "Aggregation",
            Member::Association(_) => "Association",
        }
    }

    /// Common attributes, `None` for link members
    pub fn common(&self) -> Option<&MemberCommon> {
        let common = match self {
            Member::BeaconCardinal(m) => &m.common,
            Member::BeaconLateral(m) => &m.common,
            Member::BeaconIsolatedDanger(m) => &m.common,
            Member::BeaconSafeWater(m) => &m.common,
            Member::BeaconSpecialPurpose(m) => &m.common,
            Member::BuoyCardinal(m) => &m.common,
            Member::BuoyLateral(m) => &m.common,
            Member::BuoyIsolatedDanger(m) => &m.common,
            Member::BuoySafeWater(m) => &m.common,
            Member::BuoySpecialPurpose(m) => &m.common,
            Member::BuoyInstallation(m) => &m.common,
            Member::Landmark(m) => &m.common,
            Member::Lighthouse(m) => &m.common,
            Member::LightVessel(m) => &m.common,
            Member::LightFloat(m) => &m.common,
            Member::VirtualAisAid(m) => &m.common,
            Member::Light(m) => &m.common,
            Member::FogSignal(m) => &m.common,
            Member::RadarReflector(m) => &m.common,
            Member::RetroReflector(m) => &m.common,
            Member::Topmark(m) => &m.common,
            Member::Daymark(m) => &m.common,
            Member::RadioStation(m) => &m.common,
            Member::PhysicalAisAid(m) => &m.common,
            Member::RadarTransponderBeacon(m) => &m.common,
            Member::SiloTank(m) => &m.common,
            Member::EnvironmentObservationEquipment(m) => &m.common,
            Member::Aggregation(_) | Member::Association(_) => return None,
        };
        Some(common)
    }

    /// Child references of a structure member, empty for everything else
    pub fn children(&self) -> &[Reference] {
        match self {
            Member::BeaconCardinal(m) => &m.children,
            Member::BeaconLateral(m) => &m.children,
            Member::BeaconIsolatedDanger(m) => &m.children,
            Member::BeaconSafeWater(m) => &m.children,
            Member::BeaconSpecialPurpose(m) => &m.children,
            Member::BuoyCardinal(m) => &m.children,
            Member::BuoyLateral(m) => &m.children,
            Member::BuoyIsolatedDanger(m) => &m.children,
            Member::BuoySafeWater(m) => &m.children,
            Member::BuoySpecialPurpose(m) => &m.children,
            Member::BuoyInstallation(m) => &m.children,
            Member::Landmark(m) => &m.children,
            Member::Lighthouse(m) => &m.children,
            Member::LightVessel(m) => &m.children,
            Member::LightFloat(m) => &m.children,
            Member::VirtualAisAid(m) => &m.children,
            _ => &[],
        }
    }

    /// Parent reference of an equipment member
    pub fn parent(&self) -> Option<&Reference> {
        match self {
            Member::Light(m) => m.parent.as_ref(),
            Member::FogSignal(m) => m.parent.as_ref(),
            Member::RadarReflector(m) => m.parent.as_ref(),
            Member::RetroReflector(m) => m.parent.as_ref(),
            Member::Topmark(m) => m.parent.as_ref(),
            Member::Daymark(m) => m.parent.as_ref(),
            Member::RadioStation(m) => m.parent.as_ref(),
            Member::PhysicalAisAid(m) => m.parent.as_ref(),
            Member::RadarTransponderBeacon(m) => m.parent.as_ref(),
            Member::SiloTank(m) => m.parent.as_ref(),
            Member::EnvironmentObservationEquipment(m) => m.parent.as_ref(),
            _ => None,
        }
    }
}

/// The result of one transformation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,
    pub bounded_by: Option<Envelope>,
    pub identification: DatasetIdentification,
    pub members: Vec<Member>,
}

impl Dataset {
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id() == id)
    }

    /// Child and parent reference targets that name no member of this dataset
    pub fn unresolved_references(&self) -> Vec<String> {
        let ids: std::collections::HashSet<&str> = self.members.iter().map(Member::id).collect();
        self.members
            .iter()
            .flat_map(|m| m.children().iter().chain(m.parent()))
            .map(Reference::target_id)
            .filter(|target| !ids.contains(target))
            .map(str::to_string)
            .collect()
    }
}
