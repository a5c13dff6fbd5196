//! Population routines for equipment variants. Equipment points back at the
//! structure it is mounted on through a single `parent` reference.

use super::{populate_common, TagKeys};
use crate::constants::{DEFAULT_LIGHT_MULTIPLICITY, SEAMARK_STATUS};
use crate::dataset::enums::*;
use crate::dataset::*;
use crate::domain::{AtonRecord, AtonType};
use crate::pipeline::processing::relations::resolve_parent;
use crate::pipeline::processing::tags::TagLookup;
use crate::pipeline::TransformContext;

pub fn light(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> Light {
    let keys = TagKeys::new(AtonType::Light, ctx.settings);
    let tags = TagLookup::new(record);
    Light {
        common: populate_common(ctx, record),
        categories_of_light: tags.list_with(&keys.seamark("category"), CategoryOfLight::parse),
        colours: tags.list_with(&keys.seamark("colour"), Colour::parse),
        light_characteristic: tags.parse_with(&keys.seamark("character"), LightCharacteristic::parse),
        signal_group: tags.string(&keys.seamark("group")),
        signal_period: tags.number(&keys.seamark("period")),
        value_of_nominal_range: tags.number(&keys.seamark("range")),
        height: tags.number(&keys.seamark("height")),
        orientation: tags.number(&keys.seamark("orientation")),
        sector_limit_one: tags.number(&keys.seamark("sector_start")),
        sector_limit_two: tags.number(&keys.seamark("sector_end")),
        multiplicity_of_lights: tags
            .number(&keys.seamark("multiple"))
            .unwrap_or(DEFAULT_LIGHT_MULTIPLICITY),
        exhibition_condition_of_light: tags
            .parse_with(&keys.seamark("exhibition"), ExhibitionConditionOfLight::parse),
        marks_navigational_system_of: tags
            .parse_with(&keys.seamark("system"), MarksNavigationalSystemOf::parse),
        statuses: tags.list_with(SEAMARK_STATUS, Status::parse),
        parent: resolve_parent(ctx, record),
    }
}

pub fn fog_signal(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> FogSignal {
    let keys = TagKeys::new(AtonType::FogSignal, ctx.settings);
    let tags = TagLookup::new(record);
    FogSignal {
        common: populate_common(ctx, record),
        category_of_fog_signal: tags.parse_with(&keys.seamark("category"), CategoryOfFogSignal::parse),
        signal_group: tags.string(&keys.seamark("group")),
        signal_period: tags.number(&keys.seamark("period")),
        value_of_maximum_range: tags.number(&keys.seamark("range")),
        statuses: tags.list_with(SEAMARK_STATUS, Status::parse),
        parent: resolve_parent(ctx, record),
    }
}

pub fn radar_reflector(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> RadarReflector {
    let keys = TagKeys::new(AtonType::RadarReflector, ctx.settings);
    let tags = TagLookup::new(record);
    RadarReflector {
        common: populate_common(ctx, record),
        height: tags.number(&keys.standards("height")),
        statuses: tags.list_with(SEAMARK_STATUS, Status::parse),
        parent: resolve_parent(ctx, record),
    }
}

pub fn retro_reflector(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> RetroReflector {
    let keys = TagKeys::new(AtonType::RetroReflector, ctx.settings);
    let tags = TagLookup::new(record);
    RetroReflector {
        common: populate_common(ctx, record),
        colours: tags.list_with(&keys.seamark("colour"), Colour::parse),
        colour_patterns: tags.list_with(&keys.seamark("colour_pattern"), ColourPattern::parse),
        marks_navigational_system_of: tags
            .parse_with(&keys.seamark("system"), MarksNavigationalSystemOf::parse),
        statuses: tags.list_with(SEAMARK_STATUS, Status::parse),
        parent: resolve_parent(ctx, record),
    }
}

pub fn topmark(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> Topmark {
    let keys = TagKeys::new(AtonType::Topmark, ctx.settings);
    let tags = TagLookup::new(record);
    Topmark {
        common: populate_common(ctx, record),
        topmark_daymark_shape: tags.parse_with(&keys.seamark("shape"), TopmarkDaymarkShape::parse),
        colours: tags.list_with(&keys.seamark("colour"), Colour::parse),
        colour_patterns: tags.list_with(&keys.seamark("colour_pattern"), ColourPattern::parse),
        height: tags.number(&keys.standards("height")),
        statuses: tags.list_with(SEAMARK_STATUS, Status::parse),
        parent: resolve_parent(ctx, record),
    }
}

pub fn daymark(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> Daymark {
    let keys = TagKeys::new(AtonType::Daymark, ctx.settings);
    let tags = TagLookup::new(record);
    Daymark {
        common: populate_common(ctx, record),
        topmark_daymark_shape: tags.parse_with(&keys.seamark("shape"), TopmarkDaymarkShape::parse),
        colours: tags.list_with(&keys.seamark("colour"), Colour::parse),
        colour_patterns: tags.list_with(&keys.seamark("colour_pattern"), ColourPattern::parse),
        height: tags.number(&keys.standards("height")),
        nature_of_constructions: tags
            .list_with(&keys.standards("construction"), NatureOfConstruction::parse),
        statuses: tags.list_with(SEAMARK_STATUS, Status::parse),
        parent: resolve_parent(ctx, record),
    }
}

pub fn radio_station(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> RadioStation {
    let keys = TagKeys::new(AtonType::RadioStation, ctx.settings);
    let tags = TagLookup::new(record);
    RadioStation {
        common: populate_common(ctx, record),
        categories_of_radio_station: tags.list_with(&keys.seamark("category"), CategoryOfRadioStation::parse),
        estimated_range_of_transmission: tags.number(&keys.seamark("estimated_range")),
        statuses: tags.list_with(SEAMARK_STATUS, Status::parse),
        parent: resolve_parent(ctx, record),
    }
}

pub fn physical_ais_aid(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> PhysicalAisAid {
    let keys = TagKeys::new(AtonType::PhysicalAisAid, ctx.settings);
    let tags = TagLookup::new(record);
    PhysicalAisAid {
        common: populate_common(ctx, record),
        mmsi_code: tags.string(&keys.seamark("mmsi")),
        estimated_range_of_transmission: tags.number(&keys.seamark("estimated_range")),
        statuses: tags.list_with(SEAMARK_STATUS, Status::parse),
        parent: resolve_parent(ctx, record),
    }
}

pub fn radar_transponder_beacon(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> RadarTransponderBeacon {
    let keys = TagKeys::new(AtonType::RadarTransponderBeacon, ctx.settings);
    let tags = TagLookup::new(record);
    RadarTransponderBeacon {
        common: populate_common(ctx, record),
        category_of_radar_transponder_beacon: tags
            .parse_with(&keys.seamark("category"), CategoryOfRadarTransponderBeacon::parse),
        signal_group: tags.string(&keys.seamark("group")),
        value_of_maximum_range: tags.number(&keys.seamark("range")),
        statuses: tags.list_with(SEAMARK_STATUS, Status::parse),
        parent: resolve_parent(ctx, record),
    }
}

pub fn silo_tank(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> SiloTank {
    let keys = TagKeys::new(AtonType::SiloTank, ctx.settings);
    let tags = TagLookup::new(record);
    SiloTank {
        common: populate_common(ctx, record),
        category_of_silo_tank: tags.parse_with(&keys.seamark("category"), CategoryOfSiloTank::parse),
        building_shape: tags.parse_with(&keys.seamark("shape"), BuildingShape::parse),
        colours: tags.list_with(&keys.seamark("colour"), Colour::parse),
        colour_patterns: tags.list_with(&keys.seamark("colour_pattern"), ColourPattern::parse),
        height: tags.number(&keys.standards("height")),
        nature_of_constructions: tags
            .list_with(&keys.standards("construction"), NatureOfConstruction::parse),
        radar_conspicuous: tags.parse_with(&keys.standards("radar_conspicuous"), RadarConspicuous::parse),
        visually_conspicuous: tags
            .parse_with(&keys.standards("visually_conspicuous"), VisuallyConspicuous::parse),
        statuses: tags.list_with(SEAMARK_STATUS, Status::parse),
        parent: resolve_parent(ctx, record),
    }
}

pub fn environment_observation_equipment(
    ctx: &mut TransformContext<'_>,
    record: &AtonRecord,
) -> EnvironmentObservationEquipment {
    let keys = TagKeys::new(AtonType::EnvironmentObservationEquipment, ctx.settings);
    let tags = TagLookup::new(record);
    EnvironmentObservationEquipment {
        common: populate_common(ctx, record),
        type_of_equipment: tags.string(&keys.standards("type_of_equipment")),
        height: tags.number(&keys.standards("height")),
        statuses: tags.list_with(SEAMARK_STATUS, Status::parse),
        parent: resolve_parent(ctx, record),
    }
}
