//! Population routines for structure variants. Every structure carries a
//! `child` reference for each piece of equipment mounted on it.

use super::{populate_common, TagKeys};
use crate::constants::SEAMARK_STATUS;
use crate::dataset::enums::*;
use crate::dataset::*;
use crate::domain::{AtonRecord, AtonType};
use crate::pipeline::processing::relations::resolve_children;
use crate::pipeline::processing::tags::TagLookup;
use crate::pipeline::TransformContext;

fn beacon_attributes(tags: &TagLookup<'_>, keys: &TagKeys) -> BeaconAttributes {
    BeaconAttributes {
        beacon_shape: tags.parse_with(&keys.seamark("shape"), BeaconShape::parse),
        colours: tags.list_with(&keys.seamark("colour"), Colour::parse),
        colour_patterns: tags.list_with(&keys.seamark("colour_pattern"), ColourPattern::parse),
        height: tags.number(&keys.standards("height")),
        marks_navigational_system_of: tags
            .parse_with(&keys.seamark("system"), MarksNavigationalSystemOf::parse),
        nature_of_constructions: tags
            .list_with(&keys.standards("construction"), NatureOfConstruction::parse),
        radar_conspicuous: tags.parse_with(&keys.standards("radar_conspicuous"), RadarConspicuous::parse),
        visually_conspicuous: tags
            .parse_with(&keys.standards("visually_conspicuous"), VisuallyConspicuous::parse),
        statuses: tags.list_with(SEAMARK_STATUS, Status::parse),
    }
}

fn buoy_attributes(tags: &TagLookup<'_>, keys: &TagKeys) -> BuoyAttributes {
    BuoyAttributes {
        buoy_shape: tags.parse_with(&keys.seamark("shape"), BuoyShape::parse),
        colours: tags.list_with(&keys.seamark("colour"), Colour::parse),
        colour_patterns: tags.list_with(&keys.seamark("colour_pattern"), ColourPattern::parse),
        height: tags.number(&keys.standards("height")),
        marks_navigational_system_of: tags
            .parse_with(&keys.seamark("system"), MarksNavigationalSystemOf::parse),
        nature_of_constructions: tags
            .list_with(&keys.standards("construction"), NatureOfConstruction::parse),
        radar_conspicuous: tags.parse_with(&keys.standards("radar_conspicuous"), RadarConspicuous::parse),
        visually_conspicuous: tags
            .parse_with(&keys.standards("visually_conspicuous"), VisuallyConspicuous::parse),
        statuses: tags.list_with(SEAMARK_STATUS, Status::parse),
    }
}

fn structure_attributes(tags: &TagLookup<'_>, keys: &TagKeys) -> StructureAttributes {
    StructureAttributes {
        colours: tags.list_with(&keys.seamark("colour"), Colour::parse),
        colour_patterns: tags.list_with(&keys.seamark("colour_pattern"), ColourPattern::parse),
        height: tags.number(&keys.standards("height")),
        nature_of_constructions: tags
            .list_with(&keys.standards("construction"), NatureOfConstruction::parse),
        radar_conspicuous: tags.parse_with(&keys.standards("radar_conspicuous"), RadarConspicuous::parse),
        visually_conspicuous: tags
            .parse_with(&keys.standards("visually_conspicuous"), VisuallyConspicuous::parse),
        statuses: tags.list_with(SEAMARK_STATUS, Status::parse),
    }
}

pub fn beacon_cardinal(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> BeaconCardinal {
    let keys = TagKeys::new(AtonType::BeaconCardinal, ctx.settings);
    let tags = TagLookup::new(record);
    BeaconCardinal {
        common: populate_common(ctx, record),
        beacon: beacon_attributes(&tags, &keys),
        category_of_cardinal_mark: tags.parse_with(&keys.seamark("category"), CategoryOfCardinalMark::parse),
        children: resolve_children(ctx, record),
    }
}

pub fn beacon_lateral(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> BeaconLateral {
    let keys = TagKeys::new(AtonType::BeaconLateral, ctx.settings);
    let tags = TagLookup::new(record);
    BeaconLateral {
        common: populate_common(ctx, record),
        beacon: beacon_attributes(&tags, &keys),
        category_of_lateral_mark: tags.parse_with(&keys.seamark("category"), CategoryOfLateralMark::parse),
        children: resolve_children(ctx, record),
    }
}

pub fn beacon_isolated_danger(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> BeaconIsolatedDanger {
    let keys = TagKeys::new(AtonType::BeaconIsolatedDanger, ctx.settings);
    let tags = TagLookup::new(record);
    BeaconIsolatedDanger {
        common: populate_common(ctx, record),
        beacon: beacon_attributes(&tags, &keys),
        children: resolve_children(ctx, record),
    }
}

pub fn beacon_safe_water(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> BeaconSafeWater {
    let keys = TagKeys::new(AtonType::BeaconSafeWater, ctx.settings);
    let tags = TagLookup::new(record);
    BeaconSafeWater {
        common: populate_common(ctx, record),
        beacon: beacon_attributes(&tags, &keys),
        children: resolve_children(ctx, record),
    }
}

pub fn beacon_special_purpose(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> BeaconSpecialPurpose {
    let keys = TagKeys::new(AtonType::BeaconSpecialPurpose, ctx.settings);
    let tags = TagLookup::new(record);
    BeaconSpecialPurpose {
        common: populate_common(ctx, record),
        beacon: beacon_attributes(&tags, &keys),
        categories_of_special_purpose_mark: tags
            .list_with(&keys.seamark("category"), CategoryOfSpecialPurposeMark::parse),
        children: resolve_children(ctx, record),
    }
}

pub fn buoy_cardinal(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> BuoyCardinal {
    let keys = TagKeys::new(AtonType::BuoyCardinal, ctx.settings);
    let tags = TagLookup::new(record);
    BuoyCardinal {
        common: populate_common(ctx, record),
        buoy: buoy_attributes(&tags, &keys),
        category_of_cardinal_mark: tags.parse_with(&keys.seamark("category"), CategoryOfCardinalMark::parse),
        children: resolve_children(ctx, record),
    }
}

pub fn buoy_lateral(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> BuoyLateral {
    let keys = TagKeys::new(AtonType::BuoyLateral, ctx.settings);
    let tags = TagLookup::new(record);
    BuoyLateral {
        common: populate_common(ctx, record),
        buoy: buoy_attributes(&tags, &keys),
        category_of_lateral_mark: tags.parse_with(&keys.seamark("category"), CategoryOfLateralMark::parse),
        children: resolve_children(ctx, record),
    }
}

pub fn buoy_isolated_danger(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> BuoyIsolatedDanger {
    let keys = TagKeys::new(AtonType::BuoyIsolatedDanger, ctx.settings);
    let tags = TagLookup::new(record);
    BuoyIsolatedDanger {
        common: populate_common(ctx, record),
        buoy: buoy_attributes(&tags, &keys),
        children: resolve_children(ctx, record),
    }
}

pub fn buoy_safe_water(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> BuoySafeWater {
    let keys = TagKeys::new(AtonType::BuoySafeWater, ctx.settings);
    let tags = TagLookup::new(record);
    BuoySafeWater {
        common: populate_common(ctx, record),
        buoy: buoy_attributes(&tags, &keys),
        children: resolve_children(ctx, record),
    }
}

pub fn buoy_special_purpose(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> BuoySpecialPurpose {
    let keys = TagKeys::new(AtonType::BuoySpecialPurpose, ctx.settings);
    let tags = TagLookup::new(record);
    BuoySpecialPurpose {
        common: populate_common(ctx, record),
        buoy: buoy_attributes(&tags, &keys),
        categories_of_special_purpose_mark: tags
            .list_with(&keys.seamark("category"), CategoryOfSpecialPurposeMark::parse),
        children: resolve_children(ctx, record),
    }
}

pub fn buoy_installation(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> BuoyInstallation {
    let keys = TagKeys::new(AtonType::BuoyInstallation, ctx.settings);
    let tags = TagLookup::new(record);
    BuoyInstallation {
        common: populate_common(ctx, record),
        buoy: buoy_attributes(&tags, &keys),
        category_of_installation_buoy: tags
            .parse_with(&keys.seamark("category"), CategoryOfInstallationBuoy::parse),
        children: resolve_children(ctx, record),
    }
}

pub fn landmark(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> Landmark {
    let keys = TagKeys::new(AtonType::Landmark, ctx.settings);
    let tags = TagLookup::new(record);
    Landmark {
        common: populate_common(ctx, record),
        structure: structure_attributes(&tags, &keys),
        categories_of_landmark: tags.list_with(&keys.seamark("category"), CategoryOfLandmark::parse),
        functions: tags.list_with(&keys.seamark("function"), Function::parse),
        building_shape: tags.parse_with(&keys.standards("building_shape"), BuildingShape::parse),
        children: resolve_children(ctx, record),
    }
}

pub fn lighthouse(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> Lighthouse {
    let keys = TagKeys::new(AtonType::Lighthouse, ctx.settings);
    let tags = TagLookup::new(record);
    Lighthouse {
        common: populate_common(ctx, record),
        structure: structure_attributes(&tags, &keys),
        children: resolve_children(ctx, record),
    }
}

pub fn light_vessel(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> LightVessel {
    let keys = TagKeys::new(AtonType::LightVessel, ctx.settings);
    let tags = TagLookup::new(record);
    LightVessel {
        common: populate_common(ctx, record),
        structure: structure_attributes(&tags, &keys),
        children: resolve_children(ctx, record),
    }
}

pub fn light_float(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> LightFloat {
    let keys = TagKeys::new(AtonType::LightFloat, ctx.settings);
    let tags = TagLookup::new(record);
    LightFloat {
        common: populate_common(ctx, record),
        structure: structure_attributes(&tags, &keys),
        children: resolve_children(ctx, record),
    }
}

pub fn virtual_ais_aid(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> VirtualAisAid {
    let keys = TagKeys::new(AtonType::VirtualAisAid, ctx.settings);
    let tags = TagLookup::new(record);
    VirtualAisAid {
        common: populate_common(ctx, record),
        mmsi_code: tags.string(&keys.seamark("mmsi")),
        estimated_range_of_transmission: tags.number(&keys.seamark("estimated_range")),
        virtual_ais_aid_to_navigation_type: tags
            .parse_with(&keys.seamark("category"), VirtualAisAidToNavigationType::parse),
        statuses: tags.list_with(SEAMARK_STATUS, Status::parse),
        children: resolve_children(ctx, record),
    }
}
