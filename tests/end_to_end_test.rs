use anyhow::Result;
use aton_s125::dataset::enums::{
    BeaconShape, CategoryOfCardinalMark, Colour, ColourPattern, MarksNavigationalSystemOf,
    NatureOfConstruction, Status,
};
use aton_s125::dataset::GeometryProperty;
use aton_s125::{AtonRecord, DatasetInfo, Member, S125Engine};

fn dataset_info() -> DatasetInfo {
    DatasetInfo {
        dataset_id: "GB-ATON-0001".to_string(),
        encoding_specification: "S-100 Part 10b".to_string(),
        encoding_specification_edition: "1.0".to_string(),
        product_identifier: "S-125".to_string(),
        product_edition: "1.0.0".to_string(),
        application_profile: "test".to_string(),
        agency: "GB".to_string(),
        title: "Test Dataset".to_string(),
        reference_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
        language: "eng".to_string(),
        abstract_text: "Beacon with AIS equipment".to_string(),
    }
}

fn cardinal_beacon_with_ais() -> Result<AtonRecord> {
    let ais = AtonRecord::new(2, "GB0002", 1.594, 50.954).with_default_tags(&[
        "seamark:type", "radio_station",
        "seamark:radio_station:category", "ais",
        "seamark:radio_station:mmsi", "123123123",
        "seamark:radio_station:estimated_range", "3",
        "seamark:status", "permanent",
    ])?;

    let beacon = AtonRecord::new(1, "GB0001", 1.594, 50.954)
        .with_default_tags(&[
            "seamark:type", "beacon_cardinal",
            "seamark:beacon_cardinal:category", "north",
            "seamark:beacon_cardinal:shape", "stake",
            "seamark:beacon_cardinal:colour", "red",
            "seamark:beacon_cardinal:colour_pattern", "horizontal",
            "s125:aidsToNavigation:generic_beacon:height", "3.0",
            "seamark:beacon_cardinal:system", "iala-a",
            "s125:aidsToNavigation:generic_beacon:construction", "concreted",
            "seamark:status", "permanent",
        ])?
        .with_child(ais);

    Ok(beacon)
}

#[test]
fn test_cardinal_beacon_with_ais_child() -> Result<()> {
    let records = vec![cardinal_beacon_with_ais()?];
    let dataset = S125Engine::default().package_to_dataset(&dataset_info(), &records);

    assert_eq!(dataset.members.len(), 2);
    assert_eq!(dataset.id, "GB-ATON-0001");

    let Some(Member::BeaconCardinal(beacon)) = dataset.member("ID001") else {
        panic!("expected a cardinal beacon at ID001");
    };
    assert_eq!(beacon.category_of_cardinal_mark, Some(CategoryOfCardinalMark::NorthCardinalMark));
    assert_eq!(beacon.beacon.beacon_shape, Some(BeaconShape::StakePolePerchPost));
    assert_eq!(beacon.beacon.colours, vec![Colour::Red]);
    assert_eq!(beacon.beacon.colour_patterns, vec![ColourPattern::HorizontalStripes]);
    assert_eq!(beacon.beacon.height, Some(3.0));
    assert_eq!(beacon.beacon.marks_navigational_system_of, Some(MarksNavigationalSystemOf::IalaA));
    assert_eq!(beacon.beacon.nature_of_constructions, vec![NatureOfConstruction::Concreted]);
    assert_eq!(beacon.beacon.statuses, vec![Status::Permanent]);
    assert_eq!(beacon.children.len(), 1);
    assert_eq!(beacon.children[0].target_id(), "ID002");

    let Some(Member::PhysicalAisAid(ais)) = dataset.member("ID002") else {
        panic!("expected a physical AIS aid at ID002");
    };
    assert_eq!(ais.mmsi_code.as_deref(), Some("123123123"));
    assert_eq!(ais.estimated_range_of_transmission, Some(3));
    assert_eq!(ais.statuses, vec![Status::Permanent]);

    let parent = ais.parent.as_ref().expect("AIS aid should reference its beacon");
    assert_eq!(parent.target_id(), "ID001");
    assert_eq!(parent.href, "#ID001");
    assert_eq!(parent.title, "GB0001");
    assert!(dataset.unresolved_references().is_empty());

    Ok(())
}

#[test]
fn test_identification_copied_verbatim() -> Result<()> {
    let info = dataset_info();
    let dataset = S125Engine::default().package_to_dataset(&info, &[cardinal_beacon_with_ais()?]);

    let identification = &dataset.identification;
    assert_eq!(identification.dataset_file_identifier, info.dataset_id);
    assert_eq!(identification.producing_agency, info.agency);
    assert_eq!(identification.product_identifier, "S-125");
    assert_eq!(identification.dataset_title, "Test Dataset");
    assert_eq!(identification.dataset_reference_date, info.reference_date);
    assert_eq!(identification.dataset_abstract, info.abstract_text);
    Ok(())
}

#[test]
fn test_members_are_points_in_default_srs() -> Result<()> {
    let dataset = S125Engine::default().package_to_dataset(&dataset_info(), &[cardinal_beacon_with_ais()?]);

    for member in &dataset.members {
        let common = member.common().expect("AtoN members carry common attributes");
        match common.geometry.as_ref() {
            Some(GeometryProperty::Point(point)) => {
                assert_eq!(point.pos, [1.594, 50.954]);
                assert_eq!(point.srs_name, "EPSG:4326");
                assert_ne!(point.id, common.id);
            }
            other => panic!("expected a point geometry, got {:?}", other),
        }
    }
    Ok(())
}

#[test]
fn test_dataset_serializes_to_json() -> Result<()> {
    let dataset = S125Engine::default().package_to_dataset(&dataset_info(), &[cardinal_beacon_with_ais()?]);

    let value = serde_json::to_value(&dataset)?;
    assert_eq!(value["members"][0]["member_type"], "BeaconCardinal");
    assert_eq!(value["members"][0]["id"], "ID001");
    assert_eq!(value["members"][1]["member_type"], "PhysicalAisAid");
    assert_eq!(value["members"][1]["parent"]["href"], "#ID001");
    Ok(())
}
