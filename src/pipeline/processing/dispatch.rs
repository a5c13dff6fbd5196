//! Type dispatch: select the population routine for a record and emit link
//! members once per link.

use tracing::debug;

use super::populate::{equipment, structures};
use super::relations::resolve_link;
use crate::constants::SEAMARK_TYPE;
use crate::dataset::Member;
use crate::domain::{AtonRecord, AtonType};
use crate::metrics::TransformMetrics;
use crate::pipeline::TransformContext;

/// Build the member for one record.
///
/// Records whose `seamark:type` is missing or not recognized produce no
/// member. That is not an error; the record is skipped.
pub fn generate_member(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> Option<Member> {
    let Some(aton_type) = record.aton_type() else {
        debug!(
            aton_uid = %record.aton_uid,
            seamark_type = ?record.tag(SEAMARK_TYPE),
            "No recognized seamark type, skipping record"
        );
        TransformMetrics::record_dropped();
        return None;
    };

    let member = match aton_type {
        AtonType::BeaconCardinal => Member::BeaconCardinal(structures::beacon_cardinal(ctx, record)),
        AtonType::BeaconLateral => Member::BeaconLateral(structures::beacon_lateral(ctx, record)),
        AtonType::BeaconIsolatedDanger => {
            Member::BeaconIsolatedDanger(structures::beacon_isolated_danger(ctx, record))
        }
        AtonType::BeaconSafeWater => Member::BeaconSafeWater(structures::beacon_safe_water(ctx, record)),
        AtonType::BeaconSpecialPurpose => {
            Member::BeaconSpecialPurpose(structures::beacon_special_purpose(ctx, record))
        }
        AtonType::BuoyCardinal => Member::BuoyCardinal(structures::buoy_cardinal(ctx, record)),
        AtonType::BuoyLateral => Member::BuoyLateral(structures::buoy_lateral(ctx, record)),
        AtonType::BuoyIsolatedDanger => {
            Member::BuoyIsolatedDanger(structures::buoy_isolated_danger(ctx, record))
        }
        AtonType::BuoySafeWater => Member::BuoySafeWater(structures::buoy_safe_water(ctx, record)),
        AtonType::BuoySpecialPurpose => {
            Member::BuoySpecialPurpose(structures::buoy_special_purpose(ctx, record))
        }
        AtonType::BuoyInstallation => Member::BuoyInstallation(structures::buoy_installation(ctx, record)),
        AtonType::Landmark => Member::Landmark(structures::landmark(ctx, record)),
        AtonType::Lighthouse => Member::Lighthouse(structures::lighthouse(ctx, record)),
        AtonType::LightVessel => Member::LightVessel(structures::light_vessel(ctx, record)),
        AtonType::LightFloat => Member::LightFloat(structures::light_float(ctx, record)),
        AtonType::VirtualAisAid => Member::VirtualAisAid(structures::virtual_ais_aid(ctx, record)),
        AtonType::Light => Member::Light(equipment::light(ctx, record)),
        AtonType::FogSignal => Member::FogSignal(equipment::fog_signal(ctx, record)),
        AtonType::RadarReflector => Member::RadarReflector(equipment::radar_reflector(ctx, record)),
        AtonType::RetroReflector => Member::RetroReflector(equipment::retro_reflector(ctx, record)),
        AtonType::Topmark => Member::Topmark(equipment::topmark(ctx, record)),
        AtonType::Daymark => Member::Daymark(equipment::daymark(ctx, record)),
        AtonType::RadioStation => Member::RadioStation(equipment::radio_station(ctx, record)),
        AtonType::PhysicalAisAid => Member::PhysicalAisAid(equipment::physical_ais_aid(ctx, record)),
        AtonType::RadarTransponderBeacon => {
            Member::RadarTransponderBeacon(equipment::radar_transponder_beacon(ctx, record))
        }
        AtonType::SiloTank => Member::SiloTank(equipment::silo_tank(ctx, record)),
        AtonType::EnvironmentObservationEquipment => Member::EnvironmentObservationEquipment(
            equipment::environment_observation_equipment(ctx, record),
        ),
    };

    TransformMetrics::record_member_emitted(member.kind());
    Some(member)
}

/// Emit one member for each link id not seen earlier in this call, marking
/// each id as seen as it is visited
pub fn generate_links(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> Vec<Member> {
    let mut members = Vec::new();
    let mut suppressed = 0;

    for link in &record.links {
        if !ctx.seen_links.insert(link.id) {
            suppressed += 1;
            continue;
        }
        if let Some(member) = resolve_link(ctx, link, link.kind) {
            members.push(member);
        }
    }

    if !members.is_empty() {
        TransformMetrics::record_links_emitted(members.len());
    }
    if suppressed > 0 {
        debug!(aton_uid = %record.aton_uid, suppressed, "Links already emitted");
        TransformMetrics::record_links_suppressed(suppressed);
    }
    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineSettings;
    use crate::domain::{AtonLink, LinkKind, PeerRef};

    fn leading_line(id: i64) -> AtonLink {
        AtonLink {
            id,
            kind: LinkKind::Aggregation,
            category: Some("leading_line".to_string()),
            peers: vec![PeerRef::new(1, "GB0001"), PeerRef::new(2, "GB0002")],
        }
    }

    #[test]
    fn test_unknown_or_missing_type_is_skipped() {
        let settings = EngineSettings::default();
        let mut ctx = TransformContext::new(&settings, 2);

        let untyped = AtonRecord::new(1, "GB0001", 0.0, 0.0);
        assert!(generate_member(&mut ctx, &untyped).is_none());

        let unknown = AtonRecord::new(2, "GB0002", 0.0, 0.0).with_tag("seamark:type", "harbour");
        assert!(generate_member(&mut ctx, &unknown).is_none());
    }

    #[test]
    fn test_ais_correction_selects_physical_aid() {
        let settings = EngineSettings::default();
        let mut ctx = TransformContext::new(&settings, 2);

        let ais = AtonRecord::new(1, "GB0001", 0.0, 0.0)
            .with_tag("seamark:type", "radio_station")
            .with_tag("seamark:radio_station:category", "ais");
        assert_eq!(generate_member(&mut ctx, &ais).map(|m| m.kind()), Some("PhysicalAisAid"));

        let radio = AtonRecord::new(2, "GB0002", 0.0, 0.0)
            .with_tag("seamark:type", "radio_station")
            .with_tag("seamark:radio_station:category", "radio_direction_finding");
        assert_eq!(generate_member(&mut ctx, &radio).map(|m| m.kind()), Some("RadioStation"));
    }

    #[test]
    fn test_every_type_key_dispatches_to_its_variant() {
        let settings = EngineSettings::default();
        let mut ctx = TransformContext::new(&settings, AtonType::ALL.len());

        for (n, aton_type) in AtonType::ALL.iter().enumerate() {
            if *aton_type == AtonType::PhysicalAisAid {
                continue;
            }
            let record = AtonRecord::new(n as i64, format!("GB{n:04}"), 0.0, 0.0)
                .with_tag("seamark:type", aton_type.key());
            let member = generate_member(&mut ctx, &record).unwrap();
            assert_eq!(member.kind(), format!("{:?}", aton_type));
        }
    }

    #[test]
    fn test_member_id_matches_allocator() {
        let settings = EngineSettings::default();
        let mut ctx = TransformContext::new(&settings, 1);
        let record = AtonRecord::new(42, "GB0042", 0.0, 0.0).with_tag("seamark:type", "lighthouse");

        let member = generate_member(&mut ctx, &record).unwrap();
        assert_eq!(Some(member.id()), ctx.ids.lookup(42));
    }

    #[test]
    fn test_shared_link_emitted_once() {
        let settings = EngineSettings::default();
        let mut ctx = TransformContext::new(&settings, 2);
        let first = AtonRecord::new(1, "GB0001", 0.0, 0.0).with_link(leading_line(100));
        let second = AtonRecord::new(2, "GB0002", 0.0, 0.0).with_link(leading_line(100));

        assert_eq!(generate_links(&mut ctx, &first).len(), 1);
        assert!(generate_links(&mut ctx, &second).is_empty());
        assert!(ctx.seen_links.contains(&100));
    }

    #[test]
    fn test_link_listed_twice_on_one_record_emitted_once() {
        let settings = EngineSettings::default();
        let mut ctx = TransformContext::new(&settings, 1);
        let record = AtonRecord::new(1, "GB0001", 0.0, 0.0)
            .with_link(leading_line(7))
            .with_link(leading_line(7));

        let members = generate_links(&mut ctx, &record);

        assert_eq!(members.len(), 1);
        assert_eq!(members[0].kind(), "Aggregation");
        assert_eq!(ctx.seen_links.len(), 1);
    }

    #[test]
    fn test_record_without_links_emits_nothing() {
        let settings = EngineSettings::default();
        let mut ctx = TransformContext::new(&settings, 1);
        let record = AtonRecord::new(1, "GB0001", 0.0, 0.0);
        assert!(generate_links(&mut ctx, &record).is_empty());
        assert!(ctx.seen_links.is_empty());
    }
}
