// Transformation pipeline: records in, one S-125 dataset out

pub mod processing;

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use crate::config::EngineSettings;
use crate::dataset::{Dataset, DatasetIdentification, DatasetInfo};
use crate::domain::AtonRecord;
use crate::metrics::TransformMetrics;
use processing::geometry::bounding_shape;
use processing::{generate_links, generate_member, IdAllocator};

/// Records are borrowed for the whole call, so a record's address identifies
/// its position in the walk even when it has no source id.
fn record_key(record: &AtonRecord) -> usize {
    std::ptr::from_ref(record) as usize
}

/// Mutable state scoped to a single transformation call
#[derive(Debug)]
pub struct TransformContext<'a> {
    pub ids: IdAllocator,
    /// Link ids already turned into members
    pub seen_links: HashSet<i64>,
    pub settings: &'a EngineSettings,
    /// Member ids reserved for the records of this call
    record_ids: HashMap<usize, String>,
    /// Member id of each walked child's parent, `None` when the parent emits no member
    parent_ids: HashMap<usize, Option<String>>,
}

impl<'a> TransformContext<'a> {
    pub fn new(settings: &'a EngineSettings, record_count: usize) -> Self {
        Self {
            ids: IdAllocator::for_record_count(record_count),
            seen_links: HashSet::new(),
            settings,
            record_ids: HashMap::new(),
            parent_ids: HashMap::new(),
        }
    }

    /// Member id of `record`: the reserved one if the walk reserved it,
    /// otherwise allocated from its source id
    pub fn record_id(&mut self, record: &AtonRecord) -> String {
        match self.record_ids.get(&record_key(record)) {
            Some(id) => id.clone(),
            None => self.ids.allocate(record.id),
        }
    }

    /// Parent member id recorded for a walked child. The outer `None` means
    /// the child was not walked; the inner `None` means its parent emits no
    /// member.
    pub fn reserved_parent_id(&self, record: &AtonRecord) -> Option<Option<String>> {
        self.parent_ids.get(&record_key(record)).cloned()
    }

    /// Assign record ids up front, in walk order, so each member's id does
    /// not depend on how many sub-elements were allocated before it
    fn reserve_record_ids(&mut self, records: &[AtonRecord]) {
        for root in records {
            let root_id = self.reserve(root);
            for child in &root.children {
                self.reserve(child);
                self.parent_ids.insert(record_key(child), root_id.clone());
            }
        }
    }

    /// Records of unknown type emit no member and get no id
    fn reserve(&mut self, record: &AtonRecord) -> Option<String> {
        record.aton_type()?;
        let id = self.ids.allocate(record.id);
        self.record_ids.insert(record_key(record), id.clone());
        Some(id)
    }
}

/// Converts AtoN records into an S-125 dataset.
///
/// The engine holds only settings; every call to [`package_to_dataset`]
/// gets its own identifier map and link set, so one engine can serve any
/// number of calls, concurrently or not.
///
/// [`package_to_dataset`]: S125Engine::package_to_dataset
#[derive(Debug, Clone, Default)]
pub struct S125Engine {
    settings: EngineSettings,
}

impl S125Engine {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Build a dataset from `records`.
    ///
    /// Each root is followed by its children, then by the link members the
    /// root and its children introduce. Records of unknown type are skipped.
    pub fn package_to_dataset(&self, info: &DatasetInfo, records: &[AtonRecord]) -> Dataset {
        let span = info_span!(
            "package_to_dataset",
            dataset_id = %info.dataset_id,
            schema = self.settings.schema_version.tag_namespace()
        );
        let _guard = span.enter();
        let started = Instant::now();

        let record_count: usize = records.iter().map(|r| 1 + r.children.len()).sum();
        let mut ctx = TransformContext::new(&self.settings, record_count);
        ctx.reserve_record_ids(records);

        let visited = records
            .iter()
            .flat_map(|root| std::iter::once(root).chain(root.children.iter()));
        let bounded_by = bounding_shape(visited, &self.settings.srs_name);

        let mut members = Vec::new();
        for root in records {
            members.extend(generate_member(&mut ctx, root));
            for child in &root.children {
                members.extend(generate_member(&mut ctx, child));
            }

            members.extend(generate_links(&mut ctx, root));
            for child in &root.children {
                members.extend(generate_links(&mut ctx, child));
            }
        }
        debug!(ids_issued = ctx.ids.issued(), id_width = ctx.ids.width(), "Identifiers allocated");

        let dataset = Dataset {
            id: info.dataset_id.clone(),
            bounded_by,
            identification: DatasetIdentification::from(info),
            members,
        };

        let unresolved = dataset.unresolved_references();
        if !unresolved.is_empty() {
            warn!(?unresolved, "References to ids with no member in the dataset");
        }

        let elapsed = started.elapsed().as_secs_f64();
        TransformMetrics::record_transform(record_count, dataset.members.len(), elapsed);
        info!(
            records = record_count,
            members = dataset.members.len(),
            links = ctx.seen_links.len(),
            "Dataset assembled"
        );

        dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Member;

    fn info() -> DatasetInfo {
        DatasetInfo {
            dataset_id: "DS-1".to_string(),
            ..DatasetInfo::default()
        }
    }

    #[test]
    fn test_empty_input_gives_empty_dataset() {
        let dataset = S125Engine::default().package_to_dataset(&info(), &[]);
        assert_eq!(dataset.id, "DS-1");
        assert!(dataset.members.is_empty());
        assert!(dataset.bounded_by.is_none());
    }

    #[test]
    fn test_record_ids_reserved_in_walk_order() {
        let records = vec![
            AtonRecord::new(10, "GB0010", 0.0, 0.0)
                .with_tag("seamark:type", "lighthouse")
                .with_child(AtonRecord::new(11, "GB0011", 0.0, 0.0).with_tag("seamark:type", "light")),
            AtonRecord::new(20, "GB0020", 1.0, 1.0).with_tag("seamark:type", "buoy_safe_water"),
        ];

        let dataset = S125Engine::default().package_to_dataset(&info(), &records);
        let ids: Vec<&str> = dataset.members.iter().map(Member::id).collect();
        assert_eq!(ids, vec!["ID001", "ID002", "ID003"]);
    }

    #[test]
    fn test_dropped_record_consumes_no_id() {
        let records = vec![
            AtonRecord::new(1, "GB0001", 0.0, 0.0).with_tag("seamark:type", "harbour"),
            AtonRecord::new(2, "GB0002", 0.0, 0.0).with_tag("seamark:type", "lighthouse"),
        ];

        let dataset = S125Engine::default().package_to_dataset(&info(), &records);
        assert_eq!(dataset.members.len(), 1);
        assert_eq!(dataset.members[0].id(), "ID001");
    }

    #[test]
    fn test_context_starts_empty() {
        let settings = EngineSettings::default();
        let ctx = TransformContext::new(&settings, 5);
        assert!(ctx.seen_links.is_empty());
        assert_eq!(ctx.ids.issued(), 0);
        assert_eq!(ctx.ids.width(), 3);
    }

    fn lighthouse_with(child: AtonRecord) -> AtonRecord {
        AtonRecord::new(1, "GB0001", 0.0, 0.0)
            .with_tag("seamark:type", "lighthouse")
            .with_child(child)
    }

    #[test]
    fn test_idless_child_reference_matches_its_member() {
        let mut light = AtonRecord::new(0, "GB0002", 0.0, 0.0).with_tag("seamark:type", "light");
        light.id = None;
        let records = vec![lighthouse_with(light)];

        let dataset = S125Engine::default().package_to_dataset(&info(), &records);

        assert_eq!(dataset.members.len(), 2);
        let children = dataset.members[0].children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].target_id(), dataset.members[1].id());
        assert_eq!(dataset.members[1].id(), "ID002");
        let parent = dataset.members[1].parent().unwrap();
        assert_eq!(parent.target_id(), "ID001");
        assert!(dataset.unresolved_references().is_empty());
    }

    #[test]
    fn test_untyped_child_gets_no_reference() {
        let bogus = AtonRecord::new(2, "GB0002", 0.0, 0.0).with_tag("seamark:type", "bogus");
        let records = vec![lighthouse_with(bogus)];

        let dataset = S125Engine::default().package_to_dataset(&info(), &records);

        assert_eq!(dataset.members.len(), 1);
        assert!(dataset.members[0].children().is_empty());
        assert!(dataset.unresolved_references().is_empty());
    }

    #[test]
    fn test_equipment_under_untyped_root_has_no_parent_reference() {
        let records = vec![AtonRecord::new(1, "GB0001", 0.0, 0.0)
            .with_tag("seamark:type", "bogus")
            .with_child(AtonRecord::new(2, "GB0002", 0.0, 0.0).with_tag("seamark:type", "light"))];

        let dataset = S125Engine::default().package_to_dataset(&info(), &records);

        assert_eq!(dataset.members.len(), 1);
        assert_eq!(dataset.members[0].id(), "ID001");
        assert!(dataset.members[0].parent().is_none());
        assert!(dataset.unresolved_references().is_empty());
    }
}
