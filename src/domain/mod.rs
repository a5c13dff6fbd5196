//! Source-side data shapes: AtoN records as they arrive from the import layer.
//!
//! Records are owned by the caller for the duration of one transformation and
//! are only ever read by the engine.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

pub mod aton_type;

pub use aton_type::AtonType;

/// A single key/value tag in the seamark vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtonTag {
    pub key: String,
    pub value: String,
}

impl AtonTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Build a tag list from a flat `[key, value, key, value, ...]` slice.
///
/// An odd number of entries is a defect in whoever built the list, so this is
/// the one place tag handling reports an error instead of degrading.
pub fn tags_from_pairs(pairs: &[&str]) -> Result<Vec<AtonTag>> {
    if pairs.len() % 2 != 0 {
        return Err(EngineError::TagPairArity(pairs.len()));
    }
    Ok(pairs
        .chunks_exact(2)
        .map(|pair| AtonTag::new(pair[0], pair[1]))
        .collect())
}

/// A longitude/latitude pair in signed decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounds in source coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_coordinate(c: Coordinate) -> Self {
        Self {
            min_x: c.x,
            min_y: c.y,
            max_x: c.x,
            max_y: c.y,
        }
    }

    pub fn expand_to_include(&mut self, other: &Bounds) {
        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
    }
}

/// The record's native geometry, used only for envelope computation and for
/// choosing the output geometry wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Coordinate),
    LineString(Vec<Coordinate>),
    Polygon(Vec<Coordinate>),
}

impl Geometry {
    /// The geometry's own envelope, `None` for an empty coordinate list
    pub fn bounds(&self) -> Option<Bounds> {
        let coords: &[Coordinate] = match self {
            Geometry::Point(c) => std::slice::from_ref(c),
            Geometry::LineString(cs) | Geometry::Polygon(cs) => cs,
        };

        let mut iter = coords.iter();
        let mut bounds = Bounds::from_coordinate(*iter.next()?);
        for c in iter {
            bounds.expand_to_include(&Bounds::from_coordinate(*c));
        }
        Some(bounds)
    }
}

/// Whether a link groups peers into one aid (aggregation) or relates
/// separate aids (association)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Aggregation,
    Association,
}

/// Lightweight reference to another record by identity and external code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerRef {
    pub id: Option<i64>,
    pub aton_uid: String,
}

impl PeerRef {
    pub fn new(id: i64, aton_uid: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            aton_uid: aton_uid.into(),
        }
    }
}

/// Back-reference from equipment to the structure it is mounted on
pub type ParentRef = PeerRef;

/// A typed peer link between records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtonLink {
    pub id: i64,
    pub kind: LinkKind,
    /// Seamark category of the link, e.g. `leading_line` or `channel_markings`
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub peers: Vec<PeerRef>,
}

/// An Aid to Navigation as delivered by the import layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtonRecord {
    #[serde(default)]
    pub id: Option<i64>,
    /// External unique code of the aid, used as the title of references to it
    #[serde(default)]
    pub aton_uid: String,
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub tags: Vec<AtonTag>,
    #[serde(default)]
    pub children: Vec<AtonRecord>,
    #[serde(default)]
    pub parent: Option<ParentRef>,
    #[serde(default)]
    pub links: Vec<AtonLink>,
}

impl AtonRecord {
    pub fn new(id: i64, aton_uid: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            id: Some(id),
            aton_uid: aton_uid.into(),
            longitude,
            latitude,
            geometry: None,
            tags: Vec::new(),
            children: Vec::new(),
            parent: None,
            links: Vec::new(),
        }
    }

    /// Apply a flat key/value default tag list on top of the existing tags
    pub fn with_default_tags(mut self, pairs: &[&str]) -> Result<Self> {
        for tag in tags_from_pairs(pairs)? {
            self.set_tag(tag.key, tag.value);
        }
        Ok(self)
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_tag(key, value);
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn with_link(mut self, link: AtonLink) -> Self {
        self.links.push(link);
        self
    }

    /// Insert or replace a tag; the last write for a key wins
    pub fn set_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.tags.iter_mut().find(|t| t.key == key) {
            Some(existing) => existing.value = value,
            None => self.tags.push(AtonTag { key, value }),
        }
    }

    /// Raw tag value; when a deserialized list carries duplicates the last one wins
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .rev()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
    }

    /// Attach an equipment child, keeping the child's parent reference in step
    pub fn add_child(&mut self, mut child: AtonRecord) {
        child.parent = Some(PeerRef {
            id: self.id,
            aton_uid: self.aton_uid.clone(),
        });
        self.children.push(child);
    }

    pub fn with_child(mut self, child: AtonRecord) -> Self {
        self.add_child(child);
        self
    }

    /// Reference to this record for use as a link peer
    pub fn as_peer(&self) -> PeerRef {
        PeerRef {
            id: self.id,
            aton_uid: self.aton_uid.clone(),
        }
    }

    /// The native geometry, falling back to the record's own point
    pub fn native_geometry(&self) -> Geometry {
        self.geometry
            .clone()
            .unwrap_or(Geometry::Point(Coordinate::new(self.longitude, self.latitude)))
    }

    /// The seamark type classification, `None` when absent or unrecognized
    pub fn aton_type(&self) -> Option<AtonType> {
        AtonType::classify(self)
    }
}

/// Parse a JSON array of records. Parent references of nested children are
/// filled in when the input omits them.
pub fn records_from_json(content: &str) -> Result<Vec<AtonRecord>> {
    let mut records: Vec<AtonRecord> = serde_json::from_str(content)?;
    for record in &mut records {
        let parent = record.as_peer();
        for child in &mut record.children {
            if child.parent.is_none() {
                child.parent = Some(parent.clone());
            }
        }
    }
    Ok(records)
}

/// Read and parse a JSON records file
pub fn load_records(path: impl AsRef<std::path::Path>) -> Result<Vec<AtonRecord>> {
    let content = std::fs::read_to_string(path)?;
    records_from_json(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_tag_last_write_wins() {
        let mut record = AtonRecord::new(1, "GB0001", 1.0, 2.0);
        record.set_tag("seamark:name", "First");
        record.set_tag("seamark:name", "Second");

        assert_eq!(record.tags.len(), 1);
        assert_eq!(record.tag("seamark:name"), Some("Second"));
    }

    #[test]
    fn test_duplicate_deserialized_tags_resolve_to_last() {
        let mut record = AtonRecord::new(1, "GB0001", 1.0, 2.0);
        record.tags.push(AtonTag::new("seamark:status", "permanent"));
        record.tags.push(AtonTag::new("seamark:status", "temporary"));

        assert_eq!(record.tag("seamark:status"), Some("temporary"));
    }

    #[test]
    fn test_tags_from_pairs_rejects_odd_arity() {
        let result = tags_from_pairs(&["seamark:type", "light", "seamark:name"]);
        assert!(matches!(result, Err(EngineError::TagPairArity(3))));

        let tags = tags_from_pairs(&["seamark:type", "light"]).unwrap();
        assert_eq!(tags, vec![AtonTag::new("seamark:type", "light")]);
    }

    #[test]
    fn test_with_default_tags_overrides_existing() {
        let record = AtonRecord::new(1, "GB0001", 1.0, 2.0)
            .with_tag("seamark:type", "buoy_lateral")
            .with_default_tags(&["seamark:type", "light", "seamark:light:colour", "red"])
            .unwrap();

        assert_eq!(record.tag("seamark:type"), Some("light"));
        assert_eq!(record.tag("seamark:light:colour"), Some("red"));
    }

    #[test]
    fn test_add_child_sets_parent_reference() {
        let parent = AtonRecord::new(10, "GB0010", 1.0, 2.0)
            .with_child(AtonRecord::new(11, "GB0011", 1.0, 2.0));

        let child = &parent.children[0];
        assert_eq!(child.parent, Some(PeerRef::new(10, "GB0010")));
    }

    #[test]
    fn test_geometry_bounds() {
        let line = Geometry::LineString(vec![
            Coordinate::new(1.0, 5.0),
            Coordinate::new(-2.0, 3.0),
            Coordinate::new(4.0, 4.0),
        ]);
        let bounds = line.bounds().unwrap();
        assert_eq!(bounds.min_x, -2.0);
        assert_eq!(bounds.max_x, 4.0);
        assert_eq!(bounds.min_y, 3.0);
        assert_eq!(bounds.max_y, 5.0);

        assert!(Geometry::Polygon(Vec::new()).bounds().is_none());
    }

    #[test]
    fn test_records_from_json_links_children_to_parent() {
        let json = r#"[
            {
                "id": 1,
                "aton_uid": "GB0001",
                "longitude": 1.5,
                "latitude": 51.0,
                "tags": [{"key": "seamark:type", "value": "lighthouse"}],
                "children": [
                    {"id": 2, "aton_uid": "GB0002", "longitude": 1.5, "latitude": 51.0}
                ],
                "links": [
                    {"id": 7, "kind": "association", "peers": [{"id": 1, "aton_uid": "GB0001"}]}
                ]
            }
        ]"#;

        let records = records_from_json(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].aton_type(), Some(AtonType::Lighthouse));
        assert_eq!(records[0].children[0].parent, Some(PeerRef::new(1, "GB0001")));
        assert_eq!(records[0].links[0].kind, LinkKind::Association);
        assert!(records[0].links[0].category.is_none());
    }

    #[test]
    fn test_records_from_json_rejects_malformed_input() {
        assert!(matches!(records_from_json("{not json"), Err(EngineError::Json(_))));
        assert!(matches!(
            load_records("/nonexistent/records.json"),
            Err(EngineError::Io(_))
        ));
    }
}
