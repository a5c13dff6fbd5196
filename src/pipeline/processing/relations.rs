use tracing::debug;

use crate::constants::{ROLE_AGGREGATION, ROLE_ASSOCIATION, ROLE_CHILD, ROLE_PARENT};
use crate::dataset::enums::{CategoryOfAggregation, CategoryOfAssociation};
use crate::dataset::{AtonAggregation, AtonAssociation, Member, Reference};
use crate::domain::{AtonLink, AtonRecord, LinkKind, PeerRef};
use crate::pipeline::TransformContext;

fn reference(target_id: String, title: &str, role: &str) -> Reference {
    Reference {
        href: format!("#{}", target_id),
        title: title.to_string(),
        role: role.to_string(),
        arcrole: role.to_string(),
    }
}

fn peer_reference(ctx: &mut TransformContext<'_>, peer: &PeerRef, role: &str) -> Reference {
    reference(ctx.ids.allocate(peer.id), &peer.aton_uid, role)
}

/// One `child` reference per equipment child of a structure. Children of
/// unknown type emit no member and so get no reference.
pub fn resolve_children(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> Vec<Reference> {
    record
        .children
        .iter()
        .filter(|child| child.aton_type().is_some())
        .map(|child| reference(ctx.record_id(child), &child.aton_uid, ROLE_CHILD))
        .collect()
}

/// The `parent` reference of an equipment record, if its parent emits a member
pub fn resolve_parent(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> Option<Reference> {
    let parent = record.parent.as_ref()?;
    let target_id = match ctx.reserved_parent_id(record) {
        Some(Some(id)) => id,
        Some(None) => return None,
        None => ctx.ids.allocate(parent.id),
    };
    Some(reference(target_id, &parent.aton_uid, ROLE_PARENT))
}

/// Build the link member for `link` when it is of the requested kind
pub fn resolve_link(ctx: &mut TransformContext<'_>, link: &AtonLink, kind: LinkKind) -> Option<Member> {
    if link.kind != kind {
        debug!(link_id = link.id, ?kind, "Link kind mismatch, skipping");
        return None;
    }

    let category = link.category.as_deref().unwrap_or_default();
    let member = match kind {
        LinkKind::Aggregation => {
            let id = ctx.ids.allocate(None);
            let peers = link
                .peers
                .iter()
                .map(|peer| peer_reference(ctx, peer, ROLE_AGGREGATION))
                .collect();
            Member::Aggregation(AtonAggregation {
                id,
                category_of_aggregation: CategoryOfAggregation::parse(category),
                peers,
            })
        }
        LinkKind::Association => {
            let id = ctx.ids.allocate(None);
            let peers = link
                .peers
                .iter()
                .map(|peer| peer_reference(ctx, peer, ROLE_ASSOCIATION))
                .collect();
            Member::Association(AtonAssociation {
                id,
                category_of_association: CategoryOfAssociation::parse(category),
                peers,
            })
        }
    };
    Some(member)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineSettings;

    fn structure_with_child() -> AtonRecord {
        AtonRecord::new(1, "GB0001", 0.0, 0.0)
            .with_child(AtonRecord::new(2, "GB0002", 0.0, 0.0).with_tag("seamark:type", "light"))
    }

    #[test]
    fn test_children_and_parent_reference_each_other() {
        let settings = EngineSettings::default();
        let mut ctx = TransformContext::new(&settings, 2);
        let structure = structure_with_child();

        let own_id = ctx.ids.allocate(structure.id);
        let children = resolve_children(&mut ctx, &structure);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].title, "GB0002");
        assert_eq!(children[0].role, "child");
        assert_eq!(children[0].arcrole, "child");

        let parent = resolve_parent(&mut ctx, &structure.children[0]).unwrap();
        assert_eq!(parent.target_id(), own_id);
        assert_eq!(parent.title, "GB0001");
        assert_eq!(parent.role, "parent");
    }

    #[test]
    fn test_untyped_children_get_no_reference() {
        let settings = EngineSettings::default();
        let mut ctx = TransformContext::new(&settings, 3);
        let structure = structure_with_child()
            .with_child(AtonRecord::new(3, "GB0003", 0.0, 0.0).with_tag("seamark:type", "bogus"));

        let children = resolve_children(&mut ctx, &structure);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].title, "GB0002");
    }

    #[test]
    fn test_root_has_no_parent() {
        let settings = EngineSettings::default();
        let mut ctx = TransformContext::new(&settings, 1);
        assert!(resolve_parent(&mut ctx, &structure_with_child()).is_none());
    }

    #[test]
    fn test_link_kind_mismatch_is_none() {
        let settings = EngineSettings::default();
        let mut ctx = TransformContext::new(&settings, 2);
        let link = AtonLink {
            id: 7,
            kind: LinkKind::Association,
            category: Some("channel_markings".to_string()),
            peers: vec![PeerRef::new(1, "GB0001")],
        };

        assert!(resolve_link(&mut ctx, &link, LinkKind::Aggregation).is_none());
        match resolve_link(&mut ctx, &link, LinkKind::Association) {
            Some(Member::Association(assoc)) => {
                assert_eq!(assoc.category_of_association, Some(CategoryOfAssociation::ChannelMarkings));
                assert_eq!(assoc.peers.len(), 1);
                assert_eq!(assoc.peers[0].role, "association");
                assert_eq!(assoc.peers[0].title, "GB0001");
            }
            other => panic!("expected an association, got {:?}", other),
        }
    }

    #[test]
    fn test_link_peer_ids_match_record_ids() {
        let settings = EngineSettings::default();
        let mut ctx = TransformContext::new(&settings, 2);
        let a = ctx.ids.allocate(Some(1));
        let b = ctx.ids.allocate(Some(2));
        let link = AtonLink {
            id: 9,
            kind: LinkKind::Aggregation,
            category: Some("leading_line".to_string()),
            peers: vec![PeerRef::new(1, "GB0001"), PeerRef::new(2, "GB0002")],
        };

        let Some(Member::Aggregation(agg)) = resolve_link(&mut ctx, &link, LinkKind::Aggregation) else {
            panic!("expected an aggregation");
        };
        assert_eq!(agg.category_of_aggregation, Some(CategoryOfAggregation::LeadingLine));
        assert_eq!(agg.peers[0].target_id(), a);
        assert_eq!(agg.peers[1].target_id(), b);
        assert_ne!(agg.id, a);
        assert_ne!(agg.id, b);
    }
}
