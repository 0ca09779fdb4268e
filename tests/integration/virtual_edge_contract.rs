#![allow(missing_docs)]

use std::sync::Once;

use snapgraph::{
    shortcut_children, EdgeFlags, EdgeId, EdgeState, FetchMode, GeoPoint, NodeId, OverlayError,
    PointList, PropertyKey, Result, ShortcutEdgeState, TraversalKey, VirtualEdgeState,
};
use tracing_subscriber::EnvFilter;

const UNKNOWN_KEY: PropertyKey = PropertyKey(42);

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("snapgraph=trace"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .try_init();
    });
}

fn geometry(n: usize) -> PointList {
    (0..n)
        .map(|i| GeoPoint::new(52.0 + i as f64 * 0.001, 13.0))
        .collect()
}

fn snapped(points: usize) -> VirtualEdgeState {
    init_tracing();
    let key = TraversalKey::new(NodeId(10), NodeId(11), EdgeId(5), false);
    VirtualEdgeState::new(
        key,
        EdgeId(1_000),
        NodeId(10),
        NodeId(200),
        42.0,
        EdgeFlags(0b1011),
        "Ring Rd",
        geometry(points),
    )
}

fn assert_unsupported<T: std::fmt::Debug>(result: Result<T>, op: &str) {
    match result {
        Err(OverlayError::CapabilityNotSupported(_)) => {}
        other => panic!("{op}: expected capability error, got {other:?}"),
    }
}

#[test]
fn constructor_roundtrip() -> Result<()> {
    let points: PointList = [GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]
        .into_iter()
        .collect();
    let edge = VirtualEdgeState::new(
        TraversalKey(7),
        EdgeId(3),
        NodeId(1),
        NodeId(2),
        10.5,
        EdgeFlags(0xFF),
        "Main St",
        points.clone(),
    );
    assert_eq!(edge.edge(), EdgeId(3));
    assert_eq!(edge.base_node(), NodeId(1));
    assert_eq!(edge.adj_node(), NodeId(2));
    assert_eq!(edge.distance(), 10.5);
    assert_eq!(edge.flags(), EdgeFlags(0xFF));
    assert_eq!(edge.name(), "Main St");
    assert_eq!(edge.way_geometry(3)?, points);
    assert_eq!(edge.original_traversal_key(), TraversalKey(7));
    Ok(())
}

#[test]
fn original_key_maps_back_to_stored_edge() {
    let edge = snapped(3);
    assert_eq!(edge.original_traversal_key().edge(), EdgeId(5));
    assert!(!edge.original_traversal_key().direction_bit());
}

#[test]
fn geometry_lengths_per_mode() -> Result<()> {
    for n in 0..6 {
        let edge = snapped(n);
        assert_eq!(edge.way_geometry(3)?.len(), n, "all, n={n}");
        assert_eq!(edge.way_geometry(0)?.len(), n.saturating_sub(2), "pillars, n={n}");
        assert_eq!(edge.way_geometry(1)?.len(), n.saturating_sub(1), "base, n={n}");
        assert_eq!(edge.way_geometry(2)?.len(), n.saturating_sub(1), "adj, n={n}");
    }
    Ok(())
}

#[test]
fn returned_geometry_never_aliases() {
    let edge = snapped(3);
    let mut first = edge.fetch_way_geometry(FetchMode::All);
    let second = edge.fetch_way_geometry(FetchMode::All);
    assert_eq!(first, second);

    first.push(GeoPoint::new(0.0, 0.0));
    assert_eq!(second.len(), 3);
    assert_eq!(edge.fetch_way_geometry(FetchMode::All).len(), 3);
}

#[test]
fn unknown_mode_is_invalid_argument() {
    let edge = snapped(3);
    for mode in [99, 4, -1] {
        assert!(matches!(
            edge.way_geometry(mode),
            Err(OverlayError::InvalidArgument(_))
        ));
    }
    assert!(matches!(
        snapped(0).way_geometry(99),
        Err(OverlayError::InvalidArgument(_))
    ));
}

#[test]
fn unsupported_operations_fail_with_capability_error() {
    let mut edge = snapped(2);
    let mut other = snapped(2);
    assert!(!edge.is_shortcut());
    assert_unsupported(edge.skipped_edge1(), "skipped_edge1");
    assert_unsupported(edge.skipped_edge2(), "skipped_edge2");
    assert_unsupported(edge.set_skipped_edges(EdgeId(1), EdgeId(2)), "set_skipped_edges");
    assert_unsupported(edge.weight(), "weight");
    assert_unsupported(edge.set_weight(1.0).map(|_| ()), "set_weight");
    assert_unsupported(edge.additional_field(), "additional_field");
    assert_unsupported(edge.set_additional_field(1).map(|_| ()), "set_additional_field");
    assert_unsupported(edge.detach(false), "detach");
    assert_unsupported(edge.detach(true), "detach reverse");
    assert_unsupported(edge.set_way_geometry(geometry(4)), "set_way_geometry");
    assert_unsupported(edge.copy_properties_to(&mut other), "copy_properties_to");

    assert_eq!(edge.fetch_way_geometry(FetchMode::All).len(), 2);
    assert_eq!(other.name(), "Ring Rd");
}

#[test]
fn hierarchy_probe_reads_virtual_edge_as_plain() -> Result<()> {
    let edge = snapped(2);
    assert_eq!(shortcut_children(&edge)?, None);
    Ok(())
}

#[test]
fn preference_flags_are_independent_per_direction() {
    let mut edge = snapped(2);
    edge.set_virtual_edge_preference(true, false);
    assert!(edge.get_bool(PropertyKey::UNFAVORED_EDGE, false, false));
    assert!(!edge.get_bool(PropertyKey::UNFAVORED_EDGE, true, false));

    edge.set_virtual_edge_preference(true, true);
    edge.set_virtual_edge_preference(false, false);
    assert!(!edge.get_bool(PropertyKey::UNFAVORED_EDGE, false, true));
    assert!(edge.get_bool(PropertyKey::UNFAVORED_EDGE, true, false));
}

#[test]
fn unknown_keys_return_default() {
    let mut edge = snapped(2);
    edge.set_virtual_edge_preference(true, false);
    edge.set_virtual_edge_preference(true, true);
    for reverse in [false, true] {
        assert!(edge.get_bool(UNKNOWN_KEY, reverse, true));
        assert!(!edge.get_bool(UNKNOWN_KEY, reverse, false));
    }
}

#[test]
fn mutators_are_idempotent() {
    let mut edge = snapped(2);
    edge.set_distance(5.0);
    edge.set_distance(5.0);
    assert_eq!(edge.distance(), 5.0);

    edge.set_virtual_edge_preference(true, true);
    let once = (
        edge.get_bool(PropertyKey::UNFAVORED_EDGE, false, false),
        edge.get_bool(PropertyKey::UNFAVORED_EDGE, true, false),
    );
    edge.set_virtual_edge_preference(true, true);
    let twice = (
        edge.get_bool(PropertyKey::UNFAVORED_EDGE, false, false),
        edge.get_bool(PropertyKey::UNFAVORED_EDGE, true, false),
    );
    assert_eq!(once, twice);
}

#[test]
fn paired_directions_share_geometry_reversed() {
    let forward_points = geometry(3);
    let key = TraversalKey::new(NodeId(10), NodeId(11), EdgeId(5), false);
    let forward = VirtualEdgeState::new(
        key,
        EdgeId(1_000),
        NodeId(10),
        NodeId(200),
        42.0,
        EdgeFlags(1),
        "Ring Rd",
        forward_points.clone(),
    );
    let backward = VirtualEdgeState::new(
        key.reversed(),
        EdgeId(1_001),
        NodeId(200),
        NodeId(10),
        42.0,
        EdgeFlags(1),
        "Ring Rd",
        forward_points.reversed(),
    );
    assert_eq!(forward.to_string(), "10->200");
    assert_eq!(backward.to_string(), "200->10");
    assert_eq!(
        backward.fetch_way_geometry(FetchMode::All),
        forward.fetch_way_geometry(FetchMode::All).reversed()
    );
    assert_eq!(
        forward.original_traversal_key().edge(),
        backward.original_traversal_key().edge()
    );
}

#[test]
fn readable_from_search_threads() {
    let edge = snapped(4);
    std::thread::scope(|scope| {
        for reverse in [false, true] {
            let edge = &edge;
            scope.spawn(move || {
                let mode = if reverse {
                    FetchMode::BaseAndPillars
                } else {
                    FetchMode::PillarsAndAdj
                };
                assert_eq!(edge.fetch_way_geometry(mode).len(), 3);
                assert!(!edge.get_bool(PropertyKey::UNFAVORED_EDGE, reverse, false));
            });
        }
    });
}
