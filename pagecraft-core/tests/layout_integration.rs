//! Integration tests for the layout engines (pagecraft-core).
//!
//! Drives a scene through the same sequence an editor would: marquee select,
//! align, distribute, then drag with guides and snapping.

use std::collections::HashSet;

use pagecraft_core::{
    align, compute_guides, snap_point, AlignMode, Element, ElementId, ElementType, GuideConfig,
    GuideKind, Marquee, Orientation, Point, Scene,
};

fn block(id: &str, x: f64, y: f64) -> Element {
    Element::new(ElementType::Container)
        .with_id(id)
        .with_position(x, y)
        .with_size(100.0, 50.0)
}

fn row_scene() -> Scene {
    let mut scene = Scene::new(1200.0, 800.0);
    for element in [block("a", 0.0, 0.0), block("b", 200.0, 0.0), block("c", 400.0, 0.0)] {
        scene.add_element(element).expect("unique id");
    }
    scene
}

fn x_of(scene: &Scene, id: &str) -> f64 {
    scene
        .get_element(&ElementId::from(id))
        .expect("element exists")
        .x
}

// ==========================================================================
// Select then align
// ==========================================================================

#[test]
fn test_marquee_then_center_align() {
    let mut scene = row_scene();

    let mut marquee = Marquee::new(Point::new(-10.0, -10.0));
    marquee.update(Point::new(-8.0, -8.0));
    assert!(marquee.select(scene.elements()).is_empty());

    marquee.update(Point::new(250.0, 60.0));
    let hits = scene.select_in_rect(&marquee.rect());
    assert_eq!(hits, vec![ElementId::from("a"), ElementId::from("b")]);

    let patches = scene.align_selected(AlignMode::CenterH);
    assert_eq!(patches.len(), 2);
    assert!((x_of(&scene, "a") - 100.0).abs() < f64::EPSILON);
    assert!((x_of(&scene, "b") - 100.0).abs() < f64::EPSILON);
    assert!((x_of(&scene, "c") - 400.0).abs() < f64::EPSILON);
}

#[test]
fn test_distribute_restores_even_spacing() {
    let mut scene = row_scene();
    let nudge = align(
        scene.elements(),
        &HashSet::from([ElementId::from("b"), ElementId::from("a")]),
        AlignMode::Left,
    );
    scene.apply_patches(&nudge);
    assert!(x_of(&scene, "b").abs() < f64::EPSILON);

    scene.set_selection(["a", "b", "c"].map(ElementId::from));
    scene.align_selected(AlignMode::DistributeH);

    // Span 0..500 with 300 of widths leaves two gaps of 100; b sorts after a.
    assert!(x_of(&scene, "a").abs() < f64::EPSILON);
    assert!((x_of(&scene, "b") - 200.0).abs() < f64::EPSILON);
    assert!((x_of(&scene, "c") - 400.0).abs() < f64::EPSILON);
}

#[test]
fn test_single_selection_leaves_scene_untouched() {
    let mut scene = row_scene();
    let before = scene.clone();
    scene.set_selection([ElementId::from("a")]);
    assert!(scene.align_selected(AlignMode::Right).is_empty());
    assert_eq!(scene.elements(), before.elements());
}

// ==========================================================================
// Drag with guides and snapping
// ==========================================================================

#[test]
fn test_drag_shows_edge_guides_and_snaps() {
    let mut scene = row_scene();
    let dragged = block("d", 102.0, 200.0);
    scene.add_element(dragged.clone()).expect("unique id");

    let guides = scene.guides(&dragged.id, &GuideConfig::default());
    let positions: Vec<f64> = guides.iter().map(|g| g.position).collect();
    assert_eq!(positions, vec![100.0, 200.0]);
    assert!(guides
        .iter()
        .all(|g| g.orientation == Orientation::Vertical && g.kind == GuideKind::Edge));

    let snapped = snap_point(
        Point::new(dragged.x, dragged.y),
        scene.elements(),
        Some(&dragged.id),
        (dragged.width, dragged.height),
        5.0,
    );
    assert_eq!(snapped, Point::new(100.0, 200.0));

    let again = snap_point(snapped, scene.elements(), Some(&dragged.id), (100.0, 50.0), 5.0);
    assert_eq!(again, snapped);
}

#[test]
fn test_guides_disabled_or_idle() {
    let mut scene = row_scene();
    scene.add_element(block("d", 102.0, 200.0)).expect("unique id");
    let active = ElementId::from("d");

    let disabled = GuideConfig {
        enabled: false,
        ..GuideConfig::default()
    };
    assert!(scene.guides(&active, &disabled).is_empty());
    assert!(compute_guides(scene.elements(), Some(&active), false, 5.0).is_empty());
    assert!(compute_guides(scene.elements(), None, true, 5.0).is_empty());
}

// ==========================================================================
// Persistence
// ==========================================================================

#[test]
fn test_scene_json_survives_alignment() {
    let mut scene = row_scene();
    scene.set_selection(["a", "c"].map(ElementId::from));
    scene.align_selected(AlignMode::Top);

    let json = scene.to_json().expect("serialize");
    let restored = Scene::from_json(&json).expect("deserialize");
    assert_eq!(restored.elements(), scene.elements());
    assert!(restored.selection().is_empty());
}
