use egui::{Color32, Pos2, Rect, Vec2};
use shape_editor::shape::{Shape, ShapeType, factory};
use shape_editor::{InteractionState, SceneModel, hit_test};

fn create_test_square(x: f32, y: f32, side: u32) -> ShapeType {
    factory::create_rectangle(Pos2::new(x, y), side, side, Color32::BLUE).unwrap()
}

fn create_test_hexagon(x: f32, y: f32, side_length: u32) -> ShapeType {
    factory::create_polygon(Pos2::new(x, y), 6, side_length, Color32::RED).unwrap()
}

fn trash() -> Rect {
    Rect::from_min_size(Pos2::new(800.0, 500.0), Vec2::new(80.0, 80.0))
}

#[test]
fn test_hit_test_scenarios() {
    let rect = factory::create_rectangle(Pos2::ZERO, 10, 10, Color32::BLUE).unwrap();
    assert!(hit_test(&rect, Pos2::new(5.0, 5.0)));
    assert!(!hit_test(&rect, Pos2::new(11.0, 5.0)));

    let poly = factory::create_polygon(Pos2::ZERO, 6, 50, Color32::RED).unwrap();
    assert!(hit_test(&poly, Pos2::new(49.0, 0.0)));
    assert!(!hit_test(&poly, Pos2::new(51.0, 0.0)));
    assert!(hit_test(&poly, Pos2::new(0.0, -49.0)));
    assert!(!hit_test(&poly, Pos2::new(-36.07, -36.07)));
}

#[test]
fn test_group_hit_test_recurses() {
    let group = factory::create_group([
        factory::create_rectangle(Pos2::ZERO, 10, 10, Color32::BLUE).unwrap(),
        factory::create_polygon(Pos2::new(100.0, 100.0), 4, 10, Color32::RED).unwrap(),
    ])
    .unwrap();
    assert!(hit_test(&group, Pos2::new(5.0, 5.0)));
    assert!(hit_test(&group, Pos2::new(105.0, 100.0)));
    assert!(!hit_test(&group, Pos2::new(50.0, 50.0)));
}

#[test]
fn test_most_recent_shape_wins_overlap() {
    let mut scene = SceneModel::new();
    scene.add_shape(create_test_square(0.0, 0.0, 100));
    let poly = scene.add_shape(create_test_hexagon(50.0, 50.0, 30));

    assert_eq!(scene.select_at(Pos2::new(50.0, 50.0)), Some(poly));
    assert_eq!(scene.selected().unwrap().kind_name(), "Polygon");
}

#[test]
fn test_drag_moves_selected_shape() {
    let mut scene = SceneModel::new();
    let id = scene.add_shape(create_test_square(0.0, 0.0, 20));

    assert_eq!(scene.select_at(Pos2::new(0.0, 0.0)), Some(id));
    assert!(scene.drag_to(Pos2::new(10.0, 10.0)));

    let shape = scene.find_shape(id).unwrap();
    assert_eq!(shape.primitive().unwrap().position(), Pos2::new(10.0, 10.0));
    assert_eq!(
        scene.state(),
        InteractionState::Dragging { selected: id, anchor: Pos2::new(10.0, 10.0) }
    );
}

#[test]
fn test_deltas_are_incremental() {
    let mut scene = SceneModel::new();
    let id = scene.add_shape(create_test_hexagon(100.0, 100.0, 50));

    scene.select_at(Pos2::new(110.0, 100.0));
    scene.drag_to(Pos2::new(120.0, 100.0));
    scene.drag_to(Pos2::new(120.0, 130.0));
    scene.drag_to(Pos2::new(115.0, 130.0));

    let center = scene.find_shape(id).unwrap().primitive().unwrap().position();
    assert_eq!(center, Pos2::new(105.0, 130.0));
}

#[test]
fn test_copied_shape_is_dragged_on_its_own() {
    let mut scene = SceneModel::new();
    let original = create_test_square(0.0, 0.0, 20);
    let mut copy = original.clone();
    copy.translate(500, 500);
    let original = scene.add_shape(original);
    let copy = scene.add_shape(copy);
    assert_ne!(copy, original);

    assert_eq!(scene.select_at(Pos2::new(505.0, 505.0)), Some(copy));
    assert!(scene.drag_to(Pos2::new(515.0, 505.0)));

    let position = |id| scene.find_shape(id).unwrap().primitive().unwrap().position();
    assert_eq!(position(copy), Pos2::new(510.0, 500.0));
    assert_eq!(position(original), Pos2::ZERO);
}

#[test]
fn test_release_outside_trash_keeps_shape() {
    let mut scene = SceneModel::new();
    let id = scene.add_shape(create_test_square(0.0, 0.0, 20));

    scene.select_at(Pos2::new(0.0, 0.0));
    scene.drag_to(Pos2::new(10.0, 10.0));
    assert!(scene.release_at(Pos2::new(10.0, 10.0), trash()).is_none());

    assert_eq!(scene.len(), 1);
    assert!(scene.find_shape(id).is_some());
    assert_eq!(scene.state(), InteractionState::Idle);
    assert!(!scene.drag_to(Pos2::new(40.0, 40.0)));
}

#[test]
fn test_release_inside_trash_removes_shape() {
    let mut scene = SceneModel::new();
    let keep = scene.add_shape(create_test_square(300.0, 300.0, 20));
    let id = scene.add_shape(create_test_square(0.0, 0.0, 20));

    scene.select_at(Pos2::new(0.0, 0.0));
    scene.drag_to(Pos2::new(840.0, 540.0));
    let removed = scene.release_at(Pos2::new(840.0, 540.0), trash()).unwrap();

    assert_eq!(removed.id(), id);
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.shapes()[0].id(), keep);
    assert!(scene.selected().is_none());
}

#[test]
fn test_dragging_a_group_moves_every_child() {
    let mut scene = SceneModel::new();
    let group = factory::create_group([
        factory::create_rectangle(Pos2::ZERO, 10, 10, Color32::BLUE).unwrap(),
        factory::create_polygon(Pos2::new(100.0, 0.0), 6, 10, Color32::RED).unwrap(),
    ])
    .unwrap();
    let id = scene.add_shape(group);

    assert_eq!(scene.select_at(Pos2::new(100.0, 0.0)), Some(id));
    scene.drag_to(Pos2::new(100.0, 25.0));
    scene.release_at(Pos2::new(100.0, 25.0), trash());

    let group = scene.find_shape(id).unwrap();
    let rect = group.get_child(0).unwrap().primitive().unwrap().position();
    let poly = group.get_child(1).unwrap().primitive().unwrap().position();
    assert_eq!(rect, Pos2::new(0.0, 25.0));
    assert_eq!(poly, Pos2::new(100.0, 25.0));
}

#[test]
fn test_paint_order_is_insertion_order() {
    let mut scene = SceneModel::new();
    let ids: Vec<_> = (0..4)
        .map(|i| scene.add_shape(create_test_square(i as f32 * 5.0, 0.0, 10)))
        .collect();
    let painted: Vec<_> = scene.shapes().iter().map(|s| s.id()).collect();
    assert_eq!(painted, ids);

    scene.clear();
    assert!(scene.is_empty());
}
