use roomkit_core::EditorError;
use roomkit_designer::model::{Point, SpaceKind};
use roomkit_designer::space_editor::{Participant, SpaceEditor};
use roomkit_designer::space_store::SpaceStore;

fn rect(x0: f64, z0: f64, x1: f64, z1: f64) -> Vec<Point> {
    vec![
        Point::new(x0, z0),
        Point::new(x1, z0),
        Point::new(x1, z1),
        Point::new(x0, z1),
    ]
}

#[test]
fn test_begin_drag_does_not_mutate() {
    let mut store = SpaceStore::new();
    let a = store
        .add(SpaceKind::Room, rect(0.0, 0.0, 2.0, 2.0), 0.1)
        .unwrap();
    let before = store.clone();

    let mut editor = SpaceEditor::new();
    let drag = editor.begin_vertex_drag(&store, a, 2).unwrap();
    assert_eq!(drag.origin(), Point::new(2.0, 2.0));
    assert_eq!(store.as_slice(), before.as_slice());
}

#[test]
fn test_begin_drag_errors() {
    let mut store = SpaceStore::new();
    let a = store
        .add(SpaceKind::Room, rect(0.0, 0.0, 2.0, 2.0), 0.1)
        .unwrap();
    let mut editor = SpaceEditor::new();

    assert_eq!(
        editor.begin_vertex_drag(&store, 42, 0).unwrap_err(),
        EditorError::UnknownSpace { id: 42 }
    );
    assert_eq!(
        editor.begin_vertex_drag(&store, a, 4).unwrap_err(),
        EditorError::InvalidVertex { id: a, index: 4 }
    );
    assert!(!editor.is_dragging());
}

#[test]
fn test_update_without_drag_is_rejected() {
    let mut store = SpaceStore::new();
    let mut editor = SpaceEditor::new();
    assert_eq!(
        editor
            .update_vertex_drag(&mut store, Point::origin())
            .unwrap_err(),
        EditorError::NoSelection
    );
}

#[test]
fn test_shared_vertex_moves_in_both_rooms() {
    let mut store = SpaceStore::new();
    // Both rooms list the shared corner (2, 0) at index 1.
    let a = store
        .add(SpaceKind::Room, rect(0.0, 0.0, 2.0, 2.0), 0.1)
        .unwrap();
    let b = store
        .add(
            SpaceKind::Room,
            vec![
                Point::new(2.0, -2.0),
                Point::new(2.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(4.0, -2.0),
            ],
            0.1,
        )
        .unwrap();

    let mut editor = SpaceEditor::new();
    editor.begin_vertex_drag(&store, a, 1).unwrap();
    let affected = editor
        .update_vertex_drag(&mut store, Point::new(2.5, 0.0))
        .unwrap();
    assert_eq!(affected.as_slice(), &[a, b]);

    let ra = store.get(a).unwrap();
    let rb = store.get(b).unwrap();
    assert_eq!(ra.vertex(1), Some(Point::new(2.5, 0.0)));
    assert_eq!(rb.vertex(1), Some(Point::new(2.5, 0.0)));

    // Nothing else moved.
    assert_eq!(ra.vertex(0), Some(Point::new(0.0, 0.0)));
    assert_eq!(ra.vertex(2), Some(Point::new(2.0, 2.0)));
    assert_eq!(rb.vertex(2), Some(Point::new(4.0, 0.0)));

    // Derived values follow.
    assert_eq!(ra.area(), 4.5);
    assert_eq!(ra.bounds().max_x, 2.5);
}

#[test]
fn test_shared_vertex_at_different_indices() {
    let mut store = SpaceStore::new();
    let a = store
        .add(SpaceKind::Room, rect(0.0, 0.0, 2.0, 2.0), 0.1)
        .unwrap();
    // (2, 0) is index 0 here and index 1 in `a`.
    let v = store
        .add(SpaceKind::Veranda, rect(2.0, 0.0, 4.0, 2.0), 0.1)
        .unwrap();

    let mut editor = SpaceEditor::new();
    let drag = editor.begin_vertex_drag(&store, a, 1).unwrap();
    assert_eq!(
        drag.participants(),
        &[
            Participant { space: a, index: 1 },
            Participant { space: v, index: 0 },
        ]
    );

    editor
        .update_vertex_drag(&mut store, Point::new(2.0, -1.0))
        .unwrap();
    assert_eq!(store.get(v).unwrap().vertex(0), Some(Point::new(2.0, -1.0)));
}

#[test]
fn test_drag_moves_explicit_closing_point() {
    let mut store = SpaceStore::new();
    let id = store
        .add(
            SpaceKind::Room,
            vec![
                Point::new(3.0, 0.0),
                Point::new(5.0, 0.0),
                Point::new(5.0, 2.0),
                Point::new(3.0, 0.0),
            ],
            0.1,
        )
        .unwrap();

    let mut editor = SpaceEditor::new();
    editor.begin_vertex_drag(&store, id, 0).unwrap();
    editor
        .update_vertex_drag(&mut store, Point::new(3.0, -1.0))
        .unwrap();

    let space = store.get(id).unwrap();
    assert_eq!(space.vertex(0), Some(Point::new(3.0, -1.0)));
    assert_eq!(space.vertex(3), Some(Point::new(3.0, -1.0)));
}

#[test]
fn test_participants_are_fixed_at_drag_start() {
    let mut store = SpaceStore::new();
    let a = store
        .add(SpaceKind::Room, rect(0.0, 0.0, 2.0, 2.0), 0.1)
        .unwrap();
    let b = store
        .add(SpaceKind::Room, rect(3.0, 0.0, 5.0, 2.0), 0.1)
        .unwrap();

    let mut editor = SpaceEditor::new();
    editor.begin_vertex_drag(&store, a, 1).unwrap();
    // Passing over b's corner does not pull it in.
    editor
        .update_vertex_drag(&mut store, Point::new(3.0, 0.0))
        .unwrap();
    editor
        .update_vertex_drag(&mut store, Point::new(2.5, 0.0))
        .unwrap();

    assert_eq!(store.get(b).unwrap().vertex(0), Some(Point::new(3.0, 0.0)));
    let ended = editor.end_vertex_drag().unwrap();
    assert_eq!(ended.current(), Point::new(2.5, 0.0));
    assert!(editor.end_vertex_drag().is_none());
}
