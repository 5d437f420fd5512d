use roomkit_designer::model::{Point, SpaceKind};
use roomkit_designer::selection_manager::SelectionManager;
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
fn test_select_and_clear() {
    let mut selection = SelectionManager::new();
    assert!(selection.select(3));
    assert!(!selection.select(3));
    assert!(selection.is_selected(3));
    assert!(selection.clear());
    assert!(!selection.clear());
    assert_eq!(selection.selected_id(), None);
}

#[test]
fn test_room_and_veranda_share_one_slot() {
    let mut store = SpaceStore::new();
    let room = store
        .add(SpaceKind::Room, rect(0.0, 0.0, 2.0, 2.0), 0.1)
        .unwrap();
    let veranda = store
        .add(SpaceKind::Veranda, rect(2.0, 0.0, 4.0, 2.0), 0.1)
        .unwrap();

    let mut selection = SelectionManager::new();
    assert_eq!(selection.select_at(&store, Point::new(1.0, 1.0)), Some(room));
    assert_eq!(
        selection.select_at(&store, Point::new(3.0, 1.0)),
        Some(veranda)
    );
    assert!(!selection.is_selected(room));

    assert_eq!(selection.select_at(&store, Point::new(9.0, 9.0)), None);
    assert_eq!(selection.selected_id(), None);
}

#[test]
fn test_topmost_space_wins() {
    let mut store = SpaceStore::new();
    store
        .add(SpaceKind::Veranda, rect(0.0, 0.0, 6.0, 6.0), 0.1)
        .unwrap();
    let inner = store
        .add(SpaceKind::Room, rect(1.0, 1.0, 3.0, 3.0), 0.1)
        .unwrap();

    let mut selection = SelectionManager::new();
    assert_eq!(selection.select_at(&store, Point::new(2.0, 2.0)), Some(inner));
}

#[test]
fn test_prune_drops_removed_space() {
    let mut store = SpaceStore::new();
    let id = store
        .add(SpaceKind::Room, rect(0.0, 0.0, 2.0, 2.0), 0.1)
        .unwrap();

    let mut selection = SelectionManager::new();
    selection.select(id);
    selection.prune(&store);
    assert_eq!(selection.selected_id(), Some(id));

    store.remove(id).unwrap();
    selection.prune(&store);
    assert_eq!(selection.selected_id(), None);
}
