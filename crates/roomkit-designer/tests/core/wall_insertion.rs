use roomkit_core::EditorError;
use roomkit_designer::model::{Point, SpaceKind};
use roomkit_designer::space_store::SpaceStore;
use roomkit_designer::wall_insertion::{find_closest_wall, insert_vertex};

fn rect(x0: f64, z0: f64, x1: f64, z1: f64) -> Vec<Point> {
    vec![
        Point::new(x0, z0),
        Point::new(x1, z0),
        Point::new(x1, z1),
        Point::new(x0, z1),
    ]
}

#[test]
fn test_midpoint_of_edge() {
    let mut store = SpaceStore::new();
    let id = store
        .add(SpaceKind::Room, rect(0.0, 0.0, 2.0, 2.0), 0.1)
        .unwrap();

    let hit = find_closest_wall(Point::new(1.0, 0.0), store.as_slice(), 1.0).unwrap();
    assert_eq!(hit.space, id);
    assert_eq!(hit.insert_index, 1);
    assert_eq!(hit.position, Point::new(1.0, 0.0));
    assert_eq!(hit.distance, 0.0);

    insert_vertex(&mut store, hit.space, hit.insert_index, hit.position).unwrap();
    let space = store.get(id).unwrap();
    assert_eq!(space.vertex_count(), 5);
    assert_eq!(space.vertex(1), Some(Point::new(1.0, 0.0)));
    assert_eq!(space.area(), 4.0);
}

#[test]
fn test_projection_off_the_wall() {
    let mut store = SpaceStore::new();
    store
        .add(SpaceKind::Room, rect(0.0, 0.0, 2.0, 2.0), 0.1)
        .unwrap();

    let hit = find_closest_wall(Point::new(2.6, 1.5), store.as_slice(), 1.0).unwrap();
    assert_eq!(hit.insert_index, 2);
    assert_eq!(hit.position, Point::new(2.0, 1.5));
    assert!((hit.distance - 0.6).abs() < 1e-12);
}

#[test]
fn test_wrap_around_edge_appends() {
    let mut store = SpaceStore::new();
    let id = store
        .add(SpaceKind::Room, rect(0.0, 0.0, 2.0, 2.0), 0.1)
        .unwrap();

    let hit = find_closest_wall(Point::new(-0.2, 1.0), store.as_slice(), 1.0).unwrap();
    assert_eq!(hit.insert_index, 4);

    insert_vertex(&mut store, id, hit.insert_index, hit.position).unwrap();
    assert_eq!(
        store.get(id).unwrap().points().last(),
        Some(&Point::new(0.0, 1.0))
    );
}

#[test]
fn test_nothing_within_distance() {
    let mut store = SpaceStore::new();
    store
        .add(SpaceKind::Room, rect(0.0, 0.0, 2.0, 2.0), 0.1)
        .unwrap();

    assert!(find_closest_wall(Point::new(1.0, 5.0), store.as_slice(), 1.0).is_none());
    // Exactly at the limit is outside.
    assert!(find_closest_wall(Point::new(1.0, 3.0), store.as_slice(), 1.0).is_none());
    assert!(find_closest_wall(Point::new(1.0, 1.0), &[], 1.0).is_none());
}

#[test]
fn test_ties_keep_first_edge() {
    let mut store = SpaceStore::new();
    let a = store
        .add(SpaceKind::Room, rect(0.0, 0.0, 2.0, 2.0), 0.1)
        .unwrap();
    store
        .add(SpaceKind::Room, rect(2.0, 0.0, 4.0, 2.0), 0.1)
        .unwrap();

    // On the shared edge: room a's edge comes first.
    let hit = find_closest_wall(Point::new(2.0, 1.0), store.as_slice(), 1.0).unwrap();
    assert_eq!(hit.space, a);
    assert_eq!(hit.insert_index, 2);
}

#[test]
fn test_veranda_grid_is_not_a_target() {
    let mut store = SpaceStore::new();
    store
        .add(SpaceKind::Veranda, rect(0.0, 0.0, 4.0, 4.0), 0.1)
        .unwrap();

    // (2, 2) lies on interior grid lines but is 2.0 from every outline edge.
    assert!(find_closest_wall(Point::new(2.0, 2.0), store.as_slice(), 1.0).is_none());
}

#[test]
fn test_insert_into_unknown_space() {
    let mut store = SpaceStore::new();
    assert_eq!(
        insert_vertex(&mut store, 7, 0, Point::origin()),
        Err(EditorError::UnknownSpace { id: 7 })
    );
}
