//! Owned collection of finalized spaces.

use roomkit_core::EditorError;

use crate::geometry;
use crate::model::{Point, Space, SpaceId, SpaceKind};

/// Stores spaces in creation order and hands out ids and names.
///
/// Ids start at 1 and names use a per-kind counter ("Room 1", "Veranda 1").
/// Neither is reused after removal.
#[derive(Debug, Clone)]
pub struct SpaceStore {
    spaces: Vec<Space>,
    next_id: SpaceId,
    room_count: u32,
    veranda_count: u32,
}

impl SpaceStore {
    pub fn new() -> Self {
        Self {
            spaces: Vec::new(),
            next_id: 1,
            room_count: 0,
            veranda_count: 0,
        }
    }

    /// Add a space with the given outline if it encloses more than
    /// `min_area`.
    pub fn add(
        &mut self,
        kind: SpaceKind,
        points: Vec<Point>,
        min_area: f64,
    ) -> Result<SpaceId, EditorError> {
        let area = geometry::area(&points);
        if area <= min_area {
            return Err(EditorError::DegenerateShape { area, min_area });
        }

        let ordinal = match kind {
            SpaceKind::Room => {
                self.room_count += 1;
                self.room_count
            }
            SpaceKind::Veranda => {
                self.veranda_count += 1;
                self.veranda_count
            }
        };
        let id = self.next_id;
        self.next_id += 1;

        let name = format!("{} {}", kind.label(), ordinal);
        tracing::info!(id, %name, area, "Space created");
        self.spaces.push(Space::new(id, kind, name, points));
        Ok(id)
    }

    pub fn get(&self, id: SpaceId) -> Option<&Space> {
        self.spaces.iter().find(|s| s.id() == id)
    }

    pub fn contains(&self, id: SpaceId) -> bool {
        self.get(id).is_some()
    }

    pub fn remove(&mut self, id: SpaceId) -> Result<Space, EditorError> {
        let pos = self
            .spaces
            .iter()
            .position(|s| s.id() == id)
            .ok_or(EditorError::UnknownSpace { id })?;
        let space = self.spaces.remove(pos);
        tracing::info!(id, name = space.name(), "Space removed");
        Ok(space)
    }

    /// Move one vertex, recomputing the space's derived values.
    pub fn set_vertex(&mut self, id: SpaceId, index: usize, p: Point) -> Result<(), EditorError> {
        let space = self.get_mut(id)?;
        if space.set_vertex(index, p) {
            Ok(())
        } else {
            Err(EditorError::InvalidVertex { id, index })
        }
    }

    /// Insert a vertex before `index`; `index == vertex_count` appends.
    pub fn insert_vertex(
        &mut self,
        id: SpaceId,
        index: usize,
        p: Point,
    ) -> Result<(), EditorError> {
        let space = self.get_mut(id)?;
        if space.insert_vertex(index, p) {
            Ok(())
        } else {
            Err(EditorError::InvalidVertex { id, index })
        }
    }

    /// All spaces in creation order.
    pub fn as_slice(&self) -> &[Space] {
        &self.spaces
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Space> {
        self.spaces.iter()
    }

    pub fn of_kind(&self, kind: SpaceKind) -> impl Iterator<Item = &Space> {
        self.spaces.iter().filter(move |s| s.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Remove every space and restart ids and names.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn get_mut(&mut self, id: SpaceId) -> Result<&mut Space, EditorError> {
        self.spaces
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(EditorError::UnknownSpace { id })
    }
}

impl Default for SpaceStore {
    fn default() -> Self {
        Self::new()
    }
}
