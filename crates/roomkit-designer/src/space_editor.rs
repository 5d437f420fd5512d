//! Vertex dragging with shared-vertex propagation.
//!
//! Spaces that meet at a corner store that corner independently. When a
//! vertex is grabbed, every vertex at the same coordinate (in any space, and
//! any explicit closing point) joins the drag, so adjoining spaces stay
//! connected while the corner moves.

use roomkit_core::EditorError;
use smallvec::SmallVec;

use crate::model::{Point, SpaceId};
use crate::space_store::SpaceStore;

/// A vertex that moves with the drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participant {
    pub space: SpaceId,
    pub index: usize,
}

/// An active vertex drag.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexDrag {
    space: SpaceId,
    index: usize,
    origin: Point,
    current: Point,
    participants: SmallVec<[Participant; 4]>,
}

impl VertexDrag {
    /// Space whose handle was grabbed.
    pub fn space(&self) -> SpaceId {
        self.space
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Coordinate of the grabbed vertex before the drag started.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Coordinate all participants currently share.
    pub fn current(&self) -> Point {
        self.current
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }
}

/// Drives vertex drags against a [`SpaceStore`].
#[derive(Debug, Clone, Default)]
pub struct SpaceEditor {
    drag: Option<VertexDrag>,
}

impl SpaceEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag(&self) -> Option<&VertexDrag> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Grab vertex `index` of `space`. Does not move anything.
    pub fn begin_vertex_drag(
        &mut self,
        store: &SpaceStore,
        space: SpaceId,
        index: usize,
    ) -> Result<&VertexDrag, EditorError> {
        let grabbed = store
            .get(space)
            .ok_or(EditorError::UnknownSpace { id: space })?
            .vertex(index)
            .ok_or(EditorError::InvalidVertex { id: space, index })?;

        let participants: SmallVec<[Participant; 4]> = store
            .iter()
            .flat_map(|s| {
                s.points()
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| **p == grabbed)
                    .map(|(i, _)| Participant {
                        space: s.id(),
                        index: i,
                    })
                    .collect::<SmallVec<[Participant; 4]>>()
            })
            .collect();

        tracing::debug!(
            space,
            index,
            participants = participants.len(),
            "Vertex drag started"
        );

        Ok(self.drag.insert(VertexDrag {
            space,
            index,
            origin: grabbed,
            current: grabbed,
            participants,
        }))
    }

    /// Move every participant to `target`. Returns the ids of the spaces
    /// that changed, in store order, without duplicates.
    pub fn update_vertex_drag(
        &mut self,
        store: &mut SpaceStore,
        target: Point,
    ) -> Result<SmallVec<[SpaceId; 4]>, EditorError> {
        let drag = self.drag.as_mut().ok_or(EditorError::NoSelection)?;

        let mut affected: SmallVec<[SpaceId; 4]> = SmallVec::new();
        for p in &drag.participants {
            store.set_vertex(p.space, p.index, target)?;
            if !affected.contains(&p.space) {
                affected.push(p.space);
            }
        }
        drag.current = target;
        Ok(affected)
    }

    /// Finish the drag. Returns it, if there was one.
    pub fn end_vertex_drag(&mut self) -> Option<VertexDrag> {
        let drag = self.drag.take();
        if let Some(d) = &drag {
            tracing::debug!(space = d.space, index = d.index, to = %d.current, "Vertex drag ended");
        }
        drag
    }
}
