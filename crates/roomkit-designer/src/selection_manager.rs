use crate::model::{Point, SpaceId};
use crate::space_store::SpaceStore;

/// Manages space selection state.
///
/// `SelectionManager` is responsible for:
/// - Tracking which space is selected
/// - Handling point-based selection (clicking inside a space)
///
/// # Selection Model
///
/// At most one space is selected. Rooms and verandas share the same slot, so
/// selecting a veranda deselects any room and the other way round.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    /// The ID of the selected space, if any
    selected_id: Option<SpaceId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use roomkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the ID of the selected space.
    pub fn selected_id(&self) -> Option<SpaceId> {
        self.selected_id
    }

    /// Returns `true` if `id` is the selected space.
    pub fn is_selected(&self, id: SpaceId) -> bool {
        self.selected_id == Some(id)
    }

    /// Selects `id`, replacing any previous selection.
    ///
    /// Returns `true` if the selection changed.
    pub fn select(&mut self, id: SpaceId) -> bool {
        let changed = self.selected_id != Some(id);
        self.selected_id = Some(id);
        changed
    }

    /// Clears the selection.
    ///
    /// Returns `true` if something was selected.
    pub fn clear(&mut self) -> bool {
        self.selected_id.take().is_some()
    }

    /// Selects the topmost space containing `point`.
    ///
    /// Spaces later in the store are drawn above earlier ones, so they win
    /// when outlines overlap. Clicking empty ground clears the selection.
    ///
    /// # Returns
    ///
    /// The ID of the newly selected space, or `None` if no space was hit.
    pub fn select_at(&mut self, store: &SpaceStore, point: Point) -> Option<SpaceId> {
        self.selected_id = store
            .iter()
            .rev()
            .find(|space| space.contains(point))
            .map(|space| space.id());
        self.selected_id
    }

    /// Drops the selection if it refers to a space no longer in `store`.
    pub fn prune(&mut self, store: &SpaceStore) {
        if let Some(id) = self.selected_id {
            if !store.contains(id) {
                self.selected_id = None;
            }
        }
    }
}
