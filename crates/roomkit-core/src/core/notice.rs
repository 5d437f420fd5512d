//! Notice system for editor feedback
//!
//! Provides:
//! - Notice types describing accepted and rejected editor operations
//! - A dispatcher that fans notices out to any number of subscribers
//!
//! The editor runs on a single UI thread. The broadcast channel is only used
//! as a bounded fan-out buffer: `publish` and `try_recv` never block and no
//! runtime is required.

use crate::error::EditorError;
use tokio::sync::broadcast;

/// Severity of a notice, for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    /// Informational feedback
    Info,
    /// A rejected operation
    Warning,
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoticeLevel::Info => write!(f, "INFO"),
            NoticeLevel::Warning => write!(f, "WARN"),
        }
    }
}

/// Editor notice types
#[derive(Debug, Clone, PartialEq)]
pub enum EditorNotice {
    /// A new space was committed
    SpaceCreated {
        /// Id of the new space.
        id: u64,
        /// Generated display name.
        name: String,
        /// Enclosed area.
        area: f64,
    },
    /// One or more vertices of a space changed
    SpaceUpdated {
        /// Id of the changed space.
        id: u64,
    },
    /// A space was removed from the plan
    SpaceRemoved {
        /// Id of the removed space.
        id: u64,
    },
    /// The selection changed
    SelectionChanged(Option<u64>),
    /// An operation was rejected and nothing changed
    Rejected(EditorError),
}

impl EditorNotice {
    /// Presentation level of this notice.
    pub fn level(&self) -> NoticeLevel {
        match self {
            EditorNotice::Rejected(_) => NoticeLevel::Warning,
            _ => NoticeLevel::Info,
        }
    }
}

impl std::fmt::Display for EditorNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorNotice::SpaceCreated { name, area, .. } => {
                write!(f, "{} created ({:.2} m²)", name, area)
            }
            EditorNotice::SpaceUpdated { id } => write!(f, "Space {} updated", id),
            EditorNotice::SpaceRemoved { id } => write!(f, "Space {} removed", id),
            EditorNotice::SelectionChanged(Some(id)) => write!(f, "Selected space {}", id),
            EditorNotice::SelectionChanged(None) => write!(f, "Selection cleared"),
            EditorNotice::Rejected(err) => write!(f, "{}", err),
        }
    }
}

/// Receiving end of a notice subscription.
pub type NoticeReceiver = broadcast::Receiver<EditorNotice>;

/// Notice dispatcher for publishing notices to subscribers
#[derive(Debug, Clone)]
pub struct NoticeDispatcher {
    /// Broadcast sender channel for editor notices.
    tx: broadcast::Sender<EditorNotice>,
}

impl NoticeDispatcher {
    /// Create a new notice dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Number of notices retained for slow subscribers
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size.max(1));
        Self { tx }
    }

    /// Create a new notice dispatcher with default buffer size
    pub fn default_with_buffer() -> Self {
        Self::new(64)
    }

    /// Subscribe to notices published from now on
    pub fn subscribe(&self) -> NoticeReceiver {
        self.tx.subscribe()
    }

    /// Publish a notice to all subscribers.
    ///
    /// Returns the number of subscribers that received it. Publishing with no
    /// subscribers is not an error.
    pub fn publish(&self, notice: EditorNotice) -> usize {
        tracing::debug!(level = %notice.level(), "{}", notice);
        self.tx.send(notice).unwrap_or(0)
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for NoticeDispatcher {
    fn default() -> Self {
        Self::default_with_buffer()
    }
}
