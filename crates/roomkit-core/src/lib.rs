//! # RoomKit Core
//!
//! Core types shared by the RoomKit crates.
//! Provides the error taxonomy for rejected editor operations, the default
//! editing constants, and the notice dispatcher used to report outcomes
//! back to the presentation layer.

pub mod constants;
pub mod core;
pub mod error;

pub use core::notice::{EditorNotice, NoticeDispatcher, NoticeLevel, NoticeReceiver};
pub use error::{EditorError, Error, Result};
