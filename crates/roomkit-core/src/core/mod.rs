//! Editor notices and their dispatch.

pub mod notice;
