//! Invitation editing: the preview store, the feature panels that edit it,
//! and the renderer that projects it into the live preview.

pub mod dashboard;
pub mod error;
pub mod notify;
pub mod panel;
pub mod preview;
pub mod render;
pub mod session;
