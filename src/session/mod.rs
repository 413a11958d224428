//! One editing session: the current configuration and the handles that act on it.

pub mod editor;

pub use editor::{EditorSession, date_stamp_for};
