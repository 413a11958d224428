pub mod fit;

pub use fit::{Breakpoint, MOUNT_SETTLE_DELAY, PreviewFit, Viewport, fit_preview};
