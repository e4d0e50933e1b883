pub mod overlay;

pub use overlay::{NullOverlay, OverlayDisplay, Tooltip};
