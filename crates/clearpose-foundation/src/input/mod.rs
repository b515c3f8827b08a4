//! Pointer input types delivered by the host event loop.

mod types;

pub use types::{PointerButton, PointerButtons, PointerEvent, PointerEventKind};
