//! Foundation elements for Clearpose: text editing and pointer input.

pub mod input;
pub mod text;

pub use input::{PointerButton, PointerButtons, PointerEvent, PointerEventKind};
pub use text::{TextChange, TextFieldBuffer, TextRange};

pub mod prelude {
    pub use crate::input::{PointerButton, PointerButtons, PointerEvent, PointerEventKind};
    pub use crate::text::{TextChange, TextFieldBuffer, TextRange};
}
