//! Widget layer for Clearpose.
//!
//! The main export is [`ClearTextField`], a single-line text input that
//! shows a trailing clear icon while focused and non-empty, clears its
//! content when the icon is tapped, and forwards focus/text-change events
//! to caller-supplied callbacks.

mod clear_text_field;
pub mod focus;
mod icon;
mod text;

#[cfg(test)]
mod tests;

pub use clear_text_field::{
    ClearCallback, ClearTextField, ClearTextFieldOptions, FocusChangedCallback,
    TextChangedCallback,
};
pub use icon::{defaults, IconResource, ResourceId};
pub use text::byte_offset_for_x;

pub mod prelude {
    pub use crate::clear_text_field::{ClearTextField, ClearTextFieldOptions};
    pub use crate::focus::{clear_focus, request_focus};
    pub use crate::icon::{defaults, IconResource, ResourceId};
}
