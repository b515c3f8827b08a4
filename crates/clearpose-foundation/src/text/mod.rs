//! Text editing primitives for single-line input fields.

mod buffer;
mod change;
mod range;

pub use buffer::TextFieldBuffer;
pub use change::TextChange;
pub use range::TextRange;
