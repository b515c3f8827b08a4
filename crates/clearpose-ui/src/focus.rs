//! Global focus dispatcher for input fields.
//!
//! Tracks which field currently has focus, ensuring only one field is
//! focused at a time. When a new field requests focus, the previously
//! focused field is unfocused first and each side runs its own
//! focus-change pipeline.
//!
//! ARCHITECTURE: Uses thread-local storage as the single source of truth
//! for focus state. This is correct for single-threaded UI frameworks like
//! this one.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A widget that can receive focus transitions from the dispatcher.
pub trait FocusTarget {
    /// Runs the widget's focus-change pipeline for the new state.
    fn apply_focus_change(&self, has_focus: bool);
}

thread_local! {
    static FOCUSED_TARGET: RefCell<Option<Weak<dyn FocusTarget>>> = const { RefCell::new(None) };
}

/// Requests focus for a field.
///
/// If another field was previously focused it is unfocused first. A
/// request from the already-focused field is a no-op, so its listeners do
/// not fire twice.
pub fn request_focus(target: &Rc<dyn FocusTarget>) {
    let target_ptr = Rc::as_ptr(target) as *const ();

    // Swap the stored handle first; the pipelines run outside the borrow
    // so a listener that touches the dispatcher cannot re-enter it.
    let mut previous = None;
    let already_focused = FOCUSED_TARGET.with(|current| {
        let mut current = current.borrow_mut();
        if current
            .as_ref()
            .is_some_and(|weak| weak.as_ptr() as *const () == target_ptr)
        {
            return true;
        }
        previous = current.replace(Rc::downgrade(target));
        false
    });

    if already_focused {
        return;
    }

    if let Some(old) = previous.and_then(|weak| weak.upgrade()) {
        // Unfocus the previously focused field (if still alive)
        old.apply_focus_change(false);
    }

    log::trace!("focus transferred to new target");
    target.apply_focus_change(true);
}

/// Clears focus from the currently focused field, if any.
pub fn clear_focus() {
    let previous = FOCUSED_TARGET.with(|current| current.borrow_mut().take());
    if let Some(target) = previous.and_then(|weak| weak.upgrade()) {
        log::trace!("focus cleared");
        target.apply_focus_change(false);
    }
}

/// Returns true when a live field currently holds focus.
pub fn focused_target_alive() -> bool {
    FOCUSED_TARGET.with(|current| {
        current
            .borrow()
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    })
}
