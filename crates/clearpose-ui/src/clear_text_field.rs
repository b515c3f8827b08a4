//! Clearable single-line text field.
//!
//! The widget renders a trailing clear icon while it is focused and
//! non-empty, clears its content when the icon is tapped, and relays
//! focus/text-change notifications to optional external listeners.
//!
//! # Architecture
//!
//! The widget owns a [`TextFieldBuffer`] and derives the icon's
//! visibility from `(has_focus, text non-empty)` on every transition.
//! There is one callback slot per event kind; each slot holds zero or one
//! external handler and replacing a slot discards the previous handler.
//! All operations run synchronously on the UI thread in response to
//! host-delivered events.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use clearpose_foundation::input::{PointerEvent, PointerEventKind};
use clearpose_foundation::text::{TextChange, TextFieldBuffer};
use clearpose_ui_graphics::{Dp, EdgeInsets, Rect, Size};

use crate::focus::{self, FocusTarget};
use crate::icon::{defaults, IconResource, ResourceId};
use crate::text::byte_offset_for_x;

/// Default side of the clear icon, in dp.
const DEFAULT_ICON_SIZE: Dp = Dp(50.0);

/// Fixed per-char advance used for caret placement, in px.
const CHAR_ADVANCE: f32 = 8.0;

/// Handler for text changes. Receives the raw change description.
pub type TextChangedCallback = Rc<dyn Fn(&TextChange)>;

/// Handler invoked after the clear icon wiped the field.
pub type ClearCallback = Rc<dyn Fn(&ClearTextField)>;

/// Handler invoked on every focus transition, before the widget's own
/// focus handling runs.
pub type FocusChangedCallback = Rc<dyn Fn(&ClearTextField, bool)>;

/// Construction-time configuration for [`ClearTextField`].
///
/// `clear_icon` falls back to the built-in clear asset when `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClearTextFieldOptions {
    /// Icon asset reference; `None` selects [`defaults::CLEAR_ICON`].
    pub clear_icon: Option<ResourceId>,
    /// Square icon dimension in density-independent units.
    pub icon_size: Dp,
}

impl Default for ClearTextFieldOptions {
    fn default() -> Self {
        Self {
            clear_icon: None,
            icon_size: DEFAULT_ICON_SIZE,
        }
    }
}

struct FieldInner {
    /// Weak self-handle so pipelines can hand a widget reference to
    /// external callbacks.
    self_weak: Weak<FieldInner>,
    buffer: RefCell<TextFieldBuffer>,
    icon_id: Cell<ResourceId>,
    icon_size: Cell<Dp>,
    /// Derived: true iff focused and non-empty. This is the rendered
    /// trailing-decoration slot.
    icon_visible: Cell<bool>,
    is_focused: Cell<bool>,
    size: Cell<Size>,
    padding: Cell<EdgeInsets>,
    density: Cell<f32>,
    on_text_changed: RefCell<Option<TextChangedCallback>>,
    on_clear: RefCell<Option<ClearCallback>>,
    on_focus_changed: RefCell<Option<FocusChangedCallback>>,
}

impl FieldInner {
    fn handle(&self) -> Option<ClearTextField> {
        self.self_weak
            .upgrade()
            .map(|inner| ClearTextField { inner })
    }

    fn apply_visibility_rule(&self, has_focus: bool) {
        let visible = has_focus && !self.buffer.borrow().is_empty();
        if visible != self.icon_visible.get() {
            log::trace!("clear icon visibility -> {visible}");
        }
        self.icon_visible.set(visible);
    }

    /// Focus pipeline: forward to the external listener first, then record
    /// the focus flag, then apply the visibility rule. The ordering is part
    /// of the widget's contract.
    ///
    /// Runs only on a real transition: the field can learn about focus
    /// through the dispatcher or through a host notification, and a repeat
    /// of the current state from either entry point must not refire the
    /// external listener.
    fn run_focus_pipeline(&self, has_focus: bool) {
        if has_focus == self.is_focused.get() {
            return;
        }
        let listener = self.on_focus_changed.borrow().clone();
        if let (Some(listener), Some(handle)) = (listener, self.handle()) {
            listener(&handle, has_focus);
        }
        self.is_focused.set(has_focus);
        self.apply_visibility_rule(has_focus);
    }

    /// Text-change pipeline: visibility rule first (only while focused),
    /// then forward the change description.
    fn run_text_changed_pipeline(&self, change: &TextChange) {
        if self.is_focused.get() {
            self.apply_visibility_rule(true);
        }
        let callback = self.on_text_changed.borrow().clone();
        if let Some(callback) = callback {
            callback(change);
        }
    }
}

impl FocusTarget for FieldInner {
    fn apply_focus_change(&self, has_focus: bool) {
        self.run_focus_pipeline(has_focus);
    }
}

/// A text input with a trailing clear icon.
///
/// Cheap to clone: clones are handles to the same field.
///
/// # Example
///
/// ```
/// use clearpose_ui::{ClearTextField, ClearTextFieldOptions};
///
/// let field = ClearTextField::new(ClearTextFieldOptions::default());
/// field.insert_text("hello");
/// assert_eq!(field.text(), "hello");
/// ```
#[derive(Clone)]
pub struct ClearTextField {
    inner: Rc<FieldInner>,
}

impl std::fmt::Debug for ClearTextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClearTextField")
            .field("text", &self.inner.buffer.borrow().text())
            .field("is_focused", &self.inner.is_focused.get())
            .field("icon_visible", &self.inner.icon_visible.get())
            .finish()
    }
}

impl ClearTextField {
    /// Creates a field from construction options. The icon starts hidden.
    pub fn new(options: ClearTextFieldOptions) -> Self {
        let icon_id = options.clear_icon.unwrap_or(defaults::CLEAR_ICON);
        let inner = Rc::new_cyclic(|self_weak| FieldInner {
            self_weak: self_weak.clone(),
            buffer: RefCell::new(TextFieldBuffer::default()),
            icon_id: Cell::new(icon_id),
            icon_size: Cell::new(options.icon_size),
            icon_visible: Cell::new(false),
            is_focused: Cell::new(false),
            size: Cell::new(Size::ZERO),
            padding: Cell::new(EdgeInsets::default()),
            density: Cell::new(1.0),
            on_text_changed: RefCell::new(None),
            on_clear: RefCell::new(None),
            on_focus_changed: RefCell::new(None),
        });
        Self { inner }
    }

    /// Sets the initial text without firing the text-change pipeline.
    /// Intended for construction time, before callbacks are registered.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        *self.inner.buffer.borrow_mut() = TextFieldBuffer::new(text);
        self
    }

    // ========== State Queries ==========

    /// Returns the current text content.
    pub fn text(&self) -> String {
        self.inner.buffer.borrow().text().to_string()
    }

    /// Returns the text length in bytes.
    pub fn text_len(&self) -> usize {
        self.inner.buffer.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.buffer.borrow().is_empty()
    }

    pub fn is_focused(&self) -> bool {
        self.inner.is_focused.get()
    }

    /// True when the trailing clear icon is currently rendered.
    pub fn icon_visible(&self) -> bool {
        self.inner.icon_visible.get()
    }

    /// The configured icon, with bounds in px at the current density.
    pub fn icon_resource(&self) -> IconResource {
        let side = self
            .inner
            .icon_size
            .get()
            .to_px(self.inner.density.get());
        IconResource::new(self.inner.icon_id.get(), side)
    }

    /// The rendered trailing decoration, or `None` while hidden. This is
    /// what a renderer queries when drawing the field.
    pub fn trailing_icon(&self) -> Option<IconResource> {
        self.inner.icon_visible.get().then(|| self.icon_resource())
    }

    // ========== Configuration ==========

    /// Assigns the icon asset. A call with [`ResourceId::UNSET`] is a
    /// no-op: the previously configured icon stays.
    pub fn set_icon_resource(&self, id: ResourceId) {
        if id.is_unset() {
            return;
        }
        self.inner.icon_id.set(id);
    }

    /// Replaces the text-change handler.
    ///
    /// Passing `None` keeps the existing handler. Explicit unset is not
    /// part of this slot's contract; the clear-callback slot differs.
    pub fn set_text_changed_callback(&self, callback: Option<TextChangedCallback>) {
        if let Some(callback) = callback {
            *self.inner.on_text_changed.borrow_mut() = Some(callback);
        }
    }

    /// Replaces the icon-tap handler unconditionally; `None` unsets it.
    pub fn set_clear_callback(&self, callback: Option<ClearCallback>) {
        *self.inner.on_clear.borrow_mut() = callback;
    }

    /// Stores the single external focus listener, invoked before the
    /// widget's own handling on every focus transition.
    pub fn set_focus_changed_listener(&self, listener: Option<FocusChangedCallback>) {
        *self.inner.on_focus_changed.borrow_mut() = listener;
    }

    /// Assigns the layout box the host measured for this field.
    pub fn set_layout(&self, size: Size, padding: EdgeInsets) {
        self.inner.size.set(size);
        self.inner.padding.set(padding);
    }

    /// Sets the display density used for dp-to-px conversion.
    pub fn set_density(&self, density: f32) {
        self.inner.density.set(density);
    }

    pub fn size(&self) -> Size {
        self.inner.size.get()
    }

    pub fn padding(&self) -> EdgeInsets {
        self.inner.padding.get()
    }

    // ========== Text Mutation ==========

    /// Edits the text through a mutable buffer. After the closure runs,
    /// any resulting change drives the visibility rule (while focused) and
    /// is forwarded to the text-change handler.
    pub fn edit(&self, f: impl FnOnce(&mut TextFieldBuffer)) {
        let old = self.inner.buffer.borrow().text().to_string();
        f(&mut self.inner.buffer.borrow_mut());
        let new = self.inner.buffer.borrow().text().to_string();
        if let Some(change) = TextChange::between(&old, &new) {
            log::trace!(
                "text changed at {} (-{} +{})",
                change.start,
                change.removed,
                change.inserted
            );
            self.inner.run_text_changed_pipeline(&change);
        }
    }

    /// Replaces the whole content.
    pub fn set_text(&self, text: &str) {
        self.edit(|buffer| {
            buffer.select_all();
            buffer.insert(text);
        });
    }

    /// Inserts at the cursor (or over the selection).
    pub fn insert_text(&self, text: &str) {
        self.edit(|buffer| buffer.insert(text));
    }

    /// Clears the content through the normal edit pipeline.
    pub fn clear_text(&self) {
        self.edit(|buffer| buffer.clear());
    }

    // ========== Focus ==========

    /// Requests focus through the shared dispatcher; the previously
    /// focused field (if any) is blurred first.
    pub fn request_focus(&self) {
        let target: Rc<dyn FocusTarget> = self.inner.clone();
        focus::request_focus(&target);
    }

    /// Drops focus if this field currently holds it.
    pub fn blur(&self) {
        if self.inner.is_focused.get() {
            focus::clear_focus();
        }
    }

    /// Host-delivered focus transition, for environments that manage
    /// focus themselves instead of going through the dispatcher.
    pub fn notify_focus_changed(&self, has_focus: bool) {
        self.inner.run_focus_pipeline(has_focus);
    }

    // ========== Pointer Input ==========

    /// The icon's hit region in widget coordinates, or `None` while the
    /// icon is not rendered. Horizontal band: trailing content edge minus
    /// the icon width. Vertical band: centered in the field's height.
    pub fn icon_hit_rect(&self) -> Option<Rect> {
        if !self.inner.icon_visible.get() {
            return None;
        }
        let size = self.inner.size.get();
        let padding = self.inner.padding.get();
        let icon = self.icon_resource();
        Some(Rect {
            x: size.width - padding.right - icon.width(),
            y: (size.height - icon.height()) / 2.0,
            width: icon.width(),
            height: icon.height(),
        })
    }

    /// Handles a pointer event in widget-local coordinates.
    ///
    /// Release events are hit-tested against the icon region; a hit clears
    /// the text and then fires the clear callback. Hit or miss, the event
    /// falls through to base input handling, so the caret still moves the
    /// way it would in a plain field.
    pub fn handle_pointer_event(&self, event: &PointerEvent) {
        if event.kind == PointerEventKind::Up && event.is_primary() {
            if let Some(hit) = self.icon_hit_rect() {
                let x = event.position.x;
                let y = event.position.y;
                // Exclusive edges, matching the original band comparisons.
                let inner_width = x > hit.x && x < hit.right();
                let inner_height = y > hit.y && y < hit.bottom();
                if inner_width && inner_height {
                    log::debug!("clear icon tapped, wiping field");
                    self.clear_text();
                    let callback = self.inner.on_clear.borrow().clone();
                    if let Some(callback) = callback {
                        callback(self);
                    }
                }
            }
        }

        self.base_handle_pointer(event);
    }

    /// Default input handling of the underlying plain field: press focuses
    /// and places the caret at the tapped offset.
    fn base_handle_pointer(&self, event: &PointerEvent) {
        if event.kind != PointerEventKind::Down || !event.is_primary() {
            return;
        }
        self.request_focus();
        let padding = self.inner.padding.get();
        let x = (event.position.x - padding.left).max(0.0);
        let offset = {
            let buffer = self.inner.buffer.borrow();
            byte_offset_for_x(buffer.text(), x, CHAR_ADVANCE)
        };
        self.edit(|buffer| buffer.place_cursor_before_char(offset));
    }
}

impl Default for ClearTextField {
    fn default() -> Self {
        Self::new(ClearTextFieldOptions::default())
    }
}
