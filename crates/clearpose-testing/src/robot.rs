//! Robot testing harness for driving a field with synthetic events.
//!
//! This module provides a robot-style testing API that allows tests to:
//! - Construct a laid-out field for a given viewport
//! - Perform interactions (presses, releases, clicks, typing)
//! - Drive focus transitions
//! - Query the resulting widget state
//!
//! # Example
//!
//! ```
//! use clearpose_testing::robot::FieldRobot;
//!
//! let robot = FieldRobot::new(200.0, 60.0);
//! robot.focus();
//! robot.type_text("hello");
//! assert!(robot.icon_visible());
//! ```

use clearpose_foundation::input::PointerEvent;
use clearpose_ui::{ClearTextField, ClearTextFieldOptions};
use clearpose_ui_graphics::{EdgeInsets, Point, Rect, Size};

/// Default padding applied to robot-built fields, in px.
const DEFAULT_PADDING: f32 = 10.0;

/// Drives a single [`ClearTextField`] with synthetic input.
pub struct FieldRobot {
    field: ClearTextField,
}

impl FieldRobot {
    /// Creates a field with default options, laid out at the given size
    /// with uniform padding.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_options(width, height, ClearTextFieldOptions::default())
    }

    /// Creates a field with explicit construction options.
    pub fn with_options(width: f32, height: f32, options: ClearTextFieldOptions) -> Self {
        let field = ClearTextField::new(options);
        field.set_layout(
            Size::new(width, height),
            EdgeInsets::uniform(DEFAULT_PADDING),
        );
        Self { field }
    }

    /// The field under test, for direct configuration.
    pub fn field(&self) -> &ClearTextField {
        &self.field
    }

    // ========== Interactions ==========

    /// Sends a primary-button press at the given widget coordinates.
    pub fn pointer_down(&self, x: f32, y: f32) {
        self.field
            .handle_pointer_event(&PointerEvent::down(Point::new(x, y)));
    }

    /// Sends a release at the given widget coordinates.
    pub fn pointer_up(&self, x: f32, y: f32) {
        self.field
            .handle_pointer_event(&PointerEvent::up(Point::new(x, y)));
    }

    /// Full tap: press then release at the same point.
    pub fn click_at(&self, x: f32, y: f32) {
        self.pointer_down(x, y);
        self.pointer_up(x, y);
    }

    /// Taps the center of the clear icon's hit region. Panics if the icon
    /// is not currently rendered; assert visibility first.
    pub fn click_clear_icon(&self) {
        let rect = self
            .field
            .icon_hit_rect()
            .expect("clear icon is not rendered");
        self.click_at(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
    }

    /// Types text at the cursor through the edit pipeline.
    pub fn type_text(&self, text: &str) {
        self.field.insert_text(text);
    }

    /// Gives the field focus through the shared dispatcher.
    pub fn focus(&self) {
        self.field.request_focus();
    }

    /// Removes focus from the field.
    pub fn blur(&self) {
        self.field.blur();
    }

    // ========== State Queries ==========

    pub fn text(&self) -> String {
        self.field.text()
    }

    pub fn is_focused(&self) -> bool {
        self.field.is_focused()
    }

    pub fn icon_visible(&self) -> bool {
        self.field.icon_visible()
    }

    pub fn icon_rect(&self) -> Option<Rect> {
        self.field.icon_hit_rect()
    }
}
