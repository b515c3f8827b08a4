//! Simulated input session against a `ClearTextField`.
//!
//! There is no renderer here; the demo wires the callback surface and
//! replays the events a host would deliver, printing the widget state
//! after each step.

use std::rc::Rc;

use clearpose_foundation::input::PointerEvent;
use clearpose_foundation::text::TextChange;
use clearpose_ui::{ClearTextField, ClearTextFieldOptions};
use clearpose_ui_graphics::{EdgeInsets, Point, Size};

fn dump(step: &str, field: &ClearTextField) {
    println!(
        "{step:32} text={:?} focused={} icon={}",
        field.text(),
        field.is_focused(),
        field.icon_visible()
    );
}

fn main() {
    let field = ClearTextField::new(ClearTextFieldOptions::default());
    field.set_layout(Size::new(240.0, 64.0), EdgeInsets::uniform(8.0));

    field.set_text_changed_callback(Some(Rc::new(|change: &TextChange| {
        println!(
            "  [text-changed] {:?} (start={} -{} +{})",
            change.text, change.start, change.removed, change.inserted
        );
    })));
    field.set_focus_changed_listener(Some(Rc::new(|_: &ClearTextField, has_focus| {
        println!("  [focus-changed] has_focus={has_focus}");
    })));
    field.set_clear_callback(Some(Rc::new(|field: &ClearTextField| {
        println!("  [cleared] text is now {:?}", field.text());
    })));

    dump("start", &field);

    // Tap into the text area: focuses the field.
    field.handle_pointer_event(&PointerEvent::down(Point::new(30.0, 32.0)));
    field.handle_pointer_event(&PointerEvent::up(Point::new(30.0, 32.0)));
    dump("after tap in text area", &field);

    field.insert_text("hello world");
    dump("after typing", &field);

    // Tap the clear icon.
    if let Some(rect) = field.icon_hit_rect() {
        let center = Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
        field.handle_pointer_event(&PointerEvent::down(center));
        field.handle_pointer_event(&PointerEvent::up(center));
    }
    dump("after icon tap", &field);

    field.blur();
    dump("after blur", &field);
}
