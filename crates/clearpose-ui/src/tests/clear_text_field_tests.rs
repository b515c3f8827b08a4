use std::cell::{Cell, RefCell};
use std::rc::Rc;

use clearpose_foundation::input::PointerEvent;
use clearpose_foundation::text::TextChange;
use clearpose_ui_graphics::{Dp, EdgeInsets, Point, Size};

use crate::{defaults, ClearTextField, ClearTextFieldOptions, ResourceId};

fn laid_out_field() -> ClearTextField {
    // 200x60 px box, 10 px padding on every edge, 20 dp icon at 1x density.
    let field = ClearTextField::new(ClearTextFieldOptions {
        clear_icon: None,
        icon_size: Dp(20.0),
    });
    field.set_layout(Size::new(200.0, 60.0), EdgeInsets::uniform(10.0));
    field
}

#[test]
fn icon_hidden_at_construction() {
    let field = ClearTextField::default();
    assert!(!field.icon_visible());
    assert!(field.trailing_icon().is_none());
}

#[test]
fn default_options_use_builtin_icon_at_50dp() {
    let field = ClearTextField::default();
    let icon = field.icon_resource();
    assert_eq!(icon.id(), defaults::CLEAR_ICON);
    assert_eq!(icon.width(), 50.0);
}

#[test]
fn icon_size_scales_with_density() {
    let field = ClearTextField::new(ClearTextFieldOptions {
        clear_icon: None,
        icon_size: Dp(20.0),
    });
    field.set_density(2.0);
    assert_eq!(field.icon_resource().width(), 40.0);
}

#[test]
fn visibility_follows_focus_and_text() {
    let field = laid_out_field();

    // (unfocused, 0) -> (focused, 0): hidden
    field.notify_focus_changed(true);
    assert!(!field.icon_visible());

    // (focused, 0) -> (focused, 5): visible
    field.insert_text("hello");
    assert!(field.icon_visible());

    // (focused, 5) -> (unfocused, 5): hidden regardless of text
    field.notify_focus_changed(false);
    assert!(!field.icon_visible());
    assert_eq!(field.text(), "hello");
}

#[test]
fn gaining_focus_with_text_shows_icon() {
    let field = laid_out_field().with_text("abc");
    field.notify_focus_changed(true);
    assert!(field.icon_visible());
}

#[test]
fn unfocused_edits_never_change_visibility() {
    let field = laid_out_field();
    field.insert_text("hello");
    assert!(!field.icon_visible());
    field.set_text("");
    assert!(!field.icon_visible());
}

#[test]
fn emptying_while_focused_hides_icon() {
    let field = laid_out_field();
    field.notify_focus_changed(true);
    field.insert_text("x");
    assert!(field.icon_visible());
    field.edit(|buffer| buffer.delete_before_cursor());
    assert!(!field.icon_visible());
}

#[test]
fn focus_listener_runs_before_internal_handling() {
    let field = laid_out_field().with_text("abc");
    let seen = Rc::new(RefCell::new(Vec::new()));

    let seen_in_listener = seen.clone();
    field.set_focus_changed_listener(Some(Rc::new(move |widget: &ClearTextField, has_focus| {
        // The widget's own handling has not run yet: internal focus state
        // and icon visibility still reflect the old transition.
        seen_in_listener
            .borrow_mut()
            .push((has_focus, widget.is_focused(), widget.icon_visible()));
    })));

    field.notify_focus_changed(true);
    field.notify_focus_changed(false);

    let seen = seen.borrow();
    assert_eq!(seen[0], (true, false, false));
    assert_eq!(seen[1], (false, true, true));
}

#[test]
fn text_change_callback_receives_raw_description() {
    let field = laid_out_field();
    let last: Rc<RefCell<Option<TextChange>>> = Rc::new(RefCell::new(None));

    let sink = last.clone();
    field.set_text_changed_callback(Some(Rc::new(move |change: &TextChange| {
        *sink.borrow_mut() = Some(change.clone());
    })));

    field.insert_text("hello");
    {
        let change = last.borrow().clone().unwrap();
        assert_eq!(change.text, "hello");
        assert_eq!(change.start, 0);
        assert_eq!(change.removed, 0);
        assert_eq!(change.inserted, 5);
    }

    field.set_text("help");
    let change = last.borrow().clone().unwrap();
    assert_eq!(change.text, "help");
    assert_eq!(change.start, 3);
    assert_eq!(change.removed, 2);
    assert_eq!(change.inserted, 1);
}

#[test]
fn text_change_setter_ignores_none() {
    let field = laid_out_field();
    let fired = Rc::new(Cell::new(0));

    let counter = fired.clone();
    field.set_text_changed_callback(Some(Rc::new(move |_: &TextChange| {
        counter.set(counter.get() + 1);
    })));

    // Explicit None keeps the registered handler.
    field.set_text_changed_callback(None);
    field.insert_text("a");
    assert_eq!(fired.get(), 1);
}

#[test]
fn clear_callback_setter_accepts_none_as_unset() {
    let field = laid_out_field();
    let fired = Rc::new(Cell::new(0));

    let counter = fired.clone();
    field.set_clear_callback(Some(Rc::new(move |_: &ClearTextField| {
        counter.set(counter.get() + 1);
    })));
    field.set_clear_callback(None);

    field.notify_focus_changed(true);
    field.insert_text("hello");
    let hit = field.icon_hit_rect().unwrap();
    field.handle_pointer_event(&PointerEvent::up(Point::new(
        hit.x + hit.width / 2.0,
        hit.y + hit.height / 2.0,
    )));

    // Text cleared but no handler fired.
    assert_eq!(field.text(), "");
    assert_eq!(fired.get(), 0);
}

#[test]
fn unset_resource_id_is_ignored() {
    let field = laid_out_field();
    field.set_icon_resource(ResourceId(7));
    assert_eq!(field.icon_resource().id(), ResourceId(7));
    field.set_icon_resource(ResourceId::UNSET);
    assert_eq!(field.icon_resource().id(), ResourceId(7));
}

#[test]
fn icon_hit_rect_is_trailing_and_centered() {
    let field = laid_out_field().with_text("hello");
    field.notify_focus_changed(true);

    let hit = field.icon_hit_rect().unwrap();
    // 200 wide, 10 right padding, 20 icon: band [170, 190].
    assert_eq!(hit.x, 170.0);
    assert_eq!(hit.right(), 190.0);
    // 60 tall, 20 icon: centered band [20, 40].
    assert_eq!(hit.y, 20.0);
    assert_eq!(hit.bottom(), 40.0);
}

#[test]
fn tap_inside_icon_clears_and_fires_once() {
    let field = laid_out_field().with_text("hello");
    field.notify_focus_changed(true);

    let fired = Rc::new(Cell::new(0));
    let observed_text = Rc::new(RefCell::new(String::new()));

    let counter = fired.clone();
    let observed = observed_text.clone();
    field.set_clear_callback(Some(Rc::new(move |widget: &ClearTextField| {
        counter.set(counter.get() + 1);
        *observed.borrow_mut() = widget.text();
    })));

    field.handle_pointer_event(&PointerEvent::up(Point::new(180.0, 30.0)));

    assert_eq!(field.text(), "");
    assert_eq!(fired.get(), 1);
    // The handler sees the already-cleared widget.
    assert_eq!(*observed_text.borrow(), "");
    assert!(!field.icon_visible());
}

#[test]
fn tap_outside_band_leaves_text_and_handler_untouched() {
    let field = laid_out_field().with_text("hello");
    field.notify_focus_changed(true);

    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();
    field.set_clear_callback(Some(Rc::new(move |_: &ClearTextField| {
        counter.set(counter.get() + 1);
    })));

    // Left of the horizontal band.
    field.handle_pointer_event(&PointerEvent::up(Point::new(100.0, 30.0)));
    // Above the vertical band, inside the horizontal one.
    field.handle_pointer_event(&PointerEvent::up(Point::new(180.0, 10.0)));
    // Exactly on the band edge: exclusive comparison, no hit.
    field.handle_pointer_event(&PointerEvent::up(Point::new(170.0, 30.0)));

    assert_eq!(field.text(), "hello");
    assert_eq!(fired.get(), 0);
}

#[test]
fn tap_with_icon_hidden_never_clears() {
    let field = laid_out_field().with_text("hello");
    // Not focused, so no icon is rendered.
    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();
    field.set_clear_callback(Some(Rc::new(move |_: &ClearTextField| {
        counter.set(counter.get() + 1);
    })));

    field.handle_pointer_event(&PointerEvent::up(Point::new(180.0, 30.0)));
    assert_eq!(field.text(), "hello");
    assert_eq!(fired.get(), 0);
}

#[test]
fn press_places_caret_at_tapped_offset() {
    let field = laid_out_field().with_text("hello");
    // Padding.left is 10; advance is 8 px/char. x=10+20 -> between chars 2/3,
    // rounds to slot 3 at x=34.
    field.handle_pointer_event(&PointerEvent::down(Point::new(34.0, 30.0)));
    assert!(field.is_focused());
    field.insert_text("X");
    assert_eq!(field.text(), "helXlo");
}

#[test]
fn icon_hit_still_falls_through_to_base_handling() {
    let field = laid_out_field().with_text("hello");
    field.notify_focus_changed(true);

    // A full tap on the icon: Down focuses and moves the caret, Up clears.
    field.handle_pointer_event(&PointerEvent::down(Point::new(180.0, 30.0)));
    field.handle_pointer_event(&PointerEvent::up(Point::new(180.0, 30.0)));

    assert_eq!(field.text(), "");
    // Base handling ran: the field is focused and accepts input normally.
    assert!(field.is_focused());
    field.insert_text("again");
    assert_eq!(field.text(), "again");
    assert!(field.icon_visible());
}

#[test]
fn secondary_button_release_does_not_clear() {
    use clearpose_foundation::input::{PointerButton, PointerButtons};

    let field = laid_out_field().with_text("hello");
    field.notify_focus_changed(true);

    let event = PointerEvent::up(Point::new(180.0, 30.0))
        .with_buttons(PointerButtons::new().with(PointerButton::Secondary));
    field.handle_pointer_event(&event);
    assert_eq!(field.text(), "hello");
}
