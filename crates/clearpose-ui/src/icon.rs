//! Icon resources for trailing field decorations.
//!
//! Icons are referenced by opaque [`ResourceId`]s the host renderer
//! resolves to actual pixels. The widget never validates an id beyond the
//! unset check; an id the host cannot resolve surfaces as a host-level
//! error, not something handled here.

use clearpose_ui_graphics::Size;

/// Opaque identifier for an image asset known to the host.
///
/// Id `0` is the conventional "unset" value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResourceId(pub u32);

impl ResourceId {
    pub const UNSET: ResourceId = ResourceId(0);

    pub const fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

/// Built-in asset ids shipped with the widget layer.
pub mod defaults {
    use super::ResourceId;

    /// The stock clear ("x in circle") icon used when no icon is
    /// configured at construction time.
    pub const CLEAR_ICON: ResourceId = ResourceId(0xC1EA_0001);
}

/// An icon asset plus its square rendered bounds, in pixels.
///
/// Owned exclusively by the widget instance holding it; dropped with the
/// widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconResource {
    id: ResourceId,
    /// Rendered side length in pixels (width == height).
    side: f32,
}

impl IconResource {
    pub fn new(id: ResourceId, side: f32) -> Self {
        Self { id, side }
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }

    /// The rendered bounds: a square of the configured side.
    pub fn bounds(&self) -> Size {
        Size::square(self.side)
    }

    pub fn width(&self) -> f32 {
        self.side
    }

    pub fn height(&self) -> f32 {
        self.side
    }
}
