// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events consumed by a control and events it raises.

use kurbo::Point;

/// Keys a control cares about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The commit key. Behaves like the primary pointer button.
    Space,
    /// The forced-commit key.
    Enter,
    /// Anything else.
    Other,
}

/// A key press or release.
///
/// Handlers set `handled` when they consume the event, and skip events that
/// arrive already handled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key.
    pub key: Key,
    /// Propagation stops once this is set.
    pub handled: bool,
}

impl KeyEvent {
    /// An unhandled event for `key`.
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            handled: false,
        }
    }
}

/// A pointer event, positioned in the control's local coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position relative to the control's top-left corner.
    pub position: Point,
    /// Propagation stops once this is set.
    pub handled: bool,
}

impl PointerEvent {
    /// An unhandled event at `position`.
    pub const fn new(position: Point) -> Self {
        Self {
            position,
            handled: false,
        }
    }

    /// An unhandled event at `(x, y)`.
    pub const fn at(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y))
    }
}

/// Kind of a user-visible event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlEventKind {
    /// The control committed.
    Click,
    /// A toggle became checked.
    Checked,
    /// A toggle became unchecked.
    Unchecked,
    /// A toggle became indeterminate.
    Indeterminate,
}

/// A user-visible event raised by a control. Carries no payload beyond its
/// source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ControlEvent<K> {
    /// The control that raised it.
    pub source: K,
    /// What happened.
    pub kind: ControlEventKind,
}
