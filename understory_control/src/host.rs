// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_visual_state::{FocusVisuals, TransitionPlayer};

/// The runtime a control lives in.
///
/// Besides playing transitions, the host arbitrates pointer capture and
/// keyboard focus. Capture is exclusive and system-wide: a control never
/// assumes it still holds it, and
/// [`release_pointer_capture`](Self::release_pointer_capture) must be safe to
/// call when capture was never obtained or has already moved elsewhere.
pub trait ControlHost<T>: TransitionPlayer<T> {
    /// Try to route subsequent pointer events to this control.
    fn capture_pointer(&mut self) -> bool;

    /// Give pointer capture back. Idempotent.
    fn release_pointer_capture(&mut self);

    /// Ask for keyboard focus. Focus changes are reported back through
    /// [`Control::on_got_focus`](crate::Control::on_got_focus).
    fn focus(&mut self) -> bool;

    /// Called when the visibility of the focus adorners changes.
    fn set_focus_visuals(&mut self, visuals: FocusVisuals) {
        let _ = visuals;
    }
}
