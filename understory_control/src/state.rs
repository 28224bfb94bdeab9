// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical flags and per-control input session.

use kurbo::{Point, Size};

bitflags::bitflags! {
    /// Orthogonal logical flags of a control.
    ///
    /// The check axis of toggle controls is kept separately, see
    /// [`CommitBehavior`](crate::CommitBehavior).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LogicalState: u8 {
        /// The control accepts input.
        const ENABLED  = 0b0000_0001;
        /// The control has keyboard focus.
        const FOCUSED  = 0b0000_0010;
        /// The pointer is over the control.
        const HOVERED  = 0b0000_0100;
        /// The control is being activated.
        const PRESSED  = 0b0000_1000;
        /// The control takes part in tab navigation. Always equal to `ENABLED`.
        const TAB_STOP = 0b0001_0000;
    }
}

impl Default for LogicalState {
    fn default() -> Self {
        Self::ENABLED | Self::TAB_STOP
    }
}

/// Transient input-device state owned by a single control.
///
/// Only the control's input handlers change it. Everything is cleared when
/// the control is disabled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSession {
    pub(crate) mouse_captured: bool,
    pub(crate) commit_key_down: bool,
    pub(crate) primary_button_down: bool,
    pub(crate) last_pointer: Point,
}

impl InputSession {
    /// The control believes it holds pointer capture.
    pub fn mouse_captured(&self) -> bool {
        self.mouse_captured
    }

    /// The commit key (space) is held.
    pub fn commit_key_down(&self) -> bool {
        self.commit_key_down
    }

    /// The primary pointer button is down.
    pub fn primary_button_down(&self) -> bool {
        self.primary_button_down
    }

    /// Last pointer position seen by the control, in its local coordinates.
    pub fn last_pointer(&self) -> Point {
        self.last_pointer
    }

    /// Clear the three activity flags.
    ///
    /// The last pointer position is kept; it is only a cache.
    pub(crate) fn reset(&mut self) {
        self.mouse_captured = false;
        self.commit_key_down = false;
        self.primary_button_down = false;
    }

    /// Whether the last pointer position lies inside `0..=width` × `0..=height`.
    ///
    /// Transforms and child clipping are not taken into account.
    pub fn is_within(&self, size: Size) -> bool {
        let p = self.last_pointer;
        p.x >= 0.0 && p.x <= size.width && p.y >= 0.0 && p.y <= size.height
    }
}
