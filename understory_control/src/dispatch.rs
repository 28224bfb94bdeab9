// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input handlers.
//!
//! Each handler translates one input event into logical-state and session
//! changes, firing a commit where the click mode says so. Key and button
//! handlers skip events that are already handled and mark the ones they
//! consume. Apart from focus and hover bookkeeping, nothing happens while
//! the control is disabled, and buttons and keys are ignored under
//! [`ClickMode::Hover`].

use core::fmt;
use core::time::Duration;

use crate::click_mode::ClickMode;
use crate::control::Control;
use crate::event::{Key, KeyEvent, PointerEvent};
use crate::host::ControlHost;
use crate::state::LogicalState;

impl<K: Clone + fmt::Debug, T: Clone + PartialEq> Control<K, T> {
    /// The control received keyboard focus.
    pub fn on_got_focus<H>(&mut self, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        self.batch(host, |c, _| c.state.insert(LogicalState::FOCUSED));
    }

    /// The control lost keyboard focus. Any activation in progress is
    /// abandoned without committing.
    pub fn on_lost_focus<H>(&mut self, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        self.batch(host, |c, h| {
            c.state.remove(LogicalState::FOCUSED);
            if c.click_mode != ClickMode::Hover {
                c.state.remove(LogicalState::PRESSED);
                c.release_capture(h);
                c.session.commit_key_down = false;
                c.disarm_repeat();
            }
        });
    }

    /// The pointer entered the control. Commits under [`ClickMode::Hover`].
    pub fn on_mouse_enter<H>(&mut self, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        self.batch(host, |c, h| {
            c.state.insert(LogicalState::HOVERED);
            if c.click_mode == ClickMode::Hover && c.is_enabled() {
                c.state.insert(LogicalState::PRESSED);
                c.commit(h);
            }
        });
    }

    /// The pointer left the control.
    pub fn on_mouse_leave<H>(&mut self, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        self.batch(host, |c, _| {
            c.state.remove(LogicalState::HOVERED);
            if c.click_mode == ClickMode::Hover && c.is_enabled() {
                c.state.remove(LogicalState::PRESSED);
            }
        });
    }

    /// The primary pointer button went down over the control.
    ///
    /// Requests focus and pointer capture; the control only becomes pressed
    /// if capture is granted. Commits under [`ClickMode::Press`].
    pub fn on_mouse_left_button_down<H>(&mut self, event: &mut PointerEvent, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        if event.handled {
            return;
        }
        self.session.last_pointer = event.position;
        self.session.primary_button_down = true;
        if !self.accepts_pointer_buttons() {
            return;
        }
        event.handled = true;
        self.batch(host, |c, h| {
            h.focus();
            c.capture(h);
            if c.session.mouse_captured {
                c.state.insert(LogicalState::PRESSED);
                c.arm_repeat();
            }
            if c.click_mode == ClickMode::Press {
                c.commit(h);
            }
        });
    }

    /// The primary pointer button was released.
    ///
    /// Commits under [`ClickMode::Release`] if the control is still pressed,
    /// unless the commit key is held, in which case the key owns the
    /// activation.
    pub fn on_mouse_left_button_up<H>(&mut self, event: &mut PointerEvent, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        if event.handled {
            return;
        }
        self.session.last_pointer = event.position;
        self.session.primary_button_down = false;
        if !self.accepts_pointer_buttons() {
            return;
        }
        event.handled = true;
        self.batch(host, |c, h| {
            if c.session.commit_key_down {
                return;
            }
            if c.is_pressed() && c.click_mode == ClickMode::Release {
                c.commit(h);
            }
            c.release_capture(h);
            c.state.remove(LogicalState::PRESSED);
            c.disarm_repeat();
        });
    }

    /// The pointer moved.
    ///
    /// While a pointer press is in progress, the control is pressed exactly
    /// when the pointer is inside its bounds. Never commits.
    pub fn on_mouse_move<H>(&mut self, event: &PointerEvent, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        self.session.last_pointer = event.position;
        if self.session.primary_button_down
            && self.accepts_pointer_buttons()
            && self.session.mouse_captured
            && !self.session.commit_key_down
        {
            let inside = self.session.is_within(self.render_size);
            self.set_flag(LogicalState::PRESSED, inside, host);
        }
    }

    /// The host took pointer capture away.
    pub fn on_lost_pointer_capture<H>(&mut self, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        self.batch(host, |c, h| {
            c.release_capture(h);
            c.state.remove(LogicalState::PRESSED);
            c.disarm_repeat();
        });
    }

    /// A key went down while the control had focus.
    ///
    /// Space presses the control like the primary button. Enter, when
    /// accepted, commits at once regardless of click mode. Any other key
    /// interrupts a space activation without committing.
    pub fn on_key_down<H>(&mut self, event: &mut KeyEvent, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        if event.handled || !self.accepts_pointer_buttons() {
            return;
        }
        match event.key {
            Key::Space => {
                if self.session.mouse_captured || self.session.commit_key_down {
                    return;
                }
                event.handled = true;
                self.batch(host, |c, h| {
                    c.session.commit_key_down = true;
                    c.state.insert(LogicalState::PRESSED);
                    c.capture(h);
                    c.arm_repeat();
                    if c.click_mode == ClickMode::Press {
                        c.commit(h);
                    }
                });
            }
            Key::Enter if self.accepts_return => {
                event.handled = true;
                self.batch(host, |c, h| {
                    c.session.commit_key_down = false;
                    c.state.remove(LogicalState::PRESSED);
                    c.release_capture(h);
                    c.disarm_repeat();
                    c.commit(h);
                });
            }
            _ => {
                if self.session.commit_key_down {
                    self.batch(host, |c, h| {
                        c.state.remove(LogicalState::PRESSED);
                        c.session.commit_key_down = false;
                        c.release_capture(h);
                        c.disarm_repeat();
                    });
                }
            }
        }
    }

    /// A key was released.
    ///
    /// Releasing space commits under [`ClickMode::Release`] when no pointer
    /// button is down. If a pointer press is still in progress, the pointer
    /// position decides whether the control stays pressed.
    pub fn on_key_up<H>(&mut self, event: &mut KeyEvent, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        if event.handled || !self.accepts_pointer_buttons() || event.key != Key::Space {
            return;
        }
        event.handled = true;
        self.batch(host, |c, h| {
            c.session.commit_key_down = false;
            if !c.session.primary_button_down {
                c.release_capture(h);
                if c.is_pressed() && c.click_mode == ClickMode::Release {
                    c.commit(h);
                }
                c.state.remove(LogicalState::PRESSED);
                c.disarm_repeat();
            } else if c.session.mouse_captured {
                let inside = c.session.is_within(c.render_size);
                c.state.set(LogicalState::PRESSED, inside);
                if !inside {
                    c.release_capture(h);
                    c.disarm_repeat();
                }
            }
        });
    }

    /// Let time pass for auto-repeat.
    ///
    /// Fires at most one commit per call, while the control is held pressed.
    /// Repeats missed during a long gap are dropped rather than replayed.
    /// Returns whether a commit fired.
    pub fn advance<H>(&mut self, elapsed: Duration, host: &mut H) -> bool
    where
        H: ControlHost<T> + ?Sized,
    {
        let Some(clock) = self.repeat.as_mut() else {
            return false;
        };
        if !clock.advance(elapsed) || !self.is_pressed() || !self.is_enabled() {
            return false;
        }
        self.batch(host, |c, h| c.commit(h));
        true
    }

    /// Enabled and not in hover mode.
    fn accepts_pointer_buttons(&self) -> bool {
        self.is_enabled() && self.click_mode != ClickMode::Hover
    }

    fn capture<H>(&mut self, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        if !self.session.mouse_captured {
            self.session.mouse_captured = host.capture_pointer();
        }
    }

    fn release_capture<H>(&mut self, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        host.release_pointer_capture();
        self.session.mouse_captured = false;
    }
}
