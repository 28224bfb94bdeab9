// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_control --heading-base-level=0

//! Understory Control: input dispatch and commit semantics for interactive controls.
//!
//! A [`Control`] turns raw keyboard, pointer and focus events into logical
//! state (enabled, focused, hovered, pressed, and for toggles a check state),
//! fires commits according to its [`ClickMode`], and keeps one named visual
//! transition playing through `understory_visual_state`.
//!
//! The crate does not own an event loop, a timer or a renderer. The hosting
//! runtime implements [`ControlHost`] (pointer capture, focus and transition
//! playback) and forwards events to the `on_*` handlers:
//!
//! | Input | Handler |
//! |---|---|
//! | focus gained / lost | [`Control::on_got_focus`], [`Control::on_lost_focus`] |
//! | pointer enter / leave | [`Control::on_mouse_enter`], [`Control::on_mouse_leave`] |
//! | primary button | [`Control::on_mouse_left_button_down`], [`Control::on_mouse_left_button_up`] |
//! | pointer move | [`Control::on_mouse_move`] |
//! | capture taken away | [`Control::on_lost_pointer_capture`] |
//! | keys | [`Control::on_key_down`], [`Control::on_key_up`] |
//! | time (auto-repeat) | [`Control::advance`] |
//!
//! User-visible events ([`ControlEvent`]) queue up on the control and are
//! collected with [`Control::take_events`].
//!
//! ## Commit behaviors
//!
//! - Plain buttons raise `Click`.
//! - Toggles advance `Unchecked → Checked → (Indeterminate →) Unchecked`,
//!   raising one of `Checked`, `Unchecked` or `Indeterminate`, then `Click`.
//! - Radio buttons become checked. Unchecking the rest of the group is up
//!   to the caller, with help from [`RadioGroups`].
//!
//! ## Batching
//!
//! Handlers that change several things run inside [`Control::batch`]. While a
//! batch is open resolve requests are deferred; when the outermost batch
//! closes exactly one resolve pass runs. [`Control::visual_revision`] counts
//! the passes.
//!
//! ## Example
//!
//! ```rust
//! use understory_control::{ControlBuilder, ControlEventKind, ControlHost, PointerEvent};
//! use understory_visual_state::{FocusParts, StateName, TransitionPlayer, TransitionTable};
//! use kurbo::Size;
//!
//! #[derive(Default)]
//! struct Host {
//!     playing: Vec<StateName>,
//! }
//!
//! impl TransitionPlayer<StateName> for Host {
//!     type Error = ();
//!     fn begin(&mut self, t: &StateName) -> Result<(), ()> {
//!         self.playing.push(*t);
//!         Ok(())
//!     }
//!     fn stop(&mut self, t: &StateName) -> Result<(), ()> {
//!         self.playing.retain(|p| p != t);
//!         Ok(())
//!     }
//! }
//!
//! impl ControlHost<StateName> for Host {
//!     fn capture_pointer(&mut self) -> bool { true }
//!     fn release_pointer_capture(&mut self) {}
//!     fn focus(&mut self) -> bool { true }
//! }
//!
//! let mut host = Host::default();
//! let mut check_box = ControlBuilder::new("agree")
//!     .toggle(false)
//!     .render_size(Size::new(80.0, 20.0))
//!     .build();
//!
//! // Every state name is bound to itself.
//! check_box.apply_template(TransitionTable::bind(StateName::from_name), FocusParts::default(), &mut host);
//! check_box.set_visual_parent(true);
//! check_box.on_loaded(&mut host);
//! assert_eq!(host.playing, [StateName::Normal]);
//!
//! check_box.on_mouse_enter(&mut host);
//! check_box.on_mouse_left_button_down(&mut PointerEvent::at(5.0, 5.0), &mut host);
//! assert_eq!(host.playing, [StateName::PressedUnchecked]);
//!
//! check_box.on_mouse_left_button_up(&mut PointerEvent::at(5.0, 5.0), &mut host);
//! assert_eq!(host.playing, [StateName::MouseOverChecked]);
//!
//! let kinds: Vec<_> = check_box.take_events().iter().map(|e| e.kind).collect();
//! assert_eq!(kinds, [ControlEventKind::Checked, ControlEventKind::Click]);
//! ```
//!
//! ## Logging
//!
//! Commits are logged at debug level and every resolve pass at trace level
//! through the [`log`] facade.
//!
//! ## Features
//!
//! - `std` (default): forwarded to `kurbo`.
//! - `libm`: float math for `no_std` builds, forwarded to `kurbo`.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod behavior;
mod builder;
mod click_mode;
mod control;
mod dispatch;
mod error;
mod event;
mod host;
pub mod radio;
pub mod repeat;
mod state;

pub use behavior::{CommitBehavior, next_check_state};
pub use builder::ControlBuilder;
pub use click_mode::ClickMode;
pub use control::Control;
pub use error::ControlError;
pub use event::{ControlEvent, ControlEventKind, Key, KeyEvent, PointerEvent};
pub use host::ControlHost;
pub use radio::RadioGroups;
pub use repeat::AutoRepeat;
pub use state::{InputSession, LogicalState};
