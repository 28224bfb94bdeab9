// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_visual_state --heading-base-level=0

//! Understory Visual State: pick and play named visual transitions for controls.
//!
//! Interactive controls (buttons, check boxes, radio buttons) show their
//! logical state through named transitions supplied by a template:
//! `"Normal State"`, `"Pressed Checked State"`, and so on. This crate holds
//! the part of that pipeline that does not depend on input handling:
//!
//! - [`names`]: the closed vocabulary of state names ([`StateName`]).
//! - [`table`]: a per-instance, read-only [`TransitionTable`] built once
//!   when a template is bound.
//! - [`resolve`](mod@resolve): the pure priority/fallback algorithm that
//!   turns a [`VisualInputs`] snapshot into one transition.
//! - [`player`]: the [`TransitionPlayer`] boundary and the
//!   [`VisualStateDriver`] that starts the chosen transition, stops the
//!   previous one, and contains playback failures.
//! - [`focus`]: visibility of focus adorners.
//!
//! Input tracking and commit semantics live in `understory_control`, which
//! feeds this crate.
//!
//! ## Example
//!
//! ```rust
//! use understory_visual_state::{
//!     resolve, CheckState, Liveness, PlayOutcome, StateName, TransitionPlayer,
//!     TransitionTable, VisualInputs, VisualStateDriver,
//! };
//!
//! struct Player;
//! impl TransitionPlayer<&'static str> for Player {
//!     type Error = ();
//!     fn begin(&mut self, _: &&'static str) -> Result<(), ()> { Ok(()) }
//!     fn stop(&mut self, _: &&'static str) -> Result<(), ()> { Ok(()) }
//! }
//!
//! // Bind the template once.
//! let resources = [("Normal State", "n"), ("Checked State", "c")];
//! let table = TransitionTable::bind(|key| {
//!     resources.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
//! });
//!
//! // Resolve and play.
//! let inputs = VisualInputs::toggle(true, false, false, CheckState::Checked, false);
//! let mut driver = VisualStateDriver::new();
//! let live = Liveness { loaded: true, has_visual_parent: true };
//! let outcome = driver.go_to(resolve(&table, inputs), live, &mut Player);
//! assert_eq!(outcome, PlayOutcome::Started);
//! assert_eq!(driver.current_name(), Some(StateName::Checked));
//! ```
//!
//! ## Logging
//!
//! Skipped and failed starts are reported through the [`log`] facade at
//! debug level. This crate never installs a logger.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod focus;
pub mod names;
pub mod player;
pub mod resolve;
pub mod table;

pub use focus::{FocusParts, FocusVisuals, Visibility, resolve_focus_visuals};
pub use names::StateName;
pub use player::{Liveness, PlayOutcome, TransitionPlayer, VisualStateDriver};
pub use resolve::{CheckState, Interaction, VisualInputs, fallback_chain, resolve};
pub use table::{TransitionTable, TransitionTableBuilder};
