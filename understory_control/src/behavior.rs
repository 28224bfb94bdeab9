// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What a commit does.
//!
//! Every control shares the same input handling; they differ only in the
//! hook that runs when a commit fires. The set of hooks is closed and chosen
//! at construction:
//!
//! - [`CommitBehavior::Plain`] raises `Click` and nothing else.
//! - [`CommitBehavior::Toggle`] advances the check state first
//!   (see [`next_check_state`]).
//! - [`CommitBehavior::Radio`] checks the control; it never unchecks it.

use alloc::string::String;
use core::fmt;

use understory_visual_state::{CheckState, VisualInputs};

use crate::control::Control;
use crate::event::ControlEventKind;
use crate::host::ControlHost;

/// The commit hook of a control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CommitBehavior {
    /// A plain button.
    #[default]
    Plain,
    /// A check box style toggle.
    Toggle {
        /// Stored check state.
        checked: CheckState,
        /// Whether commits may produce [`CheckState::Indeterminate`].
        three_state: bool,
    },
    /// A radio button. Never three-state.
    Radio {
        /// Stored check state.
        checked: CheckState,
        /// Name of the mutually exclusive group.
        group: String,
    },
}

impl CommitBehavior {
    /// Stored check state, or `None` for plain controls.
    pub fn checked(&self) -> Option<CheckState> {
        match self {
            Self::Plain => None,
            Self::Toggle { checked, .. } | Self::Radio { checked, .. } => Some(*checked),
        }
    }

    fn checked_mut(&mut self) -> Option<&mut CheckState> {
        match self {
            Self::Plain => None,
            Self::Toggle { checked, .. } | Self::Radio { checked, .. } => Some(checked),
        }
    }

    /// Whether three states are allowed.
    pub fn is_three_state(&self) -> bool {
        matches!(self, Self::Toggle { three_state: true, .. })
    }

    /// The check state a commit moves to, or `None` if the commit leaves the
    /// check axis alone.
    pub fn on_commit(&self) -> Option<CheckState> {
        match self {
            Self::Plain => None,
            Self::Toggle {
                checked,
                three_state,
            } => Some(next_check_state(*checked, *three_state)),
            Self::Radio { .. } => Some(CheckState::Checked),
        }
    }

    /// Resolution inputs for the given interaction flags.
    pub fn visual_inputs(&self, enabled: bool, pressed: bool, hovered: bool) -> VisualInputs {
        match self {
            Self::Plain => VisualInputs::plain(enabled, pressed, hovered),
            Self::Toggle {
                checked,
                three_state,
            } => VisualInputs::toggle(enabled, pressed, hovered, *checked, *three_state),
            Self::Radio { checked, .. } => {
                VisualInputs::toggle(enabled, pressed, hovered, *checked, false)
            }
        }
    }
}

/// Advance a toggle's check state.
///
/// `Checked` goes to `Indeterminate` when three states are allowed and to
/// `Unchecked` otherwise; `Unchecked` goes to `Checked`; `Indeterminate`
/// goes to `Unchecked`.
///
/// ```
/// use understory_control::next_check_state;
/// use understory_visual_state::CheckState::*;
///
/// assert_eq!(next_check_state(Unchecked, false), Checked);
/// assert_eq!(next_check_state(Checked, false), Unchecked);
/// assert_eq!(next_check_state(Checked, true), Indeterminate);
/// assert_eq!(next_check_state(Indeterminate, true), Unchecked);
/// ```
pub const fn next_check_state(current: CheckState, three_state: bool) -> CheckState {
    match current {
        CheckState::Checked if three_state => CheckState::Indeterminate,
        CheckState::Checked => CheckState::Unchecked,
        CheckState::Unchecked => CheckState::Checked,
        CheckState::Indeterminate => CheckState::Unchecked,
    }
}

const fn event_for(state: CheckState) -> ControlEventKind {
    match state {
        CheckState::Checked => ControlEventKind::Checked,
        CheckState::Unchecked => ControlEventKind::Unchecked,
        CheckState::Indeterminate => ControlEventKind::Indeterminate,
    }
}

impl<K, T> Control<K, T> {
    /// Stored check state, or `None` for plain controls.
    pub fn checked(&self) -> Option<CheckState> {
        self.behavior.checked()
    }

    /// Whether commits may produce [`CheckState::Indeterminate`].
    pub fn is_three_state(&self) -> bool {
        self.behavior.is_three_state()
    }

    /// Radio group name, if this is a radio control.
    pub fn radio_group(&self) -> Option<&str> {
        match &self.behavior {
            CommitBehavior::Radio { group, .. } => Some(group),
            _ => None,
        }
    }
}

impl<K: Clone + fmt::Debug, T: Clone + PartialEq> Control<K, T> {
    /// Set the stored check state.
    ///
    /// On change, raises exactly one of `Checked`, `Unchecked` or
    /// `Indeterminate` and requests one resolve. Setting
    /// [`CheckState::Indeterminate`] is allowed even when three states are
    /// not; resolution then treats it as unchecked.
    ///
    /// Returns `true` if the value changed. Plain controls ignore this.
    pub fn set_checked<H>(&mut self, value: CheckState, host: &mut H) -> bool
    where
        H: ControlHost<T> + ?Sized,
    {
        let Some(slot) = self.behavior.checked_mut() else {
            log::debug!("{:?}: ignoring check state on a plain control", self.id);
            return false;
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        self.raise(event_for(value));
        self.update_visual_state(host);
        true
    }

    /// Allow or forbid three states. Radio and plain controls ignore this.
    ///
    /// The stored check state is kept; an indeterminate value is only
    /// collapsed when resolving.
    pub fn set_three_state<H>(&mut self, allow: bool, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        if let CommitBehavior::Toggle { three_state, .. } = &mut self.behavior {
            if *three_state != allow {
                *three_state = allow;
                self.update_visual_state(host);
            }
        }
    }

    /// Fire a commit as if the user had activated the control.
    ///
    /// Runs regardless of click mode or enabled state.
    pub fn click<H>(&mut self, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        self.batch(host, |c, h| c.commit(h));
    }

    /// Run the commit hook, then raise `Click`.
    pub(crate) fn commit<H>(&mut self, host: &mut H)
    where
        H: ControlHost<T> + ?Sized,
    {
        log::debug!("{:?}: commit ({})", self.id, self.click_mode);
        if let Some(next) = self.behavior.on_commit() {
            self.set_checked(next, host);
        }
        self.raise(ControlEventKind::Click);
    }
}
