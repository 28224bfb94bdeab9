// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Playing resolved transitions.
//!
//! [`TransitionPlayer`] is the boundary to whatever actually animates a
//! transition. [`VisualStateDriver`] sits in front of it and remembers which
//! transition is active, so that:
//!
//! - asking for the active transition again does nothing;
//! - nothing starts until the control is live (loaded, with a visual parent);
//! - the previous transition is stopped only after the new one has begun;
//! - a failure to begin is swallowed and leaves the previous transition
//!   active, so the next resolve retries.
//!
//! ```
//! use understory_visual_state::{Liveness, PlayOutcome, StateName, TransitionPlayer, VisualStateDriver};
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl TransitionPlayer<u32> for Log {
//!     type Error = ();
//!     fn begin(&mut self, t: &u32) -> Result<(), ()> {
//!         self.0.push(format!("begin {t}"));
//!         Ok(())
//!     }
//!     fn stop(&mut self, t: &u32) -> Result<(), ()> {
//!         self.0.push(format!("stop {t}"));
//!         Ok(())
//!     }
//! }
//!
//! let live = Liveness { loaded: true, has_visual_parent: true };
//! let mut driver = VisualStateDriver::new();
//! let mut log = Log::default();
//!
//! assert_eq!(driver.go_to(Some((StateName::Normal, &1)), live, &mut log), PlayOutcome::Started);
//! assert_eq!(driver.go_to(Some((StateName::Normal, &1)), live, &mut log), PlayOutcome::Unchanged);
//! assert_eq!(driver.go_to(Some((StateName::Pressed, &2)), live, &mut log), PlayOutcome::Started);
//! assert_eq!(log.0, ["begin 1", "begin 2", "stop 1"]);
//! ```

use core::fmt;

use crate::names::StateName;

/// Something that can play transitions.
///
/// Both operations may fail; failures are reported through `Self::Error` and
/// are contained by [`VisualStateDriver`].
pub trait TransitionPlayer<T> {
    /// The player's failure type.
    type Error: fmt::Debug;

    /// Start playing `transition`.
    fn begin(&mut self, transition: &T) -> Result<(), Self::Error>;

    /// Stop `transition`, restoring whatever it changed.
    fn stop(&mut self, transition: &T) -> Result<(), Self::Error>;
}

/// The hosting runtime's liveness gate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Liveness {
    /// The control has received its loaded notification.
    pub loaded: bool,
    /// The control is attached below a visual parent.
    pub has_visual_parent: bool,
}

impl Liveness {
    /// Transitions may only start when both halves hold.
    #[inline]
    pub const fn is_live(self) -> bool {
        self.loaded && self.has_visual_parent
    }
}

/// What [`VisualStateDriver::go_to`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayOutcome {
    /// The requested transition is already active.
    Unchanged,
    /// The requested transition began and is now active.
    Started,
    /// Resolution produced no transition; the active one (if any) is kept.
    NoTransition,
    /// The control is not live yet; nothing was started.
    NotLive,
    /// The player failed to begin; the previous transition stays active.
    Failed,
}

/// Tracks the active transition of one control.
#[derive(Clone, Debug)]
pub struct VisualStateDriver<T> {
    current: Option<(StateName, T)>,
}

impl<T> Default for VisualStateDriver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VisualStateDriver<T> {
    /// A driver with no active transition.
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// The active transition and the name it was resolved under.
    pub fn current(&self) -> Option<(StateName, &T)> {
        self.current.as_ref().map(|(name, t)| (*name, t))
    }

    /// Name of the active transition.
    pub fn current_name(&self) -> Option<StateName> {
        self.current.as_ref().map(|(name, _)| *name)
    }
}

impl<T: Clone + PartialEq> VisualStateDriver<T> {
    /// Make `next` the active transition.
    ///
    /// Handles are compared by value; if `next` equals the active handle this
    /// is a no-op even when it was reached under a different name.
    pub fn go_to<P>(
        &mut self,
        next: Option<(StateName, &T)>,
        liveness: Liveness,
        player: &mut P,
    ) -> PlayOutcome
    where
        P: TransitionPlayer<T> + ?Sized,
    {
        let Some((name, next)) = next else {
            return if self.current.is_none() {
                PlayOutcome::Unchanged
            } else {
                PlayOutcome::NoTransition
            };
        };
        if self.current.as_ref().is_some_and(|(_, t)| t == next) {
            return PlayOutcome::Unchanged;
        }
        if !liveness.is_live() {
            log::debug!("not starting {name}: control is not live ({liveness:?})");
            return PlayOutcome::NotLive;
        }
        if let Err(err) = player.begin(next) {
            log::debug!("failed to begin {name}: {err:?}");
            return PlayOutcome::Failed;
        }
        if let Some((prev_name, prev)) = self.current.replace((name, next.clone())) {
            if let Err(err) = player.stop(&prev) {
                log::debug!("failed to stop {prev_name}: {err:?}");
            }
        }
        PlayOutcome::Started
    }

    /// Stop the active transition, if any, and forget it.
    ///
    /// A failure to stop is logged; the transition is forgotten either way.
    pub fn clear<P>(&mut self, player: &mut P)
    where
        P: TransitionPlayer<T> + ?Sized,
    {
        if let Some((name, prev)) = self.current.take() {
            if let Err(err) = player.stop(&prev) {
                log::debug!("failed to stop {name}: {err:?}");
            }
        }
    }
}
