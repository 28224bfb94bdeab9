// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure visual-state resolution.
//!
//! Resolution turns a snapshot of a control's logical state into one
//! transition from its [`TransitionTable`]. It is deterministic and has no
//! side effects.
//!
//! The interaction axis is evaluated in a fixed order:
//! **disabled → pressed → hovered → normal**. Toggle controls cross it with
//! the check axis (checked / unchecked / indeterminate). Each cell has a
//! fallback chain walked left to right until a bound transition is found:
//!
//! | Context  | Checked | Unchecked | Indeterminate |
//! |----------|---------|-----------|---------------|
//! | Disabled | DisabledChecked → Checked | DisabledUnchecked → Normal | DisabledIndeterminate → Indeterminate → DisabledUnchecked → Normal |
//! | Pressed  | PressedChecked → MouseOverChecked → Checked | PressedUnchecked → MouseOverUnchecked → Normal | PressedIndeterminate → MouseOverIndeterminate → Indeterminate → PressedUnchecked → MouseOverUnchecked → Normal |
//! | Hovered  | MouseOverChecked → Checked | MouseOverUnchecked → Normal | MouseOverIndeterminate → Indeterminate → MouseOverUnchecked → Normal |
//! | Normal   | Checked | Normal | Indeterminate → Normal |
//!
//! Every checked chain ends in `Normal` as a last resort, so any table that
//! binds `Normal` resolves every input.
//!
//! Plain controls use `Disabled → Normal`, `Pressed → MouseOver → Normal`,
//! `MouseOver → Normal` and `Normal`.
//!
//! ## Example
//!
//! ```
//! use understory_visual_state::{
//!     resolve, CheckState, StateName, TransitionTableBuilder, VisualInputs,
//! };
//!
//! let table = TransitionTableBuilder::new()
//!     .with(StateName::Normal, "normal")
//!     .with(StateName::MouseOverChecked, "hot-checked")
//!     .with(StateName::Checked, "checked")
//!     .build();
//!
//! // Pressed + checked falls back past the missing pressed state.
//! let inputs = VisualInputs::toggle(true, true, true, CheckState::Checked, false);
//! assert_eq!(
//!     resolve(&table, inputs),
//!     Some((StateName::MouseOverChecked, &"hot-checked"))
//! );
//!
//! // Indeterminate collapses to unchecked when three states are not allowed.
//! let inputs = VisualInputs::toggle(true, false, false, CheckState::Indeterminate, false);
//! assert_eq!(resolve(&table, inputs), Some((StateName::Normal, &"normal")));
//! ```

use crate::names::StateName;
use crate::table::TransitionTable;

/// Tri-state value of a toggle control.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CheckState {
    /// Off. The initial state of every toggle.
    #[default]
    Unchecked,
    /// On.
    Checked,
    /// Neither on nor off.
    Indeterminate,
}

impl CheckState {
    /// The state as seen by resolution.
    ///
    /// When three states are not allowed an indeterminate value is treated as
    /// unchecked. The stored value is left alone.
    #[inline]
    pub const fn for_resolution(self, three_state: bool) -> Self {
        match self {
            Self::Indeterminate if !three_state => Self::Unchecked,
            other => other,
        }
    }

    /// `Some(true)`, `Some(false)` or `None` for indeterminate.
    #[inline]
    pub const fn to_option(self) -> Option<bool> {
        match self {
            Self::Checked => Some(true),
            Self::Unchecked => Some(false),
            Self::Indeterminate => None,
        }
    }
}

impl From<Option<bool>> for CheckState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Checked,
            Some(false) => Self::Unchecked,
            None => Self::Indeterminate,
        }
    }
}

impl From<bool> for CheckState {
    fn from(value: bool) -> Self {
        if value { Self::Checked } else { Self::Unchecked }
    }
}

/// Position on the interaction axis, highest priority first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// The control is disabled. Wins over everything else.
    Disabled,
    /// Enabled and pressed.
    Pressed,
    /// Enabled, not pressed, pointer over the control.
    Hovered,
    /// None of the above.
    Normal,
}

impl Interaction {
    /// Collapse the interaction flags into a single axis position.
    #[inline]
    pub const fn from_flags(enabled: bool, pressed: bool, hovered: bool) -> Self {
        if !enabled {
            Self::Disabled
        } else if pressed {
            Self::Pressed
        } else if hovered {
            Self::Hovered
        } else {
            Self::Normal
        }
    }
}

/// Snapshot of everything resolution looks at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VisualInputs {
    /// Interaction axis position.
    pub interaction: Interaction,
    /// Check axis position already collapsed for resolution, or `None` for
    /// plain controls.
    pub check: Option<CheckState>,
}

impl VisualInputs {
    /// Inputs for a plain clickable control.
    pub const fn plain(enabled: bool, pressed: bool, hovered: bool) -> Self {
        Self {
            interaction: Interaction::from_flags(enabled, pressed, hovered),
            check: None,
        }
    }

    /// Inputs for a toggle control.
    ///
    /// `checked` is the stored value; it is collapsed with
    /// [`CheckState::for_resolution`] using `three_state`.
    pub const fn toggle(
        enabled: bool,
        pressed: bool,
        hovered: bool,
        checked: CheckState,
        three_state: bool,
    ) -> Self {
        Self {
            interaction: Interaction::from_flags(enabled, pressed, hovered),
            check: Some(checked.for_resolution(three_state)),
        }
    }
}

use StateName as S;

// Every chain ends in `Normal`, so a table binding only `Normal` resolves
// every input.
const PLAIN_DISABLED: &[StateName] = &[S::Disabled, S::Normal];
const PLAIN_PRESSED: &[StateName] = &[S::Pressed, S::MouseOver, S::Normal];
const PLAIN_HOVERED: &[StateName] = &[S::MouseOver, S::Normal];
const PLAIN_NORMAL: &[StateName] = &[S::Normal];

const DISABLED_CHECKED: &[StateName] = &[S::DisabledChecked, S::Checked, S::Normal];
const DISABLED_UNCHECKED: &[StateName] = &[S::DisabledUnchecked, S::Normal];
const DISABLED_INDETERMINATE: &[StateName] = &[
    S::DisabledIndeterminate,
    S::Indeterminate,
    S::DisabledUnchecked,
    S::Normal,
];

const PRESSED_CHECKED: &[StateName] =
    &[S::PressedChecked, S::MouseOverChecked, S::Checked, S::Normal];
const PRESSED_UNCHECKED: &[StateName] = &[S::PressedUnchecked, S::MouseOverUnchecked, S::Normal];
const PRESSED_INDETERMINATE: &[StateName] = &[
    S::PressedIndeterminate,
    S::MouseOverIndeterminate,
    S::Indeterminate,
    S::PressedUnchecked,
    S::MouseOverUnchecked,
    S::Normal,
];

const HOVERED_CHECKED: &[StateName] = &[S::MouseOverChecked, S::Checked, S::Normal];
const HOVERED_UNCHECKED: &[StateName] = &[S::MouseOverUnchecked, S::Normal];
const HOVERED_INDETERMINATE: &[StateName] = &[
    S::MouseOverIndeterminate,
    S::Indeterminate,
    S::MouseOverUnchecked,
    S::Normal,
];

const NORMAL_CHECKED: &[StateName] = &[S::Checked, S::Normal];
const NORMAL_UNCHECKED: &[StateName] = &[S::Normal];
const NORMAL_INDETERMINATE: &[StateName] = &[S::Indeterminate, S::Normal];

/// The fallback chain for `inputs`, most preferred first.
pub const fn fallback_chain(inputs: VisualInputs) -> &'static [StateName] {
    match (inputs.interaction, inputs.check) {
        (Interaction::Disabled, None) => PLAIN_DISABLED,
        (Interaction::Pressed, None) => PLAIN_PRESSED,
        (Interaction::Hovered, None) => PLAIN_HOVERED,
        (Interaction::Normal, None) => PLAIN_NORMAL,

        (Interaction::Disabled, Some(CheckState::Checked)) => DISABLED_CHECKED,
        (Interaction::Disabled, Some(CheckState::Unchecked)) => DISABLED_UNCHECKED,
        (Interaction::Disabled, Some(CheckState::Indeterminate)) => DISABLED_INDETERMINATE,

        (Interaction::Pressed, Some(CheckState::Checked)) => PRESSED_CHECKED,
        (Interaction::Pressed, Some(CheckState::Unchecked)) => PRESSED_UNCHECKED,
        (Interaction::Pressed, Some(CheckState::Indeterminate)) => PRESSED_INDETERMINATE,

        (Interaction::Hovered, Some(CheckState::Checked)) => HOVERED_CHECKED,
        (Interaction::Hovered, Some(CheckState::Unchecked)) => HOVERED_UNCHECKED,
        (Interaction::Hovered, Some(CheckState::Indeterminate)) => HOVERED_INDETERMINATE,

        (Interaction::Normal, Some(CheckState::Checked)) => NORMAL_CHECKED,
        (Interaction::Normal, Some(CheckState::Unchecked)) => NORMAL_UNCHECKED,
        (Interaction::Normal, Some(CheckState::Indeterminate)) => NORMAL_INDETERMINATE,
    }
}

/// Pick the transition for `inputs` from `table`.
///
/// Returns `None` only when nothing in the fallback chain is bound.
pub fn resolve<T>(table: &TransitionTable<T>, inputs: VisualInputs) -> Option<(StateName, &T)> {
    table.first_of(fallback_chain(inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TransitionTableBuilder;

    const CHECKS: [CheckState; 3] = [
        CheckState::Checked,
        CheckState::Unchecked,
        CheckState::Indeterminate,
    ];

    fn full_table() -> TransitionTable<StateName> {
        TransitionTable::bind(StateName::from_name)
    }

    fn flag_grid() -> impl Iterator<Item = (bool, bool, bool)> {
        (0..8_u8).map(|bits| (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0))
    }

    #[test]
    fn interaction_priority_is_disabled_pressed_hovered() {
        assert_eq!(Interaction::from_flags(false, true, true), Interaction::Disabled);
        assert_eq!(Interaction::from_flags(true, true, true), Interaction::Pressed);
        assert_eq!(Interaction::from_flags(true, false, true), Interaction::Hovered);
        assert_eq!(Interaction::from_flags(true, false, false), Interaction::Normal);
    }

    #[test]
    fn full_table_picks_exact_state() {
        let t = full_table();
        let cases = [
            ((false, false, false, CheckState::Checked), S::DisabledChecked),
            ((false, true, true, CheckState::Unchecked), S::DisabledUnchecked),
            ((false, false, false, CheckState::Indeterminate), S::DisabledIndeterminate),
            ((true, true, false, CheckState::Checked), S::PressedChecked),
            ((true, true, true, CheckState::Unchecked), S::PressedUnchecked),
            ((true, true, false, CheckState::Indeterminate), S::PressedIndeterminate),
            ((true, false, true, CheckState::Checked), S::MouseOverChecked),
            ((true, false, true, CheckState::Unchecked), S::MouseOverUnchecked),
            ((true, false, true, CheckState::Indeterminate), S::MouseOverIndeterminate),
            ((true, false, false, CheckState::Checked), S::Checked),
            ((true, false, false, CheckState::Unchecked), S::Normal),
            ((true, false, false, CheckState::Indeterminate), S::Indeterminate),
        ];
        for ((enabled, pressed, hovered, check), expected) in cases {
            let inputs = VisualInputs::toggle(enabled, pressed, hovered, check, true);
            assert_eq!(resolve(&t, inputs).map(|(n, _)| n), Some(expected), "{inputs:?}");
        }
    }

    #[test]
    fn pressed_indeterminate_walks_the_whole_chain() {
        let inputs = VisualInputs::toggle(true, true, false, CheckState::Indeterminate, true);
        let chain = fallback_chain(inputs);
        // Strip bindings from the front of the chain one at a time.
        for skip in 0..chain.len() {
            let mut b = TransitionTableBuilder::new();
            for &name in &chain[skip..] {
                b = b.with(name, name);
            }
            let t = b.build();
            assert_eq!(resolve(&t, inputs).map(|(n, _)| n), Some(chain[skip]));
        }
    }

    #[test]
    fn every_cell_resolves_when_normal_is_bound() {
        let t = TransitionTableBuilder::new().with(S::Normal, ()).build();
        for (enabled, pressed, hovered) in flag_grid() {
            for check in CHECKS {
                for three_state in [false, true] {
                    let inputs = VisualInputs::toggle(enabled, pressed, hovered, check, three_state);
                    assert!(resolve(&t, inputs).is_some(), "{inputs:?} did not resolve");
                }
            }
            let plain = VisualInputs::plain(enabled, pressed, hovered);
            assert_eq!(resolve(&t, plain).map(|(n, _)| n), Some(S::Normal));
        }
    }

    #[test]
    fn every_chain_terminates_in_normal() {
        for (enabled, pressed, hovered) in flag_grid() {
            for check in CHECKS {
                let chain = fallback_chain(VisualInputs::toggle(enabled, pressed, hovered, check, true));
                assert_eq!(chain.last(), Some(&S::Normal));
            }
            let chain = fallback_chain(VisualInputs::plain(enabled, pressed, hovered));
            assert_eq!(chain.last(), Some(&S::Normal));
        }
    }

    #[test]
    fn disallowed_indeterminate_resolves_as_unchecked() {
        let t = full_table();
        for (enabled, pressed, hovered) in flag_grid() {
            let two = VisualInputs::toggle(enabled, pressed, hovered, CheckState::Indeterminate, false);
            let unchecked = VisualInputs::toggle(enabled, pressed, hovered, CheckState::Unchecked, false);
            assert_eq!(two, unchecked);
            assert_eq!(resolve(&t, two), resolve(&t, unchecked));
        }
    }

    #[test]
    fn plain_chains_prefer_hover_for_pressed() {
        let t = TransitionTableBuilder::new()
            .with(S::Normal, 0)
            .with(S::MouseOver, 1)
            .build();
        let pressed = VisualInputs::plain(true, true, false);
        assert_eq!(resolve(&t, pressed), Some((S::MouseOver, &1)));
        let disabled = VisualInputs::plain(false, true, true);
        assert_eq!(resolve(&t, disabled), Some((S::Normal, &0)));
    }

    #[test]
    fn resolution_is_repeatable() {
        let t = full_table();
        for (enabled, pressed, hovered) in flag_grid() {
            for check in CHECKS {
                let inputs = VisualInputs::toggle(enabled, pressed, hovered, check, true);
                assert_eq!(resolve(&t, inputs), resolve(&t, inputs));
            }
        }
    }

    #[test]
    fn check_state_conversions() {
        assert_eq!(CheckState::from(Some(true)), CheckState::Checked);
        assert_eq!(CheckState::from(None), CheckState::Indeterminate);
        assert_eq!(CheckState::from(false), CheckState::Unchecked);
        assert_eq!(CheckState::Indeterminate.to_option(), None);
        assert_eq!(CheckState::default(), CheckState::Unchecked);
    }
}
