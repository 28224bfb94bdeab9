// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed vocabulary of visual state names a control template may supply.
//!
//! Templates publish transitions under well-known string keys such as
//! `"Normal State"` or `"Pressed Checked State"`. [`StateName`] is the typed
//! form of that vocabulary; [`StateName::as_str`] and [`StateName::from_name`]
//! convert between the two.
//!
//! ```
//! use understory_visual_state::StateName;
//!
//! assert_eq!(StateName::PressedChecked.as_str(), "Pressed Checked State");
//! assert_eq!(StateName::from_name("MouseOver State"), Some(StateName::MouseOver));
//! assert_eq!(StateName::from_name("Focused State"), None);
//! ```

use core::fmt;

/// A named visual state a control template may provide a transition for.
///
/// `Normal` is shared by both vocabularies. `MouseOver`, `Pressed` and
/// `Disabled` belong to plain clickable controls; the remaining names belong
/// to toggle controls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StateName {
    /// `"Normal State"`: resting and (for toggles) unchecked.
    Normal,
    /// `"MouseOver State"`.
    MouseOver,
    /// `"Pressed State"`.
    Pressed,
    /// `"Disabled State"`.
    Disabled,
    /// `"Checked State"`.
    Checked,
    /// `"Indeterminate State"`.
    Indeterminate,
    /// `"MouseOver Checked State"`.
    MouseOverChecked,
    /// `"MouseOver Unchecked State"`.
    MouseOverUnchecked,
    /// `"MouseOver Indeterminate State"`.
    MouseOverIndeterminate,
    /// `"Pressed Checked State"`.
    PressedChecked,
    /// `"Pressed Unchecked State"`.
    PressedUnchecked,
    /// `"Pressed Indeterminate State"`.
    PressedIndeterminate,
    /// `"Disabled Checked State"`.
    DisabledChecked,
    /// `"Disabled Unchecked State"`.
    DisabledUnchecked,
    /// `"Disabled Indeterminate State"`.
    DisabledIndeterminate,
}

impl StateName {
    /// Number of names in the vocabulary.
    pub const COUNT: usize = 15;

    /// Every name, in declaration order. `ALL[name.index()] == name`.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Normal,
        Self::MouseOver,
        Self::Pressed,
        Self::Disabled,
        Self::Checked,
        Self::Indeterminate,
        Self::MouseOverChecked,
        Self::MouseOverUnchecked,
        Self::MouseOverIndeterminate,
        Self::PressedChecked,
        Self::PressedUnchecked,
        Self::PressedIndeterminate,
        Self::DisabledChecked,
        Self::DisabledUnchecked,
        Self::DisabledIndeterminate,
    ];

    /// Names a plain clickable control resolves over.
    pub const PLAIN: [Self; 4] = [Self::Normal, Self::MouseOver, Self::Pressed, Self::Disabled];

    /// Names a toggle control resolves over.
    pub const TOGGLE: [Self; 12] = [
        Self::Normal,
        Self::Checked,
        Self::Indeterminate,
        Self::MouseOverChecked,
        Self::MouseOverUnchecked,
        Self::MouseOverIndeterminate,
        Self::PressedChecked,
        Self::PressedUnchecked,
        Self::PressedIndeterminate,
        Self::DisabledChecked,
        Self::DisabledUnchecked,
        Self::DisabledIndeterminate,
    ];

    /// Dense slot index of this name, in `0..COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The template key for this name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal State",
            Self::MouseOver => "MouseOver State",
            Self::Pressed => "Pressed State",
            Self::Disabled => "Disabled State",
            Self::Checked => "Checked State",
            Self::Indeterminate => "Indeterminate State",
            Self::MouseOverChecked => "MouseOver Checked State",
            Self::MouseOverUnchecked => "MouseOver Unchecked State",
            Self::MouseOverIndeterminate => "MouseOver Indeterminate State",
            Self::PressedChecked => "Pressed Checked State",
            Self::PressedUnchecked => "Pressed Unchecked State",
            Self::PressedIndeterminate => "Pressed Indeterminate State",
            Self::DisabledChecked => "Disabled Checked State",
            Self::DisabledUnchecked => "Disabled Unchecked State",
            Self::DisabledIndeterminate => "Disabled Indeterminate State",
        }
    }

    /// Look up a name by its template key. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
