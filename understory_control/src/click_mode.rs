// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! When a control commits.

use core::fmt;
use core::str::FromStr;

use crate::error::ControlError;

/// When a control fires its commit.
///
/// ```
/// use understory_control::{ClickMode, ControlError};
///
/// assert_eq!("press".parse::<ClickMode>(), Ok(ClickMode::Press));
/// assert_eq!(ClickMode::try_from(2_u8), Ok(ClickMode::Hover));
/// assert_eq!(ClickMode::try_from(7_u8), Err(ControlError::InvalidClickMode(7)));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClickMode {
    /// Commit when the pointer button or commit key is released over the
    /// control.
    #[default]
    Release,
    /// Commit as soon as the control is pressed.
    Press,
    /// Commit when the pointer enters the control. Buttons and keys are
    /// ignored.
    Hover,
}

impl ClickMode {
    /// The raw value accepted by [`TryFrom<u8>`].
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::Release => 0,
            Self::Press => 1,
            Self::Hover => 2,
        }
    }

    /// Name accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Release => "Release",
            Self::Press => "Press",
            Self::Hover => "Hover",
        }
    }
}

impl TryFrom<u8> for ClickMode {
    type Error = ControlError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Release),
            1 => Ok(Self::Press),
            2 => Ok(Self::Hover),
            other => Err(ControlError::InvalidClickMode(other)),
        }
    }
}

impl FromStr for ClickMode {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Release, Self::Press, Self::Hover]
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(ControlError::UnknownClickMode)
    }
}

impl fmt::Display for ClickMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
