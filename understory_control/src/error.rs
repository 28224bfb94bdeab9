// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Rejected control configuration.
///
/// Returned to whoever supplied the bad value. The control is left unchanged.
#[derive(Clone, PartialEq, Eq)]
pub enum ControlError {
    /// A raw click mode outside `0..=2`.
    InvalidClickMode(u8),
    /// A click mode name other than `Release`, `Press` or `Hover`.
    UnknownClickMode,
    /// An auto-repeat interval of zero.
    InvalidRepeatInterval,
}

impl fmt::Debug for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidClickMode(v) => write!(f, "InvalidClickMode({v})"),
            Self::UnknownClickMode => f.write_str("UnknownClickMode"),
            Self::InvalidRepeatInterval => f.write_str("InvalidRepeatInterval"),
        }
    }
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidClickMode(v) => write!(f, "invalid click mode value {v}, expected 0, 1 or 2"),
            Self::UnknownClickMode => {
                f.write_str("unknown click mode name, expected Release, Press or Hover")
            }
            Self::InvalidRepeatInterval => f.write_str("auto-repeat interval must be non-zero"),
        }
    }
}

impl core::error::Error for ControlError {}
