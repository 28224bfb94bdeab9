// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration validation.

use core::time::Duration;

use understory_control::{AutoRepeat, ClickMode, Control, ControlBuilder, ControlError};

#[test]
fn out_of_range_click_mode_is_rejected_and_ignored() {
    let mut c: Control<u32, ()> = ControlBuilder::new(7)
        .click_mode(ClickMode::Hover)
        .build();
    assert_eq!(c.set_click_mode_raw(3), Err(ControlError::InvalidClickMode(3)));
    assert_eq!(c.click_mode(), ClickMode::Hover);
    assert_eq!(c.set_click_mode_raw(0), Ok(()));
    assert_eq!(c.click_mode(), ClickMode::Release);
}

#[test]
fn click_mode_names_parse() {
    assert_eq!("Release".parse(), Ok(ClickMode::Release));
    assert_eq!("press".parse(), Ok(ClickMode::Press));
    assert_eq!("HOVER".parse(), Ok(ClickMode::Hover));
    assert_eq!(
        "Double".parse::<ClickMode>(),
        Err(ControlError::UnknownClickMode)
    );
    assert_eq!(ClickMode::Press.to_string(), "Press");
}

#[test]
fn zero_repeat_interval_is_rejected() {
    assert_eq!(
        AutoRepeat::new(Duration::from_millis(100), Duration::ZERO),
        Err(ControlError::InvalidRepeatInterval)
    );
}

#[test]
fn errors_are_std_errors() {
    fn takes_error(err: &dyn std::error::Error) -> String {
        err.to_string()
    }
    let msg = takes_error(&ControlError::InvalidRepeatInterval);
    assert!(msg.contains("interval"), "{msg}");
    let msg = takes_error(&ControlError::UnknownClickMode);
    assert!(msg.contains("Release"), "{msg}");
}

#[test]
fn auto_repeat_can_be_replaced() {
    let mut c: Control<u32, ()> = ControlBuilder::new(1)
        .auto_repeat(AutoRepeat::default())
        .build();
    assert_eq!(c.auto_repeat(), Some(AutoRepeat::default()));
    c.set_auto_repeat(None);
    assert_eq!(c.auto_repeat(), None);
}
