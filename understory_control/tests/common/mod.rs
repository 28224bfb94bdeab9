// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A host that records everything a control asks of it.

#![allow(dead_code, reason = "not every test file uses every helper")]

use kurbo::Size;
use understory_control::{Control, ControlBuilder, ControlHost};
use understory_visual_state::{
    FocusParts, FocusVisuals, StateName, TransitionPlayer, TransitionTable,
};

/// Size given to every test control.
pub const SIZE: Size = Size::new(100.0, 40.0);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Begin(StateName),
    Stop(StateName),
    Capture,
    Release,
    Focus,
    FocusVisuals(FocusVisuals),
}

#[derive(Debug)]
pub struct RecordingHost {
    pub calls: Vec<Call>,
    pub allow_capture: bool,
    pub fail_begin: bool,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            allow_capture: true,
            fail_begin: false,
        }
    }
}

impl RecordingHost {
    pub fn begun(&self) -> Vec<StateName> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Begin(name) => Some(*name),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl TransitionPlayer<StateName> for RecordingHost {
    type Error = &'static str;

    fn begin(&mut self, transition: &StateName) -> Result<(), Self::Error> {
        if self.fail_begin {
            return Err("refused");
        }
        self.calls.push(Call::Begin(*transition));
        Ok(())
    }

    fn stop(&mut self, transition: &StateName) -> Result<(), Self::Error> {
        self.calls.push(Call::Stop(*transition));
        Ok(())
    }
}

impl ControlHost<StateName> for RecordingHost {
    fn capture_pointer(&mut self) -> bool {
        self.calls.push(Call::Capture);
        self.allow_capture
    }

    fn release_pointer_capture(&mut self) {
        self.calls.push(Call::Release);
    }

    fn focus(&mut self) -> bool {
        self.calls.push(Call::Focus);
        true
    }

    fn set_focus_visuals(&mut self, visuals: FocusVisuals) {
        self.calls.push(Call::FocusVisuals(visuals));
    }
}

/// Every name bound to itself.
pub fn full_table() -> TransitionTable<StateName> {
    TransitionTable::bind(StateName::from_name)
}

/// Only `"Normal State"` bound.
pub fn normal_only() -> TransitionTable<StateName> {
    TransitionTable::bind(|key| (key == "Normal State").then_some(StateName::Normal))
}

/// Bind `table`, attach and load, then forget the calls that took.
pub fn make_live<K>(
    control: &mut Control<K, StateName>,
    table: TransitionTable<StateName>,
    host: &mut RecordingHost,
) where
    K: Clone + core::fmt::Debug,
{
    control.set_render_size(SIZE);
    control.set_visual_parent(true);
    control.apply_template(table, FocusParts::default(), host);
    control.on_loaded(host);
    host.clear();
}

/// A live plain button with the full vocabulary.
pub fn button(builder: ControlBuilder<&'static str>, host: &mut RecordingHost) -> Control<&'static str, StateName> {
    let mut c = builder.build();
    make_live(&mut c, full_table(), host);
    c
}
