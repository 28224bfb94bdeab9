// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keep a group of radio buttons mutually exclusive.

use understory_control::{Control, ControlBuilder, ControlEventKind, ControlHost, RadioGroups};
use understory_visual_state::{
    CheckState, FocusParts, StateName, TransitionPlayer, TransitionTable,
};

struct QuietHost;

impl TransitionPlayer<StateName> for QuietHost {
    type Error = ();

    fn begin(&mut self, _: &StateName) -> Result<(), ()> {
        Ok(())
    }

    fn stop(&mut self, _: &StateName) -> Result<(), ()> {
        Ok(())
    }
}

impl ControlHost<StateName> for QuietHost {
    fn capture_pointer(&mut self) -> bool {
        true
    }

    fn release_pointer_capture(&mut self) {}

    fn focus(&mut self) -> bool {
        true
    }
}

/// Commit `radios[index]` and uncheck its peers if it became checked.
fn select(
    index: usize,
    radios: &mut [Control<&'static str, StateName>],
    groups: &RadioGroups<&'static str>,
    host: &mut QuietHost,
) {
    radios[index].click(host);
    let became_checked = radios[index]
        .take_events()
        .iter()
        .any(|e| e.kind == ControlEventKind::Checked);
    if !became_checked {
        return;
    }
    let id = *radios[index].id();
    let Some(group) = radios[index].radio_group().map(str::to_owned) else {
        return;
    };
    for peer in groups.peers(&group, &id) {
        if let Some(radio) = radios.iter_mut().find(|r| r.id() == peer) {
            if radio.set_checked(CheckState::Unchecked, host) {
                log::debug!("unchecked {peer}");
            }
        }
    }
}

fn main() {
    env_logger::init();

    let host = &mut QuietHost;
    let mut groups = RadioGroups::new();
    let mut radios: Vec<_> = ["small", "medium", "large"]
        .into_iter()
        .map(|id| {
            groups.register("size", id);
            let mut radio = ControlBuilder::new(id).radio("size").build();
            radio.set_visual_parent(true);
            radio.apply_template(
                TransitionTable::bind(StateName::from_name),
                FocusParts::default(),
                host,
            );
            radio.on_loaded(host);
            radio
        })
        .collect();

    for index in [1, 2, 2, 0] {
        select(index, &mut radios, &groups, host);
        let summary: Vec<_> = radios
            .iter()
            .map(|r| format!("{}={:?}", r.id(), r.current_state()))
            .collect();
        println!("{}", summary.join(" "));
    }
}
