// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a three-state check box through pointer, keyboard and enable changes.
//!
//! Run with `RUST_LOG=trace` to see every resolve pass.

use kurbo::Size;
use understory_control::{ControlBuilder, ControlHost, Key, KeyEvent, PointerEvent};
use understory_visual_state::{
    FocusParts, FocusVisuals, StateName, TransitionPlayer, TransitionTable,
};

/// Prints what a renderer would be asked to do.
struct ConsoleHost;

impl TransitionPlayer<StateName> for ConsoleHost {
    type Error = ();

    fn begin(&mut self, t: &StateName) -> Result<(), ()> {
        log::info!("begin {t}");
        Ok(())
    }

    fn stop(&mut self, t: &StateName) -> Result<(), ()> {
        log::info!("stop  {t}");
        Ok(())
    }
}

impl ControlHost<StateName> for ConsoleHost {
    fn capture_pointer(&mut self) -> bool {
        log::info!("capture pointer");
        true
    }

    fn release_pointer_capture(&mut self) {
        log::info!("release pointer");
    }

    fn focus(&mut self) -> bool {
        true
    }

    fn set_focus_visuals(&mut self, visuals: FocusVisuals) {
        log::info!("focus visuals {visuals:?}");
    }
}

fn main() {
    env_logger::init();

    let host = &mut ConsoleHost;
    let mut check_box = ControlBuilder::new("subscribe")
        .toggle(true)
        .has_content(true)
        .render_size(Size::new(120.0, 24.0))
        .build();

    // A template that only styles some of the states.
    let provided = [
        StateName::Normal,
        StateName::MouseOver,
        StateName::Checked,
        StateName::MouseOverChecked,
        StateName::Indeterminate,
        StateName::DisabledUnchecked,
        StateName::DisabledChecked,
    ];
    let table = TransitionTable::bind(|key| {
        StateName::from_name(key).filter(|name| provided.contains(name))
    });
    let parts = FocusParts {
        focus_visual: true,
        content_focus_visual: true,
    };

    check_box.set_visual_parent(true);
    check_box.apply_template(table, parts, host);
    check_box.on_loaded(host);
    check_box.on_got_focus(host);

    check_box.on_mouse_enter(host);
    for round in 1..=3 {
        check_box.on_mouse_left_button_down(&mut PointerEvent::at(10.0, 12.0), host);
        check_box.on_mouse_left_button_up(&mut PointerEvent::at(10.0, 12.0), host);
        println!(
            "click {round}: {:?} showing {:?}",
            check_box.checked(),
            check_box.current_state()
        );
    }
    check_box.on_mouse_leave(host);

    check_box.on_key_down(&mut KeyEvent::new(Key::Space), host);
    check_box.on_key_up(&mut KeyEvent::new(Key::Space), host);
    println!(
        "space: {:?} showing {:?}",
        check_box.checked(),
        check_box.current_state()
    );

    check_box.set_enabled(false, host);
    println!(
        "disabled: {:?} showing {:?}",
        check_box.checked(),
        check_box.current_state()
    );

    for event in check_box.take_events() {
        println!("{:?} from {}", event.kind, event.source);
    }
}
