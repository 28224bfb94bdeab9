// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_control::{Control, ControlBuilder, ControlHost, Key, KeyEvent, PointerEvent};
use understory_visual_state::{FocusParts, StateName, TransitionPlayer, TransitionTable};

/// A host that grants everything and plays nothing.
struct NullHost;

impl TransitionPlayer<StateName> for NullHost {
    type Error = ();

    fn begin(&mut self, _: &StateName) -> Result<(), ()> {
        Ok(())
    }

    fn stop(&mut self, _: &StateName) -> Result<(), ()> {
        Ok(())
    }
}

impl ControlHost<StateName> for NullHost {
    fn capture_pointer(&mut self) -> bool {
        true
    }

    fn release_pointer_capture(&mut self) {}

    fn focus(&mut self) -> bool {
        true
    }
}

fn live(builder: ControlBuilder<u32>) -> Control<u32, StateName> {
    let mut c = builder.render_size(Size::new(100.0, 30.0)).build();
    c.set_visual_parent(true);
    c.apply_template(
        TransitionTable::bind(StateName::from_name),
        FocusParts::default(),
        &mut NullHost,
    );
    c.on_loaded(&mut NullHost);
    c
}

fn bench_click_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("control/gesture");

    group.bench_function("pointer_click_toggle", |b| {
        b.iter_batched(
            || live(ControlBuilder::new(1).toggle(true)),
            |mut control| {
                control.on_mouse_enter(&mut NullHost);
                control.on_mouse_left_button_down(&mut PointerEvent::at(10.0, 10.0), &mut NullHost);
                control.on_mouse_move(&PointerEvent::at(20.0, 12.0), &mut NullHost);
                control.on_mouse_left_button_up(&mut PointerEvent::at(20.0, 12.0), &mut NullHost);
                control.on_mouse_leave(&mut NullHost);
                black_box(control.take_events());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("space_click_plain", |b| {
        let mut control = live(ControlBuilder::new(1));
        b.iter(|| {
            control.on_key_down(&mut KeyEvent::new(Key::Space), &mut NullHost);
            control.on_key_up(&mut KeyEvent::new(Key::Space), &mut NullHost);
            black_box(control.take_events());
        });
    });

    group.bench_function("drag_in_and_out", |b| {
        let mut control = live(ControlBuilder::new(1));
        control.on_mouse_left_button_down(&mut PointerEvent::at(10.0, 10.0), &mut NullHost);
        let mut x = 0.0;
        b.iter(|| {
            x = if x > 150.0 { 0.0 } else { x + 7.0 };
            control.on_mouse_move(&PointerEvent::at(black_box(x), 10.0), &mut NullHost);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_click_gesture);
criterion_main!(benches);
