// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_visual_state::{
    CheckState, StateName, TransitionTable, TransitionTableBuilder, VisualInputs, resolve,
};

fn all_inputs() -> Vec<VisualInputs> {
    let mut out = Vec::new();
    for bits in 0..8_u8 {
        let (enabled, pressed, hovered) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
        out.push(VisualInputs::plain(enabled, pressed, hovered));
        for checked in [
            CheckState::Unchecked,
            CheckState::Checked,
            CheckState::Indeterminate,
        ] {
            for three_state in [false, true] {
                out.push(VisualInputs::toggle(
                    enabled,
                    pressed,
                    hovered,
                    checked,
                    three_state,
                ));
            }
        }
    }
    out
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("visual_state/resolve");
    let inputs = all_inputs();

    // Full tables hit on the first candidate; sparse ones walk the whole chain.
    let tables: [(&str, TransitionTable<StateName>); 2] = [
        ("full", TransitionTable::bind(StateName::from_name)),
        (
            "normal_only",
            TransitionTableBuilder::new()
                .with(StateName::Normal, StateName::Normal)
                .build(),
        ),
    ];

    for (name, table) in &tables {
        group.bench_with_input(BenchmarkId::new("all_inputs", name), table, |b, table| {
            b.iter(|| {
                for inputs in &inputs {
                    black_box(resolve(table, black_box(*inputs)));
                }
            });
        });
    }

    group.finish();
}

fn bench_bind(c: &mut Criterion) {
    c.bench_function("visual_state/bind", |b| {
        b.iter(|| black_box(TransitionTable::bind(|key| StateName::from_name(black_box(key)))));
    });
}

criterion_group!(benches, bench_resolve, bench_bind);
criterion_main!(benches);
