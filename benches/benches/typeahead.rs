// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_list_nav::{KeyEvent, ListItem, ListNavigation, NamedKey, WrapMode};
use understory_typeahead::{Typeahead, TypeaheadItem};

#[derive(Clone, Debug)]
struct Row {
    label: String,
    active: bool,
    disabled: bool,
}

impl ListItem for Row {
    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self) {
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    fn focus(&mut self) {}
}

impl TypeaheadItem for Row {
    fn typeahead_text(&self) -> &str {
        &self.label
    }
}

fn rows(len: usize) -> Vec<Row> {
    const WORDS: [&str; 8] = [
        "copy", "cut", "paste", "print", "save", "share", "undo", "redo",
    ];
    (0..len)
        .map(|i| Row {
            label: format!("{} {i}", WORDS[i % WORDS.len()]),
            active: false,
            disabled: i % 7 == 3,
        })
        .collect()
}

fn bench_typeahead(c: &mut Criterion) {
    let mut group = c.benchmark_group("typeahead/session");

    // Starting a session snapshots every label; later keystrokes only search.
    for len in [16usize, 256, 4_096] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("prefix", len), &rows(len), |b, rows| {
            b.iter_batched(
                || (Typeahead::new(), rows.clone()),
                |(mut typeahead, mut rows)| {
                    for (t, c) in "share 1".chars().enumerate() {
                        let mut event = KeyEvent::character(c);
                        black_box(typeahead.on_keydown(&mut event, t as u64 * 50, &mut rows));
                    }
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("cycle", len), &rows(len), |b, rows| {
            b.iter_batched(
                || (Typeahead::new(), rows.clone()),
                |(mut typeahead, mut rows)| {
                    for t in 0..32_u64 {
                        let mut event = KeyEvent::character('p');
                        black_box(typeahead.on_keydown(&mut event, t * 50, &mut rows));
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_arrow_navigation(c: &mut Criterion) {
    let nav = ListNavigation {
        wrap: WrapMode::Wrap,
        ..ListNavigation::default()
    };
    let mut items = rows(256);
    c.bench_function("list_nav/arrow_down_256", |b| {
        b.iter(|| {
            let mut event = KeyEvent::named(NamedKey::ArrowDown);
            black_box(nav.handle_keydown(&mut event, &mut items))
        });
    });
}

criterion_group!(benches, bench_typeahead, bench_arrow_navigation);
criterion_main!(benches);
