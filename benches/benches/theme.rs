// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_theme` dispatch and re-initialization.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::vec::Vec;

use understory_style::{StyleList, StyleSelector};
use understory_theme::{
    StyleHandle, ThemeConfig, ThemeId, ThemeManager, WidgetClasses, WidgetHost,
};

#[derive(Clone, Default)]
struct Host {
    parents: Vec<Option<u32>>,
    classes: Vec<WidgetClasses>,
    styles: Vec<StyleList<StyleHandle>>,
}

impl Host {
    /// One screen with `n` children alternating panels and labels.
    fn flat(n: u32) -> Self {
        let mut host = Self::default();
        host.push(None, WidgetClasses::CONTAINER);
        for i in 0..n {
            let classes = if i % 2 == 0 {
                WidgetClasses::CONTAINER
            } else {
                WidgetClasses::LABEL
            };
            host.push(Some(0), classes);
        }
        host
    }

    fn push(&mut self, parent: Option<u32>, classes: WidgetClasses) {
        self.parents.push(parent);
        self.classes.push(classes);
        self.styles.push(StyleList::new());
    }

    fn len(&self) -> u32 {
        u32::try_from(self.parents.len()).unwrap()
    }
}

impl WidgetHost for Host {
    type Widget = u32;
    type Display = u8;

    fn parent(&self, widget: u32) -> Option<u32> {
        self.parents[widget as usize]
    }

    fn classes(&self, widget: u32) -> WidgetClasses {
        self.classes[widget as usize]
    }

    fn add_style(&mut self, widget: u32, style: StyleHandle, selector: StyleSelector) {
        self.styles[widget as usize].add(style, selector);
    }

    fn display_theme(&self, _display: u8) -> Option<ThemeId> {
        None
    }

    fn report_style_change(&mut self, _scope: Option<u32>) {}
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("theme_apply");
    for n in [16_u32, 256, 4096] {
        let mut host = Host::flat(n);
        let mut themes: ThemeManager<Host> = ThemeManager::new(ThemeConfig::default());
        themes.init_theme(&mut host, None).unwrap();

        group.bench_with_input(BenchmarkId::new("fresh", n), &n, |b, _| {
            b.iter_batched(
                || host.clone(),
                |mut host| {
                    for w in 0..host.len() {
                        themes.apply(&mut host, black_box(w));
                    }
                    host
                },
                BatchSize::SmallInput,
            );
        });

        // Already-styled widgets: measures the duplicate check.
        let mut styled = host.clone();
        for w in 0..styled.len() {
            themes.apply(&mut styled, w);
        }
        group.bench_with_input(BenchmarkId::new("reapply", n), &n, |b, _| {
            b.iter(|| {
                for w in 0..styled.len() {
                    themes.apply(&mut styled, black_box(w));
                }
            });
        });
    }
    group.finish();
}

fn bench_reinit(c: &mut Criterion) {
    let mut host = Host::flat(0);
    let mut themes: ThemeManager<Host> = ThemeManager::new(ThemeConfig::default());
    themes.init_theme(&mut host, None).unwrap();

    c.bench_function("theme_reinit", |b| {
        b.iter(|| {
            themes.init_theme(&mut host, black_box(None)).unwrap();
        });
    });
}

criterion_group!(benches, bench_apply, bench_reinit);
criterion_main!(benches);
