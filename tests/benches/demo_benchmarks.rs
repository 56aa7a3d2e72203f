//! # PatternLabs Demo Benchmarks
//!
//! Each frame the shell ticks the mounted demo and redraws everything, so
//! both must stay well inside the default 50ms tick:
//!
//! | Operation | Target |
//! |-----------|--------|
//! | Mount a demo | < 100µs |
//! | Tick a busy demo | < 10µs |
//! | Render a full 160x50 frame | < 5ms |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::{Duration, Instant};

use pl_catalog::PatternId;
use pl_demos::{DemoInput, DemoState};
use pl_lab::{ui, App};
use ratatui::{backend::TestBackend, Terminal};

fn bench_mount(c: &mut Criterion) {
    let mut group = c.benchmark_group("mount");
    let now = Instant::now();

    for id in [PatternId::Singleton, PatternId::Flyweight, PatternId::Observer] {
        group.bench_with_input(BenchmarkId::from_parameter(id), &id, |b, &id| {
            b.iter(|| black_box(DemoState::mount(id, now, 42)))
        });
    }

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");
    let t0 = Instant::now();

    group.bench_function("facade_mid_deploy", |b| {
        b.iter_batched(
            || {
                let mut demo = DemoState::mount(PatternId::Facade, t0, 42);
                demo.handle(DemoInput::Key('d'), t0);
                demo
            },
            |mut demo| black_box(demo.tick(t0 + Duration::from_millis(1_500))),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.measurement_time(Duration::from_secs(5));

    for id in [PatternId::Flyweight, PatternId::Strategy, PatternId::Visitor] {
        let mut app = App::new(PatternId::Singleton, Instant::now(), 42);
        app.select(id, Instant::now());
        let mut terminal = match Terminal::new(TestBackend::new(160, 50)) {
            Ok(terminal) => terminal,
            Err(err) => panic!("test backend: {err}"),
        };

        group.bench_with_input(BenchmarkId::from_parameter(id), &id, |b, _| {
            b.iter(|| {
                terminal
                    .draw(|frame| ui::render(frame, &app))
                    .map(|_| ())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mount, bench_tick, bench_render);
criterion_main!(benches);
