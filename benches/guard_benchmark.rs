//! Guard benchmark: What a skipped render costs next to a real one.
//!
//! Compares a full name-then-surname replay across variants, the raw guard
//! on a single card, and the repaint of a demo screen.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use memoscope::component::{NameCard, NameCardProps};
use memoscope::layout::Rect;
use memoscope::terminal::ScreenWriter;
use memoscope::{Buffer, DemoApp, Edit, Field, Memo, Session, Variant};

fn replay_variants(c: &mut Criterion) {
    let mut edits = Edit::typing(Field::Name, "Jane Elizabeth");
    edits.extend(Edit::typing(Field::Surname, "Doe-Smithson"));

    let mut group = c.benchmark_group("replay");
    for variant in Variant::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(variant), &edits, |b, edits| {
            b.iter(|| {
                let mut session = Session::new(variant);
                black_box(session.replay(edits).stats)
            });
        });
    }
    group.finish();
}

fn guard_skip_vs_render(c: &mut Criterion) {
    let props = NameCardProps {
        label: "Name",
        value: String::from("Jane"),
    };

    c.bench_function("memo_skip_equal_props", |b| {
        let mut memo = Memo::new(NameCard);
        memo.render(props.clone());
        b.iter(|| memo.render(black_box(props.clone())));
    });

    c.bench_function("memo_unguarded_render", |b| {
        let mut memo = Memo::unguarded(NameCard);
        b.iter(|| memo.render(black_box(props.clone())));
    });
}

fn repaint_after_keystroke(c: &mut Criterion) {
    let area = Rect::from_size(120, 40);
    let mut app = DemoApp::new(Variant::Optimized, area);
    let mut buffer = Buffer::new(area.width, area.height);
    let mut writer = ScreenWriter::new();
    let mut output = Vec::with_capacity(16 * 1024);
    app.paint(&mut buffer);
    let _ = writer.present(&buffer, &mut output);

    c.bench_function("present_unchanged_120x40", |b| {
        b.iter(|| {
            output.clear();
            black_box(writer.present(black_box(&buffer), &mut output))
        });
    });
}

criterion_group!(
    benches,
    replay_variants,
    guard_skip_vs_render,
    repaint_after_keystroke,
);
criterion_main!(benches);
