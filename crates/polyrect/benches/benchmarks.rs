use polyrect::{bounding, contained};

fn main() {
    divan::main();
}

/// A closed staircase with `steps` steps and coordinates far apart, so the
/// compressed grid is tiny next to the raw coordinate range.
fn staircase(steps: i64) -> String {
    const STRIDE: i64 = 1_000_003;
    let mut lines = vec![String::from("0,0")];
    for i in 0..steps {
        lines.push(format!("{},{}", i * STRIDE, (i + 1) * STRIDE));
        lines.push(format!("{},{}", (i + 1) * STRIDE, (i + 1) * STRIDE));
    }
    lines.push(format!("{},0", steps * STRIDE));
    lines.join("\n")
}

#[divan::bench(args = [16, 64, 256])]
fn bench_contained(bencher: divan::Bencher, steps: i64) {
    bencher
        .with_inputs(|| staircase(steps))
        .bench_refs(|input| contained::process(divan::black_box(input.as_str())).unwrap());
}

#[divan::bench(args = [16, 64, 256])]
fn bench_bounding(bencher: divan::Bencher, steps: i64) {
    bencher
        .with_inputs(|| staircase(steps))
        .bench_refs(|input| bounding::process(divan::black_box(input.as_str())).unwrap());
}
