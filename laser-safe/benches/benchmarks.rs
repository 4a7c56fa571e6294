use laser_safe::grid::{Grid, Mirror, MirrorIndex};
use laser_safe::process::process;
use laser_safe::solver::solve;

fn main() {
    divan::main();
}

/// Staircase of `\` mirrors walking the beam down the diagonal. The one on the
/// goal cell turns it out through the bottom edge.
fn staircase(size: i64) -> (Grid, MirrorIndex) {
    let mirrors = (0..size)
        .map(|i| Mirror::backslash(i, i))
        .chain((0..size - 1).map(|i| Mirror::backslash(i + 1, i)));
    (Grid::new(size, size), MirrorIndex::new(mirrors))
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn solve_staircase(bencher: divan::Bencher, size: i64) {
    let (grid, index) = staircase(size);
    bencher.bench(|| solve(divan::black_box(&index), divan::black_box(grid)));
}

#[divan::bench]
fn process_sample() {
    process(divan::black_box("5 6 1 4\n2 3\n1 2\n2 5\n4 2\n5 5")).unwrap();
}
