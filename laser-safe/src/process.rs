use miette::*;

use crate::grid::MirrorIndex;
use crate::parser::parse;
use crate::solver::solve;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let puzzle = parse(input)?;
    let index = MirrorIndex::new(puzzle.mirrors);
    let outcome = solve(&index, puzzle.grid);
    Ok(outcome.to_string())
}
