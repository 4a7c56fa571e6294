use chumsky::prelude::*;
use miette::*;

use crate::grid::{Grid, Mirror, Orientation};

/// A parsed puzzle: grid size plus every mirror, converted to zero-based cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    pub mirrors: Vec<Mirror>,
}

/// Header `rows cols m n` followed by every `(row, col)` pair as written.
struct RawPuzzle {
    header: [u32; 4],
    pairs: Vec<(u32, u32)>,
}

fn parser<'a>() -> impl Parser<'a, &'a str, RawPuzzle, extra::Err<Rich<'a, char>>> {
    let number = text::int::<&'a str, extra::Err<Rich<'a, char>>>(10)
        .try_map(|digits: &str, span| {
            digits
                .parse::<u32>()
                .map_err(|e| Rich::custom(span, e))
        })
        .padded();

    let header = number
        .clone()
        .repeated()
        .exactly(4)
        .collect_exactly::<[u32; 4]>();

    let pairs = number.clone().then(number).repeated().collect::<Vec<_>>();

    header
        .then(pairs)
        .map(|(header, pairs)| RawPuzzle { header, pairs })
}

/// Parses `rows cols m n`, then `m` one-based `/` positions and `n` one-based `\`
/// positions, all separated by whitespace.
pub fn parse(input: &str) -> Result<Puzzle> {
    let RawPuzzle { header, pairs } = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;
    let [rows, cols, slashes, backslashes] = header;

    if rows == 0 || cols == 0 {
        bail!("Grid must have at least one row and one column, got {rows}x{cols}");
    }

    let expected = slashes as usize + backslashes as usize;
    if pairs.len() != expected {
        bail!(
            "Expected {} mirror positions, found {}",
            expected,
            pairs.len()
        );
    }

    let orientations = std::iter::repeat(Orientation::Slash)
        .take(slashes as usize)
        .chain(std::iter::repeat(Orientation::Backslash).take(backslashes as usize));

    let mirrors = pairs
        .into_iter()
        .zip(orientations)
        .map(|((row, col), orientation)| {
            if row == 0 || col == 0 {
                bail!("Mirror positions are one-based, got ({row}, {col})");
            }
            let mirror = match orientation {
                Orientation::Slash => Mirror::slash(row as i64 - 1, col as i64 - 1),
                Orientation::Backslash => Mirror::backslash(row as i64 - 1, col as i64 - 1),
            };
            Ok(mirror)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Puzzle {
        grid: Grid::new(rows as i64, cols as i64),
        mirrors,
    })
}
