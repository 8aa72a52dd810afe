//! Unrolling a square grid into a 1-D sequence ordered by Hilbert distance.
//!
//! The decoder stores row `0` at the top, while the curve puts `y = 0` at
//! the bottom, so each grid row `i` is flipped to `k = n - 1 - i`. The
//! column is passed as the curve's `x` and the flipped row as its `y`; with
//! that axis order the traversal lines up with the image as displayed.
//!
//! Cell `(row, col)` therefore lands at `xy2d(n, col, n - 1 - row)`.
//! [`distance_table`] precomputes that mapping, [`unroll`] scatters samples
//! through it and [`reroll`] gathers them back.
use crate::curve::{d2xy, validate_dimension, xy2d};
use crate::error::{Result, SonifyError};
use crate::image::{GrayImageU8, ImageView};
use crate::reduce::block_size;
use log::debug;

/// Marker for sequence slots that have not been written yet; outside the
/// 8-bit sample range.
const UNWRITTEN: u16 = u16::MAX;

/// Hilbert distance of grid cell `(row, col)` in an `n × n` grid.
///
/// # Panics
///
/// Panics if `row` or `col` is not below `n`.
#[inline]
pub fn cell_distance(n: usize, row: usize, col: usize) -> u64 {
    assert!(
        row < n && col < n,
        "cell ({row}, {col}) lies outside a {n}x{n} grid"
    );
    let flipped = n - 1 - row;
    xy2d(n as u64, col as u64, flipped as u64)
}

/// Row-major table of Hilbert distances: entry `row * n + col` holds
/// [`cell_distance`]`(n, row, col)`.
pub fn distance_table(n: usize) -> Result<Vec<u64>> {
    validate_dimension(n)?;
    let mut table = vec![0u64; n * n];

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        table
            .par_chunks_exact_mut(n)
            .enumerate()
            .for_each(|(row, out)| fill_row(n, row, out));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (row, out) in table.chunks_exact_mut(n).enumerate() {
            fill_row(n, row, out);
        }
    }

    Ok(table)
}

fn fill_row(n: usize, row: usize, out: &mut [u64]) {
    for (col, slot) in out.iter_mut().enumerate() {
        *slot = cell_distance(n, row, col);
    }
}

/// Reorder the samples of a square grid by Hilbert distance.
///
/// The grid must be square with a supported power-of-two side, and every row
/// must hold at least that many samples. The returned sequence has `n²`
/// entries; entry `d` is the sample of the cell at distance `d`.
pub fn unroll<I>(image: &I) -> Result<Vec<u8>>
where
    I: ImageView<Pixel = u8>,
{
    let n = image.square_dimension()?;
    let table = distance_table(n)?;
    let sequence = scatter(&table, image.rows(), n)?;
    debug!("unroll: {n}x{n} grid -> {} samples", sequence.len());
    Ok(sequence)
}

/// Write each row sample to the slot named by `table`, then check that every
/// slot of the `n²` sequence was written exactly once.
fn scatter<'a>(
    table: &[u64],
    rows: impl Iterator<Item = &'a [u8]>,
    n: usize,
) -> Result<Vec<u8>> {
    let mut slots = vec![UNWRITTEN; n * n];

    for (row, distances) in rows.zip(table.chunks_exact(n)) {
        for (&sample, &d) in row[..n].iter().zip(distances) {
            let index = d as usize;
            let slot = &mut slots[index];
            if *slot != UNWRITTEN {
                return Err(SonifyError::DuplicateDistance { index });
            }
            *slot = u16::from(sample);
        }
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            u8::try_from(slot).map_err(|_| SonifyError::CoverageGap { index })
        })
        .collect()
}

/// Place a Hilbert-ordered sequence back onto an `n × n` grid; the inverse of
/// [`unroll`].
pub fn reroll(sequence: &[u8], n: usize) -> Result<GrayImageU8> {
    validate_dimension(n)?;
    let expected = n * n;
    if sequence.len() != expected {
        return Err(SonifyError::SequenceLength {
            len: sequence.len(),
            expected,
        });
    }

    let mut grid = GrayImageU8::new(n, n, vec![0u8; expected]);
    for (d, &sample) in sequence.iter().enumerate() {
        let (x, y) = d2xy(n as u64, d as u64);
        let row = n - 1 - y as usize;
        grid.set(row, x as usize, sample);
    }
    Ok(grid)
}

/// Paint every block of the Hilbert sequence with its mean and lay the
/// result back out as an `n × n` image.
///
/// Each uniform patch of the output is the image region that drives one tone.
pub fn render_means_preview(means: &[u8], n: usize) -> Result<GrayImageU8> {
    validate_dimension(n)?;
    let block = block_size(n * n, means.len())?;
    let sequence: Vec<u8> = means
        .iter()
        .flat_map(|&m| std::iter::repeat(m).take(block))
        .collect();
    reroll(&sequence, n)
}
