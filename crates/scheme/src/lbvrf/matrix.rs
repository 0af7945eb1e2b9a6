//! Expansion of the public matrix `A` from a seed.
//!
//! Cell `(i, j)` is filled from its own stream, so cells are independent and
//! can be produced in any order, or concurrently, with the same result.

use lbvrf_algorithms::error::Result as AlgoResult;
use lbvrf_algorithms::poly::params::LbvrfQ;
use lbvrf_algorithms::poly::sampling::sample_uniform_element;
use lbvrf_algorithms::poly::{Matrix, Polynomial};
use lbvrf_algorithms::validate;
use lbvrf_algorithms::xof::{SeedStream, StreamDomain};
use lbvrf_params::pqc::lbvrf::LbvrfSchemeParams;

use crate::error::Result;

fn sample_cell<P: LbvrfSchemeParams>(
    seed: &[u8],
    row: usize,
    col: usize,
) -> AlgoResult<Polynomial<LbvrfQ>> {
    let domain = StreamDomain::matrix_cell(row, col)?;
    let mut stream = SeedStream::new(seed, P::DOMAIN_SALT, P::SECURITY_LEVEL, domain)?;
    sample_uniform_element::<LbvrfQ, _>(&mut stream)
}

/// Sample the single cell `A[row][col]`
pub fn expand_cell<P: LbvrfSchemeParams>(
    seed: &[u8],
    row: usize,
    col: usize,
) -> Result<Polynomial<LbvrfQ>> {
    validate::seed_length(seed.len(), P::SEED_BYTES)?;
    validate::index("row", row, P::A_ROW)?;
    validate::index("col", col, P::A_COL)?;
    Ok(sample_cell::<P>(seed, row, col)?)
}

/// Expand the full `A_ROW × A_COL` matrix in row-major order.
///
/// A short seed is rejected before any stream is derived.
pub fn expand_matrix<P: LbvrfSchemeParams>(seed: &[u8]) -> Result<Matrix<LbvrfQ>> {
    validate::seed_length(seed.len(), P::SEED_BYTES)?;
    trace_event!(
        debug,
        "{}: expanding {}x{} public matrix",
        P::NAME,
        P::A_ROW,
        P::A_COL
    );

    let matrix = Matrix::from_fn(P::A_ROW, P::A_COL, |row, col| {
        sample_cell::<P>(seed, row, col)
    })?;

    trace_event!(debug, "{}: public matrix ready", P::NAME);
    Ok(matrix)
}

/// Data-parallel [`expand_matrix`].
///
/// Each worker checks `cancel` before starting a cell. Once it is observed
/// set the whole call fails with [`Error::Cancelled`](crate::Error::Cancelled);
/// cells already computed are dropped.
#[cfg(feature = "parallel")]
pub fn expand_matrix_parallel<P: LbvrfSchemeParams>(
    seed: &[u8],
    cancel: &core::sync::atomic::AtomicBool,
) -> Result<Matrix<LbvrfQ>> {
    use crate::error::Error;
    use core::sync::atomic::Ordering;
    use rayon::prelude::*;

    validate::seed_length(seed.len(), P::SEED_BYTES)?;
    trace_event!(
        debug,
        "{}: expanding {}x{} public matrix on {} threads",
        P::NAME,
        P::A_ROW,
        P::A_COL,
        rayon::current_num_threads()
    );

    let cols = P::A_COL;
    let cells = (0..P::A_ROW * cols)
        .into_par_iter()
        .map(|idx| {
            if cancel.load(Ordering::Relaxed) {
                return Err(Error::Cancelled);
            }
            sample_cell::<P>(seed, idx / cols, idx % cols).map_err(Error::from)
        })
        .collect::<Result<Vec<_>>>()
        .and_then(|cells| {
            if cancel.load(Ordering::Acquire) {
                Err(Error::Cancelled)
            } else {
                Ok(cells)
            }
        })
        .map_err(|err| {
            if err == Error::Cancelled {
                trace_event!(debug, "{}: matrix expansion cancelled", P::NAME);
            }
            err
        })?;

    Ok(Matrix::from_cells(P::A_ROW, cols, cells)?)
}
