//! matrix.rs - Public matrix of ring elements
//!
//! Cells live in one contiguous row-major buffer; `(row, col)` maps to
//! `row * cols + col`.

use super::params::Modulus;
use super::polynomial::Polynomial;
use super::polyvec::{inner_product, PolyVec};
use super::serialize::{decode_le_u32, encode_le_u32};
use crate::error::{validate, Error, Result};

/// `rows × cols` grid of ring elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<M: Modulus> {
    rows: usize,
    cols: usize,
    cells: Vec<Polynomial<M>>,
}

impl<M: Modulus> Matrix<M> {
    fn cell_count(rows: usize, cols: usize) -> Result<usize> {
        rows.checked_mul(cols)
            .ok_or_else(|| Error::param("matrix", "dimensions overflow"))
    }

    /// Build a matrix by evaluating `f(row, col)` in row-major order.
    ///
    /// Storage for every cell is reserved up front; the first error from `f`
    /// is returned and nothing is kept.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Result<Polynomial<M>>,
    {
        let count = Self::cell_count(rows, cols)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(count)?;
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col)?);
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Wrap row-major cells
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Polynomial<M>>) -> Result<Self> {
        validate::length("matrix cells", cells.len(), Self::cell_count(rows, cols)?)?;
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[Polynomial<M>] {
        &self.cells
    }

    /// Bounds-checked cell access
    pub fn get(&self, row: usize, col: usize) -> Result<&Polynomial<M>> {
        validate::index("row", row, self.rows)?;
        validate::index("col", col, self.cols)?;
        Ok(&self.cells[row * self.cols + col])
    }

    /// Bounds-checked row access
    pub fn row(&self, row: usize) -> Result<&[Polynomial<M>]> {
        validate::index("row", row, self.rows)?;
        let start = row * self.cols;
        Ok(&self.cells[start..start + self.cols])
    }

    /// Iterate over rows
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Polynomial<M>]> + '_ {
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Matrix–vector product `A · v`, every element canonical
    pub fn mul_vec(&self, v: &PolyVec<M>) -> Result<PolyVec<M>> {
        validate::length("matrix-vector product", v.len(), self.cols)?;
        let mut out = Vec::new();
        out.try_reserve_exact(self.rows)?;
        for row in self.iter_rows() {
            out.push(inner_product(row, v.as_slice())?);
        }
        Ok(PolyVec::from_polys(out))
    }

    /// Little-endian `u32` coefficients, cells in row-major order
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.cells.len() * M::N * 4);
        for cell in &self.cells {
            encode_le_u32(cell, &mut out);
        }
        out
    }

    /// Inverse of [`to_bytes`](Self::to_bytes); coefficients must be canonical
    pub fn from_bytes(rows: usize, cols: usize, bytes: &[u8]) -> Result<Self> {
        let cell_bytes = 4 * M::N;
        let count = Self::cell_count(rows, cols)?;
        let expected = count
            .checked_mul(cell_bytes)
            .ok_or_else(|| Error::param("matrix", "dimensions overflow"))?;
        validate::length("encoded matrix", bytes.len(), expected)?;
        let mut chunks = bytes.chunks_exact(cell_bytes);
        Self::from_fn(rows, cols, |_, _| match chunks.next() {
            Some(chunk) => decode_le_u32(chunk),
            None => Err(Error::param("encoded matrix", "truncated")),
        })
    }
}
