use rayon::prelude::*;


/// A dense `n_rows × n_cols` matrix of accumulated weights,
/// stored column by column.
/// Row `r` of column `c` holds the total weight of the items
/// whose bin in column `c` equals `r`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Histogram {
    n_rows: usize,
    n_cols: usize,
    cells: Vec<f64>,
}


impl Histogram {
    /// Construct a histogram filled with zeros.
    pub(crate) fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self { n_rows, n_cols, cells: vec![0f64; n_rows * n_cols], }
    }


    /// Scatter-adds `weights` into a new histogram.
    ///
    /// `bins[c][k]` is the row that the `k`-th item falls into
    /// for column `c`; `weights[k]` is added to that cell.
    /// Rows at or beyond `n_rows` are dropped.
    ///
    /// Columns are disjoint, so they are filled in parallel.
    pub(crate) fn accumulate(
        n_rows: usize,
        bins: &[Vec<usize>],
        weights: &[f64],
    ) -> Self
    {
        let n_cols = bins.len();
        let mut hist = Self::zeros(n_rows, n_cols);

        if n_rows == 0 { return hist; }

        hist.cells.par_chunks_mut(n_rows)
            .zip(bins)
            .for_each(|(column, rows)| {
                rows.iter()
                    .zip(weights)
                    .for_each(|(&r, &w)| {
                        if let Some(cell) = column.get_mut(r) {
                            *cell += w;
                        }
                    });
            });
        hist
    }


    /// Adds `weight` to the cell `(row, col)`.
    #[cfg(test)]
    pub(crate) fn add(&mut self, row: usize, col: usize, weight: f64) {
        let n_rows = self.n_rows;
        self.cells[col * n_rows + row] += weight;
    }


    /// Returns the `col`-th column.
    #[inline(always)]
    pub(crate) fn column(&self, col: usize) -> &[f64] {
        let start = col * self.n_rows;
        &self.cells[start..start + self.n_rows]
    }


    #[cfg(test)]
    pub(crate) fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_matches_cellwise_add() {
        let bins = vec![
            vec![0, 2, 2, 1],
            vec![3, 3, 0, 3],
        ];
        let weights = vec![0.1, 0.2, 0.3, 0.4];

        let hist = Histogram::accumulate(4, &bins[..], &weights[..]);

        let mut expected = Histogram::zeros(4, 2);
        for (c, rows) in bins.iter().enumerate() {
            for (&r, &w) in rows.iter().zip(&weights) {
                expected.add(r, c, w);
            }
        }

        assert_eq!(hist, expected);
        assert_eq!(hist.shape(), (4, 2));
        assert_eq!(hist.column(0), &[0.1, 0.4, 0.2 + 0.3, 0.0]);
        assert_eq!(hist.column(1), &[0.3, 0.0, 0.0, 0.1 + 0.2 + 0.4]);
    }

    #[test]
    fn accumulate_drops_overflow_rows() {
        let bins = vec![vec![0, 3, 1]];
        let weights = vec![1.0, 2.0, 4.0];

        let hist = Histogram::accumulate(3, &bins[..], &weights[..]);
        assert_eq!(hist.column(0), &[1.0, 4.0, 0.0]);
    }
}
