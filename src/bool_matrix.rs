use bit_set::BitSet;

/// A fixed size `rows x columns` grid of booleans, all false to begin with.
///
/// Entries can only be switched on, which is all maze carving ever does: a visited cell stays
/// visited and an opened wall stays open.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoolMatrix {
    bits: BitSet,
    rows: usize,
    columns: usize,
}

impl BoolMatrix {
    /// Either side may be zero, e.g. there are no horizontal openings in a single row maze.
    pub fn new(rows: usize, columns: usize) -> BoolMatrix {
        BoolMatrix {
            bits: BitSet::with_capacity(rows * columns),
            rows: rows,
            columns: columns,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// No entries at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Is the entry at `[row][column]` true?
    ///
    /// An entry outside of the matrix is false.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> bool {
        if row < self.rows && column < self.columns {
            self.bits.contains(row * self.columns + column)
        } else {
            false
        }
    }

    /// Switch on the entry at `[row][column]`. Returns true if it was previously false.
    ///
    /// Panics if the entry is outside of the matrix.
    pub(crate) fn set(&mut self, row: usize, column: usize) -> bool {
        assert!(row < self.rows && column < self.columns,
                "[{}][{}] is outside a {}x{} matrix",
                row,
                column,
                self.rows,
                self.columns);
        self.bits.insert(row * self.columns + column)
    }

    /// How many entries are true.
    #[inline]
    pub fn count_true(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn all(&self) -> bool {
        self.count_true() == self.rows * self.columns
    }

    /// Every entry as `(row, column, value)` in row major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let columns = self.columns;
        (0..self.rows * self.columns).map(move |i| {
            let (row, column) = (i / columns, i % columns);
            (row, column, self.bits.contains(i))
        })
    }

    #[cfg(test)]
    pub(crate) fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|row| (0..self.columns).map(|column| self.get(row, column)).collect())
            .collect()
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn starts_all_false() {
        let m = BoolMatrix::new(3, 4);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.columns(), 4);
        assert_eq!(m.count_true(), 0);
        assert!(m.iter().all(|(_, _, value)| !value));
    }

    #[test]
    fn set_only_reports_the_first_switch() {
        let mut m = BoolMatrix::new(2, 2);
        assert!(m.set(1, 0));
        assert!(!m.set(1, 0));
        assert!(m.get(1, 0));
        assert!(!m.get(0, 1));
        assert_eq!(m.count_true(), 1);
        assert_eq!(m.to_rows(), vec![vec![false, false], vec![true, false]]);
    }

    #[test]
    fn outside_entries_are_false() {
        let mut m = BoolMatrix::new(2, 3);
        m.set(1, 2);
        assert!(!m.get(2, 0));
        assert!(!m.get(0, 3));
        assert!(!m.get(usize::max_value(), usize::max_value()));
    }

    #[test]
    #[should_panic]
    fn set_outside_panics() {
        let mut m = BoolMatrix::new(2, 3);
        m.set(0, 3);
    }

    #[test]
    fn empty_matrices() {
        let m = BoolMatrix::new(0, 1);
        assert!(m.is_empty());
        assert!(m.all());
        assert_eq!(m.iter().count(), 0);
        assert!(m.to_rows().is_empty());

        let n = BoolMatrix::new(1, 0);
        assert!(n.is_empty());
        assert_eq!(n.to_rows(), vec![Vec::<bool>::new()]);
    }

    #[test]
    fn all_true() {
        let mut m = BoolMatrix::new(2, 2);
        m.set(0, 0);
        m.set(0, 1);
        m.set(1, 0);
        assert!(!m.all());
        m.set(1, 1);
        assert!(m.all());
    }
}
