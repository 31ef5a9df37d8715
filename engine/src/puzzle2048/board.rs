/// Square grid of tiles stored row-major. `0` marks an empty cell.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    cells: Vec<u32>,
    size: usize,
}

impl Board {
    pub fn empty(size: usize) -> Self {
        Self {
            cells: vec![0; size * size],
            size,
        }
    }

    /// Builds a board from row-major values, `0` meaning empty.
    /// Returns `None` when the value count is not a perfect square or a
    /// non-empty value is not a power of two.
    pub fn from_cells(cells: Vec<u32>) -> Option<Self> {
        let size = (1..=cells.len()).find(|s| s * s >= cells.len())?;
        if size * size != cells.len() {
            return None;
        }
        if cells.iter().any(|&v| v != 0 && (v == 1 || !v.is_power_of_two())) {
            return None;
        }
        Some(Self { cells, size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.size || col >= self.size {
            return None;
        }
        match self.cells[self.index(row, col)] {
            0 => None,
            v => Some(v),
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&0)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub(crate) fn value_at(&self, index: usize) -> u32 {
        self.cells[index]
    }

    pub(crate) fn set_at(&mut self, index: usize, value: u32) {
        self.cells[index] = value;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.highest_tile().max(1).to_string().len().max(4);
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>width$}", ".", width = width)
                    } else {
                        format!("{:>width$}", v, width = width)
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty(4);
        assert_eq!(board.size(), 4);
        assert_eq!(board.cells().len(), 16);
        assert_eq!(board.empty_indices().len(), 16);
        assert!(!board.is_full());
        assert_eq!(board.highest_tile(), 0);
    }

    #[test]
    fn test_from_cells_rejects_bad_shapes() {
        assert!(Board::from_cells(vec![2, 4, 8]).is_none());
        assert!(Board::from_cells(vec![]).is_none());
        assert!(Board::from_cells(vec![2, 3, 0, 0]).is_none());
        assert!(Board::from_cells(vec![1, 0, 0, 0]).is_none());
    }

    #[test]
    #[rustfmt::skip]
    fn test_get_maps_zero_to_none() {
        let board = Board::from_cells(vec![
            2, 0,
            0, 8,
        ])
        .unwrap();
        assert_eq!(board.get(0, 0), Some(2));
        assert_eq!(board.get(0, 1), None);
        assert_eq!(board.get(1, 1), Some(8));
        assert_eq!(board.get(5, 5), None);
    }

    #[test]
    #[rustfmt::skip]
    fn test_occupied_and_full() {
        let board = Board::from_cells(vec![
            2, 4,
            8, 16,
        ])
        .unwrap();
        assert!(board.is_full());
        assert_eq!(board.occupied_count(), 4);
        assert_eq!(board.highest_tile(), 16);
    }

    #[test]
    #[rustfmt::skip]
    fn test_display_renders_rows() {
        let board = Board::from_cells(vec![
            2, 0,
            0, 2048,
        ])
        .unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains('2'));
        assert!(lines[0].contains('.'));
        assert!(lines[1].ends_with("2048"));
    }
}
