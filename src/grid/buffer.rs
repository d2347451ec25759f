use super::geom::Pos;
use super::glyph::Cell;

/// Fixed-size grid of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellBuffer {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl CellBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; len],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        let idx = self.idx(pos)?;
        self.cells.get(idx)
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Cells with their positions, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Cell)> + '_ {
        let width = self.width.max(1) as usize;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let pos = Pos::new((i / width) as i32, (i % width) as i32);
            (pos, cell)
        })
    }

    /// The glyphs of one row as a string, continuation cells left out.
    pub fn row_text(&self, row: i32) -> Option<String> {
        if row < 0 || row >= self.height {
            return None;
        }
        let start = row as usize * self.width as usize;
        let end = start + self.width as usize;
        Some(self.cells[start..end].iter().filter_map(Cell::glyph).collect())
    }

    /// Writes `cells` left to right starting at `pos`, dropping the ones that fall outside the
    /// buffer. Returns every position whose content was replaced, including the halves of
    /// double-width glyphs that were blanked because their partner got overwritten.
    pub fn put_run<I>(&mut self, pos: Pos, cells: I) -> Vec<Pos>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut touched = Vec::new();
        if pos.row < 0 || pos.row >= self.height {
            return touched;
        }

        let mut last: Option<i32> = None;
        for (offset, cell) in cells.into_iter().enumerate() {
            let Some(col) = i32::try_from(offset)
                .ok()
                .and_then(|offset| pos.col.checked_add(offset))
            else {
                break;
            };
            if col >= self.width {
                break;
            }
            let here = Pos::new(pos.row, col);
            let Some(idx) = self.idx(here) else {
                continue;
            };

            let mut cell = cell;
            if last.is_none() {
                // The run's left half was clipped away.
                if cell.is_continuation() {
                    cell = Cell::BLANK;
                }
                if self.cells[idx].is_continuation() && col > 0 {
                    let left = Pos::new(pos.row, col - 1);
                    self.blank(left);
                    touched.push(left);
                }
            }

            self.cells[idx] = cell;
            touched.push(here);
            last = Some(col);
        }

        if let Some(last) = last {
            let right = Pos::new(pos.row, last + 1);
            if self.cell(right).is_some_and(Cell::is_continuation) {
                self.blank(right);
                touched.push(right);
            }
        }

        touched
    }

    fn blank(&mut self, pos: Pos) {
        if let Some(idx) = self.idx(pos) {
            self.cells[idx] = Cell::BLANK;
        }
    }

    fn idx(&self, pos: Pos) -> Option<usize> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        if pos.row >= self.height || pos.col >= self.width {
            return None;
        }
        Some(pos.row as usize * self.width as usize + pos.col as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/buffer.rs"]
mod tests;
