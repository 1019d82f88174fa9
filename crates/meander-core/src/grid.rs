//! Static rendering of a sequence as bordered ASCII art
//!
//! Column `i` of the picture holds a single mark at the height given by the
//! `i`-th value of the sequence. Marks are toggled rather than set, so a cell
//! hit an even number of times stays blank.
//!
//! Values are shifted so the sequence minimum lands on the bottom row. For
//! sequences produced by [`PatternBuilder`](crate::pattern::PatternBuilder)
//! the minimum is always 0 and the shift changes nothing.

use crate::config::{GlyphSet, PatternConfig};
use crate::errors::{MeanderError, Result};
use crate::sequence::Sequence;
use std::io::Write;

/// Row-major boolean grid, row 0 at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Flip the cell at (`column`, `row`).
    pub fn toggle(&mut self, column: usize, row: i64) -> Result<()> {
        let index = usize::try_from(row)
            .ok()
            .and_then(|r| self.index(column, r))
            .ok_or(MeanderError::RowOutOfRange {
                column,
                row,
                height: self.height,
            })?;
        self.cells[index] = !self.cells[index];
        Ok(())
    }

    /// Rows from the highest index down to row 0.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width.max(1)).rev()
    }

    fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.width && row < self.height).then(|| row * self.width + column)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GridRenderer {
    glyphs: GlyphSet,
}

impl GridRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &PatternConfig) -> Self {
        Self {
            glyphs: config.glyphs,
        }
    }

    pub fn with_glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Rasterize `sequence` into a `len x span` grid.
    pub fn rasterize(&self, sequence: &Sequence) -> Result<Grid> {
        let (min, _) = sequence.bounds().ok_or(MeanderError::EmptySequence)?;
        let height = usize::try_from(sequence.span()?).map_err(|_| MeanderError::SpanOverflow)?;
        let width = sequence.len();
        log::debug!("Rasterizing sequence into {}x{} grid", width, height);

        let mut grid = Grid::new(width, height);
        for (column, &value) in sequence.iter().enumerate() {
            grid.toggle(column, value - min)?;
        }
        Ok(grid)
    }

    /// Render `sequence` to a string, one line per grid row plus two borders.
    pub fn render(&self, sequence: &Sequence) -> Result<String> {
        let mut out = Vec::new();
        self.print(sequence, &mut out)?;
        String::from_utf8(out).map_err(|e| MeanderError::Io(std::io::Error::other(e)))
    }

    pub fn print<W: Write>(&self, sequence: &Sequence, out: &mut W) -> Result<()> {
        let grid = self.rasterize(sequence)?;
        self.write_grid(&grid, out)
    }

    pub fn write_grid<W: Write>(&self, grid: &Grid, out: &mut W) -> Result<()> {
        let border: String = std::iter::repeat(self.glyphs.border)
            .take(grid.width())
            .collect();

        writeln!(out, "{}", border)?;
        for row in grid.rows_top_down() {
            let line: String = row
                .iter()
                .map(|&on| if on { self.glyphs.on } else { self.glyphs.off })
                .collect();
            writeln!(out, "{}", line)?;
        }
        writeln!(out, "{}", border)?;
        out.flush()?;
        Ok(())
    }
}
