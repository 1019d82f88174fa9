//! Recursive doubling construction of the meander sequence
//!
//! Starting from `[0]`, each iteration mirrors the current cell (negated and
//! lifted just above its own span), appends the mirror, then appends the
//! reverse of the result. Length grows by a factor of four per iteration while
//! the span grows by one, so the pattern becomes wide quickly but stays short.

use crate::config::PatternConfig;
use crate::errors::{MeanderError, Result};
use crate::sequence::Sequence;

/// Hard ceiling for `max_order`. At order 12 the sequence holds 4^12 values
/// (128 MiB) and the rendered grid 4^12 x 13 cells (about 210 MiB); every
/// further order multiplies both by four.
pub const ORDER_CEILING: u32 = 12;

#[derive(Debug, Clone)]
pub struct PatternBuilder {
    max_order: u32,
}

impl Default for PatternBuilder {
    fn default() -> Self {
        Self::from_config(&PatternConfig::default())
    }
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &PatternConfig) -> Self {
        Self {
            max_order: config.max_order,
        }
    }

    pub fn with_max_order(mut self, max_order: u32) -> Self {
        self.max_order = max_order;
        self
    }

    /// Apply the doubling rule `order` times to `[0]`.
    pub fn build(&self, order: u32) -> Result<Sequence> {
        self.check_order(order)?;

        let mut cell = Sequence::new(vec![0]);
        for step in 0..order {
            cell = Self::unfold(&cell)?;
            log::debug!(
                "Iteration {}: length {}, span {}",
                step + 1,
                cell.len(),
                cell.span()?
            );
        }
        Ok(cell)
    }

    /// Every generation from `[0]` up to and including `order`.
    pub fn stages(&self, order: u32) -> Result<Vec<Sequence>> {
        self.check_order(order)?;

        let mut stages = Vec::with_capacity(order as usize + 1);
        let mut cell = Sequence::new(vec![0]);
        for _ in 0..order {
            let next = Self::unfold(&cell)?;
            stages.push(cell);
            cell = next;
        }
        stages.push(cell);
        Ok(stages)
    }

    fn unfold(cell: &Sequence) -> Result<Sequence> {
        let half = cell.concat(&cell.negate()?.offset(cell.span()?)?);
        let sequence = half.concat(&half.reverse());
        Ok(sequence)
    }

    fn check_order(&self, order: u32) -> Result<()> {
        if order > self.max_order {
            return Err(MeanderError::OrderTooLarge {
                order,
                max: self.max_order,
            });
        }
        Ok(())
    }
}
