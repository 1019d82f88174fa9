//! Immutable integer sequences and the arithmetic used to fold them
//!
//! A [`Sequence`] never changes after construction. Each operation hands back a
//! fresh value, which keeps the builder's doubling steps free of aliasing: the
//! input of an iteration can still be read while its mirrored copy is being
//! assembled.

use crate::errors::{MeanderError, Result};
use std::ops::Add;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    values: Vec<i64>,
}

impl Sequence {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// Append `other` after `self`, preserving the order of both.
    pub fn concat(&self, other: &Sequence) -> Sequence {
        let mut values = Vec::with_capacity(self.values.len() + other.values.len());
        values.extend_from_slice(&self.values);
        values.extend_from_slice(&other.values);
        Sequence { values }
    }

    /// Fails with `ValueOverflow` if the sequence contains `i64::MIN`.
    pub fn negate(&self) -> Result<Sequence> {
        let values = self
            .values
            .iter()
            .map(|x| x.checked_neg().ok_or(MeanderError::ValueOverflow))
            .collect::<Result<Vec<i64>>>()?;
        Ok(Sequence { values })
    }

    pub fn reverse(&self) -> Sequence {
        Sequence {
            values: self.values.iter().rev().copied().collect(),
        }
    }

    /// Shift every element by `n`.
    pub fn offset(&self, n: i64) -> Result<Sequence> {
        let values = self
            .values
            .iter()
            .map(|x| x.checked_add(n).ok_or(MeanderError::ValueOverflow))
            .collect::<Result<Vec<i64>>>()?;
        Ok(Sequence { values })
    }

    /// Inclusive range width, `max - min + 1`.
    pub fn span(&self) -> Result<i64> {
        let (min, max) = self.bounds().ok_or(MeanderError::EmptySequence)?;
        max.checked_sub(min)
            .and_then(|d| d.checked_add(1))
            .ok_or(MeanderError::SpanOverflow)
    }

    pub fn min(&self) -> Option<i64> {
        self.values.iter().copied().min()
    }

    pub fn max(&self) -> Option<i64> {
        self.values.iter().copied().max()
    }

    /// Minimum and maximum in a single pass.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        let first = *self.values.first()?;
        Some(
            self.values
                .iter()
                .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))),
        )
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }
}

impl From<Vec<i64>> for Sequence {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Add for &Sequence {
    type Output = Sequence;

    fn add(self, rhs: &Sequence) -> Sequence {
        self.concat(rhs)
    }
}
