//! Iteration tables produced by the root-finders in [`search`][super::search].

use std::fmt;
use itertools::Itertools;
use num_traits::Float;
use crate::math::partition::as_f64;

/// Column labels of every iteration table.
pub const TRACE_HEADER: [&str; 3] = ["n", "xn", "|f(xn)|"];

/// A single row of an iteration table.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterRecord<T> {
    /// Step index; 0 is the initial guess.
    pub step: usize,
    /// Current approximation.
    pub x: T,
    /// Magnitude of the quantity the stopping criterion tests.
    pub residual: T,
}

/// How an iteration ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The residual dropped below the tolerance.
    Converged,
    /// A fixed number of steps was requested and all were taken.
    StepsExhausted,
    /// The hard cap on iterations was reached before convergence.
    CapReached,
    /// The residual became NaN, which no tolerance test can pass.
    NonFinite,
}

/// Ordered record of an iteration, starting with the initial guess at step 0.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace<T> {
    records: Vec<IterRecord<T>>,
    termination: Termination,
}

impl<T> Trace<T>
where T: Float
{
    pub(crate) fn start(x0: T, residual: T) -> Self {
        let records = vec![IterRecord { step: 0, x: x0, residual }];
        return Self { records, termination: Termination::StepsExhausted };
    }

    pub(crate) fn push(&mut self, step: usize, x: T, residual: T) {
        self.records.push(IterRecord { step, x, residual });
    }

    pub(crate) fn finish(mut self, termination: Termination) -> Self {
        self.termination = termination;
        return self;
    }

    pub fn header(&self) -> [&'static str; 3] { TRACE_HEADER }

    pub fn records(&self) -> &[IterRecord<T>] { &self.records }

    /// Number of records, including step 0. The header is not counted.
    pub fn len(&self) -> usize { self.records.len() }

    /// Always `false`; every trace holds its step-0 record.
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn first(&self) -> &IterRecord<T> { &self.records[0] }

    pub fn last(&self) -> &IterRecord<T> {
        return &self.records[self.records.len() - 1];
    }

    /// The final approximation.
    pub fn solution(&self) -> T { self.last().x }

    pub fn termination(&self) -> Termination { self.termination }

    pub fn converged(&self) -> bool {
        return self.termination == Termination::Converged;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IterRecord<T>> {
        return self.records.iter();
    }

    /// Render the full table: the header row, then one row per record.
    pub fn rows(&self) -> Vec<[String; 3]> {
        return std::iter::once(TRACE_HEADER.map(String::from))
            .chain(
                self.records.iter()
                    .map(|rec| {
                        [
                            rec.step.to_string(),
                            as_f64(rec.x).to_string(),
                            as_f64(rec.residual).to_string(),
                        ]
                    })
            )
            .collect();
    }
}

impl<T> fmt::Display for Trace<T>
where T: Float
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let table: String
            = self.rows().iter()
            .map(|row| row.iter().join("\t"))
            .join("\n");
        return f.write_str(&table);
    }
}

impl<T> IntoIterator for Trace<T> {
    type Item = IterRecord<T>;
    type IntoIter = std::vec::IntoIter<IterRecord<T>>;

    fn into_iter(self) -> Self::IntoIter { self.records.into_iter() }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a IterRecord<T>;
    type IntoIter = std::slice::Iter<'a, IterRecord<T>>;

    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}
