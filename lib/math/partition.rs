//! Evenly spaced partitions of a closed interval.

use num_traits::Float;
use ndarray as nd;

/// Cast a count or index into the working float type.
///
/// Every `Float` can represent a `usize` (possibly with rounding), so the
/// `NaN` fallback is never taken in practice.
pub(crate) fn cast<T: Float>(k: usize) -> T {
    return T::from(k).unwrap_or_else(T::nan);
}

/// Widen a working float to `f64` for log lines and error payloads.
pub(crate) fn as_f64<T: Float>(x: T) -> f64 {
    return x.to_f64().unwrap_or(f64::NAN);
}

/// `n` equal subintervals of `[a, b]` with step `h = (b - a) / n`.
///
/// `a > b` is allowed, in which case `h` is negative and every point is
/// visited from `a` toward `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Partition<T> {
    pub a: T,
    pub b: T,
    pub n: usize,
    pub h: T,
}

impl<T> Partition<T>
where T: Float
{
    /// Returns `None` if `n == 0`.
    pub fn new(a: T, b: T, n: usize) -> Option<Self> {
        if n == 0 { return None; }
        let h: T = (b - a) / cast(n);
        return Some(Self { a, b, n, h });
    }

    /// Number of sample points, `n + 1`.
    pub fn len(&self) -> usize { self.n + 1 }

    /// Always `false`; a partition has at least two points.
    pub fn is_empty(&self) -> bool { false }

    /// The `i`-th point, `a + i * h`.
    pub fn x(&self, i: usize) -> T { self.a + cast::<T>(i) * self.h }

    /// All `n + 1` points `x_0 = a, ..., x_n`.
    pub fn points(&self) -> nd::Array1<T> {
        return nd::Array1::from_shape_fn(self.n + 1, |i| self.x(i));
    }

    /// The `n` midpoints `(x_i + x_{i+1}) / 2`.
    pub fn midpoints(&self) -> nd::Array1<T> {
        let two: T = cast(2);
        return nd::Array1::from_shape_fn(
            self.n, |i| (self.x(i) + self.x(i + 1)) / two);
    }

    /// `f` evaluated at every point.
    pub fn sample<F>(&self, f: F) -> nd::Array1<T>
    where F: Fn(T) -> T
    {
        return self.points().mapv(f);
    }

    /// `f` evaluated at every midpoint.
    pub fn sample_midpoints<F>(&self, f: F) -> nd::Array1<T>
    where F: Fn(T) -> T
    {
        return self.midpoints().mapv(f);
    }
}
