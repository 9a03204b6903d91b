//! Provides the rectangle (left, right, midpoint), trapezoidal, and Simpson's
//! rules for integrals of the form
//! ```math
//! \int_a^b m(x) \,dx
//! ```
//! over `n` evenly spaced subintervals of `[a, b]`.
//!
//! Each rule samples `m` on a fresh [`Partition`] and reduces the samples to a
//! single estimate. The sample-level [`trapz`] and [`simpson`]-style
//! reductions are also exposed for functions that are already tabulated.

use log::trace;
use num_traits::Float;
use ndarray::{
    self as nd,
    s,
};
use crate::{
    mkerr,
    math::partition::{ Partition, as_f64, cast },
};

/// Number of subintervals used when the caller has no preference.
pub const DEF_SUBINTERVALS: usize = 100;

mkerr!(
    QuadError : {
        /// `n` was zero, or fewer than two samples were given.
        ZeroSubintervals => "number of subintervals must be positive",
        /// Simpson's rule needs pairs of subintervals.
        OddSubintervals => "n must be an even number for Simpson's rule",
    }
);
pub type QuadResult<T> = Result<T, QuadError>;

/// Selects one of the quadrature rules in this module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rule {
    Left,
    Right,
    Midpoint,
    Trapezoidal,
    Simpson,
}

impl Rule {
    pub const ALL: [Rule; 5] = [
        Rule::Left,
        Rule::Right,
        Rule::Midpoint,
        Rule::Trapezoidal,
        Rule::Simpson,
    ];

    pub fn name(self) -> &'static str {
        return match self {
            Rule::Left => "left rectangle",
            Rule::Right => "right rectangle",
            Rule::Midpoint => "midpoint rectangle",
            Rule::Trapezoidal => "trapezoidal",
            Rule::Simpson => "simpson",
        };
    }

    /// Integrate `m` over `[a, b]` with `n` subintervals using this rule.
    pub fn integrate<F, T>(self, m: F, a: T, b: T, n: usize) -> QuadResult<T>
    where
        F: Fn(T) -> T,
        T: Float,
    {
        return match self {
            Rule::Left => left_rectangle(m, a, b, n),
            Rule::Right => right_rectangle(m, a, b, n),
            Rule::Midpoint => midpoint_rectangle(m, a, b, n),
            Rule::Trapezoidal => trapezoidal(m, a, b, n),
            Rule::Simpson => simpson(m, a, b, n),
        };
    }
}

fn partition<T>(rule: Rule, a: T, b: T, n: usize) -> QuadResult<Partition<T>>
where T: Float
{
    let p = Partition::new(a, b, n).ok_or(QuadError::ZeroSubintervals)?;
    trace!(
        "{}: a = {}, b = {}, n = {}, h = {}",
        rule.name(), as_f64(a), as_f64(b), n, as_f64(p.h),
    );
    return Ok(p);
}

/// Sum `m(x_i) * h` over the left endpoints `x_0, ..., x_{n-1}`.
pub fn left_rectangle<F, T>(m: F, a: T, b: T, n: usize) -> QuadResult<T>
where
    F: Fn(T) -> T,
    T: Float,
{
    let p = partition(Rule::Left, a, b, n)?;
    let y: nd::Array1<T> = p.sample(m);
    return Ok(y.slice(s![..n]).sum() * p.h);
}

/// Sum `m(x_i) * h` over the right endpoints `x_1, ..., x_n`.
pub fn right_rectangle<F, T>(m: F, a: T, b: T, n: usize) -> QuadResult<T>
where
    F: Fn(T) -> T,
    T: Float,
{
    let p = partition(Rule::Right, a, b, n)?;
    let y: nd::Array1<T> = p.sample(m);
    return Ok(y.slice(s![1..]).sum() * p.h);
}

/// Sum `m` at the midpoint of each subinterval, times `h`.
pub fn midpoint_rectangle<F, T>(m: F, a: T, b: T, n: usize) -> QuadResult<T>
where
    F: Fn(T) -> T,
    T: Float,
{
    let p = partition(Rule::Midpoint, a, b, n)?;
    let y_mid: nd::Array1<T> = p.sample_midpoints(m);
    return Ok(y_mid.sum() * p.h);
}

/// Apply the trapezoidal rule, `h/2 (y_{i-1} + y_i)` per subinterval.
///
/// This is the average of [`left_rectangle`] and [`right_rectangle`], and is
/// exact for polynomials of degree at most one.
pub fn trapezoidal<F, T>(m: F, a: T, b: T, n: usize) -> QuadResult<T>
where
    F: Fn(T) -> T,
    T: Float,
{
    let p = partition(Rule::Trapezoidal, a, b, n)?;
    return trapz(&p.sample(m), p.h);
}

/// Apply Simpson's rule, `h/3 (y_{2i-2} + 4 y_{2i-1} + y_{2i})` per pair of
/// subintervals.
///
/// `n` must be even; odd `n` gives [`QuadError::OddSubintervals`] and `m` is
/// never evaluated. Exact for polynomials of degree at most three.
pub fn simpson<F, T>(m: F, a: T, b: T, n: usize) -> QuadResult<T>
where
    F: Fn(T) -> T,
    T: Float,
{
    let p = partition(Rule::Simpson, a, b, n)?;
    if n % 2 == 1 { return Err(QuadError::OddSubintervals); }
    return simpson_samples(&p.sample(m), p.h);
}

/// Apply the trapezoidal rule to a 1D array sampled at even intervals `dx`.
pub fn trapz<T>(y: &nd::Array1<T>, dx: T) -> QuadResult<T>
where T: Float
{
    let n: usize = y.len();
    if n < 2 { return Err(QuadError::ZeroSubintervals); }
    let half: T = dx / cast(2);
    return Ok(
        y[0] * half
        + y.slice(s![1..n - 1]).sum() * dx
        + y[n - 1] * half
    );
}

/// Apply Simpson's rule to a 1D array sampled at even intervals `dx`.
///
/// The array must hold an odd number (at least three) of samples, i.e. an even
/// number of subintervals.
pub fn simpson_samples<T>(y: &nd::Array1<T>, dx: T) -> QuadResult<T>
where T: Float
{
    let n: usize = y.len();
    if n < 2 { return Err(QuadError::ZeroSubintervals); }
    if n % 2 == 0 { return Err(QuadError::OddSubintervals); }
    let third: T = dx / cast(3);
    return Ok(
        y[0] * third
        + y.slice(s![1..n - 1;2]).sum() * (third * cast(4))
        + y.slice(s![2..n - 1;2]).sum() * (third * cast(2))
        + y[n - 1] * third
    );
}
