//! Provides forward-Euler integration of autonomous scalar equations
//! `dy/dt = m(y)` over a fixed number of equal steps.
//!
//! No step-size control or stability check is performed; the local
//! truncation error is first order in `h`.

use log::trace;
use num_traits::Float;
use ndarray as nd;
use crate::{
    mkerr,
    math::partition::{ as_f64, cast },
};

/// Number of steps used when the caller has no preference.
pub const DEF_STEPS: usize = 100;

mkerr!(
    SolveError : {
        ZeroSteps => "number of steps must be positive",
    }
);
pub type SolveResult<T> = Result<T, SolveError>;

fn step_size<T>(label: &str, a: T, b: T, n: usize) -> SolveResult<T>
where T: Float
{
    if n == 0 { return Err(SolveError::ZeroSteps); }
    let h: T = (b - a) / cast(n);
    trace!(
        "{}: a = {}, b = {}, n = {}, h = {}",
        label, as_f64(a), as_f64(b), n, as_f64(h),
    );
    return Ok(h);
}

/// Take `n` steps of `y_{k+1} = y_k + h m(y_k)` from `y_0 = x0` across
/// `[a, b]`, returning only `y_n`.
pub fn euler_step<F, T>(m: F, a: T, b: T, x0: T, n: usize) -> SolveResult<T>
where
    F: Fn(T) -> T,
    T: Float,
{
    let h: T = step_size("euler", a, b, n)?;
    let mut y: T = x0;
    for _ in 0..n {
        y = y + h * m(y);
    }
    return Ok(y);
}

/// Like [`euler_step`], but return every intermediate value `y_0, ..., y_n`.
pub fn euler_prog<F, T>(m: F, a: T, b: T, x0: T, n: usize)
    -> SolveResult<nd::Array1<T>>
where
    F: Fn(T) -> T,
    T: Float,
{
    let h: T = step_size("euler_prog", a, b, n)?;
    let mut y: Vec<T> = Vec::with_capacity(n + 1);
    y.push(x0);
    let mut y_prev: T = x0;
    let mut y_next: T;
    for _ in 0..n {
        y_next = y_prev + h * m(y_prev);
        y.push(y_next);
        y_prev = y_next;
    }
    return Ok(nd::Array::from_vec(y));
}
