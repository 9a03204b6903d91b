//! Provides fixed-point and Newton-Raphson root-finding, each returning the
//! full [`Trace`] of the iteration rather than only the final value.
//!
//! Both iterations are driven by a [`Stop`] criterion: either a fixed number
//! of steps, or a tolerance on the residual. A tolerance with no `maxiters`
//! cap loops until the residual drops below the tolerance, and so never
//! returns for a sequence that does not converge; supply a cap (or a fixed
//! step count) when that is possible.

use log::{ debug, warn };
use num_traits::Float;
use thiserror::Error;
use crate::math::{
    partition::as_f64,
    trace::{ Termination, Trace },
};

/// Tolerance used by [`Stop::default`].
pub const DEF_LIM: f64 = 1e-3;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RootError {
    #[error("derivative vanished at x = {x} (step {step})")]
    ZeroDerivative { step: usize, x: f64 },

    #[error("number of steps must be positive")]
    ZeroSteps,

    #[error("tolerance must be finite and positive, got {0}")]
    InvalidTolerance(f64),
}
pub type RootResult<T> = Result<T, RootError>;

/// Controls when a root-finding iteration stops.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stop {
    /// Take exactly this many steps, regardless of convergence.
    Steps(usize),

    /// Step while the residual is at least `lim`, optionally giving up after
    /// `maxiters` steps.
    Tolerance { lim: f64, maxiters: Option<usize> },
}

impl Default for Stop {
    fn default() -> Self { Self::Tolerance { lim: DEF_LIM, maxiters: None } }
}

impl Stop {
    pub fn steps(n: usize) -> Self { Self::Steps(n) }

    /// Unbounded tolerance criterion.
    pub fn tolerance(lim: f64) -> Self {
        return Self::Tolerance { lim, maxiters: None };
    }

    /// Cap a tolerance criterion at `maxiters` steps. Has no effect on
    /// `Steps`.
    pub fn with_maxiters(self, maxiters: usize) -> Self {
        return match self {
            Self::Steps(n) => Self::Steps(n),
            Self::Tolerance { lim, .. }
                => Self::Tolerance { lim, maxiters: Some(maxiters) },
        };
    }

    fn validate(&self) -> RootResult<()> {
        return match *self {
            Self::Steps(0) => Err(RootError::ZeroSteps),
            Self::Tolerance { lim, .. } if !(lim.is_finite() && lim > 0.0)
                => Err(RootError::InvalidTolerance(lim)),
            _ => Ok(()),
        };
    }
}

fn log_record<T>(label: &str, step: usize, x: T, residual: T)
where T: Float
{
    debug!(
        "{}: n = {}, xn = {}, |f(xn)| = {}",
        label, step, as_f64(x), as_f64(residual),
    );
}

/// Shared driver: `update` maps step `k` and `x_{k-1}` to `x_k`; `residual`
/// is both the recorded column and the quantity compared against the
/// tolerance.
fn iterate<T, U, R>(
    label: &str,
    x0: T,
    stop: Stop,
    mut update: U,
    residual: R,
) -> RootResult<Trace<T>>
where
    T: Float,
    U: FnMut(usize, T) -> RootResult<T>,
    R: Fn(T) -> T,
{
    stop.validate()?;
    let mut x: T = x0;
    let mut r: T = residual(x);
    let mut trace = Trace::start(x, r);
    log_record(label, 0, x, r);
    let termination: Termination = match stop {
        Stop::Steps(n) => {
            for k in 1..=n {
                x = update(k, x)?;
                r = residual(x);
                trace.push(k, x, r);
                log_record(label, k, x, r);
            }
            Termination::StepsExhausted
        },
        Stop::Tolerance { lim, maxiters } => {
            let lim: T = T::from(lim).unwrap_or_else(T::max_value);
            let mut k: usize = 0;
            loop {
                if r < lim { break Termination::Converged; }
                if r.is_nan() { break Termination::NonFinite; }
                if matches!(maxiters, Some(cap) if k >= cap) {
                    warn!(
                        "{}: no convergence after {} steps (|f(xn)| = {})",
                        label, k, as_f64(r),
                    );
                    break Termination::CapReached;
                }
                k += 1;
                x = update(k, x)?;
                r = residual(x);
                trace.push(k, x, r);
                log_record(label, k, x, r);
            }
        },
    };
    debug!(
        "{}: {:?} after {} steps, xn = {}",
        label, termination, trace.len() - 1, as_f64(x),
    );
    return Ok(trace.finish(termination));
}

/// Iterate `x_{k+1} = m(x_k)` toward a fixed point `m(x) = x`.
///
/// Every record, including step 0, reports `|m(x_k) - x_k|`, which is also
/// what a tolerance criterion tests.
pub fn fixed_point_iterate<F, T>(m: F, x0: T, stop: Stop)
    -> RootResult<Trace<T>>
where
    F: Fn(T) -> T,
    T: Float,
{
    return iterate(
        "fixed-point",
        x0,
        stop,
        |_, x| Ok(m(x)),
        |x| (m(x) - x).abs(),
    );
}

/// Iterate `x_{k+1} = x_k - m(x_k) / dm(x_k)` toward a root `m(x) = 0`,
/// provided the derivative `dm`.
///
/// Records report `|m(x_k)|`. Returns [`RootError::ZeroDerivative`] if
/// `dm(x_k)` is exactly zero at any step.
pub fn newton_raphson_iterate<F, DF, T>(m: F, dm: DF, x0: T, stop: Stop)
    -> RootResult<Trace<T>>
where
    F: Fn(T) -> T,
    DF: Fn(T) -> T,
    T: Float,
{
    return iterate(
        "newton-raphson",
        x0,
        stop,
        |k, x| {
            let d: T = dm(x);
            if d == T::zero() {
                return Err(RootError::ZeroDerivative { step: k, x: as_f64(x) });
            }
            return Ok(x - m(x) / d);
        },
        |x| m(x).abs(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const SQRT2: f64 = std::f64::consts::SQRT_2;

    fn babylon(x: f64) -> f64 { (x + 2.0 / x) / 2.0 }

    #[test]
    fn fixed_point_converges_to_sqrt2() {
        let trace = fixed_point_iterate(babylon, 1.0, Stop::tolerance(1e-4))
            .unwrap();
        assert!(trace.converged());
        assert!(trace.last().residual < 1e-4);
        assert_abs_diff_eq!(trace.solution(), SQRT2, epsilon = 1e-4);
        let first = trace.first();
        assert_eq!((first.step, first.x, first.residual), (0, 1.0, 0.5));
        trace.iter().enumerate().for_each(|(k, rec)| assert_eq!(rec.step, k));
    }

    #[test]
    fn fixed_point_residual_matches_stop_test() {
        let trace = fixed_point_iterate(babylon, 1.0, Stop::steps(3)).unwrap();
        for rec in trace.iter() {
            assert_eq!(rec.residual, (babylon(rec.x) - rec.x).abs());
        }
    }

    #[test]
    fn fixed_point_bounded_ignores_convergence() {
        let trace = fixed_point_iterate(|x: f64| x.cos(), 0.5, Stop::steps(40))
            .unwrap();
        assert_eq!(trace.len(), 41);
        assert_eq!(trace.termination(), Termination::StepsExhausted);
        assert_eq!(
            trace.iter().map(|rec| rec.step).collect::<Vec<usize>>(),
            (0..=40).collect::<Vec<usize>>(),
        );
        assert_abs_diff_eq!(trace.solution(), 0.739_085_133, epsilon = 1e-6);
    }

    #[test]
    fn fixed_point_default_tolerance() {
        let trace = fixed_point_iterate(|x: f64| x.cos(), 1.0, Stop::default())
            .unwrap();
        assert!(trace.last().residual < DEF_LIM);
        assert!(trace.records()[trace.len() - 2].residual >= DEF_LIM);
    }

    #[test]
    fn cap_stops_divergent_iteration() {
        let stop = Stop::tolerance(1e-3).with_maxiters(10);
        let trace = fixed_point_iterate(|x: f64| x + 1.0, 0.0, stop).unwrap();
        assert_eq!(trace.termination(), Termination::CapReached);
        assert_eq!(trace.len(), 11);
        assert_eq!(trace.solution(), 10.0);
    }

    #[test]
    fn nan_residual_ends_iteration() {
        let trace = fixed_point_iterate(|x: f64| x.sqrt(), -1.0, Stop::default())
            .unwrap();
        assert_eq!(trace.termination(), Termination::NonFinite);
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn newton_five_steps() {
        let trace = newton_raphson_iterate(
            |x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0, Stop::steps(5))
            .unwrap();
        assert_eq!(trace.len(), 6);
        assert_eq!(trace.rows().len(), 7);
        assert_eq!(trace.last().step, 5);
        assert_abs_diff_eq!(trace.solution(), SQRT2, epsilon = 1e-4);
        assert_eq!(trace.first().residual, 1.0);
    }

    #[test]
    fn newton_tolerance() {
        let trace = newton_raphson_iterate(
            |x: f64| x.powi(3) - x - 1.0,
            |x: f64| 3.0 * x * x - 1.0,
            1.5,
            Stop::default(),
        ).unwrap();
        assert!(trace.converged());
        assert!(trace.last().residual < DEF_LIM);
        assert_abs_diff_eq!(trace.solution(), 1.324_718, epsilon = 1e-3);
    }

    #[test]
    fn newton_zero_derivative_is_an_error() {
        let res = newton_raphson_iterate(
            |x: f64| x * x + 1.0, |x: f64| 2.0 * x, 0.0, Stop::steps(3));
        assert_eq!(res, Err(RootError::ZeroDerivative { step: 1, x: 0.0 }));

        // the derivative of x^3 - 3x vanishes at x = 1
        let res = newton_raphson_iterate(
            |x: f64| x.powi(3) - 3.0 * x,
            |x: f64| 3.0 * x * x - 3.0,
            1.0,
            Stop::default(),
        );
        assert_eq!(res, Err(RootError::ZeroDerivative { step: 1, x: 1.0 }));
    }

    #[test]
    fn rejects_bad_stop() {
        assert_eq!(
            fixed_point_iterate(babylon, 1.0, Stop::steps(0)),
            Err(RootError::ZeroSteps),
        );
        assert_eq!(
            fixed_point_iterate(babylon, 1.0, Stop::tolerance(-1.0)),
            Err(RootError::InvalidTolerance(-1.0)),
        );
        assert!(matches!(
            newton_raphson_iterate(
                babylon, babylon, 1.0, Stop::tolerance(f64::NAN)),
            Err(RootError::InvalidTolerance(_)),
        ));
    }

    #[test]
    fn tolerance_beyond_f32_range_converges_at_once() {
        // 1e300 has no f32 value; the cast must not shrink the tolerance
        let stop = Stop::tolerance(1e300);
        let trace = fixed_point_iterate(|x: f32| x + 1.0, 0.0, stop).unwrap();
        assert_eq!(trace.termination(), Termination::Converged);
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn maxiters_leaves_steps_alone() {
        assert_eq!(Stop::steps(4).with_maxiters(2), Stop::Steps(4));
        assert_eq!(
            Stop::default().with_maxiters(2),
            Stop::Tolerance { lim: DEF_LIM, maxiters: Some(2) },
        );
    }
}
