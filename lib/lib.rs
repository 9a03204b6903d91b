#![allow(non_snake_case)]
#![allow(clippy::needless_return)]

//! A small collection of numerical routines for scalar functions of a single
//! real variable:
//! - root-finding by fixed-point iteration and Newton-Raphson, returning the
//!   full iteration table ([`math::search`]);
//! - left, right, and midpoint rectangle, trapezoidal, and Simpson's rules
//!   for definite integrals ([`math::integrate`]);
//! - forward-Euler stepping of `dy/dt = m(y)` ([`math::solve`]).
//!
//! Every routine is a stateless function of its arguments and may be called
//! concurrently from any number of threads. Diagnostics are emitted through
//! the `log` facade; no logger is installed here.

pub mod error;
pub mod math;

pub use crate::{
    error::{ NumanError, NumanResult },
    math::{
        integrate::{
            DEF_SUBINTERVALS,
            QuadError,
            QuadResult,
            Rule,
            left_rectangle,
            right_rectangle,
            midpoint_rectangle,
            trapezoidal,
            simpson,
        },
        search::{
            DEF_LIM,
            RootError,
            RootResult,
            Stop,
            fixed_point_iterate,
            newton_raphson_iterate,
        },
        solve::{
            DEF_STEPS,
            SolveError,
            SolveResult,
            euler_step,
            euler_prog,
        },
        trace::{ IterRecord, Termination, Trace, TRACE_HEADER },
    },
};
