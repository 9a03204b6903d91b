//! Root-finding, quadrature, and ODE stepping for scalar functions.

pub mod partition;
pub mod trace;
pub mod search;
pub mod integrate;
pub mod solve;
