//! Provides `ErrMsg`, a simple trait to associate a constant string with a
//! fieldless error type, `mkerr`, a macro to declare such a type, and
//! `NumanError`, which collects every error the crate can return.

use thiserror::Error;
use crate::math::{
    integrate::QuadError,
    search::RootError,
    solve::SolveError,
};

/// Simple trait to associate a constant string with an error type.
pub trait ErrMsg {
    fn msg(&self) -> &'static str;
}

/// Declare a fieldless error enum and implement `ErrMsg`, `Display`, and
/// `Error` for it.
///
/// Each variant may carry its own doc comment:
/// ```ignore
/// mkerr!(
///     MyError : {
///         /// shown on the variant
///         Bad => "something went wrong",
///     }
/// );
/// ```
#[macro_export]
macro_rules! mkerr {
    (
        $( #[$attr:meta] )*
        $name:ident : {
            $( $( #[$vattr:meta] )* $var:ident => $msg:literal ),+ $(,)?
        }
    ) => {
        $( #[$attr] )*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $( #[$vattr] )* $var, )+
        }

        impl $crate::error::ErrMsg for $name {
            fn msg(&self) -> &'static str {
                return match *self {
                    $( $name::$var => $msg, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                return f.write_str($crate::error::ErrMsg::msg(self));
            }
        }

        impl std::error::Error for $name { }
    }
}

/// Any error returned by a routine in this crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NumanError {
    #[error("quadrature: {0}")]
    Quad(#[from] QuadError),

    #[error("root-finding: {0}")]
    Root(#[from] RootError),

    #[error("ode: {0}")]
    Solve(#[from] SolveError),
}
pub type NumanResult<T> = Result<T, NumanError>;
