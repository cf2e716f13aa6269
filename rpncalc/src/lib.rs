//! Evaluation of single-digit reverse polish notation expressions like
//! `2,3,4+x2/`, with integer results promoted to floats by division.

pub use lexers::{RpnOp, RpnToken, RpnTokenizer};

pub use self::rpneval::evaluate;
pub use self::rpneval::{EvalErr, Evaluator, Malformed, NoTrace, Number, Tracer};

mod rpneval;
mod rpnprint;
