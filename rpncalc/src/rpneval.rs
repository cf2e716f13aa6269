use lexers::{RpnOp, RpnToken, RpnTokenizer};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use thiserror::Error;
use tracing::{debug, trace};

/// A stack value. Digits push `Int`s, division yields `Float`s and any
/// operation touching a `Float` stays `Float`. Integers never overflow.
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Int(BigInt),
    Float(f64),
}

impl Number {
    pub fn is_float(&self) -> bool {
        matches!(*self, Number::Float(_))
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            // BigInt saturates to +-inf instead of failing
            Number::Int(n) => n.to_f64().unwrap_or(f64::NAN),
            Number::Float(x) => *x,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Number {
        Number::Int(BigInt::from(n))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("operator '{op}' at position {pos} needs 2 operands, stack has {depth}")]
    Underflow { op: RpnOp, pos: usize, depth: usize },
    #[error("nothing to evaluate")]
    Empty,
    #[error("{0} values left on the stack")]
    Leftover(usize),
}

// Malformed is folded into the message, not exposed as a source, so
// error reports don't print the same reason twice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalErr {
    #[error("malformed expression: {0}")]
    MalformedExpression(Malformed),
    #[error("unknown token '{token}' at position {pos}")]
    UnknownToken { token: char, pos: usize },
    #[error("division by zero at position {pos}")]
    DivisionByZero { pos: usize },
}

impl From<Malformed> for EvalErr {
    fn from(err: Malformed) -> EvalErr {
        EvalErr::MalformedExpression(err)
    }
}

/// Observes every step of an evaluation.
///
/// `step` runs after a token was applied with the stack as it was left.
pub trait Tracer {
    fn step(&mut self, pos: usize, token: RpnToken, stack: &[Number]);
}

/// A `Tracer` that does nothing.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoTrace;

impl Tracer for NoTrace {
    #[inline(always)]
    fn step(&mut self, _pos: usize, _token: RpnToken, _stack: &[Number]) {}
}

pub struct Evaluator<T: Tracer = NoTrace> {
    tracer: T,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator { tracer: NoTrace }
    }
}

impl<T: Tracer> Evaluator<T> {
    pub fn with_tracer(tracer: T) -> Evaluator<T> {
        Evaluator { tracer }
    }

    pub fn into_tracer(self) -> T {
        self.tracer
    }

    pub fn eval_str(&mut self, expr: &str) -> Result<Number, EvalErr> {
        self.eval(&mut RpnTokenizer::from_str(expr))
    }

    pub fn eval<I>(&mut self, lx: &mut RpnTokenizer<I>) -> Result<Number, EvalErr>
    where
        I: Iterator<Item = char>,
    {
        let mut operands: Vec<Number> = Vec::new();

        while let Some(token) = lx.next() {
            let pos = lx.offset();
            trace!(pos, %token, depth = operands.len(), "scan");
            match token {
                RpnToken::Digit(d) => operands.push(Number::from(i64::from(d))),
                RpnToken::Op(op) => {
                    let underflow = Malformed::Underflow { op, pos, depth: operands.len() };
                    let r = operands.pop().ok_or_else(|| underflow.clone())?;
                    let l = operands.pop().ok_or(underflow)?;
                    let result = apply(op, &l, &r, pos)?;
                    debug!(%l, %op, %r, %result, "apply");
                    operands.push(result);
                }
                RpnToken::Unknown(c) => return Err(EvalErr::UnknownToken { token: c, pos }),
            }
            self.tracer.step(pos, token, &operands);
        }

        match (operands.pop(), operands.len()) {
            (Some(result), 0) => {
                debug!(%result, "evaluated");
                Ok(result)
            }
            (Some(_), rest) => Err(Malformed::Leftover(rest + 1).into()),
            (None, _) => Err(Malformed::Empty.into()),
        }
    }
}

/// Evaluate an rpn expression such as `2,3,4+x2/`.
pub fn evaluate(expr: &str) -> Result<Number, EvalErr> {
    Evaluator::new().eval_str(expr)
}

// computes `l op r`, only division forces a float
fn apply(op: RpnOp, l: &Number, r: &Number, pos: usize) -> Result<Number, EvalErr> {
    let (int_op, float_op): (fn(&BigInt, &BigInt) -> BigInt, fn(f64, f64) -> f64) = match op {
        RpnOp::Div => return divide(l, r, pos),
        RpnOp::Add => (|a: &BigInt, b: &BigInt| a + b, |a: f64, b: f64| a + b),
        RpnOp::Sub => (|a: &BigInt, b: &BigInt| a - b, |a: f64, b: f64| a - b),
        RpnOp::Mul => (|a: &BigInt, b: &BigInt| a * b, |a: f64, b: f64| a * b),
    };
    Ok(match (l, r) {
        (Number::Int(a), Number::Int(b)) => Number::Int(int_op(a, b)),
        (l, r) => Number::Float(float_op(l.as_f64(), r.as_f64())),
    })
}

fn divide(l: &Number, r: &Number, pos: usize) -> Result<Number, EvalErr> {
    match (l, r) {
        (_, Number::Int(b)) if b.is_zero() => Err(EvalErr::DivisionByZero { pos }),
        (_, Number::Float(b)) if *b == 0.0 => Err(EvalErr::DivisionByZero { pos }),
        // exact quotients are rounded once, from the integer result
        (Number::Int(a), Number::Int(b)) if a.is_multiple_of(b) => {
            Ok(Number::Float(Number::Int(a / b).as_f64()))
        }
        (l, r) => Ok(Number::Float(l.as_f64() / r.as_f64())),
    }
}
