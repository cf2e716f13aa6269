#![deny(warnings)]

use std::fmt;
use crate::scanner::Scanner;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RpnOp {
    Add, Sub, Mul, Div,
}

impl RpnOp {
    pub fn from_symbol(c: char) -> Option<RpnOp> {
        match c {
            '+' => Some(RpnOp::Add),
            '-' => Some(RpnOp::Sub),
            'x' => Some(RpnOp::Mul),
            '/' => Some(RpnOp::Div),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match *self {
            RpnOp::Add => '+',
            RpnOp::Sub => '-',
            RpnOp::Mul => 'x',
            RpnOp::Div => '/',
        }
    }
}

impl fmt::Display for RpnOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RpnToken {
    Digit(u8),
    Op(RpnOp),
    Unknown(char),
}

impl fmt::Display for RpnToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RpnToken::Digit(d) => write!(f, "{}", d),
            RpnToken::Op(op) => write!(f, "{}", op),
            RpnToken::Unknown(c) => write!(f, "{}", c),
        }
    }
}

/// Splits an rpn expression into single character tokens.
///
/// Separators (`,`) are dropped, they never reach the caller. Anything that
/// is neither a digit nor an operator comes out as `RpnToken::Unknown` and
/// it's up to the consumer to reject it.
pub struct RpnTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    start: usize,
}

impl<I: Iterator<Item=char>> RpnTokenizer<I> {
    pub fn new(source: I) -> Self {
        RpnTokenizer{src: Scanner::new(source), start: 0}
    }

    /// Char position of the last token returned by `next`.
    pub fn offset(&self) -> usize { self.start }

    fn get_token(&mut self) -> Option<RpnToken> {
        self.src.skip_separators();
        self.start = self.src.offset();
        if let Some(d) = self.src.scan_digit() {
            Some(RpnToken::Digit(d))
        } else if let Some(op) = self.src.scan_rpn_op() {
            Some(RpnToken::Op(op))
        } else if let Some(c) = self.src.next() {
            self.src.ignore();
            Some(RpnToken::Unknown(c))
        } else {
            None
        }
    }
}

impl<'a> RpnTokenizer<std::str::Chars<'a>> {
    pub fn from_str(src: &'a str) -> Self {
        Self::new(src.chars())
    }
}

impl<I: Iterator<Item=char>> Iterator for RpnTokenizer<I> {
    type Item = RpnToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////
