#![deny(warnings)]

use crate::rpn_tokenizer::RpnOp;
use crate::scanner::Scanner;

static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static SEPARATORS: &[char] = &[','];
static OPS: &[char] = &['+', '-', 'x', '/'];


impl<I: Iterator<Item=char>> Scanner<I> {
    // drop any run of separators, they only group sub-expressions visually
    pub fn skip_separators(&mut self) -> bool {
        let skipped = self.skip_all(SEPARATORS);
        self.ignore();
        skipped
    }

    // a single decimal digit, multi-digit literals aren't a thing in rpn input
    pub fn scan_digit(&mut self) -> Option<u8> {
        let d = self.accept_any(DIGITS)?;
        self.ignore();
        d.to_digit(10).map(|d| d as u8)
    }

    pub fn scan_rpn_op(&mut self) -> Option<RpnOp> {
        let op = self.accept_any(OPS)?;
        self.ignore();
        RpnOp::from_symbol(op)
    }
}

///////////////////////////////////////////////////////////////////////////////
