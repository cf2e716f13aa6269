mod scanner;
mod char_scanner;
mod rpn_tokenizer;

pub use scanner::Scanner;
pub use rpn_tokenizer::{RpnOp, RpnToken, RpnTokenizer};

#[cfg(test)]
mod scanner_test;
