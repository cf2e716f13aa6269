use crate::rpneval::Number;
use std::fmt;

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(x) => f.write_str(&float_repr(*x)),
        }
    }
}

// Shortest repr that reads back as the same f64, always showing it's a float:
// '7.0' rather than '7', and '1e+16' / '2.5e-05' outside [1e-4, 1e16).
fn float_repr(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // Debug already switches to exponent form at those same thresholds
    let repr = format!("{:?}", x);
    match repr.split_once('e') {
        None => repr,
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
