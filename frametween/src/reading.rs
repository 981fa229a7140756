use alloc::string::String;

/// A raw value returned by an accessor getter.
///
/// Style-like collaborators usually report text (`"12px"`), plain models report numbers. The
/// driver turns either into an `f64` with [`Reading::to_f64`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Reading {
    Number(f64),
    Text(String),
}

impl Reading {
    /// Converts the reading to a number. Text is parsed with [`parse_float`], so unparsable
    /// text yields `NaN` instead of an error.
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Number(v) => *v,
            Self::Text(s) => parse_float(s),
        }
    }
}

impl From<f64> for Reading {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<f32> for Reading {
    fn from(v: f32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<i32> for Reading {
    fn from(v: i32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<String> for Reading {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Reading {
    fn from(s: &str) -> Self {
        Self::Text(String::from(s))
    }
}

/// Parses the longest leading decimal literal of `s`, the way host `parseFloat` does.
///
/// - Leading whitespace is skipped.
/// - An optional sign is followed by digits with an optional fraction and exponent, or by
///   `Infinity`.
/// - Anything after the literal is ignored (`"12.5px"` parses as `12.5`).
/// - Returns `NaN` if no literal is found.
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0usize;

    let negative = match bytes.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    if s[i..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let body_start = i;
    let mut mantissa_digits = 0usize;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        mantissa_digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        let dot = i;
        i += 1;
        let mut fraction_digits = 0usize;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            fraction_digits += 1;
        }
        if mantissa_digits == 0 && fraction_digits == 0 {
            i = dot;
        }
        mantissa_digits += fraction_digits;
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    // An exponent only counts when at least one digit follows it.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    let magnitude = s[body_start..i].parse::<f64>().unwrap_or(f64::NAN);
    if negative { -magnitude } else { magnitude }
}
