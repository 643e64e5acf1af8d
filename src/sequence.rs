//! Label sequences: letters, decimal numbers, and Roman numerals.

use std::fmt;
use std::str::FromStr;

use crate::errors::LabelError;

/// Which sequence a whole-figure labeling draws from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelMode {
    /// `A`, `B`, `C`, ...
    UpperAlpha,
    /// `a`, `b`, `c`, ...
    LowerAlpha,
    /// `1`, `2`, `3`, ...
    Decimal,
    /// `I`, `II`, `III`, ...
    UpperRoman,
    /// `i`, `ii`, `iii`, ...
    LowerRoman,
}

impl LabelMode {
    /// The one-character token selecting this mode
    pub fn token(self) -> &'static str {
        match self {
            LabelMode::UpperAlpha => "A",
            LabelMode::LowerAlpha => "a",
            LabelMode::Decimal => "1",
            LabelMode::UpperRoman => "I",
            LabelMode::LowerRoman => "i",
        }
    }

    /// Label for the `n`th panel, counting from 1
    pub fn nth(self, n: u32) -> String {
        match self {
            LabelMode::UpperAlpha => alpha(n),
            LabelMode::LowerAlpha => alpha(n).to_ascii_lowercase(),
            LabelMode::Decimal => n.to_string(),
            LabelMode::UpperRoman => roman(n),
            LabelMode::LowerRoman => roman(n).to_ascii_lowercase(),
        }
    }

    /// The first `count` labels of this sequence
    pub fn take(self, count: usize) -> Vec<String> {
        (1..=count as u32).map(|n| self.nth(n)).collect()
    }
}

impl fmt::Display for LabelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for LabelMode {
    type Err = LabelError;

    // Case matters here: "A" and "a" are different modes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(LabelMode::UpperAlpha),
            "a" => Ok(LabelMode::LowerAlpha),
            "1" => Ok(LabelMode::Decimal),
            "I" => Ok(LabelMode::UpperRoman),
            "i" => Ok(LabelMode::LowerRoman),
            _ => Err(LabelError::UnknownMode { token: s.to_string() }),
        }
    }
}

/// Upper-case letter label for the `n`th panel. Past `Z` the sequence
/// continues like spreadsheet columns: `AA`, `AB`, ..., `AZ`, `BA`.
/// `alpha(0)` is empty.
pub fn alpha(mut n: u32) -> String {
    let mut out = Vec::new();
    while n > 0 {
        n -= 1;
        out.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

// Unit, five, and next-unit symbols per decimal place, least significant first.
const PLACES: [(char, char, char); 3] = [('I', 'V', 'X'), ('X', 'L', 'C'), ('C', 'D', 'M')];

/// Upper-case Roman numeral for `n`, built digit by digit from the most
/// significant place using subtractive notation. Thousands are plain
/// repeated `M`s (no symbol exists above `M`), so 4000 is `MMMM`.
/// `roman(0)` is the empty string.
pub fn roman(n: u32) -> String {
    let thousands = n / 1000;
    let mut out: String = std::iter::repeat_n('M', thousands as usize).collect();

    let mut rest = n % 1000;
    for place in (0..3).rev() {
        let div = 10u32.pow(place as u32);
        let digit = rest / div;
        rest %= div;

        let (unit, five, ten) = PLACES[place];
        match digit {
            1..=3 => out.extend(std::iter::repeat_n(unit, digit as usize)),
            4 => {
                out.push(unit);
                out.push(five);
            }
            5..=8 => {
                out.push(five);
                out.extend(std::iter::repeat_n(unit, digit as usize - 5));
            }
            9 => {
                out.push(unit);
                out.push(ten);
            }
            _ => {}
        }
    }
    out
}
