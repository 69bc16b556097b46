//! Number/text conversions for the calculator display.
//!
//! Results are laid out the way a browser prints a `Number`: plain decimal
//! notation for moderate magnitudes, `d.ddde+n` outside that window, and
//! `NaN` / `Infinity` spelled out. Rounding (`to_fixed`, `to_exponential`)
//! works on the exact binary value and resolves ties away from zero.

/// Decimal digits of a finite, nonzero magnitude: `d0.d1d2... × 10^exp`.
struct Digits {
    digits: Vec<u8>,
    exp: i32,
}

// `{:.800e}` is past the longest exact expansion an f64 can have (767 digits).
const EXACT_PRECISION: usize = 800;

/// Most fractional digits `to_fixed` and `to_exponential` will produce.
pub const MAX_FRACTION_DIGITS: usize = 100;

// Plain notation is used while the decimal exponent stays in [-6, 21).
const PLAIN_MIN_EXP: i32 = -6;
const PLAIN_MAX_EXP: i32 = 21;

fn parse_scientific(s: &str) -> Digits {
    let (mantissa, exp) = s.split_once('e').unwrap_or((s, "0"));
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    Digits {
        digits,
        exp: exp.parse().unwrap_or(0),
    }
}

/// Shortest digits that round-trip to `x`.
fn shortest(x: f64) -> Digits {
    parse_scientific(&format!("{:e}", x.abs()))
}

/// The exact decimal expansion of `x`, trailing zeros removed.
fn exact(x: f64) -> Digits {
    let mut d = parse_scientific(&format!("{:.*e}", EXACT_PRECISION, x.abs()));
    while d.digits.len() > 1 && d.digits.last() == Some(&0) {
        d.digits.pop();
    }
    d
}

/// Adds one unit in the last place. Returns true when the carry ran off the
/// front and a new leading digit was inserted.
fn increment(digits: &mut Vec<u8>) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    digits.insert(0, 1);
    true
}

fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// `d.ddd` followed by `e+n` / `e-n`.
fn exponent_form(s: &str, exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    let (lead, rest) = s.split_at(1);
    if rest.is_empty() {
        format!("{lead}e{sign}{}", exp.unsigned_abs())
    } else {
        format!("{lead}.{rest}e{sign}{}", exp.unsigned_abs())
    }
}

fn sign_of(x: f64) -> &'static str {
    if x < 0.0 { "-" } else { "" }
}

/// Canonical text of a number.
///
/// ```
/// use calc_mini::format::to_string;
///
/// assert_eq!(to_string(8.0), "8");
/// assert_eq!(to_string(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(to_string(1e21), "1e+21");
/// assert_eq!(to_string(1.0 / 0.0), "Infinity");
/// ```
pub fn to_string(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_infinite() {
        return format!("{}Infinity", sign_of(x));
    }

    let Digits { digits, exp } = shortest(x);
    let s = digits_to_string(&digits);
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let n = exp + 1;

    let body = if k <= n && n <= PLAIN_MAX_EXP {
        format!("{s}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= PLAIN_MAX_EXP {
        let (int, frac) = s.split_at(n as usize);
        format!("{int}.{frac}")
    } else if PLAIN_MIN_EXP < n && n <= 0 {
        format!("0.{}{s}", "0".repeat(n.unsigned_abs() as usize))
    } else {
        exponent_form(&s, exp)
    };
    format!("{}{body}", sign_of(x))
}

/// Fixed-point text with exactly `places` fractional digits.
///
/// Magnitudes of `1e21` and above fall back to [`to_string`]. `places` is
/// capped at [`MAX_FRACTION_DIGITS`].
pub fn to_fixed(x: f64, places: usize) -> String {
    let places = places.min(MAX_FRACTION_DIGITS);
    if !x.is_finite() || x.abs() >= 1e21 {
        return to_string(x);
    }

    // round(|x| * 10^places) as a digit string
    let mut scaled = if x == 0.0 {
        Vec::new()
    } else {
        let Digits { digits, exp } = exact(x);
        let cut = exp + 1 + places as i32;
        let mut kept: Vec<u8> = (0..cut.max(0) as usize)
            .map(|i| digits.get(i).copied().unwrap_or(0))
            .collect();
        let next = usize::try_from(cut)
            .ok()
            .and_then(|i| digits.get(i).copied())
            .unwrap_or(0);
        if next >= 5 {
            increment(&mut kept);
        }
        kept
    };
    while scaled.len() < places + 1 {
        scaled.insert(0, 0);
    }

    let s = digits_to_string(&scaled);
    let (int, frac) = s.split_at(s.len() - places);
    let int = match int.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    if places == 0 {
        format!("{}{int}", sign_of(x))
    } else {
        format!("{}{int}.{frac}", sign_of(x))
    }
}

/// Exponential text with exactly `places` fractional digits in the mantissa,
/// capped at [`MAX_FRACTION_DIGITS`].
///
/// ```
/// use calc_mini::format::to_exponential;
///
/// assert_eq!(to_exponential(33.33333333, 4), "3.3333e+1");
/// assert_eq!(to_exponential(0.0, 2), "0.00e+0");
/// ```
pub fn to_exponential(x: f64, places: usize) -> String {
    let places = places.min(MAX_FRACTION_DIGITS);
    if !x.is_finite() {
        return to_string(x);
    }

    let (kept, exp) = if x == 0.0 {
        (vec![0; places + 1], 0)
    } else {
        let Digits { digits, exp } = exact(x);
        let mut kept: Vec<u8> = (0..=places)
            .map(|i| digits.get(i).copied().unwrap_or(0))
            .collect();
        let mut exp = exp;
        if digits.get(places + 1).copied().unwrap_or(0) >= 5 && increment(&mut kept) {
            kept.pop();
            exp += 1;
        }
        (kept, exp)
    };
    format!("{}{}", sign_of(x), exponent_form(&digits_to_string(&kept), exp))
}

/// Rounds `x` to `places` decimal places, as `to_fixed` would print it.
pub fn round_to(x: f64, places: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }
    to_fixed(x, places).parse().unwrap_or(x)
}

/// Reads a display or edit-buffer string back as a number.
///
/// Accepts everything the engine can put on screen (`"0."`, `"-12.5"`,
/// `"3.3333e+1"`, `"Infinity"`, `"NaN"`); a bare `"-"` or empty buffer is
/// `None`.
pub fn parse(text: &str) -> Option<f64> {
    text.parse().ok()
}
