use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Permissive numeric coercion for scraped values such as `"1,197 cc"` or
/// `"₹ 6.49 Lakh"`. Returns `None` for anything that does not yield a
/// finite, non-negative number.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_lenient(text),
        _ => None,
    }?;
    (parsed.is_finite() && parsed >= 0.0).then_some(parsed)
}

static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.\-]").expect("non-numeric pattern should compile"));
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d*\.?\d+").expect("number pattern should compile"));

/// Strips everything but digits, `.` and `-`, then reads the leading
/// numeric prefix.
pub fn parse_lenient(text: &str) -> Option<f64> {
    let cleaned = NON_NUMERIC.replace_all(text, "");
    LEADING_NUMBER
        .find(&cleaned)
        .and_then(|number| number.as_str().parse::<f64>().ok())
}

/// Truthiness as the scraped data uses it: null, `false`, `0` and the
/// empty string are false, anything else is true.
pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(false),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
