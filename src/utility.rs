use once_cell::sync::Lazy;
use regex::Regex;

use crate::title::value::Number;

// 先頭から読めるところまでを数値とみなす緩い変換
// - "4.56" は整数としては 4
// - "12px" は 12
// - 数字が一つもなければ NaN

pub fn parse_integer(s: &str) -> Number {
    static REGEX_HEX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?P<sign>[+-]?)0[xX](?P<digits>[0-9a-fA-F]+)").unwrap());
    static REGEX_HEX_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?0[xX]").unwrap());
    static REGEX_DECIMAL: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?P<sign>[+-]?)(?P<digits>[0-9]+)").unwrap());

    let s = s.trim_start();

    let (caps, radix) = match REGEX_HEX.captures(s) {
        Some(caps) => (caps, 16),

        // "0x" の後に 16 進数字がなければ NaN ("0" とは読まない)
        None if REGEX_HEX_PREFIX.is_match(s) => return Number::NaN,

        None => match REGEX_DECIMAL.captures(s) {
            Some(caps) => (caps, 10),
            None => return Number::NaN,
        },
    };

    let negative = &caps["sign"] == "-";
    let digits = &caps["digits"];

    match i64::from_str_radix(digits, radix) {
        Ok(value) => Number::Integer(if negative { -value } else { value }),

        // i64 に収まらないものは精度を落として float にする
        Err(_) => {
            let value = digits
                .chars()
                .filter_map(|c| c.to_digit(radix))
                .fold(0f64, |acc, d| acc * radix as f64 + d as f64);
            Number::Float(if negative { -value } else { value })
        }
    }
}

pub fn parse_float(s: &str) -> Number {
    static REGEX_FLOAT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[+-]?(Infinity|([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?)").unwrap()
    });

    let s = s.trim_start();

    let Some(m) = REGEX_FLOAT.find(s) else {
        return Number::NaN;
    };
    let literal = m.as_str();

    let value = if literal.ends_with("Infinity") {
        if literal.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    } else {
        match literal.parse::<f64>() {
            Ok(value) => value,
            Err(_) => return Number::NaN,
        }
    };

    Number::from_f64(value)
}
