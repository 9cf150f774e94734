use std::collections::BTreeMap;

use serde::Serialize;

// 整数値は (i64 に収まる限り) float として読んでも Integer にする
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
    // allowInvalidNumbers のときのみ現れる
    NaN,
}

impl Number {
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Self::NaN
        } else if value.fract() == 0.0 && (i64::MIN as f64) <= value && value < (i64::MAX as f64)
        {
            Self::Integer(value as i64)
        } else {
            Self::Float(value)
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Integer(value) => value as f64,
            Self::Float(value) => value,
            Self::NaN => f64::NAN,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Integer(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Self::NaN)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(Number),
    String(String),
    Boolean(bool),

    Numbers(Vec<Number>),
    Strings(Vec<String>),
    Booleans(Vec<bool>),

    // cuts
    NumberLists(Vec<Vec<Number>>),
}

impl PropertyValue {
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_numbers(&self) -> Option<&[Number]> {
        match self {
            Self::Numbers(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            Self::Strings(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_number_lists(&self) -> Option<&[Vec<Number>]> {
        match self {
            Self::NumberLists(values) => Some(values),
            _ => None,
        }
    }
}

pub type PropertyMap = BTreeMap<String, PropertyValue>;
