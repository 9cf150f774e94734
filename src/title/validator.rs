use std::collections::HashMap;

use crate::{
    title::{
        config::ParserConfig,
        error::{Result, TitleError},
        value::{Number, PropertyValue},
    },
    utility::{parse_float, parse_integer},
};

// collapse は長さ 1 を要求し，配列でなく値そのものを返す
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cardinality {
    pub length: Option<usize>,
    pub modulo: Option<usize>,
    pub min_length: usize,
    pub max_length: usize,
    pub collapse: bool,
}

impl Cardinality {
    pub const ANY: Self = Self {
        length: None,
        modulo: None,
        min_length: 0,
        max_length: usize::MAX,
        collapse: false,
    };

    pub const SCALAR: Self = Self {
        collapse: true,
        ..Self::ANY
    };

    pub const fn exact(length: usize) -> Self {
        Self {
            length: Some(length),
            ..Self::ANY
        }
    }

    pub const fn at_least(min_length: usize) -> Self {
        Self {
            min_length,
            ..Self::ANY
        }
    }

    pub const fn at_most(max_length: usize) -> Self {
        Self {
            max_length,
            ..Self::ANY
        }
    }

    pub const fn multiple_of(self, modulo: usize) -> Self {
        Self {
            modulo: Some(modulo),
            ..self
        }
    }

    fn check<T>(&self, args: Vec<T>) -> Result<Checked<T>> {
        let actual = args.len();

        let length = if self.collapse { Some(1) } else { self.length };
        if let Some(expected) = length {
            if actual != expected {
                return Err(TitleError::IncorrectLength { expected, actual });
            }
        }

        if let Some(modulo) = self.modulo {
            if modulo > 0 && actual % modulo != 0 {
                return Err(TitleError::NotMultiple { modulo, actual });
            }
        }

        if self.collapse {
            // 長さ 1 は確認済み
            if let Some(first) = args.into_iter().next() {
                return Ok(Checked::Scalar(first));
            }
            return Err(TitleError::IncorrectLength {
                expected: 1,
                actual,
            });
        }

        if actual < self.min_length {
            return Err(TitleError::NotEnoughArguments {
                min: self.min_length,
                actual,
            });
        }
        if actual > self.max_length {
            return Err(TitleError::TooManyArguments {
                max: self.max_length,
                actual,
            });
        }

        Ok(Checked::List(args))
    }
}

impl Default for Cardinality {
    fn default() -> Self {
        Self::ANY
    }
}

enum Checked<T> {
    Scalar(T),
    List(Vec<T>),
}

impl<T> Checked<T> {
    fn into_value(
        self,
        scalar: impl FnOnce(T) -> PropertyValue,
        list: impl FnOnce(Vec<T>) -> PropertyValue,
    ) -> PropertyValue {
        match self {
            Self::Scalar(value) => scalar(value),
            Self::List(values) => list(values),
        }
    }
}

fn check_cardinality<T>(
    config: &ParserConfig,
    cardinality: &Cardinality,
    args: Vec<T>,
) -> Result<Checked<T>> {
    if config.disable_cardinality_checks {
        // collapse もしない
        return Ok(Checked::List(args));
    }
    cardinality.check(args)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Integer,
    Float,
}

impl Conversion {
    pub fn convert(self, arg: &str) -> Number {
        match self {
            Self::Integer => parse_integer(arg),
            Self::Float => parse_float(arg),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const UNBOUNDED: Self = Self {
        min: -f64::MAX,
        max: f64::MAX,
    };

    pub const NON_NEGATIVE: Self = Self {
        min: 0.0,
        max: f64::MAX,
    };

    pub const PERCENT: Self = Self {
        min: 0.0,
        max: 100.0,
    };

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    String(Cardinality),
    Boolean(Cardinality),
    // i 番目の引数は conversions[i % conversions.len()] で変換する
    // (baseline は float, int の順)
    Numeric {
        conversions: &'static [Conversion],
        range: Range,
        cardinality: Cardinality,
    },
    // cuts: 引数ごとに , 区切りの整数列
    NestedNumericList,
    // 未登録のプロパティ
    Passthrough,
}

impl Validator {
    pub const fn integer(range: Range, cardinality: Cardinality) -> Self {
        Self::Numeric {
            conversions: &[Conversion::Integer],
            range,
            cardinality,
        }
    }

    pub const fn float(range: Range, cardinality: Cardinality) -> Self {
        Self::Numeric {
            conversions: &[Conversion::Float],
            range,
            cardinality,
        }
    }

    pub fn validate(&self, config: &ParserConfig, args: Vec<String>) -> Result<PropertyValue> {
        match self {
            Self::String(cardinality) => Ok(check_cardinality(config, cardinality, args)?
                .into_value(PropertyValue::String, PropertyValue::Strings)),

            Self::Boolean(cardinality) => {
                // 空でない文字列はすべて true ("0" や "false" も)
                let values = args.iter().map(|arg| !arg.is_empty()).collect();
                Ok(check_cardinality(config, cardinality, values)?
                    .into_value(PropertyValue::Boolean, PropertyValue::Booleans))
            }

            Self::Numeric {
                conversions,
                range,
                cardinality,
            } => {
                let values = convert_numbers(config, conversions, range, &args)?;
                Ok(check_cardinality(config, cardinality, values)?
                    .into_value(PropertyValue::Number, PropertyValue::Numbers))
            }

            Self::NestedNumericList => {
                let lists = args
                    .iter()
                    .map(|arg| {
                        let sub_args: Vec<_> = arg.split(',').collect();
                        convert_numbers(config, &[Conversion::Integer], &Range::UNBOUNDED, &sub_args)
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(PropertyValue::NumberLists(lists))
            }

            Self::Passthrough => Ok(PropertyValue::Strings(args)),
        }
    }
}

fn convert_numbers<S: AsRef<str>>(
    config: &ParserConfig,
    conversions: &[Conversion],
    range: &Range,
    args: &[S],
) -> Result<Vec<Number>> {
    args.iter()
        .zip(conversions.iter().cycle())
        .map(|(arg, conversion)| {
            let arg = arg.as_ref();
            let value = conversion.convert(arg);

            if !config.allow_invalid_numbers {
                if value.is_nan() {
                    return Err(TitleError::NotANumber {
                        arg: arg.to_owned(),
                    });
                }
                if !range.contains(value.as_f64()) {
                    return Err(TitleError::OutOfRange {
                        arg: arg.to_owned(),
                        min: range.min,
                        max: range.max,
                    });
                }
            }

            Ok(value)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    validators: HashMap<String, Validator>,
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            validators: HashMap::new(),
        }
    }

    // hOCR 1.2 と OCR エンジン (x_*) のプロパティ
    pub fn standard() -> Self {
        use Validator as V;

        const BASELINE: &[Conversion] = &[Conversion::Float, Conversion::Integer];

        let mut registry = Self::empty();
        registry
            .insert(
                "baseline",
                V::Numeric {
                    conversions: BASELINE,
                    range: Range::UNBOUNDED,
                    cardinality: Cardinality::ANY,
                },
            )
            .insert("bbox", V::integer(Range::NON_NEGATIVE, Cardinality::exact(4)))
            .insert("cflow", V::String(Cardinality::SCALAR))
            .insert("cuts", V::NestedNumericList)
            .insert("hardbreak", V::Boolean(Cardinality::SCALAR))
            .insert("image", V::String(Cardinality::SCALAR))
            .insert("imagemd5", V::String(Cardinality::SCALAR))
            .insert("lpageno", V::String(Cardinality::SCALAR))
            .insert("ppageno", V::integer(Range::NON_NEGATIVE, Cardinality::SCALAR))
            .insert("nlp", V::float(Range::PERCENT, Cardinality::ANY))
            .insert("order", V::integer(Range::NON_NEGATIVE, Cardinality::SCALAR))
            .insert(
                "poly",
                V::integer(Range::NON_NEGATIVE, Cardinality::at_least(4).multiple_of(2)),
            )
            .insert("scan_res", V::integer(Range::NON_NEGATIVE, Cardinality::ANY))
            .insert("textangle", V::float(Range::UNBOUNDED, Cardinality::SCALAR))
            .insert("x_bboxes", V::integer(Range::NON_NEGATIVE, Cardinality::ANY))
            .insert("x_font", V::String(Cardinality::SCALAR))
            .insert("x_fsize", V::integer(Range::NON_NEGATIVE, Cardinality::ANY))
            .insert("x_confs", V::float(Range::PERCENT, Cardinality::ANY))
            .insert("x_scanner", V::String(Cardinality::ANY))
            .insert("x_source", V::String(Cardinality::ANY))
            .insert("x_wconf", V::float(Range::PERCENT, Cardinality::ANY));
        registry
    }

    pub fn insert(&mut self, name: impl Into<String>, validator: Validator) -> &mut Self {
        self.validators.insert(name.into(), validator);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Validator> {
        self.validators.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
