// hOCR の title 属性 (http://kba.github.io/hocr-spec/1.2/#propertyname) の解析
//
// "bbox 0 0 100 20; x_wconf 93" のように ; 区切りでプロパティ名と引数が並ぶ
// - 引数は空白区切り，' と " で囲めば空白を含められる
// - x_ で始まるものは OCR エンジン独自のプロパティ

pub mod config;
pub mod error;
pub mod parser;
pub mod tokenizer;
pub mod validator;
pub mod value;

pub use config::ParserConfig;
pub use error::{ErrorKind, Result, TitleError};
pub use parser::Parser;
pub use tokenizer::{tokenize_title, TitleToken};
pub use validator::{Cardinality, Conversion, Range, Registry, Validator};
pub use value::{Number, PropertyMap, PropertyValue};
