pub mod title;
pub mod utility;

pub use title::{
    tokenize_title, ErrorKind, Number, Parser, ParserConfig, PropertyMap, PropertyValue,
    TitleError, TitleToken,
};
