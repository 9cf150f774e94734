use tracing::debug;

use crate::title::{
    config::ParserConfig,
    error::{Result, TitleError},
    tokenizer::{tokenize_title, TitleToken},
    validator::{Registry, Validator},
    value::PropertyMap,
};

const ENGINE_SPECIFIC_PREFIX: &str = "x_";

static PASSTHROUGH: Validator = Validator::Passthrough;

// parse ごとの状態は持たない
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
    registry: Registry,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self::with_registry(config, Registry::standard())
    }

    pub fn with_registry(config: ParserConfig, registry: Registry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn tokenize(&self, title: &str) -> Vec<TitleToken> {
        tokenize_title(title)
    }

    pub fn parse(&self, title: &str) -> Result<PropertyMap> {
        let tokens = tokenize_title(title);
        if self.config.debug {
            debug!(title, ?tokens, "tokenize");
        }

        let mut properties = PropertyMap::new();

        let mut tokens = tokens.as_slice();
        while let Some((head, rest)) = tokens.split_first() {
            // 先頭の ; もプロパティ名として扱う
            let name = head.as_str();

            let end_index = rest
                .iter()
                .position(TitleToken::is_separator)
                .unwrap_or(rest.len());
            let args = rest[..end_index]
                .iter()
                .map(|token| token.as_str().to_owned())
                .collect::<Vec<_>>();
            tokens = rest.get((end_index + 1)..).unwrap_or_default();

            let value = self
                .resolve(name, title)
                .and_then(|validator| validator.validate(&self.config, args));
            let value = match value {
                Ok(value) => value,
                Err(err) => {
                    if self.config.debug {
                        debug!(error = %err, "Parse error in '{}'", title);
                    }
                    return Err(err);
                }
            };

            properties.insert(name.to_owned(), value);
        }

        if self.config.debug {
            debug!(?properties, "propertyMap");
        }

        Ok(properties)
    }

    fn resolve(&self, name: &str, title: &str) -> Result<&Validator> {
        if let Some(validator) = self.registry.get(name) {
            return Ok(validator);
        }

        if self.config.allow_unknown
            || (self.config.allow_unknown_engine_specific
                && name.starts_with(ENGINE_SPECIFIC_PREFIX))
        {
            return Ok(&PASSTHROUGH);
        }

        Err(TitleError::UnknownProperty {
            name: name.to_owned(),
            title: title.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::title::{error::ErrorKind, validator::Cardinality, value::PropertyValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn last_occurrence_wins() {
        let parser = Parser::default();
        let properties = parser.parse("ppageno 1; ppageno 2").unwrap();
        assert_eq!(properties.len(), 1);
        assert_eq!(
            properties["ppageno"].as_number().and_then(|n| n.as_i64()),
            Some(2)
        );
    }

    #[test]
    fn repeated_and_trailing_separators_are_ignored() {
        let parser = Parser::default();
        let properties = parser.parse("image a.png ;; ; ppageno 2 ;").unwrap();
        assert_eq!(properties.len(), 2);
        assert_eq!(properties["image"], PropertyValue::String("a.png".to_owned()));
    }

    #[test]
    fn leading_separator_is_a_property_name() {
        assert_eq!(
            Parser::default().parse("; bbox 1 2 3 4").unwrap_err(),
            TitleError::UnknownProperty {
                name: ";".to_owned(),
                title: "; bbox 1 2 3 4".to_owned(),
            }
        );

        let parser = Parser::new(ParserConfig {
            allow_unknown: true,
            ..ParserConfig::default()
        });
        let properties = parser.parse(";; bbox 1 2 3 4").unwrap();
        assert_eq!(properties.len(), 1);
        assert_eq!(
            properties[";"].as_strings(),
            Some(&["bbox", "1", "2", "3", "4"].map(str::to_owned)[..])
        );
    }

    #[test]
    fn empty_title() {
        assert!(Parser::default().parse("").unwrap().is_empty());
        assert_eq!(
            Parser::default().parse("  ;  ").unwrap_err().kind(),
            ErrorKind::UnknownProperty
        );
    }

    #[test]
    fn exposes_config_and_registry() {
        let config = ParserConfig {
            allow_unknown: true,
            ..ParserConfig::default()
        };
        let parser = Parser::new(config.clone());
        assert_eq!(parser.config(), &config);
        assert_eq!(parser.registry(), &Registry::standard());
        assert!(Parser::with_registry(config, Registry::empty())
            .registry()
            .is_empty());
    }

    #[test]
    fn property_without_arguments() {
        let parser = Parser::default();
        assert_eq!(
            parser.parse("x_source").unwrap()["x_source"],
            PropertyValue::Strings(vec![])
        );
        assert_eq!(
            parser.parse("ppageno").unwrap_err(),
            TitleError::IncorrectLength {
                expected: 1,
                actual: 0
            }
        );
    }

    #[test]
    fn unknown_engine_specific_can_be_disabled() {
        let parser = Parser::new(ParserConfig {
            allow_unknown_engine_specific: false,
            ..ParserConfig::default()
        });
        let err = parser.parse("x_foo 1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownProperty);
        assert_eq!(err.to_string(), "Unknown property 'x_foo' in 'x_foo 1'");
    }

    #[test]
    fn registered_validator_wins_over_passthrough() {
        let parser = Parser::new(ParserConfig {
            allow_unknown: true,
            ..ParserConfig::default()
        });
        assert_eq!(
            parser.parse("x_wconf 101").unwrap_err().kind(),
            ErrorKind::InvalidNumber
        );
    }

    #[test]
    fn custom_registry() {
        let mut registry = Registry::empty();
        registry.insert("x_lang", Validator::String(Cardinality::SCALAR));
        let parser = Parser::with_registry(
            ParserConfig {
                allow_unknown_engine_specific: false,
                ..ParserConfig::default()
            },
            registry,
        );

        assert_eq!(
            parser.parse("x_lang eng").unwrap()["x_lang"],
            PropertyValue::String("eng".to_owned())
        );
        assert_eq!(
            parser.parse("bbox 0 0 1 1").unwrap_err().kind(),
            ErrorKind::UnknownProperty
        );
    }
}
