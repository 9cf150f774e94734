use serde::Deserialize;

// {"allowUnknown": true, "debug": true} のような camelCase の設定から読める
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserConfig {
    pub debug: bool,
    pub allow_unknown: bool,
    pub allow_unknown_engine_specific: bool, // x_*
    pub allow_invalid_numbers: bool,
    pub disable_cardinality_checks: bool, // collapse もしなくなる
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            debug: false,
            allow_unknown: false,
            allow_unknown_engine_specific: true,
            allow_invalid_numbers: false,
            disable_cardinality_checks: false,
        }
    }
}

impl ParserConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
