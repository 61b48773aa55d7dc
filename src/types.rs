//! Common types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages understood by the conversion service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    #[serde(rename = "C++")]
    Cpp,
    C,
    JavaScript,
    Python,
    Java,
}

impl Language {
    /// Order used by the source selector
    pub const SOURCE_ORDER: [Language; 5] = [
        Language::Cpp,
        Language::C,
        Language::JavaScript,
        Language::Python,
        Language::Java,
    ];

    /// Order used by the target selector
    pub const TARGET_ORDER: [Language; 5] = [
        Language::Cpp,
        Language::C,
        Language::Python,
        Language::JavaScript,
        Language::Java,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::C => "C",
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Java => "Java",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two remote operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Convert,
    Debug,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Convert => "convert",
            Action::Debug => "debug",
        }
    }
}

/// Result of the latest request for an action, as shown to the user
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActionOutcome {
    #[default]
    Idle,
    Pending,
    Success,
    Failed(String),
}

/// Body of POST /code/convert
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest<'a> {
    pub code: &'a str,
    pub from_language: Language,
    pub to_language: Language,
}

/// Body of POST /code/debug
#[derive(Debug, Serialize)]
pub struct DebugRequest<'a> {
    pub code: &'a str,
    pub language: Language,
}

/// Reply shared by both endpoints
#[derive(Debug, Deserialize)]
pub struct ServiceReply {
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_names_match_wire_format() {
        for lang in Language::SOURCE_ORDER {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.name()));
        }
        assert_eq!(Language::Cpp.to_string(), "C++");
    }

    #[test]
    fn selectors_offer_the_same_languages() {
        for lang in Language::SOURCE_ORDER {
            assert!(Language::TARGET_ORDER.contains(&lang));
        }
    }

    #[test]
    fn convert_request_uses_camel_case_keys() {
        let body = ConvertRequest {
            code: "print('hi')",
            from_language: Language::Python,
            to_language: Language::JavaScript,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "code": "print('hi')",
                "fromLanguage": "Python",
                "toLanguage": "JavaScript",
            })
        );
    }

    #[test]
    fn debug_request_carries_single_language() {
        let body = DebugRequest { code: "int x", language: Language::C };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "code": "int x", "language": "C" })
        );
    }
}
