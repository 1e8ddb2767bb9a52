use inapp_content::{Content, ParseResult};
use serde::Serialize;

/// One output line describing the outcome for a payload
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub source: String,
    pub index: usize,
    #[serde(flatten)]
    pub outcome: Outcome<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome<'a> {
    Success { content: &'a Content },
    Failure { reason: String },
}

impl<'a> Report<'a> {
    pub fn new(source: String, index: usize, result: &'a ParseResult) -> Self {
        let outcome = match result {
            Ok(content) => Outcome::Success { content },
            Err(e) => Outcome::Failure { reason: e.reason() },
        };
        Self {
            source,
            index,
            outcome,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
