use std::collections::HashMap;

use crate::token::tokenizer::{quoted_tokens, whitespace_tokens};

pub trait TokenizeStrategy {
    fn tokenize(&self, raw: &str) -> Vec<String>;
}

pub struct WhitespaceTokens;

impl TokenizeStrategy for WhitespaceTokens {
    fn tokenize(&self, raw: &str) -> Vec<String> {
        whitespace_tokens(raw)
    }
}

pub struct QuoteAwareTokens;

impl TokenizeStrategy for QuoteAwareTokens {
    fn tokenize(&self, raw: &str) -> Vec<String> {
        quoted_tokens(raw)
    }
}

/// Picks the tokenizing rule per command: commands that take freeform text
/// honor quoted runs, everything else splits on whitespace.
pub struct CommandTokenizer {
    default: WhitespaceTokens,
    overrides: HashMap<String, Box<dyn TokenizeStrategy>>,
}

impl CommandTokenizer {
    pub fn new() -> Self {
        let mut overrides: HashMap<String, Box<dyn TokenizeStrategy>> = HashMap::new();
        overrides.insert("add".to_string(), Box::new(QuoteAwareTokens));
        overrides.insert("update".to_string(), Box::new(QuoteAwareTokens));
        Self {
            default: WhitespaceTokens,
            overrides,
        }
    }

    pub fn tokenize(&self, command: &str, raw: &str) -> Vec<String> {
        let key = command.trim().to_ascii_lowercase();
        if let Some(strategy) = self.overrides.get(&key) {
            strategy.tokenize(raw)
        } else {
            self.default.tokenize(raw)
        }
    }
}
