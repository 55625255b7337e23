pub mod token_strategy;
pub mod tokenizer;
