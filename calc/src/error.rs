//! Top-level error type for one line of calculator input.
//!
//! Purely a wrapper: the tokenizer and parser already carry precise error
//! kinds, this just gives `main` a single type to bubble up with `?`.

use thiserror::Error;

use crate::parser::ParseError;
use crate::tokenizer::TokenizeError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
