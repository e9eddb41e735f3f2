use logos::{Lexer as LogosLexer, Logos};

use super::Token;
use crate::ScriptError;

pub struct Lexer<'a> {
    inner: LogosLexer<'a, Token>,
    pub input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
            input,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, ScriptError> {
        match self.inner.next() {
            Some(Ok(token)) => Ok(Some(token)),
            Some(Err(_)) => {
                let span = self.inner.span();
                Err(ScriptError::UnexpectedToken {
                    offset: span.start,
                    text: self.input[span.start..span.end].to_string(),
                })
            }
            None => Ok(None),
        }
    }

    /// Byte offset of the last token
    pub fn offset(&self) -> usize {
        self.inner.span().start
    }

    pub fn collect_all(mut self) -> Result<Vec<Token>, ScriptError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}
