pub mod token;

use anyhow::{Result, anyhow};
use colored::Colorize;
use lazy_static::lazy_static;
use regex::Regex;

use crate::lexer::token::{Token, TokenKind, lookup_reserved};

type TokenHandler = Box<dyn Fn(&str) -> Option<Token> + Send + Sync>;

#[derive(Debug, Clone)]
pub struct Lexer {
    input: String,
    input_len: usize,
    pos: usize,
}

impl Lexer {
    pub fn new(input: String) -> Self {
        Self {
            input_len: input.len(),
            input,
            pos: 0,
        }
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.input_len
    }

    fn remaining_input(&self) -> &str {
        &self.input[self.pos..]
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens: Vec<Token> = vec![];

        while !self.at_eof() {
            let remaining = self.remaining_input();
            let mut matched = false;
            let mut match_len = 0;

            for handler in REGEXES.iter() {
                if let Some(mat) = handler.regex.find(remaining)
                    && mat.start() == 0
                {
                    let matched_text = mat.as_str();
                    if let Some(token) = (handler.handler)(matched_text) {
                        tokens.push(token);
                    }
                    match_len = matched_text.len();
                    matched = true;
                    break;
                }
            }

            if !matched {
                let next_char = remaining.chars().next().unwrap_or('\0');
                return Err(anyhow!(
                    "{}",
                    format!(
                        "Unexpected character at position {}: '{}'",
                        self.pos, next_char,
                    )
                    .red()
                    .bold()
                ));
            }

            self.pos += match_len;
        }

        tokens.push(Token::new(TokenKind::Eof, ""));
        Ok(tokens)
    }
}

pub fn tokenize(input: String) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(input);
    lexer.tokenize()
}

fn default_handler(kind: TokenKind, value: &'static str) -> TokenHandler {
    Box::new(move |_| Some(Token::new(kind, value)))
}

fn skip_handler() -> TokenHandler {
    Box::new(|_| None)
}

fn literal_handler(kind: TokenKind) -> TokenHandler {
    Box::new(move |val| Some(Token::new(kind, val)))
}

fn identifier_handler() -> TokenHandler {
    Box::new(|val| {
        if let Some(kind) = lookup_reserved(val) {
            Some(Token::new(kind, val))
        } else {
            Some(Token::new(TokenKind::Identifier, val))
        }
    })
}

struct RegexHandler {
    regex: Regex,
    handler: TokenHandler,
}

impl RegexHandler {
    fn new(regex: Regex, handler: TokenHandler) -> Self {
        Self { regex, handler }
    }
}

macro_rules! regex_handler {
    // For special handlers like skip_handler(), identifier_handler()
    ($pattern:expr, $handler:expr) => {
        RegexHandler::new(Regex::new($pattern).unwrap(), $handler)
    };

    // For literal handlers with a TokenKind
    ($pattern:expr, literal $kind:expr) => {
        RegexHandler::new(Regex::new($pattern).unwrap(), literal_handler($kind))
    };

    // For default handlers with TokenKind and literal value
    ($pattern:expr, $kind:expr, $value:expr) => {
        RegexHandler::new(
            Regex::new($pattern).unwrap(),
            default_handler($kind, $value),
        )
    };
}

use TokenKind as T;
lazy_static! {
    static ref REGEXES: Vec<RegexHandler> = vec![
        // Whitespace (check first to skip efficiently)
        regex_handler!(r"^\s+", skip_handler()),

        // Multi-character tokens (must come before single chars)
        regex_handler!(r"^\.\.\.", T::Ellipsis, "..."),

        // Numbers
        regex_handler!(r"^[0-9]+", literal T::Number),

        // Identifiers and keywords
        regex_handler!(r"^[a-zA-Z_][a-zA-Z0-9_]*", identifier_handler()),

        // Single character tokens
        regex_handler!(r"^\*", T::Star, "*"),
        regex_handler!(r"^\[", T::OpenBracket, "["),
        regex_handler!(r"^\]", T::CloseBracket, "]"),
        regex_handler!(r"^\(", T::OpenParen, "("),
        regex_handler!(r"^\)", T::CloseParen, ")"),
        regex_handler!(r"^,", T::Comma, ","),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input.to_string())
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_pointer_expr() {
        assert_eq!(
            kinds("*const [5]int"),
            vec![
                T::Star,
                T::Const,
                T::OpenBracket,
                T::Number,
                T::CloseBracket,
                T::Identifier,
                T::Eof
            ]
        );
    }

    #[test]
    fn test_tokenize_function_expr() {
        assert_eq!(
            kinds("fn(int, ...) void"),
            vec![
                T::Fn,
                T::OpenParen,
                T::Identifier,
                T::Comma,
                T::Ellipsis,
                T::CloseParen,
                T::Void,
                T::Eof
            ]
        );
    }

    #[test]
    fn test_tokenize_rejects_stray_character() {
        assert!(tokenize("int $".to_string()).is_err());
    }
}
