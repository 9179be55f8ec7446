//! One pass over the token stream, ahead of parsing: collects comments,
//! which the syntax tree does not carry, and bounds how deep the parser
//! will have to recurse.

use full_moon::ast::LuaVersion;
use full_moon::tokenizer::{Lexer, LexerResult, Token, TokenType, TokenizerErrorType};
use serde::{Deserialize, Serialize};

use crate::error::SyntaxError;
use crate::location::{LineIndex, Location};

/// Deepest nesting of brackets, blocks and operator chains accepted.
pub const MAX_NESTING: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RawCommentKind {
    /// `-- ...` up to the end of the line.
    Line,
    /// `--[[ ... ]]` or `--[==[ ... ]==]`.
    Block,
    /// A bracketed comment that is never closed.
    Broken,
}

/// A comment as the tokenizer saw it; only kind and span, no text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawComment {
    pub kind: RawCommentKind,
    pub location: Location,
}

pub(crate) fn scan(source: &str, lines: &LineIndex) -> Result<Vec<RawComment>, SyntaxError> {
    let (tokens, errors) = match Lexer::new(source, LuaVersion::new()).collect() {
        LexerResult::Ok(tokens) => (tokens, Vec::new()),
        LexerResult::Recovered(tokens, errors) => (tokens, errors),
        LexerResult::Fatal(errors) => {
            let position = errors
                .first()
                .map(|error| lines.position(error.position()))
                .unwrap_or_default();
            let message = errors
                .first()
                .map(ToString::to_string)
                .unwrap_or_else(|| "unreadable source".to_string());
            return Err(SyntaxError::Parse { message, position });
        }
    };

    check_nesting(&tokens, lines)?;

    let mut comments: Vec<RawComment> = tokens
        .iter()
        .filter_map(|token| comment(token, source, lines))
        .collect();

    // An unclosed comment may come back as an error only, without a token.
    for error in errors
        .iter()
        .filter(|error| matches!(error.error(), TokenizerErrorType::UnclosedComment))
    {
        let begin = lines.position(error.position());
        let covered = comments
            .iter()
            .any(|c| c.location.begin <= begin && begin <= c.location.end);
        if !covered {
            comments.push(RawComment {
                kind: RawCommentKind::Broken,
                location: Location::new(begin, lines.end_of(source)),
            });
        }
    }

    comments.sort_by_key(|c| c.location.begin);
    Ok(comments)
}

fn comment(token: &Token, source: &str, lines: &LineIndex) -> Option<RawComment> {
    let kind = match token.token_type() {
        TokenType::SingleLineComment { .. } => RawCommentKind::Line,
        TokenType::MultiLineComment { blocks, .. } => {
            let text = source
                .get(token.start_position().bytes()..token.end_position().bytes())
                .unwrap_or_default();
            let close = format!("]{}]", "=".repeat(*blocks));
            if text.len() >= 6 + 2 * blocks && text.ends_with(&close) {
                RawCommentKind::Block
            } else {
                RawCommentKind::Broken
            }
        }
        _ => return None,
    };

    Some(RawComment {
        kind,
        location: lines.location((token.start_position(), token.end_position())),
    })
}

fn check_nesting(tokens: &[Token], lines: &LineIndex) -> Result<(), SyntaxError> {
    let mut nesting = Nesting::new();

    for token in tokens.iter().filter(|token| !token.token_type().is_trivia()) {
        let depth = match token.token_type() {
            TokenType::Eof => break,
            TokenType::Symbol { symbol } => nesting.symbol(&symbol.to_string()),
            TokenType::StringLiteral { .. } => nesting.operand(true),
            _ => nesting.operand(false),
        };

        if depth > MAX_NESTING {
            tracing::debug!(depth, line = token.start_position().line(), "nesting limit hit");
            return Err(SyntaxError::RecursionLimit {
                limit: MAX_NESTING,
                position: lines.position(token.start_position()),
            });
        }
    }

    Ok(())
}

/// Running estimate of parser recursion: one level per open bracket or
/// block, plus the operators and suffixes chained inside each level.
struct Nesting {
    levels: Vec<usize>,
    depth: usize,
    after_operand: bool,
    /// An `if` here opens an if-expression, which has no `end`.
    expression_context: bool,
}

impl Nesting {
    fn new() -> Self {
        Self {
            levels: vec![0],
            depth: 0,
            after_operand: false,
            expression_context: false,
        }
    }

    fn operand(&mut self, string: bool) -> usize {
        if self.after_operand {
            if string {
                // f "text"
                self.bump();
            } else {
                // Two operands in a row: a new statement starts here.
                self.reset();
            }
        }
        self.after_operand = true;
        self.expression_context = false;
        self.depth
    }

    fn symbol(&mut self, symbol: &str) -> usize {
        let after_operand = std::mem::replace(&mut self.after_operand, false);
        let expression_context = std::mem::replace(&mut self.expression_context, false);

        match symbol {
            "(" | "[" | "{" => {
                if after_operand {
                    self.bump();
                }
                self.push();
                self.expression_context = true;
            }
            ")" | "]" | "}" => {
                self.pop();
                self.after_operand = true;
            }
            "function" | "do" | "repeat" => self.push(),
            "if" => {
                if !expression_context {
                    self.push();
                }
                self.expression_context = true;
            }
            "end" => self.pop(),
            "until" => {
                self.pop();
                self.expression_context = true;
            }
            "nil" | "true" | "false" | "..." => self.after_operand = true,
            "," | "=" | "return" | "in" | "while" | "+=" | "-=" | "*=" | "/=" | "//=" | "%="
            | "^=" | "..=" => {
                self.reset();
                self.expression_context = true;
            }
            ";" | "local" | "for" | "break" => self.reset(),
            "then" | "else" => {}
            "elseif" => self.expression_context = true,
            _ => {
                self.bump();
                self.expression_context = true;
            }
        }

        self.depth
    }

    fn push(&mut self) {
        self.levels.push(0);
        self.depth += 1;
    }

    fn pop(&mut self) {
        if self.levels.len() > 1 {
            if let Some(chained) = self.levels.pop() {
                self.depth -= 1 + chained;
            }
        }
    }

    fn bump(&mut self) {
        if let Some(chained) = self.levels.last_mut() {
            *chained += 1;
            self.depth += 1;
        }
    }

    fn reset(&mut self) {
        if let Some(chained) = self.levels.last_mut() {
            self.depth -= *chained;
            *chained = 0;
        }
    }
}
