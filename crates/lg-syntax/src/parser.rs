use full_moon::ast::LuaVersion;
use full_moon::tokenizer::TokenizerErrorType;

use crate::ast::Block;
use crate::error::SyntaxError;
use crate::location::{LineIndex, Position};
use crate::lower::Lowerer;
use crate::tokens::{self, RawComment};

/// Output of parsing one script.
#[derive(Debug, Clone)]
pub struct ParsedScript {
    pub root: Block,
    /// Every comment in source order, including broken ones.
    pub comments: Vec<RawComment>,
}

/// Parse a Luau script into a resolved syntax tree.
///
/// Fails with [`SyntaxError::RecursionLimit`] before parsing when brackets,
/// blocks or operator chains nest deeper than [`tokens::MAX_NESTING`].
#[tracing::instrument(level = "trace", skip(source), fields(len = source.len()))]
pub fn parse(source: &str) -> Result<ParsedScript, SyntaxError> {
    let lines = LineIndex::new(source);
    let comments = tokens::scan(source, &lines)?;

    let result = full_moon::parse_fallible(source, LuaVersion::new());
    // An unclosed comment is already in `comments` as broken.
    if let Some(error) = result.errors().iter().find(|error| !is_unclosed_comment(error)) {
        return Err(SyntaxError::Parse {
            message: error.to_string(),
            position: error_position(error, &lines).unwrap_or_default(),
        });
    }

    let mut lowerer = Lowerer::new(source, &lines);
    let root = lowerer.chunk(result.ast().nodes())?;

    tracing::trace!(
        statements = root.stats.len(),
        comments = comments.len(),
        locals = lowerer.locals(),
        "script parsed"
    );

    Ok(ParsedScript { root, comments })
}

fn is_unclosed_comment(error: &full_moon::Error) -> bool {
    matches!(
        error,
        full_moon::Error::TokenizerError(error)
            if matches!(error.error(), TokenizerErrorType::UnclosedComment)
    )
}

fn error_position(error: &full_moon::Error, lines: &LineIndex) -> Option<Position> {
    #[allow(unreachable_patterns)]
    match error {
        full_moon::Error::AstError(error) => Some(lines.position(error.token().start_position())),
        full_moon::Error::TokenizerError(error) => Some(lines.position(error.position())),
        _ => None,
    }
}
