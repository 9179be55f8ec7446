//! Static analysis of Luau class scripts.
//!
//! A script is expected to build a definition, attach an implementation
//! table through a registration call, and return the definition:
//!
//! ```lua
//! local Def = Class.New("Node"):RegisterImpl(Impl)
//! function Impl.Foo(self: Def, x: integer): string ... end
//! return Def
//! ```
//!
//! [`analyze`] recovers the two locals, the method table and the comments;
//! [`SignatureMapper`] turns a method's annotations into host types.

mod comments;
mod config;
mod error;
mod harvest;
mod locate;
mod signature;

use std::collections::HashMap;

use lg_syntax::{LocalId, ParsedScript, StatFunction};

pub use comments::{extract_comments, CommentKind, SourceComment};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, SignatureError};
pub use harvest::{find_registration, harvest_methods};
pub use locate::{find_local_definition, find_returned_local};
pub use signature::SignatureMapper;

/// What the analysis recovered from one script. Method nodes borrow the
/// parsed tree.
#[derive(Debug, Clone)]
pub struct ScriptAnalysis<'a> {
    /// The local the script returns.
    pub definition: LocalId,
    /// The local passed to the registration call.
    pub implementation: LocalId,
    pub methods: HashMap<String, &'a StatFunction>,
    pub comments: Vec<SourceComment>,
}

impl<'a> ScriptAnalysis<'a> {
    pub fn method(&self, name: &str) -> Option<&'a StatFunction> {
        self.methods.get(name).copied()
    }

    /// Method names, sorted.
    pub fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The documentation for a declaration starting on `line` (0-based).
    ///
    /// Either the run of whole-line comments directly above it, or a block
    /// comment ending on the line above. Markers and one leading space are
    /// stripped from each line.
    pub fn doc_comment(&self, line: u32) -> Option<String> {
        let above = line.checked_sub(1)?;
        let idx = self
            .comments
            .iter()
            .rposition(|c| c.location.end.line == above && c.kind != CommentKind::LineTrailing)?;

        if self.comments[idx].kind == CommentKind::Block {
            return Some(self.comments[idx].body().to_string());
        }

        let mut first = idx;
        while first > 0 {
            let prev = &self.comments[first - 1];
            if prev.kind != CommentKind::LineExclusive
                || prev.location.begin.line + 1 != self.comments[first].location.begin.line
            {
                break;
            }
            first -= 1;
        }

        let lines: Vec<&str> = self.comments[first..=idx]
            .iter()
            .map(SourceComment::body)
            .collect();
        Some(lines.join("\n"))
    }

    /// [`doc_comment`](Self::doc_comment) of a harvested method.
    pub fn method_doc(&self, name: &str) -> Option<String> {
        self.method(name)
            .and_then(|stat| self.doc_comment(stat.location.begin.line))
    }
}

/// Analyze a parsed script.
///
/// Fails as a whole when the script does not return a local, the local has
/// no defining declaration, or the definition never registers a local
/// implementation table.
#[tracing::instrument(skip_all, fields(statements = script.root.stats.len()))]
pub fn analyze<'a>(
    source: &str,
    script: &'a ParsedScript,
    config: &AnalysisConfig,
) -> Result<ScriptAnalysis<'a>, AnalysisError> {
    let comments = extract_comments(source, &script.comments);

    let definition = find_returned_local(&script.root)?;
    let value = find_local_definition(&script.root, definition)?;

    let implementation = find_registration(value, &config.registration_method).ok_or_else(|| {
        tracing::debug!(
            definition = %definition.name,
            method = %config.registration_method,
            "no registration call in definition chain"
        );
        AnalysisError::NoRegistrationCall {
            name: definition.name.clone(),
            method: config.registration_method.clone(),
        }
    })?;

    let methods = harvest_methods(&script.root, implementation.id);

    tracing::debug!(
        definition = %definition.name,
        implementation = %implementation.name,
        methods = methods.len(),
        comments = comments.len(),
        "script analyzed"
    );

    Ok(ScriptAnalysis {
        definition: definition.id,
        implementation: implementation.id,
        methods,
        comments,
    })
}
