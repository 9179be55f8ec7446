//! Luau front-end used by the script analyzer.
//!
//! Parsing is done by `full_moon`; its tree is lowered into a smaller one
//! with locals already resolved to [`LocalId`]s, alongside the raw comment
//! list the tree does not carry.

pub mod ast;
mod error;
mod location;
mod lower;
mod parser;
mod tokens;
pub mod visitor;

pub use ast::{
    Block, Expr, ExprCall, ExprIndexName, Function, IndexOp, Local, LocalId, LocalRef, Stat,
    StatFunction, StatLocal, StatReturn, Type, TypeReference,
};
pub use error::SyntaxError;
pub use location::{Location, Position};
pub use parser::{parse, ParsedScript};
pub use tokens::{RawComment, RawCommentKind, MAX_NESTING};
pub use visitor::Visitor;
