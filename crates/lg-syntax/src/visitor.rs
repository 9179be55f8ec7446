//! Depth-first traversal over the syntax tree.
//!
//! Each hook returns whether to descend into the node's children.

use crate::ast::{Block, Expr, Function, Stat, TableItem};

/// Hooks borrow nodes for `'ast`, so visitors may keep references into the tree.
pub trait Visitor<'ast> {
    fn visit_stat(&mut self, _stat: &'ast Stat) -> bool {
        true
    }

    fn visit_expr(&mut self, _expr: &'ast Expr) -> bool {
        true
    }
}

impl Block {
    pub fn visit<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        walk_block(visitor, self);
    }
}

pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, block: &'ast Block) {
    for stat in &block.stats {
        walk_stat(visitor, stat);
    }
}

pub fn walk_stat<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stat: &'ast Stat) {
    if !visitor.visit_stat(stat) {
        return;
    }

    match stat {
        Stat::Block(block) => walk_block(visitor, block),
        Stat::If(stat) => {
            for (condition, block) in &stat.branches {
                walk_expr(visitor, condition);
                walk_block(visitor, block);
            }
            if let Some(block) = &stat.else_block {
                walk_block(visitor, block);
            }
        }
        Stat::While { condition, body } => {
            walk_expr(visitor, condition);
            walk_block(visitor, body);
        }
        Stat::Repeat { body, condition } => {
            walk_block(visitor, body);
            walk_expr(visitor, condition);
        }
        Stat::NumericFor {
            from,
            to,
            step,
            body,
            ..
        } => {
            walk_expr(visitor, from);
            walk_expr(visitor, to);
            if let Some(step) = step {
                walk_expr(visitor, step);
            }
            walk_block(visitor, body);
        }
        Stat::GenericFor { values, body, .. } => {
            for value in values {
                walk_expr(visitor, value);
            }
            walk_block(visitor, body);
        }
        Stat::Local(stat) => {
            for value in &stat.values {
                walk_expr(visitor, value);
            }
        }
        Stat::LocalFunction { func, .. } => walk_function(visitor, func),
        Stat::Function(stat) => {
            walk_expr(visitor, &stat.name);
            walk_function(visitor, &stat.func);
        }
        Stat::Assign { targets, values } => {
            for expr in targets.iter().chain(values) {
                walk_expr(visitor, expr);
            }
        }
        Stat::CompoundAssign { target, value, .. } => {
            walk_expr(visitor, target);
            walk_expr(visitor, value);
        }
        Stat::Expr(expr) => walk_expr(visitor, expr),
        Stat::Return(stat) => {
            for expr in &stat.list {
                walk_expr(visitor, expr);
            }
        }
        Stat::Break | Stat::Continue | Stat::TypeAlias { .. } => {}
    }
}

pub fn walk_function<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, func: &'ast Function) {
    walk_block(visitor, &func.body);
}

pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    if !visitor.visit_expr(expr) {
        return;
    }

    match expr {
        Expr::Nil
        | Expr::Bool(_)
        | Expr::Number(_)
        | Expr::String(_)
        | Expr::InterpString(_)
        | Expr::Varargs
        | Expr::Local(_)
        | Expr::Global(_) => {}
        Expr::Group(inner) => walk_expr(visitor, inner),
        Expr::IndexName(index) => walk_expr(visitor, &index.expr),
        Expr::Index { expr, key } => {
            walk_expr(visitor, expr);
            walk_expr(visitor, key);
        }
        Expr::Call(call) => {
            walk_expr(visitor, &call.func);
            for arg in &call.args {
                walk_expr(visitor, arg);
            }
        }
        Expr::Function(func) => walk_function(visitor, func),
        Expr::Table(items) => {
            for item in items {
                match item {
                    TableItem::Positional(value) | TableItem::Named { value, .. } => {
                        walk_expr(visitor, value)
                    }
                    TableItem::Keyed { key, value } => {
                        walk_expr(visitor, key);
                        walk_expr(visitor, value);
                    }
                }
            }
        }
        Expr::Unary { operand, .. } => walk_expr(visitor, operand),
        Expr::Binary { lhs, rhs, .. } => {
            walk_expr(visitor, lhs);
            walk_expr(visitor, rhs);
        }
        Expr::TypeAssertion { expr, .. } => walk_expr(visitor, expr),
        Expr::IfElse {
            branches,
            else_expr,
        } => {
            for (condition, value) in branches {
                walk_expr(visitor, condition);
                walk_expr(visitor, value);
            }
            walk_expr(visitor, else_expr);
        }
    }
}
