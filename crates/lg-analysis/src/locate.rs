use lg_syntax::{Block, Expr, LocalId, LocalRef, Stat, StatReturn, Visitor};

use crate::error::AnalysisError;

/// The first `return` in `block`, searching nested `do` blocks depth-first.
fn first_return(block: &Block) -> Option<&StatReturn> {
    block.stats.iter().find_map(|stat| match stat {
        Stat::Block(inner) => first_return(inner),
        Stat::Return(ret) => Some(ret),
        _ => None,
    })
}

/// The local the script's root block returns.
///
/// The first reachable `return` decides: an empty return or one whose first
/// value is anything but a bare local is a failure, not a reason to keep looking.
pub fn find_returned_local(root: &Block) -> Result<&LocalRef, AnalysisError> {
    let ret = first_return(root).ok_or_else(|| {
        tracing::debug!("no return statement in root block");
        AnalysisError::NoReturnedLocal
    })?;

    match ret.list.first().and_then(Expr::as_local) {
        Some(local) => Ok(local),
        None => {
            tracing::debug!(
                values = ret.list.len(),
                line = ret.location.begin.line,
                "root return does not return a local"
            );
            Err(AnalysisError::NoReturnedLocal)
        }
    }
}

struct DefinitionFinder<'ast> {
    target: LocalId,
    found: Option<&'ast Expr>,
}

impl<'ast> Visitor<'ast> for DefinitionFinder<'ast> {
    fn visit_stat(&mut self, stat: &'ast Stat) -> bool {
        if self.found.is_some() {
            return false;
        }
        match stat {
            Stat::Local(local) => {
                self.found = local
                    .vars
                    .iter()
                    .zip(&local.values)
                    .find(|(var, _)| var.id == self.target)
                    .map(|(_, value)| value);
                false
            }
            _ => true,
        }
    }

    fn visit_expr(&mut self, _expr: &'ast Expr) -> bool {
        self.found.is_none()
    }
}

/// The value assigned to `local` by its `local` declaration.
///
/// Matching is by identity, so a shadowing declaration of the same name is
/// never confused with the target. Values of `local` statements are not searched.
pub fn find_local_definition<'ast>(
    root: &'ast Block,
    local: &LocalRef,
) -> Result<&'ast Expr, AnalysisError> {
    let mut finder = DefinitionFinder {
        target: local.id,
        found: None,
    };
    root.visit(&mut finder);

    finder.found.ok_or_else(|| {
        tracing::debug!(name = %local.name, id = %local.id, "returned local is never assigned by a declaration");
        AnalysisError::NoLocalDefinition {
            name: local.name.clone(),
        }
    })
}
