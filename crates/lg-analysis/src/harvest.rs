use std::collections::HashMap;

use lg_syntax::{Block, Expr, IndexOp, LocalId, LocalRef, Stat, StatFunction, Visitor};

/// Walk the call chain of a definition expression, innermost link last, for
/// `<expr>:<method>(<local>, ...)` and return that local.
///
/// `Def:A():RegisterImpl(Impl):B()` finds `Impl`; links that are not calls
/// through a named index end the walk.
pub fn find_registration<'ast>(definition: &'ast Expr, method: &str) -> Option<&'ast LocalRef> {
    let mut link = definition.as_call();

    while let Some(call) = link {
        let index = call.func.as_index_name()?;

        if index.op == IndexOp::Colon && index.index == method {
            if let Some(local) = call.args.first().and_then(Expr::as_local) {
                return Some(local);
            }
        }

        link = index.expr.as_call();
    }

    None
}

struct MethodHarvester<'ast> {
    implementation: LocalId,
    methods: HashMap<String, &'ast StatFunction>,
}

impl<'ast> Visitor<'ast> for MethodHarvester<'ast> {
    fn visit_stat(&mut self, stat: &'ast Stat) -> bool {
        let Stat::Function(func) = stat else {
            return true;
        };

        if let Some(index) = func.name.as_index_name() {
            if index.expr.as_local().map(|local| local.id) == Some(self.implementation) {
                // Last definition of a name wins.
                if let Some(previous) = self.methods.insert(index.index.clone(), func) {
                    tracing::debug!(
                        method = %index.index,
                        previous_line = previous.location.begin.line,
                        line = func.location.begin.line,
                        "method redefined"
                    );
                }
            }
        }

        // Nested function statements are not part of the table.
        false
    }
}

/// Collect every `function Impl.name()` / `function Impl:name()` statement.
pub fn harvest_methods(root: &Block, implementation: LocalId) -> HashMap<String, &StatFunction> {
    let mut harvester = MethodHarvester {
        implementation,
        methods: HashMap::new(),
    };
    root.visit(&mut harvester);
    harvester.methods
}
