//! Lowers a `full_moon` tree into [`crate::ast`], resolving every local
//! reference to the declaration it binds to.

use full_moon::ast::{self as lua, punctuated::Punctuated};
use full_moon::ast::luau;
use full_moon::node::Node;
use full_moon::tokenizer::{Symbol, TokenReference, TokenType};

use crate::ast::{
    BinaryOp, Block, Expr, ExprCall, ExprIndexName, Function, IndexOp, Local, LocalId, LocalRef,
    Stat, StatFunction, StatIf, StatLocal, StatReturn, TableItem, Type, TypeReference,
    TypeTableProp, UnaryOp,
};
use crate::error::SyntaxError;
use crate::location::{LineIndex, Location};

type Lowered<T> = Result<T, SyntaxError>;

const MIXED_TYPES: &str = "mixing union and intersection types requires parentheses";

pub(crate) struct Lowerer<'a> {
    source: &'a str,
    lines: &'a LineIndex,
    /// Innermost scope last; later declarations shadow earlier ones.
    scopes: Vec<Vec<(String, LocalId)>>,
    next_local: u32,
}

impl<'a> Lowerer<'a> {
    pub(crate) fn new(source: &'a str, lines: &'a LineIndex) -> Self {
        Self {
            source,
            lines,
            scopes: vec![Vec::new()],
            next_local: 0,
        }
    }

    pub(crate) fn locals(&self) -> u32 {
        self.next_local
    }

    pub(crate) fn chunk(&mut self, block: &lua::Block) -> Lowered<Block> {
        self.block_stats(block)
    }

    // --- Scopes ---

    fn scoped<T>(&mut self, lower: impl FnOnce(&mut Self) -> Lowered<T>) -> Lowered<T> {
        self.scopes.push(Vec::new());
        let lowered = lower(self);
        self.scopes.pop();
        lowered
    }

    fn fresh_id(&mut self) -> LocalId {
        let id = LocalId(self.next_local);
        self.next_local += 1;
        id
    }

    /// A new local; not visible until [`bind`](Self::bind).
    fn declare(
        &mut self,
        name: &TokenReference,
        annotation: Option<&luau::TypeSpecifier>,
    ) -> Lowered<Local> {
        let annotation = annotation
            .map(|specifier| self.type_info(specifier.type_info()))
            .transpose()?;
        Ok(Local {
            id: self.fresh_id(),
            name: token_text(name),
            annotation,
            location: self.token_location(name),
        })
    }

    fn bind(&mut self, local: &Local) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.push((local.name.clone(), local.id));
        }
    }

    fn resolve(&self, name: &TokenReference) -> Expr {
        let name = token_text(name);
        let binding = self
            .scopes
            .iter()
            .rev()
            .flat_map(|scope| scope.iter().rev())
            .find(|(declared, _)| *declared == name);

        match binding {
            Some((_, id)) => Expr::Local(LocalRef { id: *id, name }),
            None => Expr::Global(name),
        }
    }

    // --- Locations ---

    fn location(&self, node: &impl Node) -> Location {
        node.range()
            .map(|range| self.lines.location(range))
            .unwrap_or_default()
    }

    fn token_location(&self, token: &TokenReference) -> Location {
        self.lines
            .location((token.token().start_position(), token.token().end_position()))
    }

    fn malformed(&self, node: &impl Node, reason: &str) -> SyntaxError {
        SyntaxError::Malformed {
            reason: reason.to_string(),
            position: self.location(node).begin,
        }
    }

    // --- Statements ---

    fn block(&mut self, block: &lua::Block) -> Lowered<Block> {
        self.scoped(|this| this.block_stats(block))
    }

    /// Lowers into the current scope.
    fn block_stats(&mut self, block: &lua::Block) -> Lowered<Block> {
        let mut stats = Vec::new();
        for stmt in block.stmts() {
            stats.push(self.stmt(stmt)?);
        }
        if let Some(last) = block.last_stmt() {
            stats.push(self.last_stmt(last)?);
        }
        Ok(Block { stats })
    }

    fn stmt(&mut self, stmt: &lua::Stmt) -> Lowered<Stat> {
        let stat = match stmt {
            lua::Stmt::Assignment(assignment) => Stat::Assign {
                targets: assignment
                    .variables()
                    .iter()
                    .map(|var| self.var(var))
                    .collect::<Lowered<_>>()?,
                values: self.expressions(assignment.expressions())?,
            },
            lua::Stmt::CompoundAssignment(compound) => {
                let operator = compound.compound_operator().token().token().to_string();
                let op = operator
                    .strip_suffix('=')
                    .and_then(binary_op)
                    .ok_or_else(|| self.malformed(compound, "unknown compound operator"))?;
                Stat::CompoundAssign {
                    target: self.var(compound.lhs())?,
                    op,
                    value: self.expr(compound.rhs())?,
                }
            }
            lua::Stmt::Do(block) => Stat::Block(self.block(block.block())?),
            lua::Stmt::FunctionCall(call) => Stat::Expr(self.call(call)?),
            lua::Stmt::FunctionDeclaration(declaration) => {
                Stat::Function(self.function_declaration(declaration)?)
            }
            lua::Stmt::GenericFor(generic) => {
                let values = self.expressions(generic.expressions())?;
                self.scoped(|this| {
                    let vars = generic
                        .names()
                        .iter()
                        .zip(generic.type_specifiers())
                        .map(|(name, specifier)| this.declare(name, specifier))
                        .collect::<Lowered<Vec<_>>>()?;
                    vars.iter().for_each(|var| this.bind(var));
                    let body = this.block(generic.block())?;
                    Ok(Stat::GenericFor { vars, values, body })
                })?
            }
            lua::Stmt::If(stmt) => {
                let mut branches = vec![(self.expr(stmt.condition())?, self.block(stmt.block())?)];
                for else_if in stmt.else_if().into_iter().flatten() {
                    branches.push((self.expr(else_if.condition())?, self.block(else_if.block())?));
                }
                let else_block = stmt.else_block().map(|block| self.block(block)).transpose()?;
                Stat::If(StatIf {
                    branches,
                    else_block,
                })
            }
            lua::Stmt::LocalAssignment(assignment) => {
                // Values are evaluated before the new names come into scope.
                let values = self.expressions(assignment.expressions())?;
                let vars = assignment
                    .names()
                    .iter()
                    .zip(assignment.type_specifiers())
                    .map(|(name, specifier)| self.declare(name, specifier))
                    .collect::<Lowered<Vec<_>>>()?;
                vars.iter().for_each(|var| self.bind(var));
                Stat::Local(StatLocal {
                    vars,
                    values,
                    location: self.location(assignment),
                })
            }
            lua::Stmt::LocalFunction(function) => {
                let local = self.declare(function.name(), None)?;
                self.bind(&local);
                let location = self.location(function);
                let func = self.function_body(function.body(), None, location)?;
                Stat::LocalFunction { local, func }
            }
            lua::Stmt::NumericFor(numeric) => {
                let from = self.expr(numeric.start())?;
                let to = self.expr(numeric.end())?;
                let step = numeric.step().map(|step| self.expr(step)).transpose()?;
                self.scoped(|this| {
                    let var = this.declare(numeric.index_variable(), numeric.type_specifier())?;
                    this.bind(&var);
                    let body = this.block(numeric.block())?;
                    Ok(Stat::NumericFor {
                        var,
                        from,
                        to,
                        step,
                        body,
                    })
                })?
            }
            // `until` still sees the body's locals.
            lua::Stmt::Repeat(repeat) => self.scoped(|this| {
                let body = this.block_stats(repeat.block())?;
                let condition = this.expr(repeat.until())?;
                Ok(Stat::Repeat { body, condition })
            })?,
            lua::Stmt::While(stmt) => Stat::While {
                condition: self.expr(stmt.condition())?,
                body: self.block(stmt.block())?,
            },
            lua::Stmt::TypeDeclaration(declaration) => self.type_declaration(declaration, false)?,
            lua::Stmt::ExportedTypeDeclaration(exported) => {
                self.type_declaration(exported.type_declaration(), true)?
            }
            other => return Err(self.malformed(other, "unsupported statement")),
        };
        Ok(stat)
    }

    fn last_stmt(&mut self, last: &lua::LastStmt) -> Lowered<Stat> {
        match last {
            lua::LastStmt::Break(_) => Ok(Stat::Break),
            lua::LastStmt::Continue(_) => Ok(Stat::Continue),
            lua::LastStmt::Return(ret) => Ok(Stat::Return(StatReturn {
                list: self.expressions(ret.returns())?,
                location: self.location(ret),
            })),
            other => Err(self.malformed(other, "unsupported statement")),
        }
    }

    fn type_declaration(
        &mut self,
        declaration: &luau::TypeDeclaration,
        exported: bool,
    ) -> Lowered<Stat> {
        Ok(Stat::TypeAlias {
            name: token_text(declaration.type_name()),
            exported,
            generics: declaration.generics().map(generic_names).unwrap_or_default(),
            ty: self.type_info(declaration.type_definition())?,
        })
    }

    fn function_declaration(
        &mut self,
        declaration: &lua::FunctionDeclaration,
    ) -> Lowered<StatFunction> {
        let name = declaration.name();
        let mut parts = name.names().iter();
        let Some(first) = parts.next() else {
            return Err(self.malformed(declaration, "function without a name"));
        };

        let mut target = self.resolve(first);
        for part in parts {
            target = Expr::IndexName(ExprIndexName {
                expr: Box::new(target),
                index: token_text(part),
                op: IndexOp::Dot,
            });
        }

        let self_param = match name.method_name() {
            Some(method) => {
                target = Expr::IndexName(ExprIndexName {
                    expr: Box::new(target),
                    index: token_text(method),
                    op: IndexOp::Colon,
                });
                Some(Local {
                    id: self.fresh_id(),
                    name: "self".to_string(),
                    annotation: None,
                    location: self.token_location(method),
                })
            }
            None => None,
        };

        let location = self.location(declaration);
        let func = self.function_body(declaration.body(), self_param, location)?;
        Ok(StatFunction {
            name: target,
            func,
            location,
        })
    }

    fn function_body(
        &mut self,
        body: &lua::FunctionBody,
        self_param: Option<Local>,
        location: Location,
    ) -> Lowered<Function> {
        self.scoped(|this| {
            if let Some(receiver) = &self_param {
                this.bind(receiver);
            }

            let mut params = Vec::new();
            let mut vararg = false;
            let mut vararg_annotation = None;
            for (parameter, specifier) in body.parameters().iter().zip(body.type_specifiers()) {
                match parameter {
                    lua::Parameter::Name(name) => params.push(this.declare(name, specifier)?),
                    lua::Parameter::Ellipsis(_) => {
                        vararg = true;
                        vararg_annotation = specifier
                            .map(|specifier| this.type_info(specifier.type_info()))
                            .transpose()?;
                    }
                    other => return Err(this.malformed(other, "unsupported parameter")),
                }
            }
            params.iter().for_each(|param| this.bind(param));

            let return_annotation = body
                .return_type()
                .map(|specifier| this.type_list(specifier.type_info()))
                .transpose()?;

            Ok(Function {
                generics: body.generics().map(generic_names).unwrap_or_default(),
                self_param,
                params,
                vararg,
                vararg_annotation,
                return_annotation,
                body: this.block_stats(body.block())?,
                location,
            })
        })
    }

    // --- Expressions ---

    fn expressions(&mut self, list: &Punctuated<lua::Expression>) -> Lowered<Vec<Expr>> {
        list.iter().map(|expression| self.expr(expression)).collect()
    }

    fn expr(&mut self, expression: &lua::Expression) -> Lowered<Expr> {
        let expr = match expression {
            lua::Expression::BinaryOperator { lhs, binop, rhs } => Expr::Binary {
                op: binary_op(&binop.token().token().to_string())
                    .ok_or_else(|| self.malformed(binop, "unsupported operator"))?,
                lhs: Box::new(self.expr(lhs)?),
                rhs: Box::new(self.expr(rhs)?),
            },
            lua::Expression::UnaryOperator { unop, expression } => Expr::Unary {
                op: unary_op(&unop.token().token().to_string())
                    .ok_or_else(|| self.malformed(unop, "unsupported operator"))?,
                operand: Box::new(self.expr(expression)?),
            },
            lua::Expression::Parentheses { expression, .. } => {
                Expr::Group(Box::new(self.expr(expression)?))
            }
            lua::Expression::Function(function) => {
                let location = self.location(expression);
                Expr::Function(Box::new(self.function_body(&function.1, None, location)?))
            }
            lua::Expression::FunctionCall(call) => self.call(call)?,
            lua::Expression::IfExpression(if_expression) => {
                let mut branches = vec![(
                    self.expr(if_expression.condition())?,
                    self.expr(if_expression.if_expression())?,
                )];
                for else_if in if_expression.else_if_expressions().into_iter().flatten() {
                    branches.push((self.expr(else_if.condition())?, self.expr(else_if.expression())?));
                }
                Expr::IfElse {
                    branches,
                    else_expr: Box::new(self.expr(if_expression.else_expression())?),
                }
            }
            lua::Expression::InterpolatedString(_) => {
                let text = self.source_text(expression);
                Expr::InterpString(text.trim_matches('`').to_string())
            }
            lua::Expression::Number(token) => Expr::Number(token_text(token)),
            lua::Expression::String(token) => Expr::String(string_contents(token)),
            lua::Expression::Symbol(token) => match token.token_type() {
                TokenType::Symbol {
                    symbol: Symbol::Nil,
                } => Expr::Nil,
                TokenType::Symbol {
                    symbol: Symbol::True,
                } => Expr::Bool(true),
                TokenType::Symbol {
                    symbol: Symbol::False,
                } => Expr::Bool(false),
                TokenType::Symbol {
                    symbol: Symbol::Ellipsis,
                } => Expr::Varargs,
                _ => return Err(self.malformed(expression, "unexpected symbol")),
            },
            lua::Expression::TableConstructor(table) => self.table(table)?,
            lua::Expression::TypeAssertion {
                expression,
                type_assertion,
            } => Expr::TypeAssertion {
                expr: Box::new(self.expr(expression)?),
                ty: self.type_info(type_assertion.cast_to())?,
            },
            lua::Expression::Var(var) => self.var(var)?,
            other => return Err(self.malformed(other, "unsupported expression")),
        };
        Ok(expr)
    }

    fn source_text(&self, node: &impl Node) -> &'a str {
        node.range()
            .and_then(|(begin, end)| self.source.get(begin.bytes()..end.bytes()))
            .unwrap_or_default()
    }

    fn table(&mut self, table: &lua::TableConstructor) -> Lowered<Expr> {
        let mut items = Vec::new();
        for field in table.fields().iter() {
            let item = match field {
                lua::Field::ExpressionKey { key, value, .. } => TableItem::Keyed {
                    key: self.expr(key)?,
                    value: self.expr(value)?,
                },
                lua::Field::NameKey { key, value, .. } => TableItem::Named {
                    name: token_text(key),
                    value: self.expr(value)?,
                },
                lua::Field::NoKey(value) => TableItem::Positional(self.expr(value)?),
                other => return Err(self.malformed(other, "unsupported table field")),
            };
            items.push(item);
        }
        Ok(Expr::Table(items))
    }

    fn var(&mut self, var: &lua::Var) -> Lowered<Expr> {
        match var {
            lua::Var::Name(name) => Ok(self.resolve(name)),
            lua::Var::Expression(expression) => {
                let base = self.prefix(expression.prefix())?;
                self.suffixes(base, expression.suffixes())
            }
            other => Err(self.malformed(other, "unsupported assignment target")),
        }
    }

    fn call(&mut self, call: &lua::FunctionCall) -> Lowered<Expr> {
        let base = self.prefix(call.prefix())?;
        self.suffixes(base, call.suffixes())
    }

    fn prefix(&mut self, prefix: &lua::Prefix) -> Lowered<Expr> {
        match prefix {
            lua::Prefix::Name(name) => Ok(self.resolve(name)),
            lua::Prefix::Expression(expression) => self.expr(expression),
            other => Err(self.malformed(other, "unsupported prefix")),
        }
    }

    /// Folds `.name`, `[key]`, `(args)` and `:name(args)` onto `expr`, left to right.
    fn suffixes<'s>(
        &mut self,
        mut expr: Expr,
        suffixes: impl Iterator<Item = &'s lua::Suffix>,
    ) -> Lowered<Expr> {
        for suffix in suffixes {
            expr = match suffix {
                lua::Suffix::Index(lua::Index::Dot { name, .. }) => {
                    Expr::IndexName(ExprIndexName {
                        expr: Box::new(expr),
                        index: token_text(name),
                        op: IndexOp::Dot,
                    })
                }
                lua::Suffix::Index(lua::Index::Brackets { expression, .. }) => Expr::Index {
                    expr: Box::new(expr),
                    key: Box::new(self.expr(expression)?),
                },
                lua::Suffix::Call(lua::Call::AnonymousCall(args)) => Expr::Call(ExprCall {
                    func: Box::new(expr),
                    args: self.arguments(args)?,
                    self_call: false,
                }),
                lua::Suffix::Call(lua::Call::MethodCall(method)) => Expr::Call(ExprCall {
                    func: Box::new(Expr::IndexName(ExprIndexName {
                        expr: Box::new(expr),
                        index: token_text(method.name()),
                        op: IndexOp::Colon,
                    })),
                    args: self.arguments(method.args())?,
                    self_call: true,
                }),
                other => return Err(self.malformed(other, "unsupported suffix")),
            };
        }
        Ok(expr)
    }

    fn arguments(&mut self, args: &lua::FunctionArgs) -> Lowered<Vec<Expr>> {
        match args {
            lua::FunctionArgs::Parentheses { arguments, .. } => self.expressions(arguments),
            lua::FunctionArgs::String(token) => Ok(vec![Expr::String(string_contents(token))]),
            lua::FunctionArgs::TableConstructor(table) => Ok(vec![self.table(table)?]),
            other => Err(self.malformed(other, "unsupported call arguments")),
        }
    }

    // --- Types ---

    /// A return annotation or callback result: `()` is empty, `(A, B)` has two entries.
    fn type_list(&mut self, info: &luau::TypeInfo) -> Lowered<Vec<Type>> {
        match info {
            luau::TypeInfo::Tuple { types, .. } => types.iter().map(|ty| self.type_info(ty)).collect(),
            other => Ok(vec![self.type_info(other)?]),
        }
    }

    fn type_info(&mut self, info: &luau::TypeInfo) -> Lowered<Type> {
        let ty = match info {
            luau::TypeInfo::Array { type_info, .. } => {
                let key = Type::Reference(TypeReference {
                    prefix: None,
                    name: "number".to_string(),
                    parameters: None,
                    location: self.location(info),
                });
                Type::Table {
                    props: Vec::new(),
                    indexer: Some(Box::new((key, self.type_info(type_info)?))),
                }
            }
            luau::TypeInfo::Basic(name) => Type::Reference(self.reference(None, name, None)),
            luau::TypeInfo::String(token) => Type::StringSingleton(string_contents(token)),
            luau::TypeInfo::Boolean(token) => Type::BoolSingleton(matches!(
                token.token_type(),
                TokenType::Symbol {
                    symbol: Symbol::True
                }
            )),
            luau::TypeInfo::Callback {
                generics,
                arguments,
                return_type,
                ..
            } => Type::Function {
                generics: generics.as_ref().map(generic_names).unwrap_or_default(),
                params: arguments
                    .iter()
                    .map(|argument| self.type_info(argument.type_info()))
                    .collect::<Lowered<_>>()?,
                returns: self.type_list(return_type)?,
            },
            luau::TypeInfo::Generic { base, generics, .. } => {
                let parameters = generics
                    .iter()
                    .map(|parameter| self.type_info(parameter))
                    .collect::<Lowered<Vec<_>>>()?;
                Type::Reference(self.reference(None, base, Some(parameters)))
            }
            luau::TypeInfo::GenericPack { name, .. } => Type::GenericPack(token_text(name)),
            luau::TypeInfo::Intersection(intersection) => {
                Type::Intersection(self.type_members(intersection.types(), false)?)
            }
            luau::TypeInfo::Module {
                module, type_info, ..
            } => {
                let prefix = Some(token_text(module));
                match type_info.as_ref() {
                    luau::IndexedTypeInfo::Basic(name) => {
                        Type::Reference(self.reference(prefix, name, None))
                    }
                    luau::IndexedTypeInfo::Generic { base, generics, .. } => {
                        let parameters = generics
                            .iter()
                            .map(|parameter| self.type_info(parameter))
                            .collect::<Lowered<Vec<_>>>()?;
                        Type::Reference(self.reference(prefix, base, Some(parameters)))
                    }
                    other => return Err(self.malformed(other, "unsupported module type")),
                }
            }
            luau::TypeInfo::Optional { base, question_mark } => {
                Type::Union(vec![self.type_info(base)?, self.nil_type(question_mark)])
            }
            luau::TypeInfo::Table { fields, .. } => {
                let mut props = Vec::new();
                let mut indexer = None;
                for field in fields.iter() {
                    let value = self.type_info(field.value())?;
                    match field.key() {
                        luau::TypeFieldKey::Name(name) => props.push(TypeTableProp {
                            name: token_text(name),
                            ty: value,
                        }),
                        luau::TypeFieldKey::IndexSignature { inner, .. } => {
                            indexer = Some(Box::new((self.type_info(inner)?, value)));
                        }
                        other => return Err(self.malformed(other, "unsupported table type key")),
                    }
                }
                Type::Table { props, indexer }
            }
            luau::TypeInfo::Tuple { types, .. } => {
                let mut inner = types.iter();
                match (inner.next(), inner.next()) {
                    (Some(single), None) => self.type_info(single)?,
                    _ => return Err(self.malformed(info, "type list where one type is expected")),
                }
            }
            luau::TypeInfo::Typeof { inner, .. } => Type::Typeof(Box::new(self.expr(inner)?)),
            luau::TypeInfo::Union(union) => Type::Union(self.type_members(union.types(), true)?),
            luau::TypeInfo::Variadic { type_info, .. } => {
                Type::Variadic(Box::new(self.type_info(type_info)?))
            }
            luau::TypeInfo::VariadicPack { name, .. } => {
                Type::Variadic(Box::new(Type::Reference(self.reference(None, name, None))))
            }
            other => return Err(self.malformed(other, "unsupported type")),
        };
        Ok(ty)
    }

    /// Members of `A | B | C` or `A & B & C`. `T?` inside a union adds `T` and `nil`.
    fn type_members(
        &mut self,
        types: &Punctuated<luau::TypeInfo>,
        union: bool,
    ) -> Lowered<Vec<Type>> {
        let mut members = Vec::new();
        for member in types.iter() {
            match member {
                luau::TypeInfo::Intersection(_) if union => {
                    return Err(self.malformed(member, MIXED_TYPES))
                }
                luau::TypeInfo::Union(_) if !union => return Err(self.malformed(member, MIXED_TYPES)),
                luau::TypeInfo::Optional { base, question_mark } if union => {
                    members.push(self.type_info(base)?);
                    members.push(self.nil_type(question_mark));
                }
                other => members.push(self.type_info(other)?),
            }
        }
        Ok(members)
    }

    fn reference(
        &self,
        prefix: Option<String>,
        name: &TokenReference,
        parameters: Option<Vec<Type>>,
    ) -> TypeReference {
        TypeReference {
            prefix,
            name: token_text(name),
            parameters,
            location: self.token_location(name),
        }
    }

    fn nil_type(&self, question_mark: &TokenReference) -> Type {
        Type::Reference(TypeReference {
            prefix: None,
            name: "nil".to_string(),
            parameters: None,
            location: self.token_location(question_mark),
        })
    }
}

/// The token itself, without surrounding trivia.
fn token_text(token: &TokenReference) -> String {
    token.token().to_string()
}

/// String contents between the quotes, escapes left as written.
fn string_contents(token: &TokenReference) -> String {
    match token.token_type() {
        TokenType::StringLiteral { literal, .. } => literal.as_str().to_string(),
        _ => token_text(token),
    }
}

fn generic_names(declaration: &luau::GenericDeclaration) -> Vec<String> {
    declaration
        .generics()
        .iter()
        .map(|generic| match generic.parameter() {
            luau::GenericParameterInfo::Name(name)
            | luau::GenericParameterInfo::Variadic { name, .. } => token_text(name),
            other => other.to_string().trim().to_string(),
        })
        .collect()
}

fn binary_op(symbol: &str) -> Option<BinaryOp> {
    let op = match symbol {
        "+" => BinaryOp::Add,
        "-" => BinaryOp::Sub,
        "*" => BinaryOp::Mul,
        "/" => BinaryOp::Div,
        "//" => BinaryOp::FloorDiv,
        "%" => BinaryOp::Mod,
        "^" => BinaryOp::Pow,
        ".." => BinaryOp::Concat,
        "==" => BinaryOp::Eq,
        "~=" => BinaryOp::NotEq,
        "<" => BinaryOp::Lt,
        "<=" => BinaryOp::Le,
        ">" => BinaryOp::Gt,
        ">=" => BinaryOp::Ge,
        "and" => BinaryOp::And,
        "or" => BinaryOp::Or,
        _ => return None,
    };
    Some(op)
}

fn unary_op(symbol: &str) -> Option<UnaryOp> {
    match symbol {
        "not" => Some(UnaryOp::Not),
        "-" => Some(UnaryOp::Minus),
        "#" => Some(UnaryOp::Len),
        _ => None,
    }
}
