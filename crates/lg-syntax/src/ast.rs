use std::fmt;

use crate::location::Location;

/// Identity of one local binding. Two references share an id only when
/// they resolve to the same declaration, so shadowed names stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalId(pub u32);

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "local#{}", self.0)
    }
}

/// A declared local: variable, loop variable, parameter or implicit `self`.
#[derive(Debug, Clone, PartialEq)]
pub struct Local {
    pub id: LocalId,
    pub name: String,
    pub annotation: Option<Type>,
    pub location: Location,
}

/// A sequence of statements with its own scope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stat {
    /// `do ... end`
    Block(Block),
    If(StatIf),
    While {
        condition: Expr,
        body: Block,
    },
    Repeat {
        body: Block,
        condition: Expr,
    },
    NumericFor {
        var: Local,
        from: Expr,
        to: Expr,
        step: Option<Expr>,
        body: Block,
    },
    GenericFor {
        vars: Vec<Local>,
        values: Vec<Expr>,
        body: Block,
    },
    Local(StatLocal),
    LocalFunction {
        local: Local,
        func: Function,
    },
    /// `function a.b:c() ... end`
    Function(StatFunction),
    Assign {
        targets: Vec<Expr>,
        values: Vec<Expr>,
    },
    CompoundAssign {
        target: Expr,
        op: BinaryOp,
        value: Expr,
    },
    /// A call evaluated for its side effects.
    Expr(Expr),
    Return(StatReturn),
    Break,
    Continue,
    TypeAlias {
        name: String,
        exported: bool,
        generics: Vec<String>,
        ty: Type,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatIf {
    /// `if` and every `elseif`, in order.
    pub branches: Vec<(Expr, Block)>,
    pub else_block: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatLocal {
    pub vars: Vec<Local>,
    pub values: Vec<Expr>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatFunction {
    /// A global, a local, or an index chain ending in `.name` / `:name`.
    pub name: Expr,
    pub func: Function,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatReturn {
    pub list: Vec<Expr>,
    pub location: Location,
}

/// A function body, shared by statements and function expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub generics: Vec<String>,
    /// The implicit receiver of `function t:m()` declarations.
    pub self_param: Option<Local>,
    pub params: Vec<Local>,
    pub vararg: bool,
    pub vararg_annotation: Option<Type>,
    /// `None` when no return annotation is written.
    pub return_annotation: Option<Vec<Type>>,
    pub body: Block,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOp {
    /// `a.b`
    Dot,
    /// `a:b`
    Colon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Minus,
    Len,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
    Concat,
    Eq,
    NotEq,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalRef {
    pub id: LocalId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprIndexName {
    pub expr: Box<Expr>,
    pub index: String,
    pub op: IndexOp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprCall {
    pub func: Box<Expr>,
    pub args: Vec<Expr>,
    /// `true` for `a:b(...)`, where `func` is a colon index.
    pub self_call: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableItem {
    Positional(Expr),
    Named { name: String, value: Expr },
    Keyed { key: Expr, value: Expr },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Nil,
    Bool(bool),
    Number(String),
    String(String),
    InterpString(String),
    Varargs,
    Local(LocalRef),
    Global(String),
    Group(Box<Expr>),
    IndexName(ExprIndexName),
    Index {
        expr: Box<Expr>,
        key: Box<Expr>,
    },
    Call(ExprCall),
    Function(Box<Function>),
    Table(Vec<TableItem>),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    TypeAssertion {
        expr: Box<Expr>,
        ty: Type,
    },
    /// `if c then a elseif d then b else e`; branches in source order.
    IfElse {
        branches: Vec<(Expr, Expr)>,
        else_expr: Box<Expr>,
    },
}

impl Expr {
    pub fn as_local(&self) -> Option<&LocalRef> {
        match self {
            Expr::Local(local) => Some(local),
            _ => None,
        }
    }

    pub fn as_call(&self) -> Option<&ExprCall> {
        match self {
            Expr::Call(call) => Some(call),
            _ => None,
        }
    }

    pub fn as_index_name(&self) -> Option<&ExprIndexName> {
        match self {
            Expr::IndexName(index) => Some(index),
            _ => None,
        }
    }
}

/// `Name`, `prefix.Name`, `Name<T, U>`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeReference {
    pub prefix: Option<String>,
    pub name: String,
    /// `Some` whenever an argument list is written, even `Name<>`.
    pub parameters: Option<Vec<Type>>,
    pub location: Location,
}

impl TypeReference {
    pub fn has_parameter_list(&self) -> bool {
        self.parameters.is_some()
    }

    /// A bare name with no prefix and no argument list.
    pub fn is_plain(&self) -> bool {
        self.prefix.is_none() && self.parameters.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeTableProp {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Reference(TypeReference),
    /// `A | B`; `T?` is written here as a union with a `nil` reference.
    Union(Vec<Type>),
    Intersection(Vec<Type>),
    Table {
        props: Vec<TypeTableProp>,
        indexer: Option<Box<(Type, Type)>>,
    },
    Function {
        generics: Vec<String>,
        params: Vec<Type>,
        returns: Vec<Type>,
    },
    Typeof(Box<Expr>),
    StringSingleton(String),
    BoolSingleton(bool),
    /// `...T`
    Variadic(Box<Type>),
    /// `T...`
    GenericPack(String),
}

impl Type {
    pub fn as_reference(&self) -> Option<&TypeReference> {
        match self {
            Type::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    /// `nil` in type position.
    pub fn is_nil(&self) -> bool {
        matches!(self, Type::Reference(r) if r.is_plain() && r.name == "nil")
    }
}
