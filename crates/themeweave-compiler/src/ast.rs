//! Syntax tree for theme code.
//!
//! Only the node kinds the parser can produce exist here; the validator
//! and transformer match on them exhaustively, so the set of supported
//! constructs is visible at the type level.

use std::ops::Range;

/// Byte range into the text that was parsed.
pub type Span = Range<usize>;

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Const,
    Let,
    Var,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression {
        expr: Expr,
        span: Span,
    },
    Declaration {
        kind: DeclarationKind,
        name: String,
        init: Option<Expr>,
        span: Span,
    },
}

impl Statement {
    pub fn span(&self) -> &Span {
        match self {
            Statement::Expression { span, .. } | Statement::Declaration { span, .. } => span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Flatten a static member chain such as `theme.palette['primary']`
    /// into `["theme", "palette", "primary"]`.
    ///
    /// Returns `None` if any link is a dynamic computed property or the
    /// chain does not start at an identifier.
    pub fn member_path(&self) -> Option<Vec<String>> {
        match &self.kind {
            ExprKind::Identifier(name) => Some(vec![name.clone()]),
            ExprKind::Member {
                object, property, ..
            } => {
                let mut path = object.member_path()?;
                match property {
                    MemberProperty::Named(name) => path.push(name.clone()),
                    MemberProperty::Computed(key) => match &key.kind {
                        ExprKind::String(s) => path.push(s.clone()),
                        ExprKind::Number(n) => path.push(format_number(*n)),
                        _ => return None,
                    },
                }
                Some(path)
            }
            _ => None,
        }
    }

    /// True for a member chain of at least one link rooted at `theme`.
    pub fn is_theme_reference(&self) -> bool {
        matches!(self.kind, ExprKind::Member { .. })
            && self
                .member_path()
                .is_some_and(|path| path.first().map(String::as_str) == Some("theme"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Template(TemplateLiteral),
    Identifier(String),
    Array(Vec<ArrayElement>),
    Object(Vec<Property>),
    Member {
        object: Box<Expr>,
        property: MemberProperty,
        optional: bool,
    },
    Call {
        callee: Box<Expr>,
        arguments: Vec<Argument>,
        optional: bool,
    },
    New {
        callee: Box<Expr>,
        arguments: Vec<Argument>,
    },
    Unary {
        op: UnaryOp,
        argument: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    Assignment {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Arrow(ArrowFunction),
    Function(FunctionExpr),
}

impl ExprKind {
    /// ESTree-style node name, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ExprKind::Null | ExprKind::Bool(_) | ExprKind::Number(_) | ExprKind::String(_) => {
                "Literal"
            }
            ExprKind::Template(_) => "TemplateLiteral",
            ExprKind::Identifier(_) => "Identifier",
            ExprKind::Array(_) => "ArrayExpression",
            ExprKind::Object(_) => "ObjectExpression",
            ExprKind::Member { .. } => "MemberExpression",
            ExprKind::Call { .. } => "CallExpression",
            ExprKind::New { .. } => "NewExpression",
            ExprKind::Unary { .. } => "UnaryExpression",
            ExprKind::Binary { op, .. } if op.is_logical() => "LogicalExpression",
            ExprKind::Binary { .. } => "BinaryExpression",
            ExprKind::Conditional { .. } => "ConditionalExpression",
            ExprKind::Assignment { .. } => "AssignmentExpression",
            ExprKind::Arrow(_) => "ArrowFunctionExpression",
            ExprKind::Function(_) => "FunctionExpression",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateLiteral {
    /// Cooked text segments; always one more than `expressions`.
    pub quasis: Vec<String>,
    pub expressions: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArrayElement {
    Expr(Expr),
    Spread(Expr),
    Hole(Span),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Expr(Expr),
    Spread(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    KeyValue {
        key: PropertyKey,
        value: Expr,
        shorthand: bool,
        span: Span,
    },
    Spread {
        argument: Expr,
        span: Span,
    },
    /// Method shorthand `name() { ... }`; the body is never inspected.
    Method {
        key: PropertyKey,
        span: Span,
    },
}

impl Property {
    pub fn span(&self) -> &Span {
        match self {
            Property::KeyValue { span, .. }
            | Property::Spread { span, .. }
            | Property::Method { span, .. } => span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKey {
    Identifier(String),
    String(String),
    Number(f64),
    Computed(Box<Expr>),
}

impl PropertyKey {
    /// Static key name; `None` for computed keys.
    pub fn name(&self) -> Option<String> {
        match self {
            PropertyKey::Identifier(name) | PropertyKey::String(name) => Some(name.clone()),
            PropertyKey::Number(n) => Some(format_number(*n)),
            PropertyKey::Computed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MemberProperty {
    Named(String),
    Computed(Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    BitNot,
    Typeof,
    Void,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    StrictEq,
    NotEq,
    StrictNotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
    Nullish,
}

impl BinaryOp {
    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or | BinaryOp::Nullish)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFunction {
    pub params: Vec<Pattern>,
    pub body: ArrowBody,
}

impl ArrowFunction {
    /// The returned object literal, if this is exactly
    /// `({ theme }) => ({ ... })`.
    pub fn theme_style_body(&self) -> Option<&Expr> {
        let [Pattern::Object(bindings)] = self.params.as_slice() else {
            return None;
        };
        let [ObjectPatternProperty::Property { key, value }] = bindings.as_slice() else {
            return None;
        };
        if key.name().as_deref() != Some("theme")
            || *value != Pattern::Identifier("theme".into())
        {
            return None;
        }
        match &self.body {
            ArrowBody::Expression(body) if matches!(body.kind, ExprKind::Object(_)) => Some(body),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArrowBody {
    Expression(Box<Expr>),
    Block(Span),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub name: Option<String>,
    pub params: Vec<Pattern>,
    pub body: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Identifier(String),
    Object(Vec<ObjectPatternProperty>),
    Array(Vec<Option<Pattern>>),
    Rest(Box<Pattern>),
    Default {
        target: Box<Pattern>,
        default: Box<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectPatternProperty {
    Property { key: PropertyKey, value: Pattern },
    Rest(Pattern),
}

/// JS-style number formatting for keys: integral values print without a
/// fractional part.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
