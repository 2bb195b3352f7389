//! Declaration-level syntax tree for one Go source file.
//!
//! Only the structure the generator needs is materialized: the package
//! clause, imports, and every top-level declaration with its names, optional
//! type, and value slots. Function bodies and value expressions are kept as
//! spans.

use crate::span::Span;

/// A parsed Go source file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    /// Name from the package clause.
    pub package: Ident,
    /// Import specs in source order.
    pub imports: Vec<ImportSpec>,
    /// Top-level declarations in source order.
    pub decls: Vec<Decl>,
}

impl SourceFile {
    /// Iterate over the `const` declarations in source order.
    pub fn const_decls(&self) -> impl Iterator<Item = &ValueDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Const(group) => Some(group),
            _ => None,
        })
    }
}

/// An identifier with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    /// Whether this is the blank identifier `_`.
    pub fn is_blank(&self) -> bool {
        self.name == constlist_core::BLANK
    }
}

/// One import spec: `alias "path"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpec {
    /// Explicit package name, `.` or `_`, if written.
    pub alias: Option<String>,
    /// Import path without quotes.
    pub path: String,
    pub span: Span,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Const(ValueDecl),
    Var(ValueDecl),
    Type(TypeDecl),
    Func(FuncDecl),
}

impl Decl {
    pub fn span(&self) -> Span {
        match self {
            Decl::Const(d) | Decl::Var(d) => d.span,
            Decl::Type(d) => d.span,
            Decl::Func(d) => d.span,
        }
    }
}

/// A `const` or `var` declaration, single or parenthesized.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDecl {
    /// True for the `const ( ... )` form.
    pub grouped: bool,
    /// Specs in source order.
    pub specs: Vec<ValueSpec>,
    pub span: Span,
}

/// One entry of a value declaration: `IdentifierList [Type] [= ExpressionList]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSpec {
    /// Names bound by this entry, never empty.
    pub names: Vec<Ident>,
    /// Type written on this entry.
    pub ty: Option<TypeExpr>,
    /// One span per value expression; empty when the entry has no initializer.
    pub values: Vec<Span>,
    pub span: Span,
}

impl ValueSpec {
    /// The first bound name.
    pub fn first_name(&self) -> &Ident {
        &self.names[0]
    }

    /// Whether this entry supplies its own value expressions.
    pub fn has_initializer(&self) -> bool {
        !self.values.is_empty()
    }
}

/// A type as written in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpr {
    /// Normalized text: tokens joined with a space only where required,
    /// e.g. `Color`, `pkg.Color`, `[]byte`, `map[string]int`.
    pub text: String,
    pub span: Span,
}

/// A `type` declaration, single or parenthesized.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub grouped: bool,
    /// Declared type names in source order.
    pub names: Vec<Ident>,
    pub span: Span,
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: Ident,
    /// True for methods.
    pub has_receiver: bool,
    pub span: Span,
}
