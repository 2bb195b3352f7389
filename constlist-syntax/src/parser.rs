//! Declaration-level parser for Go source.
//!
//! The parser consumes the token stream produced by the [`Lexer`](crate::Lexer)
//! and builds a [`SourceFile`]. Top-level structure is parsed exactly;
//! function signatures and bodies, type definitions, and value expressions
//! are consumed as balanced token runs and recorded by span.

use std::fmt;

use crate::{
    ast::{
        Decl, FuncDecl, Ident, ImportSpec, SourceFile, TypeDecl, TypeExpr, ValueDecl, ValueSpec,
    },
    span::Span,
    token::{Keyword, Token, TokenKind},
};

/// A syntax error with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub span: Span,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.message, self.span.location())
    }
}

impl std::error::Error for SyntaxError {}

/// Convenient alias for parser results.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parser over a complete token stream.
pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> Parser<'src> {
    /// Create a parser. `tokens` must end with [`TokenKind::Eof`].
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    /// Parse a whole source file.
    pub fn parse_file(mut self) -> ParseResult<SourceFile> {
        let package = self.parse_package_clause()?;

        let mut imports = Vec::new();
        while self.at_keyword(Keyword::Import) {
            self.parse_import_decl(&mut imports)?;
            self.expect_semicolon()?;
        }

        let mut decls = Vec::new();
        while !self.at(TokenKind::Eof) {
            decls.push(self.parse_top_level_decl()?);
            self.expect_semicolon()?;
        }

        Ok(SourceFile {
            package,
            imports,
            decls,
        })
    }

    // =========================================================================
    // Clauses and declarations
    // =========================================================================

    fn parse_package_clause(&mut self) -> ParseResult<Ident> {
        if !self.at_keyword(Keyword::Package) {
            return Err(self.unexpected("'package'"));
        }
        self.advance();

        let name = self.expect_ident()?;
        if name.is_blank() {
            return Err(SyntaxError {
                message: "invalid package name _".to_string(),
                span: name.span,
            });
        }

        self.expect_semicolon()?;
        Ok(name)
    }

    fn parse_import_decl(&mut self, imports: &mut Vec<ImportSpec>) -> ParseResult<()> {
        self.advance();

        if !self.at(TokenKind::LParen) {
            imports.push(self.parse_import_spec()?);
            return Ok(());
        }

        self.advance();
        while !self.at(TokenKind::RParen) {
            imports.push(self.parse_import_spec()?);
            if !self.at(TokenKind::RParen) {
                self.expect_semicolon()?;
            }
        }
        self.advance();
        Ok(())
    }

    fn parse_import_spec(&mut self) -> ParseResult<ImportSpec> {
        let start = self.peek().span;

        let alias = match self.peek().kind {
            TokenKind::Ident | TokenKind::Dot => Some(self.advance().text(self.source).to_string()),
            _ => None,
        };

        if !self.at(TokenKind::String) {
            return Err(self.unexpected("import path"));
        }
        let path_token = self.advance();
        let path = path_token
            .text(self.source)
            .trim_matches(|c| c == '"' || c == '`')
            .to_string();

        Ok(ImportSpec {
            alias,
            path,
            span: start.to(path_token.span),
        })
    }

    fn parse_top_level_decl(&mut self) -> ParseResult<Decl> {
        match self.peek().kind {
            TokenKind::Keyword(Keyword::Const) => Ok(Decl::Const(self.parse_value_decl()?)),
            TokenKind::Keyword(Keyword::Var) => Ok(Decl::Var(self.parse_value_decl()?)),
            TokenKind::Keyword(Keyword::Type) => Ok(Decl::Type(self.parse_type_decl()?)),
            TokenKind::Keyword(Keyword::Func) => Ok(Decl::Func(self.parse_func_decl()?)),
            TokenKind::Keyword(Keyword::Import) => Err(SyntaxError {
                message: "imports must appear before other declarations".to_string(),
                span: self.peek().span,
            }),
            _ => Err(SyntaxError {
                message: "non-declaration statement outside function body".to_string(),
                span: self.peek().span,
            }),
        }
    }

    /// `const`/`var` followed by one spec or a parenthesized group.
    fn parse_value_decl(&mut self) -> ParseResult<ValueDecl> {
        let keyword = self.advance();

        if !self.at(TokenKind::LParen) {
            let spec = self.parse_value_spec(false)?;
            let span = keyword.span.to(spec.span);
            return Ok(ValueDecl {
                grouped: false,
                specs: vec![spec],
                span,
            });
        }

        self.advance();
        let mut specs = Vec::new();
        while !self.at(TokenKind::RParen) {
            specs.push(self.parse_value_spec(true)?);
            if !self.at(TokenKind::RParen) {
                self.expect_semicolon()?;
            }
        }
        let close = self.advance();

        Ok(ValueDecl {
            grouped: true,
            specs,
            span: keyword.span.to(close.span),
        })
    }

    /// `IdentifierList [Type] ["=" ExpressionList]`
    fn parse_value_spec(&mut self, in_group: bool) -> ParseResult<ValueSpec> {
        let mut names = vec![self.expect_ident()?];
        while self.at(TokenKind::Comma) {
            self.advance();
            names.push(self.expect_ident()?);
        }

        let ty = if self.at(TokenKind::Assign) || self.at_spec_end(in_group) {
            None
        } else {
            Some(self.parse_type(in_group)?)
        };

        let values = if self.at(TokenKind::Assign) {
            self.advance();
            self.parse_expr_list(in_group)?
        } else {
            Vec::new()
        };

        let span = names[0].span.to(self.prev_span());
        Ok(ValueSpec {
            names,
            ty,
            values,
            span,
        })
    }

    fn parse_type(&mut self, in_group: bool) -> ParseResult<TypeExpr> {
        if !self.at_type_start() {
            return Err(self.unexpected("type"));
        }

        let (start, end) = self.consume_run(|kind| {
            matches!(kind, TokenKind::Assign | TokenKind::Semicolon { .. })
                || (in_group && *kind == TokenKind::RParen)
        })?;

        let tokens = unparen(&self.tokens[start..end]);
        let mut text = String::new();
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 && needs_space(&tokens[i - 1], token) {
                text.push(' ');
            }
            text.push_str(token.text(self.source));
        }

        Ok(TypeExpr {
            text,
            span: tokens[0].span.to(tokens[tokens.len() - 1].span),
        })
    }

    /// Comma separated expressions, each recorded by span.
    fn parse_expr_list(&mut self, in_group: bool) -> ParseResult<Vec<Span>> {
        let mut values = Vec::new();
        loop {
            let (start, end) = self.consume_run(|kind| {
                matches!(kind, TokenKind::Comma | TokenKind::Semicolon { .. })
                    || (in_group && *kind == TokenKind::RParen)
            })?;
            if start == end {
                return Err(self.unexpected("expression"));
            }
            values.push(self.tokens[start].span.to(self.tokens[end - 1].span));

            if !self.at(TokenKind::Comma) {
                return Ok(values);
            }
            self.advance();
        }
    }

    /// `type` followed by one spec or a parenthesized group.
    fn parse_type_decl(&mut self) -> ParseResult<TypeDecl> {
        let keyword = self.advance();

        if !self.at(TokenKind::LParen) {
            let name = self.parse_type_spec(false)?;
            return Ok(TypeDecl {
                grouped: false,
                names: vec![name],
                span: keyword.span.to(self.prev_span()),
            });
        }

        self.advance();
        let mut names = Vec::new();
        while !self.at(TokenKind::RParen) {
            names.push(self.parse_type_spec(true)?);
            if !self.at(TokenKind::RParen) {
                self.expect_semicolon()?;
            }
        }
        let close = self.advance();

        Ok(TypeDecl {
            grouped: true,
            names,
            span: keyword.span.to(close.span),
        })
    }

    /// Type name followed by its (skipped) definition.
    fn parse_type_spec(&mut self, in_group: bool) -> ParseResult<Ident> {
        let name = self.expect_ident()?;
        let (start, end) = self.consume_run(|kind| {
            matches!(kind, TokenKind::Semicolon { .. }) || (in_group && *kind == TokenKind::RParen)
        })?;
        if start == end {
            return Err(self.unexpected("type"));
        }
        Ok(name)
    }

    /// `func [receiver] name signature [body]`
    fn parse_func_decl(&mut self) -> ParseResult<FuncDecl> {
        let keyword = self.advance();

        let has_receiver = self.at(TokenKind::LParen);
        if has_receiver {
            self.skip_delimited()?;
        }

        let name = self.expect_ident()?;

        if !self.at(TokenKind::LParen) && !self.at(TokenKind::LBracket) {
            return Err(self.unexpected("'('"));
        }
        self.consume_run(|kind| matches!(kind, TokenKind::Semicolon { .. }))?;

        Ok(FuncDecl {
            name,
            has_receiver,
            span: keyword.span.to(self.prev_span()),
        })
    }

    // =========================================================================
    // Balanced runs
    // =========================================================================

    /// Consume tokens until `stop` matches a token outside any delimiters, or
    /// EOF. Returns the half-open index range of the consumed tokens.
    fn consume_run(&mut self, stop: impl Fn(&TokenKind) -> bool) -> ParseResult<(usize, usize)> {
        let start = self.pos;
        let mut open: Vec<Token> = Vec::new();

        loop {
            let token = self.peek().clone();

            if token.kind == TokenKind::Eof {
                if let Some(unclosed) = open.last() {
                    return Err(SyntaxError {
                        message: format!("expected {}, found EOF", closer_for(&unclosed.kind)),
                        span: token.span,
                    });
                }
                break;
            }

            if open.is_empty() {
                if stop(&token.kind) {
                    break;
                }
                if starts_declaration(&token.kind) {
                    return Err(self.unexpected_token());
                }
            }

            if token.is_open_delimiter() {
                open.push(token);
            } else if token.is_close_delimiter() {
                match open.pop() {
                    Some(opener) if closes(&opener.kind, &token.kind) => {}
                    Some(opener) => {
                        return Err(SyntaxError {
                            message: format!(
                                "expected {}, found {}",
                                closer_for(&opener.kind),
                                token.kind
                            ),
                            span: token.span,
                        });
                    }
                    None => return Err(self.unexpected_token()),
                }
            }

            self.advance();
        }

        Ok((start, self.pos))
    }

    /// Consume an opening delimiter through its matching closer.
    fn skip_delimited(&mut self) -> ParseResult<()> {
        let mut open = vec![self.advance()];

        while let Some(innermost) = open.last().map(|t| t.kind) {
            let token = self.peek().clone();
            if token.kind == TokenKind::Eof {
                return Err(SyntaxError {
                    message: format!("expected {}, found EOF", closer_for(&innermost)),
                    span: token.span,
                });
            }
            if token.is_open_delimiter() {
                open.push(token);
            } else if token.is_close_delimiter() {
                if !closes(&innermost, &token.kind) {
                    return Err(SyntaxError {
                        message: format!(
                            "expected {}, found {}",
                            closer_for(&innermost),
                            token.kind
                        ),
                        span: token.span,
                    });
                }
                open.pop();
            }
            self.advance();
        }
        Ok(())
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn peek(&self) -> &Token {
        // The stream always ends with Eof and `advance` never moves past it.
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn prev_span(&self) -> Span {
        if self.pos == 0 {
            self.tokens[0].span
        } else {
            self.tokens[self.pos - 1].span
        }
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn at_keyword(&self, keyword: Keyword) -> bool {
        self.at(TokenKind::Keyword(keyword))
    }

    /// Whether the current token ends a value spec.
    fn at_spec_end(&self, in_group: bool) -> bool {
        match self.peek().kind {
            TokenKind::Semicolon { .. } | TokenKind::Eof => true,
            TokenKind::RParen => in_group,
            _ => false,
        }
    }

    fn at_type_start(&self) -> bool {
        let token = self.peek();
        match token.kind {
            TokenKind::Ident | TokenKind::LBracket | TokenKind::LParen => true,
            TokenKind::Keyword(kw) => matches!(
                kw,
                Keyword::Map | Keyword::Chan | Keyword::Func | Keyword::Struct | Keyword::Interface
            ),
            TokenKind::Operator => matches!(token.text(self.source), "*" | "<-"),
            _ => false,
        }
    }

    fn expect_ident(&mut self) -> ParseResult<Ident> {
        if !self.at(TokenKind::Ident) {
            return Err(self.unexpected("identifier"));
        }
        let token = self.advance();
        Ok(Ident::new(token.text(self.source), token.span))
    }

    fn expect_semicolon(&mut self) -> ParseResult<()> {
        if matches!(self.peek().kind, TokenKind::Semicolon { .. }) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected("';'"))
        }
    }

    fn unexpected(&self, expected: &str) -> SyntaxError {
        SyntaxError {
            message: format!("expected {}, found {}", expected, self.describe(self.peek())),
            span: self.peek().span,
        }
    }

    fn unexpected_token(&self) -> SyntaxError {
        SyntaxError {
            message: format!("unexpected {}", self.describe(self.peek())),
            span: self.peek().span,
        }
    }

    fn describe(&self, token: &Token) -> String {
        match token.kind {
            TokenKind::Ident => format!("identifier '{}'", token.text(self.source)),
            TokenKind::Operator => format!("'{}'", token.text(self.source)),
            TokenKind::Int
            | TokenKind::Float
            | TokenKind::Imag
            | TokenKind::Char
            | TokenKind::String => format!("literal {}", token.text(self.source)),
            _ => token.kind.to_string(),
        }
    }
}

fn closes(opener: &TokenKind, closer: &TokenKind) -> bool {
    matches!(
        (opener, closer),
        (TokenKind::LParen, TokenKind::RParen)
            | (TokenKind::LBracket, TokenKind::RBracket)
            | (TokenKind::LBrace, TokenKind::RBrace)
    )
}

fn closer_for(opener: &TokenKind) -> &'static str {
    match opener {
        TokenKind::LBracket => "']'",
        TokenKind::LBrace => "'}'",
        _ => "')'",
    }
}

/// Keywords that only ever begin a declaration or clause, so they cannot
/// appear inside an expression or type outside of a function body.
fn starts_declaration(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Keyword(
            Keyword::Const | Keyword::Var | Keyword::Type | Keyword::Import | Keyword::Package
        )
    )
}

/// Whether re-assembled type text needs a space between `prev` and `next`.
/// Strips parentheses that wrap the whole type, so `(C)` and `((C))` read as `C`.
fn unparen(mut tokens: &[Token]) -> &[Token] {
    while tokens.len() > 2
        && tokens[0].kind == TokenKind::LParen
        && matching_close(tokens) == Some(tokens.len() - 1)
    {
        tokens = &tokens[1..tokens.len() - 1];
    }
    tokens
}

/// Index of the delimiter closing `tokens[0]`.
fn matching_close(tokens: &[Token]) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate() {
        if token.is_open_delimiter() {
            depth += 1;
        } else if token.is_close_delimiter() {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

fn needs_space(prev: &Token, next: &Token) -> bool {
    match prev.kind {
        TokenKind::Comma => true,
        TokenKind::RParen => !next.is_close_delimiter() && next.kind != TokenKind::Comma,
        TokenKind::Keyword(Keyword::Struct | Keyword::Interface) => true,
        _ => prev.is_word() && next.is_word(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parse(src: &str) -> SourceFile {
        let tokens = Lexer::new(src).tokenize().expect("source should lex");
        Parser::new(src, tokens)
            .parse_file()
            .expect("source should parse")
    }

    fn parse_err(src: &str) -> SyntaxError {
        let tokens = Lexer::new(src).tokenize().expect("source should lex");
        Parser::new(src, tokens)
            .parse_file()
            .expect_err("source should not parse")
    }

    fn const_group(file: &SourceFile, index: usize) -> &ValueDecl {
        file.const_decls().nth(index).expect("const group exists")
    }

    #[test]
    fn test_package_only() {
        let file = parse("package colors\n");
        assert_eq!(file.package.name, "colors");
        assert!(file.imports.is_empty());
        assert!(file.decls.is_empty());
    }

    #[test]
    fn test_imports() {
        let file = parse(
            r#"package colors

import "fmt"

import (
	"strings"
	str "strconv"
	. "math"
	_ "embed"
)
"#,
        );
        let paths: Vec<_> = file.imports.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["fmt", "strings", "strconv", "math", "embed"]);
        assert_eq!(file.imports[2].alias.as_deref(), Some("str"));
        assert_eq!(file.imports[3].alias.as_deref(), Some("."));
        assert_eq!(file.imports[4].alias.as_deref(), Some("_"));
    }

    #[test]
    fn test_grouped_const_specs() {
        let file = parse(
            r#"package colors

const (
	Red Color = iota
	Green
	Blue
)
"#,
        );
        let group = const_group(&file, 0);
        assert!(group.grouped);
        assert_eq!(group.specs.len(), 3);

        let red = &group.specs[0];
        assert_eq!(red.first_name().name, "Red");
        assert_eq!(red.ty.as_ref().map(|t| t.text.as_str()), Some("Color"));
        assert!(red.has_initializer());

        let green = &group.specs[1];
        assert_eq!(green.first_name().name, "Green");
        assert!(green.ty.is_none());
        assert!(!green.has_initializer());
    }

    #[test]
    fn test_single_const() {
        let file = parse("package a\n\nconst Answer int = 42\n");
        let group = const_group(&file, 0);
        assert!(!group.grouped);
        assert_eq!(group.specs[0].first_name().name, "Answer");
        assert_eq!(group.specs[0].ty.as_ref().unwrap().text, "int");
    }

    #[test]
    fn test_untyped_with_initializer() {
        let file = parse("package a\nconst (\n\tA = 1\n\tB, C = 2, 3\n)\n");
        let group = const_group(&file, 0);
        assert!(group.specs[0].ty.is_none());
        assert_eq!(group.specs[0].values.len(), 1);
        let names: Vec<_> = group.specs[1].names.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
        assert_eq!(group.specs[1].values.len(), 2);
    }

    #[test]
    fn test_typed_without_initializer() {
        let file = parse("package a\nconst (\n\tA T = 1\n\tB T\n)\n");
        let group = const_group(&file, 0);
        assert_eq!(group.specs[1].ty.as_ref().unwrap().text, "T");
        assert!(!group.specs[1].has_initializer());
    }

    #[test]
    fn test_value_expressions_are_balanced() {
        let file = parse(
            "package a\nconst (\n\tMask Flag = (1 << 3) | flagBase[2]\n\tName = \"x,y\"\n)\n",
        );
        let group = const_group(&file, 0);
        assert_eq!(group.specs.len(), 2);
        assert_eq!(group.specs[0].values.len(), 1);
    }

    #[test]
    fn test_value_spans() {
        let src = "package a\nconst X = 1 + 2\n";
        let file = parse(src);
        let spec = &const_group(&file, 0).specs[0];
        assert_eq!(spec.values[0].text(src), "1 + 2");
        assert_eq!(spec.span.text(src), "X = 1 + 2");
    }

    #[test]
    fn test_qualified_and_composite_types() {
        let file = parse(
            "package a\nvar (\n\tA pkg.Kind\n\tB []byte\n\tC map[string]int\n\tD func(a int) error\n\tE chan int\n\tF *T\n)\n",
        );
        let Decl::Var(group) = &file.decls[0] else {
            panic!("expected a var declaration");
        };
        let types: Vec<_> = group
            .specs
            .iter()
            .map(|s| s.ty.as_ref().unwrap().text.as_str())
            .collect();
        assert_eq!(
            types,
            vec![
                "pkg.Kind",
                "[]byte",
                "map[string]int",
                "func(a int) error",
                "chan int",
                "*T"
            ]
        );
    }

    #[test]
    fn test_parenthesized_types_are_unwrapped() {
        let src =
            "package a\nconst (\n\tA (C) = 1\n\tB ((C))\n\tD (*T)\n\tE func() (int)\n\tF (func()) = nil\n)\n";
        let file = parse(src);
        let group = const_group(&file, 0);
        let types: Vec<_> = group
            .specs
            .iter()
            .map(|s| s.ty.as_ref().unwrap().text.as_str())
            .collect();
        assert_eq!(types, vec!["C", "C", "*T", "func() (int)", "func()"]);

        let a = group.specs[0].ty.as_ref().unwrap();
        assert_eq!(a.span.text(src), "C");
    }

    #[test]
    fn test_other_declarations() {
        let file = parse(
            r#"package a

type Color int

type (
	Shape struct {
		Sides int
	}
	Alias = Shape
)

var defaultColor = Red

func (c Color) String() string {
	switch c {
	case Red:
		return "red"
	}
	return ""
}

func Generic[T any](v T) T { return v }
"#,
        );
        assert_eq!(file.decls.len(), 5);

        let Decl::Type(single) = &file.decls[0] else {
            panic!("expected type decl");
        };
        assert_eq!(single.names[0].name, "Color");

        let Decl::Type(group) = &file.decls[1] else {
            panic!("expected type decl");
        };
        let names: Vec<_> = group.names.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Shape", "Alias"]);

        assert!(matches!(file.decls[2], Decl::Var(_)));

        let Decl::Func(method) = &file.decls[3] else {
            panic!("expected func decl");
        };
        assert_eq!(method.name.name, "String");
        assert!(method.has_receiver);

        let Decl::Func(generic) = &file.decls[4] else {
            panic!("expected func decl");
        };
        assert_eq!(generic.name.name, "Generic");
        assert!(!generic.has_receiver);
    }

    #[test]
    fn test_empty_group() {
        let file = parse("package a\nconst ()\n");
        assert!(const_group(&file, 0).specs.is_empty());
    }

    #[test]
    fn test_semicolons_on_one_line() {
        let file = parse("package a; const ( Red Color = iota; Green; Blue )");
        let names: Vec<_> = const_group(&file, 0)
            .specs
            .iter()
            .map(|s| s.first_name().name.as_str())
            .collect();
        assert_eq!(names, vec!["Red", "Green", "Blue"]);
    }

    #[test]
    fn test_missing_package_clause() {
        let err = parse_err("const X = 1\n");
        assert_eq!(err.message, "expected 'package', found keyword const");
    }

    #[test]
    fn test_blank_package_name() {
        let err = parse_err("package _\n");
        assert_eq!(err.message, "invalid package name _");
    }

    #[test]
    fn test_statement_outside_function() {
        let err = parse_err("package a\nx := 1\n");
        assert_eq!(err.message, "non-declaration statement outside function body");
        assert_eq!(err.span.line, 2);
    }

    #[test]
    fn test_import_after_declaration() {
        let err = parse_err("package a\nconst X = 1\nimport \"fmt\"\n");
        assert_eq!(err.message, "imports must appear before other declarations");
    }

    #[test]
    fn test_missing_expression() {
        let err = parse_err("package a\nconst X =\n");
        assert_eq!(err.message, "expected expression, found EOF");
    }

    #[test]
    fn test_declaration_keyword_inside_expression() {
        let err = parse_err("package a\nconst X =\nconst Y = 1\n");
        assert_eq!(err.message, "unexpected keyword const");
        assert_eq!(err.span.line, 3);
    }

    #[test]
    fn test_stray_closing_delimiter() {
        let err = parse_err("package a\nconst X = 1 }\n");
        assert_eq!(err.message, "unexpected '}'");
    }

    #[test]
    fn test_unclosed_group() {
        let err = parse_err("package a\nconst (\n\tRed Color = iota\n");
        assert_eq!(err.message, "expected identifier, found EOF");
    }

    #[test]
    fn test_unclosed_function_body() {
        let err = parse_err("package a\nfunc f() {\n");
        assert_eq!(err.message, "expected '}', found EOF");
    }

    #[test]
    fn test_mismatched_delimiter() {
        let err = parse_err("package a\nvar x = f(1]\n");
        assert_eq!(err.message, "expected ')', found ']'");
    }

    #[test]
    fn test_invalid_type_start() {
        let err = parse_err("package a\nconst X 1\n");
        assert_eq!(err.message, "expected type, found literal 1");
    }

    #[test]
    fn test_missing_name_in_spec() {
        let err = parse_err("package a\nconst (\n\t= 1\n)\n");
        assert_eq!(err.message, "expected identifier, found '='");
    }
}
