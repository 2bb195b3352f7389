//! Effective type resolution for constant groups.
//!
//! Inside one `const` group a spec that writes neither a type nor values
//! repeats the previous spec, type included. The effective type is a fold
//! over the group's specs, restarted for every group.

use constlist_syntax::{SourceFile, ValueDecl, ValueSpec};
use serde::Serialize;

/// The type a constant spec ends up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveType<'a> {
    /// Group start, or reset by an initializer written without a type.
    Untyped,
    /// Written on this spec or carried over from an earlier one.
    Named(&'a str),
}

/// Which rule produced a spec's effective type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    /// The spec writes its own type.
    Explicit,
    /// The spec has values but no type.
    Reset,
    /// The spec has neither and keeps the previous type.
    Inherited,
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::Explicit => write!(f, "explicit"),
            Transition::Reset => write!(f, "reset"),
            Transition::Inherited => write!(f, "inherited"),
        }
    }
}

impl<'a> EffectiveType<'a> {
    /// Advance the fold by one spec.
    pub fn step(self, spec: &'a ValueSpec) -> (Transition, Self) {
        match (&spec.ty, spec.has_initializer()) {
            (Some(ty), _) => (Transition::Explicit, Self::Named(&ty.text)),
            (None, true) => (Transition::Reset, Self::Untyped),
            (None, false) => (Transition::Inherited, self),
        }
    }

    /// Whether this is exactly the named type `target`.
    pub fn is(&self, target: &str) -> bool {
        matches!(self, Self::Named(name) if *name == target)
    }

    pub fn name(&self) -> Option<&'a str> {
        match self {
            Self::Untyped => None,
            Self::Named(name) => Some(name),
        }
    }
}

/// The outcome of the fold for one spec.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a> {
    /// Index of the enclosing `const` declaration among the file's const
    /// declarations.
    pub group: usize,
    pub spec: &'a ValueSpec,
    pub transition: Transition,
    pub effective: EffectiveType<'a>,
}

/// Resolve every spec of one group, in order.
pub fn resolve_group(group: usize, decl: &ValueDecl) -> Vec<Resolution<'_>> {
    decl.specs
        .iter()
        .scan(EffectiveType::Untyped, |current, spec| {
            let (transition, next) = current.step(spec);
            *current = next;
            Some(Resolution {
                group,
                spec,
                transition,
                effective: next,
            })
        })
        .collect()
}

/// Resolve every spec of every `const` declaration in `file`.
pub fn resolve_file(file: &SourceFile) -> Vec<Resolution<'_>> {
    file.const_decls()
        .enumerate()
        .flat_map(|(index, decl)| {
            let resolved = resolve_group(index, decl);
            tracing::debug!(
                group = index,
                specs = resolved.len(),
                grouped = decl.grouped,
                "resolved const group"
            );
            resolved
        })
        .collect()
}
