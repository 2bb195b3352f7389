//! The generated list document.

use constlist_core::{GENERATION_MARKER, validate_identifier};

use crate::{
    ast::{Func, GoFile, SliceLit},
    error::{Error, NameKind, Result},
};

/// Name of the local variable holding the slice inside the generated function.
const LIST_VAR: &str = "list";

/// A validated list of constants ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstList {
    package: String,
    type_name: String,
    names: Vec<String>,
}

impl ConstList {
    /// Validate `package` and `type_name` as Go identifiers.
    ///
    /// `names` come from parsed identifiers and are used as given.
    pub fn new(
        package: impl Into<String>,
        type_name: impl Into<String>,
        names: Vec<String>,
    ) -> Result<Self> {
        let package = package.into();
        let type_name = type_name.into();

        if let Some(reason) = validate_identifier(&package) {
            return Err(Error::invalid_identifier(NameKind::Package, &package, reason));
        }
        if let Some(reason) = validate_identifier(&type_name) {
            return Err(Error::invalid_identifier(NameKind::Type, &type_name, reason));
        }

        Ok(Self {
            package,
            type_name,
            names,
        })
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// `<Type>List`.
    pub fn function_name(&self) -> String {
        format!("{}List", self.type_name)
    }

    pub fn to_file(&self) -> GoFile {
        let literal = SliceLit::new(&self.type_name).elements(&self.names);

        let func = Func::new(self.function_name())
            .returns(literal.slice_type())
            .body_line(format!("{} := {}", LIST_VAR, literal.build()))
            .body_blank()
            .body_line(format!("return {}", LIST_VAR));

        GoFile::new(&self.package)
            .header(GENERATION_MARKER)
            .item(func)
    }

    /// Render the whole Go document.
    pub fn render(&self) -> String {
        self.to_file().render()
    }
}

/// Validate and render in one step.
pub fn emit(package: &str, type_name: &str, names: &[String]) -> Result<String> {
    Ok(ConstList::new(package, type_name, names.to_vec())?.render())
}
