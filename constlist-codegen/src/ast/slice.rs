//! Go composite literal for slices.

/// Builder for `[]T{a, b, c}` literals.
#[derive(Debug, Clone)]
pub struct SliceLit {
    elem: String,
    elements: Vec<String>,
}

impl SliceLit {
    pub fn new(elem: impl Into<String>) -> Self {
        Self {
            elem: elem.into(),
            elements: Vec::new(),
        }
    }

    /// Add element expressions in order.
    pub fn elements<I, S>(mut self, exprs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements.extend(exprs.into_iter().map(Into::into));
        self
    }

    /// The slice type, `[]T`.
    pub fn slice_type(&self) -> String {
        format!("[]{}", self.elem)
    }

    /// Build the literal as a single line.
    pub fn build(&self) -> String {
        format!("{}{{{}}}", self.slice_type(), self.elements.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slice() {
        let lit = SliceLit::new("Color").elements(Vec::<String>::new());
        assert_eq!(lit.build(), "[]Color{}");
    }

    #[test]
    fn test_elements_keep_order() {
        let lit = SliceLit::new("Color").elements(["Red", "Green", "Blue"]);
        assert_eq!(lit.build(), "[]Color{Red, Green, Blue}");
    }

    #[test]
    fn test_qualified_element_type() {
        let lit = SliceLit::new("time.Duration").elements(["Second"]);
        assert_eq!(lit.slice_type(), "[]time.Duration");
        assert_eq!(lit.build(), "[]time.Duration{Second}");
    }
}
