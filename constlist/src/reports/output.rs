//! Output trait for rendering reports.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Render a title/header.
    fn title(&mut self, text: &str);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a diagnostic. Never mixed into generated code.
    fn diagnostic(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
///
/// Diagnostics go to stderr, everything else to stdout.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{}", text);
        println!("{}", "=".repeat(text.chars().count()));
    }

    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn diagnostic(&mut self, text: &str) {
        eprintln!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered lines for assertions.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn title(&mut self, text: &str) {
        self.stdout.push(text.to_string());
    }

    fn section(&mut self, name: &str) {
        self.stdout.push(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.stdout.push(format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.stdout.push(format!("- {}", text));
    }

    fn diagnostic(&mut self, text: &str) {
        self.stderr.push(text.to_string());
    }

    fn newline(&mut self) {
        self.stdout.push(String::new());
    }
}
