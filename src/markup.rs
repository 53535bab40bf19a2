//! Safe Markup Construction
//!
//! `Markup` can only be produced by `MarkupBuilder`, which escapes quote
//! characters in everything that is not a trusted template literal. That
//! keeps untrusted catalog text from terminating an attribute early and
//! injecting markup of its own.

/// A finished markup string. Only [`MarkupBuilder`] can create one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Incremental builder separating trusted template literals from
/// untrusted, quote-escaped content.
#[derive(Debug, Default)]
pub struct MarkupBuilder {
    out: String,
}

impl MarkupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trusted template literal verbatim
    pub fn lit(&mut self, fragment: &'static str) -> &mut Self {
        self.out.push_str(fragment);
        self
    }

    /// Append untrusted content with `"` and `'` escaped to entities
    pub fn text(&mut self, content: &str) -> &mut Self {
        for ch in content.chars() {
            match ch {
                '"' => self.out.push_str("&quot;"),
                '\'' => self.out.push_str("&apos;"),
                _ => self.out.push(ch),
            }
        }
        self
    }

    pub fn finish(self) -> Markup {
        Markup(self.out)
    }
}
