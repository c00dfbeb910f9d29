//! Markdown-to-HTML transformation.
//!
//! The dispatcher only sees the `MarkupTransformer` capability; the
//! pulldown-cmark implementation below is wired in at startup. Document
//! content is trusted (it comes from the served repository), so the produced
//! fragment is embedded in the page shell without further escaping.

use pulldown_cmark::{html, Options, Parser};

/// Pure `bytes -> bytes` HTML transformation for a markup document.
pub trait MarkupTransformer: Send + Sync {
    fn transform(&self, input: &[u8]) -> Vec<u8>;
}

/// CommonMark transformer with a fixed extension set: footnotes, tables,
/// strikethrough, typographic substitutions and explicit header attributes.
pub struct CommonMarkTransformer {
    options: Options,
}

impl CommonMarkTransformer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_SMART_PUNCTUATION);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        Self { options }
    }
}

impl Default for CommonMarkTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupTransformer for CommonMarkTransformer {
    fn transform(&self, input: &[u8]) -> Vec<u8> {
        let text = String::from_utf8_lossy(input);
        let parser = Parser::new_ext(&text, self.options);
        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out.into_bytes()
    }
}
