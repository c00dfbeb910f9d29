//! HTML page rendering: tree listings and the document page shell.

use std::fmt::Write;

use crate::store::{Entry, EntryKind};

/// Render a tree's immediate children as one link per line. Tree children get
/// a trailing `/` in the href so the links are navigable without a redirect.
/// Entries are sorted by name for deterministic output.
pub fn render_listing(entries: &[Entry]) -> String {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut out = String::new();
    for entry in sorted {
        let name = escape_html(&entry.name);
        let slash = if entry.kind == EntryKind::Tree { "/" } else { "" };
        // writing to a String cannot fail
        let _ = writeln!(out, r#"<a href="{name}{slash}">{name}</a><br>"#);
    }
    out
}

/// Wrap a transformed HTML fragment in the fixed page shell. The fragment is
/// embedded verbatim: document content comes from the served repository and
/// is trusted, not user input.
pub fn render_document(fragment: &[u8]) -> String {
    let body = String::from_utf8_lossy(fragment);
    format!("<!doctype html>\n<meta charset=utf-8>\n<style type=\"text/css\">\n{PAGE_STYLE}</style>\n{body}\n")
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const PAGE_STYLE: &str = r#"body {
	font-family: "PT Serif", "Droid Serif", serif;
	font-size: 130%;
	line-height: 170%;
	max-width: 45em;
	margin: auto;
	padding-right: 1em;
	padding-left: 1em;
	color: #333;
	background: white;
	text-rendering: optimizeLegibility;
}

@media only screen and (max-device-width:480px) {
	body {
		font-size:110%;
		text-rendering: auto;
	}
}

img {
	display: block;
	margin: 0 auto;
	max-width: 100%;
}

h1 a, h2 a, h3 a, h4 a, h5 a {
	text-decoration: none;
	color: gray;
}

h1 a:hover, h2 a:hover, h3 a:hover, h4 a:hover, h5 a:hover {
	text-decoration: none;
	color: gray;
}

h1, h2, h3, h4, h5 {
	font-family: Georgia, serif;
	font-weight: bold;
	color: gray;
}

h1 {
	font-size: 150%;
}

h2 {
	font-size: 130%;
}

h3 {
	font-size: 110%;
}

h4, h5 {
	font-size: 100%;
	font-style: italic;
}

pre {
	background-color: rgba(200,200,200,0.2);
	color: #111;
	padding: 0.5em;
	overflow: auto;
}

code, pre {
	font-size: 90%;
	font-family: "Consolas", "PT Mono", monospace;
}

hr { border:none; text-align:center; color:gray; }
hr:after {
	content:"\2766";
	display:inline-block;
	font-size:1.5em;
}

dt code {
	font-weight: bold;
}
dd p {
	margin-top: 0;
}

nav {
	padding:.5em;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fake::{blob_entry, tree_entry};

    #[test]
    fn listing_links_children() {
        let entries = vec![tree_entry("docs", "t-1"), blob_entry("notes.txt", "b-1")];
        let html = render_listing(&entries);
        assert!(html.contains(r#"<a href="docs/">docs</a>"#), "{html}");
        assert!(html.contains(r#"<a href="notes.txt">notes.txt</a>"#), "{html}");
    }

    #[test]
    fn listing_is_sorted_by_name() {
        let entries = vec![
            blob_entry("zebra.txt", "b-1"),
            tree_entry("alpha", "t-1"),
            blob_entry("misc.md", "b-2"),
        ];
        let html = render_listing(&entries);
        let alpha = html.find("alpha").unwrap();
        let misc = html.find("misc.md").unwrap();
        let zebra = html.find("zebra.txt").unwrap();
        assert!(alpha < misc && misc < zebra, "{html}");
    }

    #[test]
    fn listing_escapes_names() {
        let entries = vec![blob_entry("a<b>.txt", "b-1")];
        let html = render_listing(&entries);
        assert!(html.contains("a&lt;b&gt;.txt"), "{html}");
        assert!(!html.contains("a<b>"), "{html}");
    }

    #[test]
    fn listing_of_empty_tree_is_empty() {
        assert_eq!(render_listing(&[]), "");
    }

    #[test]
    fn document_shell_embeds_fragment_verbatim() {
        let page = render_document(b"<h1>Hi</h1>");
        assert!(page.starts_with("<!doctype html>"));
        assert!(page.contains("<h1>Hi</h1>"));
        assert!(page.contains("<style"));
    }

    #[test]
    fn escape_html_covers_specials() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
