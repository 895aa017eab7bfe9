use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Render assistant markdown to HTML: headings, emphasis, lists, links and
/// tables. User messages never go through this — they render as plain text.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(text, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// A formatted assistant message bubble body.
#[component]
pub fn MarkdownMessage(content: String, #[props(default)] class: String) -> Element {
    let rendered = render_markdown(&content);
    rsx! {
        div {
            class: "markdown-content {class}",
            dangerous_inner_html: "{rendered}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::render_markdown;

    #[test]
    fn emphasis_becomes_html() {
        let html = render_markdown("**Sorry, I ran into an error.**");
        assert!(html.contains("<strong>Sorry, I ran into an error.</strong>"));
    }

    #[test]
    fn headings_lists_and_links_render() {
        let html = render_markdown("# Summary\n\n- first\n- second\n\n[docs](https://example.com)");
        assert!(html.contains("<h1>Summary</h1>"));
        assert!(html.contains("<li>first</li>"));
        assert!(html.contains("<a href=\"https://example.com\">docs</a>"));
    }

    #[test]
    fn tables_are_enabled() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn plain_text_stays_plain() {
        let html = render_markdown("just words");
        assert!(html.contains("just words"));
        assert!(!html.contains("<strong>"));
    }
}
