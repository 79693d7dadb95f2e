//! Markdown rendering for plan output.

use pulldown_cmark::{Options, Parser, html};

/// Convert agent markdown to HTML. Tables are enabled since the team-lead
/// instructions ask for them.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_lists() {
        let html = markdown_to_html("## Breakfast\n- Poha\n- Chai");
        assert!(html.contains("<h2>Breakfast</h2>"));
        assert!(html.contains("<li>Poha</li>"));
    }

    #[test]
    fn renders_tables() {
        let html = markdown_to_html("| Meal | Food |\n|---|---|\n| Breakfast | Poha |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>Poha</td>"));
    }
}
