use std::collections::{HashMap, HashSet};

/// Render module Markdown to HTML that is safe for `dangerous_inner_html`.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);
    options.insert(pulldown_cmark::Options::ENABLE_TASKLISTS);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "hr", "em", "strong", "del", "code", "pre",
        "blockquote", "ul", "ol", "li", "a", "table", "thead", "tbody", "tr", "th", "td", "input",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());
    // Fenced blocks carry `language-*` classes; task lists render disabled checkboxes.
    attributes.insert("code", ["class"].into_iter().collect());
    attributes.insert("input", ["type", "checked", "disabled"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}
