use scraper::{ElementRef, Node};

/// Elements whose start begins a new visual line.
const LINE_BREAKING: [&str; 4] = ["br", "p", "div", "li"];

/// Collects all text below `element`, turning `<br>` and block starts into `\n`
/// so that items stacked inside one table cell can be split apart again.
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in element.descendants().skip(1) {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if LINE_BREAKING.contains(&el.name()) => out.push('\n'),
            _ => {}
        }
    }
    out
}

/// Splits cell text on line breaks, trims every line and drops lines of at
/// most one character.
pub fn split_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.chars().count() > 1)
        .map(ToOwned::to_owned)
        .collect()
}
