use std::sync::LazyLock;

use scraper::{Html, Node, Selector};

static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid paragraph selector"));

/// Text content of every `<p>` element, in document order.
///
/// The page is parsed the way a browser would, so unclosed paragraphs end
/// where the next block starts and markup inside scripts or comments is not
/// mistaken for paragraphs. `<br>` becomes a newline. Paragraphs that are
/// empty after trimming are dropped.
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&PARAGRAPH)
        .map(|paragraph| {
            let mut text = String::new();
            for node in paragraph.descendants() {
                match node.value() {
                    Node::Text(chunk) => text.push_str(chunk),
                    Node::Element(element) if element.name() == "br" => text.push('\n'),
                    _ => {}
                }
            }
            text.trim().to_string()
        })
        .filter(|text| !text.is_empty())
        .collect()
}
