use crate::error::{ChartError, ChartResult};
use crate::render::{Document, Element, NodeId, Renderer};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Serializes the chart root under a container into standalone SVG markup.
///
/// Only the `svg` subtree is written; HTML overlays such as the tooltip
/// live outside it and are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgRenderer {
    container_id: String,
    last_markup: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            last_markup: None,
        }
    }

    #[must_use]
    pub fn last_markup(&self) -> Option<&str> {
        self.last_markup.as_deref()
    }

    #[must_use]
    pub fn into_markup(self) -> Option<String> {
        self.last_markup
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, document: &Document) -> ChartResult<()> {
        let container = document.select_by_id(&self.container_id).ok_or_else(|| {
            ChartError::InvalidData(format!("container `#{}` not found", self.container_id))
        })?;
        let root = document
            .children(container)
            .iter()
            .copied()
            .find(|id| document.element(*id).is_some_and(|e| e.tag == "svg"))
            .ok_or_else(|| {
                ChartError::InvalidData(format!(
                    "container `#{}` holds no chart root",
                    self.container_id
                ))
            })?;

        let mut markup = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        write_node(document, root, true, &mut markup);
        markup.push('\n');
        self.last_markup = Some(markup);
        Ok(())
    }
}

fn write_node(document: &Document, id: NodeId, is_root: bool, out: &mut String) {
    let Some(element) = document.element(id) else {
        return;
    };

    out.push('<');
    out.push_str(&element.tag);
    if is_root && element.attr("xmlns").is_none() {
        write_attr(out, "xmlns", SVG_NAMESPACE);
    }
    if !element.classes.is_empty() {
        write_attr(out, "class", &element.classes.join(" "));
    }
    for (name, value) in &element.attrs {
        write_attr(out, name, value);
    }
    if !element.style.is_empty() {
        write_attr(out, "style", &style_value(element));
    }

    let children = element.children();
    if children.is_empty() && element.text.is_none() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    if let Some(text) = &element.text {
        out.push_str(&escape(text));
    }
    for child in children {
        write_node(document, *child, false, out);
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn style_value(element: &Element) -> String {
    element
        .style
        .iter()
        .map(|(name, value)| format!("{name}:{value}"))
        .collect::<Vec<_>>()
        .join(";")
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::SvgRenderer;
    use crate::render::{Document, Renderer};

    #[test]
    fn serializes_nested_elements_with_escaping() {
        let mut document = Document::with_container("scatter");
        let container = document.select_by_id("scatter").expect("container");
        let svg = document.append_element(container, "svg").expect("svg");
        document.set_attr(svg, "width", "800").expect("attr");
        let text = document.append_element(svg, "text").expect("text");
        document.add_class(text, "stateText").expect("class");
        document.set_text(text, "A&B").expect("text");

        let mut renderer = SvgRenderer::new("scatter");
        renderer.render(&document).expect("render");

        let markup = renderer.last_markup().expect("markup");
        assert!(markup.contains(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"800\"><text class=\"stateText\">A&amp;B</text></svg>"
        ));
    }

    #[test]
    fn missing_chart_root_is_reported() {
        let document = Document::with_container("scatter");
        let mut renderer = SvgRenderer::new("scatter");
        assert!(renderer.render(&document).is_err());
        assert!(renderer.last_markup().is_none());
    }
}
