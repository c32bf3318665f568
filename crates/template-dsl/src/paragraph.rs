use crate::node::{FlowableBuilder, impl_clone_box};
use runbook_idf::{Flowable, OutlineMark};

/// Drops blank lines at both ends of a text block, so literals may start and
/// end on their own lines.
pub(crate) fn trim_block(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last]
            .iter()
            .map(|l| l.trim_end())
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}

/// Builder for a reflowed paragraph. Line breaks in the text are kept,
/// everything else is wrapped to the frame width.
#[derive(Debug, Clone)]
pub struct Paragraph {
    text: String,
    style_name: String,
    outline: Option<OutlineMark>,
}

impl Paragraph {
    pub fn new(text: &str) -> Self {
        Self {
            text: trim_block(text),
            style_name: "Normal".to_string(),
            outline: None,
        }
    }

    pub fn style_name(mut self, name: &str) -> Self {
        self.style_name = name.to_string();
        self
    }

    /// Lists this paragraph in the document outline at the given depth.
    pub fn outline(mut self, level: u8) -> Self {
        self.outline = Some(OutlineMark { level, title: None });
        self
    }
}

impl FlowableBuilder for Paragraph {
    fn build(self: Box<Self>) -> Vec<Flowable> {
        vec![Flowable::Paragraph {
            text: self.text,
            style: self.style_name,
            outline: self.outline,
        }]
    }

    impl_clone_box!();
}

/// Builder for a preformatted code block. Indentation and spacing survive
/// layout verbatim.
#[derive(Debug, Clone)]
pub struct Code {
    text: String,
    style_name: String,
}

impl Code {
    pub fn new(text: &str) -> Self {
        Self {
            text: trim_block(text),
            style_name: "Code".to_string(),
        }
    }

    pub fn style_name(mut self, name: &str) -> Self {
        self.style_name = name.to_string();
        self
    }
}

impl FlowableBuilder for Code {
    fn build(self: Box<Self>) -> Vec<Flowable> {
        vec![Flowable::Preformatted {
            text: self.text,
            style: self.style_name,
        }]
    }

    impl_clone_box!();
}
