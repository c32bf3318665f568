use crate::builders::{Paragraph, Spacer};
use crate::node::{FlowableBuilder, impl_clone_box};
use runbook_idf::Flowable;

/// An outlined heading followed by its content.
#[derive(Clone)]
pub struct Section {
    heading: Paragraph,
    children: Vec<Box<dyn FlowableBuilder>>,
}

impl Section {
    pub fn child(mut self, child: impl FlowableBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl FlowableBuilder for Section {
    fn build(self: Box<Self>) -> Vec<Flowable> {
        let mut flowables = Box::new(self.heading).build();
        for child in self.children {
            flowables.extend(child.build());
        }
        flowables
    }

    impl_clone_box!();
}

/// Starts a section whose heading is a bookmark at `level`.
pub fn titled_section(title: &str, heading_style: &str, level: u8) -> Section {
    Section {
        heading: heading(title, heading_style, level),
        children: Vec::new(),
    }
}

pub fn heading(text: &str, style_name: &str, level: u8) -> Paragraph {
    Paragraph::new(text).style_name(style_name).outline(level)
}

pub fn p(text: &str, style_name: &str) -> Paragraph {
    Paragraph::new(text).style_name(style_name)
}

/// Vertical gap in inches.
pub fn gap(inches: f32) -> Spacer {
    Spacer::vertical(runbook_style::inch(inches))
}
