use crate::node::{FlowableBuilder, impl_clone_box};
use runbook_idf::Flowable;

/// Fixed vertical space, in points.
#[derive(Debug, Clone, Copy)]
pub struct Spacer {
    width: f32,
    height: f32,
}

impl Spacer {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A spacer of the given height; the width is irrelevant to layout.
    pub fn vertical(height: f32) -> Self {
        Self::new(1.0, height)
    }
}

impl FlowableBuilder for Spacer {
    fn build(self: Box<Self>) -> Vec<Flowable> {
        vec![Flowable::Spacer {
            width: self.width,
            height: self.height,
        }]
    }

    impl_clone_box!();
}

/// Forces the following content onto a new page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageBreak;

impl FlowableBuilder for PageBreak {
    fn build(self: Box<Self>) -> Vec<Flowable> {
        vec![Flowable::PageBreak]
    }

    impl_clone_box!();
}
