use crate::node::FlowableBuilder;
use runbook_idf::{Flowable, Story};

/// Accumulates builders in order and produces the final [`Story`].
#[derive(Clone, Default)]
pub struct StoryBuilder {
    children: Vec<Box<dyn FlowableBuilder>>,
}

impl StoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, child: impl FlowableBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn push(&mut self, child: impl FlowableBuilder + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn build(self) -> Story {
        self.children
            .into_iter()
            .flat_map(|child| child.build())
            .collect()
    }
}

impl FlowableBuilder for StoryBuilder {
    fn build(self: Box<Self>) -> Vec<Flowable> {
        StoryBuilder::build(*self).into_iter().collect()
    }

    fn clone_box(&self) -> Box<dyn FlowableBuilder> {
        Box::new(self.clone())
    }
}
