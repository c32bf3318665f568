use runbook_idf::Flowable;

/// Anything that contributes block content to a story.
pub trait FlowableBuilder {
    /// Consumes the builder and produces its flowables, in order.
    fn build(self: Box<Self>) -> Vec<Flowable>;

    fn clone_box(&self) -> Box<dyn FlowableBuilder>;
}

impl Clone for Box<dyn FlowableBuilder> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Implements `clone_box` for builders that are `Clone`.
macro_rules! impl_clone_box {
    () => {
        fn clone_box(&self) -> Box<dyn $crate::node::FlowableBuilder> {
            Box::new(self.clone())
        }
    };
}

pub(crate) use impl_clone_box;
