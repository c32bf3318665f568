//! A fluent, code-based API for assembling documents.
//!
//! Each builder describes one block of content and turns into one or more
//! [`Flowable`](runbook_idf::Flowable)s. Builders compose through the
//! [`FlowableBuilder`] trait, so small "widget functions" returning
//! pre-configured builders are the way to share layout between sections.
//!
//! ```ignore
//! use runbook_template_dsl::builders::*;
//! use runbook_template_dsl::{StoryBuilder, titled_section};
//!
//! let story = StoryBuilder::new()
//!     .add(Paragraph::new("Infrastructure Guide").style_name("Title"))
//!     .add(
//!         titled_section("1. Overview", "Heading2", 0)
//!             .child(Paragraph::new("Two public subnets behind one ALB."))
//!             .child(Code::new("terraform init")),
//!     )
//!     .add(PageBreak)
//!     .build();
//! ```

mod misc;
mod node;
mod paragraph;
mod story;
mod table;
mod widgets;


/// Contains all the building blocks for creating a story.
///
/// Import with `use runbook_template_dsl::builders::*;` for convenience.
pub mod builders {
    pub use super::misc::{PageBreak, Spacer};
    pub use super::paragraph::{Code, Paragraph};
    pub use super::table::Table;
}

pub use self::node::FlowableBuilder;
pub use self::story::StoryBuilder;
pub use self::widgets::*;
