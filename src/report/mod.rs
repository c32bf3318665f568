//! The Terraform ALB + EC2 + Docker setup guide.
//!
//! [`build_story`] assembles the whole document in reading order; each
//! submodule contributes one part of it.

mod architecture;
mod ci_cd;
mod files;
mod front_matter;
mod operations;
mod summary;

use chrono::{Local, NaiveDateTime};
use log::debug;
use runbook_idf::Story;
use runbook_style::{
    BuiltinFont, CellRange, LineSpec, ParagraphStyle, Stylesheet, TableStyleCommand, TextAlign,
    inch,
};
use runbook_template_dsl::builders::Table;
use runbook_template_dsl::{Section, StoryBuilder, titled_section};
use runbook_types::Color;

pub const TITLE: &str = "CustomTitle";
pub const HEADING: &str = "CustomHeading";
pub const SUBHEADING: &str = "SubHeading";
pub const BODY: &str = "CustomBody";
pub const CODE: &str = "Code";

const NAVY: Color = Color::rgb(0x1F, 0x47, 0x88);
const ACCENT: Color = Color::rgb(0x2E, 0x50, 0x90);

/// Values that vary between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportContext {
    pub generated_at: NaiveDateTime,
}

impl ReportContext {
    pub fn new(generated_at: NaiveDateTime) -> Self {
        Self { generated_at }
    }

    pub fn now() -> Self {
        Self::new(Local::now().naive_local())
    }

    /// e.g. `January 15, 2024`
    pub fn generated_date(&self) -> String {
        self.generated_at.format("%B %d, %Y").to_string()
    }

    /// e.g. `January 15, 2024 at 10:30:00`
    pub fn generated_timestamp(&self) -> String {
        self.generated_at.format("%B %d, %Y at %H:%M:%S").to_string()
    }
}

/// The sample styles plus the guide's own title, heading, body and code styles.
pub fn stylesheet() -> Stylesheet {
    Stylesheet::sample()
        .with_style(
            ParagraphStyle::new(TITLE)
                .parent("Heading1")
                .font(BuiltinFont::HelveticaBold)
                .font_size(24.0)
                .text_color(NAVY)
                .space_after(30.0)
                .alignment(TextAlign::Center),
        )
        .with_style(
            ParagraphStyle::new(HEADING)
                .parent("Heading2")
                .font(BuiltinFont::HelveticaBold)
                .font_size(14.0)
                .text_color(ACCENT)
                .space_before(12.0)
                .space_after(12.0),
        )
        .with_style(
            ParagraphStyle::new(SUBHEADING)
                .parent("Heading3")
                .font(BuiltinFont::HelveticaBold)
                .font_size(11.0)
                .text_color(NAVY)
                .space_before(8.0)
                .space_after(10.0),
        )
        .with_style(
            ParagraphStyle::new(BODY)
                .parent("BodyText")
                .font_size(10.0)
                .alignment(TextAlign::Justify)
                .space_after(10.0),
        )
        .with_style(
            ParagraphStyle::new(CODE)
                .parent("Normal")
                .font(BuiltinFont::Courier)
                .font_size(8.0)
                .text_color(Color::rgb(0x33, 0x33, 0x33))
                .back_color(Color::rgb(0xF5, 0xF5, 0xF5))
                .left_indent(10.0)
                .right_indent(10.0)
                .space_after(6.0),
        )
}

/// Assembles the complete guide in reading order.
pub fn build_story(ctx: &ReportContext) -> Story {
    let mut story = StoryBuilder::new();
    front_matter::append(&mut story, ctx);
    architecture::append(&mut story);
    files::append(&mut story);
    operations::append(&mut story);
    ci_cd::append(&mut story);
    summary::append(&mut story, ctx);

    let story = story.build();
    debug!("Report story holds {} flowables", story.len());
    story
}

/// A numbered top-level section, bookmarked at the outline root.
fn section(title: &str) -> Section {
    titled_section(title, HEADING, 0)
}

/// A subsection, bookmarked beneath its section.
fn subsection(title: &str) -> Section {
    titled_section(title, SUBHEADING, 1)
}

/// A grid whose first row is a shaded, bold header.
fn header_table<const N: usize>(
    header: [&str; N],
    body: &[[&str; N]],
    widths_in: [f32; N],
    font_size: f32,
    bottom_padding: f32,
) -> Table {
    body.iter()
        .fold(Table::new().header_row(header), |table, row| table.row(*row))
        .col_widths(widths_in.map(inch))
        .command(CellRange::row(0), TableStyleCommand::Background(ACCENT))
        .command(CellRange::row(0), TableStyleCommand::TextColor(Color::WHITE_SMOKE))
        .command(CellRange::all(), TableStyleCommand::Align(TextAlign::Left))
        .command(CellRange::row(0), TableStyleCommand::FontName(BuiltinFont::HelveticaBold))
        .command(CellRange::all(), TableStyleCommand::FontSize(font_size))
        .command(CellRange::all(), TableStyleCommand::BottomPadding(bottom_padding))
        .command(
            CellRange::all(),
            TableStyleCommand::Grid(LineSpec {
                width: 1.0,
                color: Color::LIGHT_GREY,
            }),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use runbook_idf::Flowable;

    fn context() -> ReportContext {
        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|d| d.and_hms_opt(9, 7, 3))
            .unwrap();
        ReportContext::new(at)
    }

    #[test]
    fn dates_are_spelled_out() {
        let ctx = context();
        assert_eq!(ctx.generated_date(), "March 05, 2024");
        assert_eq!(ctx.generated_timestamp(), "March 05, 2024 at 09:07:03");
    }

    #[test]
    fn custom_styles_inherit_from_samples() {
        let sheet = stylesheet();

        let title = sheet.resolve(TITLE).unwrap();
        assert_eq!(title.font_size, 24.0);
        assert_eq!(title.leading, 22.0);
        assert_eq!(title.alignment, TextAlign::Center);
        assert_eq!(title.text_color, NAVY);

        let body = sheet.resolve(BODY).unwrap();
        assert_eq!(body.space_before, 6.0);
        assert_eq!(body.space_after, 10.0);
        assert_eq!(body.alignment, TextAlign::Justify);

        let code = sheet.resolve(CODE).unwrap();
        assert_eq!(code.font, BuiltinFont::Courier);
        assert_eq!(code.leading, 12.0);
        assert_eq!((code.left_indent, code.right_indent), (10.0, 10.0));
        assert!(code.back_color.is_some());
    }

    #[test]
    fn story_opens_with_title_page() {
        let story = build_story(&context());
        let kinds: Vec<&str> = story.iter().take(4).map(Flowable::kind).collect();
        assert_eq!(kinds, ["Spacer", "Paragraph", "Paragraph", "Spacer"]);
        assert!(matches!(
            story.iter().nth(4),
            Some(Flowable::Paragraph { text, .. }) if text == "Generated: March 05, 2024"
        ));
    }

    #[test]
    fn every_style_in_the_story_exists() {
        let sheet = stylesheet();
        for flowable in &build_story(&context()) {
            if let Flowable::Paragraph { style, .. } | Flowable::Preformatted { style, .. } = flowable {
                assert!(sheet.resolve(style).is_ok(), "unknown style {}", style);
            }
        }
    }

    #[test]
    fn code_blocks_are_preformatted() {
        let story = build_story(&context());
        let code = story
            .iter()
            .find_map(|f| match f {
                Flowable::Preformatted { text, .. } if text.starts_with("terraform {") => Some(text),
                _ => None,
            })
            .unwrap();
        assert!(code.contains("\n  required_providers {\n"));
    }

    #[test]
    fn summary_table_has_header_and_nine_rows() {
        let story = build_story(&context());
        let table = story
            .iter()
            .filter_map(|f| match f {
                Flowable::Table(t) => Some(t),
                _ => None,
            })
            .last()
            .unwrap();
        assert_eq!(table.row_count(), 10);
        assert_eq!(table.rows[0], ["Component", "Details", "Status"]);
        assert_eq!(table.repeat_rows, 1);
        assert_eq!(table.col_widths.len(), 3);
        assert_eq!(table.col_widths[2], 72.0);
    }
}
