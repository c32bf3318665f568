mod common;

use common::{TestResult, generate_pdf};
use runbook::report::{BODY, HEADING};
use runbook::{LayoutConfig, PipelineBuilder, PipelineError, Story};
use runbook_layout::LayoutError;
use runbook_style::{Margins, PageLayout, PageSize, Stylesheet, inch};
use runbook_template_dsl::builders::{PageBreak, Table};
use runbook_template_dsl::{StoryBuilder, heading, p};

fn numbered_lines(count: usize) -> String {
    (0..count)
        .map(|i| format!("Line {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_explicit_page_break() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let story = StoryBuilder::new()
        .add(p("Page 1 content", BODY))
        .add(PageBreak)
        .add(p("Page 2 content", BODY))
        .build();

    let pdf = generate_pdf(PipelineBuilder::new(), &story)?;
    assert_pdf_page_count!(pdf, 2);
    assert_pdf_contains_text!(pdf, "Page 1 content");
    assert_pdf_contains_text!(pdf, "Page 2 content");
    Ok(())
}

#[test]
fn test_consecutive_page_breaks_do_not_leave_blank_pages() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let story = StoryBuilder::new()
        .add(p("Before", BODY))
        .add(PageBreak)
        .add(PageBreak)
        .add(p("After", BODY))
        .add(PageBreak)
        .build();

    let pdf = generate_pdf(PipelineBuilder::new(), &story)?;
    assert_pdf_page_count!(pdf, 2);
    Ok(())
}

#[test]
fn test_empty_story_renders_one_page() -> TestResult {
    let pdf = generate_pdf(PipelineBuilder::new(), &Story::new())?;
    assert_pdf_page_count!(pdf, 1);
    Ok(())
}

#[test]
fn test_long_paragraph_keeps_every_line() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let story = StoryBuilder::new().add(p(&numbered_lines(120), BODY)).build();
    let pipeline = PipelineBuilder::new().build()?;
    let laid_out = pipeline.layout(&story)?;

    // 12pt leading in a 708pt frame: 59 lines per page.
    assert_eq!(laid_out.page_count(), 3);
    let lines: Vec<String> = laid_out
        .pages
        .iter()
        .flat_map(|page| page.text().lines().map(str::to_string).collect::<Vec<_>>())
        .collect();
    assert_eq!(lines.len(), 120);
    assert_eq!(lines[0], "Line 0");
    assert_eq!(lines[59], "Line 59");
    assert_eq!(lines[119], "Line 119");
    assert_eq!(laid_out.pages[1].text().lines().next(), Some("Line 59"));
    Ok(())
}

#[test]
fn test_table_rows_stay_whole_and_header_repeats() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let table = (0..80).fold(Table::new().header_row(["Name", "Value"]), |t, i| {
        t.row([format!("row {}", i), format!("value {}", i)])
    });
    let story = StoryBuilder::new().add(table).build();
    let laid_out = PipelineBuilder::new().build()?.layout(&story)?;

    // 18pt rows: the header plus 38 body rows per page.
    assert_eq!(laid_out.page_count(), 3);
    for page in &laid_out.pages {
        assert_eq!(page.text().lines().next(), Some("Name Value"));
    }
    let all_text: Vec<String> = laid_out.pages.iter().map(|page| page.text()).collect();
    for i in 0..80 {
        let row = format!("row {} value {}", i, i);
        let hits = all_text
            .iter()
            .flat_map(|text| text.lines())
            .filter(|line| *line == row)
            .count();
        assert_eq!(hits, 1, "row {} should be drawn exactly once", i);
    }
    Ok(())
}

#[test]
fn test_outline_entries_point_at_their_pages() -> TestResult {
    let story = StoryBuilder::new()
        .add(heading("First", HEADING, 0))
        .add(PageBreak)
        .add(heading("Second", HEADING, 0))
        .add(heading("Second, detail", HEADING, 1))
        .build();
    let laid_out = PipelineBuilder::new().build()?.layout(&story)?;

    let pages: Vec<(&str, u8, usize)> = laid_out
        .outline
        .iter()
        .map(|e| (e.title.as_str(), e.level, e.page_index))
        .collect();
    assert_eq!(
        pages,
        vec![("First", 0, 0), ("Second", 0, 1), ("Second, detail", 1, 1)]
    );
    Ok(())
}

#[test]
fn test_unknown_style_fails_layout() {
    let story = StoryBuilder::new().add(p("text", "NoSuchStyle")).build();
    let result = PipelineBuilder::new()
        .build()
        .and_then(|pipeline| pipeline.generate(&story, &mut Vec::<u8>::new()));
    assert!(matches!(
        result,
        Err(PipelineError::Layout(LayoutError::Style(_)))
    ));
}

#[test]
fn test_custom_stylesheet_replaces_report_styles() -> TestResult {
    let pipeline = PipelineBuilder::new()
        .with_stylesheet(Stylesheet::sample())
        .build()?;
    let ok = StoryBuilder::new().add(p("plain", "Normal")).build();
    assert_eq!(pipeline.layout(&ok)?.page_count(), 1);

    let custom = StoryBuilder::new().add(p("styled", BODY)).build();
    assert!(pipeline.layout(&custom).is_err());
    Ok(())
}

#[test]
fn test_page_layout_and_frame_padding() -> TestResult {
    let pipeline = PipelineBuilder::new()
        .with_page_layout(PageLayout {
            size: PageSize::A4,
            margins: Margins::all(inch(1.0)),
        })
        .with_layout_config(LayoutConfig {
            frame_padding: 0.0,
            ..Default::default()
        })
        .build()?;
    let frame = pipeline.engine().frame();
    assert_eq!((frame.x, frame.y), (72.0, 72.0));

    let laid_out = pipeline.layout(&Story::new())?;
    assert_eq!(laid_out.page_width, 595.28);
    Ok(())
}

#[test]
fn test_oversized_margins_are_rejected() {
    let result = PipelineBuilder::new()
        .with_page_layout(PageLayout {
            size: PageSize::Letter,
            margins: Margins::all(inch(5.0)),
        })
        .build();
    assert!(matches!(result, Err(PipelineError::Config(_))));
}

#[test]
fn test_generate_to_file_creates_parent_directories() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("a").join("b").join("out.pdf");
    let story = StoryBuilder::new().add(p("hello", BODY)).build();

    let pages = PipelineBuilder::new().build()?.generate_to_file(&story, &path)?;
    assert_eq!(pages, 1);
    assert!(std::fs::metadata(&path)?.len() > 0);
    Ok(())
}

#[test]
fn test_failed_layout_leaves_existing_file_untouched() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("guide.pdf");
    std::fs::write(&path, b"previous report")?;

    let pipeline = PipelineBuilder::new()
        .with_page_layout(PageLayout {
            size: PageSize::Custom {
                width: 612.0,
                height: 100.0,
            },
            margins: Margins::all(inch(0.25)),
        })
        .build()?;
    let story = StoryBuilder::new()
        .add(Table::from_rows([vec![numbered_lines(10)]]))
        .build();

    let result = pipeline.generate_to_file(&story, &path);
    assert!(matches!(
        result,
        Err(PipelineError::Layout(LayoutError::ElementTooLarge(..)))
    ));
    assert_eq!(std::fs::read(&path)?, b"previous report");
    Ok(())
}
