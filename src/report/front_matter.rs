//! Title page, project summary and table of contents.

use super::{ACCENT, BODY, HEADING, ReportContext, TITLE};
use runbook_style::{BuiltinFont, CellRange, LineSpec, TableStyleCommand, TextAlign, inch};
use runbook_template_dsl::builders::{PageBreak, Table};
use runbook_template_dsl::{StoryBuilder, gap, heading, p};
use runbook_types::Color;

const KEY_INFO: [[&str; 2]; 6] = [
    ["Project", "Terraform ALB EC2 Docker"],
    ["Region", "AWS ap-south-1 (Mumbai)"],
    ["Infrastructure", "ALB + ASG + EC2 + VPC"],
    ["Containerization", "Docker (Nginx + Java)"],
    ["CI/CD", "GitHub Actions"],
    ["Repository", "Chettipellysrilatha/terraform-alb-ec2-docker"],
];

const CONTENTS: [&str; 8] = [
    "1. Architecture Overview",
    "2. Infrastructure Components",
    "3. File Structure & Code",
    "4. Deployment Instructions",
    "5. Configuration Details",
    "6. Troubleshooting Guide",
    "7. Monitoring & Scaling",
    "8. GitHub Actions CI/CD Pipeline",
];

pub(super) fn append(story: &mut StoryBuilder, ctx: &ReportContext) {
    story.push(gap(1.0));
    story.push(p("TERRAFORM ALB + EC2 + DOCKER", TITLE));
    story.push(p("Infrastructure as Code Setup Guide", "Normal"));
    story.push(gap(0.3));
    story.push(p(&format!("Generated: {}", ctx.generated_date()), "Normal"));
    story.push(gap(0.5));
    story.push(key_info_table());
    story.push(PageBreak);

    story.push(heading("TABLE OF CONTENTS", HEADING, 0));
    for entry in CONTENTS {
        story.push(p(entry, BODY));
    }
    story.push(PageBreak);
}

/// Label column shaded, values plain, all cells boxed in black.
fn key_info_table() -> Table {
    let label = CellRange::column(0);
    Table::from_rows(KEY_INFO)
        .col_widths([inch(1.5), inch(4.5)])
        .command(label, TableStyleCommand::Background(ACCENT))
        .command(label, TableStyleCommand::TextColor(Color::WHITE_SMOKE))
        .command(CellRange::all(), TableStyleCommand::Align(TextAlign::Left))
        .command(label, TableStyleCommand::FontName(BuiltinFont::HelveticaBold))
        .command(label, TableStyleCommand::FontSize(10.0))
        .command(CellRange::all(), TableStyleCommand::BottomPadding(12.0))
        .command(
            CellRange::all(),
            TableStyleCommand::Grid(LineSpec {
                width: 1.0,
                color: Color::BLACK,
            }),
        )
}
