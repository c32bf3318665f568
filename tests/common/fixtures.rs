#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use runbook::report::{self, ReportContext};
use runbook::{PipelineBuilder, ReportConfig, Story};

/// 2024-01-15 10:30:00, the generation time used throughout the tests
pub fn fixed_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(10, 30, 0))
        .expect("valid fixture date")
}

pub fn report_story() -> Story {
    report::build_story(&ReportContext::new(fixed_date()))
}

pub fn report_builder() -> PipelineBuilder {
    PipelineBuilder::from_config(&ReportConfig::default(), fixed_date())
}

/// Every heading of the guide, in reading order
pub const HEADINGS: [&str; 40] = [
    "TABLE OF CONTENTS",
    "1. ARCHITECTURE OVERVIEW",
    "Key Components:",
    "2. INFRASTRUCTURE COMPONENTS",
    "2.1 Virtual Private Cloud (VPC)",
    "2.2 Application Load Balancer",
    "2.3 Auto Scaling Group",
    "2.4 EC2 Instances",
    "2.5 Security Groups",
    "3. FILE STRUCTURE & CODE",
    "3.1 Project Layout",
    "3.2 Provider Configuration (provider.tf)",
    "3.3 Variables (variables.tf)",
    "3.4 VPC & Networking (vpc.tf)",
    "3.5 Security Groups (security.tf)",
    "3.6 Load Balancer (alb.tf)",
    "3.7 Auto Scaling Group (asg.tf - Key Sections)",
    "4. DEPLOYMENT INSTRUCTIONS",
    "4.1 Prerequisites",
    "4.2 Step-by-Step Deployment",
    "4.3 Accessing the Application",
    "4.4 Common Terraform Commands",
    "5. CONFIGURATION DETAILS",
    "5.1 terraform.tfvars Values",
    "5.2 User Data Script Breakdown",
    "6. TROUBLESHOOTING GUIDE",
    "6.1 502 Bad Gateway Error",
    "6.2 State Lock Issues",
    "6.3 Debugging Commands",
    "7. MONITORING & SCALING",
    "7.1 Auto Scaling Policies",
    "7.2 CloudWatch Monitoring",
    "8. GITHUB ACTIONS CI/CD PIPELINE",
    "8.1 Workflow Overview",
    "8.2 Key Features",
    "8.3 Workflow File (terraform.yml)",
    "9. SUMMARY & BEST PRACTICES",
    "9.1 Infrastructure Summary",
    "9.2 Best Practices",
    "9.3 Useful Resources",
];
