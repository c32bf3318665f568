//! Section 9 and the closing lines.

use super::{BODY, ReportContext, header_table, section, subsection};
use runbook_template_dsl::builders::PageBreak;
use runbook_template_dsl::{StoryBuilder, gap, p};

const INFRASTRUCTURE: [[&str; 3]; 9] = [
    ["VPC", "10.0.0.0/16, 2 public subnets", "Active"],
    ["IGW", "Internet Gateway attached", "Active"],
    ["ALB", "Internet-facing, HTTP port 80", "Active"],
    ["Target Group", "Port 80, health check /, matcher 200", "Active"],
    ["ASG", "2-6 instances, desired 3", "Active"],
    ["Launch Template", "Ubuntu 22.04, t2.small, Docker", "v4"],
    ["Scaling Policies", "CPU >70% (up), <30% (down)", "Active"],
    ["Security Groups", "ALB SG + App SG with restrictions", "Active"],
    ["State Backend", "S3 + DynamoDB locks", "Configured"],
];

const BEST_PRACTICES: &str = r#"
Infrastructure as Code:
  ✓ Keep code in version control (Git)
  ✓ Use meaningful variable names
  ✓ Separate concerns (provider, vpc, security, etc.)
  ✓ Always use terraform.tfvars for values

State Management:
  ✓ Use S3 backend with encryption enabled
  ✓ Enable versioning on S3 bucket
  ✓ Use DynamoDB for state locking
  ✓ Never commit .tfstate files to Git
  ✓ Use -lock=false only for read-only CI/CD operations

Security:
  ✓ Use security groups to restrict traffic
  ✓ Follow principle of least privilege
  ✓ Don't expose sensitive data in code
  ✓ Use IAM roles with minimal permissions
  ✓ Enable S3 encryption and versioning

Scaling & Performance:
  ✓ Monitor CloudWatch metrics regularly
  ✓ Set appropriate CPU thresholds (avoid rapid scaling)
  ✓ Use health checks for instance validation
  ✓ Keep cooldown periods reasonable (300s)
  ✓ Test scaling policies in non-production first

CI/CD & Deployment:
  ✓ Always run terraform plan before apply
  ✓ Review plan output carefully
  ✓ Use separate environments (dev, staging, prod)
  ✓ Implement approval gates for production changes
  ✓ Keep Terraform versions consistent across team

Documentation:
  ✓ Document all variables and outputs
  ✓ Maintain README for infrastructure overview
  ✓ Track changes in Git commit messages
  ✓ Create runbooks for common operations
  ✓ Document troubleshooting procedures
"#;

const RESOURCES: &str = r#"
Official Documentation:
  • Terraform AWS Provider: https://registry.terraform.io/providers/hashicorp/aws
  • Terraform Language: https://www.terraform.io/docs
  • AWS EC2 Documentation: https://docs.aws.amazon.com/ec2/

Repository:
  • GitHub: https://github.com/Chettipellysrilatha/terraform-alb-ec2-docker
  • Main Branch: Contains latest infrastructure code
  • README.md: Quick reference and setup instructions

Quick Commands:
  • Deploy: terraform init && terraform apply tfplan
  • Destroy: terraform destroy
  • View Outputs: terraform output
  • Check State: terraform state list

AWS Console:
  • EC2 Instances: Check instance health and status
  • Load Balancers: View ALB and target group health
  • Auto Scaling: Monitor scaling events and policies
  • CloudWatch: View metrics and alarms
  • S3: Verify state file backups and versions
"#;

pub(super) fn append(story: &mut StoryBuilder, ctx: &ReportContext) {
    story.push(
        section("9. SUMMARY & BEST PRACTICES")
            .child(
                subsection("9.1 Infrastructure Summary").child(header_table(
                    ["Component", "Details", "Status"],
                    &INFRASTRUCTURE,
                    [1.3, 2.7, 1.0],
                    8.0,
                    6.0,
                )),
            )
            .child(gap(0.2))
            .child(subsection("9.2 Best Practices").child(p(BEST_PRACTICES, BODY)))
            .child(PageBreak)
            .child(subsection("9.3 Useful Resources").child(p(RESOURCES, BODY))),
    );
    story.push(gap(0.3));
    story.push(p(&format!("Generated: {}", ctx.generated_timestamp()), "Italic"));
    story.push(p("Project: Terraform ALB + EC2 + Docker Infrastructure", "Italic"));
}
