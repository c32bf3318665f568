//! Sections 1 and 2: what gets deployed and how each piece is configured.

use super::{BODY, SUBHEADING, header_table, section, subsection};
use runbook_template_dsl::builders::{Code, PageBreak};
use runbook_template_dsl::{StoryBuilder, gap, heading, p};

const OVERVIEW: &str = "This infrastructure deploys a highly available, auto-scaling web \
application on AWS using Terraform. The setup includes a VPC with public subnets, an \
Application Load Balancer (ALB) for traffic distribution, an Auto Scaling Group (ASG) \
managing EC2 instances, and Docker containers running Nginx and a Java application.";

const COMPONENTS: [[&str; 2]; 8] = [
    ["VPC", "10.0.0.0/16 - Isolated network with 2 public subnets"],
    ["Internet Gateway", "Enables internet connectivity for public resources"],
    ["ALB", "Distributes incoming traffic across healthy EC2 instances"],
    ["Target Group", "Health checks and traffic routing to instances"],
    ["ASG", "Automatically scales EC2 instances (2-6) based on CPU utilization"],
    ["Launch Template", "Defines EC2 instance configuration and user data"],
    ["Security Groups", "Controls inbound/outbound traffic rules"],
    ["CloudWatch", "Monitors metrics and triggers scaling policies"],
];

const VPC: &str = r#"
CIDR Block: 10.0.0.0/16
Public Subnets:
  - Subnet 1: 10.0.1.0/24 (ap-south-1a)
  - Subnet 2: 10.0.2.0/24 (ap-south-1b)
Internet Gateway: Attached to VPC
Route Table: Public subnets route 0.0.0.0/0 through IGW
"#;

const ALB: &str = r#"
ALB Configuration:
  - Type: Application Load Balancer
  - Scheme: Internet-facing
  - Subnets: Both public subnets (for high availability)
  - Security Group: Allows inbound on port 80 from 0.0.0.0/0

Target Group:
  - Protocol: HTTP on port 80
  - Health Check: Path /, Interval 30s, Timeout 5s
  - Healthy Threshold: 2, Unhealthy: 2
  - Matcher: HTTP status 200
"#;

const ASG: &str = r#"
ASG Configuration:
  - Min Size: 2 instances
  - Max Size: 6 instances
  - Desired Capacity: 3 instances
  - Launch Template: app-template (Version 4)
  - Health Check Type: ELB
  - Health Check Grace Period: 300 seconds

Scaling Policies:
  - Scale Up: CPU > 70% (add 1 instance)
  - Scale Down: CPU < 30% (remove 1 instance)
  - Evaluation: 2 consecutive periods, 5-minute intervals
"#;

const EC2: &str = r#"
Instance Configuration:
  - AMI: Ubuntu 22.04 LTS (Canonical)
  - Instance Type: t2.small
  - Root Volume: 20 GB gp2
  - Security Group: app-sg (allows port 80 from ALB)
  - Availability: Distributed across 2 AZs

User Data Script:
  ✓ Updates system packages (apt-get)
  ✓ Installs Java 11 (OpenJDK)
  ✓ Installs Docker
  ✓ Starts Docker daemon and enables auto-start
  ✓ Runs Nginx container on port 80
  ✓ Runs Java application on port 8080
"#;

const SECURITY_GROUPS: &str = r#"
ALB Security Group (alb-sg):
  - Inbound: 0.0.0.0/0 on port 80 (HTTP)
  - Outbound: All traffic allowed

EC2 Security Group (app-sg):
  - Inbound: app-sg (ALB SG) on port 80 only
  - Outbound: All traffic allowed

Purpose: Restrict traffic - only ALB can reach instances
"#;

pub(super) fn append(story: &mut StoryBuilder) {
    story.push(
        section("1. ARCHITECTURE OVERVIEW")
            .child(p(OVERVIEW, BODY))
            .child(gap(0.15))
            .child(heading("Key Components:", SUBHEADING, 1))
            .child(header_table(
                ["Component", "Purpose"],
                &COMPONENTS,
                [1.5, 4.5],
                9.0,
                8.0,
            )),
    );
    story.push(PageBreak);

    story.push(
        section("2. INFRASTRUCTURE COMPONENTS")
            .child(subsection("2.1 Virtual Private Cloud (VPC)").child(Code::new(VPC)))
            .child(gap(0.15))
            .child(subsection("2.2 Application Load Balancer").child(Code::new(ALB)))
            .child(gap(0.15))
            .child(subsection("2.3 Auto Scaling Group").child(Code::new(ASG)))
            .child(PageBreak)
            .child(subsection("2.4 EC2 Instances").child(Code::new(EC2)))
            .child(gap(0.15))
            .child(subsection("2.5 Security Groups").child(Code::new(SECURITY_GROUPS))),
    );
    story.push(PageBreak);
}
