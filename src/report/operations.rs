//! Sections 4 to 7: deploying, configuring, troubleshooting and scaling.

use super::{BODY, section, subsection};
use runbook_template_dsl::builders::{Code, PageBreak};
use runbook_template_dsl::{StoryBuilder, gap, p};

const PREREQUISITES: &str = r#"
✓ AWS Account with appropriate IAM permissions
✓ AWS CLI configured with credentials
✓ Terraform 1.5+ installed
✓ Git installed
✓ GitHub account with repository access

S3 Bucket: terraform-state-srilatha-001
DynamoDB Table: terraform-locks
  - Partition Key: LockID (String)
"#;

const DEPLOY_STEPS: &str = r#"
1. Clone Repository
   git clone https://github.com/Chettipellysrilatha/terraform-alb-ec2-docker.git
   cd terraform-alb-ec2-docker

2. Initialize Terraform
   terraform init
   (Initializes backend, downloads providers, validates state)

3. Format & Validate
   terraform fmt -recursive
   terraform validate

4. Plan Deployment
   terraform plan -out=tfplan

5. Apply Configuration
   terraform apply tfplan
   (Creates all AWS resources)

6. Get Outputs
   terraform output alb_url
   (Use this URL to access your application)

7. Verify Deployment
   - Check ALB in AWS Console
   - Verify target group health checks
   - Monitor ASG scaling events
   - Test application at ALB URL
"#;

const ACCESS: &str = r#"
After successful deployment:

1. Get ALB URL:
   terraform output alb_url

2. Open in Browser:
   http://<alb_url>

3. Expected Response:
   - Nginx default page (port 80) from ALB
   - Java application (port 8080) on backend

4. Monitor Health:
   AWS Console → EC2 → Target Groups
   - Check all targets are "Healthy"
   - Monitor request count and response times
"#;

const COMMANDS: &str = r#"
terraform init                    # Initialize workspace
terraform plan                    # Preview changes
terraform apply                   # Apply changes
terraform destroy                 # Destroy resources
terraform output                  # Show outputs
terraform state list              # List resources
terraform state show <resource>   # Show resource details
terraform refresh                 # Update state file
terraform fmt -recursive          # Format all files
terraform validate                # Validate syntax
"#;

const TFVARS: &str = r#"
aws_region             = "ap-south-1"
vpc_cidr               = "10.0.0.0/16"
public_subnet_cidrs    = ["10.0.1.0/24", "10.0.2.0/24"]
instance_type          = "t2.small"
instance_count         = 2
asg_min_size           = 2
asg_max_size           = 6
asg_desired_capacity   = 3
environment            = "production"
"#;

const USER_DATA: &str = r#"
The user data script executed on each EC2 instance:

1. System Updates
   apt-get update -y
   (Updates package lists)

2. Install Java Runtime
   apt-get install -y openjdk-11-jre-headless
   (Lightweight Java for running applications)

3. Install Docker
   apt-get install -y docker.io
   (Container runtime)

4. Start Docker Service
   systemctl start docker
   systemctl enable docker
   (Ensures Docker starts on reboot)

5. Docker Permissions
   usermod -aG docker ubuntu
   (Allows ubuntu user to run Docker commands)

6. Run Nginx Container
   docker run -d -p 80:80 --name web-server nginx:latest
   (Port 80 - web server for ALB traffic)

7. Run Java Application
   docker run -d -p 8080:8080 --name java-app ... java -jar /app/application.jar
   (Port 8080 - backend application)

Note: Ports are mapped inside containers. Nginx acts as reverse proxy.
"#;

const BAD_GATEWAY: &str = r#"
Problem: ALB returns 502 Bad Gateway error

Causes & Solutions:

1. User Data Script Not Executed
   ✗ Wrong AMI type (e.g., Amazon Linux commands on Ubuntu)
   ✓ Check instance console output: EC2 → Instances → Instance ID → Monitor
   ✓ Verify correct commands for AMI (apt-get for Ubuntu, yum for Amazon Linux)

2. Docker/Services Not Running
   ✗ Instance starting but services haven't started yet
   ✓ Check instance in ASG has completed initialization
   ✓ Give instances 3-5 minutes after launch
   ✓ Check CloudWatch logs for service startup

3. Ports Not Exposed
   ✗ Containers not mapping ports correctly
   ✓ Verify: docker ps -a (on instance)
   ✓ Check container logs: docker logs <container_name>

4. Security Group Issue
   ✗ EC2 SG doesn't allow traffic from ALB SG
   ✓ Verify source group in EC2 SG ingress rule
   ✓ Ensure rule allows port 80

5. Health Check Failing
   ✗ Target marked unhealthy even if service running
   ✓ Check Target Group health check settings
   ✓ Verify path "/" returns 200 status
   ✓ Check service is actually listening on port 80
"#;

const STATE_LOCKS: &str = r#"
Problem: Terraform operations hang or fail with lock errors

Root Causes:

1. DynamoDB Lock Corrupted
   Symptom: Multiple lock entries or stale entries
   Solution:
   - Check locks: aws dynamodb scan --table-name terraform-locks
   - Delete stale entries: aws dynamodb delete-item --table-name terraform-locks --key ...
   - Run: terraform refresh -lock=false

2. S3 State File Locked
   Symptom: "Error acquiring the state lock"
   Solution:
   - Use: terraform plan -lock=false (for read-only operations)
   - Clean lock: aws dynamodb delete-item --table-name terraform-locks --key ...

3. GitHub Actions Lock Conflict
   Solution in workflow:
   - terraform plan -input=false -lock=false
   - terraform apply -input=false -lock=false
   (Appropriate for CI/CD, read-only safety maintained via state file)
"#;

const DEBUG_COMMANDS: &str = r#"
Check EC2 Instance Health:
  aws ec2 describe-instances --region ap-south-1 \
    --query 'Reservations[].Instances[].[InstanceId,State.Name,PublicIpAddress]'

Check ALB Target Health:
  aws elbv2 describe-target-health --target-group-arn <arn> \
    --region ap-south-1

Check ASG Status:
  aws autoscaling describe-auto-scaling-groups \
    --auto-scaling-group-names app-asg-* --region ap-south-1

View Instance Logs:
  aws ec2 get-console-output --instance-id <id> --region ap-south-1

Check CloudWatch Metrics:
  aws cloudwatch get-metric-statistics \
    --namespace AWS/EC2 --metric-name CPUUtilization \
    --dimensions Name=AutoScalingGroupName,Value=app-asg-* \
    --start-time <date> --end-time <date> --period 300 --statistics Average
"#;

const SCALING_POLICIES: &str = r#"
Scale-Up Policy:
  Trigger: CPU Utilization > 70%
  Action: Add 1 instance to ASG
  Cooldown: 300 seconds (prevents rapid scaling)
  Min Instances: Always at least 2 running

Scale-Down Policy:
  Trigger: CPU Utilization < 30%
  Action: Remove 1 instance from ASG
  Cooldown: 300 seconds
  Max Reduction: One instance at a time

Evaluation:
  - Periods: 2 (two consecutive 5-minute periods)
  - Interval: 5 minutes (300 seconds)
  - This prevents rapid up/down cycles

Capacity Limits:
  Minimum: 2 instances (always running for HA)
  Maximum: 6 instances (cost control)
  Desired: 3 instances (target state)
"#;

const MONITORING: &str = r#"
Metrics Monitored:
  - CPUUtilization (triggers scaling policies)
  - NetworkIn / NetworkOut
  - StatusCheckFailed (instance health)
  - ALBRequestCount (traffic volume)
  - TargetResponseTime

How to View Metrics:
  AWS Console → CloudWatch → Dashboards
  Or CLI:
  aws cloudwatch list-metrics --namespace AWS/EC2 \
    --dimensions Name=AutoScalingGroupName,Value=app-asg-*

Create Custom Dashboards:
  Monitor: CPU usage, request count, response time, instance count
  Update frequency: 1 minute for real-time visibility
"#;

pub(super) fn append(story: &mut StoryBuilder) {
    story.push(
        section("4. DEPLOYMENT INSTRUCTIONS")
            .child(subsection("4.1 Prerequisites").child(Code::new(PREREQUISITES)))
            .child(gap(0.15))
            .child(subsection("4.2 Step-by-Step Deployment").child(p(DEPLOY_STEPS, BODY)))
            .child(PageBreak)
            .child(subsection("4.3 Accessing the Application").child(Code::new(ACCESS)))
            .child(gap(0.2))
            .child(subsection("4.4 Common Terraform Commands").child(Code::new(COMMANDS))),
    );
    story.push(PageBreak);

    story.push(
        section("5. CONFIGURATION DETAILS")
            .child(subsection("5.1 terraform.tfvars Values").child(Code::new(TFVARS)))
            .child(gap(0.2))
            .child(subsection("5.2 User Data Script Breakdown").child(p(USER_DATA, BODY))),
    );
    story.push(PageBreak);

    story.push(
        section("6. TROUBLESHOOTING GUIDE")
            .child(subsection("6.1 502 Bad Gateway Error").child(p(BAD_GATEWAY, BODY)))
            .child(PageBreak)
            .child(subsection("6.2 State Lock Issues").child(p(STATE_LOCKS, BODY)))
            .child(gap(0.2))
            .child(subsection("6.3 Debugging Commands").child(Code::new(DEBUG_COMMANDS))),
    );
    story.push(PageBreak);

    story.push(
        section("7. MONITORING & SCALING")
            .child(subsection("7.1 Auto Scaling Policies").child(p(SCALING_POLICIES, BODY)))
            .child(gap(0.2))
            .child(subsection("7.2 CloudWatch Monitoring").child(p(MONITORING, BODY))),
    );
    story.push(PageBreak);
}
