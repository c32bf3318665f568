//! Section 3: the repository layout and the Terraform sources.

use super::{section, subsection};
use runbook_template_dsl::builders::{Code, PageBreak};
use runbook_template_dsl::{StoryBuilder, gap};

const LAYOUT: &str = r#"
terraform-alb-ec2-docker/
  ├── provider.tf              # AWS provider configuration
  ├── variables.tf             # Input variables definition
  ├── terraform.tfvars         # Variable values
  ├── vpc.tf                   # VPC and networking
  ├── security.tf              # Security groups
  ├── alb.tf                   # Load balancer configuration
  ├── ec2.tf                   # EC2 instances
  ├── asg.tf                   # Auto scaling group
  ├── outputs.tf               # Output values
  ├── .github/workflows/
  │   └── terraform.yml        # GitHub Actions CI/CD
  ├── README.md                # Project documentation
  └── LEARNING_GUIDE.md        # Comprehensive guide
"#;

const PROVIDER_TF: &str = r#"
terraform {
  required_version = ">= 1.0"
  required_providers {
    aws = {
      source  = "hashicorp/aws"
      version = "~> 5.0"
    }
  }
  backend "s3" {
    bucket         = "terraform-state-srilatha-001"
    key            = "terraform.tfstate"
    region         = "ap-south-1"
    dynamodb_table = "terraform-locks"
    encrypt        = true
  }
}

provider "aws" {
  region = var.aws_region
}
"#;

const VARIABLES_TF: &str = r#"
variable "aws_region" {
  default = "ap-south-1"
}

variable "vpc_cidr" {
  default = "10.0.0.0/16"
}

variable "public_subnet_cidrs" {
  type    = list(string)
  default = ["10.0.1.0/24", "10.0.2.0/24"]
}

variable "instance_type" {
  default = "t2.small"
}

variable "instance_count" {
  default = 2
}

variable "asg_min_size" {
  default = 2
}

variable "asg_max_size" {
  default = 6
}

variable "asg_desired_capacity" {
  default = 3
}

variable "environment" {
  default = "production"
}
"#;

const VPC_TF: &str = r#"
resource "aws_vpc" "main" {
  cidr_block           = var.vpc_cidr
  enable_dns_hostnames = true
  enable_dns_support   = true

  tags = {
    Name = "app-vpc"
  }
}

resource "aws_internet_gateway" "main" {
  vpc_id = aws_vpc.main.id

  tags = {
    Name = "app-igw"
  }
}

resource "aws_subnet" "public" {
  count                   = length(var.public_subnet_cidrs)
  vpc_id                  = aws_vpc.main.id
  cidr_block              = var.public_subnet_cidrs[count.index]
  availability_zone       = data.aws_availability_zones.available.names[count.index]
  map_public_ip_on_launch = true

  tags = {
    Name = "public-subnet-${count.index + 1}"
  }
}

data "aws_availability_zones" "available" {
  state = "available"
}

resource "aws_route_table" "public" {
  vpc_id = aws_vpc.main.id

  route {
    cidr_block      = "0.0.0.0/0"
    gateway_id      = aws_internet_gateway.main.id
  }

  tags = {
    Name = "public-rt"
  }
}

resource "aws_route_table_association" "public" {
  count          = length(aws_subnet.public)
  subnet_id      = aws_subnet.public[count.index].id
  route_table_id = aws_route_table.public.id
}
"#;

const SECURITY_TF: &str = r#"
resource "aws_security_group" "alb" {
  name   = "alb-sg"
  vpc_id = aws_vpc.main.id

  ingress {
    from_port   = 80
    to_port     = 80
    protocol    = "tcp"
    cidr_blocks = ["0.0.0.0/0"]
  }

  egress {
    from_port   = 0
    to_port     = 0
    protocol    = "-1"
    cidr_blocks = ["0.0.0.0/0"]
  }
}

resource "aws_security_group" "app" {
  name   = "app-sg"
  vpc_id = aws_vpc.main.id

  ingress {
    from_port       = 80
    to_port         = 80
    protocol        = "tcp"
    security_groups = [aws_security_group.alb.id]
  }

  egress {
    from_port   = 0
    to_port     = 0
    protocol    = "-1"
    cidr_blocks = ["0.0.0.0/0"]
  }
}
"#;

const ALB_TF: &str = r#"
resource "aws_lb" "main" {
  name               = "tf-lb-${formatdate("YYYYMMDDHHMMSS", timestamp())}"
  internal           = false
  load_balancer_type = "application"
  security_groups    = [aws_security_group.alb.id]
  subnets            = aws_subnet.public[*].id

  tags = {
    Name = "app-alb"
  }
}

resource "aws_lb_target_group" "app" {
  name        = "app-tg"
  port        = 80
  protocol    = "HTTP"
  vpc_id      = aws_vpc.main.id

  health_check {
    path                = "/"
    interval            = 30
    timeout             = 5
    healthy_threshold   = 2
    unhealthy_threshold = 2
    matcher             = "200"
  }
}

resource "aws_lb_listener" "main" {
  load_balancer_arn = aws_lb.main.arn
  port              = 80
  protocol          = "HTTP"

  default_action {
    type             = "forward"
    target_group_arn = aws_lb_target_group.app.arn
  }
}
"#;

const ASG_TF: &str = r#"
resource "aws_launch_template" "app" {
  name_prefix            = "app-template-"
  image_id               = data.aws_ami.ubuntu.id
  instance_type          = var.instance_type
  vpc_security_group_ids = [aws_security_group.app.id]

  user_data = base64encode(<<-EOF
              #!/bin/bash
              apt-get update -y
              apt-get install -y openjdk-11-jre-headless
              apt-get install -y docker.io
              systemctl start docker
              systemctl enable docker
              usermod -aG docker ubuntu

              docker run -d -p 80:80 --name web-server nginx:latest
              docker run -d -p 8080:8080 --name java-app
                -e JAVA_OPTS="-Xmx512m -Xms256m"
                openjdk:11-jre-slim
                java -jar /app/application.jar
              EOF
  )

  root_block_device {
    volume_size = 20
    volume_type = "gp2"
  }
}

resource "aws_autoscaling_group" "app" {
  name                = "app-asg-${aws_launch_template.app.latest_version_number}"
  vpc_zone_identifier = aws_subnet.public[*].id
  target_group_arns   = [aws_lb_target_group.app.arn]
  health_check_type   = "ELB"
  health_check_grace_period = 300

  min_size         = var.asg_min_size
  max_size         = var.asg_max_size
  desired_capacity = var.asg_desired_capacity

  launch_template {
    id      = aws_launch_template.app.id
    version = "$Latest"
  }
}

resource "aws_autoscaling_policy" "scale_up" {
  name                   = "scale-up"
  scaling_adjustment     = 1
  adjustment_type        = "ChangeInCapacity"
  autoscaling_group_name = aws_autoscaling_group.app.name
  cooldown               = 300
}

resource "aws_cloudwatch_metric_alarm" "cpu_high" {
  alarm_name          = "cpu-high"
  comparison_operator = "GreaterThanThreshold"
  evaluation_periods  = 2
  metric_name         = "CPUUtilization"
  namespace           = "AWS/EC2"
  period              = 300
  statistic           = "Average"
  threshold           = 70
  alarm_actions       = [aws_autoscaling_policy.scale_up.arn]
}
"#;

pub(super) fn append(story: &mut StoryBuilder) {
    story.push(
        section("3. FILE STRUCTURE & CODE")
            .child(subsection("3.1 Project Layout").child(Code::new(LAYOUT)))
            .child(gap(0.2))
            .child(subsection("3.2 Provider Configuration (provider.tf)").child(Code::new(PROVIDER_TF)))
            .child(PageBreak)
            .child(subsection("3.3 Variables (variables.tf)").child(Code::new(VARIABLES_TF)))
            .child(PageBreak)
            .child(subsection("3.4 VPC & Networking (vpc.tf)").child(Code::new(VPC_TF)))
            .child(PageBreak)
            .child(subsection("3.5 Security Groups (security.tf)").child(Code::new(SECURITY_TF)))
            .child(PageBreak)
            .child(subsection("3.6 Load Balancer (alb.tf)").child(Code::new(ALB_TF)))
            .child(PageBreak)
            .child(
                subsection("3.7 Auto Scaling Group (asg.tf - Key Sections)")
                    .child(Code::new(ASG_TF)),
            ),
    );
    story.push(PageBreak);
}
