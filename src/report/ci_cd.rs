//! Section 8: the GitHub Actions pipeline that applies the Terraform code.

use super::{BODY, section, subsection};
use runbook_template_dsl::builders::{Code, PageBreak};
use runbook_template_dsl::{StoryBuilder, gap, p};

const OVERVIEW: &str = r#"
File: .github/workflows/terraform.yml

Trigger: Push to main branch

Pipeline Steps:

1. Checkout Code
   Actions/checkout@v3 (retrieve repository code)

2. Configure AWS Credentials
   AWS credentials from GitHub Secrets
   Assumes IAM role for Terraform operations

3. Setup Terraform
   hashicorp/setup-terraform@v2 (v1.5+)

4. Format Check
   terraform fmt -check -recursive (validates code style)

5. Terraform Init
   terraform init (initialize state, download providers)
   Uses S3 backend and DynamoDB locks

6. Validate
   terraform validate (syntax check)

7. Plan (Read-Only)
   terraform plan -input=false -lock=false \
     -var-file=terraform.tfvars -out=tfplan
   (Creates execution plan without acquiring locks)

8. Apply (Deployment)
   terraform apply -input=false -lock=false tfplan
   (Applies approved changes to AWS)

9. Generate Outputs
   terraform output > $GITHUB_OUTPUT
   (For next workflow steps if needed)
"#;

const FEATURES: &str = r#"
✓ Automated Deployment: Every push to main triggers pipeline
✓ Plan Before Apply: Operators see changes before deployment
✓ Locking Strategy: Uses -lock=false (safe for stateless CI/CD)
✓ State Management: S3 backend with DynamoDB locks
✓ Error Handling: Pipeline stops on format/validation errors
✓ Outputs: Infrastructure details available after apply
✓ Secrets: AWS credentials stored in GitHub Secrets

GitHub Secrets Required:
  AWS_ACCESS_KEY_ID
  AWS_SECRET_ACCESS_KEY
  AWS_DEFAULT_REGION (ap-south-1)
"#;

const WORKFLOW_YML: &str = r#"
name: Terraform

on:
  push:
    branches:
      - main

jobs:
  terraform:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v3

      - name: Configure AWS Credentials
        uses: aws-actions/configure-aws-credentials@v2
        with:
          aws-access-key-id: ${{ secrets.AWS_ACCESS_KEY_ID }}
          aws-secret-access-key: ${{ secrets.AWS_SECRET_ACCESS_KEY }}
          aws-region: ${{ secrets.AWS_DEFAULT_REGION }}

      - name: Setup Terraform
        uses: hashicorp/setup-terraform@v2
        with:
          terraform_version: 1.5.0

      - name: Terraform Format Check
        run: terraform fmt -check -recursive
        continue-on-error: true

      - name: Terraform Init
        run: terraform init

      - name: Terraform Validate
        run: terraform validate

      - name: Terraform Plan
        id: plan
        run: terraform plan -input=false -lock=false \
          -var-file=terraform.tfvars -out=tfplan

      - name: Terraform Apply
        run: terraform apply -input=false -lock=false tfplan

      - name: Generate Outputs
        run: terraform output
"#;

pub(super) fn append(story: &mut StoryBuilder) {
    story.push(
        section("8. GITHUB ACTIONS CI/CD PIPELINE")
            .child(subsection("8.1 Workflow Overview").child(p(OVERVIEW, BODY)))
            .child(gap(0.2))
            .child(subsection("8.2 Key Features").child(p(FEATURES, BODY)))
            .child(PageBreak)
            .child(subsection("8.3 Workflow File (terraform.yml)").child(Code::new(WORKFLOW_YML))),
    );
    story.push(PageBreak);
}
