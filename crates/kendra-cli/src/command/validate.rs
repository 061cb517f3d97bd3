use std::io::Write;

use anyhow::Context;
use kendra_protocol::{KendraRequest, Operation, RequestVisitor};
use validator::{ValidationErrors, ValidationErrorsKind};

/// Parses the input as the request of an operation and collects its
/// constraint violations.
struct CheckRequest<'a> {
    input: &'a str,
}

impl RequestVisitor for CheckRequest<'_> {
    type Output = anyhow::Result<Vec<String>>;

    fn visit<R: KendraRequest>(self) -> Self::Output {
        let request: R = serde_json::from_str(self.input)
            .with_context(|| format!("input is not a valid {} request", R::OPERATION))?;

        Ok(match kendra_model::validate(&request) {
            Ok(()) => Vec::new(),
            Err(error) => error
                .validation_errors()
                .map(violations)
                .unwrap_or_else(|| vec![error.to_string()]),
        })
    }
}

pub(super) fn run(operation: Operation, input: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    let violations = operation.visit(CheckRequest { input })?;

    if violations.is_empty() {
        writeln!(out, "{operation}: request is valid")?;
        return Ok(());
    }

    for violation in &violations {
        writeln!(out, "{violation}")?;
    }

    anyhow::bail!(
        "{operation} request violates {} constraint(s)",
        violations.len()
    )
}

/// Flattens validation errors into `path: code` lines, sorted by path.
fn violations(errors: &ValidationErrors) -> Vec<String> {
    let mut lines = Vec::new();
    collect(errors, "", &mut lines);
    lines.sort();
    lines
}

fn collect(errors: &ValidationErrors, prefix: &str, lines: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    let detail = match &failure.message {
                        Some(message) => format!("{} ({message})", failure.code),
                        None => failure.code.to_string(),
                    };
                    lines.push(format!("{path}: {detail}"));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, lines),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{path}[{index}]"), lines);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_FAQ: &str = r#"{
        "IndexId": "11111111-1111-1111-1111-111111111111",
        "Name": "faq1",
        "S3Path": {"Bucket": "corp-faqs", "Key": "faq.csv"},
        "RoleArn": "arn:aws:iam::123456789012:role/kendra-faq"
    }"#;

    #[test]
    fn test_valid_request() {
        let mut out = Vec::new();
        run(Operation::CreateFaq, VALID_FAQ, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "CreateFaq: request is valid\n");
    }

    #[test]
    fn test_violations_are_listed() {
        let input = r#"{"IndexId": "short", "S3Path": {"Bucket": "corp-faqs"}}"#;
        let mut out = Vec::new();

        let error = run(Operation::CreateFaq, input, &mut out).unwrap_err();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<_> = text.lines().collect();
        assert!(lines.contains(&"name: required"));
        assert!(lines.contains(&"role_arn: required"));
        assert!(lines.contains(&"s3_path.key: required"));
        assert!(lines.iter().any(|line| line.starts_with("index_id: length")));
        assert!(error.to_string().starts_with("CreateFaq request violates"));
    }

    #[test]
    fn test_malformed_json() {
        let mut out = Vec::new();
        let error = run(Operation::Query, "{\"QueryText\": 5}", &mut out).unwrap_err();
        assert_eq!(error.to_string(), "input is not a valid Query request");
        assert!(out.is_empty());
    }
}
