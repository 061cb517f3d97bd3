use std::io::Write;

use anyhow::Context;
use kendra_protocol::{KendraRequest, Operation, RequestEnvelope, RequestVisitor, ServiceConfig};
use serde_json::{Value, json};

struct MarshalRequest<'a> {
    config: &'a ServiceConfig,
    input: &'a str,
}

impl RequestVisitor for MarshalRequest<'_> {
    type Output = anyhow::Result<RequestEnvelope>;

    fn visit<R: KendraRequest>(self) -> Self::Output {
        let request: R = serde_json::from_str(self.input)
            .with_context(|| format!("input is not a valid {} request", R::OPERATION))?;

        RequestEnvelope::marshal(self.config, &request)
            .with_context(|| format!("failed to marshal {} request", R::OPERATION))
    }
}

pub(super) fn run(
    operation: Operation,
    config: &ServiceConfig,
    input: &str,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let envelope = operation.visit(MarshalRequest { config, input })?;
    let body: Value = serde_json::from_str(&envelope.body)?;

    let document = json!({
        "operation": envelope.operation,
        "method": "POST",
        "endpoint": envelope.endpoint,
        "headers": envelope.headers,
        "body": body,
    });

    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marshal(config: &ServiceConfig, operation: Operation, input: &str) -> anyhow::Result<Value> {
        let mut out = Vec::new();
        run(operation, config, input, &mut out)?;
        Ok(serde_json::from_slice(&out)?)
    }

    #[test]
    fn test_marshal_list_request() {
        let config = ServiceConfig::default().with_region("eu-west-1");
        let document = marshal(
            &config,
            Operation::ListFaqs,
            r#"{"IndexId": "11111111-1111-1111-1111-111111111111", "MaxResults": 10}"#,
        )
        .unwrap();

        assert_eq!(document["operation"], "ListFaqs");
        assert_eq!(document["endpoint"], "https://kendra.eu-west-1.amazonaws.com");
        assert_eq!(
            document["headers"]["X-Amz-Target"],
            "AWSKendraFrontendService.ListFaqs"
        );
        assert_eq!(
            document["headers"]["Content-Type"],
            "application/x-amz-json-1.1"
        );
        assert_eq!(
            document["body"],
            json!({"IndexId": "11111111-1111-1111-1111-111111111111", "MaxResults": 10})
        );
    }

    #[test]
    fn test_invalid_request_is_refused() {
        let result = marshal(
            &ServiceConfig::default(),
            Operation::ListFaqs,
            r#"{"IndexId": "11111111-1111-1111-1111-111111111111", "MaxResults": 0}"#,
        );

        let error = result.unwrap_err();
        assert_eq!(error.to_string(), "failed to marshal ListFaqs request");
    }

    #[test]
    fn test_skip_validation() {
        let config = ServiceConfig::default().with_validate_requests(false);
        let document = marshal(&config, Operation::DeleteIndex, r#"{"Id": "x"}"#).unwrap();
        assert_eq!(document["body"], json!({"Id": "x"}));
    }
}
