use serde_json::Value;

/// Records a shopper action on the `audit` tracing target.
pub fn log_audit(action: &str, resource: Option<&str>, metadata: Option<Value>) {
    let metadata = metadata.unwrap_or(Value::Null);
    tracing::info!(
        target: "audit",
        action,
        resource = resource.unwrap_or("-"),
        metadata = %metadata,
        "shopper action"
    );
}
