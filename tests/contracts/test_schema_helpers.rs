/// Schema for `docfacts --json` check output.
pub const CHECK_SCHEMA: &str = include_str!("../schemas/check_output.schema.json");

/// Panic with every schema violation in `json_value`, one per line with its
/// instance path.
pub fn validate_against_schema(json_value: &serde_json::Value, schema_str: &str) {
    let schema: serde_json::Value =
        serde_json::from_str(schema_str).expect("schema file is not valid JSON");
    let validator = jsonschema::validator_for(&schema).expect("schema does not compile");
    let violations: Vec<String> = validator
        .iter_errors(json_value)
        .map(|e| format!("  {}: {}", e.instance_path, e))
        .collect();
    assert!(
        violations.is_empty(),
        "output does not match {}:\n{}",
        schema
            .get("title")
            .and_then(|t| t.as_str())
            .unwrap_or("schema"),
        violations.join("\n")
    );
}
