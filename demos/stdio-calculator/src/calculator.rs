use async_trait::async_trait;
use jsonrpc_kernel::prelude::*;
use serde_json::{Value, json};

/// Application error code for arithmetic faults
pub const ARITHMETIC_ERROR: i64 = 1001;

/// Four-function calculator addressed as `Calculator@<op>`
pub struct Calculator;

impl Calculator {
    pub const OPERATIONS: [&'static str; 4] = ["add", "subtract", "multiply", "divide"];
}

/// Operands come either positionally (`[a, b]`) or by name (`{"a": .., "b": ..}`)
fn operands(request: &Request) -> Result<(f64, f64), ResponseError> {
    let operand = |index: usize, key: &str| {
        let value = match request.params() {
            Some(RequestParams::Array(_)) => request.get_param_index(index),
            Some(RequestParams::Object(_)) => request.get_param(key),
            None => None,
        };
        value
            .and_then(Value::as_f64)
            .ok_or_else(|| ResponseError::invalid_params(format!("Operand '{key}' must be a number")))
    };

    Ok((operand(0, "a")?, operand(1, "b")?))
}

#[async_trait]
impl Controller for Calculator {
    async fn call(&self, method: &str, request: &Request) -> Result<Value, BoxError> {
        let (a, b) = operands(request)?;
        let result = match method {
            "add" => a + b,
            "subtract" => a - b,
            "multiply" => a * b,
            "divide" if b == 0.0 => {
                return Err(ResponseError::new(ARITHMETIC_ERROR, "Division by zero")
                    .with_data(json!({ "dividend": a }))
                    .into());
            }
            "divide" => a / b,
            other => return Err(format!("unsupported operation {other}").into()),
        };

        // Integral results stay integers on the wire
        if result.fract() == 0.0 && result.abs() < i64::MAX as f64 {
            Ok(json!(result as i64))
        } else {
            Ok(json!(result))
        }
    }

    fn methods(&self) -> Vec<String> {
        Self::OPERATIONS.iter().map(|op| op.to_string()).collect()
    }
}
