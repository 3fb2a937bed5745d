use serde_json::Value;

use crate::models::generation::ChatResult;

pub fn assert_arguments(
    result: &ChatResult,
    batch: usize,
    generation: usize,
    tool_call: usize,
    expected: &Value,
) {
    let message = result.generations[batch][generation]
        .message
        .as_ref()
        .expect("Message should be present");
    let tool_calls = message.tool_calls().expect("tool_calls should be present");
    assert_eq!(&tool_calls[tool_call]["function"]["arguments"], expected);
}
