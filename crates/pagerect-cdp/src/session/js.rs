//! JavaScript execution operations for CDP page session.

use serde_json::{json, Value};

use crate::error::CdpError;
use crate::protocol::NodeTarget;

use super::core::PageSession;

impl PageSession {
    /// Evaluate a JavaScript expression in the page's main world, by value.
    pub async fn evaluate(&self, expression: &str) -> Result<Value, CdpError> {
        let result = self
            .call(
                "Runtime.evaluate",
                Some(json!({
                    "expression": expression,
                    "returnByValue": true,
                    "awaitPromise": true,
                })),
            )
            .await?;

        Self::unwrap_result(result)
    }

    /// Call a function declaration with `this` bound to a remote object, by value.
    pub async fn call_function_on(
        &self,
        object_id: &str,
        function: &str,
    ) -> Result<Value, CdpError> {
        let result = self
            .call(
                "Runtime.callFunctionOn",
                Some(json!({
                    "objectId": object_id,
                    "functionDeclaration": function,
                    "returnByValue": true,
                    "awaitPromise": true,
                })),
            )
            .await?;

        Self::unwrap_result(result)
    }

    /// Call a function with `this` bound to a DOM node, resolving it first if
    /// the target carries no object id.
    pub async fn call_function_on_node(
        &self,
        target: &NodeTarget,
        function: &str,
    ) -> Result<Value, CdpError> {
        let object_id = match &target.object_id {
            Some(id) => id.clone(),
            None => self
                .resolve_node(target)
                .await?
                .object_id
                .ok_or_else(|| CdpError::InvalidResponse("Node has no object id".to_string()))?,
        };

        self.call_function_on(&object_id, function).await
    }

    /// Turn a Runtime result into its value, surfacing thrown exceptions.
    pub(super) fn unwrap_result(result: Value) -> Result<Value, CdpError> {
        if let Some(exception) = result.get("exceptionDetails") {
            let text = exception["exception"]["description"]
                .as_str()
                .or_else(|| exception["text"].as_str())
                .unwrap_or("Unknown error");
            return Err(CdpError::JavaScript(text.to_string()));
        }

        Ok(result["result"]["value"].clone())
    }
}
