//! DOM operations for CDP page session.

use serde_json::{json, Value};
use tracing::debug;

use crate::error::CdpError;
use crate::protocol::{BoxModel, DomNode, NodeTarget, RemoteObject};

use super::core::PageSession;

impl PageSession {
    /// Get document root node.
    pub async fn get_document(&self) -> Result<DomNode, CdpError> {
        let result = self
            .call("DOM.getDocument", Some(json!({"depth": 0})))
            .await?;

        let root: DomNode = serde_json::from_value(result["root"].clone())?;
        Ok(root)
    }

    /// Query selector against the document, returning the node id.
    pub async fn query_selector(&self, selector: &str) -> Result<Option<i64>, CdpError> {
        let doc = self.get_document().await?;

        let result = self
            .call(
                "DOM.querySelector",
                Some(json!({
                    "nodeId": doc.node_id,
                    "selector": selector,
                })),
            )
            .await?;

        let node_id = result["nodeId"].as_i64().unwrap_or(0);
        if node_id == 0 {
            Ok(None)
        } else {
            Ok(Some(node_id))
        }
    }

    /// Query selector and describe the match, which carries its backend id and frame id.
    pub async fn find_node(&self, selector: &str) -> Result<DomNode, CdpError> {
        let node_id = self
            .query_selector(selector)
            .await?
            .ok_or_else(|| CdpError::ElementNotFound(selector.to_string()))?;

        self.describe_node(&NodeTarget {
            node_id: Some(node_id),
            ..Default::default()
        })
        .await
    }

    /// Describe a node without its subtree.
    pub async fn describe_node(&self, target: &NodeTarget) -> Result<DomNode, CdpError> {
        let mut params = serde_json::to_value(target)?;
        params["depth"] = json!(0);

        let result = self.call("DOM.describeNode", Some(params)).await?;
        let node: DomNode = serde_json::from_value(result["node"].clone())?;
        Ok(node)
    }

    /// Get box model for a node.
    ///
    /// Returns `None` when Chrome cannot compute one, which is how it reports
    /// nodes that are not rendered.
    pub async fn get_box_model(&self, target: &NodeTarget) -> Result<Option<BoxModel>, CdpError> {
        let params = serde_json::to_value(target)?;
        let result = self.call("DOM.getBoxModel", Some(params)).await;
        Self::box_model_from(result, target)
    }

    /// Map a `DOM.getBoxModel` reply, turning "no layout" refusals into `None`.
    pub(super) fn box_model_from(
        result: Result<Value, CdpError>,
        target: &NodeTarget,
    ) -> Result<Option<BoxModel>, CdpError> {
        match result {
            Ok(r) => {
                let model: BoxModel = serde_json::from_value(r["model"].clone())?;
                Ok(Some(model))
            }
            Err(e) if e.is_no_layout() => {
                debug!("No box model for {:?}: {}", target, e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Resolve node to runtime object.
    pub async fn resolve_node(&self, target: &NodeTarget) -> Result<RemoteObject, CdpError> {
        let params = serde_json::to_value(target)?;
        let result = self.call("DOM.resolveNode", Some(params)).await?;

        let obj: RemoteObject = serde_json::from_value(result["object"].clone())?;
        Ok(obj)
    }
}
