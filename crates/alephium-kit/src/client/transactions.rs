//! `/transactions/*` endpoints.

use reqwest::Method;

use super::rest::NodeClient;
use crate::error::NodeError;
use crate::types::TxStatus;

impl NodeClient {
    /// Get the current status of a transaction moving between two groups.
    pub async fn transaction_status(
        &self,
        tx_id: &str,
        from_group: u32,
        to_group: u32,
    ) -> Result<TxStatus, NodeError> {
        let from_group = from_group.to_string();
        let to_group = to_group.to_string();
        let url = self.endpoint(
            &["transactions", "status"],
            &[
                ("txId", tx_id),
                ("fromGroup", &from_group),
                ("toGroup", &to_group),
            ],
        )?;
        self.call(Method::GET, url, None).await
    }
}
