use reqwest::Client;

/// HTTP gateway to the remote `/accounts` resource.
///
/// One request per call: no retry, no timeout beyond what the client was
/// built with, no caching.
#[derive(Debug, Clone)]
pub struct AccountGatewayImpl {
    pub client: Client,
    pub base_url: String,
}

impl AccountGatewayImpl {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub(crate) fn collection_url(&self) -> String {
        format!("{}/accounts", self.base_url)
    }

    pub(crate) fn item_url(&self, id: i64) -> String {
        format!("{}/accounts/{}", self.base_url, id)
    }
}
