use serde::{Deserialize, Serialize};

/// Name of the hidden form field carrying the view-state token.
pub const VIEW_STATE_FIELD: &str = "__view_state";

/// Per-client state that lives in the page instead of on the server.
///
/// Rebuilt from the submitted token at the start of each request and
/// written back out at the end of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    #[serde(rename = "RequestCount")]
    pub request_count: u64,
}

impl ViewState {
    /// Count one more request and return the new total.
    pub fn record_request(&mut self) -> u64 {
        self.request_count = self.request_count.saturating_add(1);
        self.request_count
    }
}

/// Decode a client-supplied token.
///
/// Never fails: an empty or unparseable token yields a fresh state.
pub fn decode(token: &str) -> ViewState {
    if token.is_empty() {
        return ViewState::default();
    }

    match serde_json::from_str(token) {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!("invalid view state JSON: {}", e);
            ViewState::default()
        }
    }
}

/// Encode `state` into the token embedded in the next rendered page.
pub fn encode(state: &ViewState) -> Result<String, serde_json::Error> {
    serde_json::to_string(state)
}
