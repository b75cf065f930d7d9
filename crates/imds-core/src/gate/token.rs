use imds_model::{Flag, token};
use tracing::debug;

/// IMDSv2 session mode for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenMode {
    V2Disabled,
    V2Enabled,
}

impl TokenMode {
    /// Check if v2 mode is on.
    pub fn is_enabled(&self) -> bool {
        matches!(self, TokenMode::V2Enabled)
    }
}

impl From<Flag> for TokenMode {
    fn from(flag: Flag) -> Self {
        if flag.is_enabled() {
            TokenMode::V2Enabled
        } else {
            TokenMode::V2Disabled
        }
    }
}

/// Whether `presented` is the issued token. Tokens never expire.
pub fn is_token_valid(presented: Option<&str>) -> bool {
    debug!(header = presented.unwrap_or(""), expected = token::VALUE, "token evaluation");
    presented == Some(token::VALUE)
}
