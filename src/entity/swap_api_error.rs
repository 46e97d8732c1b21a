/// Failure reported by the swap API through its `{ success: false, error }` envelope.
///
/// Transport, parsing and on-chain faults are not represented here; they travel
/// as plain `anyhow::Error`s.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SwapApiError {
    pub message: String,
    pub status: u16,
}

impl SwapApiError {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// True for 4xx statuses, the ones queries treat as "no data".
    pub fn is_user_error(&self) -> bool {
        is_user_error_status(self.status)
    }
}

pub(crate) fn is_user_error_status(status: u16) -> bool {
    (400..500).contains(&status)
}
