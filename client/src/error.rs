use tallgrass_protocol::ProtocolError;
use thiserror::Error;

/// Why a resolver call or a local precondition failed
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP {status}")]
    Status { status: u16, error: Option<String> },

    #[error("Resolver rejected the call: {}", error.as_deref().unwrap_or("no reason given"))]
    Rejected { error: Option<String> },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("No move bound to slot {0}")]
    EmptySlot(usize),

    #[error("A battle session is already open")]
    SessionOpen,
}

impl ClientError {
    /// Error text supplied by the resolver, if it sent one
    pub fn server_error(&self) -> Option<&str> {
        match self {
            ClientError::Status { error, .. } | ClientError::Rejected { error } => {
                error.as_deref()
            }
            _ => None,
        }
    }

    /// Network failure as opposed to an answer from the resolver
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}
