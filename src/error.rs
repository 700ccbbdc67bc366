use crate::model::LinkField;

/// Failures raised by index construction and lookups.
///
/// Callers are expected to react to each kind differently: an unknown
/// channel is bad user input, an unknown central SKU is a data problem, and
/// a malformed row means the linking table itself cannot be trusted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("malformed linking row {position}: missing {field}")]
    MalformedRow { position: usize, field: LinkField },

    #[error("unknown channel '{0}'")]
    UnknownChannel(String),

    #[error("unknown central sku '{0}'")]
    UnknownCentralId(String),
}

impl LookupError {
    /// Stable machine-readable name, used in JSON error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::MalformedRow { .. } => "malformed_row",
            LookupError::UnknownChannel(_) => "unknown_channel",
            LookupError::UnknownCentralId(_) => "unknown_central_id",
        }
    }
}
