use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single classifier prediction: label plus confidence score in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

/// Outcome of constructing a pipeline handle at startup.
///
/// A failed load keeps its reason instead of degrading to a null handle:
/// the health endpoint reports it, and requests against the slot fail with
/// `Error::ModelUnavailable`.
#[derive(Debug)]
pub enum ModelSlot<T> {
    Ready(T),
    Unavailable { reason: String },
}

impl<T> ModelSlot<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Returns the handle, or `ModelUnavailable` tagged with the given
    /// display name.
    pub fn get(&self, model: &str) -> Result<&T> {
        match self {
            Self::Ready(inner) => Ok(inner),
            Self::Unavailable { .. } => Err(Error::unavailable(model)),
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Ready(_) => None,
            Self::Unavailable { reason } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ready_slot_yields_handle() {
        let slot = ModelSlot::Ready(42);

        assert!(slot.is_ready());
        assert_eq!(slot.get("classifier").unwrap(), &42);
        assert_eq!(slot.failure_reason(), None);
    }

    #[test]
    fn test_unavailable_slot_reports_model_name() {
        let slot: ModelSlot<i32> = ModelSlot::Unavailable {
            reason: "connection refused".to_string(),
        };

        assert!(!slot.is_ready());
        assert_eq!(slot.failure_reason(), Some("connection refused"));

        let err = slot.get("sentiment classifier").unwrap_err();
        assert_eq!(err.to_string(), "sentiment classifier unavailable");
    }
}
