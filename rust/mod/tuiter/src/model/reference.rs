use serde::{Deserialize, Serialize};

/// A reference field pointing at another document.
///
/// Stored documents always hold [`Ref::Id`]. Reads that expand a reference
/// replace it with the target document, or with [`Ref::Dangling`] when the
/// target has been deleted. On the wire an id is a string, an expanded
/// reference is the full object and a dangling one is `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Expanded(Box<T>),
    Id(String),
    Dangling,
}

impl<T> Ref<T> {
    /// The raw id, if this reference has not been expanded.
    pub fn as_id(&self) -> Option<&str> {
        match self {
            Ref::Id(id) => Some(id),
            _ => None,
        }
    }

    /// The expanded document, if any.
    pub fn expanded(&self) -> Option<&T> {
        match self {
            Ref::Expanded(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn is_dangling(&self) -> bool {
        matches!(self, Ref::Dangling)
    }
}

impl<T> From<&str> for Ref<T> {
    fn from(id: &str) -> Self {
        Ref::Id(id.to_string())
    }
}
