//! Boolean-gated optional search criteria.

use serde::{Deserialize, Serialize};


/// One optional search criterion: a checkbox state paired with the value the
/// matching input control holds. A disabled toggle keeps its value around so
/// re-enabling the checkbox restores what the user last typed, but it
/// contributes nothing to the outgoing query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FieldToggle<T> {
    pub enabled: bool,
    pub value: T,
}

impl<T> FieldToggle<T> {
    pub fn on(value: T) -> Self {
        Self { enabled: true, value }
    }

    pub fn off(value: T) -> Self {
        Self { enabled: false, value }
    }

    pub fn as_enabled(&self) -> Option<&T> {
        if self.enabled { Some(&self.value) } else { None }
    }
}
