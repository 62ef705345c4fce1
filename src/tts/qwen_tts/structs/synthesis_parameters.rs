use serde::{Deserialize, Serialize};

/// Parameters section of an upstream synthesis request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SynthesisParameters {
    pub language_type: String,
}
