use serde::{Deserialize, Serialize};

/// Input section of an upstream synthesis request.
///
/// `voice` lives here, nested under `input`, not under `parameters`.
/// The upstream API rejects requests with the field anywhere else.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SynthesisInput {
    pub text: String,
    pub voice: String,
}
