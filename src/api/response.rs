//! JSON response envelope shared by every endpoint

use axum::Json;
use serde::{Deserialize, Serialize};

/// `{"msg": ..., "data": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub msg: String,
    pub data: Option<T>,
}

/// Successful response carrying `data`
pub fn ok<T: Serialize>(msg: impl Into<String>, data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        msg: msg.into(),
        data: Some(data),
    })
}

/// Successful response without a payload
pub fn done(msg: impl Into<String>) -> Json<Envelope<()>> {
    Json(Envelope {
        msg: msg.into(),
        data: None,
    })
}
