/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: User CRUD endpoints
/// - `tasks`: Task CRUD endpoints

pub mod health;
pub mod tasks;
pub mod users;

use serde::{Deserialize, Serialize};

/// Success acknowledgement returned by every mutating endpoint
///
/// `status_code` mirrors the HTTP status of the response so clients that
/// only read the body still see the outcome.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionAck {
    /// HTTP status code of the response
    pub status_code: u16,

    /// Human-readable outcome message
    pub transaction: String,
}

impl TransactionAck {
    /// Acknowledgement for a successful creation (201)
    pub fn created() -> Self {
        Self {
            status_code: 201,
            transaction: "Successful".to_string(),
        }
    }

    /// Acknowledgement for a successful mutation (200)
    pub fn ok(message: &str) -> Self {
        Self {
            status_code: 200,
            transaction: message.to_string(),
        }
    }
}
