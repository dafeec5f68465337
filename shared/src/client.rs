//! Request/response DTOs shared between the server and its clients
//!
//! Field names follow the wire format the browser frontend already speaks
//! (`userid`, `specialRequests`, ...).

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login form (`application/x-www-form-urlencoded`)
///
/// Missing fields decode as empty strings; an absent or empty `role` selects
/// the legacy single-role login.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub userid: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Successful role-aware login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    /// Page the client should navigate to
    pub redirect: String,
}

impl LoginResponse {
    pub fn redirect_to(target: impl Into<String>) -> Self {
        Self {
            success: true,
            redirect: target.into(),
        }
    }
}

// =============================================================================
// Reservation API DTOs
// =============================================================================

/// Acknowledgement returned after a reservation is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAck {
    pub message: String,
}

impl SubmitAck {
    pub const RESERVATION_SUBMITTED: &'static str = "Reservation submitted successfully";

    pub fn reservation_submitted() -> Self {
        Self {
            message: Self::RESERVATION_SUBMITTED.to_string(),
        }
    }
}

// =============================================================================
// Health
// =============================================================================

/// `GET /health` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"healthy"` or `"degraded"`
    pub status: String,
    pub version: String,
    /// Whether the store answered a trivial query
    pub database: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_form_defaults_missing_fields() {
        let form: LoginForm = serde_json::from_str("{}").unwrap();
        assert_eq!(form.userid, "");
        assert_eq!(form.password, "");
        assert!(form.role.is_none());
    }

    #[test]
    fn login_response_shape() {
        let json = serde_json::to_value(LoginResponse::redirect_to("/dashboard.html")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": true, "redirect": "/dashboard.html"})
        );
    }

    #[test]
    fn submit_ack_message() {
        let json = serde_json::to_value(SubmitAck::reservation_submitted()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "Reservation submitted successfully"})
        );
    }
}
