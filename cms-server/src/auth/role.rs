//! Login roles

use shared::{AppError, ErrorCode};

/// Role a login is checked against
///
/// Each role owns its credential collection and its landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    /// Credential collection
    pub const fn table(&self) -> &'static str {
        match self {
            Role::Admin => "admin_credential",
            Role::Staff => "staff_credential",
        }
    }

    /// Page returned to the client after a successful login
    pub const fn redirect(&self) -> &'static str {
        match self {
            Role::Admin => "/dashboard.html",
            Role::Staff => "/staff-dashboard.html",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which login flow a request selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginMode {
    /// No role selector: exact match against admin, HTML + redirect responses
    Legacy,
    /// Role-aware JSON login
    Role(Role),
}

impl LoginMode {
    /// Parse the `role` form field
    ///
    /// `admin` / `staff` (trimmed, any case) select a role; absent or blank
    /// selects the legacy form; anything else is rejected.
    pub fn parse(selector: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = selector.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(LoginMode::Legacy);
        };

        if raw.eq_ignore_ascii_case("admin") {
            Ok(LoginMode::Role(Role::Admin))
        } else if raw.eq_ignore_ascii_case("staff") {
            Ok(LoginMode::Role(Role::Staff))
        } else {
            Err(
                AppError::with_message(ErrorCode::UnsupportedRole, format!("Unsupported role: {raw}"))
                    .with_detail("role", raw),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!(LoginMode::parse(Some("admin")).unwrap(), LoginMode::Role(Role::Admin));
        assert_eq!(LoginMode::parse(Some(" Staff ")).unwrap(), LoginMode::Role(Role::Staff));
        assert_eq!(LoginMode::parse(Some("ADMIN")).unwrap(), LoginMode::Role(Role::Admin));
    }

    #[test]
    fn blank_selects_legacy() {
        assert_eq!(LoginMode::parse(None).unwrap(), LoginMode::Legacy);
        assert_eq!(LoginMode::parse(Some("")).unwrap(), LoginMode::Legacy);
        assert_eq!(LoginMode::parse(Some("   ")).unwrap(), LoginMode::Legacy);
    }

    #[test]
    fn unknown_role_rejected() {
        let err = LoginMode::parse(Some("public")).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedRole);
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn roles_are_disjoint() {
        assert_ne!(Role::Admin.table(), Role::Staff.table());
        assert_eq!(Role::Admin.redirect(), "/dashboard.html");
        assert_eq!(Role::Staff.redirect(), "/staff-dashboard.html");
    }
}
