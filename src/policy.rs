//! Ownership policy for owned resources (pet listings, donation campaigns
//! and their derived records).
//!
//! Every mutating operation on an owned resource goes through the same
//! check: the caller must be the resource's owner or hold the admin role.

use sqlx::PgPool;

use crate::database::models::Role;
use crate::database::users;
use crate::error::ApiError;
use crate::middleware::AuthUser;

/// The pure ownership rule: owner or admin, nobody else.
pub fn owner_or_admin(caller_email: &str, caller_role: Role, owner_email: &str) -> bool {
    caller_email == owner_email || caller_role == Role::Admin
}

/// Enforce the ownership rule for a mutating operation.
///
/// Short-circuits on an email match; otherwise the caller's stored role is
/// looked up and must be admin. Denial is a 403 with the fixed gate body.
pub async fn ensure_owner_or_admin(
    pool: &PgPool,
    caller: &AuthUser,
    owner_email: &str,
) -> Result<(), ApiError> {
    // An owner match needs no role lookup
    let role = if caller.email == owner_email {
        Role::Member
    } else {
        users::find_role(pool, &caller.email)
            .await?
            .unwrap_or(Role::Member)
    };

    if owner_or_admin(&caller.email, role, owner_email) {
        return Ok(());
    }

    tracing::warn!(
        "ownership check denied {} (owner is {})",
        caller.email,
        owner_email
    );
    Err(ApiError::forbidden())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_is_permitted() {
        assert!(owner_or_admin("u@example.com", Role::Member, "u@example.com"));
    }

    #[test]
    fn admin_is_permitted_on_foreign_resource() {
        assert!(owner_or_admin("admin@example.com", Role::Admin, "u@example.com"));
    }

    #[test]
    fn other_member_is_denied() {
        assert!(!owner_or_admin("v@example.com", Role::Member, "u@example.com"));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        // Emails are stored as entered; normalization happens at signup
        assert!(!owner_or_admin("U@example.com", Role::Member, "u@example.com"));
    }
}
