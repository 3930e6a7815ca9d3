//! Role membership guard.
//!
//! A [`RoleGuard`] is evaluated after the authenticate gate has attached a
//! [`Principal`]. It performs no I/O: the decision depends only on the
//! principal's role and the guard's allowed set.

use std::sync::Arc;

use learnhub_core::AppError;

use crate::principal::Principal;
use crate::role::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGuard {
    allowed: Arc<[Role]>,
}

impl RoleGuard {
    /// A guard admitting the given roles. An empty set admits any
    /// authenticated principal.
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut allowed: Vec<Role> = Vec::new();
        for role in roles {
            if !allowed.contains(&role) {
                allowed.push(role);
            }
        }
        Self {
            allowed: allowed.into(),
        }
    }

    /// Admits any authenticated principal.
    pub fn authenticated() -> Self {
        Self::new(std::iter::empty())
    }

    pub fn admin() -> Self {
        Self::new([Role::Admin])
    }

    /// Teachers and admins.
    pub fn teacher() -> Self {
        Self::new([Role::Teacher, Role::Admin])
    }

    pub fn allowed(&self) -> &[Role] {
        &self.allowed
    }

    pub fn admits(&self, role: Role) -> bool {
        self.allowed.is_empty() || self.allowed.contains(&role)
    }

    /// `"ADMIN"`, `"TEACHER or ADMIN"`, ...
    pub fn required_roles_label(&self) -> String {
        self.allowed
            .iter()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join(" or ")
    }

    /// Decides whether the request may proceed.
    ///
    /// # Errors
    ///
    /// - 401 `"Authentication required"` when no principal is attached
    /// - 403 `"Access denied. Required role: <roles>"` when the role is not
    ///   in a non-empty allowed set
    pub fn check(&self, principal: Option<&Principal>) -> Result<(), AppError> {
        let principal =
            principal.ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        if !self.admits(principal.role) {
            return Err(AppError::forbidden(format!(
                "Access denied. Required role: {}",
                self.required_roles_label()
            )));
        }

        Ok(())
    }
}
