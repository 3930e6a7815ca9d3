use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::lookup::UserRecord;
use crate::role::Role;

/// The authenticated identity attached to a single request.
///
/// Built by the authenticate gate from the user record read at request
/// time. It lives in the request's extensions and is dropped with the
/// request; it is never stored or shared between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
}

impl Principal {
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<UserRecord> for Principal {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}
