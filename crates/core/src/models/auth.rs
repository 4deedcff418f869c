use serde::{Deserialize, Serialize};

use crate::errors::{ScheduleError, ScheduleResult};

/// Role claim issued by the account service
///
/// The account service accepts any role string at sign-up; names outside the
/// known set decode to [`Role::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Doctor,
    User,
    #[serde(other)]
    Other,
}

impl Role {
    /// Whether this role may create, replace or delete timetable entries.
    pub fn can_manage_timetables(self) -> bool {
        match self {
            Role::Admin | Role::Manager => true,
            Role::Doctor | Role::User | Role::Other => false,
        }
    }
}

/// Response of the account service's token validation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub valid: bool,
    pub user_id: Option<i64>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl TokenClaims {
    /// Turns a validation response into a caller, rejecting tokens the
    /// account service did not vouch for.
    pub fn into_caller(self, token: &str) -> ScheduleResult<Caller> {
        match (self.valid, self.user_id) {
            (true, Some(user_id)) => Ok(Caller {
                user_id,
                role: self.role,
                token: token.to_string(),
            }),
            _ => Err(invalid_token()),
        }
    }
}

/// The authenticated principal of a request.
///
/// The raw bearer token is kept so it can be forwarded to other services
/// that require it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: i64,
    pub role: Option<Role>,
    pub token: String,
}

impl Caller {
    pub fn require_timetable_manager(&self) -> ScheduleResult<()> {
        match self.role {
            Some(role) if role.can_manage_timetables() => Ok(()),
            _ => Err(ScheduleError::Authorization(
                "Only admins or managers allowed".to_string(),
            )),
        }
    }
}

pub fn invalid_token() -> ScheduleError {
    ScheduleError::Authentication("Invalid token".to_string())
}
