use serde::{Deserialize, Serialize};

use crate::entity::{FieldError, FieldKind, FieldSpec, FieldValue, Resource};

pub const ROLES: &[&str] = &["Administrator", "User", "Superior", "Supersuperior"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "roleName", default)]
    pub role_name: String,
}

/// Login account, `/api/users`. Carries no attachments, so saves always
/// encode as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Write-only: the list endpoint never returns it.
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "username",
        label: "Username",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "email",
        label: "Email",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "password",
        label: "Password",
        kind: FieldKind::Secret,
    },
    FieldSpec {
        name: "role",
        label: "Role",
        kind: FieldKind::Select(ROLES),
    },
];

impl Resource for UserAccount {
    const ENDPOINT: &'static str = "users";
    const ID_FIELD: &'static str = "userId";
    const LABEL: &'static str = "user";

    fn id(&self) -> &str {
        &self.user_id
    }

    fn set_id(&mut self, id: String) {
        self.user_id = id;
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "username" => Some(FieldValue::Text(self.username.clone())),
            "email" => Some(FieldValue::Text(self.email.clone())),
            "password" => Some(FieldValue::Text(self.password.clone())),
            "role" => Some(FieldValue::Text(self.role.role_name.clone())),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match (name, value) {
            ("username", FieldValue::Text(v)) => self.username = v,
            ("email", FieldValue::Text(v)) => self.email = v,
            ("password", FieldValue::Text(v)) => self.password = v,
            ("role", FieldValue::Text(v)) => self.role.role_name = v,
            ("username" | "email" | "password" | "role", _) => {
                return Err(FieldError::KindMismatch {
                    field: name.to_string(),
                })
            }
            _ => return Err(FieldError::UnknownField(name.to_string())),
        }
        Ok(())
    }
}
