use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Role the backend assigns to platform administrators. Sessions carrying
/// any other role are discarded by the client.
pub const SUPER_ADMIN_ROLE: &str = "SUPERADMIN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub company_id: Option<i64>,
}

impl AdminUser {
    pub fn is_super_admin(&self) -> bool {
        self.role == SUPER_ADMIN_ROLE
    }
}

/// Payload of a successful login: the admin profile plus the bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub user: AdminUser,
    #[serde(with = "secret_string")]
    pub token: SecretString,
}

mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn role_check_is_exact() {
        let mut user = AdminUser {
            id: 1,
            name: "Admin".into(),
            email: "admin@x.com".into(),
            role: SUPER_ADMIN_ROLE.into(),
            company_id: None,
        };
        assert!(user.is_super_admin());

        user.role = "HR".into();
        assert!(!user.is_super_admin());
        user.role = "superadmin".into();
        assert!(!user.is_super_admin());
    }

    #[test]
    fn auth_payload_decodes_from_login_response() {
        let payload: AuthPayload = serde_json::from_value(serde_json::json!({
            "user": {
                "id": 7,
                "name": "Root",
                "email": "root@hr.example",
                "role": "SUPERADMIN",
                "companyId": null
            },
            "token": "abc.def.ghi"
        }))
        .unwrap();

        assert!(payload.user.is_super_admin());
        assert_eq!(payload.token.expose_secret(), "abc.def.ghi");
    }
}
