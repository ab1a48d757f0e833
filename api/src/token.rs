//! Persisted bearer-token access.
//!
//! The token has been written under different localStorage keys across
//! releases. Reads consult every alias so sessions created by older builds
//! keep working; writes and teardown cover all of them.

const TOKEN_KEYS: [&str; 3] = ["jwt_token", "token", "jwt"];

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// The persisted token, if any alias holds a non-empty value.
pub fn read() -> Option<String> {
    let storage = local_storage()?;
    first_present(
        TOKEN_KEYS
            .iter()
            .map(|key| storage.get_item(key).ok().flatten()),
    )
}

/// Persists `token` under every alias.
pub fn store(token: &str) {
    if let Some(storage) = local_storage() {
        for key in TOKEN_KEYS {
            let _ = storage.set_item(key, token);
        }
    }
}

/// Removes every alias.
pub fn clear() {
    if let Some(storage) = local_storage() {
        for key in TOKEN_KEYS {
            let _ = storage.remove_item(key);
        }
    }
}

fn first_present(values: impl Iterator<Item = Option<String>>) -> Option<String> {
    values.flatten().find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earliest_alias_wins() {
        let values = [Some("legacy".to_string()), Some("current".to_string())];
        assert_eq!(
            first_present(values.into_iter()),
            Some("legacy".to_string())
        );
    }

    #[test]
    fn empty_and_missing_aliases_are_skipped() {
        let values = [None, Some(String::new()), Some("tok".to_string())];
        assert_eq!(first_present(values.into_iter()), Some("tok".to_string()));
        assert_eq!(first_present([None::<String>, None].into_iter()), None);
    }
}
