//! Profile Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::auth::UserUuid;

/// Per-user profile row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserUuid,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Profile {
    /// An empty profile for `id`.
    #[must_use]
    pub fn blank(id: UserUuid) -> Self {
        Self {
            id,
            full_name: None,
            delivery_address: None,
            phone: None,
            updated_at: None,
        }
    }

    /// Delivery address to stamp on new orders; blank when none is set.
    #[must_use]
    pub fn delivery_address_or_default(&self) -> &str {
        self.delivery_address.as_deref().unwrap_or_default()
    }
}

/// Fields to change on a profile. `None` keeps the stored value, a blank
/// string clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub full_name: Option<String>,
    pub delivery_address: Option<String>,
    pub phone: Option<String>,
}

impl ProfileChanges {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.delivery_address.is_none() && self.phone.is_none()
    }

    /// Apply the changes to `profile`, stamping `updated_at` with `now`.
    #[must_use]
    pub fn apply(self, mut profile: Profile, now: Timestamp) -> Profile {
        fn merge(field: &mut Option<String>, change: Option<String>) {
            if let Some(value) = change {
                let value = value.trim();
                *field = (!value.is_empty()).then(|| value.to_string());
            }
        }

        merge(&mut profile.full_name, self.full_name);
        merge(&mut profile.delivery_address, self.delivery_address);
        merge(&mut profile.phone, self.phone);
        profile.updated_at = Some(now);

        profile
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn changes_trim_values_and_keep_untouched_fields() -> TestResult {
        let now = Timestamp::from_second(1_760_000_000)?;
        let mut profile = Profile::blank(UserUuid::from_uuid(Uuid::now_v7()));
        profile.full_name = Some("Ada Lovelace".to_string());
        profile.phone = Some("+33 6 12 34 56 78".to_string());

        let updated = ProfileChanges {
            delivery_address: Some("  12 rue de Rivoli, Paris ".to_string()),
            phone: Some("   ".to_string()),
            ..ProfileChanges::default()
        }
        .apply(profile, now);

        assert_eq!(updated.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(
            updated.delivery_address.as_deref(),
            Some("12 rue de Rivoli, Paris")
        );
        assert_eq!(updated.phone, None, "blank value clears the field");
        assert_eq!(updated.updated_at, Some(now));

        Ok(())
    }

    #[test]
    fn rows_without_optional_columns_deserialize() -> TestResult {
        let profile: Profile = serde_json::from_str(
            r#"{"id":"0199d2a4-5d0e-7c2b-9a51-3c1f0e2b8d11","delivery_address":null}"#,
        )?;

        assert_eq!(profile.delivery_address_or_default(), "");
        assert_eq!(profile.full_name, None);

        Ok(())
    }
}
