//! Profiles repository.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::{AccessToken, UserUuid},
    domain::profiles::{errors::ProfilesError, models::Profile},
    records::{Filter, RecordStoreClient},
};

const PROFILES_TABLE: &str = "profiles";
const PROFILE_COLUMNS: &str = "id,full_name,delivery_address,phone,updated_at";

/// Typed access to the `profiles` table.
#[derive(Debug, Clone)]
pub struct RestProfileRepository {
    client: RecordStoreClient,
}

impl RestProfileRepository {
    #[must_use]
    pub fn new(client: RecordStoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileRepository for RestProfileRepository {
    async fn find_profile(
        &self,
        token: &AccessToken,
        user: UserUuid,
    ) -> Result<Option<Profile>, ProfilesError> {
        let rows: Vec<Profile> = self
            .client
            .select(
                token,
                PROFILES_TABLE,
                PROFILE_COLUMNS,
                &[Filter::eq("id", user)],
                None,
            )
            .await?;

        Ok(rows.into_iter().next())
    }

    async fn upsert_profile(
        &self,
        token: &AccessToken,
        profile: &Profile,
    ) -> Result<Profile, ProfilesError> {
        let rows: Vec<Profile> = self.client.upsert(token, PROFILES_TABLE, profile).await?;

        rows.into_iter()
            .next()
            .ok_or(ProfilesError::MissingRepresentation)
    }
}

/// Persistence for user profiles.
#[automock]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// The user's profile row; `None` when the user never saved one.
    async fn find_profile(
        &self,
        token: &AccessToken,
        user: UserUuid,
    ) -> Result<Option<Profile>, ProfilesError>;

    /// Insert `profile`, or overwrite the row with the same id.
    async fn upsert_profile(
        &self,
        token: &AccessToken,
        profile: &Profile,
    ) -> Result<Profile, ProfilesError>;
}
