//! Profiles service.

use std::sync::Arc;

use jiff::Timestamp;
use tracing::{error, info};

use crate::{
    auth::Session,
    domain::profiles::{
        errors::ProfilesError,
        models::{Profile, ProfileChanges},
        repository::ProfileRepository,
    },
};

/// Profile of the signed-in user.
#[derive(Clone)]
pub struct ProfilesService {
    repository: Arc<dyn ProfileRepository>,
}

impl ProfilesService {
    #[must_use]
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    /// The user's profile; a blank one when none was saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the record store cannot be queried.
    pub async fn profile(&self, session: &Session) -> Result<Profile, ProfilesError> {
        let profile = self
            .repository
            .find_profile(&session.access_token, session.user.id)
            .await
            .inspect_err(|error| error!(%error, "failed to load profile"))?;

        Ok(profile.unwrap_or_else(|| Profile::blank(session.user.id)))
    }

    /// Merge `changes` into the user's profile and save it.
    ///
    /// # Errors
    ///
    /// Returns [`ProfilesError::NoChanges`] when `changes` is empty, or an
    /// error when the record store cannot be reached.
    pub async fn save_profile(
        &self,
        session: &Session,
        changes: ProfileChanges,
    ) -> Result<Profile, ProfilesError> {
        if changes.is_empty() {
            return Err(ProfilesError::NoChanges);
        }

        let current = self.profile(session).await?;
        let updated = changes.apply(current, Timestamp::now());

        let saved = self
            .repository
            .upsert_profile(&session.access_token, &updated)
            .await
            .inspect_err(|error| error!(%error, "failed to save profile"))?;

        info!(user_id = %saved.id, "profile saved");

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::{domain::profiles::MockProfileRepository, test::session};

    #[tokio::test]
    async fn missing_profile_is_blank() -> TestResult {
        let session = session("ada@example.com");

        let mut repository = MockProfileRepository::new();
        repository
            .expect_find_profile()
            .once()
            .return_once(|_, _| Ok(None));

        let profile = ProfilesService::new(Arc::new(repository))
            .profile(&session)
            .await?;

        assert_eq!(profile, Profile::blank(session.user.id));

        Ok(())
    }

    #[tokio::test]
    async fn save_merges_changes_into_stored_profile() -> TestResult {
        let session = session("ada@example.com");
        let user = session.user.id;

        let mut repository = MockProfileRepository::new();
        repository.expect_find_profile().once().return_once(move |_, _| {
            Ok(Some(Profile {
                full_name: Some("Ada Lovelace".to_string()),
                delivery_address: Some("old address".to_string()),
                ..Profile::blank(user)
            }))
        });
        repository
            .expect_upsert_profile()
            .withf(move |_, profile| {
                profile.id == user
                    && profile.full_name.as_deref() == Some("Ada Lovelace")
                    && profile.delivery_address.as_deref() == Some("12 rue de Rivoli")
                    && profile.updated_at.is_some()
            })
            .once()
            .return_once(|_, profile| Ok(profile.clone()));

        let saved = ProfilesService::new(Arc::new(repository))
            .save_profile(
                &session,
                ProfileChanges {
                    delivery_address: Some(" 12 rue de Rivoli ".to_string()),
                    ..ProfileChanges::default()
                },
            )
            .await?;

        assert_eq!(saved.delivery_address_or_default(), "12 rue de Rivoli");

        Ok(())
    }

    #[tokio::test]
    async fn empty_changes_are_rejected_without_remote_calls() {
        let mut repository = MockProfileRepository::new();
        repository.expect_find_profile().never();
        repository.expect_upsert_profile().never();

        let result = ProfilesService::new(Arc::new(repository))
            .save_profile(&session("ada@example.com"), ProfileChanges::default())
            .await;

        assert!(
            matches!(result, Err(ProfilesError::NoChanges)),
            "expected no changes, got {result:?}"
        );
    }
}
