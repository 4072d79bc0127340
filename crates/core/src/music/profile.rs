//! User profile aggregation.

use crate::store::Result;

use super::accessors::Repertory;
use super::types::{EnrichedAchievement, UserProfile};

impl Repertory {
    /// Builds the full profile of a user: identity, repertoire, performances
    /// and achievements joined with their definitions.
    ///
    /// Returns `Ok(None)` without any further lookups when the user does not
    /// exist. Lookups run one after another, with one achievement lookup per
    /// user achievement and no deduplication. User achievements pointing at a
    /// missing definition are left out of the profile.
    ///
    /// The steps are separate store reads, so a concurrent write can leave the
    /// profile inconsistent.
    pub async fn get_user_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let Some(user) = self.get_user(user_id).await? else {
            tracing::debug!(user_id, "No profile: user not found");
            return Ok(None);
        };

        let repertoire = self.get_user_repertoire(user_id).await?;
        let performances = self.get_user_performances(user_id).await?;
        let user_achievements = self.get_user_achievements(user_id).await?;

        let mut achievements = Vec::with_capacity(user_achievements.len());
        for user_achievement in user_achievements {
            match self.get_achievement(&user_achievement.achievement_id).await? {
                Some(achievement) => {
                    achievements.push(EnrichedAchievement::new(achievement, user_achievement));
                }
                None => {
                    tracing::warn!(
                        user_id,
                        achievement_id = %user_achievement.achievement_id,
                        "Dropping user achievement with missing definition"
                    );
                }
            }
        }

        tracing::debug!(
            user_id,
            repertoire = repertoire.len(),
            performances = performances.len(),
            achievements = achievements.len(),
            "Built user profile"
        );

        Ok(Some(UserProfile {
            user_info: user,
            repertoire,
            performances,
            achievements,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::music::stub::{StoreCall, StubStore};
    use crate::store::{Collection, Key, Number, StoreError, StoreValue};

    use super::*;

    fn s(value: &str) -> StoreValue {
        StoreValue::from(value)
    }

    fn fixture() -> StubStore {
        StubStore::new()
            .with(
                Collection::Users,
                &[
                    ("userId", s("user123")),
                    ("name", s("John")),
                    (
                        "instruments",
                        StoreValue::StringSet(["Violin".to_string()].into()),
                    ),
                ],
            )
            .with(
                Collection::UserRepertoire,
                &[
                    ("userId", s("user123")),
                    ("pieceId", s("piece1")),
                    ("title", s("Violin Partita No. 2")),
                    ("composer", s("Bach")),
                    ("pieceStatus", s("mastered")),
                ],
            )
            .with(
                Collection::Performances,
                &[
                    ("userId", s("user123")),
                    ("performanceId", s("perf1")),
                    ("performanceDate", s("2025-03-15")),
                ],
            )
            .with(
                Collection::Achievements,
                &[
                    ("achievementId", s("ach1")),
                    ("achievementCategory", s("Performance")),
                    ("name", s("First Performance")),
                ],
            )
            .with(
                Collection::Achievements,
                &[
                    ("achievementId", s("ach2")),
                    ("achievementCategory", s("Practice")),
                ],
            )
            .with(
                Collection::UserAchievements,
                &[
                    ("userId", s("user123")),
                    ("achievementId", s("ach1")),
                    ("earnedAt", s("2025-03-15T20:00:00Z")),
                    ("progress", StoreValue::Number(Number::Integer(100))),
                ],
            )
            .with(
                Collection::UserAchievements,
                &[
                    ("userId", s("user123")),
                    ("achievementId", s("ach2")),
                    ("progress", StoreValue::Number(Number::Decimal(0.4))),
                ],
            )
    }

    #[tokio::test]
    async fn test_missing_user_returns_none_after_one_lookup() {
        let store = Arc::new(fixture());
        let repertory = Repertory::new(store.clone());

        let profile = repertory.get_user_profile("nobody").await.unwrap();

        assert!(profile.is_none());
        assert_eq!(store.calls(), vec![StoreCall::GetItem(Collection::Users)]);
    }

    #[tokio::test]
    async fn test_full_profile() {
        let store = Arc::new(fixture());
        let repertory = Repertory::new(store.clone());

        let profile = repertory.get_user_profile("user123").await.unwrap().unwrap();

        assert_eq!(profile.user_info.user_id, "user123");
        assert_eq!(profile.repertoire.len(), 1);
        assert_eq!(profile.performances.len(), 1);
        assert_eq!(profile.achievements.len(), 2);

        let first = &profile.achievements[0];
        assert_eq!(first.achievement_details.achievement_id, "ach1");
        assert_eq!(first.earned_at, Some(s("2025-03-15T20:00:00Z")));
        assert_eq!(first.progress, Some(StoreValue::Number(Number::Integer(100))));

        let second = &profile.achievements[1];
        assert_eq!(second.earned_at, None);
        assert_eq!(second.progress, Some(StoreValue::Number(Number::Decimal(0.4))));
    }

    #[tokio::test]
    async fn test_lookups_are_sequential_with_one_fetch_per_achievement() {
        let store = Arc::new(fixture());
        let repertory = Repertory::new(store.clone());

        repertory.get_user_profile("user123").await.unwrap();

        assert_eq!(
            store.calls(),
            vec![
                StoreCall::GetItem(Collection::Users),
                StoreCall::Query(Collection::UserRepertoire),
                StoreCall::Query(Collection::Performances),
                StoreCall::Query(Collection::UserAchievements),
                StoreCall::GetItem(Collection::Achievements),
                StoreCall::GetItem(Collection::Achievements),
            ]
        );
    }

    #[tokio::test]
    async fn test_dangling_achievement_is_dropped() {
        let store = Arc::new(fixture());
        let repertory = Repertory::new(store.clone());

        let before = repertory.get_user_profile("user123").await.unwrap().unwrap();
        store.remove(
            Collection::Achievements,
            &Key::partition("achievementId", "ach2"),
        );
        let after = repertory.get_user_profile("user123").await.unwrap().unwrap();

        assert_eq!(after.achievements.len(), before.achievements.len() - 1);
        assert!(after
            .achievements
            .iter()
            .all(|a| a.achievement_details.achievement_id != "ach2"));
    }

    #[tokio::test]
    async fn test_repeated_achievement_ids_are_fetched_each_time() {
        let store = Arc::new(
            fixture().with(
                Collection::UserAchievements,
                &[("userId", s("user123")), ("achievementId", s("ach1"))],
            ),
        );
        let repertory = Repertory::new(store.clone());

        let profile = repertory.get_user_profile("user123").await.unwrap().unwrap();

        let achievement_lookups = store
            .calls()
            .into_iter()
            .filter(|call| *call == StoreCall::GetItem(Collection::Achievements))
            .count();
        assert_eq!(achievement_lookups, 3);
        assert_eq!(profile.achievements.len(), 3);
    }

    #[tokio::test]
    async fn test_earned_at_of_any_type_is_passed_through() {
        let store = Arc::new(fixture().with(
            Collection::UserAchievements,
            &[
                ("userId", s("user123")),
                ("achievementId", s("ach1")),
                ("earnedAt", StoreValue::Number(Number::Integer(1742068800))),
                ("progress", s("complete")),
            ],
        ));
        let repertory = Repertory::new(store);

        let profile = repertory.get_user_profile("user123").await.unwrap().unwrap();

        let last = profile.achievements.last().unwrap();
        assert_eq!(
            last.earned_at,
            Some(StoreValue::Number(Number::Integer(1742068800)))
        );
        assert_eq!(last.progress, Some(s("complete")));
        assert_eq!(profile.achievements.len(), 3);
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let store = Arc::new(StubStore::failing(StoreError::QueryFailed(
            "Table not found: Repertory-Users".to_string(),
        )));
        let repertory = Repertory::new(store);

        let result = repertory.get_user_profile("user123").await;

        assert_eq!(
            result,
            Err(StoreError::QueryFailed(
                "Table not found: Repertory-Users".to_string()
            ))
        );
    }
}
