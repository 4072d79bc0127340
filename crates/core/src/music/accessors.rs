//! Per-entity accessors.
//!
//! Each accessor is one store call followed by an immediate conversion into
//! typed records. Store errors are returned as-is.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::store::{Collection, Filter, Index, Key, Query, RecordStore, Result};

use super::conversions::{
    convert_all, item_to_achievement, item_to_performance, item_to_piece,
    item_to_repertoire_entry, item_to_user, item_to_user_achievement, repertoire_entry_to_item,
};
use super::types::{
    Achievement, Performance, Piece, PieceStatus, RepertoireEntry, User, UserAchievement,
};

/// Handle to the music-practice data held in a record store.
///
/// Built once at startup around the process-wide store client. Cloning only
/// clones the `Arc`.
#[derive(Clone)]
pub struct Repertory {
    store: Arc<dyn RecordStore>,
}

impl Repertory {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    // ------------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------------

    /// Gets a user by ID.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        tracing::debug!(user_id, "get_user");
        let key = Key::partition(Collection::Users.partition_key(), user_id);
        self.store
            .get_item(Collection::Users, key)
            .await?
            .map(item_to_user)
            .transpose()
    }

    /// Gets every user whose `instruments` set contains `instrument`.
    ///
    /// This is a full scan of the Users collection: cost grows with the
    /// number of users, not the number of matches.
    pub async fn get_users_by_instrument(&self, instrument: &str) -> Result<Vec<User>> {
        tracing::debug!(instrument, "get_users_by_instrument (scan)");
        let items = self
            .store
            .scan(Collection::Users, Filter::contains("instruments", instrument))
            .await?;
        convert_all(items, item_to_user)
    }

    // ------------------------------------------------------------------------
    // Pieces
    // ------------------------------------------------------------------------

    /// Gets a piece by ID.
    pub async fn get_piece(&self, piece_id: &str) -> Result<Option<Piece>> {
        tracing::debug!(piece_id, "get_piece");
        let key = Key::partition(Collection::Pieces.partition_key(), piece_id);
        self.store
            .get_item(Collection::Pieces, key)
            .await?
            .map(item_to_piece)
            .transpose()
    }

    /// Gets all pieces of an era.
    pub async fn get_pieces_by_era(&self, era: &str) -> Result<Vec<Piece>> {
        tracing::debug!(era, "get_pieces_by_era");
        let items = self.store.query(Query::on_index(Index::Era, era)).await?;
        convert_all(items, item_to_piece)
    }

    // ------------------------------------------------------------------------
    // Repertoire
    // ------------------------------------------------------------------------

    /// Gets all pieces in a user's repertoire.
    pub async fn get_user_repertoire(&self, user_id: &str) -> Result<Vec<RepertoireEntry>> {
        tracing::debug!(user_id, "get_user_repertoire");
        let items = self
            .store
            .query(Query::partition(Collection::UserRepertoire, user_id))
            .await?;
        convert_all(items, item_to_repertoire_entry)
    }

    /// Gets the pieces in a user's repertoire with the given status.
    pub async fn find_pieces_by_status(
        &self,
        user_id: &str,
        status: &PieceStatus,
    ) -> Result<Vec<RepertoireEntry>> {
        tracing::debug!(user_id, status = %status, "find_pieces_by_status");
        let query = Query::partition(Collection::UserRepertoire, user_id)
            .with_filter(Filter::eq("pieceStatus", status.as_str()));
        let items = self.store.query(query).await?;
        convert_all(items, item_to_repertoire_entry)
    }

    /// Adds a piece to a user's repertoire.
    ///
    /// Overwrites any existing entry for the same (user, piece) pair.
    pub async fn add_to_repertoire(&self, entry: &RepertoireEntry) -> Result<()> {
        self.store
            .put_item(Collection::UserRepertoire, repertoire_entry_to_item(entry))
            .await?;

        tracing::info!(
            user_id = %entry.user_id,
            piece_id = %entry.piece_id,
            status = ?entry.piece_status.as_ref().map(PieceStatus::as_str),
            "Added piece to repertoire"
        );

        Ok(())
    }

    // ------------------------------------------------------------------------
    // Performances
    // ------------------------------------------------------------------------

    /// Gets all performances of a user.
    pub async fn get_user_performances(&self, user_id: &str) -> Result<Vec<Performance>> {
        tracing::debug!(user_id, "get_user_performances");
        let items = self
            .store
            .query(Query::partition(Collection::Performances, user_id))
            .await?;
        convert_all(items, item_to_performance)
    }

    /// Gets all performances on a date, across users.
    pub async fn get_performances_by_date(&self, date: NaiveDate) -> Result<Vec<Performance>> {
        let date = date.format("%Y-%m-%d").to_string();
        tracing::debug!(date = %date, "get_performances_by_date");
        let items = self
            .store
            .query(Query::on_index(Index::PerformanceDate, date))
            .await?;
        convert_all(items, item_to_performance)
    }

    // ------------------------------------------------------------------------
    // Achievements
    // ------------------------------------------------------------------------

    /// Gets an achievement definition by ID.
    pub async fn get_achievement(&self, achievement_id: &str) -> Result<Option<Achievement>> {
        tracing::debug!(achievement_id, "get_achievement");
        let key = Key::partition(Collection::Achievements.partition_key(), achievement_id);
        self.store
            .get_item(Collection::Achievements, key)
            .await?
            .map(item_to_achievement)
            .transpose()
    }

    /// Gets all achievement definitions in a category.
    pub async fn get_achievements_by_category(&self, category: &str) -> Result<Vec<Achievement>> {
        tracing::debug!(category, "get_achievements_by_category");
        let items = self
            .store
            .query(Query::on_index(Index::AchievementCategory, category))
            .await?;
        convert_all(items, item_to_achievement)
    }

    /// Gets the achievements a user has earned or is working towards.
    pub async fn get_user_achievements(&self, user_id: &str) -> Result<Vec<UserAchievement>> {
        tracing::debug!(user_id, "get_user_achievements");
        let items = self
            .store
            .query(Query::partition(Collection::UserAchievements, user_id))
            .await?;
        convert_all(items, item_to_user_achievement)
    }

    /// Gets every user record referencing an achievement.
    pub async fn get_users_with_achievement(
        &self,
        achievement_id: &str,
    ) -> Result<Vec<UserAchievement>> {
        tracing::debug!(achievement_id, "get_users_with_achievement");
        let items = self
            .store
            .query(Query::on_index(Index::AchievementId, achievement_id))
            .await?;
        convert_all(items, item_to_user_achievement)
    }
}
