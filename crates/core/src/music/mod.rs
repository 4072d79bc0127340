mod accessors;
mod conversions;
mod profile;
#[cfg(test)]
mod stub;
mod types;

pub use accessors::Repertory;
pub use conversions::{
    item_to_achievement, item_to_performance, item_to_piece, item_to_repertoire_entry,
    item_to_user, item_to_user_achievement, repertoire_entry_to_item,
};
pub use types::{
    Achievement, EnrichedAchievement, Performance, Piece, PieceStatus, RepertoireEntry, User,
    UserAchievement, UserProfile,
};
