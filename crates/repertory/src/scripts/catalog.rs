use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use repertory_core::music::Repertory;
use repertory_core::output::pretty_print;

/// Walk the catalog: pieces, performances, achievements and one profile.
pub async fn run(repertory: &Repertory, out: &mut impl Write) -> Result<()> {
    let baroque_pieces = repertory.get_pieces_by_era("Baroque").await?;
    writeln!(out, "{}", pretty_print("Baroque pieces", &baroque_pieces))?;

    let john_performances = repertory.get_user_performances("user123").await?;
    writeln!(
        out,
        "{}",
        pretty_print("John's performances", &john_performances)
    )?;

    let date = NaiveDate::from_ymd_opt(2025, 3, 15).context("invalid performance date")?;
    let march_performances = repertory.get_performances_by_date(date).await?;
    writeln!(
        out,
        "{}",
        pretty_print("Performances on March 15, 2025", &march_performances)
    )?;

    let performance_achievements = repertory.get_achievements_by_category("Performance").await?;
    writeln!(
        out,
        "{}",
        pretty_print("Performance achievements", &performance_achievements)
    )?;

    let first_performers = repertory.get_users_with_achievement("ach1").await?;
    writeln!(
        out,
        "{}",
        pretty_print("Users with 'First Performance' achievement", &first_performers)
    )?;

    let john_profile = repertory.get_user_profile("user123").await?;
    writeln!(
        out,
        "{}",
        pretty_print("John's complete profile", &john_profile)
    )?;

    Ok(())
}
