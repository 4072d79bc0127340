use std::io::Write;

use anyhow::Result;
use repertory_core::music::{PieceStatus, RepertoireEntry, Repertory};
use repertory_core::output::pretty_print;

/// Read and update repertoires: list, search by instrument, add a piece, and
/// filter by status.
pub async fn run(repertory: &Repertory, out: &mut impl Write) -> Result<()> {
    let john_repertoire = repertory.get_user_repertoire("user123").await?;
    writeln!(out, "{}", pretty_print("John's repertoire", &john_repertoire))?;

    let violinists = repertory.get_users_by_instrument("Violin").await?;
    writeln!(out, "{}", pretty_print("Violinists", &violinists))?;

    let entry = RepertoireEntry::new("user456", "piece4", "Cello Concerto", "Dvorak")
        .with_status(PieceStatus::Learning);
    repertory.add_to_repertoire(&entry).await?;

    let jane_repertoire = repertory.get_user_repertoire("user456").await?;
    writeln!(
        out,
        "{}",
        pretty_print("Jane's updated repertoire", &jane_repertoire)
    )?;

    let mastered = repertory
        .find_pieces_by_status("user123", &PieceStatus::Mastered)
        .await?;
    writeln!(out, "{}", pretty_print("John's mastered pieces", &mastered))?;

    Ok(())
}
