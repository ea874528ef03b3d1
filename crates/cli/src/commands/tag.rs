use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use mediatag_core::cancel::CancelToken;
use mediatag_core::domain::TagCounts;
use mediatag_core::Library;

use super::entities::EntityKind;

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("  {bar:30.cyan/blue} {pos:>4}/{len:<4} {msg}")
        .unwrap()
        .progress_chars("━╸─")
}

fn print_counts(label: &str, counts: TagCounts) {
    println!(
        "  {label}: {} scenes, {} images, {} galleries",
        counts.scenes, counts.images, counts.galleries
    );
}

/// Tag one entity by id, or every entity of the kind.
pub fn entities(library: &Library, kind: EntityKind, id: Option<i64>) -> Result<()> {
    let token = CancelToken::new();

    if let Some(id) = id {
        let counts = match kind {
            EntityKind::Performers => library.tag_performer(&token, id, None)?,
            EntityKind::Tags => library.tag_tag(&token, id, None)?,
            EntityKind::Studios => library.tag_studio(&token, id, None)?,
        };
        print_counts(&format!("{} {id}", kind.label()), counts);
        return Ok(());
    }

    let names: Vec<(i64, String)> = match kind {
        EntityKind::Performers => library
            .performers()?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect(),
        EntityKind::Tags => library.tags()?.into_iter().map(|t| (t.id, t.name)).collect(),
        EntityKind::Studios => library
            .studios()?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect(),
    };

    let pb = ProgressBar::new(names.len() as u64);
    pb.set_style(bar_style());

    let mut totals = TagCounts::default();
    for (entity_id, name) in names {
        pb.set_message(name);
        let counts = match kind {
            EntityKind::Performers => library.tag_performer(&token, entity_id, None)?,
            EntityKind::Tags => library.tag_tag(&token, entity_id, None)?,
            EntityKind::Studios => library.tag_studio(&token, entity_id, None)?,
        };
        totals.scenes += counts.scenes;
        totals.images += counts.images;
        totals.galleries += counts.galleries;
        pb.inc(1);
    }
    pb.finish_and_clear();

    print_counts(&format!("all {}s", kind.label()), totals);
    Ok(())
}

/// Tag everything: all performers, then all tags, then all studios.
pub fn all(library: &Library) -> Result<()> {
    for kind in [EntityKind::Performers, EntityKind::Tags, EntityKind::Studios] {
        entities(library, kind, None)?;
    }
    Ok(())
}
