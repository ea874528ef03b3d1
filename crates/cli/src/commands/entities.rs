use anyhow::Result;
use mediatag_core::Library;

#[derive(Debug, Clone, Copy)]
pub enum EntityKind {
    Performers,
    Tags,
    Studios,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Performers => "performer",
            EntityKind::Tags => "tag",
            EntityKind::Studios => "studio",
        }
    }
}

pub fn add(library: &Library, kind: EntityKind, name: &str) -> Result<()> {
    let (id, name) = match kind {
        EntityKind::Performers => {
            let p = library.add_performer(name)?;
            (p.id, p.name)
        }
        EntityKind::Tags => {
            let t = library.add_tag(name)?;
            (t.id, t.name)
        }
        EntityKind::Studios => {
            let s = library.add_studio(name)?;
            (s.id, s.name)
        }
    };
    println!("Added {} {id}: {name}", kind.label());
    Ok(())
}

pub fn list(library: &Library, kind: EntityKind) -> Result<()> {
    let rows: Vec<(i64, String)> = match kind {
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

    if rows.is_empty() {
        println!("No {}s registered.", kind.label());
        return Ok(());
    }
    for (id, name) in rows {
        println!("{id:>6}  {name}");
    }
    Ok(())
}
