use anyhow::Result;
use clap::ValueEnum;
use mediatag_core::Library;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MediaKind {
    Scene,
    Image,
    Gallery,
}

impl MediaKind {
    fn label(self) -> &'static str {
        match self {
            MediaKind::Scene => "scene",
            MediaKind::Image => "image",
            MediaKind::Gallery => "gallery",
        }
    }
}

pub fn add(library: &Library, kind: MediaKind, path: &str, organized: bool) -> Result<()> {
    let id = match kind {
        MediaKind::Scene => library.add_scene(path, organized)?.id,
        MediaKind::Image => library.add_image(path, organized)?.id,
        MediaKind::Gallery => library.add_gallery(path, organized)?.id,
    };
    println!("Added {} {id}: {path}", kind.label());
    Ok(())
}

pub fn list(library: &Library, kind: MediaKind) -> Result<()> {
    let rows: Vec<(i64, String, bool, usize)> = match kind {
        MediaKind::Scene => library
            .scenes()?
            .into_iter()
            .map(|s| {
                let n = s.performer_ids.len() + s.tag_ids.len() + s.studio_ids.len();
                (s.id, s.path, s.organized, n)
            })
            .collect(),
        MediaKind::Image => library
            .images()?
            .into_iter()
            .map(|i| {
                let n = i.performer_ids.len() + i.tag_ids.len() + i.studio_ids.len();
                (i.id, i.path, i.organized, n)
            })
            .collect(),
        MediaKind::Gallery => library
            .galleries()?
            .into_iter()
            .map(|g| {
                let n = g.performer_ids.len() + g.tag_ids.len() + g.studio_ids.len();
                (g.id, g.path, g.organized, n)
            })
            .collect(),
    };

    if rows.is_empty() {
        println!("No {}s registered.", kind.label());
        return Ok(());
    }
    for (id, path, organized, relations) in rows {
        let flag = if organized { "organized" } else { "" };
        println!("{id:>6}  {path}  ({relations} relations) {flag}");
    }
    Ok(())
}

pub fn organize(library: &Library, kind: MediaKind, id: i64) -> Result<()> {
    match kind {
        MediaKind::Scene => library.catalog().set_scene_organized(id, true)?,
        MediaKind::Image => library.catalog().set_image_organized(id, true)?,
        MediaKind::Gallery => library.catalog().set_gallery_organized(id, true)?,
    }
    println!("Marked {} {id} as organized.", kind.label());
    Ok(())
}
