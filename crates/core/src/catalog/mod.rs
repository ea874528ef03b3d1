pub mod schema;

use std::path::Path;
use std::sync::Arc;

use regex::Regex;
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use crate::domain::*;
use crate::error::{Error, Result};
use crate::repository::MediaStore;

/// The three media tables share one shape; queries and updates are
/// written once against this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MediaKind {
    Scene,
    Image,
    Gallery,
}

impl MediaKind {
    fn table(self) -> &'static str {
        match self {
            MediaKind::Scene => "scenes",
            MediaKind::Image => "images",
            MediaKind::Gallery => "galleries",
        }
    }

    fn id_column(self) -> &'static str {
        match self {
            MediaKind::Scene => "scene_id",
            MediaKind::Image => "image_id",
            MediaKind::Gallery => "gallery_id",
        }
    }

    fn relation_table(self, field: RelationField) -> &'static str {
        match (self, field) {
            (MediaKind::Scene, RelationField::Performers) => "scene_performers",
            (MediaKind::Scene, RelationField::Tags) => "scene_tags",
            (MediaKind::Scene, RelationField::Studios) => "scene_studios",
            (MediaKind::Image, RelationField::Performers) => "image_performers",
            (MediaKind::Image, RelationField::Tags) => "image_tags",
            (MediaKind::Image, RelationField::Studios) => "image_studios",
            (MediaKind::Gallery, RelationField::Performers) => "gallery_performers",
            (MediaKind::Gallery, RelationField::Tags) => "gallery_tags",
            (MediaKind::Gallery, RelationField::Studios) => "gallery_studios",
        }
    }
}

fn entity_column(field: RelationField) -> &'static str {
    match field {
        RelationField::Performers => "performer_id",
        RelationField::Tags => "tag_id",
        RelationField::Studios => "studio_id",
    }
}

/// One media row plus its relation sets, before conversion into the
/// kind-specific item type.
#[derive(Debug, Clone)]
struct MediaRow {
    id: i64,
    path: String,
    organized: bool,
    performer_ids: Vec<i64>,
    tag_ids: Vec<i64>,
    studio_ids: Vec<i64>,
}

impl From<MediaRow> for Scene {
    fn from(r: MediaRow) -> Self {
        Scene {
            id: r.id,
            path: r.path,
            organized: r.organized,
            performer_ids: r.performer_ids,
            tag_ids: r.tag_ids,
            studio_ids: r.studio_ids,
        }
    }
}

impl From<MediaRow> for Image {
    fn from(r: MediaRow) -> Self {
        Image {
            id: r.id,
            path: r.path,
            organized: r.organized,
            performer_ids: r.performer_ids,
            tag_ids: r.tag_ids,
            studio_ids: r.studio_ids,
        }
    }
}

impl From<MediaRow> for Gallery {
    fn from(r: MediaRow) -> Self {
        Gallery {
            id: r.id,
            path: r.path,
            organized: r.organized,
            performer_ids: r.performer_ids,
            tag_ids: r.tag_ids,
            studio_ids: r.studio_ids,
        }
    }
}

/// Back the MATCHES_REGEX criterion with the regex crate. The compiled
/// pattern is cached as aux data, so it compiles once per statement
/// rather than once per row.
fn register_regexp(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        "regexp",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let pattern: Arc<Regex> = ctx.get_or_create_aux(
                0,
                |vr| -> std::result::Result<_, Box<dyn std::error::Error + Send + Sync>> {
                    Ok(Regex::new(vr.as_str()?)?)
                },
            )?;
            let text = ctx
                .get_raw(1)
                .as_str()
                .map_err(|e| rusqlite::Error::UserFunctionError(e.into()))?;
            Ok(pattern.is_match(text))
        },
    )?;
    Ok(())
}

/// SQLite-backed catalog of entities, media items and their relations.
pub struct Catalog {
    conn: Connection,
}

impl Catalog {
    /// Open or create a catalog at the given path with WAL mode.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        register_regexp(&conn)?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory catalog (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        register_regexp(&conn)?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    // ── Entities ─────────────────────────────────────────────────

    pub fn add_performer(&self, name: &str) -> Result<Performer> {
        let id = self.insert_entity("performers", name)?;
        Ok(Performer {
            id,
            name: name.to_string(),
        })
    }

    pub fn add_tag(&self, name: &str) -> Result<Tag> {
        let id = self.insert_entity("tags", name)?;
        Ok(Tag {
            id,
            name: name.to_string(),
        })
    }

    pub fn add_studio(&self, name: &str) -> Result<Studio> {
        let id = self.insert_entity("studios", name)?;
        Ok(Studio {
            id,
            name: name.to_string(),
        })
    }

    pub fn performers(&self) -> Result<Vec<Performer>> {
        self.list_entities("performers")
            .map(|rows| rows.into_iter().map(|(id, name)| Performer { id, name }).collect())
    }

    pub fn tags(&self) -> Result<Vec<Tag>> {
        self.list_entities("tags")
            .map(|rows| rows.into_iter().map(|(id, name)| Tag { id, name }).collect())
    }

    pub fn studios(&self) -> Result<Vec<Studio>> {
        self.list_entities("studios")
            .map(|rows| rows.into_iter().map(|(id, name)| Studio { id, name }).collect())
    }

    pub fn find_performer(&self, id: i64) -> Result<Performer> {
        let name = self
            .entity_name("performers", id)?
            .ok_or(Error::PerformerNotFound(id))?;
        Ok(Performer { id, name })
    }

    pub fn find_tag(&self, id: i64) -> Result<Tag> {
        let name = self.entity_name("tags", id)?.ok_or(Error::TagNotFound(id))?;
        Ok(Tag { id, name })
    }

    pub fn find_studio(&self, id: i64) -> Result<Studio> {
        let name = self
            .entity_name("studios", id)?
            .ok_or(Error::StudioNotFound(id))?;
        Ok(Studio { id, name })
    }

    fn insert_entity(&self, table: &str, name: &str) -> Result<i64> {
        let now = chrono::Utc::now().timestamp();
        self.conn.execute(
            &format!("INSERT INTO {table} (name, created_at) VALUES (?1, ?2)"),
            params![name, now],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list_entities(&self, table: &str) -> Result<Vec<(i64, String)>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT id, name FROM {table} ORDER BY id"))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn entity_name(&self, table: &str, id: i64) -> Result<Option<String>> {
        let name = self
            .conn
            .query_row(
                &format!("SELECT name FROM {table} WHERE id = ?1"),
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(name)
    }

    // ── Media items ──────────────────────────────────────────────

    pub fn add_scene(&self, path: &str, organized: bool) -> Result<Scene> {
        self.insert_media(MediaKind::Scene, path, organized).map(Scene::from)
    }

    pub fn add_image(&self, path: &str, organized: bool) -> Result<Image> {
        self.insert_media(MediaKind::Image, path, organized).map(Image::from)
    }

    pub fn add_gallery(&self, path: &str, organized: bool) -> Result<Gallery> {
        self.insert_media(MediaKind::Gallery, path, organized).map(Gallery::from)
    }

    pub fn scenes(&self) -> Result<Vec<Scene>> {
        let (rows, _) = self.query_media(MediaKind::Scene, &MatchFilter::default(), &FindOptions::all())?;
        Ok(rows.into_iter().map(Scene::from).collect())
    }

    pub fn images(&self) -> Result<Vec<Image>> {
        let (rows, _) = self.query_media(MediaKind::Image, &MatchFilter::default(), &FindOptions::all())?;
        Ok(rows.into_iter().map(Image::from).collect())
    }

    pub fn galleries(&self) -> Result<Vec<Gallery>> {
        let (rows, _) = self.query_media(MediaKind::Gallery, &MatchFilter::default(), &FindOptions::all())?;
        Ok(rows.into_iter().map(Gallery::from).collect())
    }

    pub fn set_scene_organized(&self, id: i64, organized: bool) -> Result<()> {
        self.set_organized(MediaKind::Scene, id, organized)
    }

    pub fn set_image_organized(&self, id: i64, organized: bool) -> Result<()> {
        self.set_organized(MediaKind::Image, id, organized)
    }

    pub fn set_gallery_organized(&self, id: i64, organized: bool) -> Result<()> {
        self.set_organized(MediaKind::Gallery, id, organized)
    }

    fn insert_media(&self, kind: MediaKind, path: &str, organized: bool) -> Result<MediaRow> {
        let now = chrono::Utc::now().timestamp();
        self.conn.execute(
            &format!(
                "INSERT INTO {} (path, organized, created_at) VALUES (?1, ?2, ?3)",
                kind.table()
            ),
            params![path, organized, now],
        )?;
        self.media_row(kind, self.conn.last_insert_rowid())
    }

    fn set_organized(&self, kind: MediaKind, id: i64, organized: bool) -> Result<()> {
        let changed = self.conn.execute(
            &format!("UPDATE {} SET organized = ?1 WHERE id = ?2", kind.table()),
            params![organized, id],
        )?;
        if changed == 0 {
            return Err(Error::Database(rusqlite::Error::QueryReturnedNoRows));
        }
        Ok(())
    }

    // ── Stats ────────────────────────────────────────────────────

    pub fn stats(&self) -> Result<LibraryStats> {
        let count = |sql: &str| -> Result<usize> {
            let n: i64 = self.conn.query_row(sql, [], |row| row.get(0))?;
            Ok(n as usize)
        };
        Ok(LibraryStats {
            performers: count("SELECT COUNT(*) FROM performers")?,
            tags: count("SELECT COUNT(*) FROM tags")?,
            studios: count("SELECT COUNT(*) FROM studios")?,
            scenes: count("SELECT COUNT(*) FROM scenes")?,
            images: count("SELECT COUNT(*) FROM images")?,
            galleries: count("SELECT COUNT(*) FROM galleries")?,
            organized: count(
                "SELECT (SELECT COUNT(*) FROM scenes WHERE organized = 1)
                      + (SELECT COUNT(*) FROM images WHERE organized = 1)
                      + (SELECT COUNT(*) FROM galleries WHERE organized = 1)",
            )?,
        })
    }

    // ── Store adapters ───────────────────────────────────────────

    pub fn scene_store(&self) -> SceneStore<'_> {
        SceneStore { catalog: self }
    }

    pub fn image_store(&self) -> ImageStore<'_> {
        ImageStore { catalog: self }
    }

    pub fn gallery_store(&self) -> GalleryStore<'_> {
        GalleryStore { catalog: self }
    }

    // ── Shared query/update plumbing ─────────────────────────────

    fn query_media(
        &self,
        kind: MediaKind,
        filter: &MatchFilter,
        find: &FindOptions,
    ) -> Result<(Vec<MediaRow>, usize)> {
        let mut clauses = String::new();
        let mut values: Vec<rusqlite::types::Value> = Vec::new();

        if let Some(organized) = filter.organized {
            clauses.push_str(" AND organized = ?");
            values.push((organized as i64).into());
        }
        if let Some(criterion) = &filter.path {
            match criterion.modifier {
                CriterionModifier::Equals => clauses.push_str(" AND path = ?"),
                CriterionModifier::MatchesRegex => {
                    // Surface a malformed pattern as a query error up
                    // front instead of failing row by row.
                    Regex::new(&criterion.value)?;
                    clauses.push_str(" AND path REGEXP ?");
                }
            }
            values.push(criterion.value.clone().into());
        }

        let total: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {} WHERE 1=1{}", kind.table(), clauses),
            params_from_iter(values.iter()),
            |row| row.get(0),
        )?;

        let mut sql = format!(
            "SELECT id, path, organized FROM {} WHERE 1=1{} ORDER BY id",
            kind.table(),
            clauses
        );
        if let PerPage::Limit(n) = find.per_page {
            sql.push_str(&format!(" LIMIT {n}"));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let bare = stmt
            .query_map(params_from_iter(values.iter()), |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, bool>(2)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut rows = Vec::with_capacity(bare.len());
        for (id, path, organized) in bare {
            rows.push(MediaRow {
                id,
                path,
                organized,
                performer_ids: self.relation_ids(kind, RelationField::Performers, id)?,
                tag_ids: self.relation_ids(kind, RelationField::Tags, id)?,
                studio_ids: self.relation_ids(kind, RelationField::Studios, id)?,
            });
        }
        Ok((rows, total as usize))
    }

    fn media_row(&self, kind: MediaKind, id: i64) -> Result<MediaRow> {
        let (path, organized) = self.conn.query_row(
            &format!("SELECT path, organized FROM {} WHERE id = ?1", kind.table()),
            params![id],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, bool>(1)?)),
        )?;
        Ok(MediaRow {
            id,
            path,
            organized,
            performer_ids: self.relation_ids(kind, RelationField::Performers, id)?,
            tag_ids: self.relation_ids(kind, RelationField::Tags, id)?,
            studio_ids: self.relation_ids(kind, RelationField::Studios, id)?,
        })
    }

    fn relation_ids(&self, kind: MediaKind, field: RelationField, item_id: i64) -> Result<Vec<i64>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {entity} FROM {table} WHERE {item} = ?1 ORDER BY {entity}",
            entity = entity_column(field),
            table = kind.relation_table(field),
            item = kind.id_column(),
        ))?;
        let ids = stmt
            .query_map(params![item_id], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(ids)
    }

    /// Apply a partial update inside one transaction, so each item's
    /// read-merge-write is atomic with respect to other writers.
    fn update_media(&self, kind: MediaKind, id: i64, partial: &MediaPartial) -> Result<MediaRow> {
        let tx = self.conn.unchecked_transaction()?;

        // Updating a missing item is an error, not a silent no-op.
        tx.query_row(
            &format!("SELECT id FROM {} WHERE id = ?1", kind.table()),
            params![id],
            |_| Ok(()),
        )?;

        let directives = [
            (RelationField::Performers, &partial.performers),
            (RelationField::Tags, &partial.tags),
            (RelationField::Studios, &partial.studios),
        ];
        for (field, update) in directives {
            if let Some(update) = update {
                apply_id_update(&tx, kind, field, id, update)?;
            }
        }
        tx.commit()?;

        self.media_row(kind, id)
    }
}

fn apply_id_update(
    conn: &Connection,
    kind: MediaKind,
    field: RelationField,
    item_id: i64,
    update: &IdUpdate,
) -> Result<()> {
    let table = kind.relation_table(field);
    let item = kind.id_column();
    let entity = entity_column(field);

    match update.mode {
        UpdateMode::Add => {
            for entity_id in &update.ids {
                conn.execute(
                    &format!(
                        "INSERT OR IGNORE INTO {table} ({item}, {entity}) VALUES (?1, ?2)"
                    ),
                    params![item_id, entity_id],
                )?;
            }
        }
        UpdateMode::Remove => {
            for entity_id in &update.ids {
                conn.execute(
                    &format!("DELETE FROM {table} WHERE {item} = ?1 AND {entity} = ?2"),
                    params![item_id, entity_id],
                )?;
            }
        }
        UpdateMode::Set => {
            conn.execute(
                &format!("DELETE FROM {table} WHERE {item} = ?1"),
                params![item_id],
            )?;
            for entity_id in &update.ids {
                conn.execute(
                    &format!(
                        "INSERT OR IGNORE INTO {table} ({item}, {entity}) VALUES (?1, ?2)"
                    ),
                    params![item_id, entity_id],
                )?;
            }
        }
    }
    Ok(())
}

pub struct SceneStore<'a> {
    catalog: &'a Catalog,
}

pub struct ImageStore<'a> {
    catalog: &'a Catalog,
}

pub struct GalleryStore<'a> {
    catalog: &'a Catalog,
}

impl MediaStore for SceneStore<'_> {
    type Item = Scene;

    fn query(&self, filter: &MatchFilter, find: &FindOptions) -> Result<(Vec<Scene>, usize)> {
        let (rows, total) = self.catalog.query_media(MediaKind::Scene, filter, find)?;
        Ok((rows.into_iter().map(Scene::from).collect(), total))
    }

    fn update_partial(&self, id: i64, partial: &MediaPartial) -> Result<Scene> {
        self.catalog.update_media(MediaKind::Scene, id, partial).map(Scene::from)
    }
}

impl MediaStore for ImageStore<'_> {
    type Item = Image;

    fn query(&self, filter: &MatchFilter, find: &FindOptions) -> Result<(Vec<Image>, usize)> {
        let (rows, total) = self.catalog.query_media(MediaKind::Image, filter, find)?;
        Ok((rows.into_iter().map(Image::from).collect(), total))
    }

    fn update_partial(&self, id: i64, partial: &MediaPartial) -> Result<Image> {
        self.catalog.update_media(MediaKind::Image, id, partial).map(Image::from)
    }
}

impl MediaStore for GalleryStore<'_> {
    type Item = Gallery;

    fn query(&self, filter: &MatchFilter, find: &FindOptions) -> Result<(Vec<Gallery>, usize)> {
        let (rows, total) = self.catalog.query_media(MediaKind::Gallery, filter, find)?;
        Ok((rows.into_iter().map(Gallery::from).collect(), total))
    }

    fn update_partial(&self, id: i64, partial: &MediaPartial) -> Result<Gallery> {
        self.catalog.update_media(MediaKind::Gallery, id, partial).map(Gallery::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autotag::pattern::path_regex;

    fn catalog() -> Catalog {
        Catalog::open_in_memory().unwrap()
    }

    #[test]
    fn test_find_performer_missing() {
        let c = catalog();
        let err = c.find_performer(99).unwrap_err();
        assert!(matches!(err, Error::PerformerNotFound(99)));
    }

    #[test]
    fn test_regex_query_filters_paths() {
        let c = catalog();
        c.add_scene("/media/performer.name.mp4", false).unwrap();
        c.add_scene("/media/performer_name.mp4", false).unwrap();
        c.add_scene("/media/unrelated.mp4", false).unwrap();

        let filter = MatchFilter {
            organized: Some(false),
            path: Some(StringCriterion::matches_regex(path_regex("performer name"))),
        };
        let (rows, total) = c
            .query_media(MediaKind::Scene, &filter, &FindOptions::all())
            .unwrap();
        assert_eq!(total, 2);
        let paths: Vec<&str> = rows.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/media/performer.name.mp4", "/media/performer_name.mp4"]
        );
    }

    #[test]
    fn test_regex_query_is_case_insensitive() {
        let c = catalog();
        c.add_image("/media/PERFORMER NAME.jpg", false).unwrap();

        let filter = MatchFilter {
            organized: Some(false),
            path: Some(StringCriterion::matches_regex(path_regex("performer name"))),
        };
        let (rows, _) = c
            .query_media(MediaKind::Image, &filter, &FindOptions::all())
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_organized_items_excluded() {
        let c = catalog();
        c.add_scene("/media/performer name 1.mp4", false).unwrap();
        c.add_scene("/media/performer name 2.mp4", true).unwrap();

        let filter = MatchFilter {
            organized: Some(false),
            path: Some(StringCriterion::matches_regex(path_regex("performer name"))),
        };
        let (rows, total) = c
            .query_media(MediaKind::Scene, &filter, &FindOptions::all())
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(rows[0].path, "/media/performer name 1.mp4");
    }

    #[test]
    fn test_equals_modifier() {
        let c = catalog();
        c.add_gallery("/media/a", false).unwrap();
        c.add_gallery("/media/ab", false).unwrap();

        let filter = MatchFilter {
            organized: None,
            path: Some(StringCriterion {
                value: "/media/a".to_string(),
                modifier: CriterionModifier::Equals,
            }),
        };
        let (rows, _) = c
            .query_media(MediaKind::Gallery, &filter, &FindOptions::all())
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].path, "/media/a");
    }

    #[test]
    fn test_invalid_pattern_is_query_error() {
        let c = catalog();
        let filter = MatchFilter {
            organized: None,
            path: Some(StringCriterion::matches_regex("(unclosed")),
        };
        let err = c
            .query_media(MediaKind::Scene, &filter, &FindOptions::all())
            .unwrap_err();
        assert!(matches!(err, Error::Pattern(_)));
    }

    #[test]
    fn test_limit_truncates_but_total_is_full_count() {
        let c = catalog();
        for i in 0..5 {
            c.add_scene(&format!("/media/{i}.mp4"), false).unwrap();
        }

        let (rows, total) = c
            .query_media(MediaKind::Scene, &MatchFilter::default(), &FindOptions::limit(2))
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(total, 5);
    }

    #[test]
    fn test_add_is_idempotent_union() {
        let c = catalog();
        let performer = c.add_performer("performer name").unwrap();
        let scene = c.add_scene("/media/a.mp4", false).unwrap();

        let partial = MediaPartial::relation(
            RelationField::Performers,
            IdUpdate {
                ids: vec![performer.id],
                mode: UpdateMode::Add,
            },
        );
        let first = c.update_media(MediaKind::Scene, scene.id, &partial).unwrap();
        assert_eq!(first.performer_ids, vec![performer.id]);

        // Second application is a no-op with respect to final state.
        let second = c.update_media(MediaKind::Scene, scene.id, &partial).unwrap();
        assert_eq!(second.performer_ids, vec![performer.id]);
    }

    #[test]
    fn test_remove_and_set_modes() {
        let c = catalog();
        let t1 = c.add_tag("one").unwrap();
        let t2 = c.add_tag("two").unwrap();
        let t3 = c.add_tag("three").unwrap();
        let image = c.add_image("/media/a.jpg", false).unwrap();

        let add = MediaPartial::relation(
            RelationField::Tags,
            IdUpdate {
                ids: vec![t1.id, t2.id],
                mode: UpdateMode::Add,
            },
        );
        let row = c.update_media(MediaKind::Image, image.id, &add).unwrap();
        assert_eq!(row.tag_ids, vec![t1.id, t2.id]);

        let remove = MediaPartial::relation(
            RelationField::Tags,
            IdUpdate {
                ids: vec![t1.id],
                mode: UpdateMode::Remove,
            },
        );
        let row = c.update_media(MediaKind::Image, image.id, &remove).unwrap();
        assert_eq!(row.tag_ids, vec![t2.id]);

        let set = MediaPartial::relation(
            RelationField::Tags,
            IdUpdate {
                ids: vec![t3.id],
                mode: UpdateMode::Set,
            },
        );
        let row = c.update_media(MediaKind::Image, image.id, &set).unwrap();
        assert_eq!(row.tag_ids, vec![t3.id]);
    }

    #[test]
    fn test_update_missing_item_fails() {
        let c = catalog();
        let partial = MediaPartial::relation(
            RelationField::Tags,
            IdUpdate {
                ids: vec![1],
                mode: UpdateMode::Add,
            },
        );
        let err = c.update_media(MediaKind::Scene, 42, &partial).unwrap_err();
        assert!(matches!(err, Error::Database(_)));
    }

    #[test]
    fn test_stats() {
        let c = catalog();
        c.add_performer("a").unwrap();
        c.add_scene("/media/a.mp4", false).unwrap();
        c.add_scene("/media/b.mp4", true).unwrap();
        c.add_image("/media/c.jpg", true).unwrap();

        let stats = c.stats().unwrap();
        assert_eq!(stats.performers, 1);
        assert_eq!(stats.scenes, 2);
        assert_eq!(stats.images, 1);
        assert_eq!(stats.organized, 2);
    }
}
