pub mod autotag;
pub mod cancel;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod repository;

use std::path::Path;

use autotag::tag_media;
use cancel::CancelToken;
use catalog::Catalog;
use domain::*;
use error::Result;

/// The main entry point for the mediatag library: a catalog of named
/// entities (performers, tags, studios) and media items (scenes,
/// images, galleries), plus the auto-tagging batch operations that
/// associate them by matching entity names against file paths.
pub struct Library {
    catalog: Catalog,
}

impl Library {
    /// Open or create a library catalog at the given path.
    pub fn open(catalog_path: &Path) -> Result<Self> {
        Ok(Self {
            catalog: Catalog::open(catalog_path)?,
        })
    }

    /// Open an in-memory library (for testing).
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            catalog: Catalog::open_in_memory()?,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ── Registration ─────────────────────────────────────────────

    pub fn add_performer(&self, name: &str) -> Result<Performer> {
        self.catalog.add_performer(name)
    }

    pub fn add_tag(&self, name: &str) -> Result<Tag> {
        self.catalog.add_tag(name)
    }

    pub fn add_studio(&self, name: &str) -> Result<Studio> {
        self.catalog.add_studio(name)
    }

    pub fn add_scene(&self, path: &str, organized: bool) -> Result<Scene> {
        self.catalog.add_scene(path, organized)
    }

    pub fn add_image(&self, path: &str, organized: bool) -> Result<Image> {
        self.catalog.add_image(path, organized)
    }

    pub fn add_gallery(&self, path: &str, organized: bool) -> Result<Gallery> {
        self.catalog.add_gallery(path, organized)
    }

    pub fn performers(&self) -> Result<Vec<Performer>> {
        self.catalog.performers()
    }

    pub fn tags(&self) -> Result<Vec<Tag>> {
        self.catalog.tags()
    }

    pub fn studios(&self) -> Result<Vec<Studio>> {
        self.catalog.studios()
    }

    pub fn scenes(&self) -> Result<Vec<Scene>> {
        self.catalog.scenes()
    }

    pub fn images(&self) -> Result<Vec<Image>> {
        self.catalog.images()
    }

    pub fn galleries(&self) -> Result<Vec<Gallery>> {
        self.catalog.galleries()
    }

    /// Library summary statistics.
    pub fn status(&self) -> Result<LibraryStats> {
        self.catalog.stats()
    }

    // ── Auto-tagging ─────────────────────────────────────────────

    /// Auto-tag one performer across scenes, images and galleries.
    pub fn tag_performer(
        &self,
        token: &CancelToken,
        performer_id: i64,
        extra: Option<&MatchFilter>,
    ) -> Result<TagCounts> {
        let performer = self.catalog.find_performer(performer_id)?;
        self.tag_entity(token, performer.id, &performer.name, RelationField::Performers, extra)
    }

    /// Auto-tag one tag across scenes, images and galleries.
    pub fn tag_tag(
        &self,
        token: &CancelToken,
        tag_id: i64,
        extra: Option<&MatchFilter>,
    ) -> Result<TagCounts> {
        let tag = self.catalog.find_tag(tag_id)?;
        self.tag_entity(token, tag.id, &tag.name, RelationField::Tags, extra)
    }

    /// Auto-tag one studio across scenes, images and galleries.
    pub fn tag_studio(
        &self,
        token: &CancelToken,
        studio_id: i64,
        extra: Option<&MatchFilter>,
    ) -> Result<TagCounts> {
        let studio = self.catalog.find_studio(studio_id)?;
        self.tag_entity(token, studio.id, &studio.name, RelationField::Studios, extra)
    }

    /// Auto-tag every performer in the catalog. Fail-fast across
    /// entities, same as within one batch.
    pub fn tag_all_performers(&self, token: &CancelToken) -> Result<TagCounts> {
        let mut totals = TagCounts::default();
        for performer in self.performers()? {
            let counts = self.tag_performer(token, performer.id, None)?;
            totals = add_counts(totals, counts);
        }
        Ok(totals)
    }

    pub fn tag_all_tags(&self, token: &CancelToken) -> Result<TagCounts> {
        let mut totals = TagCounts::default();
        for tag in self.tags()? {
            let counts = self.tag_tag(token, tag.id, None)?;
            totals = add_counts(totals, counts);
        }
        Ok(totals)
    }

    pub fn tag_all_studios(&self, token: &CancelToken) -> Result<TagCounts> {
        let mut totals = TagCounts::default();
        for studio in self.studios()? {
            let counts = self.tag_studio(token, studio.id, None)?;
            totals = add_counts(totals, counts);
        }
        Ok(totals)
    }

    fn tag_entity(
        &self,
        token: &CancelToken,
        entity_id: i64,
        name: &str,
        field: RelationField,
        extra: Option<&MatchFilter>,
    ) -> Result<TagCounts> {
        Ok(TagCounts {
            scenes: tag_media(token, entity_id, name, field, extra, &self.catalog.scene_store())?,
            images: tag_media(token, entity_id, name, field, extra, &self.catalog.image_store())?,
            galleries: tag_media(
                token,
                entity_id,
                name,
                field,
                extra,
                &self.catalog.gallery_store(),
            )?,
        })
    }
}

fn add_counts(a: TagCounts, b: TagCounts) -> TagCounts {
    TagCounts {
        scenes: a.scenes + b.scenes,
        images: a.images + b.images,
        galleries: a.galleries + b.galleries,
    }
}
