use crate::domain::{FindOptions, Gallery, Image, MatchFilter, MediaPartial, Scene};
use crate::error::Result;

/// The shape the matching engine needs from any media item.
pub trait MediaFile {
    fn id(&self) -> i64;
    fn path(&self) -> &str;
}

impl MediaFile for Scene {
    fn id(&self) -> i64 {
        self.id
    }
    fn path(&self) -> &str {
        &self.path
    }
}

impl MediaFile for Image {
    fn id(&self) -> i64 {
        self.id
    }
    fn path(&self) -> &str {
        &self.path
    }
}

impl MediaFile for Gallery {
    fn id(&self) -> i64 {
        self.id
    }
    fn path(&self) -> &str {
        &self.path
    }
}

/// Per-media-kind repository contract. One implementation exists for each
/// of scenes, images and galleries; any storage backend (SQL, embedded,
/// in-memory) can satisfy it.
///
/// Requirements on implementors:
/// - `query` with `PerPage::All` returns every matching row in one call,
///   read at a single consistent point.
/// - `update_partial` is atomic with respect to other writers of the same
///   item, and never introduces duplicate ids into a relation set.
pub trait MediaStore {
    type Item: MediaFile;

    /// Returns the matching items and the total match count.
    fn query(&self, filter: &MatchFilter, find: &FindOptions) -> Result<(Vec<Self::Item>, usize)>;

    /// Applies a partial update to one item and returns its new state.
    fn update_partial(&self, id: i64, partial: &MediaPartial) -> Result<Self::Item>;
}
