use serde::Serialize;

// ── Named entities ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Performer {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Studio {
    pub id: i64,
    pub name: String,
}

// ── Media items ──────────────────────────────────────────────────

/// A video scene in the catalog. `organized` marks items a user has
/// manually finalized; those are never auto-tagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    pub id: i64,
    pub path: String,
    pub organized: bool,
    pub performer_ids: Vec<i64>,
    pub tag_ids: Vec<i64>,
    pub studio_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub id: i64,
    pub path: String,
    pub organized: bool,
    pub performer_ids: Vec<i64>,
    pub tag_ids: Vec<i64>,
    pub studio_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gallery {
    pub id: i64,
    pub path: String,
    pub organized: bool,
    pub performer_ids: Vec<i64>,
    pub tag_ids: Vec<i64>,
    pub studio_ids: Vec<i64>,
}

// ── Query filters ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionModifier {
    Equals,
    MatchesRegex,
}

/// A string comparison against a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringCriterion {
    pub value: String,
    pub modifier: CriterionModifier,
}

impl StringCriterion {
    pub fn matches_regex(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            modifier: CriterionModifier::MatchesRegex,
        }
    }
}

/// Filter applied when querying media items. Unset fields do not
/// constrain the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilter {
    pub organized: Option<bool>,
    pub path: Option<StringCriterion>,
}

/// Page-size directive. The `All` sentinel requests the complete result
/// set in one logical call, regardless of normal page-size limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerPage {
    All,
    Limit(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindOptions {
    pub per_page: PerPage,
}

impl FindOptions {
    pub fn all() -> Self {
        Self {
            per_page: PerPage::All,
        }
    }

    pub fn limit(n: u32) -> Self {
        Self {
            per_page: PerPage::Limit(n),
        }
    }
}

// ── Relation updates ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Union merge: adding an already-present id is a no-op.
    Add,
    /// Set difference.
    Remove,
    /// Replace the whole relation set.
    Set,
}

/// Directive merging a set of entity ids into an item's relation field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdUpdate {
    pub ids: Vec<i64>,
    pub mode: UpdateMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationField {
    Performers,
    Tags,
    Studios,
}

/// Partial update of a media item. Only set fields are applied; the
/// engine always sets exactly one via [`MediaPartial::relation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaPartial {
    pub performers: Option<IdUpdate>,
    pub tags: Option<IdUpdate>,
    pub studios: Option<IdUpdate>,
}

impl MediaPartial {
    pub fn relation(field: RelationField, update: IdUpdate) -> Self {
        let mut partial = Self::default();
        match field {
            RelationField::Performers => partial.performers = Some(update),
            RelationField::Tags => partial.tags = Some(update),
            RelationField::Studios => partial.studios = Some(update),
        }
        partial
    }
}

// ── Reporting ────────────────────────────────────────────────────

/// Items tagged for one entity, per media kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TagCounts {
    pub scenes: usize,
    pub images: usize,
    pub galleries: usize,
}

impl TagCounts {
    pub fn total(&self) -> usize {
        self.scenes + self.images + self.galleries
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct LibraryStats {
    pub performers: usize,
    pub tags: usize,
    pub studios: usize,
    pub scenes: usize,
    pub images: usize,
    pub galleries: usize,
    pub organized: usize,
}
