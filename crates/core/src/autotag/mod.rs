//! Auto-association engine: matches entity names against media file
//! paths and records the association.
//!
//! One call to [`tag_media`] is a self-contained batch for one entity
//! against one media kind: build the name pattern, run a single
//! unbounded query against the store, then apply an Add directive to
//! every match. Errors abort the remainder (fail-fast); because Add is
//! a set union, re-running after a partial failure converges.

pub mod pattern;

use crate::cancel::CancelToken;
use crate::domain::{
    FindOptions, IdUpdate, MatchFilter, MediaPartial, RelationField, StringCriterion, UpdateMode,
};
use crate::error::{Error, Result};
use crate::repository::{MediaFile, MediaStore};

/// Merge the generated match filter with caller overrides. Fields the
/// caller explicitly set win.
fn merge_filters(generated: MatchFilter, extra: Option<&MatchFilter>) -> MatchFilter {
    let Some(extra) = extra else {
        return generated;
    };
    MatchFilter {
        organized: extra.organized.or(generated.organized),
        path: extra.path.clone().or(generated.path),
    }
}

/// Query the store for unorganized items whose path matches `pat`.
/// Returns the complete result set; query failures propagate verbatim.
pub fn find_matching<S: MediaStore>(
    token: &CancelToken,
    pat: &str,
    extra: Option<&MatchFilter>,
    store: &S,
) -> Result<Vec<S::Item>> {
    if token.is_cancelled() {
        return Err(Error::Cancelled);
    }

    let filter = merge_filters(
        MatchFilter {
            organized: Some(false),
            path: Some(StringCriterion::matches_regex(pat)),
        },
        extra,
    );

    let (items, _total) = store.query(&filter, &FindOptions::all())?;
    Ok(items)
}

/// Add `entity_id` to one relation field of every item, in order.
/// Fail-fast: the first update error is returned and the remaining
/// items are not attempted; updates already applied stand. Returns the
/// number of items updated.
pub fn add_relation<S: MediaStore>(
    token: &CancelToken,
    items: &[S::Item],
    field: RelationField,
    entity_id: i64,
    store: &S,
) -> Result<usize> {
    let partial = MediaPartial::relation(
        field,
        IdUpdate {
            ids: vec![entity_id],
            mode: UpdateMode::Add,
        },
    );

    let mut updated = 0;
    for item in items {
        if token.is_cancelled() {
            return Err(Error::Cancelled);
        }
        store.update_partial(item.id(), &partial)?;
        updated += 1;
    }
    Ok(updated)
}

/// Auto-tag one entity against one media kind: derive the path pattern
/// from `name`, find all unorganized matches, and merge `entity_id`
/// into `field` on each. Returns the number of items tagged.
pub fn tag_media<S: MediaStore>(
    token: &CancelToken,
    entity_id: i64,
    name: &str,
    field: RelationField,
    extra: Option<&MatchFilter>,
    store: &S,
) -> Result<usize> {
    let pat = pattern::path_regex(name);
    let items = find_matching(token, &pat, extra, store)?;
    add_relation(token, &items, field, entity_id, store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CriterionModifier, PerPage, Scene};
    use std::cell::RefCell;

    /// In-memory store that records the calls the engine makes.
    struct MockStore {
        items: Vec<Scene>,
        fail_on: Option<i64>,
        seen_filter: RefCell<Option<MatchFilter>>,
        seen_find: RefCell<Option<FindOptions>>,
        updates: RefCell<Vec<(i64, MediaPartial)>>,
    }

    impl MockStore {
        fn new(items: Vec<Scene>) -> Self {
            Self {
                items,
                fail_on: None,
                seen_filter: RefCell::new(None),
                seen_find: RefCell::new(None),
                updates: RefCell::new(Vec::new()),
            }
        }
    }

    impl MediaStore for MockStore {
        type Item = Scene;

        fn query(
            &self,
            filter: &MatchFilter,
            find: &FindOptions,
        ) -> Result<(Vec<Scene>, usize)> {
            *self.seen_filter.borrow_mut() = Some(filter.clone());
            *self.seen_find.borrow_mut() = Some(*find);
            Ok((self.items.clone(), self.items.len()))
        }

        fn update_partial(&self, id: i64, partial: &MediaPartial) -> Result<Scene> {
            if self.fail_on == Some(id) {
                return Err(Error::Database(rusqlite::Error::InvalidQuery));
            }
            self.updates.borrow_mut().push((id, partial.clone()));
            let item = self
                .items
                .iter()
                .find(|s| s.id == id)
                .expect("unknown item id")
                .clone();
            Ok(item)
        }
    }

    fn scene(id: i64, path: &str) -> Scene {
        Scene {
            id,
            path: path.to_string(),
            organized: false,
            performer_ids: Vec::new(),
            tag_ids: Vec::new(),
            studio_ids: Vec::new(),
        }
    }

    #[test]
    fn test_matcher_builds_expected_filter() {
        let store = MockStore::new(vec![]);
        let token = CancelToken::new();

        find_matching(&token, "pat", None, &store).unwrap();

        let filter = store.seen_filter.borrow().clone().unwrap();
        assert_eq!(filter.organized, Some(false));
        let path = filter.path.unwrap();
        assert_eq!(path.value, "pat");
        assert_eq!(path.modifier, CriterionModifier::MatchesRegex);

        let find = store.seen_find.borrow().unwrap();
        assert_eq!(find.per_page, PerPage::All);
    }

    #[test]
    fn test_matcher_caller_overrides_win() {
        let store = MockStore::new(vec![]);
        let token = CancelToken::new();
        let extra = MatchFilter {
            organized: Some(true),
            path: None,
        };

        find_matching(&token, "pat", Some(&extra), &store).unwrap();

        let filter = store.seen_filter.borrow().clone().unwrap();
        assert_eq!(filter.organized, Some(true));
        // Unset caller fields keep the generated value.
        assert_eq!(filter.path.unwrap().value, "pat");
    }

    #[test]
    fn test_updater_adds_single_id_per_item() {
        let store = MockStore::new(vec![scene(1, "a.mp4"), scene(2, "b.mp4")]);
        let token = CancelToken::new();
        let items = store.items.clone();

        let updated =
            add_relation(&token, &items, RelationField::Performers, 7, &store).unwrap();
        assert_eq!(updated, 2);

        let updates = store.updates.borrow();
        let expected = MediaPartial::relation(
            RelationField::Performers,
            IdUpdate {
                ids: vec![7],
                mode: UpdateMode::Add,
            },
        );
        assert_eq!(*updates, vec![(1, expected.clone()), (2, expected)]);
    }

    #[test]
    fn test_updater_fail_fast() {
        let mut store = MockStore::new(vec![
            scene(1, "a.mp4"),
            scene(2, "b.mp4"),
            scene(3, "c.mp4"),
        ]);
        store.fail_on = Some(2);
        let token = CancelToken::new();
        let items = store.items.clone();

        let err = add_relation(&token, &items, RelationField::Tags, 7, &store).unwrap_err();
        assert!(matches!(err, Error::Database(_)));

        // Item 1 was updated before the failure; item 3 never attempted.
        let touched: Vec<i64> = store.updates.borrow().iter().map(|(id, _)| *id).collect();
        assert_eq!(touched, vec![1]);
    }

    #[test]
    fn test_cancelled_before_query() {
        let store = MockStore::new(vec![scene(1, "a.mp4")]);
        let token = CancelToken::new();
        token.cancel();

        let err = find_matching(&token, "pat", None, &store).unwrap_err();
        assert!(matches!(err, Error::Cancelled));
        assert!(store.seen_filter.borrow().is_none());
    }

    #[test]
    fn test_cancelled_between_updates() {
        let store = MockStore::new(vec![scene(1, "a.mp4")]);
        let token = CancelToken::new();
        token.cancel();
        let items = store.items.clone();

        let err =
            add_relation(&token, &items, RelationField::Studios, 7, &store).unwrap_err();
        assert!(matches!(err, Error::Cancelled));
        assert!(store.updates.borrow().is_empty());
    }

    #[test]
    fn test_tag_media_end_to_end_against_mock() {
        let store = MockStore::new(vec![scene(1, "performer.name.mp4")]);
        let token = CancelToken::new();

        let updated = tag_media(
            &token,
            2,
            "performer name",
            RelationField::Performers,
            None,
            &store,
        )
        .unwrap();
        assert_eq!(updated, 1);

        let filter = store.seen_filter.borrow().clone().unwrap();
        assert_eq!(
            filter.path.unwrap().value,
            r"(?i)(?:^|_|[^\p{L}\d])performer[.\-_ ]*name(?:$|_|[^\p{L}\d])"
        );
    }
}
