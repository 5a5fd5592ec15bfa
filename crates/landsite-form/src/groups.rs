//! Ordered list editing
//!
//! Repeating page sections (slides, offices, footer links) live as lists
//! of objects inside a document's field tree. A [`GroupController`] edits
//! one such list through a [`FormBinder`], maintaining two reserved entry
//! fields:
//!
//! * `local_id`: identity that survives reordering, minted on append when
//!   the caller did not bring one.
//! * `position`: 1-based ordering index. Appending assigns the new length,
//!   moving renumbers the whole list densely, and removal leaves the
//!   survivors' positions untouched until [`GroupController::renumber`] is
//!   called.

use landsite_core::{FieldPath, LocalIdSource};
use serde_json::Value;
use tracing::debug;

use crate::binder::FormBinder;
use crate::error::{FormError, FormResult};

/// Reserved entry field carrying reorder-stable identity.
pub const LOCAL_ID_FIELD: &str = "local_id";

/// Reserved entry field carrying the 1-based ordering index.
pub const POSITION_FIELD: &str = "position";

/// Editor for one ordered list of object entries.
#[derive(Debug, Clone)]
pub struct GroupController {
    path: FieldPath,
}

impl GroupController {
    /// Control the list at `path`.
    #[must_use]
    pub const fn new(path: FieldPath) -> Self {
        Self { path }
    }

    /// Control the list in a top-level field.
    #[must_use]
    pub fn for_field(name: impl Into<String>) -> Self {
        Self::new(FieldPath::field(name))
    }

    /// Path of the controlled list.
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    /// The list's entries, empty when the list is missing.
    #[must_use]
    pub fn entries<'a>(&self, binder: &'a FormBinder) -> &'a [Value] {
        self.path
            .resolve(binder.fields())
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self, binder: &FormBinder) -> usize {
        self.entries(binder).len()
    }

    /// Whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self, binder: &FormBinder) -> bool {
        self.len(binder) == 0
    }

    /// The `local_id` of the entry at `index`, if set.
    #[must_use]
    pub fn local_id_at<'a>(&self, binder: &'a FormBinder, index: usize) -> Option<&'a str> {
        self.entries(binder)
            .get(index)?
            .get(LOCAL_ID_FIELD)?
            .as_str()
    }

    /// The `position` of the entry at `index`, if set.
    #[must_use]
    pub fn position_at(&self, binder: &FormBinder, index: usize) -> Option<u64> {
        self.entries(binder)
            .get(index)?
            .get(POSITION_FIELD)?
            .as_u64()
    }

    /// Append an entry, creating the list when missing.
    ///
    /// The entry keeps a non-empty `local_id` it already carries, otherwise
    /// one is minted from `ids`. Its `position` becomes the list's new
    /// length. Returns the entry's `local_id`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotAnObject`] when the record is not an object
    /// and [`FormError::NotAList`] when the path holds a non-list value.
    pub fn append(
        &self,
        binder: &mut FormBinder,
        ids: &LocalIdSource,
        record: Value,
    ) -> FormResult<String> {
        let Value::Object(mut record) = record else {
            return Err(FormError::not_an_object(self.path.to_string()));
        };

        let local_id = match record.get(LOCAL_ID_FIELD).and_then(Value::as_str) {
            Some(existing) if !existing.is_empty() => existing.to_string(),
            _ => ids.next_id(),
        };
        record.insert(
            LOCAL_ID_FIELD.to_string(),
            Value::String(local_id.clone()),
        );

        let items = self.ensure_list_mut(binder)?;
        let position = items.len() + 1;
        record.insert(POSITION_FIELD.to_string(), Value::from(position));
        items.push(Value::Object(record));

        binder.mark_dirty();
        debug!(path = %self.path, position, "list entry appended");
        Ok(local_id)
    }

    /// Remove and return the entry at `index`.
    ///
    /// Surviving entries keep their `position` values; call
    /// [`Self::renumber`] to compact them.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::IndexOutOfRange`] when `index` does not name an
    /// entry and [`FormError::NotAList`] when the path holds a non-list
    /// value.
    pub fn remove_at(&self, binder: &mut FormBinder, index: usize) -> FormResult<Value> {
        let Some(items) = self.list_mut(binder)? else {
            return Err(FormError::index_out_of_range(index, 0));
        };
        let len = items.len();
        if index >= len {
            return Err(FormError::index_out_of_range(index, len));
        }

        let removed = items.remove(index);
        binder.mark_dirty();
        debug!(path = %self.path, index, "list entry removed");
        Ok(removed)
    }

    /// Move the entry at `from` to `to`, shifting entries in between.
    ///
    /// Every entry's `position` is renumbered densely afterwards. Returns
    /// `false` without touching anything when `from == to`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::IndexOutOfRange`] when either index does not
    /// name an entry and [`FormError::NotAList`] when the path holds a
    /// non-list value.
    pub fn move_to(&self, binder: &mut FormBinder, from: usize, to: usize) -> FormResult<bool> {
        let Some(items) = self.list_mut(binder)? else {
            return Err(FormError::index_out_of_range(from, 0));
        };
        let len = items.len();
        if from >= len {
            return Err(FormError::index_out_of_range(from, len));
        }
        if to >= len {
            return Err(FormError::index_out_of_range(to, len));
        }
        if from == to {
            return Ok(false);
        }

        let entry = items.remove(from);
        items.insert(to, entry);
        renumber_entries(items);

        binder.mark_dirty();
        debug!(path = %self.path, from, to, "list entry moved");
        Ok(true)
    }

    /// Move the entry at `index` one step towards the front.
    ///
    /// The first entry stays put and `false` is returned.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::move_to`].
    pub fn move_up(&self, binder: &mut FormBinder, index: usize) -> FormResult<bool> {
        if index == 0 {
            return Ok(false);
        }
        self.move_to(binder, index, index - 1)
    }

    /// Move the entry at `index` one step towards the back.
    ///
    /// The last entry stays put and `false` is returned.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::move_to`].
    pub fn move_down(&self, binder: &mut FormBinder, index: usize) -> FormResult<bool> {
        let len = self.len(binder);
        if len > 0 && index == len - 1 {
            return Ok(false);
        }
        self.move_to(binder, index, index + 1)
    }

    /// Rewrite every entry's `position` to its dense 1-based index.
    ///
    /// Returns how many entries changed; the form is only marked dirty
    /// when at least one did. A missing list renumbers nothing.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotAList`] when the path holds a non-list
    /// value.
    pub fn renumber(&self, binder: &mut FormBinder) -> FormResult<usize> {
        let Some(items) = self.list_mut(binder)? else {
            return Ok(0);
        };

        let changed = renumber_entries(items);
        if changed > 0 {
            binder.mark_dirty();
            debug!(path = %self.path, changed, "list positions renumbered");
        }
        Ok(changed)
    }

    /// The list behind the path, `None` when missing or null.
    fn list_mut<'a>(&self, binder: &'a mut FormBinder) -> FormResult<Option<&'a mut Vec<Value>>> {
        match self.path.resolve_mut(binder.fields_mut()) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(_) => Err(FormError::not_a_list(self.path.to_string())),
        }
    }

    /// The list behind the path, created as empty when missing or null.
    fn ensure_list_mut<'a>(&self, binder: &'a mut FormBinder) -> FormResult<&'a mut Vec<Value>> {
        if matches!(
            self.path.resolve(binder.fields()),
            None | Some(Value::Null)
        ) {
            self.path
                .set(binder.fields_mut(), Value::Array(Vec::new()))?;
        }

        match self.path.resolve_mut(binder.fields_mut()) {
            Some(Value::Array(items)) => Ok(items),
            Some(_) => Err(FormError::not_a_list(self.path.to_string())),
            None => Err(FormError::path(
                self.path.to_string(),
                "list could not be created",
            )),
        }
    }
}

/// Set each object entry's `position` to its dense 1-based index,
/// returning how many entries changed.
fn renumber_entries(items: &mut [Value]) -> usize {
    let mut changed = 0;
    for (i, entry) in items.iter_mut().enumerate() {
        if let Value::Object(map) = entry {
            let expected = Value::from(i + 1);
            if map.get(POSITION_FIELD) != Some(&expected) {
                map.insert(POSITION_FIELD.to_string(), expected);
                changed += 1;
            }
        }
    }
    changed
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use landsite_core::DocumentKind;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;

    fn setup() -> (FormBinder, GroupController, LocalIdSource) {
        let binder = FormBinder::seeded(DocumentKind::Home, json!({}));
        let group = GroupController::for_field("value_propositions");
        (binder, group, LocalIdSource::new())
    }

    fn titles(group: &GroupController, binder: &FormBinder) -> Vec<String> {
        group
            .entries(binder)
            .iter()
            .map(|e| e["title"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    fn positions(group: &GroupController, binder: &FormBinder) -> Vec<u64> {
        (0..group.len(binder))
            .map(|i| group.position_at(binder, i).unwrap())
            .collect()
    }

    #[test]
    fn test_append_creates_list_and_assigns_metadata() {
        let (mut binder, group, ids) = setup();

        let first = group
            .append(&mut binder, &ids, json!({"title": "Fast"}))
            .unwrap();
        let second = group
            .append(&mut binder, &ids, json!({"title": "Fair"}))
            .unwrap();

        assert_ne!(first, second);
        assert!(binder.is_dirty());
        assert_eq!(group.len(&binder), 2);
        assert_eq!(positions(&group, &binder), [1, 2]);
        assert_eq!(group.local_id_at(&binder, 0), Some(first.as_str()));
    }

    #[test]
    fn test_append_keeps_caller_local_id() {
        let (mut binder, group, ids) = setup();

        let id = group
            .append(&mut binder, &ids, json!({"local_id": "srv-9", "title": "Kept"}))
            .unwrap();

        assert_eq!(id, "srv-9");
        assert_eq!(group.local_id_at(&binder, 0), Some("srv-9"));
    }

    #[test]
    fn test_append_mints_id_for_blank_local_id() {
        let (mut binder, group, ids) = setup();

        let id = group
            .append(&mut binder, &ids, json!({"local_id": "", "title": "Blank"}))
            .unwrap();

        assert!(!id.is_empty());
        assert_eq!(group.local_id_at(&binder, 0), Some(id.as_str()));
    }

    #[test]
    fn test_append_rejects_non_object() {
        let (mut binder, group, ids) = setup();

        let result = group.append(&mut binder, &ids, json!("just text"));
        assert!(matches!(result, Err(FormError::NotAnObject { .. })));
        assert!(!binder.is_dirty());
    }

    #[test]
    fn test_operations_reject_non_list_value() {
        let ids = LocalIdSource::new();
        let mut binder =
            FormBinder::seeded(DocumentKind::Home, json!({"value_propositions": "text"}));
        let group = GroupController::for_field("value_propositions");

        assert!(matches!(
            group.append(&mut binder, &ids, json!({})),
            Err(FormError::NotAList { .. })
        ));
        assert!(matches!(
            group.remove_at(&mut binder, 0),
            Err(FormError::NotAList { .. })
        ));
        assert!(matches!(
            group.renumber(&mut binder),
            Err(FormError::NotAList { .. })
        ));
    }

    #[test]
    fn test_remove_keeps_survivor_positions() {
        let (mut binder, group, ids) = setup();
        group.append(&mut binder, &ids, json!({"title": "One"})).unwrap();
        group.append(&mut binder, &ids, json!({"title": "Two"})).unwrap();
        group.append(&mut binder, &ids, json!({"title": "Three"})).unwrap();

        let removed = group.remove_at(&mut binder, 0).unwrap();
        assert_eq!(removed["title"], json!("One"));

        assert_eq!(titles(&group, &binder), ["Two", "Three"]);
        assert_eq!(positions(&group, &binder), [2, 3]);
    }

    #[test]
    fn test_append_then_remove_first_leaves_position_two() {
        let (mut binder, group, ids) = setup();
        group
            .append(
                &mut binder,
                &ids,
                json!({"title": "Slow", "icon": "Snail", "description": "Takes a while"}),
            )
            .unwrap();
        group
            .append(
                &mut binder,
                &ids,
                json!({"title": "Fast", "icon": "Zap", "description": "Quick delivery"}),
            )
            .unwrap();

        group.remove_at(&mut binder, 0).unwrap();

        assert_eq!(group.len(&binder), 1);
        assert_eq!(titles(&group, &binder), ["Fast"]);
        assert_eq!(group.position_at(&binder, 0), Some(2));
    }

    #[test]
    fn test_remove_out_of_range() {
        let (mut binder, group, ids) = setup();
        group.append(&mut binder, &ids, json!({"title": "Only"})).unwrap();

        let result = group.remove_at(&mut binder, 1);
        assert!(matches!(
            result,
            Err(FormError::IndexOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_move_to_reorders_and_renumbers() {
        let (mut binder, group, ids) = setup();
        for title in ["A", "B", "C", "D"] {
            group.append(&mut binder, &ids, json!({"title": title})).unwrap();
        }

        let moved = group.move_to(&mut binder, 3, 0).unwrap();
        assert!(moved);
        assert_eq!(titles(&group, &binder), ["D", "A", "B", "C"]);
        assert_eq!(positions(&group, &binder), [1, 2, 3, 4]);
    }

    #[test]
    fn test_move_to_same_index_is_noop() {
        let (mut binder, group, ids) = setup();
        group.append(&mut binder, &ids, json!({"title": "A"})).unwrap();

        // fresh binder so the append above does not mask the dirty check
        let mut clean = FormBinder::seeded(DocumentKind::Home, binder.snapshot());
        let before = clean.snapshot();

        let moved = group.move_to(&mut clean, 0, 0).unwrap();
        assert!(!moved);
        assert!(!clean.is_dirty());
        assert_eq!(clean.snapshot(), before);
    }

    #[test]
    fn test_move_out_of_range() {
        let (mut binder, group, ids) = setup();
        group.append(&mut binder, &ids, json!({"title": "A"})).unwrap();

        assert!(group.move_to(&mut binder, 0, 5).is_err());
        assert!(group.move_to(&mut binder, 5, 0).is_err());
    }

    #[test]
    fn test_move_up_first_and_move_down_last_are_noops() {
        let (mut binder, group, ids) = setup();
        group.append(&mut binder, &ids, json!({"title": "A"})).unwrap();
        group.append(&mut binder, &ids, json!({"title": "B"})).unwrap();

        assert!(!group.move_up(&mut binder, 0).unwrap());
        assert!(!group.move_down(&mut binder, 1).unwrap());
        assert_eq!(titles(&group, &binder), ["A", "B"]);
    }

    #[test]
    fn test_move_up_then_down_round_trips() {
        let (mut binder, group, ids) = setup();
        for title in ["A", "B", "C"] {
            group.append(&mut binder, &ids, json!({"title": title})).unwrap();
        }
        let before = group.entries(&binder).to_vec();

        assert!(group.move_up(&mut binder, 2).unwrap());
        assert!(group.move_down(&mut binder, 1).unwrap());

        assert_eq!(group.entries(&binder), before.as_slice());
    }

    #[test]
    fn test_renumber_compacts_after_removal() {
        let (mut binder, group, ids) = setup();
        for title in ["A", "B", "C"] {
            group.append(&mut binder, &ids, json!({"title": title})).unwrap();
        }
        group.remove_at(&mut binder, 0).unwrap();
        assert_eq!(positions(&group, &binder), [2, 3]);

        let changed = group.renumber(&mut binder).unwrap();
        assert_eq!(changed, 2);
        assert_eq!(positions(&group, &binder), [1, 2]);
    }

    #[test]
    fn test_renumber_dense_list_changes_nothing() {
        let (mut binder, group, ids) = setup();
        group.append(&mut binder, &ids, json!({"title": "A"})).unwrap();

        let mut clean = FormBinder::seeded(DocumentKind::Home, binder.snapshot());
        assert_eq!(group.renumber(&mut clean).unwrap(), 0);
        assert!(!clean.is_dirty());
    }

    #[test]
    fn test_renumber_missing_list_is_noop() {
        let (mut binder, group, _) = setup();
        assert_eq!(group.renumber(&mut binder).unwrap(), 0);
    }

    proptest! {
        #[test]
        fn local_ids_stay_unique(
            ops in proptest::collection::vec((0u8..3, 0usize..8), 0..40)
        ) {
            let ids = LocalIdSource::new();
            let mut binder = FormBinder::seeded(DocumentKind::Home, json!({}));
            let group = GroupController::for_field("entries");

            for (op, raw) in ops {
                let len = group.len(&binder);
                match op {
                    0 => {
                        group.append(&mut binder, &ids, json!({"title": "entry"})).unwrap();
                    }
                    1 if len > 0 => {
                        group.remove_at(&mut binder, raw % len).unwrap();
                    }
                    2 if len > 1 => {
                        group.move_to(&mut binder, raw % len, (raw + 1) % len).unwrap();
                    }
                    _ => {}
                }
            }

            let mut seen = std::collections::HashSet::new();
            for (i, entry) in group.entries(&binder).iter().enumerate() {
                let id = entry.get(LOCAL_ID_FIELD).and_then(Value::as_str);
                prop_assert!(id.is_some(), "entry {i} lost its local id");
                prop_assert!(seen.insert(id.map(ToString::to_string)), "duplicate local id");
            }
        }

        #[test]
        fn moves_always_leave_dense_positions(
            from in 0usize..6,
            to in 0usize..6,
        ) {
            let ids = LocalIdSource::new();
            let mut binder = FormBinder::seeded(DocumentKind::Home, json!({}));
            let group = GroupController::for_field("entries");
            for i in 0..6 {
                group.append(&mut binder, &ids, json!({"n": i})).unwrap();
            }

            group.move_to(&mut binder, from, to).unwrap();

            let positions: Vec<u64> = (0..6)
                .map(|i| group.position_at(&binder, i).unwrap())
                .collect();
            prop_assert_eq!(positions, (1..=6).collect::<Vec<u64>>());
        }
    }
}
