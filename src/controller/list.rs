use std::cmp::Ordering;
use std::collections::HashSet;

use crate::client::ResourceGateway;
use crate::entity::{FieldKind, Resource};
use crate::error::ApiError;
use crate::session::Session;

/// Page state for one collection screen.
#[derive(Debug)]
pub enum LoadState<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(ApiError),
}

/// Navigation hint returned by operations that may hit the auth gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    None,
    RedirectToLogin,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Read-only view parameters. All derivations leave the underlying
/// collection untouched.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Case-insensitive substring over the entity's textual fields.
    pub filter: Option<String>,
    pub sort: Option<(String, SortDirection)>,
    /// Zero-based page index; clamped to the last page.
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Debug)]
pub struct ListView<'a, T> {
    pub items: Vec<&'a T>,
    /// Matching rows before pagination.
    pub total: usize,
    pub page_count: usize,
}

/// Holds one entity collection and reconciles it after every
/// create/update/delete round-trip.
///
/// The collection only ever changes through four transitions: initial
/// load (replace), create success (append), update success (replace the
/// matching id), delete success (remove the matching id).
pub struct ListController<T: Resource> {
    state: LoadState<T>,
    /// Id-keyed, deliberately independent of filter/sort/page.
    selection: HashSet<String>,
    /// Monotonic load generation; a completing load only applies when
    /// its generation is still current, so responses that arrive after
    /// a newer load (or after navigation) are dropped.
    generation: u64,
}

impl<T: Resource> Default for ListController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> ListController<T> {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            selection: HashSet::new(),
            generation: 0,
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Loaded collection, empty while loading or failed.
    pub fn items(&self) -> &[T] {
        match &self.state {
            LoadState::Loaded(items) => items,
            _ => &[],
        }
    }

    /// Initial load transition. With no token in the session this makes
    /// no gateway call at all and signals the login redirect.
    pub async fn load<G>(&mut self, session: &Session, gateway: &G) -> Signal
    where
        G: ResourceGateway<T> + ?Sized,
    {
        let token = match session.token() {
            Some(t) => t.to_string(),
            None => {
                self.state = LoadState::Failed(ApiError::Unauthenticated);
                return Signal::RedirectToLogin;
            }
        };

        let generation = self.begin_load();
        let result = gateway.list(&token).await;
        self.finish_load(generation, result);
        Signal::None
    }

    /// Start a load and get its generation token.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.generation
    }

    /// Apply a completed load. Returns false (and changes nothing) when
    /// a newer load has started since `generation` was issued.
    pub fn finish_load(&mut self, generation: u64, result: Result<Vec<T>, ApiError>) -> bool {
        if generation != self.generation {
            tracing::debug!(entity = T::LABEL, "dropping stale list response");
            return false;
        }
        self.state = match result {
            Ok(items) => LoadState::Loaded(items),
            Err(e) => LoadState::Failed(e),
        };
        true
    }

    /// Reconcile a save success: replace the element with the same id,
    /// or append for a fresh create. Order and content of every other
    /// element are preserved.
    pub fn apply_saved(&mut self, entity: T) {
        if let LoadState::Loaded(items) = &mut self.state {
            match items.iter_mut().find(|e| e.id() == entity.id()) {
                Some(existing) => *existing = entity,
                None => items.push(entity),
            }
        }
    }

    /// Reconcile a delete success: the id leaves both the collection and
    /// the selection set.
    pub fn apply_deleted(&mut self, id: &str) {
        if let LoadState::Loaded(items) = &mut self.state {
            items.retain(|e| e.id() != id);
        }
        self.selection.remove(id);
    }

    /// One delete attempt, no retry. On failure the collection is left
    /// untouched and the error goes to the caller's notification surface.
    pub async fn delete<G>(
        &mut self,
        session: &Session,
        gateway: &G,
        id: &str,
    ) -> Result<(), ApiError>
    where
        G: ResourceGateway<T> + ?Sized,
    {
        let token = session.require_token()?.to_string();
        gateway.remove(&token, id).await?;
        self.apply_deleted(id);
        Ok(())
    }

    /// Derived filtered/sorted/paginated view over the collection.
    pub fn view(&self, query: &ListQuery) -> ListView<'_, T> {
        let mut items: Vec<&T> = self.items().iter().collect();

        if let Some(needle) = query.filter.as_deref() {
            let needle = needle.to_lowercase();
            items.retain(|e| Self::matches_filter(e, &needle));
        }

        if let Some((field, direction)) = &query.sort {
            items.sort_by(|a, b| {
                let ord = Self::compare_field(a, b, field);
                match direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }

        let total = items.len();
        let (items, page_count) = match query.page_size {
            Some(size) if size > 0 => {
                let page_count = total.div_ceil(size).max(1);
                let page = query.page.unwrap_or(0).min(page_count - 1);
                let start = (page * size).min(total);
                let end = (start + size).min(total);
                (items[start..end].to_vec(), page_count)
            }
            _ => (items, 1),
        };

        ListView {
            items,
            total,
            page_count,
        }
    }

    fn matches_filter(entity: &T, needle: &str) -> bool {
        T::fields().iter().any(|spec| {
            if matches!(spec.kind, FieldKind::Attachment | FieldKind::Secret) {
                return false;
            }
            entity
                .get_field(spec.name)
                .and_then(|v| v.filter_text())
                .map(|text| text.to_lowercase().contains(needle))
                .unwrap_or(false)
        })
    }

    fn compare_field(a: &T, b: &T, field: &str) -> Ordering {
        match (a.get_field(field), b.get_field(field)) {
            (Some(x), Some(y)) => x.compare(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    // Selection is keyed by id, not by row index, so it survives any
    // combination of filter/sort/page changes.

    pub fn toggle_selected(&mut self, id: &str) {
        if !self.selection.remove(id) {
            self.selection.insert(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Select every row the query currently shows, on top of whatever is
    /// already selected.
    pub fn select_all_visible(&mut self, query: &ListQuery) {
        let ids: Vec<String> = self
            .view(query)
            .items
            .iter()
            .map(|e| e.id().to_string())
            .collect();
        self.selection.extend(ids);
    }

    pub fn selected_ids(&self) -> &HashSet<String> {
        &self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}
