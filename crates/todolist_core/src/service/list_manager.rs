//! List manager use-case service.
//!
//! # Responsibility
//! - Own the cached, ordered list rendered by the presentation layer.
//! - Run every mutation as read-modify-persist-refresh against the repository.
//! - Translate presentation intents into repository calls.
//!
//! # Invariants
//! - The repository is the source of truth; `items` is always the result of
//!   the latest successful query for the current view.
//! - A failed persistence call never clears or partially updates `items`.
//! - A mutation that reached the store returns `Ok` even when the follow-up
//!   refresh fails; the cache is then flagged stale instead.
//! - Blank titles are ignored without touching the store.
//! - Log events carry ids and counts only, never titles.

use crate::intent::{Intent, ListOutcome};
use crate::model::todo::{normalize_title, Todo, TodoId};
use crate::model::view::{TodoFilter, TodoSort, ViewSettings};
use crate::repo::todo_repo::{RepoError, TodoListQuery, TodoRepository};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ListResult<T> = Result<T, ListError>;

/// Recoverable errors surfaced to the presentation layer.
///
/// Every variant means the store was left unchanged by the failed call.
#[derive(Debug)]
pub enum ListError {
    /// No record with this id exists in the store.
    NotFound(TodoId),
    /// Reading from the store failed.
    Read(RepoError),
    /// Writing to the store failed; nothing was saved.
    Write(RepoError),
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::Read(err) => write!(f, "failed to read todos: {err}"),
            Self::Write(err) => write!(f, "failed to save todo: {err}"),
        }
    }
}

impl Error for ListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(err) | Self::Write(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Access {
    Read,
    Write,
}

/// In-memory view over the persisted todo list.
pub struct ListManager<R: TodoRepository> {
    repo: R,
    view: ViewSettings,
    items: Vec<Todo>,
    revision: u64,
    stale: bool,
}

impl<R: TodoRepository> ListManager<R> {
    /// Creates a manager with the default view and loads the initial list.
    ///
    /// # Errors
    /// Returns the initial load failure; use [`ListManager::detached`] to
    /// start from an empty cache instead.
    pub fn new(repo: R) -> ListResult<Self> {
        Self::with_view(repo, ViewSettings::default())
    }

    /// Creates a manager with the given view and loads the initial list.
    pub fn with_view(repo: R, view: ViewSettings) -> ListResult<Self> {
        let mut manager = Self::detached(repo, view);
        manager.refresh()?;
        Ok(manager)
    }

    /// Creates a manager with an empty cache and no initial load.
    pub fn detached(repo: R, view: ViewSettings) -> Self {
        Self {
            repo,
            view,
            items: Vec::new(),
            revision: 0,
            stale: true,
        }
    }

    /// Adds a new incomplete todo.
    ///
    /// Returns `Ok(None)` without touching the store when `title` is blank.
    /// Once the insert succeeds the result is `Ok`; a failed refresh only
    /// marks the cache stale.
    pub fn add(&mut self, title: &str) -> ListResult<Option<Todo>> {
        let Some(title) = normalize_title(title) else {
            debug!("event=todo_add module=list status=ignored reason=blank_title");
            return Ok(None);
        };

        let created = self
            .repo
            .create_todo(&title)
            .map_err(|err| log_failure("todo_add", Access::Write, err))?;
        info!("event=todo_add module=list status=ok todo_id={}", created.id);

        self.refresh_after_write("todo_add");
        Ok(Some(created))
    }

    /// Flips the completion flag of `id` and returns the persisted record.
    pub fn toggle(&mut self, id: TodoId) -> ListResult<Todo> {
        let mut todo = match self.repo.get_todo(id) {
            Ok(Some(todo)) => todo,
            Ok(None) => {
                warn!("event=todo_toggle module=list status=error error_code=not_found todo_id={id}");
                return Err(ListError::NotFound(id));
            }
            Err(err) => return Err(log_failure("todo_toggle", Access::Read, err)),
        };

        todo.toggle();
        self.repo
            .update_todo(&todo)
            .map_err(|err| log_failure("todo_toggle", Access::Write, err))?;
        info!(
            "event=todo_toggle module=list status=ok todo_id={id} completed={}",
            todo.completed
        );

        self.refresh_after_write("todo_toggle");
        Ok(todo)
    }

    /// Removes `id` from the store.
    pub fn delete(&mut self, id: TodoId) -> ListResult<()> {
        self.repo
            .delete_todo(id)
            .map_err(|err| log_failure("todo_delete", Access::Write, err))?;
        info!("event=todo_delete module=list status=ok todo_id={id}");

        self.refresh_after_write("todo_delete");
        Ok(())
    }

    /// Runs a one-off query without changing the cached view.
    pub fn query(&self, filter: TodoFilter, sort: TodoSort) -> ListResult<Vec<Todo>> {
        self.repo
            .list_todos(&TodoListQuery { filter, sort })
            .map_err(|err| log_failure("todo_query", Access::Read, err))
    }

    /// Counts stored todos matching `filter`.
    pub fn count(&self, filter: TodoFilter) -> ListResult<u64> {
        self.repo
            .count_todos(filter)
            .map_err(|err| log_failure("todo_count", Access::Read, err))
    }

    /// Rebuilds the cache for the current view.
    ///
    /// On failure the previous items stay in place and the cache is marked
    /// stale.
    pub fn refresh(&mut self) -> ListResult<()> {
        let items = match self.query(self.view.filter, self.view.sort) {
            Ok(items) => items,
            Err(err) => {
                self.stale = true;
                return Err(err);
            }
        };
        self.items = items;
        self.revision += 1;
        self.stale = false;
        debug!(
            "event=list_refresh module=list status=ok count={} filter={} sort={} revision={}",
            self.items.len(),
            self.view.filter.as_str(),
            self.view.sort.as_str(),
            self.revision
        );
        Ok(())
    }

    /// Switches the filter, keeps the sort, and refreshes.
    pub fn set_filter(&mut self, filter: TodoFilter) -> ListResult<()> {
        self.set_view(ViewSettings {
            filter,
            ..self.view
        })
    }

    /// Switches the sort, keeps the filter, and refreshes.
    pub fn set_sort(&mut self, sort: TodoSort) -> ListResult<()> {
        self.set_view(ViewSettings { sort, ..self.view })
    }

    /// Switches view settings and refreshes.
    ///
    /// The new settings are kept even when the refresh fails, so the next
    /// successful refresh uses them.
    pub fn set_view(&mut self, view: ViewSettings) -> ListResult<()> {
        self.view = view;
        self.refresh()
    }

    /// Applies one presentation intent.
    pub fn handle(&mut self, intent: Intent) -> ListResult<ListOutcome> {
        match intent {
            Intent::AddRequested(text) => Ok(match self.add(&text)? {
                Some(todo) => ListOutcome::Added(todo),
                None => ListOutcome::Ignored,
            }),
            Intent::RowSelected(id) => self.toggle(id).map(ListOutcome::Toggled),
            Intent::RowDeleted(id) => self.delete(id).map(|()| ListOutcome::Deleted(id)),
            Intent::FilterChanged(filter) => {
                self.set_filter(filter)?;
                Ok(ListOutcome::ViewChanged(self.view))
            }
            Intent::SortChanged(sort) => {
                self.set_sort(sort)?;
                Ok(ListOutcome::ViewChanged(self.view))
            }
            Intent::Refresh => self.refresh().map(|()| ListOutcome::Refreshed),
        }
    }

    /// Cached items for the current view, in display order.
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    /// Returns the cached item at display row `index`.
    pub fn todo_at(&self, index: usize) -> Option<&Todo> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn view(&self) -> ViewSettings {
        self.view
    }

    /// Increments on every successful cache rebuild.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether `items` may lag behind the store because the last refresh
    /// failed (or none has run yet).
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    fn refresh_after_write(&mut self, event: &str) {
        if let Err(err) = self.refresh() {
            warn!("event={event} module=list status=stale error_code=refresh_failed error={err}");
        }
    }
}

fn log_failure(event: &str, access: Access, err: RepoError) -> ListError {
    match err {
        RepoError::NotFound(id) => {
            warn!("event={event} module=list status=error error_code=not_found todo_id={id}");
            ListError::NotFound(id)
        }
        other => match access {
            Access::Read => {
                error!("event={event} module=list status=error error_code=read_failed error={other}");
                ListError::Read(other)
            }
            Access::Write => {
                error!("event={event} module=list status=error error_code=write_failed error={other}");
                ListError::Write(other)
            }
        },
    }
}
