//! In-memory history session
//!
//! A stack of visited locations with a cursor, driven by push/replace/go.
//! In the browser the same role is played by `window.history`; this type
//! backs the CLI, the server and tests.

use super::error::{NavigationError, NavigationResult};
use super::location::Location;
use super::manager::NavigationManager;

/// Where to navigate: a base-relative path or a route name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Path(String),
    Name(String),
}

impl NavigationTarget {
    pub fn path(path: impl Into<String>) -> Self {
        NavigationTarget::Path(path.into())
    }

    pub fn name(name: impl Into<String>) -> Self {
        NavigationTarget::Name(name.into())
    }
}

impl From<&str> for NavigationTarget {
    fn from(path: &str) -> Self {
        NavigationTarget::Path(path.to_string())
    }
}

/// One visited location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Location relative to the base
    pub location: Location,
    /// Full href including the base
    pub href: String,
    /// Name of the matched route, `None` if nothing matched
    pub route_name: Option<&'static str>,
}

impl HistoryEntry {
    pub fn is_matched(&self) -> bool {
        self.route_name.is_some()
    }
}

/// Navigation session over a manager
#[derive(Debug, Clone)]
pub struct History<'m> {
    manager: &'m NavigationManager,
    entries: Vec<HistoryEntry>,
    position: usize,
}

impl<'m> History<'m> {
    /// Start a session at `initial` (base-relative path)
    pub fn new(manager: &'m NavigationManager, initial: &str) -> Self {
        let entry = entry_for_path(manager, initial);
        Self {
            manager,
            entries: vec![entry],
            position: 0,
        }
    }

    /// Entry at the cursor
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.position]
    }

    /// Number of entries in the session
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position (0 is the oldest entry)
    pub fn position(&self) -> usize {
        self.position
    }

    /// Navigate to `target`, dropping any forward entries
    ///
    /// Navigating to the current href again is a no-op.
    pub fn push(&mut self, target: impl Into<NavigationTarget>) -> NavigationResult<&HistoryEntry> {
        let entry = self.entry_for(target.into())?;
        if entry.href == self.current().href {
            tracing::debug!(href = %entry.href, "Duplicated navigation ignored");
            return Ok(self.current());
        }
        self.entries.truncate(self.position + 1);
        self.entries.push(entry);
        self.position += 1;
        Ok(self.current())
    }

    /// Replace the current entry with `target`
    pub fn replace(
        &mut self,
        target: impl Into<NavigationTarget>,
    ) -> NavigationResult<&HistoryEntry> {
        let entry = self.entry_for(target.into())?;
        self.entries[self.position] = entry;
        Ok(self.current())
    }

    /// Move the cursor by `delta` entries
    ///
    /// Out-of-range moves leave the session untouched and return `None`.
    pub fn go(&mut self, delta: isize) -> Option<&HistoryEntry> {
        let target = self.position.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.position = target;
        Some(self.current())
    }

    pub fn back(&mut self) -> Option<&HistoryEntry> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        self.go(1)
    }

    fn entry_for(&self, target: NavigationTarget) -> NavigationResult<HistoryEntry> {
        match target {
            NavigationTarget::Path(path) => Ok(entry_for_path(self.manager, &path)),
            NavigationTarget::Name(name) => {
                let route = self
                    .manager
                    .table()
                    .by_name(&name)
                    .ok_or(NavigationError::UnknownRouteName(name))?;
                Ok(entry_for_path(self.manager, route.path))
            }
        }
    }
}

fn entry_for_path(manager: &NavigationManager, raw: &str) -> HistoryEntry {
    match manager.resolve_relative(raw) {
        Some(resolved) => HistoryEntry {
            route_name: Some(resolved.name()),
            href: resolved.href,
            location: resolved.location,
        },
        None => {
            let location = Location::parse(raw);
            tracing::warn!(path = %location.path, "No match found for location");
            HistoryEntry {
                href: manager.href_for_location(&location),
                location,
                route_name: None,
            }
        }
    }
}
