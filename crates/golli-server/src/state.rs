use std::sync::Arc;

use golli_store::{EntityRepository, InMemoryRepository};
use golli_types::{Lesson, Tolli, User};

/// Repositories shared by every handler.
///
/// Cloning `AppState` clones the `Arc`s, never the repositories, so an
/// entity added by one request is visible to all later ones.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn EntityRepository<User>>,
    pub lessons: Arc<dyn EntityRepository<Lesson>>,
    pub tolli: Arc<dyn EntityRepository<Tolli>>,
}

impl AppState {
    /// Fresh, empty in-memory repositories.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryRepository::<User>::new()),
            lessons: Arc::new(InMemoryRepository::<Lesson>::new()),
            tolli: Arc::new(InMemoryRepository::<Tolli>::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("users", &self.users.len().ok())
            .field("lessons", &self.lessons.len().ok())
            .field("tolli", &self.tolli.len().ok())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn clones_share_repositories() {
        let state = AppState::in_memory();
        let clone = state.clone();
        clone
            .lessons
            .add(Lesson {
                id: 1,
                title: "t".into(),
                content: "c".into(),
                author_id: 0,
                language: "en".into(),
                timestamp: Utc::now(),
            })
            .unwrap();
        assert_eq!(state.lessons.len().unwrap(), 1);
    }
}
