use std::sync::Arc;

use crate::Backend;

/// The context is the entry point for Hexel. It is used to create all other Hexel objects,
/// and holds the backend they delegate to.
pub struct Context<B: Backend>(pub(crate) Arc<B>);

impl<B: Backend> Context<B> {
    /// Creates a new Hexel instance.
    ///
    /// # Arguments
    ///
    /// - `backend` - A backend object selected based on your system. See `/backends/` for a
    /// selection to choose from.
    #[inline(always)]
    pub fn new(backend: B) -> Self {
        Self(Arc::new(backend))
    }
}

impl<B: Backend> Clone for Context<B> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
