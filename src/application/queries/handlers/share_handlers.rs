//! Share Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::RemoteBookStorePort;
use crate::application::queries::GetSharedBook;
use crate::domain::book::Book;

/// GetSharedBook Handler
pub struct GetSharedBookHandler {
    store: Arc<dyn RemoteBookStorePort>,
}

impl GetSharedBookHandler {
    pub fn new(store: Arc<dyn RemoteBookStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSharedBook) -> Result<Book, ApplicationError> {
        self.store
            .find_by_id(&query.remote_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Shared book", query.remote_id))
    }
}
