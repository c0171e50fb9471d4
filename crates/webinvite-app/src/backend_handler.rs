use std::sync::Arc;

use salvo::async_trait;
use webinvite_core::error::CoreError;
use webinvite_db::db::RemoteBackend;
use webinvite_db::storage::LocalStorage;

use crate::error::AppResult;

/// Injects the remote backend and the local snapshot storage into the depot.
pub struct BackendHandler {
    pub backend: Arc<dyn RemoteBackend>,
    pub storage: Arc<dyn LocalStorage>,
}

#[async_trait]
impl salvo::Handler for BackendHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.backend));
        depot.inject(Arc::clone(&self.storage));
    }
}

/// ## Summary
/// Retrieves the remote backend from the depot.
///
/// ## Errors
/// Returns an error if the backend is not found in the depot.
pub fn get_backend_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn RemoteBackend>> {
    depot
        .obtain::<Arc<dyn RemoteBackend>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Remote backend not found in depot").into())
}

/// ## Summary
/// Retrieves the local snapshot storage from the depot.
///
/// ## Errors
/// Returns an error if the storage is not found in the depot.
pub fn get_storage_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn LocalStorage>> {
    depot
        .obtain::<Arc<dyn LocalStorage>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Local storage not found in depot").into())
}
