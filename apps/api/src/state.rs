use std::sync::Arc;

use crate::recommendation::admission::AdmissionModel;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The catalog itself is static data and needs no handle here.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable admission model. Default: HeuristicAdmissionModel.
    pub admission_model: Arc<dyn AdmissionModel>,
}
