use address_validation::validation::{CityLoadError, CitySet};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the reference city list; a failure here must stop startup.
pub(crate) fn load_cities(path: &Path) -> Result<CitySet, CityLoadError> {
    let cities = CitySet::from_path(path)?;
    info!(path = %path.display(), count = cities.len(), "reference cities loaded");
    Ok(cities)
}
