use std::sync::Arc;

use fitpick_service::FitpickService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<FitpickService>,
}
impl AppState {
	pub fn new(config: fitpick_config::Config) -> Self {
		Self { service: Arc::new(FitpickService::new(config)) }
	}
}
