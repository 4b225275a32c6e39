// Application state for HTTP handlers
use crate::application::fleet_service::FleetService;
use crate::infrastructure::config::GeneratorSettings;

pub struct AppState {
    pub fleet_service: FleetService,
    pub generator: GeneratorSettings,
}
