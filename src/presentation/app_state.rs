// Application state for HTTP handlers
use crate::application::power_service::PowerService;
use crate::application::station_service::StationService;

#[derive(Clone)]
pub struct AppState {
    pub station_service: StationService,
    pub power_service: PowerService,
}
