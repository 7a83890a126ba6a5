// Station service - Use case for listing PV stations
use crate::application::power_repository::PowerRepository;
use crate::domain::station::Station;
use std::sync::Arc;

#[derive(Clone)]
pub struct StationService {
    repository: Arc<dyn PowerRepository>,
}

impl StationService {
    pub fn new(repository: Arc<dyn PowerRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_stations(&self) -> anyhow::Result<Vec<Station>> {
        self.repository.list_stations().await
    }
}
