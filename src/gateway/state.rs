use crate::processor::OrderProcessor;

/// Gateway shared state. Read-only after boot; concurrent requests share it
/// without any lock.
#[derive(Clone)]
pub struct AppState {
    pub processor: OrderProcessor,
}

impl AppState {
    pub fn new(processor: OrderProcessor) -> Self {
        Self { processor }
    }
}
