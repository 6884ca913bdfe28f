use crate::config::PollerConfig;
use crate::panel::SlotPanel;

#[derive(Clone)]
pub struct AppState {
    pub config: PollerConfig,
    pub panel: SlotPanel,
}

impl AppState {
    pub fn new(config: PollerConfig, panel: SlotPanel) -> Self {
        Self { config, panel }
    }
}
