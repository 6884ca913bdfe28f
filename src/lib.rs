pub mod app;
pub mod cards;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod panel;
pub mod poller;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::{PollerConfig, SlotView};
pub use panel::{PanelContent, SlotPanel};
pub use poller::{PollerHandle, SlotPoller};
pub use state::AppState;
