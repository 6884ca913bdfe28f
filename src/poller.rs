use crate::cards::render_cards;
use crate::config::{PollerConfig, MIN_REFRESH_INTERVAL};
use crate::errors::DataUnavailable;
use crate::models::Slot;
use crate::panel::{PanelContent, SlotPanel};
use reqwest::Client;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

#[derive(Clone)]
pub struct SlotPoller {
    client: Client,
    config: PollerConfig,
    origin: String,
    panel: SlotPanel,
}

impl SlotPoller {
    /// `origin` is the hosting page's address, used when the config carries
    /// no base URL.
    pub fn new(config: PollerConfig, origin: impl Into<String>, panel: SlotPanel) -> Self {
        Self {
            client: Client::new(),
            config,
            origin: origin.into(),
            panel,
        }
    }

    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    pub fn panel(&self) -> &SlotPanel {
        &self.panel
    }

    /// One tick. Never fails: errors end up as the panel warning and a log line.
    pub async fn refresh(&self) {
        let content = match self.fetch_slots().await {
            Ok(slots) => {
                debug!(count = slots.len(), "rendering slots");
                PanelContent::Cards(render_cards(&slots))
            }
            Err(err) => {
                error!("error fetching slots: {err}");
                PanelContent::Warning
            }
        };
        self.panel.replace(content).await;
    }

    pub async fn fetch_slots(&self) -> Result<Vec<Slot>, DataUnavailable> {
        let url = self.config.slots_url(&self.origin);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataUnavailable::Status(status));
        }

        let body = response.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        if !value.is_array() {
            return Err(DataUnavailable::shape(&value));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Refreshes now and then on every interval until the handle is stopped or
    /// dropped. Ticks run concurrently; the last one to finish owns the panel.
    pub fn start(self) -> PollerHandle {
        let period = self.config.refresh_interval.max(MIN_REFRESH_INTERVAL);
        info!(
            url = %self.config.slots_url(&self.origin),
            ?period,
            "starting slot poller"
        );

        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut in_flight = JoinSet::new();
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let poller = self.clone();
                        in_flight.spawn(async move { poller.refresh().await });
                    }
                    Some(result) = in_flight.join_next(), if !in_flight.is_empty() => {
                        if let Err(err) = result {
                            error!("slot refresh task failed: {err}");
                        }
                    }
                }
            }
        });

        PollerHandle { task: Some(task) }
    }
}

/// Owns the poller's timer. Dropping it cancels the timer and any refresh
/// still in flight.
pub struct PollerHandle {
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    pub async fn stop(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
        info!("slot poller stopped");
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
