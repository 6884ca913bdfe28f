use std::{env, time::Duration};

pub const SLOTS_PATH: &str = "/slots/";
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(5000);
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(1);
pub const CONTAINER_ID: &str = "slot-status";
pub const WARNING_MESSAGE: &str = "⚠️ Could not load slot data.";

/// Which slot listing the backend is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotView {
    #[default]
    All,
    Vacant,
    Filled,
}

impl SlotView {
    pub fn path(self) -> &'static str {
        match self {
            SlotView::All => SLOTS_PATH,
            SlotView::Vacant => "/slots/vacant",
            SlotView::Filled => "/slots/filled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Some(SlotView::All),
            "vacant" => Some(SlotView::Vacant),
            "filled" | "occupied" => Some(SlotView::Filled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Prefix for both the slots request and detail links. Empty means the
    /// hosting page's own origin.
    pub base_url: String,
    pub slots_path: String,
    pub refresh_interval: Duration,
    pub container_id: String,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            slots_path: SLOTS_PATH.to_string(),
            refresh_interval: REFRESH_INTERVAL,
            container_id: CONTAINER_ID.to_string(),
        }
    }
}

impl PollerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base(base_url.into()),
            ..Self::default()
        }
    }

    pub fn with_view(mut self, view: SlotView) -> Self {
        self.slots_path = view.path().to_string();
        self
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval.max(MIN_REFRESH_INTERVAL);
        self
    }

    /// Absolute URL of the slots listing. `origin` is only consulted when no
    /// base URL was configured.
    pub fn slots_url(&self, origin: &str) -> String {
        let base = if self.base_url.is_empty() {
            origin.trim_end_matches('/')
        } else {
            self.base_url.as_str()
        };
        format!("{base}{}", self.slots_path)
    }

    pub fn detail_href(&self, detail_path: &str) -> String {
        format!("{}{detail_path}", self.base_url)
    }
}

fn trim_base(base_url: String) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// The dashboard does not serve `/slots/` itself, so the binary needs an
/// explicit backend address.
pub fn resolve_base_url() -> Result<String, String> {
    base_url_from(env::var("SLOTS_BASE_URL").ok())
}

pub fn base_url_from(value: Option<String>) -> Result<String, String> {
    let base_url = value.map(trim_base).unwrap_or_default();
    if base_url.is_empty() {
        return Err("SLOTS_BASE_URL must point at the slots backend".to_string());
    }
    Ok(base_url)
}

pub fn resolve_view() -> Result<SlotView, String> {
    match env::var("SLOTS_VIEW") {
        Ok(value) => SlotView::parse(&value).ok_or_else(|| format!("unknown SLOTS_VIEW {value:?}")),
        Err(_) => Ok(SlotView::All),
    }
}

pub fn resolve_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080)
}
