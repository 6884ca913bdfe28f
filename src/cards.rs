use crate::config::{PollerConfig, WARNING_MESSAGE};
use crate::models::{CardModel, Slot, SlotStatus};
use crate::panel::PanelContent;
use std::fmt::Write;

pub fn render_slot(slot: &Slot) -> CardModel {
    let status = if slot.is_occupied {
        SlotStatus::Occupied
    } else {
        SlotStatus::Vacant
    };

    let (vehicle_id, detail_path) = match status {
        SlotStatus::Occupied => (
            slot.vehicle_id.as_ref().map(ToString::to_string),
            Some(format!(
                "/slot/{}",
                urlencoding::encode(&slot.slot_id.to_string())
            )),
        ),
        SlotStatus::Vacant => (None, None),
    };

    CardModel {
        heading: format!("Slot {}", slot.slot_id),
        status,
        vehicle_id,
        detail_path,
    }
}

pub fn render_cards(slots: &[Slot]) -> Vec<CardModel> {
    slots.iter().map(render_slot).collect()
}

/// Inner markup of the container element for the given panel content.
pub fn panel_html(content: &PanelContent, config: &PollerConfig) -> String {
    match content {
        PanelContent::Empty => String::new(),
        PanelContent::Warning => format!("<p>{}</p>", escape_html(WARNING_MESSAGE)),
        PanelContent::Cards(cards) => {
            let mut html = String::new();
            for card in cards {
                card_html(&mut html, card, config);
            }
            html
        }
    }
}

fn card_html(out: &mut String, card: &CardModel, config: &PollerConfig) {
    let _ = write!(
        out,
        "<div class=\"{}\"><h4>{}</h4><p>Status: {}</p>",
        card.status.css_class(),
        escape_html(&card.heading),
        card.status.label()
    );
    if let Some(vehicle_id) = &card.vehicle_id {
        let _ = write!(out, "<p>Vehicle ID: {}</p>", escape_html(vehicle_id));
    }
    if let Some(path) = &card.detail_path {
        let _ = write!(
            out,
            "<a href=\"{}\">View Details</a>",
            escape_html(&config.detail_href(path))
        );
    }
    out.push_str("</div>");
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
