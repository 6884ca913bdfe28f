use crate::cards::{escape_html, panel_html as render_panel};
use crate::config::PollerConfig;
use crate::panel::PanelContent;

pub fn render_index(config: &PollerConfig, panel_html: &str) -> String {
    let warning = render_panel(&PanelContent::Warning, config);
    let warning_literal = serde_json::to_string(&warning).unwrap_or_else(|_| "''".to_string());
    INDEX_HTML
        .replace("{{CONTAINER_ID}}", &escape_html(&config.container_id))
        .replace("{{WARNING}}", &warning_literal)
        .replace("{{REFRESH_MS}}", &config.refresh_interval.as_millis().to_string())
        .replace("{{PANEL}}", panel_html)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Parking Slot Status</title>
  <style>
    :root {
      --bg: #f4f6f8;
      --ink: #23303b;
      --vacant: #2e9e6a;
      --occupied: #d9534f;
      --card: #ffffff;
      --shadow: 0 12px 30px rgba(35, 48, 59, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    h1 {
      margin: 0 0 24px;
      font-size: clamp(1.6rem, 3vw, 2.2rem);
    }

    #{{CONTAINER_ID}} {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .slot {
      background: var(--card);
      border-radius: 16px;
      padding: 16px;
      box-shadow: var(--shadow);
      border-top: 6px solid var(--vacant);
    }

    .slot.occupied {
      border-top-color: var(--occupied);
    }

    .slot h4 {
      margin: 0 0 8px;
    }

    .slot p {
      margin: 4px 0;
    }
  </style>
</head>
<body>
  <h1>Parking Slot Status</h1>
  <div id="{{CONTAINER_ID}}">{{PANEL}}</div>

  <script>
    const container = document.getElementById('{{CONTAINER_ID}}');

    const refresh = async () => {
      try {
        const res = await fetch('/panel');
        if (!res.ok) {
          throw new Error(`panel request failed: ${res.status}`);
        }
        container.innerHTML = await res.text();
      } catch (err) {
        container.innerHTML = {{WARNING}};
        console.error('Error refreshing panel:', err);
      }
    };

    setInterval(refresh, {{REFRESH_MS}});
  </script>
</body>
</html>
"#;
