use crate::error::ForwardError;

pub const HOME_TEMPLATE: &str = "home.html";

/// Rendered HTML returned to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage(pub String);

/// Turns a template name into a page.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, name: &str) -> Result<RenderedPage, ForwardError>;
}

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl TemplateRenderer for EmbeddedTemplates {
    fn render(&self, name: &str) -> Result<RenderedPage, ForwardError> {
        match name {
            HOME_TEMPLATE => Ok(RenderedPage(HOME_HTML.to_string())),
            other => Err(ForwardError::TemplateNotFound(other.to_string())),
        }
    }
}

/// Statistics form. Input names must match the keys the forwarder reads.
const HOME_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>NBA Points Projection</title>
<style>
  :root {
    --bg: #0f1117;
    --card: #1a1d27;
    --border: #2a2d3a;
    --accent: #6c63ff;
    --text: #e0e0e0;
    --muted: #8888aa;
  }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: var(--bg); color: var(--text); font-family: 'Segoe UI', system-ui, sans-serif; }
  header { padding: 1rem 2rem; border-bottom: 1px solid var(--border); }
  header h1 { font-size: 1.4rem; font-weight: 700; }
  main { padding: 1.5rem 2rem; display: grid; justify-content: center; }
  .panel { background: var(--card); border: 1px solid var(--border); border-radius: 10px; padding: 1.5rem; min-width: 360px; }
  .input-row { display: grid; gap: .35rem; margin-bottom: 1rem; }
  label { color: var(--muted); font-size: .8rem; text-transform: uppercase; letter-spacing: .06em; }
  input { background: var(--bg); border: 1px solid var(--border); border-radius: 6px; color: var(--text); padding: .5rem .7rem; font-size: .95rem; }
  input:focus { outline: none; border-color: var(--accent); }
  .btn { background: var(--accent); border: none; border-radius: 6px; color: #fff; cursor: pointer; font-weight: 600; padding: .6rem 1.2rem; width: 100%; }
</style>
</head>
<body>
<header>
  <h1>🏀 NBA Points Projection</h1>
</header>

<main>
  <form method="post" action="/" class="panel model-inputs">
    <div class="input-row">
      <label for="OEFG">Opponent Effective Field Goal</label>
      <input type="number" step="any" id="OEFG" name="OEFG" required>
    </div>
    <div class="input-row">
      <label for="OFTR">Opponent Free Throw Rate</label>
      <input type="number" step="any" id="OFTR" name="OFTR" required>
    </div>
    <div class="input-row">
      <label for="OREB">Opponent Rebounding Rate</label>
      <input type="number" step="any" id="OREB" name="OREB" required>
    </div>
    <div class="input-row">
      <label for="PACE">Pace</label>
      <input type="number" step="any" id="PACE" name="PACE" required>
    </div>
    <div class="input-row">
      <label for="minutes">Projected Minutes</label>
      <input type="number" step="any" id="minutes" name="minutes" required>
    </div>
    <button type="submit" class="btn">Predict</button>
  </form>
</main>
</body>
</html>"#;
