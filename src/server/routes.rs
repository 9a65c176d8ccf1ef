use crate::server::api;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

pub fn route_request(method: &str, path: &str, body: &str) -> HttpResponse {
    match (method, path) {
        ("GET", "/") => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: index_html(),
        },
        ("GET", "/api/health") => match api::health_payload() {
            Ok(payload) => HttpResponse {
                status_code: 200,
                status_text: "OK",
                content_type: "application/json",
                body: payload,
            },
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("POST", "/api/plan") => match api::plan_payload(body) {
            Ok(payload) => HttpResponse {
                status_code: 200,
                status_text: "OK",
                content_type: "application/json",
                body: payload,
            },
            Err(api::PlanPayloadError::Parse(err)) => {
                error_response(400, "Bad Request", &format!("Invalid request body: {err}"))
            }
            Err(api::PlanPayloadError::Validation(validation)) => {
                validation_error_response(400, "Bad Request", validation)
            }
        },
        ("POST", "/api/convert") => match api::convert_payload(body) {
            Ok(payload) => HttpResponse {
                status_code: 200,
                status_text: "OK",
                content_type: "application/json",
                body: payload,
            },
            Err(api::ConvertPayloadError::Convert(err)) => {
                error_response(400, "Bad Request", &err.to_string())
            }
            Err(api::ConvertPayloadError::Serialize(err)) => {
                error_response(500, "Internal Server Error", &err.to_string())
            }
        },
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

fn validation_error_response(
    status_code: u16,
    status_text: &'static str,
    payload: api::ValidationErrorResponse,
) -> HttpResponse {
    let fallback =
        "{\n  \"status\": \"error\",\n  \"message\": \"Validation failed\"\n}".to_string();

    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: serde_json::to_string_pretty(&payload).unwrap_or(fallback),
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}

fn index_html() -> String {
    r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Trilane Planner Console</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 900px; margin: 24px auto; padding: 0 12px; }
    h1 { margin-bottom: 8px; }
    .card { border: 1px solid #ddd; border-radius: 8px; padding: 14px; margin: 14px 0; }
    label { display:block; margin: 8px 0 4px; font-weight: 600; }
    textarea { width: 100%; min-height: 70px; box-sizing: border-box; font-family: monospace; }
    input { width: 90px; padding: 6px; box-sizing: border-box; }
    button { margin-top: 12px; padding: 8px 14px; }
    pre { background: #111; color: #aef2ae; padding: 12px; overflow: auto; border-radius: 6px; min-height: 180px; }
    .advantages { display: flex; gap: 16px; flex-wrap: wrap; }
  </style>
</head>
<body>
  <h1>Trilane Planner</h1>
  <p>Paste (id, power) listings, set per-lane advantage margins, and compute a lane assignment.</p>

  <div class="card">
    <strong>Home roster (60 teams)</strong>
    <label for="our-power">Power text</label>
    <textarea id="our-power" placeholder="1 1250000 2 1180000 ..."></textarea>
    <label for="csv-input">Or paste two-column CSV and convert</label>
    <textarea id="csv-input" placeholder="1,1250000&#10;2,1180000"></textarea>
    <div><button id="convert-btn">POST /api/convert</button></div>
  </div>

  <div class="card">
    <strong>Enemy lanes</strong>
    <label for="enemy-left">Left</label>
    <textarea id="enemy-left"></textarea>
    <label for="enemy-center">Center</label>
    <textarea id="enemy-center"></textarea>
    <label for="enemy-right">Right</label>
    <textarea id="enemy-right"></textarea>
  </div>

  <div class="card">
    <strong>Advantage margins</strong>
    <div class="advantages">
      <div><label for="adv-left">Left</label><input id="adv-left" value="0" /></div>
      <div><label for="adv-center">Center</label><input id="adv-center" value="0" /></div>
      <div><label for="adv-right">Right</label><input id="adv-right" value="0" /></div>
    </div>
    <div><button id="plan-btn">POST /api/plan</button></div>
  </div>

  <pre id="output">Ready.</pre>

  <script>
    const output = document.getElementById('output');
    const field = id => document.getElementById(id);

    async function request(path, options) {
      output.textContent = 'Loading…';
      const response = await fetch(path, options);
      const text = await response.text();
      output.textContent = 'HTTP ' + response.status + '\n' + text;
      return { response, text };
    }

    document.getElementById('convert-btn').addEventListener('click', async () => {
      const { response, text } = await request('/api/convert', {
        method: 'POST',
        headers: { 'Content-Type': 'text/csv' },
        body: field('csv-input').value,
      });
      if (response.ok) {
        try { field('our-power').value = JSON.parse(text).power_text; } catch (e) {}
      }
    });

    document.getElementById('plan-btn').addEventListener('click', () => {
      const payload = {
        our_power: field('our-power').value,
        enemy_left: field('enemy-left').value,
        enemy_center: field('enemy-center').value,
        enemy_right: field('enemy-right').value,
        left_advantage: field('adv-left').value,
        center_advantage: field('adv-center').value,
        right_advantage: field('adv-right').value,
      };
      request('/api/plan', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(payload),
      });
    });
  </script>
</body>
</html>
"#
    .to_string()
}
