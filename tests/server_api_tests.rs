use trilane::server::routes::route_request;

fn power_text(count: i64, power: i64) -> String {
    (1..=count)
        .map(|i| format!("{i} {power}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn plan_body(our: &str, left: &str, center: &str, right: &str) -> String {
    serde_json::json!({
        "our_power": our,
        "enemy_left": left,
        "enemy_center": center,
        "enemy_right": right,
    })
    .to_string()
}

#[test]
fn health_endpoint_returns_ok_json() {
    let response = route_request("GET", "/api/health", "");
    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_type, "application/json");
    assert!(response.body.contains("\"status\": \"ok\""));
}

#[test]
fn unknown_route_returns_404_envelope() {
    let response = route_request("GET", "/api/missing", "");
    assert_eq!(response.status_code, 404);
    assert!(response.body.contains("\"status\": \"error\""));
}

#[test]
fn index_page_serves_the_console() {
    let response = route_request("GET", "/", "");
    assert_eq!(response.status_code, 200);
    assert!(response.content_type.starts_with("text/html"));
    assert!(response.body.contains("/api/plan"));
}

#[test]
fn plan_endpoint_returns_full_report_for_feasible_input() {
    let body = plan_body(
        &power_text(60, 100),
        "1 400 2 600",
        "1 500 2 500",
        "1 300 2 700",
    );
    let response = route_request("POST", "/api/plan", &body);
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    assert_eq!(payload["outcome"], "success");
    assert_eq!(payload["enemy_totals"]["left"], 1000);
    assert_eq!(payload["enemy_totals"]["center"], 1000);
    assert_eq!(payload["enemy_totals"]["right"], 1000);
    assert_eq!(payload["targets"], payload["enemy_totals"]);
    assert_eq!(payload["home_total_power"], 6000);
    assert_eq!(payload["required_total_power"], 3000);
    assert_eq!(payload["power_difference"], 3000);
    assert_eq!(payload["home_team_count"], 60);

    let allocation = &payload["best_allocation"];
    assert_eq!(allocation["success"], true);
    assert_eq!(allocation["unplaced"], 0);
    for lane in ["left", "center", "right"] {
        let lane = &allocation[lane];
        assert!(lane["total_power"].as_i64().unwrap() >= 1000);
        assert!(lane["count"].as_i64().unwrap() <= 20);
        assert_eq!(lane["is_success"], true);
        let teams = lane["teams"].as_array().expect("teams should be an array");
        assert_eq!(teams.len(), lane["count"].as_i64().unwrap() as usize);
    }
}

#[test]
fn plan_endpoint_applies_advantage_margins_from_strings() {
    // Browser forms submit advantages as strings; "100" must raise the left
    // target while "-100" lowers the right one.
    let body = serde_json::json!({
        "our_power": power_text(60, 100),
        "enemy_left": "1 1000",
        "enemy_center": "1 1000",
        "enemy_right": "1 1000",
        "left_advantage": "100",
        "center_advantage": 0,
        "right_advantage": "-100",
    })
    .to_string();

    let response = route_request("POST", "/api/plan", &body);
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    assert_eq!(payload["targets"]["left"], 1100);
    assert_eq!(payload["targets"]["center"], 1000);
    assert_eq!(payload["targets"]["right"], 900);
}

#[test]
fn plan_endpoint_reports_count_mismatch_without_allocation() {
    let body = plan_body(&power_text(59, 100), "1 10", "2 10", "3 10");
    let response = route_request("POST", "/api/plan", &body);
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    assert_eq!(payload["outcome"], "count_mismatch");
    assert!(payload["summary"].as_str().unwrap().contains("59"));
    assert!(payload.get("best_allocation").is_none() || payload["best_allocation"].is_null());
}

#[test]
fn plan_endpoint_reports_insufficient_power_with_exact_shortfall() {
    let body = plan_body(
        &power_text(60, 100),
        "1 3000",
        "1 2000",
        "1 2000",
    );
    let response = route_request("POST", "/api/plan", &body);
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    assert_eq!(payload["outcome"], "insufficient_power");
    assert_eq!(payload["power_difference"], -1000);
    assert!(payload["summary"].as_str().unwrap().contains("1000"));
    assert!(payload.get("best_allocation").is_none() || payload["best_allocation"].is_null());
}

#[test]
fn plan_endpoint_is_deterministic_for_identical_bodies() {
    let body = plan_body(
        &power_text(60, 100),
        "1 900 2 100",
        "1 1100",
        "1 500 2 500",
    );
    let response_a = route_request("POST", "/api/plan", &body);
    let response_b = route_request("POST", "/api/plan", &body);
    assert_eq!(response_a.status_code, 200);
    assert_eq!(response_a.body, response_b.body);
}

#[test]
fn plan_endpoint_rejects_invalid_json() {
    let response = route_request("POST", "/api/plan", "{bad json}");
    assert_eq!(response.status_code, 400);
    assert!(response.body.contains("Invalid request body"));
}

#[test]
fn plan_endpoint_rejects_non_numeric_advantages() {
    let body = serde_json::json!({
        "our_power": power_text(60, 100),
        "enemy_left": "1 10",
        "enemy_center": "1 10",
        "enemy_right": "1 10",
        "left_advantage": "lots",
        "right_advantage": [1, 2],
    })
    .to_string();

    let response = route_request("POST", "/api/plan", &body);
    assert_eq!(response.status_code, 400);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["message"], "Validation failed");

    let errors = payload["errors"].as_array().expect("errors should be array");
    assert!(errors.iter().any(|error| error["field"] == "left_advantage"));
    assert!(errors.iter().any(|error| error["field"] == "right_advantage"));
    assert!(!errors.iter().any(|error| error["field"] == "center_advantage"));
}

#[test]
fn convert_endpoint_turns_csv_into_power_text() {
    let response = route_request("POST", "/api/convert", "1,900\n2,500\nx,nope\n3,700\n");
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value =
        serde_json::from_str(&response.body).expect("response should be valid json");
    assert_eq!(payload["power_text"], "1 900 2 500 3 700");
}

#[test]
fn convert_output_feeds_straight_into_plan() {
    let rows: String = (1..=60)
        .map(|i| format!("{i},100\n"))
        .collect();
    let convert = route_request("POST", "/api/convert", &rows);
    assert_eq!(convert.status_code, 200);
    let converted: serde_json::Value = serde_json::from_str(&convert.body).unwrap();
    let power_text = converted["power_text"].as_str().unwrap();

    let body = plan_body(power_text, "1 1000", "1 1000", "1 1000");
    let response = route_request("POST", "/api/plan", &body);
    assert_eq!(response.status_code, 200);

    let payload: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(payload["outcome"], "success");
    assert_eq!(payload["home_team_count"], 60);
}
