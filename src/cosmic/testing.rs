//! Mock server helpers shared by the resource tests

use serde_json::{Map, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{ClientSet, CosmicClient};

fn wrap(command: &str, inner: Value) -> Value {
    let mut body = Map::new();
    body.insert(format!("{}response", command.to_lowercase()), inner);
    Value::Object(body)
}

/// Answer `command` with `items` stored under `key`
pub async fn mount_list(server: &MockServer, command: &str, key: &str, items: Value) {
    let count = items.as_array().map(Vec::len).unwrap_or(0);
    let mut inner = Map::new();
    inner.insert("count".to_string(), Value::from(count));
    inner.insert(key.to_string(), items);

    Mock::given(method("GET"))
        .and(path("/client/api"))
        .and(query_param("command", command))
        .respond_with(ResponseTemplate::new(200).set_body_json(wrap(command, Value::Object(inner))))
        .mount(server)
        .await;
}

/// Answer `command` with a CloudStack error
pub async fn mount_error(server: &MockServer, command: &str, status: u16, errortext: &str) {
    let inner = serde_json::json!({
        "errorcode": status,
        "cserrorcode": 9999,
        "errortext": errortext,
    });

    Mock::given(method("GET"))
        .and(path("/client/api"))
        .and(query_param("command", command))
        .respond_with(ResponseTemplate::new(status).set_body_json(wrap(command, inner)))
        .mount(server)
        .await;
}

/// Answer an async `command` with a job that completes immediately
pub async fn mount_async_job(server: &MockServer, command: &str, job_id: &str) {
    Mock::given(method("GET"))
        .and(path("/client/api"))
        .and(query_param("command", command))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(wrap(command, serde_json::json!({ "jobid": job_id }))),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/client/api"))
        .and(query_param("command", "queryAsyncJobResult"))
        .and(query_param("jobid", job_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(wrap(
            "queryAsyncJobResult",
            serde_json::json!({ "jobid": job_id, "jobstatus": 1, "jobresult": {"success": true} }),
        )))
        .mount(server)
        .await;
}

/// One client per (profile, server) pair
pub fn client_set(profiles: &[(&str, &MockServer)]) -> ClientSet {
    let mut set = ClientSet::new();
    for (name, server) in profiles {
        set.insert(*name, CosmicClient::with_base_url(&server.uri()));
    }
    set
}
