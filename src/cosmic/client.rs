//! Cosmic HTTP client for signed API requests

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use log::{debug, trace};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sha1::Sha1;
use std::time::{Duration, Instant};

use crate::config::api;
use crate::error::{CosmicError, Result};
use crate::profiles::Profile;

type HmacSha1 = Hmac<Sha1>;

/// Cosmic API client bound to a single profile
pub struct CosmicClient {
    client: Client,
    api_url: String,
    api_key: String,
    secret_key: String,
    /// Upper bound for async job polling
    timeout: Duration,
    poll_interval: Duration,
}

impl CosmicClient {
    /// Create a new client for the given profile
    pub fn new(profile: &Profile) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(profile.timeout())
            .danger_accept_invalid_certs(!profile.verify_ssl())
            .build()
            .map_err(|e| CosmicError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: profile.api_url.clone(),
            api_key: profile.api_key.clone(),
            secret_key: profile.secret_key.clone(),
            timeout: profile.timeout(),
            poll_interval: Duration::from_millis(api::JOB_POLL_INTERVAL_MS),
        })
    }

    /// Create a client pointing at a mock server
    #[cfg(test)]
    pub fn with_base_url(base_url: &str) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_url: format!("{}/client/api", base_url),
            api_key: "test-key".to_string(),
            secret_key: "test-secret".to_string(),
            timeout: Duration::from_secs(5),
            poll_interval: Duration::from_millis(10),
        }
    }

    /// Override the async job timeout
    #[cfg(test)]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the signed request URL for a command
    pub(crate) fn signed_url(&self, command: &str, params: &[(&str, &str)]) -> Result<String> {
        let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 3);
        pairs.push(("apiKey", self.api_key.as_str()));
        pairs.push(("command", command));
        pairs.push(("response", api::RESPONSE_FORMAT));
        pairs.extend_from_slice(params);
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        let query = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let mut mac = HmacSha1::new_from_slice(self.secret_key.as_bytes())
            .map_err(|e| CosmicError::Config(format!("Invalid secret key: {}", e)))?;
        mac.update(query.to_lowercase().as_bytes());
        let signature = BASE64.encode(mac.finalize().into_bytes());

        Ok(format!(
            "{}?{}&signature={}",
            self.api_url,
            query,
            urlencoding::encode(&signature)
        ))
    }

    /// Send a command and return the unwrapped response object
    pub(crate) async fn request(&self, command: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = self.signed_url(command, params)?;
        debug!("Calling {}", command);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| http_error(&url, e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| http_error(&url, e))?;
        trace!("{} returned {}: {}", command, status, body);

        let inner = match serde_json::from_str::<Value>(&body) {
            Ok(value) => unwrap_response(value),
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => {
                return Err(CosmicError::Api {
                    status: status.as_u16(),
                    code: u32::from(status.as_u16()),
                    cs_code: 0,
                    message: body.trim().to_string(),
                })
            }
        };

        if !status.is_success() || inner.get("errortext").is_some() {
            return Err(api_error(status.as_u16(), &inner));
        }

        Ok(inner)
    }

    /// Run a list command and decode the items stored under `key`
    ///
    /// A missing key means the command found nothing.
    pub(crate) async fn list<T>(
        &self,
        command: &str,
        params: &[(&str, &str)],
        key: &str,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut inner = self.request(command, params).await?;
        match inner.get_mut(key).map(Value::take) {
            Some(items) => Ok(serde_json::from_value(items)?),
            None => Ok(Vec::new()),
        }
    }

    /// Run an async command and wait for its job to finish
    ///
    /// Returns the job result object on success.
    pub(crate) async fn execute_async(&self, command: &str, params: &[(&str, &str)]) -> Result<Value> {
        let inner = self.request(command, params).await?;
        let job_id = inner
            .get("jobid")
            .and_then(Value::as_str)
            .ok_or_else(|| CosmicError::Json(format!("{} did not return a job id", command)))?
            .to_string();

        debug!("Waiting for async job {} ({})", job_id, command);
        let started = Instant::now();

        loop {
            let mut job = self
                .request("queryAsyncJobResult", &[("jobid", job_id.as_str())])
                .await?;
            let status = job
                .get("jobstatus")
                .and_then(Value::as_i64)
                .unwrap_or(api::JOB_STATUS_PENDING);

            if status == api::JOB_STATUS_PENDING {
                if started.elapsed() >= self.timeout {
                    return Err(CosmicError::Timeout(format!(
                        "async job {} did not finish within {}s",
                        job_id,
                        self.timeout.as_secs()
                    )));
                }
                tokio::time::sleep(self.poll_interval).await;
                continue;
            }

            let result = job
                .get_mut("jobresult")
                .map(Value::take)
                .unwrap_or(Value::Null);

            if status == api::JOB_STATUS_FAILED {
                let message = result
                    .get("errortext")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string();
                return Err(CosmicError::AsyncJob(message));
            }

            return Ok(result);
        }
    }
}

/// Take the value of the single top-level key of a response body
fn unwrap_response(body: Value) -> Value {
    match body {
        Value::Object(map) => map.into_iter().next().map(|(_, v)| v).unwrap_or(Value::Null),
        other => other,
    }
}

fn api_error(status: u16, inner: &Value) -> CosmicError {
    let number = |key: &str| {
        inner
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    };

    CosmicError::Api {
        status,
        code: number("errorcode").unwrap_or(u32::from(status)),
        cs_code: number("cserrorcode").unwrap_or(0),
        message: inner
            .get("errortext")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string(),
    }
}

/// Format a transport error like `Get <url>: <cause>`
///
/// The URL carries the API key and signature; callers redact before printing.
fn http_error(url: &str, err: reqwest::Error) -> CosmicError {
    CosmicError::Http(format!("Get {}: {}", url, err.without_url()))
}
