// src/core/net.rs

// One blocking HTTPS GET. No retry: a failed fetch is reported as-is.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub fn http_get(url: &str) -> Result<String> {
    let fetch_err = |source: reqwest::Error| Error::Fetch { url: s!(url), source };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(fetch_err)?;

    logd!("GET {url}");
    let resp = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(fetch_err)?;

    let status = resp.status();
    let body = resp.text().map_err(fetch_err)?;
    logf!("GET {url} -> {status} ({} bytes)", body.len());
    Ok(body)
}
