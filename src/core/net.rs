// src/core/net.rs
// Blocking HTTPS GET. One request at a time; no retry.

use std::{error::Error, time::Duration};

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

/// Anything that can hand back a page body for a URL.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>> {
        http_get(&self.client, url)
    }
}

pub fn http_get(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {status} {url}").into());
    }
    let body = resp.text()?;
    logd!("GET {url}: {} bytes", body.len());
    Ok(body)
}
