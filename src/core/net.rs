// src/core/net.rs
// Blocking HTTP GET with a fixed timeout and a browser-like User-Agent.

use std::error::Error;
use std::time::Duration;

use reqwest::blocking::Client;

/// Anything that can turn a URL into a page body.
/// The scraper only talks to this, so tests can serve pages from memory.
pub trait Fetcher {
    fn get(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {} {}", status, url).into());
        }
        Ok(resp.text()?)
    }
}
