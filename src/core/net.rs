// src/core/net.rs
//
// One blocking HTTP session through the Tor SOCKS proxy. Opened once per
// crawl; cookies come from the operator (the market's captcha gates login).
// No retries: a failed request ends the crawl.

use std::cell::Cell;
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE, USER_AGENT};
use url::Url;

use crate::config::consts::REQUEST_TIMEOUT_SECS;
use crate::config::options::CrawlOptions;
use crate::error::{Error, Result};

pub struct Session {
    client: Client,
    base: Url,
    pause: Duration,
    requests: Cell<usize>,
}

impl Session {
    pub fn open(opts: &CrawlOptions) -> Result<Self> {
        if opts.base_url.trim().is_empty() {
            return Err(Error::Config(s!("no market URL configured")));
        }
        let base = Url::parse(opts.base_url.trim())?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value(&opts.user_agent, "user agent")?);
        if let Some(cookie) = opts.cookie_header() {
            headers.insert(COOKIE, header_value(&cookie, "cookie")?);
        }

        let mut builder = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .default_headers(headers);

        builder = match &opts.proxy {
            Some(p) => {
                let proxy = reqwest::Proxy::all(p.as_str()).map_err(|_| Error::Proxy(p.clone()))?;
                builder.proxy(proxy)
            }
            None => builder.no_proxy(),
        };

        let client = builder.build()?;
        logf!(
            "Session: base={} proxy={} cookies={}",
            base,
            opts.proxy.as_deref().unwrap_or("none"),
            opts.cookies.len()
        );

        Ok(Self {
            client,
            base,
            pause: Duration::from_millis(opts.pause_ms),
            requests: Cell::new(0),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolve an href found on a page (absolute or relative) against the base URL.
    pub fn resolve(&self, href: &str) -> Result<Url> {
        Ok(self.base.join(href.trim())?)
    }

    /// GET a page body. Non-2xx is an error.
    pub fn get(&self, url: &Url) -> Result<String> {
        let n = self.requests.get();
        if n > 0 && !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
        self.requests.set(n + 1);

        logd!("GET {url}");
        let resp = self.client.get(url.clone()).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url: url.to_string(), status: status.as_u16() });
        }
        Ok(resp.text()?)
    }

    pub fn requests_made(&self) -> usize {
        self.requests.get()
    }
}

fn header_value(v: &str, what: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(v).map_err(|_| Error::Config(format!("{what} contains invalid header characters")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(url: &str) -> CrawlOptions {
        CrawlOptions { base_url: s!(url), proxy: None, ..CrawlOptions::default() }
    }

    #[test]
    fn empty_url_is_a_config_error() {
        assert!(matches!(Session::open(&opts("  ")), Err(Error::Config(_))));
    }

    #[test]
    fn resolves_relative_and_absolute_links() {
        let s = Session::open(&opts("http://market.onion/home")).unwrap();
        assert_eq!(s.resolve("/profile/acme").unwrap().as_str(), "http://market.onion/profile/acme");
        assert_eq!(
            s.resolve("http://other.onion/items?vendor=x").unwrap().as_str(),
            "http://other.onion/items?vendor=x"
        );
        assert_eq!(s.requests_made(), 0);
    }

    /// Answers `n` requests with a tiny 200, one connection each.
    fn serve(n: usize) -> String {
        use std::io::{Read, Write};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            for stream in listener.incoming().take(n) {
                let mut stream = stream.unwrap();
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    let read = stream.read(&mut chunk).unwrap();
                    if read == 0 {
                        break;
                    }
                    buf.extend_from_slice(&chunk[..read]);
                }
                stream
                    .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok")
                    .unwrap();
            }
        });
        format!("http://{addr}/home")
    }

    #[test]
    fn pause_applies_between_requests_only() {
        let base = serve(2);
        let o = CrawlOptions { pause_ms: 150, ..opts(&base) };
        let s = Session::open(&o).unwrap();
        let home = s.base().clone();

        assert_eq!(s.get(&home).unwrap(), "ok");
        let started = std::time::Instant::now();
        assert_eq!(s.get(&s.resolve("/profile/acme").unwrap()).unwrap(), "ok");
        assert!(started.elapsed() >= Duration::from_millis(150));
        assert_eq!(s.requests_made(), 2);
    }

    #[test]
    fn bad_proxy_is_rejected() {
        let o = CrawlOptions { proxy: Some(s!("not a proxy url")), ..opts("http://market.onion/") };
        assert!(Session::open(&o).is_err());
    }
}
