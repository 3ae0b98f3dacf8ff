#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use async_trait::async_trait;
use blog_tweet::clients::{AttributeFetcher, PostCreator};
use blog_tweet::core::config::AppConfig;
use blog_tweet::core::models::ArticleInfo;
use blog_tweet::errors::TweetError;
use blog_tweet::pipeline::{Announcer, Startup};

pub const BLOG_URL: &str = "https://blog.example.com";
pub const API_TOKEN: &str = "shared-secret";

/// Records every post it is asked to create.
#[derive(Default)]
pub struct RecordingPoster {
    pub posts: Mutex<Vec<String>>,
    pub fail_with: Option<String>,
}

impl RecordingPoster {
    pub fn failing(message: &str) -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn posts(&self) -> Vec<String> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostCreator for RecordingPoster {
    async fn create_post(&self, text: &str) -> Result<String, TweetError> {
        self.posts.lock().unwrap().push(text.to_string());
        match &self.fail_with {
            Some(message) => Err(TweetError::Twitter(message.clone())),
            None => Ok("1234567890".to_string()),
        }
    }
}

/// Answers lookups from a fixed article, or fails.
pub struct StubFetcher {
    pub article: Option<ArticleInfo>,
    pub lookups: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn returning(slug: &str, title: &str) -> Self {
        Self {
            article: Some(ArticleInfo::new(slug, title).unwrap()),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            article: None,
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl AttributeFetcher for StubFetcher {
    async fn fetch_article(&self, id: &str) -> Result<ArticleInfo, TweetError> {
        self.lookups.lock().unwrap().push(id.to_string());
        self.article
            .clone()
            .ok_or_else(|| TweetError::Cms(format!("entry {id} not found")))
    }
}

pub fn announcer(poster: &Arc<RecordingPoster>) -> Startup {
    Ok(Announcer::new(poster.clone(), BLOG_URL))
}

pub fn cms_announcer(poster: &Arc<RecordingPoster>, fetcher: &Arc<StubFetcher>) -> Startup {
    Ok(Announcer::new(poster.clone(), BLOG_URL)
        .with_fetcher(fetcher.clone())
        .with_api_token(API_TOKEN))
}

/// Builds the pipeline the way the binaries do, from an environment that is
/// complete except for `missing`.
pub fn startup_without(missing: &str) -> Startup {
    AppConfig::from_lookup(|name| (name != missing).then(|| format!("{name}-value")))
        .and_then(|config| Announcer::from_config(&config))
}

/// A one-route HTTP server on localhost that answers every request with the
/// same canned response and keeps the raw requests it received.
pub struct StubServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn start(status_line: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                // Recorded before replying so the caller can count it once it returns.
                recorded.lock().unwrap().push(read_request(&mut stream));
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self { url, requests }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= head_end + 4 + content_length {
            break;
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

/// A URL on localhost where nothing is listening.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// HTTP client that ignores proxy settings from the environment.
pub fn direct_http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
