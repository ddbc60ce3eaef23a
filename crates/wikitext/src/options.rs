// ABOUTME: Configuration options for wikitext including ExtractOptions, Options, and ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;

/// Level-2 headings that end extraction: French article apparatus first,
/// then the English equivalents.
pub const DEFAULT_STOP_HEADINGS: &[&str] = &[
    "Notes et références",
    "Références",
    "Bibliographie",
    "Voir aussi",
    "Liens externes",
    "References",
    "Notes and references",
    "Bibliography",
    "See also",
    "External links",
    "Further reading",
];

/// Markers describing the article layout, plus the stop set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Class carried by the element holding the article title.
    pub title_class: String,
    /// Id of the `div` wrapping the article body.
    pub body_id: String,
    /// Class of info-panel tables.
    pub infobox_class: String,
    /// Classes of banner cells pruned from the body.
    pub banner_classes: Vec<String>,
    /// Exact level-2 heading texts that terminate extraction.
    pub stop_headings: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            title_class: "mw-page-title-main".to_string(),
            body_id: "bodyContent".to_string(),
            infobox_class: "infobox".to_string(),
            banner_classes: vec!["bandeau-cell".to_string()],
            stop_headings: DEFAULT_STOP_HEADINGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Configuration options for the wikitext client.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
    pub extract: ExtractOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("wikitext/", env!("CARGO_PKG_VERSION")).to_string(),
            http_client: None,
            headers: HashMap::new(),
            extract: ExtractOptions::default(),
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Replace the stop set.
    pub fn stop_headings<I, S>(mut self, headings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts.extract.stop_headings = headings.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the layout markers and stop set wholesale.
    pub fn extract_options(mut self, extract: ExtractOptions) -> Self {
        self.opts.extract = extract;
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
