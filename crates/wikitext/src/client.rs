// ABOUTME: The main Client struct for wikitext that fetches article pages and extracts their text.
// ABOUTME: Provides async fetch() and extract_html() returning an Article for a URL or HTML string.

use scraper::Html;
use tracing::{debug, info};

use crate::error::ExtractError;
use crate::extractors::extract_article;
use crate::options::{ClientBuilder, ExtractOptions, Options};
use crate::resource::{fetch, FetchOptions};
use crate::result::Article;

/// The wikitext client for fetching and extracting article pages.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    ///
    /// Falls back to a default `reqwest::Client` if the configured one
    /// cannot be built (for instance when the TLS backend fails to load).
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new())
        });

        Self { opts, http_client }
    }

    /// The options this client was built with.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// The layout markers and stop set used for extraction.
    pub fn extract_options(&self) -> &ExtractOptions {
        &self.opts.extract
    }

    /// Fetch an article page and extract its text.
    pub async fn fetch(&self, url: &str) -> Result<Article, ExtractError> {
        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
        };

        info!(url, "fetching article");
        let fetched = fetch(&self.http_client, url, &fetch_opts).await?;
        let raw_html = fetched.text_utf8();
        debug!(url, final_url = %fetched.final_url, "decoded page");

        self.extract_html(&raw_html, url)
    }

    /// Extract the text of an article from an HTML string.
    ///
    /// `source` names where the HTML came from (URL or path) and is copied
    /// into the result and into errors.
    pub fn extract_html(&self, html: &str, source: &str) -> Result<Article, ExtractError> {
        let doc = Html::parse_document(html);
        let mut article =
            extract_article(&doc, self.extract_options()).map_err(|e| e.with_source_ref(source))?;
        article.source = source.to_string();
        Ok(article)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = r#"<!DOCTYPE html>
<html lang="fr"><head><meta charset="utf-8"><title>Lyon — Wikipédia</title></head>
<body>
<h1 id="firstHeading"><span class="mw-page-title-main">Lyon</span></h1>
<div id="bodyContent">
<table class="infobox"><tr><td>Pays</td></tr></table>
<p>Lyon est une ville.</p>
<h2>Voir aussi</h2>
<p>Liens.</p>
</div>
</body></html>"#;

    #[tokio::test]
    async fn fetch_extracts_article() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/wiki/Lyon");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body(PAGE);
        });

        let client = Client::builder().build();
        let url = server.url("/wiki/Lyon");
        let article = client.fetch(&url).await;
        mock.assert();

        let article = article.expect("fetch should succeed");
        assert_eq!(article.title, "Lyon");
        assert_eq!(article.text, "Lyon est une ville.");
        assert_eq!(article.source, url);
    }

    #[tokio::test]
    async fn fetch_surfaces_http_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/wiki/Absent");
            then.status(500);
        });

        let client = Client::builder().build();
        let err = client
            .fetch(&server.url("/wiki/Absent"))
            .await
            .expect_err("500 should fail");
        assert_eq!(err.code, ErrorCode::Fetch);
    }

    #[tokio::test]
    async fn fetch_sends_user_agent() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/wiki/Lyon")
                .header("user-agent", "wikitext-test");
            then.status(200).body(PAGE);
        });

        let client = Client::builder().user_agent("wikitext-test").build();
        let article = client.fetch(&server.url("/wiki/Lyon")).await;
        mock.assert();
        assert!(article.is_ok());
    }

    #[test]
    fn extract_html_tags_errors_with_source() {
        let client = Client::builder().build();
        let err = client
            .extract_html("<html><body></body></html>", "page.html")
            .expect_err("no title");
        assert_eq!(err.code, ErrorCode::TitleNotFound);
        assert_eq!(err.source_ref, "page.html");
    }

    #[tokio::test]
    async fn fetch_rejects_invalid_url_before_requesting() {
        let client = Client::builder().build();
        let err = client.fetch("ftp://example.org/Lyon").await.unwrap_err();
        assert!(err.is_invalid_url());
        assert_eq!(err.source_ref, "ftp://example.org/Lyon");
    }

    #[test]
    fn extract_html_uses_configured_stop_set() {
        let client = Client::builder().stop_headings(["Histoire"]).build();
        assert_eq!(client.extract_options().stop_headings, vec!["Histoire"]);
        let html = r#"<span class="mw-page-title-main">Lyon</span>
<div id="bodyContent"><p>Intro.</p><h2>Histoire</h2><p>Antiquité.</p><h2>Voir aussi</h2></div>"#;
        let article = client.extract_html(html, "").unwrap();
        assert_eq!(article.text, "Intro.");
    }

    #[test]
    fn extract_html_without_stop_heading_keeps_everything() {
        let client = Client::builder().stop_headings(Vec::<String>::new()).build();
        let html = r#"<span class="mw-page-title-main">Lyon</span>
<div id="bodyContent"><p>Intro.</p><h2>Voir aussi</h2><p>Liens.</p></div>"#;
        let article = client.extract_html(html, "").unwrap();
        assert_eq!(article.text, "Intro.\n\nVoir aussi\nLiens.");
    }
}
