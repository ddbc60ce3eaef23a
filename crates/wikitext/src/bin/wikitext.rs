// ABOUTME: CLI binary for wikitext.
// ABOUTME: Fetches one article URL (or reads an HTML file) and writes its plain text to <title>.txt.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wikitext::{Article, Client, ExtractError};

#[derive(Parser, Debug)]
#[command(name = "wikitext")]
#[command(about = "Convert an encyclopedia article page into clean plain text")]
struct Args {
    /// Article URL (prompted for on stdin when omitted)
    #[arg()]
    url: Option<String>,

    /// Read the page from a local HTML file instead of fetching it
    #[arg(long = "html", conflicts_with = "url")]
    html: Option<PathBuf>,

    /// Directory receiving <title>.txt
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// Print the text to stdout instead of writing a file
    #[arg(long = "stdout")]
    stdout: bool,

    /// Print the article as JSON to stdout
    #[arg(long = "json")]
    json_output: bool,

    /// Heading that ends extraction (repeatable, replaces the default set)
    #[arg(long = "stop-heading", value_name = "TEXT")]
    stop_headings: Vec<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", default_value_t = 30)]
    timeout: u64,

    /// Log extraction decisions to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "wikitext=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Ask for the article URL on stdin.
fn prompt_url() -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Article URL: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read URL from stdin")?;
    let url = line.trim().to_string();
    if url.is_empty() {
        bail!("no URL given");
    }
    Ok(url)
}

fn build_client(args: &Args) -> Client {
    let mut builder = Client::builder().timeout(Duration::from_secs(args.timeout));
    if !args.stop_headings.is_empty() {
        builder = builder.stop_headings(args.stop_headings.iter().cloned());
    }
    builder.build()
}

async fn load_article(args: &Args, client: &Client) -> Result<Article> {
    if let Some(html_path) = &args.html {
        let source = html_path.display().to_string();
        let html = fs::read_to_string(html_path)
            .map_err(|e| ExtractError::io(source.as_str(), "ReadHtml", Some(e.into())))?;
        return Ok(client.extract_html(&html, &source)?);
    }

    let url = match &args.url {
        Some(url) => url.clone(),
        None => prompt_url()?,
    };
    Ok(client.fetch(&url).await?)
}

fn emit(args: &Args, article: &Article) -> Result<()> {
    if args.json_output {
        println!("{}", serde_json::to_string_pretty(article)?);
        return Ok(());
    }
    if args.stdout {
        println!("{}", article.text);
        return Ok(());
    }

    let path = args.output_dir.join(article.file_name());
    fs::write(&path, &article.text).map_err(|e| {
        ExtractError::io(path.display().to_string(), "WriteText", Some(e.into()))
    })?;
    println!("saved {}", path.display());
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let client = build_client(&args);
    let article = load_article(&args, &client).await?;
    tracing::debug!(
        title = %article.title,
        words = article.word_count(),
        "article ready"
    );
    emit(&args, &article)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // ExtractError already renders its cause; anyhow context chains do not.
            match e.downcast_ref::<ExtractError>() {
                Some(extract_err) => eprintln!("error: {}", extract_err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::from(1)
        }
    }
}
