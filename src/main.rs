use clap::Parser;
use serde::Serialize;

use innews::cli::Cli;
use innews::config::Config;
use innews::domain::{BatchRequest, DisplayRecord, Mode, Notice, Topic};
use innews::enrich::{ArticleEnricher, Summarizer};
use innews::errors::{NewsError, NewsResult};
use innews::http::ReqwestFetcher;
use innews::images::ImageResolver;
use innews::services::{BatchProcessor, NewsService};
use innews::sources::GoogleNewsSource;

#[derive(Serialize)]
struct JsonDigest<'a> {
    records: &'a [DisplayRecord],
    notices: &'a [Notice],
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> NewsResult<()> {
    let cli = Cli::parse();

    innews::init();

    let Some((mode, count)) = cli.command.digest_mode() else {
        return cmd_topics();
    };

    // Validate before touching the network
    let request = BatchRequest::new(mode, count)?;

    let mut config = Config::from_env()?;
    if let Some(path) = cli.placeholder {
        config.placeholder_path = path;
    }
    if let Some(secs) = cli.timeout {
        if secs == 0 {
            return Err(NewsError::InvalidInput(
                "Timeout must be at least one second".to_string(),
            ));
        }
        config.timeout = std::time::Duration::from_secs(secs);
    }

    cmd_digest(&request, &config, cli.json)
}

fn cmd_topics() -> NewsResult<()> {
    println!("Available topics:\n");
    for topic in Topic::ALL {
        println!("  {}", topic);
    }
    Ok(())
}

fn cmd_digest(request: &BatchRequest, config: &Config, json: bool) -> NewsResult<()> {
    let fetcher = ReqwestFetcher::new(config.timeout, &config.user_agent)?;

    let source = GoogleNewsSource::new(fetcher.clone(), &config.feed_base_url);
    let processor = BatchProcessor::new(
        ArticleEnricher::new(fetcher.clone(), Summarizer::new(config.summary_sentences)),
        ImageResolver::new(fetcher, config.placeholder_path.clone()),
    );
    let service = NewsService::new(source, processor);

    let label = request.mode().describe();
    let mut batch = service.digest(request);

    if json {
        let (records, notices) = batch.finish();
        let digest = JsonDigest {
            records: &records,
            notices: &notices,
        };
        println!("{}", serde_json::to_string_pretty(&digest)?);
        return Ok(());
    }

    if !batch.is_failed() {
        println!("Here are the {} news for you\n", heading(request.mode(), &label));
    }

    let mut shown = 0;
    while let Some(record) = batch.next() {
        print_notices(&batch.take_notices());
        println!("{}\n", record.format());
        shown += 1;
    }
    print_notices(&batch.take_notices());

    if shown == 0 {
        println!("No news found for {}", label);
    }

    Ok(())
}

fn heading(mode: &Mode, label: &str) -> String {
    match mode {
        Mode::Trending => "Trending".to_string(),
        Mode::Category(_) => label.to_string(),
        Mode::Search(keyword) => capitalize(keyword),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn print_notices(notices: &[Notice]) {
    for notice in notices {
        println!("  ! {}", notice.message);
    }
}
