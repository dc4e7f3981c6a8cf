use anyhow::Result;
use clap::Parser;
use keyboard_core::{
    delete_by_granularity, Config, DeletionGranularity, InputBuffer, Resolver,
};
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Preview what a backward delete removes from the text before the cursor.
#[derive(Parser)]
#[command(name = "deletion_preview")]
struct Args {
    /// character, word or sentence (defaults to the config value)
    #[arg(long, short)]
    granularity: Option<DeletionGranularity>,

    /// TOML config with classifier policy
    #[arg(long)]
    config: Option<PathBuf>,

    /// Apply the deletion to an in-memory buffer and print what remains
    #[arg(long)]
    apply: bool,

    /// Log resolution details to stderr
    #[arg(long, short)]
    verbose: bool,

    /// Text before the cursor; read one input per stdin line when omitted
    text: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_max_level(if args.verbose {
            tracing::Level::TRACE
        } else {
            tracing::Level::WARN
        })
        .init();

    let config = match &args.config {
        Some(path) => Config::load_toml(path)?,
        None => Config::default(),
    };
    let granularity = args.granularity.unwrap_or(config.default_granularity);
    let resolver = config.resolver();

    if args.text.is_empty() {
        for line in io::stdin().lock().lines() {
            preview(&line?, granularity, &resolver, args.apply);
        }
    } else {
        preview(&args.text.join(" "), granularity, &resolver, args.apply);
    }

    Ok(())
}

fn preview(text: &str, granularity: DeletionGranularity, resolver: &Resolver, apply: bool) {
    println!("{}", render_preview(text, granularity, resolver, apply));
}

/// One output line: the span, its length and what remains, or with `apply`
/// the buffer before and after the deletion.
fn render_preview(
    text: &str,
    granularity: DeletionGranularity,
    resolver: &Resolver,
    apply: bool,
) -> String {
    if apply {
        let mut buffer = InputBuffer::with_text(text);
        let deleted = delete_by_granularity(&mut buffer, resolver, granularity);
        return format!("{:?} -> {:?} ({} deleted)", text, buffer.text(), deleted);
    }

    let span = resolver.resolve(Some(text), granularity);
    format!(
        "{}: {:?} ({} chars), leaves {:?}",
        granularity,
        span.as_str(),
        span.char_count(),
        span.remainder()
    )
}
