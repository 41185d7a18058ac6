use anyhow::{Context, Result};
use clap::Parser;
use katsuyo::{conjugate, StoredWord};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Dictionary form of the word to conjugate.
    word: String,
    /// Kana reading of the word. Defaults to the word itself.
    #[arg(long)]
    reading: Option<String>,
    /// Word type: adjective, verb, or noun.
    #[arg(long = "word-type", name = "word-type")]
    word_type: String,
    /// Subtype where the word type requires one, such as `godan`,
    /// `ichidan`, `irregular`, `i-adjective`, or `na-adjective`.
    #[arg(long = "sub-type", name = "sub-type")]
    sub_type: Option<String>,
    /// Print the table as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    let reading = args.reading.unwrap_or_else(|| args.word.clone());

    let record = StoredWord {
        word: args.word,
        reading,
        meaning: String::new(),
        word_type: args.word_type,
        sub_type: args.sub_type,
    };

    let entry = record.entry()?;
    tracing::debug!(?entry, "conjugating");

    let table = conjugate(&entry).with_context(|| format!("conjugating `{}`", record.word))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    for (label, pair) in table.rows() {
        println!("{label}: {} ({})", pair.plain, pair.polite);
    }

    Ok(())
}
