use anyhow::Result;
use clap::{Parser, ValueEnum};
use proverbdex::{load_entries, Entry, EntryCollection, IndexSettings, TokenizerConfig};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "proverbdex")]
#[command(about = "Sorted proverb dictionary with per-field word lookup", long_about = None)]
struct Args {
    /// JSON dataset (array of entries); the built-in sample is used if absent
    #[arg(long, env = "PROVERBDEX_ENTRIES")]
    entries: Option<PathBuf>,

    /// Word to look up in the primary text
    #[arg(long, env = "PROVERBDEX_PRIMARY_WORD", default_value = "pono")]
    primary_word: String,

    /// Word to look up in the secondary text
    #[arg(long, env = "PROVERBDEX_SECONDARY_WORD", default_value = "care")]
    secondary_word: String,

    /// Primary text to check for
    #[arg(long)]
    contains: Option<String>,

    /// Index a repeated word once per entry instead of once per occurrence
    #[arg(long, env = "PROVERBDEX_DEDUPE_TOKENS")]
    dedupe_tokens: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    all_entries: Vec<&'a Entry>,
    primary_word: &'a str,
    primary_matches: Vec<&'a Entry>,
    secondary_word: &'a str,
    secondary_matches: Vec<&'a Entry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contains: Option<ContainsAnswer<'a>>,
}

#[derive(Serialize)]
struct ContainsAnswer<'a> {
    key: &'a str,
    found: bool,
}

fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::new(
            "ʻAʻohe hana nui ke alu ʻia",
            "No task is too big when done together by all",
            "Hoʻoikaika kēia ʻōlelo i ka mana o ka hui pū ʻana a me ka hui pū ʻana. Hōʻike ia e hiki ke hoʻokō ʻia nā hana paʻakikī loa ke hana like nā kānaka me ka lokahi.",
            "This proverb emphasizes the power of teamwork and collaboration. It suggests that even the most challenging tasks can be accomplished when people work together in harmony.",
        ),
        Entry::new(
            "E mālama pono i ka ʻāina",
            " Take good care of the land",
            "Hōʻike kēia ʻōlelo ʻōlelo i ka waiwai Hawaiʻi o ka mālama ʻāina, ʻo ia hoʻi ka mālama ʻana a me ka mālama ʻana i ka ʻāina. Hōʻike ia i ke koʻikoʻi o ka mālama kaiapuni a me ka pilina pili ma waena o ke kanaka a me ke ʻano.",
            " This proverb reflects the Hawaiian value of mālama ʻāina, which means to care for and nurture the land. It underscores the importance of environmental stewardship and the reciprocal relationship between humans and nature.",
        ),
        Entry::new(
            "He aliʻi ka ʻāina, he kauwā ke kanaka",
            "The land is a chief; man is its servant",
            "Hōʻike kēia ʻōlelo ʻōlelo i ka manaʻo o ka poʻe Hawaiʻi i ka ʻāina, me ka nānā ʻana iā ia he aliʻi a he aliʻi paha. Hōʻike ia i ka manaʻo he poʻe mālama ʻāina ke kanaka, lawelawe a mahalo ʻia e like me ke alakaʻi kūlana kiʻekiʻe.",
            "This proverb highlights the reverence Hawaiians have for the land, viewing it as a chief or ruler. It conveys the idea that humans are caretakers of the land, serving and respecting it as they would a high-ranking leader.",
        ),
    ]
}

fn as_entries(found: &[Arc<Entry>]) -> Vec<&Entry> {
    found.iter().map(|e| e.as_ref()).collect()
}

fn print_section(title: &str, entries: &[&Entry]) {
    println!("{}", title);
    for entry in entries {
        println!("{}", entry);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting proverbdex v{}", proverbdex::VERSION);

    let entries = match &args.entries {
        Some(path) => load_entries(path)?,
        None => sample_entries(),
    };

    let settings = IndexSettings::default().with_tokenizer_config(
        TokenizerConfig::default().with_dedupe_tokens(args.dedupe_tokens),
    );
    let mut collection = EntryCollection::with_settings(settings);
    collection.extend(entries);
    info!(
        entries = collection.len(),
        height = collection.tree().height(),
        primary_words = collection.primary_index().len(),
        secondary_words = collection.secondary_index().len(),
        "Collection built"
    );

    let report = Report {
        all_entries: collection.all_entries().into_iter().map(|e| e.as_ref()).collect(),
        primary_word: &args.primary_word,
        primary_matches: as_entries(collection.entries_with_primary_word(&args.primary_word)),
        secondary_word: &args.secondary_word,
        secondary_matches: as_entries(
            collection.entries_with_secondary_word(&args.secondary_word),
        ),
        contains: args.contains.as_deref().map(|key| ContainsAnswer {
            key,
            found: collection.contains_entry(key),
        }),
    };

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            print_section("All entries:", &report.all_entries);
            print_section(
                &format!(
                    "\nEntries containing the word '{}' (primary text):",
                    report.primary_word
                ),
                &report.primary_matches,
            );
            print_section(
                &format!(
                    "\nEntries containing the word '{}' (secondary text):",
                    report.secondary_word
                ),
                &report.secondary_matches,
            );
            if let Some(answer) = &report.contains {
                println!("\nContains '{}': {}", answer.key, answer.found);
            }
        }
    }

    Ok(())
}
