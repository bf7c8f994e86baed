use std::path::PathBuf;

use clap::{Parser, Subcommand};
use client::{
    FilterSelection, Page, RankingPager, VoteClient, VoteLedger,
    filter::{ALL, DEFAULT_SORT},
    vote::{LEDGER_FILE, today},
};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "http://localhost:1111")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the listing URL for a filter selection.
    Url {
        #[arg(long = "type", default_value = ALL)]
        kind: String,

        #[arg(long, default_value = ALL)]
        sub: String,

        #[arg(long, default_value = ALL)]
        special: String,

        #[arg(long, default_value = DEFAULT_SORT)]
        sort: String,
    },

    /// Pages through the ranking.
    Ranking {
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },

    /// Votes for a kit, counting against today's local limit.
    Vote {
        weapon_id: u32,

        #[arg(long, default_value = LEDGER_FILE)]
        ledger: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let client = Client::new();

    match args.command {
        Command::Url {
            kind,
            sub,
            special,
            sort,
        } => {
            let selection = FilterSelection {
                kind,
                sub,
                special,
                sort,
            };

            println!("{}", selection.listing_url(&args.base_url));
        }
        Command::Ranking { pages } => print_ranking(client, &args.base_url, pages).await?,
        Command::Vote { weapon_id, ledger } => {
            let mut ledger = VoteLedger::load(ledger, today())?;
            let mut voter = VoteClient::new(client, &args.base_url);

            let outcome = voter.vote(&mut ledger, weapon_id).await?;

            println!("{} 票", outcome.new_vote_count);
            println!("Votes left today: {}", outcome.remaining);
        }
    }

    Ok(())
}

async fn print_ranking(client: Client, base_url: &str, pages: usize) -> anyhow::Result<()> {
    let mut pager = RankingPager::new(client, base_url);

    let pb = ProgressBar::new(pages as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let mut rows = Vec::new();

    for _ in 0..pages {
        pb.set_message(format!("Fetching from {}", pager.offset()));

        match pager.fetch_next().await? {
            Page::Items(items) => rows.extend(items),
            Page::Exhausted => break,
        }

        pb.inc(1);
    }

    pb.finish_with_message(pager.button_label());

    for row in rows {
        let entry = row.entry;
        println!(
            "{:>5}  {} / {} / {}  {} 票",
            row.rank, entry.main.name, entry.sub.name, entry.special.name, entry.vote_count
        );
    }

    Ok(())
}
