//! # Ranking Pagination
//!
//! The ranking page starts empty and pulls rows 100 at a time from `/api/ranking_data`,
//! once on load and again on every "load more". An empty page means everything has been
//! loaded and the button stays disabled from then on.
use bank::payloads::RankingEntry;
use minijinja::{Environment, context};
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::ClientError;

pub const LOAD_MORE_LABEL: &str = "もっと見る";
pub const EXHAUSTED_LABEL: &str = "すべてのブキを読み込みました";
pub const FAILED_LABEL: &str = "エラーが発生しました";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Ready,
    Exhausted,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: usize,
    pub entry: RankingEntry,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Page {
    Items(Vec<RankedEntry>),
    Exhausted,
}

pub struct RankingPager {
    client: Client,
    base_url: String,
    offset: usize,
    status: LoadStatus,
}

impl RankingPager {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            offset: 0,
            status: LoadStatus::Ready,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn button_label(&self) -> &'static str {
        match self.status {
            LoadStatus::Ready => LOAD_MORE_LABEL,
            LoadStatus::Exhausted => EXHAUSTED_LABEL,
            LoadStatus::Failed => FAILED_LABEL,
        }
    }

    /// A failed load can be retried, only running out of rows disables the button.
    pub fn button_enabled(&self) -> bool {
        self.status != LoadStatus::Exhausted
    }

    pub async fn fetch_next(&mut self) -> Result<Page, ClientError> {
        if self.status == LoadStatus::Exhausted {
            return Ok(Page::Exhausted);
        }

        match self.request().await {
            Ok(entries) if entries.is_empty() => {
                debug!("Ranking exhausted at offset {}", self.offset);
                self.status = LoadStatus::Exhausted;

                Ok(Page::Exhausted)
            }
            Ok(entries) => {
                let ranked = entries
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| RankedEntry {
                        rank: self.offset + index + 1,
                        entry,
                    })
                    .collect::<Vec<_>>();

                self.offset += ranked.len();
                self.status = LoadStatus::Ready;

                Ok(Page::Items(ranked))
            }
            Err(e) => {
                warn!("Failed to fetch ranking data: {e}");
                self.status = LoadStatus::Failed;

                Err(e)
            }
        }
    }

    async fn request(&self) -> Result<Vec<RankingEntry>, ClientError> {
        let url = format!("{}/api/ranking_data?offset={}", self.base_url, self.offset);

        let entries = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<RankingEntry>>()
            .await?;

        Ok(entries)
    }
}

fn medal(rank: usize) -> Option<(&'static str, &'static str)> {
    match rank {
        1 => Some(("rank-1st", "gold")),
        2 => Some(("rank-2nd", "silver")),
        3 => Some(("rank-3rd", "bronze")),
        _ => None,
    }
}

const ITEM_TEMPLATE: &str = include_str!("../templates/ranking_item.html");

/// One `.ranking-item` row as the ranking page appends it.
pub fn render_item(ranked: &RankedEntry) -> Result<String, ClientError> {
    let (rank_class, medal) = match medal(ranked.rank) {
        Some((class, color)) => (class, Some(color)),
        None => ("", None),
    };

    let mut env = Environment::new();
    env.add_template("ranking_item.html", ITEM_TEMPLATE)?;

    let html = env.get_template("ranking_item.html")?.render(context! {
        rank => ranked.rank,
        rank_class,
        medal,
        entry => &ranked.entry,
    })?;

    Ok(html)
}
