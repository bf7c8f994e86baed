//! # Voting
//!
//! Each visitor gets [`MAX_VOTES_PER_DAY`] votes. The counter lives on the visitor's side as
//! a `{count, date}` record, the same record the site keeps in local storage under
//! `dailyVoteData`. Here it is a small JSON file.
//!
//! - A record from an earlier day is replaced by a fresh one and written back
//! - No record at all starts fresh without writing anything
//! - The count only goes up after the server confirms the vote
//!
//! The server never sees this counter, its own limit is per IP per minute.
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use bank::payloads::{CSRF_HEADER, CSRF_META_NAME, VoteRequest, VoteResponse};
use chrono::{Local, NaiveDate};
use reqwest::{Client, Response, StatusCode};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ClientError;

pub const MAX_VOTES_PER_DAY: u32 = 10;
pub const LEDGER_FILE: &str = "dailyVoteData.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DailyVotes {
    pub count: u32,
    pub date: String,
}

impl DailyVotes {
    pub fn fresh(today: NaiveDate) -> Self {
        Self {
            count: 0,
            date: today.to_string(),
        }
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct VoteLedger {
    path: PathBuf,
    votes: DailyVotes,
}

impl VoteLedger {
    pub fn load(path: impl Into<PathBuf>, today: NaiveDate) -> Result<Self, ClientError> {
        let path = path.into();
        let fresh = DailyVotes::fresh(today);

        let saved = match fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        let Some(raw) = saved else {
            return Ok(Self { path, votes: fresh });
        };

        match serde_json::from_str::<DailyVotes>(&raw) {
            Ok(votes) if votes.date == fresh.date => Ok(Self { path, votes }),
            Ok(votes) => {
                debug!("Vote ledger from {} is stale, resetting", votes.date);

                let ledger = Self { path, votes: fresh };
                ledger.save()?;
                Ok(ledger)
            }
            Err(e) => {
                warn!("Vote ledger at {} is unreadable, resetting: {e}", path.display());

                let ledger = Self { path, votes: fresh };
                ledger.save()?;
                Ok(ledger)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn votes(&self) -> &DailyVotes {
        &self.votes
    }

    pub fn remaining(&self) -> u32 {
        MAX_VOTES_PER_DAY.saturating_sub(self.votes.count)
    }

    pub fn is_exhausted(&self) -> bool {
        self.votes.count >= MAX_VOTES_PER_DAY
    }

    pub fn record_vote(&mut self) -> Result<(), ClientError> {
        self.votes.count += 1;
        self.save()
    }

    fn save(&self) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, serde_json::to_string(&self.votes)?)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteOutcome {
    pub new_vote_count: u32,
    pub remaining: u32,
}

pub struct VoteClient {
    client: Client,
    base_url: String,
    csrf_token: Option<String>,
}

impl VoteClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf_token: None,
        }
    }

    /// Reads the token the listing page embeds in its `csrf-token` meta tag.
    pub async fn fetch_csrf_token(&mut self) -> Result<String, ClientError> {
        let html = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let token = extract_csrf_token(&html).ok_or(ClientError::MissingCsrfToken)?;
        self.csrf_token = Some(token.clone());

        Ok(token)
    }

    pub async fn vote(
        &mut self,
        ledger: &mut VoteLedger,
        weapon_id: u32,
    ) -> Result<VoteOutcome, ClientError> {
        if ledger.is_exhausted() {
            return Err(ClientError::LimitReached);
        }

        let cached = self.csrf_token.clone();
        let token = match cached.clone() {
            Some(token) => token,
            None => self.fetch_csrf_token().await?,
        };

        let mut response = self.post_vote(&token, weapon_id).await?;

        // the cached token may have expired, retry once with a fresh one
        if response.status() == StatusCode::BAD_REQUEST && cached.is_some() {
            debug!("Vote for {weapon_id} rejected with a cached token, refreshing it");

            let token = self.fetch_csrf_token().await?;
            response = self.post_vote(&token, weapon_id).await?;
        }

        if !response.status().is_success() {
            warn!("Vote for {weapon_id} rejected with {}", response.status());
            return Err(ClientError::Rejected(response.status()));
        }

        let body: VoteResponse = response.json().await?;

        match (body.success, body.new_vote_count) {
            (true, Some(new_vote_count)) => {
                ledger.record_vote()?;

                Ok(VoteOutcome {
                    new_vote_count,
                    remaining: ledger.remaining(),
                })
            }
            _ => Err(ClientError::Failed(body.error)),
        }
    }

    async fn post_vote(&self, token: &str, weapon_id: u32) -> Result<Response, ClientError> {
        let response = self
            .client
            .post(format!("{}/vote", self.base_url))
            .header(CSRF_HEADER, token)
            .json(&VoteRequest {
                weapon_id: Some(i64::from(weapon_id)),
            })
            .send()
            .await?;

        Ok(response)
    }
}

fn extract_csrf_token(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(&format!("meta[name=\"{CSRF_META_NAME}\"]")).ok()?;

    document
        .select(&selector)
        .next()?
        .value()
        .attr("content")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
