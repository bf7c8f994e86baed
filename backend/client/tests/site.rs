use std::{sync::Arc, time::Duration};

use chrono::NaiveDate;
use client::{
    ClientError, FilterSelection, Page, RankingPager, VoteClient, VoteLedger,
    ranking::LoadStatus,
    vote::{LEDGER_FILE, MAX_VOTES_PER_DAY},
};
use reqwest::{Client, StatusCode};
use server::{config::Config, database::VoteStore, serve, state::State, utils::unix_now};
use tempfile::tempdir;
use tokio::{net::TcpListener, sync::oneshot};

async fn spawn_site(config: Config) -> (String, Arc<State>, oneshot::Sender<()>) {
    let state = State::with_store(config, VoteStore::memory()).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let served = state.clone();
    tokio::spawn(async move {
        let _ = serve(listener, served, async move {
            let _ = shutdown_rx.await;
        })
        .await;
    });

    (format!("http://{addr}"), state, shutdown_tx)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

/// Rate limit windows follow the clock, so stay clear of a minute boundary.
async fn fresh_window() {
    let into_minute = unix_now() % 60;

    if into_minute >= 55 {
        tokio::time::sleep(Duration::from_secs(61 - into_minute)).await;
    }
}

#[tokio::test]
async fn test_pager_walks_whole_ranking() {
    let (base_url, state, _shutdown) = spawn_site(Config::local()).await;
    let total = state.catalog.total_combinations() as usize;

    let mut pager = RankingPager::new(Client::new(), &base_url);
    let mut seen = 0;

    loop {
        match pager.fetch_next().await.unwrap() {
            Page::Items(items) => {
                assert_eq!(items[0].rank, seen + 1);
                assert!(items.len() <= 100);
                seen += items.len();
            }
            Page::Exhausted => break,
        }
    }

    assert_eq!(seen, total);
    assert_eq!(pager.offset(), total);
    assert_eq!(pager.status(), LoadStatus::Exhausted);
    assert!(!pager.button_enabled());

    assert_eq!(pager.fetch_next().await.unwrap(), Page::Exhausted);
}

#[tokio::test]
async fn test_pager_failure_keeps_offset() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut pager = RankingPager::new(Client::new(), &format!("http://{addr}"));

    assert!(pager.fetch_next().await.is_err());
    assert_eq!(pager.status(), LoadStatus::Failed);
    assert_eq!(pager.offset(), 0);
    assert!(pager.button_enabled());
}

#[tokio::test]
async fn test_vote_updates_ledger_and_ranking() {
    let (base_url, state, _shutdown) = spawn_site(Config::local()).await;
    let dir = tempdir().unwrap();

    let mut ledger = VoteLedger::load(dir.path().join(LEDGER_FILE), today()).unwrap();
    let mut voter = VoteClient::new(Client::new(), &base_url);

    let first = voter.vote(&mut ledger, 100).await.unwrap();
    assert_eq!(first.new_vote_count, 1);
    assert_eq!(first.remaining, MAX_VOTES_PER_DAY - 1);

    let second = voter.vote(&mut ledger, 100).await.unwrap();
    assert_eq!(second.new_vote_count, 2);

    let mut pager = RankingPager::new(Client::new(), &base_url);
    let Page::Items(items) = pager.fetch_next().await.unwrap() else {
        panic!("expected ranking rows");
    };

    let kit = state.catalog.kit(100).unwrap();
    assert_eq!(items[0].rank, 1);
    assert_eq!(items[0].entry.vote_count, 2);
    assert_eq!(items[0].entry.special.name, kit.special.name);

    let reloaded = VoteLedger::load(dir.path().join(LEDGER_FILE), today()).unwrap();
    assert_eq!(reloaded.votes().count, 2);
}

#[tokio::test]
async fn test_daily_limit_blocks_before_request() {
    let (base_url, state, _shutdown) = spawn_site(Config::local()).await;
    let dir = tempdir().unwrap();

    let mut ledger = VoteLedger::load(dir.path().join(LEDGER_FILE), today()).unwrap();
    let mut voter = VoteClient::new(Client::new(), &base_url);

    for _ in 0..MAX_VOTES_PER_DAY {
        voter.vote(&mut ledger, 3).await.unwrap();
    }

    let err = voter.vote(&mut ledger, 3).await.unwrap_err();
    assert!(matches!(err, ClientError::LimitReached));
    assert_eq!(state.store.count(3).await.unwrap(), MAX_VOTES_PER_DAY);
}

#[tokio::test]
async fn test_rejected_vote_not_counted() {
    let config = Config {
        votes_per_minute: 1,
        ..Config::local()
    };
    let (base_url, _state, _shutdown) = spawn_site(config).await;
    let dir = tempdir().unwrap();

    let mut ledger = VoteLedger::load(dir.path().join(LEDGER_FILE), today()).unwrap();
    let mut voter = VoteClient::new(Client::new(), &base_url);
    fresh_window().await;

    voter.vote(&mut ledger, 5).await.unwrap();

    let err = voter.vote(&mut ledger, 5).await.unwrap_err();
    assert!(matches!(err, ClientError::Rejected(StatusCode::TOO_MANY_REQUESTS)));
    assert_eq!(ledger.votes().count, 1);
}

#[tokio::test]
async fn test_excluded_kit_voted_and_ranked() {
    let (base_url, state, _shutdown) = spawn_site(Config::local()).await;
    let dir = tempdir().unwrap();

    let mut ledger = VoteLedger::load(dir.path().join(LEDGER_FILE), today()).unwrap();
    let mut voter = VoteClient::new(Client::new(), &base_url);

    let excluded = state.catalog.kit_id(0, 0, 1);
    let outcome = voter.vote(&mut ledger, excluded).await.unwrap();

    assert_eq!(outcome.new_vote_count, 1);
    assert_eq!(ledger.remaining(), MAX_VOTES_PER_DAY - 1);

    let mut pager = RankingPager::new(Client::new(), &base_url);
    let Page::Items(items) = pager.fetch_next().await.unwrap() else {
        panic!("expected ranking rows");
    };

    let kit = state.catalog.kit(excluded).unwrap();
    assert_eq!(items[0].entry.vote_count, 1);
    assert_eq!(items[0].entry.special.name, kit.special.name);
}

#[tokio::test]
async fn test_unknown_kit_rejected() {
    let (base_url, state, _shutdown) = spawn_site(Config::local()).await;
    let dir = tempdir().unwrap();

    let mut ledger = VoteLedger::load(dir.path().join(LEDGER_FILE), today()).unwrap();
    let mut voter = VoteClient::new(Client::new(), &base_url);

    let err = voter
        .vote(&mut ledger, state.catalog.total_combinations())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Rejected(StatusCode::BAD_REQUEST)));
    assert_eq!(ledger.remaining(), MAX_VOTES_PER_DAY);
}

#[tokio::test]
async fn test_filter_url_is_served() {
    let (base_url, _state, _shutdown) = spawn_site(Config::local()).await;

    let selection = FilterSelection {
        kind: "ワイパー".to_string(),
        sort: "votes_desc".to_string(),
        ..Default::default()
    };

    let html = reqwest::get(selection.listing_url(&base_url))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains("<option value=\"ワイパー\" selected>"));
    assert!(html.contains("Splatana_Wiper.png"));
    assert!(!html.contains("Splattershot_Jr.png"));
}
