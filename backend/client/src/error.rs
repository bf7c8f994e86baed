use std::io;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("本日の投票回数の上限に達しました。")]
    LimitReached,

    #[error("リクエストが多すぎます。少し時間を置いてから再試行してください。 ({0})")]
    Rejected(StatusCode),

    #[error("投票に失敗しました。")]
    Failed(Option<String>),

    #[error("CSRF token not found on the listing page")]
    MissingCsrfToken,

    #[error("エラーが発生しました。 {0}")]
    Http(#[from] reqwest::Error),

    #[error("Vote ledger unreadable: {0}")]
    Ledger(#[from] serde_json::Error),

    #[error("Vote ledger io: {0}")]
    Io(#[from] io::Error),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),
}
