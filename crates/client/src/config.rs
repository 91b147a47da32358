//! # クライアント設定
//!
//! 環境変数から API クライアントの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_ORIGIN` | **Yes** | 送信先のオリジン（例: `http://localhost:8080`）。パスは指定できない |
//! | `API_BASE_URL` | No | パス接頭辞（デフォルト: `/api/v1`） |

use std::env;

use thiserror::Error;
use url::Url;

use crate::client::DEFAULT_BASE_URL;

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    #[error("API_ORIGIN は有効な URL である必要があります: {0}")]
    InvalidOrigin(String),
}

/// API クライアントの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// 送信先のオリジン
    pub origin:   String,
    /// エンドポイントのパス接頭辞
    pub base_url: String,
}

impl ClientConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("API_ORIGIN").ok(),
            env::var("API_BASE_URL").ok(),
        )
    }

    /// 変数の値から設定を組み立てる
    ///
    /// 空文字は未設定として扱う。`API_ORIGIN` にパス・クエリ・フラグメントが
    /// 含まれる場合は送信時に失われるため `InvalidOrigin` にする。
    /// パス接頭辞は `API_BASE_URL` で指定する。
    pub fn from_vars(
        origin: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let origin = origin
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("API_ORIGIN"))?;
        let parsed = Url::parse(&origin)
            .map_err(|e| ConfigError::InvalidOrigin(format!("{origin}: {e}")))?;
        if !matches!(parsed.path(), "" | "/")
            || parsed.query().is_some()
            || parsed.fragment().is_some()
        {
            return Err(ConfigError::InvalidOrigin(format!(
                "{origin}: パスは API_BASE_URL で指定してください"
            )));
        }

        let base_url = base_url
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { origin, base_url })
    }
}
