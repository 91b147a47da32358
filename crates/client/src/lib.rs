//! # ContactDesk API クライアント
//!
//! UI 層がバックエンドへ問い合わせを送信するための薄いクライアント。
//!
//! ## モジュール構成
//!
//! - `client`: `ApiClient` 本体（ヘッダー管理、送信、レスポンス正規化）
//! - `config`: 環境変数からの設定読み込み
//! - `contact`: 問い合わせリクエストと添付ファイル
//! - `envelope`: `{ "data": ... }` エンベロープの判定
//! - `error`: エラー型
//! - `form`: マルチパートボディの表現
//! - `header`: ヘッダーバッグ
//! - `transport`: HTTP トランスポートの境界と reqwest 実装
//!
//! ## 使用例
//!
//! ```no_run
//! use contactdesk_client::{ApiClient, ClientConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::from_config(&ClientConfig::from_env()?)?;
//! client.set_header("Authorization", "Bearer token");
//!
//! let ticket = client
//!     .post_request(&serde_json::json!({ "message": "hello" }))
//!     .await?;
//! # let _ = ticket;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod contact;
pub mod envelope;
pub mod error;
pub mod form;
pub mod header;
pub mod transport;

pub use client::{ApiClient, DEFAULT_BASE_URL, SUBMIT_CONTACT_REQUEST_PATH};
pub use config::{ClientConfig, ConfigError};
pub use contact::{Attachment, ContactRequest};
pub use envelope::ResponseEnvelope;
pub use error::ApiClientError;
pub use form::{FormPart, FormValue, MultipartForm};
pub use header::HeaderBag;
pub use transport::{HttpTransport, ReqwestTransport, RequestBody};
