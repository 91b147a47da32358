//! # ContactDesk 共有ユーティリティ
//!
//! バックエンドとクライアントの双方から参照される型とログ初期化を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - トレーシング初期化は `observability` feature 有効時のみコンパイルする

pub mod api_response;
pub mod observability;

pub use api_response::ApiResponse;
