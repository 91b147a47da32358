//! # HTTP トランスポート
//!
//! `ApiClient` がリクエストを送るための差し替え可能な境界。
//! 本番では [`ReqwestTransport`]、テストではスタブを注入する。

mod reqwest_transport;

use async_trait::async_trait;
pub use reqwest_transport::ReqwestTransport;
use serde_json::Value;

use crate::{error::ApiClientError, form::MultipartForm, header::HeaderBag};

/// 送信ボディ
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Multipart(MultipartForm),
}

impl RequestBody {
    pub fn kind(&self) -> &'static str {
        match self {
            RequestBody::Json(_) => "json",
            RequestBody::Multipart(_) => "multipart",
        }
    }
}

/// HTTP トランスポートトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST リクエストを送信し、成功レスポンスのボディを JSON で返す
    ///
    /// # 引数
    ///
    /// - `url`: 送信先。`/api/v1/...` のようなパスでもよい
    /// - `body`: JSON またはマルチパートのボディ
    /// - `headers`: 送信時点のヘッダーバッグ
    ///
    /// # 戻り値
    ///
    /// 2xx ならレスポンスボディ、それ以外は `ApiClientError`
    async fn post(
        &self,
        url: &str,
        body: RequestBody,
        headers: &HeaderBag,
    ) -> Result<Value, ApiClientError>;
}
