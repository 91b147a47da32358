//! # 問い合わせ API クライアント
//!
//! UI 層からバックエンド関数 `submitContactRequest` への通信を担当する。
//!
//! ## エンドポイント
//!
//! - `POST {base_url}/fx/submitContactRequest` - 問い合わせ送信（JSON / マルチパート）
//!
//! ## エラー方針
//!
//! すべてのレスポンスは [`ApiClient::handle_response`] を通る。
//! エラーはステータスコードを問わずそのまま呼び出し元へ返し、
//! ログ出力・通知・リトライはこの層では行わない。
//! 401 をセッション切れとして別扱いする分岐は実装していない。

use std::{
    future::Future,
    sync::{Arc, PoisonError, RwLock},
};

use serde::Serialize;
use serde_json::Value;

use crate::{
    config::ClientConfig,
    contact::ContactRequest,
    envelope::ResponseEnvelope,
    error::ApiClientError,
    form::MultipartForm,
    header::HeaderBag,
    transport::{HttpTransport, ReqwestTransport, RequestBody},
};

/// デフォルトのパス接頭辞
pub const DEFAULT_BASE_URL: &str = "/api/v1";

/// 問い合わせ送信関数のパス
pub const SUBMIT_CONTACT_REQUEST_PATH: &str = "/fx/submitContactRequest";

/// 問い合わせ API クライアント
///
/// ヘッダーバッグだけを状態として持ち、各呼び出しは独立している。
/// `set_header` は共有参照から呼べるため `Arc<ApiClient>` で共有できる。
pub struct ApiClient {
    base_url:  String,
    headers:   RwLock<HeaderBag>,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    /// デフォルトのパス接頭辞（`/api/v1`）でクライアントを作成する
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_base_url(transport, DEFAULT_BASE_URL)
    }

    /// パス接頭辞を指定してクライアントを作成する
    ///
    /// 末尾の `/` は取り除く。
    pub fn with_base_url(transport: Arc<dyn HttpTransport>, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: RwLock::new(HeaderBag::new()),
            transport,
        }
    }

    /// 設定から reqwest トランスポート付きのクライアントを作成する
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiClientError> {
        let transport = ReqwestTransport::new(&config.origin)?;
        Ok(Self::with_base_url(Arc::new(transport), &config.base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 問い合わせ送信先のパス
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SUBMIT_CONTACT_REQUEST_PATH)
    }

    /// 以降のすべてのリクエストに付与するヘッダーを設定する
    ///
    /// 同名のヘッダーがあれば上書きする（名前の大文字小文字は区別しない）。
    /// 送信中のリクエストには影響しない。
    pub fn set_header(&self, key: impl Into<String>, value: impl Into<String>) {
        self.headers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(key, value);
    }

    /// 現在のヘッダーバッグのコピーを返す
    pub fn headers(&self) -> HeaderBag {
        self.headers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// レスポンスの共通ハンドリング
    ///
    /// 成功時は `data` キーがあれば中身を、なければ値をそのまま返す。
    /// 失敗時は [`handle_http_error`](Self::handle_http_error) に委ねる。
    pub async fn handle_response<F>(&self, response: F) -> Result<Value, ApiClientError>
    where
        F: Future<Output = Result<Value, ApiClientError>>,
    {
        match response.await {
            Ok(value) => Ok(ResponseEnvelope::classify(value).into_inner()),
            Err(err) => self.handle_http_error(Some(err)),
        }
    }

    /// エラーの分類
    ///
    /// エラーがあれば種別を問わずそのまま返す。エラーがない場合は
    /// 空の成功結果（`null`）を返す。
    pub fn handle_http_error(
        &self,
        error: Option<ApiClientError>,
    ) -> Result<Value, ApiClientError> {
        match error {
            Some(err) => Err(err),
            None => Ok(Value::Null),
        }
    }

    /// 問い合わせを JSON で送信する
    ///
    /// `POST {base_url}/fx/submitContactRequest` を呼び出す。
    #[tracing::instrument(skip_all, level = "debug")]
    pub async fn post_request<B>(&self, body: &B) -> Result<Value, ApiClientError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.dispatch(RequestBody::Json(body)).await
    }

    /// 問い合わせを添付ファイル付きのマルチパートで送信する
    ///
    /// `requestData` に添付ファイル以外のフィールドの JSON を入れ、
    /// 添付ファイルを `file0`, `file1`, ... として順に付与する。
    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(attachments = contact_request.attachments.len())
    )]
    pub async fn post_multipart_request(
        &self,
        contact_request: &ContactRequest,
    ) -> Result<Value, ApiClientError> {
        let form = MultipartForm::try_from(contact_request)?;
        self.dispatch(RequestBody::Multipart(form)).await
    }

    /// ヘッダーバッグをこの時点で確定させて送信する
    async fn dispatch(&self, body: RequestBody) -> Result<Value, ApiClientError> {
        let url = self.endpoint();
        let headers = self.headers();
        tracing::debug!(
            %url,
            body = body.kind(),
            headers = headers.len(),
            "問い合わせを送信"
        );

        self.handle_response(self.transport.post(&url, body, &headers))
            .await
    }
}
