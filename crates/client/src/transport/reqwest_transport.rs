//! reqwest によるトランスポート実装

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    multipart::{Form, Part},
};
use serde_json::Value;
use url::Url;

use super::{HttpTransport, RequestBody};
use crate::{
    error::ApiClientError,
    form::{FormValue, MultipartForm},
    header::HeaderBag,
};

/// reqwest トランスポート
///
/// クライアントが渡すパスを `origin` に対して解決して送信する。
/// タイムアウトとリトライは設定しない。
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    origin: Url,
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// 新しいトランスポートを作成する
    ///
    /// # 引数
    ///
    /// - `origin`: 送信先のオリジン（例: `http://localhost:8080`）
    pub fn new(origin: &str) -> Result<Self, ApiClientError> {
        let origin = Url::parse(origin)
            .map_err(|e| ApiClientError::InvalidUrl(format!("{origin}: {e}")))?;
        Ok(Self::with_client(origin, reqwest::Client::new()))
    }

    /// 既存の `reqwest::Client` を共有して作成する
    pub fn with_client(origin: Url, client: reqwest::Client) -> Self {
        Self { origin, client }
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// 送信先 URL を解決する
    ///
    /// 絶対 URL はそのまま使い、パスはオリジンに結合する。
    /// 絶対パスを結合するため、オリジン側のパスは使われない。
    pub(crate) fn resolve(&self, url: &str) -> Result<Url, ApiClientError> {
        match Url::parse(url) {
            Ok(absolute) => Ok(absolute),
            Err(url::ParseError::RelativeUrlWithoutBase) => self
                .origin
                .join(url)
                .map_err(|e| ApiClientError::InvalidUrl(format!("{url}: {e}"))),
            Err(e) => Err(ApiClientError::InvalidUrl(format!("{url}: {e}"))),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[tracing::instrument(skip_all, level = "debug", fields(%url, body = body.kind()))]
    async fn post(
        &self,
        url: &str,
        body: RequestBody,
        headers: &HeaderBag,
    ) -> Result<Value, ApiClientError> {
        let target = self.resolve(url)?;
        let builder = self.client.post(target).headers(to_header_map(headers)?);

        let builder = match body {
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(to_reqwest_form(form)?),
        };

        let response = builder.send().await?;
        tracing::debug!(status = response.status().as_u16(), "レスポンスを受信");
        decode_response(response).await
    }
}

/// ヘッダーバッグを `HeaderMap` に変換する
fn to_header_map(headers: &HeaderBag) -> Result<HeaderMap, ApiClientError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (key, value) in headers.iter() {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| ApiClientError::InvalidHeader(format!("{key:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ApiClientError::InvalidHeader(format!("{key}: {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}

fn to_reqwest_form(form: MultipartForm) -> Result<Form, ApiClientError> {
    form.into_parts()
        .into_iter()
        .try_fold(Form::new(), |acc, part| match part.value {
            FormValue::Text(text) => Ok(acc.text(part.name, text)),
            FormValue::File(attachment) => {
                let mut file_part = Part::bytes(attachment.content.to_vec());
                if let Some(file_name) = attachment.file_name {
                    file_part = file_part.file_name(file_name);
                }
                if let Some(content_type) = attachment.content_type {
                    file_part = file_part.mime_str(&content_type).map_err(|e| {
                        ApiClientError::InvalidHeader(format!("{content_type}: {e}"))
                    })?;
                }
                Ok(acc.part(part.name, file_part))
            }
        })
}

/// レスポンスを JSON に変換する
///
/// 2xx の空ボディは `null` として扱う。2xx 以外はステータスとボディを
/// そのまま `Status` エラーに載せる。
pub(crate) async fn decode_response(response: reqwest::Response) -> Result<Value, ApiClientError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiClientError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_slice(&bytes).map_err(|e| ApiClientError::Decode(e.to_string()))
}
