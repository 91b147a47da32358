//! # レスポンスエンベロープの判定
//!
//! 成功レスポンスが `{ "data": ... }` で包まれているかをキーの有無で判定する。

use contactdesk_shared::ApiResponse;
use serde_json::Value;

/// 成功レスポンスの形状
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope {
    /// `data` キーを持つオブジェクト
    Wrapped(ApiResponse<Value>),
    /// それ以外（オブジェクト以外の値、`data` を持たないオブジェクト）
    Raw(Value),
}

impl ResponseEnvelope {
    /// レスポンス値を分類する
    ///
    /// `data` キーが存在すれば値が `null` でもラップ済みとみなす。
    /// `data` 以外のキーは捨てる。
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Object(mut map) if map.contains_key("data") => {
                let data = map.remove("data").unwrap_or(Value::Null);
                ResponseEnvelope::Wrapped(ApiResponse::new(data))
            }
            other => ResponseEnvelope::Raw(other),
        }
    }

    /// 呼び出し元に渡す値を取り出す
    pub fn into_inner(self) -> Value {
        match self {
            ResponseEnvelope::Wrapped(response) => response.into_data(),
            ResponseEnvelope::Raw(value) => value,
        }
    }
}
