//! # 問い合わせリクエスト
//!
//! 呼び出し元が組み立てる問い合わせ内容と添付ファイル。
//! クライアントは中身を検証しない。

use bytes::Bytes;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiClientError;

/// 添付ファイル
///
/// Content-Type は送信時にそのまま渡し、内容を検査しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name:    Option<String>,
    pub content_type: Option<String>,
    pub content:      Bytes,
}

impl Attachment {
    pub fn new(content: impl Into<Bytes>) -> Self {
        Self {
            file_name:    None,
            content_type: None,
            content:      content.into(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// 問い合わせリクエスト
///
/// 任意の JSON フィールドと、順序付きの添付ファイル列を持つ。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactRequest {
    pub fields:      Map<String, Value>,
    pub attachments: Vec<Attachment>,
}

impl ContactRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// シリアライズ可能な値からフィールドを作る
    ///
    /// JSON オブジェクトにならない値は `Serialization` エラーになる。
    pub fn from_fields<T: Serialize + ?Sized>(fields: &T) -> Result<Self, ApiClientError> {
        match serde_json::to_value(fields)? {
            Value::Object(map) => Ok(Self {
                fields:      map,
                attachments: Vec::new(),
            }),
            other => Err(ApiClientError::Serialization(format!(
                "問い合わせフィールドは JSON オブジェクトである必要があります: {other}"
            ))),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// 添付ファイル以外のフィールドを JSON 文字列にする
    pub fn request_data(&self) -> Result<String, ApiClientError> {
        Ok(serde_json::to_string(&self.fields)?)
    }
}
