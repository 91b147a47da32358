//! # マルチパートフォーム
//!
//! トランスポートに依存しないマルチパートボディの表現。
//! パートは追加順に送信される。

use crate::{
    contact::{Attachment, ContactRequest},
    error::ApiClientError,
};

/// 添付ファイル以外のフィールドを格納するパート名
pub const REQUEST_DATA_FIELD: &str = "requestData";

/// 添付ファイルパート名の接頭辞（`file0`, `file1`, ...）
pub const FILE_FIELD_PREFIX: &str = "file";

/// パートの値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File(Attachment),
}

/// 名前付きパート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name:  String,
    pub value: FormValue,
}

/// 順序付きのパート列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart {
            name:  name.into(),
            value: FormValue::Text(value.into()),
        });
        self
    }

    pub fn file(mut self, name: impl Into<String>, attachment: Attachment) -> Self {
        self.parts.push(FormPart {
            name:  name.into(),
            value: FormValue::File(attachment),
        });
        self
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<FormPart> {
        self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl TryFrom<&ContactRequest> for MultipartForm {
    type Error = ApiClientError;

    /// `requestData` に続けて `file0`, `file1`, ... を添付順に並べる
    fn try_from(request: &ContactRequest) -> Result<Self, Self::Error> {
        let form = MultipartForm::new().text(REQUEST_DATA_FIELD, request.request_data()?);

        Ok(request
            .attachments
            .iter()
            .enumerate()
            .fold(form, |form, (index, attachment)| {
                form.file(format!("{FILE_FIELD_PREFIX}{index}"), attachment.clone())
            }))
    }
}
