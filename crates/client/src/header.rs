//! # ヘッダーバッグ
//!
//! すべての送信リクエストに付与するヘッダーの集合。

use std::collections::BTreeMap;

/// 送信リクエストに付与するヘッダーの集合
///
/// 挿入時の検証は行わない。HTTP として不正な名前や値はトランスポートが
/// 送信直前に検出する。削除操作は持たない。
///
/// HTTP ヘッダー名は大文字小文字を区別しないため、小文字化した名前を
/// キーにして最後に設定された綴りと値を保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderBag {
    entries: BTreeMap<String, (String, String)>,
}

impl HeaderBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// ヘッダーを追加する。大文字小文字だけが異なる名前も同じキーとして上書きする
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.entries
            .insert(key.to_ascii_lowercase(), (key, value.into()));
    }

    /// 大文字小文字を区別せずに値を取得する
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_ascii_lowercase())
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 小文字化した名前の順に、最後に設定された綴りでヘッダーを列挙する
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
