//! # Observability 基盤
//!
//! クライアントを組み込むアプリケーション向けのトレーシング初期化を提供する。
//! 環境変数 `LOG_FORMAT` で JSON / Pretty 出力を切り替える。

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON 形式（本番環境向け）
    Json,
    /// 人間が読みやすい形式（開発環境向け）
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値からログ形式を決定する
    ///
    /// 未設定・不正値はいずれも [`Pretty`](LogFormat::Pretty) になる。
    /// 大文字小文字は区別しない。
    pub fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Pretty,
        }
    }

    /// 環境変数 `LOG_FORMAT` から読み取る
    pub fn from_env() -> Self {
        Self::from_value(std::env::var("LOG_FORMAT").ok().as_deref())
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// `RUST_LOG` 未設定時に使うフィルタ
    pub default_filter: String,
    pub log_format:     LogFormat,
}

impl TracingConfig {
    pub fn new(log_format: LogFormat) -> Self {
        Self {
            default_filter: "info,contactdesk=debug".to_string(),
            log_format,
        }
    }

    pub fn from_env() -> Self {
        Self::new(LogFormat::from_env())
    }

    /// デフォルトフィルタを差し替える
    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }
}

/// グローバルサブスクライバーを登録する
///
/// クライアントはライブラリとして組み込まれるため、既にサブスクライバーが
/// 登録済みの場合は panic せずエラーを返す。
#[cfg(feature = "observability")]
pub fn init_tracing(
    config: TracingConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.default_filter));

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
}
