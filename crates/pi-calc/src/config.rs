//! 実行時間の設定
//!
//! コマンドライン引数で受け取った実行時間（秒）を解釈する。整数として解釈
//! できない値はエラーにせず、デフォルト値に置き換えて続行する。負の値は
//! そのまま保持し、計算時間としては 0 秒に切り上げる。

use std::time::Duration;

/// デフォルトの実行時間（秒）
pub const DEFAULT_RUNTIME_SECS: i64 = 180;

/// 実行時間引数のエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeArgError {
    /// 整数として解釈できない
    #[error("Invalid runtime value: {0:?}")]
    NotAnInteger(String),
}

/// 解決済みの実行時間設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSetting {
    /// 実行時間（秒）。指定された値そのもので、負もあり得る
    pub seconds: i64,
    /// デフォルトに置き換えた場合、その原因
    pub fallback: Option<RuntimeArgError>,
}

impl RuntimeSetting {
    /// 計算に使う時間予算（負の値は 0）
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.seconds.max(0).unsigned_abs())
    }
}

/// 実行時間引数を解析
pub fn parse_runtime(arg: &str) -> Result<i64, RuntimeArgError> {
    arg.trim()
        .parse::<i64>()
        .map_err(|_| RuntimeArgError::NotAnInteger(arg.to_string()))
}

/// 実行時間引数を解決（未指定・不正値はデフォルト）
pub fn resolve_runtime(arg: Option<&str>) -> RuntimeSetting {
    match arg.map(parse_runtime) {
        None => RuntimeSetting {
            seconds: DEFAULT_RUNTIME_SECS,
            fallback: None,
        },
        Some(Ok(seconds)) => RuntimeSetting {
            seconds,
            fallback: None,
        },
        Some(Err(e)) => {
            log::warn!("{e}, falling back to {DEFAULT_RUNTIME_SECS} seconds");
            RuntimeSetting {
                seconds: DEFAULT_RUNTIME_SECS,
                fallback: Some(e),
            }
        }
    }
}
