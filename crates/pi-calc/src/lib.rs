//! Nilakantha 級数による π 計算ベンチマーク
//!
//! 指定した反復回数または実行時間だけ級数を計算し、途中経過と最終結果を
//! ホストのシステム情報とともに出力します。
//!
//! 進捗報告はデフォルトで10秒ごと（[`ReportPolicy::Interval`]）です。
//! 旧来の出力と揃える必要がある場合は、ライブラリから
//! [`ReportPolicy::Legacy`] を [`NilakanthaCalculator::with_policy`] または
//! [`runner::run_with_limits`] に渡します。`pi_calc` バイナリはこのポリシーを
//! 選択しません。

pub mod config;
pub mod progress;
pub mod report;
pub mod runner;
pub mod series;
pub mod system;
pub mod utils;

pub use config::{resolve_runtime, RuntimeArgError, RuntimeSetting, DEFAULT_RUNTIME_SECS};
pub use progress::{ProgressThrottle, ReportPolicy};
pub use series::{
    calculate_pi, NilakanthaCalculator, Progress, SeriesResult, SeriesState, StopLimits,
};
pub use system::{HostSystemInfo, SystemInfoProvider, SystemSnapshot};
