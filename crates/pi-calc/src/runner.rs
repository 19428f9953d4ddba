//! 計算全体の実行
//!
//! システム情報の表示から最終結果の表示までを一続きで行う。バイナリは
//! 実ホストと標準出力を渡し、テストは固定のシステム情報とバッファを渡す。

use std::io::{self, Write};

use chrono::Local;

use crate::config::{RuntimeSetting, DEFAULT_RUNTIME_SECS};
use crate::progress::ReportPolicy;
use crate::report;
use crate::series::{NilakanthaCalculator, SeriesResult, StopLimits};
use crate::system::SystemInfoProvider;

/// 実行時間設定どおりに計算し、全ブロックを出力する
pub fn run_timed<W, P>(
    out: &mut W,
    provider: &P,
    setting: &RuntimeSetting,
) -> io::Result<SeriesResult>
where
    W: Write,
    P: SystemInfoProvider,
{
    run_with_limits(
        out,
        provider,
        setting,
        StopLimits::runtime(setting.duration()),
        ReportPolicy::default(),
    )
}

/// 停止条件と進捗ポリシーを指定して計算し、全ブロックを出力する
///
/// ヘッダには `setting` の秒数を表示し、ループは `limits` で止める。
pub fn run_with_limits<W, P>(
    out: &mut W,
    provider: &P,
    setting: &RuntimeSetting,
    limits: StopLimits,
    policy: ReportPolicy,
) -> io::Result<SeriesResult>
where
    W: Write,
    P: SystemInfoProvider,
{
    report::write_system_info(out, &provider.snapshot())?;

    if setting.fallback.is_some() {
        report::write_runtime_fallback(out, DEFAULT_RUNTIME_SECS)?;
    }

    let started_at = Local::now().naive_local();
    report::write_run_header(out, setting.seconds, &started_at)?;
    report::write_calculation_banner(out)?;
    out.flush()?;

    // 進捗出力の失敗で計算は止めない
    let calculator = NilakanthaCalculator::new(limits).with_policy(policy);
    let result = calculator.run(|progress| {
        if let Err(e) = report::write_progress(out, progress).and_then(|()| out.flush()) {
            log::warn!("Failed to write progress: {e}");
        }
    });

    let ended_at = Local::now().naive_local();
    report::write_results(out, &result, &ended_at)?;
    out.flush()?;

    Ok(result)
}
