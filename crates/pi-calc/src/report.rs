//! コンソール出力
//!
//! システム情報・開始バナー・進捗・最終結果の各ブロックを整形して書き出す。
//! 出力先は `Write` で受け取り、バイナリでは標準出力、テストではバッファを渡す。
//! 浮動小数点値は `{:?}` で最短表記（整数値は `3.0`、極小値は指数表記）にする。

use std::f64::consts::PI;
use std::io::{self, Write};

use chrono::NaiveDateTime;

use crate::series::{Progress, SeriesResult};
use crate::system::SystemSnapshot;
use crate::utils::{format_number, heavy_rule, light_rule};

/// 日時の表示形式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 日時を表示用に整形
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// システム情報ブロックを出力
pub fn write_system_info<W: Write>(out: &mut W, snapshot: &SystemSnapshot) -> io::Result<()> {
    writeln!(out, "\n{}", heavy_rule())?;
    writeln!(out, "Pi Calculator - System Information")?;
    writeln!(out, "{}", heavy_rule())?;
    for (label, value) in snapshot.lines() {
        writeln!(out, "{label}: {value}")?;
    }
    Ok(())
}

/// 実行時間引数が不正だった場合の警告
pub fn write_runtime_fallback<W: Write>(out: &mut W, default_secs: i64) -> io::Result<()> {
    writeln!(out, "Invalid runtime value. Using default: {default_secs} seconds")
}

/// 計算開始ヘッダを出力
pub fn write_run_header<W: Write>(
    out: &mut W,
    runtime_secs: i64,
    started_at: &NaiveDateTime,
) -> io::Result<()> {
    writeln!(out, "\n{}", heavy_rule())?;
    writeln!(out, "Starting Pi calculation for {runtime_secs} seconds...")?;
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out, "Start time: {}", format_timestamp(started_at))
}

/// 計算ループ直前のバナーを出力
pub fn write_calculation_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nStarting Pi calculation using Nilakantha series...")?;
    writeln!(out, "Known value of π: {PI:?}")?;
    writeln!(out, "{}", light_rule())
}

/// 進捗ブロックを出力
pub fn write_progress<W: Write>(out: &mut W, progress: &Progress) -> io::Result<()> {
    writeln!(out, "Time: {} seconds", progress.elapsed_secs)?;
    writeln!(out, "Iteration {}", format_number(progress.iterations))?;
    writeln!(out, "Current π approximation: {:?}", progress.approximation)?;
    writeln!(out, "Error: {:.15}", progress.error)?;
    writeln!(out, "Iterations per second: {:.2}", progress.iterations_per_second)?;
    writeln!(out, "{}", light_rule())
}

/// 最終結果ブロックを出力
pub fn write_results<W: Write>(
    out: &mut W,
    result: &SeriesResult,
    ended_at: &NaiveDateTime,
) -> io::Result<()> {
    writeln!(out, "\n{}", heavy_rule())?;
    writeln!(out, "Pi Calculation Results")?;
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out, "Final π approximation: {:?}", result.approximation)?;
    writeln!(out, "Known value of π:      {PI:?}")?;
    writeln!(out, "Absolute error:        {:?}", result.error())?;
    writeln!(out, "Total iterations:      {}", format_number(result.iterations))?;
    writeln!(out, "Total runtime:         {:.2} seconds", result.elapsed.as_secs_f64())?;
    writeln!(out, "Iterations per second: {:.2}", result.iterations_per_second())?;
    writeln!(out, "End time:              {}", format_timestamp(ended_at))?;
    writeln!(out, "{}", heavy_rule())
}
