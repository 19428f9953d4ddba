//! Nilakantha 級数 π 計算ツール
//!
//! 指定秒数だけ π を計算し、システム情報・途中経過・最終結果を標準出力に表示します。

use std::io;

use anyhow::Result;
use clap::Parser;

use pi_calc::runner::run_timed;
use pi_calc::{resolve_runtime, HostSystemInfo};

/// Nilakantha 級数による π 計算ベンチマーク
#[derive(Parser, Debug)]
#[command(
    name = "pi_calc",
    version,
    about = "Approximate pi with the Nilakantha series for a fixed duration",
    long_about = None
)]
struct Cli {
    /// 実行時間（秒）。整数として解釈できない場合はデフォルトの180秒
    #[arg(value_name = "RUNTIME", allow_hyphen_values = true)]
    runtime: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let setting = resolve_runtime(cli.runtime.as_deref());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_timed(&mut out, &HostSystemInfo, &setting)?;

    Ok(())
}
