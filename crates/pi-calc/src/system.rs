//! システム情報収集
//!
//! 計算を実行したホストの静的な情報を集め、ラベル付きの行として出力する。
//! 実ホストへの問い合わせは [`SystemInfoProvider`] の背後に置き、テストでは
//! 固定値を返す実装に差し替える。

use sysinfo::System;

const UNKNOWN: &str = "Unknown";

/// ビルド時に `build.rs` が埋め込んだ rustc のバージョン
pub const RUSTC_VERSION: &str = env!("PI_CALC_RUSTC_VERSION");

const BYTES_PER_GIB: f64 = (1u64 << 30) as f64;

/// システム情報のスナップショット
///
/// 起動時に一度だけ収集し、以後は読み取り専用。
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSnapshot {
    /// OS 名（例: `Linux`, `Darwin`, `Windows`）
    pub platform: String,
    /// カーネル / OS リリース
    pub release: String,
    /// OS バージョン文字列
    pub version: String,
    /// CPU アーキテクチャ（例: `x86_64`, `aarch64`）
    pub arch: String,
    /// CPU モデル名
    pub processor: String,
    /// ホスト名
    pub hostname: String,
    /// 実行環境（rustc）のバージョン
    pub runtime_version: String,
    /// 論理コア数
    pub logical_cpus: usize,
    /// 物理コア数（取得できない環境では `None`）
    pub physical_cpus: Option<usize>,
    /// 搭載メモリ（GiB、小数点以下2桁に丸め）
    pub memory_gib: f64,
}

impl SystemSnapshot {
    /// 表示用のラベル付き行を固定順で返す
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Platform", self.platform.clone()),
            ("Platform Release", self.release.clone()),
            ("Platform Version", self.version.clone()),
            ("Architecture", self.arch.clone()),
            ("Processor", self.processor.clone()),
            ("Hostname", self.hostname.clone()),
            ("Rust Version", self.runtime_version.clone()),
            ("CPU Count", self.logical_cpus.to_string()),
            (
                "Physical CPU Count",
                self.physical_cpus.map(|n| n.to_string()).unwrap_or_else(|| UNKNOWN.to_string()),
            ),
            ("Memory (GB)", format_gib(self.memory_gib)),
        ]
    }
}

/// システム情報の取得元
pub trait SystemInfoProvider {
    fn snapshot(&self) -> SystemSnapshot;
}

/// `sysinfo` で実ホストから情報を取得するプロバイダ
#[derive(Debug, Default, Clone, Copy)]
pub struct HostSystemInfo;

impl SystemInfoProvider for HostSystemInfo {
    fn snapshot(&self) -> SystemSnapshot {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();

        let processor = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string());

        let snapshot = SystemSnapshot {
            platform: System::name().unwrap_or_else(|| UNKNOWN.to_string()),
            release: System::kernel_version().unwrap_or_else(|| UNKNOWN.to_string()),
            version: System::long_os_version()
                .or_else(System::os_version)
                .unwrap_or_else(|| UNKNOWN.to_string()),
            arch: std::env::consts::ARCH.to_string(),
            processor,
            hostname: System::host_name().unwrap_or_else(|| UNKNOWN.to_string()),
            runtime_version: RUSTC_VERSION.to_string(),
            logical_cpus: sys.cpus().len(),
            physical_cpus: System::physical_core_count(),
            memory_gib: bytes_to_gib(sys.total_memory()),
        };

        log::debug!("collected system snapshot: {snapshot:?}");
        snapshot
    }
}

/// バイト数を GiB に変換（小数点以下2桁に丸め）
pub fn bytes_to_gib(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_GIB * 100.0).round() / 100.0
}

/// GiB 値を表示用に整形
///
/// 丸め済みの値を最短表記で出す。整数値のみ `16.0` のように小数1桁を付ける。
fn format_gib(gib: f64) -> String {
    if gib.fract() == 0.0 {
        format!("{gib:.1}")
    } else {
        format!("{gib}")
    }
}
