//! 進捗報告の間引き
//!
//! 計算ループは毎反復ごとに [`ProgressThrottle::should_report`] を呼び、
//! `true` のときだけ進捗を出力する。最後に報告した秒はスロットル自身が持ち、
//! `run` ごとに新しく作られる。

/// デフォルトの報告間隔（秒）
pub const DEFAULT_REPORT_INTERVAL_SECS: u64 = 10;

/// Legacy ポリシーで要求する反復回数の刻み
const LEGACY_ITERATION_STEP: u64 = 1000;

/// 進捗報告のポリシー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPolicy {
    /// 指定秒数ごとに報告（反復回数には依存しない）
    Interval(u64),
    /// 旧来の出力互換: 経過秒が10の倍数かつ反復回数が1000の倍数のときのみ報告。
    /// ホストの速度によっては一度も発火しない。
    Legacy,
}

impl Default for ReportPolicy {
    fn default() -> Self {
        ReportPolicy::Interval(DEFAULT_REPORT_INTERVAL_SECS)
    }
}

/// 進捗報告の判定器
#[derive(Debug, Clone)]
pub struct ProgressThrottle {
    policy: ReportPolicy,
    last_reported_second: Option<u64>,
}

impl ProgressThrottle {
    pub fn new(policy: ReportPolicy) -> Self {
        Self {
            policy,
            last_reported_second: None,
        }
    }

    pub fn policy(&self) -> ReportPolicy {
        self.policy
    }

    /// 経過秒（切り捨て）と反復回数から、今報告すべきかを判定する。
    ///
    /// `true` を返した場合はその秒を報告済みとして記録する。
    pub fn should_report(&mut self, elapsed_secs: u64, iterations: u64) -> bool {
        if elapsed_secs == 0 || self.last_reported_second == Some(elapsed_secs) {
            return false;
        }

        let due = match self.policy {
            ReportPolicy::Interval(interval) => {
                let interval = interval.max(1);
                let next = self.last_reported_second.map_or(interval, |last| last + interval);
                elapsed_secs >= next
            }
            ReportPolicy::Legacy => {
                elapsed_secs.is_multiple_of(10)
                    && iterations.is_multiple_of(LEGACY_ITERATION_STEP)
            }
        };

        if due {
            self.last_reported_second = Some(elapsed_secs);
        }
        due
    }
}
