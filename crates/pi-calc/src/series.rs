//! Nilakantha 級数による π の近似計算
//!
//! π = 3 + 4/(2·3·4) − 4/(4·5·6) + 4/(6·7·8) − …
//!
//! 反復回数上限と実行時間上限のいずれか（または両方）で停止する単一スレッドの
//! ループ。進捗はコールバックで呼び出し側に渡し、出力形式は [`crate::report`] が
//! 担当する。

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use crate::progress::{ProgressThrottle, ReportPolicy};
use crate::utils::per_second;

/// 停止条件
///
/// 両方 `None` の場合は無制限に計算を続ける。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StopLimits {
    /// 反復回数の上限
    pub max_iterations: Option<u64>,
    /// 実行時間の上限
    pub max_runtime: Option<Duration>,
}

impl StopLimits {
    /// 反復回数のみで停止
    pub fn iterations(n: u64) -> Self {
        Self {
            max_iterations: Some(n),
            max_runtime: None,
        }
    }

    /// 実行時間のみで停止
    pub fn runtime(limit: Duration) -> Self {
        Self {
            max_iterations: None,
            max_runtime: Some(limit),
        }
    }
}

/// 計算途中の状態
#[derive(Debug, Clone)]
pub struct SeriesState {
    /// 現在の近似値
    pub approximation: f64,
    /// 次の項の符号（+1.0 / -1.0）
    pub sign: f64,
    /// 次の項の分母の基数（2, 4, 6, …）
    pub base: u64,
    /// 完了した反復回数
    pub iterations: u64,
    started: Instant,
}

impl SeriesState {
    pub fn new() -> Self {
        Self {
            approximation: 3.0,
            sign: 1.0,
            base: 2,
            iterations: 0,
            started: Instant::now(),
        }
    }

    /// 1項分進める
    pub fn step(&mut self) {
        self.approximation += self.sign * term_for_base(self.base);
        self.sign = -self.sign;
        self.base += 2;
        self.iterations += 1;
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn into_result(self) -> SeriesResult {
        SeriesResult {
            approximation: self.approximation,
            iterations: self.iterations,
            elapsed: self.started.elapsed(),
        }
    }
}

impl Default for SeriesState {
    fn default() -> Self {
        Self::new()
    }
}

/// 計算結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesResult {
    pub approximation: f64,
    pub iterations: u64,
    pub elapsed: Duration,
}

impl SeriesResult {
    /// `std::f64::consts::PI` との絶対誤差
    pub fn error(&self) -> f64 {
        (self.approximation - PI).abs()
    }

    pub fn iterations_per_second(&self) -> f64 {
        per_second(self.iterations, self.elapsed.as_secs_f64())
    }
}

/// 進捗コールバックに渡す情報
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// 経過秒（切り捨て）
    pub elapsed_secs: u64,
    pub elapsed: Duration,
    pub iterations: u64,
    pub approximation: f64,
    /// `std::f64::consts::PI` との絶対誤差
    pub error: f64,
    pub iterations_per_second: f64,
}

/// Nilakantha 級数の計算器
#[derive(Debug, Clone)]
pub struct NilakanthaCalculator {
    limits: StopLimits,
    policy: ReportPolicy,
}

impl NilakanthaCalculator {
    pub fn new(limits: StopLimits) -> Self {
        Self {
            limits,
            policy: ReportPolicy::default(),
        }
    }

    /// 進捗報告のポリシーを指定
    pub fn with_policy(mut self, policy: ReportPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 停止条件に達するまで計算し、結果を返す。
    ///
    /// `on_progress` はポリシーが許可したときだけ呼ばれる。報告済みの秒は
    /// 呼び出しごとに新しく作られるスロットルが保持する。
    pub fn run<F>(&self, mut on_progress: F) -> SeriesResult
    where
        F: FnMut(&Progress),
    {
        let mut throttle = ProgressThrottle::new(self.policy);
        let mut state = SeriesState::new();

        log::debug!("nilakantha run started: limits={:?}, policy={:?}", self.limits, self.policy);

        loop {
            if self.limits.max_iterations.is_some_and(|max| state.iterations >= max) {
                break;
            }
            if self.limits.max_runtime.is_some_and(|max| state.elapsed() >= max) {
                break;
            }

            state.step();

            let elapsed = state.elapsed();
            let elapsed_secs = elapsed.as_secs();
            if throttle.should_report(elapsed_secs, state.iterations) {
                on_progress(&Progress {
                    elapsed_secs,
                    elapsed,
                    iterations: state.iterations,
                    approximation: state.approximation,
                    error: (state.approximation - PI).abs(),
                    iterations_per_second: per_second(state.iterations, elapsed.as_secs_f64()),
                });
            }
        }

        let result = state.into_result();
        log::debug!(
            "nilakantha run finished: iterations={}, elapsed={:?}",
            result.iterations,
            result.elapsed
        );
        result
    }
}

/// 進捗報告なしで計算する
pub fn calculate_pi(limits: StopLimits) -> SeriesResult {
    NilakanthaCalculator::new(limits).run(|_| {})
}

/// k 番目（1始まり）の符号付きの項
///
/// `k == 0` は項を持たないため 0.0 を返す。
pub fn nilakantha_term(k: u64) -> f64 {
    if k == 0 {
        return 0.0;
    }
    let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
    sign * term_for_base(k.saturating_mul(2))
}

/// 4 / (d·(d+1)·(d+2))
///
/// 分母は `f64` で計算する。整数積は d が 7e12 付近で `u128` でも溢れる。
fn term_for_base(base: u64) -> f64 {
    let d = base as f64;
    4.0 / (d * (d + 1.0) * (d + 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 級数の部分和を直接計算する
    fn reference_sum(n: u64) -> f64 {
        let mut sum = 3.0;
        for k in 1..=n {
            let d = (2 * k) as f64;
            let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
            sum += sign * 4.0 / (d * (d + 1.0) * (d + 2.0));
        }
        sum
    }

    #[test]
    fn test_iteration_count_is_exact() {
        for n in [0, 1, 2, 7, 100, 12_345] {
            let result = calculate_pi(StopLimits::iterations(n));
            assert_eq!(result.iterations, n);
        }
    }

    #[test]
    fn test_matches_reference_sum() {
        for n in [0, 1, 10, 1000] {
            let result = calculate_pi(StopLimits::iterations(n));
            let expected = reference_sum(n);
            assert!(
                (result.approximation - expected).abs() < 1e-12,
                "n={n}: got {}, expected {expected}",
                result.approximation
            );
        }
    }

    #[test]
    fn test_error_decreases() {
        let e1 = calculate_pi(StopLimits::iterations(1)).error();
        let e10 = calculate_pi(StopLimits::iterations(10)).error();
        let e1000 = calculate_pi(StopLimits::iterations(1000)).error();
        assert!(e1000 < e10);
        assert!(e10 < e1);
    }

    #[test]
    fn test_zero_runtime_does_nothing() {
        let result = calculate_pi(StopLimits::runtime(Duration::ZERO));
        assert_eq!(result.iterations, 0);
        assert_eq!(result.approximation, 3.0);
    }

    #[test]
    fn test_first_terms() {
        let one = calculate_pi(StopLimits::iterations(1));
        assert_eq!(one.iterations, 1);
        assert_eq!(one.approximation, 3.1666666666666665);

        let two = calculate_pi(StopLimits::iterations(2));
        assert_eq!(two.iterations, 2);
        assert!((two.approximation - 3.1333333333333333).abs() < 1e-15);
    }

    #[test]
    fn test_state_invariants() {
        let mut state = SeriesState::new();
        assert_eq!(state.sign, 1.0);
        for i in 1..=5u64 {
            let base = state.base;
            let sign = state.sign;
            state.step();
            assert_eq!(state.iterations, i);
            assert_eq!(state.base, base + 2);
            assert_eq!(state.sign, -sign);
        }
    }

    #[test]
    fn test_step_with_huge_base() {
        // 整数積が u128 を超える領域でも項は有限・正で、符号どおりに加算される
        let mut state = SeriesState::new();
        state.base = 7_000_000_000_000;
        state.iterations = 3_499_999_999_999;
        state.approximation = PI;
        state.step();

        let d = 7.0e12_f64;
        let term = 4.0 / (d * (d + 1.0) * (d + 2.0));
        assert!(term > 0.0 && term.is_finite());
        assert_eq!(state.approximation, PI + term);
        assert_eq!(state.base, 7_000_000_000_002);
        assert_eq!(state.iterations, 3_500_000_000_000);
    }

    #[test]
    fn test_nilakantha_term() {
        assert_eq!(nilakantha_term(0), 0.0);
        assert_eq!(nilakantha_term(1), 4.0 / 24.0);
        assert_eq!(nilakantha_term(2), -4.0 / 120.0);
        assert_eq!(nilakantha_term(3), 4.0 / 336.0);
        let sum: f64 = 3.0 + (1..=10).map(nilakantha_term).sum::<f64>();
        assert!((sum - reference_sum(10)).abs() < 1e-12);
    }

    #[test]
    fn test_iteration_limit_wins_over_runtime() {
        let limits = StopLimits {
            max_iterations: Some(50),
            max_runtime: Some(Duration::from_secs(3600)),
        };
        assert_eq!(calculate_pi(limits).iterations, 50);
    }

    #[test]
    fn test_short_runtime_stops() {
        let result = calculate_pi(StopLimits::runtime(Duration::from_millis(20)));
        assert!(result.elapsed >= Duration::from_millis(20));
        assert!(result.iterations > 0);
    }

    #[test]
    fn test_no_progress_within_first_second() {
        let mut reports = 0;
        let calculator = NilakanthaCalculator::new(StopLimits::iterations(10_000))
            .with_policy(ReportPolicy::Interval(10));
        calculator.run(|_| reports += 1);
        assert_eq!(reports, 0);
    }

    #[test]
    fn test_progress_reported_each_second() {
        let mut seen = Vec::new();
        let calculator =
            NilakanthaCalculator::new(StopLimits::runtime(Duration::from_millis(2100)))
                .with_policy(ReportPolicy::Interval(1));
        let result = calculator.run(|p| seen.push(*p));

        let seconds: Vec<u64> = seen.iter().map(|p| p.elapsed_secs).collect();
        assert_eq!(seconds, vec![1, 2]);
        for p in &seen {
            assert!(p.iterations <= result.iterations);
            assert!(p.iterations_per_second > 0.0);
            assert_eq!(p.error, (p.approximation - PI).abs());
        }
    }

    #[test]
    fn test_result_rates() {
        let result = SeriesResult {
            approximation: 3.0,
            iterations: 500,
            elapsed: Duration::from_millis(250),
        };
        assert_eq!(result.iterations_per_second(), 2000.0);
        assert_eq!(result.error(), PI - 3.0);

        let instant = SeriesResult {
            elapsed: Duration::ZERO,
            ..result
        };
        assert_eq!(instant.iterations_per_second(), 0.0);
    }
}
