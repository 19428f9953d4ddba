//! ユーティリティ関数

/// 区切り線の幅
pub const RULE_WIDTH: usize = 50;

/// 数値を3桁区切りでフォーマット
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let bytes = s.as_bytes();
    let mut result = String::new();

    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(b as char);
    }

    result
}

/// 1秒あたりの反復回数
///
/// 経過時間が 0 の場合は 0.0 を返す。
pub fn per_second(count: u64, elapsed_secs: f64) -> f64 {
    if elapsed_secs > 0.0 {
        count as f64 / elapsed_secs
    } else {
        0.0
    }
}

/// `=` の区切り線
pub fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// `-` の区切り線
pub fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}
