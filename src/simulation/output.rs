// src/simulation/output.rs

use std::io::Write;

use crate::math::Method;
use crate::simulation::TracePoint;

/// 数値を表示するときの有効桁数
const SIGNIFICANT_DIGITS: usize = 6;

/// 数値を有効6桁の一般形式で文字列にする
///
/// 指数が -4 未満または有効桁数以上なら指数表記、それ以外は固定小数点で、
/// どちらも末尾の0を取り除く（例: `0`, `0.1`, `0.505`, `1e-07`, `1.5e+06`）。
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    // 丸めた後の指数で表記を決める
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_trailing_zeros(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_trailing_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// 1ステップ分の行 `<n>: x: <x>, y: <y>` を作成する
pub fn format_point(point: &TracePoint) -> String {
    format!(
        "{}: x: {}, y: {}",
        point.step,
        format_number(point.x),
        format_number(point.y)
    )
}

/// 手法の見出し行を書き込む
pub fn write_header<W: Write>(writer: &mut W, method: Method) -> Result<(), std::io::Error> {
    writeln!(writer, "{}", method.title())
}

/// 1ステップ分の行を書き込む
pub fn write_point<W: Write>(writer: &mut W, point: &TracePoint) -> Result<(), std::io::Error> {
    writeln!(writer, "{}", format_point(point))
}
