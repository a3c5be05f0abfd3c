// src/main.rs

use std::error::Error;
use std::io::{self, BufWriter, Write};

use log::{error, info};

use numapprox::simulation::framework::write_comparison;
use numapprox::simulation::load_parameters::load_default_scenario;
use numapprox::simulation::output::format_number;

fn main() -> Result<(), Box<dyn Error>> {
    initialize_logging()?;

    if let Err(err) = run() {
        error!("近似に失敗しました: {}", err);
        return Err(err);
    }

    Ok(())
}

/// シナリオを読み込み、3つの手法の軌跡を標準出力へ書き込む
fn run() -> Result<(), Box<dyn Error>> {
    // シナリオの読み込み（ビルド時に埋め込んだ設定）
    let scenario = load_default_scenario()?;
    let params = scenario.parameters;
    info!(
        "{}: x0 = {}, y0 = {}, h = {}, 目標値 = {}",
        scenario.equation, params.x_initial, params.y_initial, params.step_size, params.target
    );

    // 標準出力には軌跡のみを書き込む
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let traces = write_comparison(&mut writer, &scenario.equation, &params)?;
    writer.flush()?;

    // 解析解との比較
    for trace in &traces {
        if let Some(last) = trace.last() {
            let exact = scenario
                .equation
                .exact_solution(params.x_initial, params.y_initial, last.x);
            info!(
                "{}: x = {} で y = {}（解析解 {}、誤差 {:e}）",
                trace.method,
                format_number(last.x),
                format_number(last.y),
                format_number(exact),
                (last.y - exact).abs()
            );
        }
    }

    Ok(())
}

/// ログの初期化
///
/// 出力レベルは環境変数 `RUST_LOG` から読み込み、既定は WARN。
/// 標準出力は軌跡の出力に使うため、ログは標準エラーに出す。
fn initialize_logging() -> Result<(), Box<dyn Error>> {
    let mut unknown_log_filter_level = None;
    let log_filter_level = match std::env::var_os("RUST_LOG") {
        Some(log_level) => {
            let log_level = log_level.to_string_lossy().to_ascii_lowercase();
            match log_level.as_str() {
                "off" => log::LevelFilter::Off,
                "error" => log::LevelFilter::Error,
                "warn" => log::LevelFilter::Warn,
                "info" => log::LevelFilter::Info,
                "debug" => log::LevelFilter::Debug,
                "trace" => log::LevelFilter::Trace,
                _ => {
                    unknown_log_filter_level = Some(log_level);
                    log::LevelFilter::Warn
                }
            }
        }
        None => log::LevelFilter::Warn,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log_filter_level)
        .chain(io::stderr())
        .apply()
        .map_err(|e| format!("ログの設定に失敗しました ({:?})", e))?;

    if let Some(filter_level) = unknown_log_filter_level {
        error!(
            "環境変数 RUST_LOG のレベル '{}' は不明なため、WARN を使用します",
            filter_level
        );
    }

    Ok(())
}
