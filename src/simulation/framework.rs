// src/simulation/framework.rs

use std::io::Write;

use log::{debug, trace, warn};

use crate::config::StepParameters;
use crate::math::{advance, ApproximationError, Equation, Method};
use crate::simulation::output::{write_header, write_point};
use crate::simulation::{State, Trace, TracePoint};

/// 初期状態の作成
pub fn initialize_state(params: &StepParameters) -> State {
    State {
        x: params.x_initial,
        y: params.y_initial,
    }
}

/// 1ステップの実行
///
/// # 引数
/// - `method`: 使用する積分手法
/// - `equation`: 微分方程式 F(x, y)
/// - `state`: 現在の状態
/// - `h`: 刻み幅
/// - `step`: 現在のステップ番号
///
/// # 戻り値
/// - 次の状態（x + h, y_next）。yの有限性は出力前に `run_method` で確認する
/// - xが進まない場合はエラー
pub fn execute_step<E: Equation + ?Sized>(
    method: Method,
    equation: &E,
    state: State,
    h: f64,
    step: usize,
) -> Result<State, ApproximationError> {
    let y = method.step(equation, state.x, state.y, h);
    let x = advance(state.x, h);

    if x <= state.x {
        return Err(ApproximationError::StalledStep {
            method,
            step,
            x: state.x,
        });
    }

    Ok(State { x, y })
}

/// 1つの手法で目標値まで近似を進める
///
/// ステップ前のxが `x - target < epsilon` を満たす間、その点を `emit` に渡してから
/// 次の状態へ進む。条件を満たさなくなった最初の点は出力せず、値も検査しない。
/// 出力しようとする点のyが非有限ならエラーで止まる。
///
/// # 戻り値
/// - 出力した点の数
pub fn run_method<E, S>(
    method: Method,
    equation: &E,
    params: &StepParameters,
    mut emit: S,
) -> Result<usize, ApproximationError>
where
    E: Equation + ?Sized,
    S: FnMut(TracePoint) -> Result<(), ApproximationError>,
{
    params.validate()?;
    debug!("{}: 近似を開始します (h = {})", method, params.step_size);

    let mut state = initialize_state(params);
    let mut step = 0;
    while state.x - params.target < params.epsilon {
        if !state.y.is_finite() {
            return Err(ApproximationError::NonFiniteValue {
                method,
                step,
                x: state.x,
                y: state.y,
            });
        }
        emit(TracePoint {
            step,
            x: state.x,
            y: state.y,
        })?;
        trace!("{}: {}: x = {}, y = {}", method, step, state.x, state.y);

        state = execute_step(method, equation, state, params.step_size, step)?;
        step += 1;
    }

    debug!(
        "{}: {} 点を出力して終了しました ({} 回の関数評価)",
        method,
        step,
        step * method.evaluations()
    );
    Ok(step)
}

/// 1つの手法の軌跡をまとめて取得する
pub fn approximate<E: Equation + ?Sized>(
    method: Method,
    equation: &E,
    params: &StepParameters,
) -> Result<Trace, ApproximationError> {
    let mut result = Trace::new(method);
    run_method(method, equation, params, |point| {
        result.points.push(point);
        Ok(())
    })?;
    Ok(result)
}

/// 3つの手法を順番に実行し、各軌跡を書き込む
///
/// 設定はどの出力よりも先に検証する。各手法の間には空行を入れる。
pub fn write_comparison<W, E>(
    writer: &mut W,
    equation: &E,
    params: &StepParameters,
) -> Result<Vec<Trace>, ApproximationError>
where
    W: Write,
    E: Equation + ?Sized,
{
    params.validate()?;
    if params.starts_past_target() {
        warn!(
            "初期x値 {} が目標値 {} を超えているため、点は出力されません",
            params.x_initial, params.target
        );
    }

    let mut traces = Vec::with_capacity(Method::ALL.len());
    for (i, method) in Method::ALL.into_iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        write_header(writer, method)?;

        let mut result = Trace::new(method);
        run_method(method, equation, params, |point| {
            write_point(&mut *writer, &point)?;
            result.points.push(point);
            Ok(())
        })?;
        traces.push(result);
    }

    Ok(traces)
}
