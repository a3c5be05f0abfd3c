// src/simulation/mod.rs

pub mod framework;
pub mod load_parameters;
pub mod output;

use crate::math::Method;

/// 近似の現在の状態 (x, y)
///
/// ステップごとに新しい値で置き換え、ステップ内では変更しない。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub x: f64,
    pub y: f64,
}

/// 出力する1行分の記録 (n, x, y)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    pub step: usize,
    pub x: f64,
    pub y: f64,
}

/// 1つの手法で得られた軌跡
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub method: Method,
    pub points: Vec<TracePoint>,
}

impl Trace {
    pub fn new(method: Method) -> Self {
        Trace {
            method,
            points: Vec::new(),
        }
    }

    pub fn last(&self) -> Option<&TracePoint> {
        self.points.last()
    }
}
