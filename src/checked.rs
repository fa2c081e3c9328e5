//! 오류를 `Result` 로 돌려주는 평가 함수들
//!
//! 수치 계산은 [`crate::functions`] 와 동일하다. NaN 과 ±∞ 결과를
//! [`SpecialFnError`] 로 분류할 뿐이다.

use crate::error::{Result, SpecialFnError};
use crate::functions::{self, FunctionKind};
use log::debug;

/// 종류별 평가. 유한한 결과만 `Ok` 로 돌려준다.
pub fn evaluate(function: FunctionKind, x: f64) -> Result<f64> {
    if !x.is_finite() {
        debug!("{function}: rejecting non-finite argument {x}");
        return Err(SpecialFnError::NonFinite { function, x });
    }
    let value = functions::evaluate(function, x);
    if value.is_nan() {
        debug!("{function}: argument {x} is outside the principal domain");
        Err(SpecialFnError::OutsideDomain { function, x })
    } else if value.is_infinite() {
        debug!("{function}: argument {x} hits a pole");
        Err(SpecialFnError::Pole { function, x })
    } else {
        Ok(value)
    }
}

pub fn arctan(x: f64) -> Result<f64> {
    evaluate(FunctionKind::Arctan, x)
}

pub fn atanint(x: f64) -> Result<f64> {
    evaluate(FunctionKind::Atanint, x)
}

pub fn dilog(x: f64) -> Result<f64> {
    evaluate(FunctionKind::Dilog, x)
}

pub fn svdilog(x: f64) -> Result<f64> {
    evaluate(FunctionKind::Svdilog, x)
}

pub fn trilog(x: f64) -> Result<f64> {
    evaluate(FunctionKind::Trilog, x)
}

pub fn log1p(x: f64) -> Result<f64> {
    evaluate(FunctionKind::Log1p, x)
}
