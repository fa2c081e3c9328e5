//! 파이썬 바인딩 (`python` 기능)

use crate::checked;
use crate::error::SpecialFnError;
use crate::functions::{self, FunctionKind};
use log::trace;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

impl From<SpecialFnError> for PyErr {
    fn from(err: SpecialFnError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[pyfunction]
fn arctan(x: f64) -> f64 {
    functions::arctan(x)
}

#[pyfunction]
fn atanint(x: f64) -> f64 {
    functions::atanint(x)
}

#[pyfunction]
fn dilog(x: f64) -> f64 {
    functions::dilog(x)
}

#[pyfunction]
fn svdilog(x: f64) -> f64 {
    functions::svdilog(x)
}

#[pyfunction]
fn trilog(x: f64) -> f64 {
    functions::trilog(x)
}

#[pyfunction]
fn log1p(x: f64) -> f64 {
    functions::log1p(x)
}

/// 이름으로 함수를 골라 평가한다. 정의역 밖이면 ValueError.
#[pyfunction]
fn evaluate(name: &str, x: f64) -> PyResult<f64> {
    let kind: FunctionKind = name.parse()?;
    trace!("python evaluate {kind}({x})");
    Ok(checked::evaluate(kind, x)?)
}

#[pymodule]
fn special_minimax(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(arctan, m)?)?;
    m.add_function(wrap_pyfunction!(atanint, m)?)?;
    m.add_function(wrap_pyfunction!(dilog, m)?)?;
    m.add_function(wrap_pyfunction!(svdilog, m)?)?;
    m.add_function(wrap_pyfunction!(trilog, m)?)?;
    m.add_function(wrap_pyfunction!(log1p, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate, m)?)?;
    m.add("ZETA2", crate::config::Constants::ZETA2)?;
    m.add("ZETA3", crate::config::Constants::ZETA3)?;
    m.add("CATALAN", crate::config::Constants::CATALAN)?;
    Ok(())
}
