//! 오류 타입 정의
//!
//! 기본 함수들은 IEEE-754 값(NaN, ±∞)으로만 실패를 표현한다. [`crate::checked`]
//! 계층은 같은 결과를 이 오류 타입으로 바꿔 돌려준다.

use crate::functions::FunctionKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecialFnError {
    /// NaN 또는 ±∞ 입력
    #[error("{function}: 유한하지 않은 인자 {x}")]
    NonFinite { function: FunctionKind, x: f64 },

    /// 주가지 정의역 밖 (분기 절단)
    #[error("{function}: 인자 {x} 가 정의역 밖(분기 절단)에 있음")]
    OutsideDomain { function: FunctionKind, x: f64 },

    /// 극점
    #[error("{function}: 인자 {x} 는 극점")]
    Pole { function: FunctionKind, x: f64 },

    #[error("알 수 없는 함수 이름 `{0}`")]
    UnknownFunction(String),
}

pub type Result<T> = std::result::Result<T, SpecialFnError>;
