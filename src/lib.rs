//! special_minimax: 배정밀도 특수함수 라이브러리
//!
//! ln(1+x), arctan, 역탄젠트 적분 Ti2, 다이로그 Li2, 트라이로그 Li3, 분기 절단 없는
//! 실수 다이로그를 실수 전체에서 약 1e-16 상대오차로 계산한다.
//!
//! 모든 함수는 같은 구조를 따른다. 입력이 속한 영역을 고르고, 반사나 역수 같은
//! 항등식으로 인자를 유계 구간에 옮긴 뒤, 미리 구한 미니맥스 유리근사를
//! Estrin 방식과 FMA 로 평가하고, 영역별 보정항을 더한다.
//! 상태가 없으므로 여러 스레드에서 동시에 호출해도 된다.

pub mod checked;
pub mod config;
pub mod error;
pub mod ext;
pub mod functions;
pub mod utils;

#[cfg(feature = "python")]
pub mod python;

pub use config::Constants;
pub use error::{Result, SpecialFnError};
pub use ext::SpecialFn;
pub use functions::{
    arctan, atanint, create_function, dilog, evaluate, log1p, svdilog, trilog, FunctionKind,
    SpecialFunction,
};

/// 자주 사용되는 핵심 기능들을 쉽게 가져올 수 있는 prelude 모듈
pub mod prelude {
    pub use crate::{
        arctan, atanint, create_function, dilog, evaluate, log1p, svdilog, trilog, Constants,
        FunctionKind, SpecialFn, SpecialFnError, SpecialFunction,
    };
}
