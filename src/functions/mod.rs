//! 특수함수 구현 모듈

mod arctan;
mod atanint;
mod dilog;
mod log1p;
mod svdilog;
mod trilog;

pub use arctan::arctan;
pub use atanint::atanint;
pub use dilog::dilog;
pub use log1p::log1p;
pub use svdilog::svdilog;
pub use trilog::trilog;

use crate::error::SpecialFnError;
use std::fmt;
use std::str::FromStr;

/// 지원하는 특수함수 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// arctan(x)
    Arctan,
    /// 역탄젠트 적분 Ti2(x)
    Atanint,
    /// 다이로그 Li2(x)
    Dilog,
    /// 분기 절단 없는 실수 다이로그
    Svdilog,
    /// 트라이로그 Li3(x)
    Trilog,
    /// ln(1+x)
    Log1p,
}

impl FunctionKind {
    pub const ALL: [FunctionKind; 6] = [
        FunctionKind::Arctan,
        FunctionKind::Atanint,
        FunctionKind::Dilog,
        FunctionKind::Svdilog,
        FunctionKind::Trilog,
        FunctionKind::Log1p,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FunctionKind::Arctan => "arctan",
            FunctionKind::Atanint => "atanint",
            FunctionKind::Dilog => "dilog",
            FunctionKind::Svdilog => "svdilog",
            FunctionKind::Trilog => "trilog",
            FunctionKind::Log1p => "log1p",
        }
    }

    /// 유한한 모든 실수에서 유한한 값을 갖는지
    pub fn is_total(self) -> bool {
        matches!(
            self,
            FunctionKind::Arctan | FunctionKind::Atanint | FunctionKind::Svdilog
        )
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FunctionKind {
    type Err = SpecialFnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arctan" | "atan" => Ok(FunctionKind::Arctan),
            "atanint" | "ti2" => Ok(FunctionKind::Atanint),
            "dilog" | "li2" => Ok(FunctionKind::Dilog),
            "svdilog" => Ok(FunctionKind::Svdilog),
            "trilog" | "li3" => Ok(FunctionKind::Trilog),
            "log1p" => Ok(FunctionKind::Log1p),
            _ => Err(SpecialFnError::UnknownFunction(s.to_string())),
        }
    }
}

/// 특수함수의 공통 트레이트
pub trait SpecialFunction: Send + Sync {
    /// 함수 종류
    fn kind(&self) -> FunctionKind;

    /// f(x) 평가
    fn eval(&self, x: f64) -> f64;
}

macro_rules! special_function {
    ($(#[$meta:meta])* $name:ident, $kind:ident, $func:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl SpecialFunction for $name {
            fn kind(&self) -> FunctionKind {
                FunctionKind::$kind
            }

            fn eval(&self, x: f64) -> f64 {
                $func(x)
            }
        }
    };
}

special_function!(
    /// arctan 구현체
    Arctan, Arctan, arctan
);
special_function!(
    /// Ti2 구현체
    Atanint, Atanint, atanint
);
special_function!(
    /// Li2 구현체
    Dilog, Dilog, dilog
);
special_function!(
    /// 실수 다이로그 구현체
    Svdilog, Svdilog, svdilog
);
special_function!(
    /// Li3 구현체
    Trilog, Trilog, trilog
);
special_function!(
    /// ln(1+x) 구현체
    Log1p, Log1p, log1p
);

/// 특수함수 인스턴스 생성 팩토리 함수
pub fn create_function(kind: FunctionKind) -> Box<dyn SpecialFunction> {
    match kind {
        FunctionKind::Arctan => Box::new(Arctan),
        FunctionKind::Atanint => Box::new(Atanint),
        FunctionKind::Dilog => Box::new(Dilog),
        FunctionKind::Svdilog => Box::new(Svdilog),
        FunctionKind::Trilog => Box::new(Trilog),
        FunctionKind::Log1p => Box::new(Log1p),
    }
}

/// 종류별 디스패치
pub fn evaluate(kind: FunctionKind, x: f64) -> f64 {
    match kind {
        FunctionKind::Arctan => arctan(x),
        FunctionKind::Atanint => atanint(x),
        FunctionKind::Dilog => dilog(x),
        FunctionKind::Svdilog => svdilog(x),
        FunctionKind::Trilog => trilog(x),
        FunctionKind::Log1p => log1p(x),
    }
}
