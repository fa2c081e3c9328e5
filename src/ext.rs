//! 부동소수 타입 확장 트레이트
//!
//! `f32`, `f64`, `half::f16` 등 모든 [`num::Float`] 타입에서
//! `x.dilog()` 처럼 호출할 수 있다. 내부 계산은 항상 f64 로 한다.

use crate::functions;
use num::{Float, NumCast};

pub trait SpecialFn: Sized {
    fn arctan(self) -> Self;
    fn atanint(self) -> Self;
    fn dilog(self) -> Self;
    fn svdilog(self) -> Self;
    fn trilog(self) -> Self;
    fn log1p(self) -> Self;
}

/// f64 로 넓혀 평가한 뒤 원래 타입으로 되돌린다. 변환에 실패하면 NaN.
#[inline]
fn widen<T: Float>(x: T, f: fn(f64) -> f64) -> T {
    x.to_f64()
        .and_then(|v| <T as NumCast>::from(f(v)))
        .unwrap_or_else(T::nan)
}

impl<T: Float> SpecialFn for T {
    fn arctan(self) -> Self {
        widen(self, functions::arctan)
    }

    fn atanint(self) -> Self {
        widen(self, functions::atanint)
    }

    fn dilog(self) -> Self {
        widen(self, functions::dilog)
    }

    fn svdilog(self) -> Self {
        widen(self, functions::svdilog)
    }

    fn trilog(self) -> Self {
        widen(self, functions::trilog)
    }

    fn log1p(self) -> Self {
        widen(self, functions::log1p)
    }
}
