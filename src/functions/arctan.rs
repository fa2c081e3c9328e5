//! 아크탄젠트 arctan(x)
//!
//! 홀함수이므로 |x| 에 대해 평가하고 부호를 되돌린다. `1 < |x|` 에서는
//! `arctan(y) = π/2 - arctan(1/y)` 를 같은 계수 테이블의 역순 평가로 계산한다.

use crate::config::coefficients::ARCTAN;
use crate::config::Constants;
use crate::utils::numeric::{estrin, sign_magnitude};
use crate::utils::region::{select, Bound, Region};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Branch {
    Zero,
    Taylor,
    Rational,
    Exact(f64),
    Reflected,
    Asymptotic,
}

/// |x| 에 대한 영역 테이블
const REGIONS: [Region<Branch>; 6] = [
    Region::new(Bound::Exactly(0.0), Branch::Zero),
    Region::new(Bound::Below(Constants::ARCTAN_TAYLOR_SWITCH), Branch::Taylor),
    Region::new(Bound::Below(1.0), Branch::Rational),
    Region::new(Bound::Exactly(1.0), Branch::Exact(Constants::FRAC_PI_4)),
    Region::new(Bound::Below(Constants::ARCTAN_INV_TAYLOR_SWITCH), Branch::Reflected),
    Region::new(Bound::Below(f64::INFINITY), Branch::Asymptotic),
];

/// y - y³/3 + y⁵/5 - y⁷/7
const TAYLOR: [f64; 8] = [
    0.0,
    1.0,
    0.0,
    -0.333_333_333_333_333_3,
    0.0,
    0.2,
    0.0,
    -0.142_857_142_857_142_85,
];

#[inline]
fn taylor(y: f64) -> f64 {
    estrin(y, &TAYLOR)
}

/// arctan(x). 유한하지 않은 입력은 NaN.
pub fn arctan(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let (sign, y) = sign_magnitude(x);
    match select(&REGIONS, y) {
        Some(Branch::Zero) => x,
        Some(Branch::Taylor) => sign * taylor(y),
        Some(Branch::Rational) => sign * ARCTAN.eval(y),
        Some(Branch::Exact(value)) => sign * value,
        Some(Branch::Reflected) => sign * (Constants::FRAC_PI_2 - ARCTAN.eval_reciprocal(y)),
        Some(Branch::Asymptotic) => sign * (Constants::FRAC_PI_2 - taylor(1.0 / y)),
        None => f64::NAN,
    }
}
