//! 역탄젠트 적분 Ti2(x) = ∫₀ˣ arctan(t)/t dt

use crate::config::coefficients::ATANINT;
use crate::config::Constants;
use crate::utils::numeric::{estrin, ln, sign_magnitude};
use crate::utils::region::{select, Bound, Region};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Branch {
    Zero,
    Taylor,
    Rational,
    Exact(f64),
    Inverted,
    Asymptotic,
}

/// |x| 에 대한 영역 테이블
const REGIONS: [Region<Branch>; 6] = [
    Region::new(Bound::Exactly(0.0), Branch::Zero),
    Region::new(Bound::Below(Constants::TAYLOR_SWITCH), Branch::Taylor),
    Region::new(Bound::Below(1.0), Branch::Rational),
    Region::new(Bound::Exactly(1.0), Branch::Exact(Constants::CATALAN)),
    Region::new(Bound::Below(Constants::INV_TAYLOR_SWITCH), Branch::Inverted),
    Region::new(Bound::Below(f64::INFINITY), Branch::Asymptotic),
];

/// y - y³/9
const TAYLOR: [f64; 4] = [0.0, 1.0, 0.0, -0.111_111_111_111_111_1];

/// Ti2(x). 홀함수이며 `y > 1` 에서 `Ti2(y) = (π/2)·ln y + Ti2(1/y)` 를 쓴다.
pub fn atanint(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let (sign, y) = sign_magnitude(x);
    match select(&REGIONS, y) {
        Some(Branch::Zero) => x,
        Some(Branch::Taylor) => sign * estrin(y, &TAYLOR),
        Some(Branch::Rational) => sign * ATANINT.eval(y),
        Some(Branch::Exact(value)) => sign * value,
        Some(Branch::Inverted) => {
            sign * Constants::FRAC_PI_2.mul_add(ln(y), ATANINT.eval_reciprocal(y))
        }
        Some(Branch::Asymptotic) => {
            sign * Constants::FRAC_PI_2.mul_add(ln(y), estrin(1.0 / y, &TAYLOR))
        }
        None => f64::NAN,
    }
}
