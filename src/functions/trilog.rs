//! 트라이로그 Li3(x) (실수 주가지)
//!
//! 다이로그와 같은 영역 구성을 따르되 보정항이 3차 로그다.
//! - `x < -1`: `Li3(x) = Li3(1/x) - ζ(2)·ln(-x) - ln³(-x)/6`
//! - `1/2 < x < 1`: y = 1 - x 에서 `Li3(x) = ζ(3) + ζ(2)·ln x - ln²x·ln y/2 + ln³x/6 + R(y)`,
//!   R 은 전용 반사 커널

use crate::config::coefficients::{
    LOG_ONE_MINUS, TRILOG_NEGATIVE, TRILOG_POSITIVE, TRILOG_REFLECTION,
};
use crate::config::Constants;
use crate::utils::numeric::{estrin, ln};
use crate::utils::region::{select, Bound, Region};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Branch {
    InvertedTaylor,
    InvertedRational,
    Exact(f64),
    NegativeRational,
    Zero,
    Taylor,
    PositiveRational,
    Reflected,
    NearOne,
    BranchCut,
}

const REGIONS: [Region<Branch>; 12] = [
    Region::new(Bound::Below(-Constants::INV_TAYLOR_SWITCH), Branch::InvertedTaylor),
    Region::new(Bound::Below(-1.0), Branch::InvertedRational),
    Region::new(Bound::Exactly(-1.0), Branch::Exact(Constants::TRILOG_MINUS_ONE)),
    Region::new(Bound::Below(-Constants::TAYLOR_SWITCH), Branch::NegativeRational),
    Region::new(Bound::Exactly(0.0), Branch::Zero),
    Region::new(Bound::Below(Constants::TAYLOR_SWITCH), Branch::Taylor),
    Region::new(Bound::Below(Constants::HALF), Branch::PositiveRational),
    Region::new(Bound::Exactly(Constants::HALF), Branch::Exact(Constants::TRILOG_HALF)),
    Region::new(Bound::Below(Constants::ONE_MINUS_TAYLOR_SWITCH), Branch::Reflected),
    Region::new(Bound::Below(1.0), Branch::NearOne),
    Region::new(Bound::Exactly(1.0), Branch::Exact(Constants::ZETA3)),
    Region::new(Bound::Below(f64::INFINITY), Branch::BranchCut),
];

/// Li3(y) = y + y²/8 + y³/27 + y⁴/64 + ...
const TAYLOR: [f64; 5] = [0.0, 1.0, 0.125, 0.037_037_037_037_037_035, 0.015_625];

/// y = 1 - x 에 대한 Li3(x) 의 비로그 부분:
/// ζ(3) - ζ(2)·y + (3/4 - ζ(2)/2)·y² + (7/12 - ζ(2)/3)·y³ + (131/288 - ζ(2)/4)·y⁴
const NEAR_ONE_SERIES: [f64; 5] = [
    Constants::ZETA3,
    -Constants::ZETA2,
    -0.072_467_033_424_113_22,
    0.035_021_977_717_257_85,
    0.043_627_594_399_054_5,
];

/// ln y 의 계수: -y²/2 - y³/2 - 11·y⁴/24
const NEAR_ONE_LOG_SERIES: [f64; 5] = [0.0, 0.0, -0.5, -0.5, -0.458_333_333_333_333_3];

/// Li3(x). `x > 1` 과 유한하지 않은 입력은 NaN.
pub fn trilog(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    match select(&REGIONS, x) {
        Some(Branch::InvertedTaylor) => estrin(1.0 / x, &TAYLOR) + inversion_shift(x),
        Some(Branch::InvertedRational) => {
            TRILOG_NEGATIVE.eval_reciprocal(x) + inversion_shift(x)
        }
        Some(Branch::Exact(value)) => value,
        Some(Branch::NegativeRational) => TRILOG_NEGATIVE.eval(x),
        Some(Branch::Zero) => x,
        Some(Branch::Taylor) => estrin(x, &TAYLOR),
        Some(Branch::PositiveRational) => TRILOG_POSITIVE.eval(x),
        Some(Branch::Reflected) => {
            let y = 1.0 - x;
            let ly = ln(y);
            let lx = LOG_ONE_MINUS.eval(y);
            let lx2 = lx * lx;
            // ζ(3) + ζ(2)·lx - lx²·ly/2 + lx³/6
            let shift = lx.mul_add(Constants::ZETA2, Constants::ZETA3)
                + lx2.mul_add(lx / 6.0, -0.5 * lx2 * ly);
            TRILOG_REFLECTION.eval(y) + shift
        }
        Some(Branch::NearOne) => {
            let y = 1.0 - x;
            ln(y).mul_add(
                estrin(y, &NEAR_ONE_LOG_SERIES),
                estrin(y, &NEAR_ONE_SERIES),
            )
        }
        Some(Branch::BranchCut) | None => f64::NAN,
    }
}

/// `-ζ(2)·ln(-x) - ln³(-x)/6`
#[inline]
fn inversion_shift(x: f64) -> f64 {
    let l = ln(-x);
    -l * (l * l).mul_add(1.0 / 6.0, Constants::ZETA2)
}
