//! 다이로그 Li2(x) (실수 주가지)
//!
//! 영역별 항등식:
//! - `x < -1`: 역수 `Li2(x) = -ζ(2) - ln²(-x)/2 - Li2(1/x)`
//! - `1/2 < x < 1`: 반사 `Li2(x) = ζ(2) - ln(x)·ln(1-x) - Li2(1-x)`
//! - `x > 1`: 분기 절단, NaN

use crate::config::coefficients::{DILOG_NEGATIVE, DILOG_POSITIVE, LOG_ONE_MINUS};
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
    Region::new(Bound::Exactly(-1.0), Branch::Exact(Constants::DILOG_MINUS_ONE)),
    Region::new(Bound::Below(-Constants::TAYLOR_SWITCH), Branch::NegativeRational),
    Region::new(Bound::Exactly(0.0), Branch::Zero),
    Region::new(Bound::Below(Constants::TAYLOR_SWITCH), Branch::Taylor),
    Region::new(Bound::Below(Constants::HALF), Branch::PositiveRational),
    Region::new(Bound::Exactly(Constants::HALF), Branch::Exact(Constants::DILOG_HALF)),
    Region::new(Bound::Below(Constants::ONE_MINUS_TAYLOR_SWITCH), Branch::Reflected),
    Region::new(Bound::Below(1.0), Branch::NearOne),
    Region::new(Bound::Exactly(1.0), Branch::Exact(Constants::ZETA2)),
    Region::new(Bound::Below(f64::INFINITY), Branch::BranchCut),
];

/// Li2(y) = y + y²/4 + y³/9 + y⁴/16 + ...
pub(crate) const TAYLOR: [f64; 5] = [0.0, 1.0, 0.25, 0.111_111_111_111_111_1, 0.0625];

/// -ln(1-y) = y + y²/2 + y³/3 + y⁴/4 + ...
const LOG_SERIES: [f64; 5] = [0.0, 1.0, 0.5, 0.333_333_333_333_333_3, 0.25];

/// Li2(x). `x > 1` 과 유한하지 않은 입력은 NaN.
pub fn dilog(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    match select(&REGIONS, x) {
        Some(Branch::InvertedTaylor) => inversion_shift(x) - estrin(1.0 / x, &TAYLOR),
        Some(Branch::InvertedRational) => inversion_shift(x) - DILOG_NEGATIVE.eval_reciprocal(x),
        Some(Branch::Exact(value)) => value,
        Some(Branch::NegativeRational) => DILOG_NEGATIVE.eval(x),
        Some(Branch::Zero) => x,
        Some(Branch::Taylor) => estrin(x, &TAYLOR),
        Some(Branch::PositiveRational) => DILOG_POSITIVE.eval(x),
        Some(Branch::Reflected) => {
            let y = 1.0 - x;
            // 0.5 <= x 이므로 ln(x) = ln(1-y) 를 커널로 구한다
            let lx = LOG_ONE_MINUS.eval(y);
            (-lx).mul_add(ln(y), Constants::ZETA2) - DILOG_POSITIVE.eval(y)
        }
        Some(Branch::NearOne) => {
            let y = 1.0 - x;
            let series = Constants::ZETA2 - estrin(y, &TAYLOR);
            ln(y).mul_add(estrin(y, &LOG_SERIES), series)
        }
        Some(Branch::BranchCut) | None => f64::NAN,
    }
}

/// `-ζ(2) - ln²(-x)/2`
#[inline]
fn inversion_shift(x: f64) -> f64 {
    let l = ln(-x);
    (-0.5 * l).mul_add(l, -Constants::ZETA2)
}
