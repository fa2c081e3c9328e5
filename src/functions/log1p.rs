//! ln(1+x)

use crate::config::coefficients::LOG_ONE_PLUS;
use crate::config::Constants;
use crate::utils::numeric::{estrin, ln};
use crate::utils::region::{select, Bound, Region};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    BranchCut,
    Pole,
    Logarithm,
    Rational,
    Zero,
    Taylor,
}

const REGIONS: [Region<Branch>; 8] = [
    Region::new(Bound::Below(-1.0), Branch::BranchCut),
    Region::new(Bound::Exactly(-1.0), Branch::Pole),
    Region::new(Bound::AtMost(-Constants::LOG1P_RATIONAL_SWITCH), Branch::Logarithm),
    Region::new(Bound::AtMost(-Constants::LOG1P_TAYLOR_SWITCH), Branch::Rational),
    Region::new(Bound::Exactly(0.0), Branch::Zero),
    Region::new(Bound::Below(Constants::LOG1P_TAYLOR_SWITCH), Branch::Taylor),
    Region::new(Bound::Below(Constants::LOG1P_RATIONAL_SWITCH), Branch::Rational),
    Region::new(Bound::Below(f64::INFINITY), Branch::Logarithm),
];

/// x - x²/2 + x³/3 - x⁴/4 + x⁵/5
const TAYLOR: [f64; 6] = [0.0, 1.0, -0.5, 0.333_333_333_333_333_3, -0.25, 0.2];

/// ln(1+x). `x = -1` 은 -∞, `x < -1` 과 유한하지 않은 입력은 NaN.
pub fn log1p(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    match select(&REGIONS, x) {
        Some(Branch::Pole) => f64::NEG_INFINITY,
        Some(Branch::Logarithm) => ln(1.0 + x),
        Some(Branch::Rational) => LOG_ONE_PLUS.eval(x),
        Some(Branch::Zero) => x,
        Some(Branch::Taylor) => estrin(x, &TAYLOR),
        Some(Branch::BranchCut) | None => f64::NAN,
    }
}
