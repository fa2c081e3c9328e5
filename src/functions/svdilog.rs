//! 분기 절단이 없는 실수 다이로그
//!
//! 모든 실수 x 를 여섯 가지 변환 중 하나로 `y ∈ (0, 1/2]` 에 옮긴 뒤
//! `K(y) = Li2(y) + ln(y)·ln(1-y)/2` 를 평가하고 `c + s·K(y)` 로 되돌린다.
//! `x < 1` 에서는 `Li2(x) + ln|x|·ln(1-x)/2` 와 같다.

use crate::config::coefficients::{DILOG_POSITIVE, LOG_ONE_MINUS};
use crate::config::Constants;
use crate::utils::numeric::{estrin, ln};
use crate::utils::region::{select, Bound, Region};

use super::dilog::TAYLOR as DILOG_TAYLOR;

/// 축약 변수 y 로의 사상
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Argument {
    /// 1/(1-x), x < -1
    OneOverOneMinusX,
    /// x/(x-1), -1 <= x < 0
    XOverXMinusOne,
    /// x, 0 < x <= 1/2
    Identity,
    /// 1-x, 1/2 < x < 1
    OneMinusX,
    /// 1-1/x, 1 < x < 2
    OneMinusInverse,
    /// 1/x, x >= 2
    Inverse,
}

impl Argument {
    #[inline]
    fn apply(self, x: f64) -> f64 {
        match self {
            Argument::OneOverOneMinusX => 1.0 / (1.0 - x),
            Argument::XOverXMinusOne => x / (x - 1.0),
            Argument::Identity => x,
            Argument::OneMinusX => 1.0 - x,
            Argument::OneMinusInverse => 1.0 - 1.0 / x,
            Argument::Inverse => 1.0 / x,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Reduction {
    Exact(f64),
    Mapped {
        argument: Argument,
        sign: f64,
        shift: f64,
    },
}

const fn mapped(argument: Argument, sign: f64, shift: f64) -> Reduction {
    Reduction::Mapped {
        argument,
        sign,
        shift,
    }
}

const REGIONS: [Region<Reduction>; 8] = [
    Region::new(
        Bound::Below(-1.0),
        mapped(Argument::OneOverOneMinusX, 1.0, -Constants::ZETA2),
    ),
    Region::new(Bound::Below(0.0), mapped(Argument::XOverXMinusOne, -1.0, 0.0)),
    Region::new(Bound::Exactly(0.0), Reduction::Exact(0.0)),
    Region::new(Bound::AtMost(Constants::HALF), mapped(Argument::Identity, 1.0, 0.0)),
    Region::new(
        Bound::Below(1.0),
        mapped(Argument::OneMinusX, -1.0, Constants::ZETA2),
    ),
    Region::new(Bound::Exactly(1.0), Reduction::Exact(Constants::ZETA2)),
    Region::new(
        Bound::Below(Constants::SVDILOG_INVERSION_SWITCH),
        mapped(Argument::OneMinusInverse, 1.0, Constants::ZETA2),
    ),
    Region::new(
        Bound::Below(f64::INFINITY),
        mapped(Argument::Inverse, -1.0, Constants::TWO_ZETA2),
    ),
];

/// ln(1-y)/2 = -y/2 - y²/4 - y³/6 - y⁴/8 - ...
const HALF_LOG_SERIES: [f64; 5] = [
    0.0,
    -0.5,
    -0.25,
    -0.166_666_666_666_666_66,
    -0.125,
];

/// 분기 절단이 없는 실수 다이로그. 유한한 모든 x 에서 유한한 값을 돌려준다.
pub fn svdilog(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    match select(&REGIONS, x) {
        Some(Reduction::Exact(value)) => value,
        Some(Reduction::Mapped {
            argument,
            sign,
            shift,
        }) => {
            let y = argument.apply(x);
            debug_assert!(y > 0.0 && y <= 0.5, "축약 변수 {y} 가 (0, 1/2] 밖이다");
            let ly = ln(y);
            if y < Constants::TAYLOR_SWITCH {
                // 작은 y 에서 ln(1-y) 커널의 소거를 피한다
                let kernel = ly.mul_add(estrin(y, &HALF_LOG_SERIES), estrin(y, &DILOG_TAYLOR));
                sign.mul_add(kernel, shift)
            } else {
                let half_log = 0.5 * LOG_ONE_MINUS.eval(y);
                (sign * half_log).mul_add(ly, sign.mul_add(DILOG_POSITIVE.eval(y), shift))
            }
        }
        None => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::region::{boundary_samples, next_down, next_up};

    #[test]
    fn every_finite_value_maps_into_half_interval() {
        let mut samples = boundary_samples(&REGIONS);
        samples.extend([-1e300, -1e-300, 1e-300, 0.25, 0.75, 1.5, 1e300]);
        for x in samples {
            match select(&REGIONS, x) {
                Some(Reduction::Mapped { argument, .. }) => {
                    let y = argument.apply(x);
                    assert!(y > 0.0 && y <= 0.5, "x = {x} -> y = {y}");
                }
                Some(Reduction::Exact(_)) => assert!(x == 0.0 || x == 1.0),
                None => panic!("x = {x} has no region"),
            }
        }
    }

    #[test]
    fn boundaries_route_to_expected_mapping() {
        let argument_at = |x: f64| match select(&REGIONS, x) {
            Some(Reduction::Mapped { argument, .. }) => Some(argument),
            _ => None,
        };
        assert_eq!(argument_at(next_down(-1.0)), Some(Argument::OneOverOneMinusX));
        assert_eq!(argument_at(-1.0), Some(Argument::XOverXMinusOne));
        assert_eq!(argument_at(-0.0), None);
        assert_eq!(argument_at(0.5), Some(Argument::Identity));
        assert_eq!(argument_at(next_up(0.5)), Some(Argument::OneMinusX));
        assert_eq!(argument_at(1.0), None);
        assert_eq!(argument_at(next_up(1.0)), Some(Argument::OneMinusInverse));
        assert_eq!(argument_at(2.0), Some(Argument::Inverse));
    }

    #[test]
    fn exact_points() {
        assert_eq!(svdilog(0.0), 0.0);
        assert_eq!(svdilog(-0.0), 0.0);
        assert_eq!(svdilog(1.0), Constants::ZETA2);
    }

    #[test]
    fn matches_dilog_with_log_correction() {
        for &x in &[-50.0, -2.0, -0.7, -0.01, 0.2, 0.45, 0.6, 0.95] {
            let expected = super::super::dilog(x) + 0.5 * x.abs().ln() * (1.0 - x).ln();
            let got = svdilog(x);
            assert!((got - expected).abs() <= 1e-14 * expected.abs(), "x = {x}");
        }
    }

    #[test]
    fn huge_and_tiny_arguments_stay_finite() {
        for &x in &[f64::MIN, -1e-310, 1e-310, f64::MAX] {
            assert!(svdilog(x).is_finite(), "x = {x}");
        }
    }
}
