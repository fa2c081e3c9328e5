//! 정확한 닫힌 형태 값을 갖는 특수점

use special_minimax::{arctan, atanint, dilog, log1p, svdilog, trilog, Constants};
use test_log::test;

#[test]
fn arctan_at_one_is_quarter_pi() {
    assert_eq!(arctan(1.0), std::f64::consts::FRAC_PI_4);
    assert_eq!(arctan(-1.0), -std::f64::consts::FRAC_PI_4);
}

#[test]
fn atanint_at_one_is_catalan() {
    assert_eq!(atanint(1.0), Constants::CATALAN);
    assert!((atanint(1.0) - 0.915_965_594).abs() < 1e-9);
    assert_eq!(atanint(-1.0), -Constants::CATALAN);
}

#[test]
fn dilog_special_points() {
    assert_eq!(dilog(1.0), Constants::ZETA2);
    assert!((dilog(1.0) - 1.644_934_067).abs() < 1e-9);
    assert_eq!(dilog(-1.0), -Constants::ZETA2 / 2.0);

    let ln2 = std::f64::consts::LN_2;
    let half = Constants::ZETA2 / 2.0 - ln2 * ln2 / 2.0;
    assert!((dilog(0.5) - half).abs() <= 2.0 * f64::EPSILON * half);
}

#[test]
fn trilog_special_points() {
    assert_eq!(trilog(1.0), Constants::ZETA3);
    assert!((trilog(1.0) - 1.202_056_903).abs() < 1e-9);
    assert!((trilog(-1.0) + 0.75 * Constants::ZETA3).abs() <= 2.0 * f64::EPSILON);

    let ln2 = std::f64::consts::LN_2;
    let half = 21.0 / 24.0 * Constants::ZETA3 + ln2.powi(3) / 6.0 - Constants::ZETA2 * ln2 / 2.0;
    assert!((trilog(0.5) - half).abs() <= 8.0 * f64::EPSILON * half);
    assert!((trilog(0.5) - 0.537_213).abs() < 1e-6);
}

#[test]
fn log1p_special_points() {
    assert_eq!(log1p(0.0), 0.0);
    assert_eq!(log1p(-1.0), f64::NEG_INFINITY);
}

#[test]
fn svdilog_special_points() {
    assert_eq!(svdilog(0.0), 0.0);
    assert_eq!(svdilog(1.0), Constants::ZETA2);
    // K(1/2) = ζ(2)/2 이므로 x = 1/2, -1, 2 도 닫힌 형태를 갖는다
    let tolerance = 1e-14 * Constants::ZETA2;
    assert!((svdilog(0.5) - Constants::ZETA2 / 2.0).abs() <= tolerance);
    assert!((svdilog(-1.0) + Constants::ZETA2 / 2.0).abs() <= tolerance);
    assert!((svdilog(2.0) - 1.5 * Constants::ZETA2).abs() <= tolerance);
}

#[test]
fn zeros_keep_their_sign() {
    let odd_at_origin: [fn(f64) -> f64; 5] = [arctan, atanint, dilog, trilog, log1p];
    for f in odd_at_origin {
        assert!(f(0.0) == 0.0 && f(0.0).is_sign_positive());
        assert!(f(-0.0) == 0.0 && f(-0.0).is_sign_negative());
    }
}
