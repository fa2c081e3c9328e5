//! 정의역, 분기 절단, 유한하지 않은 입력

use special_minimax::{create_function, FunctionKind};
use test_log::test;

const NON_FINITE: [f64; 3] = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY];

/// 부호별 여러 자릿수, 서브노멀, 극단값
fn wide_samples() -> Vec<f64> {
    let mut samples = vec![0.0, -0.0, f64::MIN_POSITIVE, 5e-324, f64::MAX];
    for exponent in -300..=300 {
        if exponent % 7 == 0 || (-6..=6).contains(&exponent) {
            for mantissa in [1.0, 1.7, 3.3, 9.1] {
                samples.push(mantissa * 10f64.powi(exponent));
            }
        }
    }
    let negatives: Vec<f64> = samples.iter().map(|x| -x).collect();
    samples.extend(negatives);
    samples.extend([0.5, 0.9999, 1.0, 2.0, -1.0]);
    samples
}

#[test]
fn non_finite_input_is_nan_everywhere() {
    for kind in FunctionKind::ALL {
        let function = create_function(kind);
        for x in NON_FINITE {
            assert!(function.eval(x).is_nan(), "{kind}({x})");
        }
    }
}

#[test]
fn total_functions_are_finite_on_the_real_line() {
    for kind in FunctionKind::ALL.into_iter().filter(|k| k.is_total()) {
        let function = create_function(kind);
        for x in wide_samples() {
            assert!(function.eval(x).is_finite(), "{kind}({x})");
        }
    }
}

#[test]
fn polylogs_are_nan_beyond_one() {
    for kind in [FunctionKind::Dilog, FunctionKind::Trilog] {
        let function = create_function(kind);
        for x in wide_samples() {
            let value = function.eval(x);
            if x > 1.0 {
                assert!(value.is_nan(), "{kind}({x}) = {value}");
            } else {
                assert!(value.is_finite(), "{kind}({x}) = {value}");
            }
        }
    }
}

#[test]
fn log1p_domain() {
    let function = create_function(FunctionKind::Log1p);
    for x in wide_samples() {
        let value = function.eval(x);
        if x < -1.0 {
            assert!(value.is_nan(), "log1p({x}) = {value}");
        } else if x == -1.0 {
            assert_eq!(value, f64::NEG_INFINITY);
        } else {
            assert!(value.is_finite(), "log1p({x}) = {value}");
        }
    }
}
