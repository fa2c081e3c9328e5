//! 수치 계산 유틸리티 함수들

use num::Float;

/// Estrin 방식 다항식 평가: `Σ coeffs[k]·x^k`
///
/// 인접한 두 계수를 `mul_add` 로 묶은 뒤 x², x⁴, ... 로 다시 묶어 나간다.
/// 중간값은 계수 배열의 스택 사본에 덮어쓰므로 힙 할당이 없다.
#[inline]
pub fn estrin<F: Float, const N: usize>(x: F, coeffs: &[F; N]) -> F {
    if N == 0 {
        return F::zero();
    }
    let mut terms = *coeffs;
    let mut len = N;
    let mut power = x;
    while len > 1 {
        let half = (len + 1) / 2;
        for i in 0..half {
            let lo = terms[2 * i];
            terms[i] = if 2 * i + 1 < len {
                terms[2 * i + 1].mul_add(power, lo)
            } else {
                lo
            };
        }
        len = half;
        power = power * power;
    }
    terms[0]
}

/// 미니맥스 유리근사 `k(y) ≈ y·p(y)/q(y)`
///
/// `num`, `den` 은 y의 오름차순 계수다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rational<const P: usize, const Q: usize> {
    pub num: [f64; P],
    pub den: [f64; Q],
}

impl<const P: usize, const Q: usize> Rational<P, Q> {
    pub const fn new(num: [f64; P], den: [f64; Q]) -> Self {
        Rational { num, den }
    }

    /// 근사 구간 안의 y 에서 k(y)
    #[inline]
    pub fn eval(&self, y: f64) -> f64 {
        y * estrin(y, &self.num) / estrin(y, &self.den)
    }

    /// k(1/x). 분자와 분모에 x^(Q-1) 을 곱하면 계수 순서만 뒤집힌다.
    ///
    /// 분자 차수가 분모보다 하나 낮은 테이블(`P + 1 == Q`)에서만 성립한다.
    #[inline]
    pub fn eval_reciprocal(&self, x: f64) -> f64 {
        debug_assert!(P + 1 == Q, "역수 평가는 P + 1 == Q 인 테이블에서만 정의된다");
        let mut num = self.num;
        let mut den = self.den;
        num.reverse();
        den.reverse();
        estrin(x, &num) / estrin(x, &den)
    }
}

/// 자연로그. 배정밀도로 올바르게 반올림된다고 가정하는 외부 기본연산이다.
#[inline]
pub fn ln(y: f64) -> f64 {
    y.ln()
}

/// 부호와 크기 분리: `(copysign(1, x), |x|)`
#[inline]
pub fn sign_magnitude(x: f64) -> (f64, f64) {
    (1.0_f64.copysign(x), x.abs())
}
