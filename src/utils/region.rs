//! 정렬된 영역 테이블
//!
//! 각 함수의 정의역은 서로소인 영역들로 나뉜다. 영역은 작은 쪽부터 순서대로
//! 나열되고, 입력을 포함하는 첫 번째 영역이 선택된다. 경계값의 포함 여부는
//! [`Bound`] 의 종류로 정확히 표현된다.

/// 영역의 상한
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// `x < b`
    Below(f64),
    /// `x <= b`
    AtMost(f64),
    /// `x == b` (정확한 특수점)
    Exactly(f64),
}

impl Bound {
    #[inline]
    pub fn contains(self, x: f64) -> bool {
        match self {
            Bound::Below(b) => x < b,
            Bound::AtMost(b) => x <= b,
            Bound::Exactly(b) => x == b,
        }
    }
}

/// 상한과 그 영역에서 쓸 분기
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region<T> {
    pub bound: Bound,
    pub branch: T,
}

impl<T> Region<T> {
    pub const fn new(bound: Bound, branch: T) -> Self {
        Region { bound, branch }
    }
}

/// x 를 포함하는 첫 영역의 분기. NaN 은 어떤 영역에도 속하지 않는다.
#[inline]
pub fn select<T: Copy>(regions: &[Region<T>], x: f64) -> Option<T> {
    regions
        .iter()
        .find(|region| region.bound.contains(x))
        .map(|region| region.branch)
}

/// 테스트용: 유한한 모든 부동소수가 어떤 영역에 속하는지 확인할 표본점.
/// 각 경계값과 그 양옆 이웃을 포함한다.
#[cfg(test)]
pub(crate) fn boundary_samples<T>(regions: &[Region<T>]) -> Vec<f64> {
    let mut samples = vec![f64::MIN, -1.0, -0.0, 0.0, 1.0, f64::MAX];
    for region in regions {
        let b = match region.bound {
            Bound::Below(b) | Bound::AtMost(b) | Bound::Exactly(b) => b,
        };
        if b.is_finite() {
            samples.extend([next_down(b), b, next_up(b)]);
        }
    }
    samples
}

#[cfg(test)]
pub(crate) fn next_up(x: f64) -> f64 {
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

#[cfg(test)]
pub(crate) fn next_down(x: f64) -> f64 {
    -next_up(-x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Side {
        Negative,
        Zero,
        Small,
        One,
        Large,
    }

    const TABLE: [Region<Side>; 5] = [
        Region::new(Bound::Below(0.0), Side::Negative),
        Region::new(Bound::Exactly(0.0), Side::Zero),
        Region::new(Bound::Below(1.0), Side::Small),
        Region::new(Bound::Exactly(1.0), Side::One),
        Region::new(Bound::Below(f64::INFINITY), Side::Large),
    ];

    #[test]
    fn first_matching_region_wins() {
        assert_eq!(select(&TABLE, -3.0), Some(Side::Negative));
        assert_eq!(select(&TABLE, -0.0), Some(Side::Zero));
        assert_eq!(select(&TABLE, 0.0), Some(Side::Zero));
        assert_eq!(select(&TABLE, 0.5), Some(Side::Small));
        assert_eq!(select(&TABLE, 1.0), Some(Side::One));
        assert_eq!(select(&TABLE, next_up(1.0)), Some(Side::Large));
        assert_eq!(select(&TABLE, f64::MAX), Some(Side::Large));
    }

    #[test]
    fn nan_and_infinity_fall_through() {
        assert_eq!(select(&TABLE, f64::NAN), None);
        assert_eq!(select(&TABLE, f64::INFINITY), None);
    }

    #[test]
    fn at_most_includes_the_bound() {
        let table = [
            Region::new(Bound::AtMost(0.5), 1),
            Region::new(Bound::Below(f64::INFINITY), 2),
        ];
        assert_eq!(select(&table, 0.5), Some(1));
        assert_eq!(select(&table, next_up(0.5)), Some(2));
    }

    #[test]
    fn neighbours_are_adjacent_floats() {
        assert!(next_up(1.0) > 1.0);
        assert_eq!(next_down(next_up(1.0)), 1.0);
        assert!(next_down(-2.0) < -2.0);
        assert_eq!(next_up(-0.0), f64::from_bits(1));
    }
}
