//! 수치 상수값 정의

/// 모든 특수함수가 공유하는 수학 상수, 영역 경계값, 정확한 특수값
pub struct Constants;

impl Constants {
    /// π
    pub const PI: f64 = 3.141_592_653_589_793;

    /// π/2
    pub const FRAC_PI_2: f64 = 1.570_796_326_794_896_6;

    /// π/4 (arctan(1))
    pub const FRAC_PI_4: f64 = 0.785_398_163_397_448_3;

    /// ln 2
    pub const LN_2: f64 = 0.693_147_180_559_945_3;

    /// 카탈랑 상수 G = Ti2(1)
    pub const CATALAN: f64 = 0.915_965_594_177_219;

    /// ζ(2) = π²/6 = Li2(1)
    pub const ZETA2: f64 = 1.644_934_066_848_226_4;

    /// 2ζ(2)
    pub const TWO_ZETA2: f64 = 3.289_868_133_696_453;

    /// ζ(3) = Li3(1)
    pub const ZETA3: f64 = 1.202_056_903_159_594_2;

    /// Li2(-1) = -ζ(2)/2
    pub const DILOG_MINUS_ONE: f64 = -0.822_467_033_424_113_2;

    /// Li2(1/2) = ζ(2)/2 - (ln 2)²/2
    pub const DILOG_HALF: f64 = 0.582_240_526_465_012_5;

    /// Li3(-1) = -3ζ(3)/4
    pub const TRILOG_MINUS_ONE: f64 = -0.901_542_677_369_695_7;

    /// Li3(1/2) = 7ζ(3)/8 + (ln 2)³/6 - ζ(2)·ln 2/2
    pub const TRILOG_HALF: f64 = 0.537_213_193_608_040_2;

    // 영역 경계값
    pub const ARCTAN_TAYLOR_SWITCH: f64 = 1e-3;
    pub const ARCTAN_INV_TAYLOR_SWITCH: f64 = 1e3;
    pub const TAYLOR_SWITCH: f64 = 1e-4;
    pub const INV_TAYLOR_SWITCH: f64 = 1e4;
    pub const ONE_MINUS_TAYLOR_SWITCH: f64 = 0.9999;
    pub const LOG1P_TAYLOR_SWITCH: f64 = 1e-3;
    pub const LOG1P_RATIONAL_SWITCH: f64 = 0.3;
    pub const HALF: f64 = 0.5;
    pub const SVDILOG_INVERSION_SWITCH: f64 = 2.0;
}
