//! 상수와 미니맥스 계수 테이블

pub mod coefficients;
pub mod constants;

pub use constants::Constants;
