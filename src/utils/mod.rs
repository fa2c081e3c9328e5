//! 수치 평가 유틸리티

pub mod numeric;
pub mod region;
