//! 数学库模块
//!
//! 基于 `nalgebra` 提供网格处理所需的数学类型和函数。
//!
//! # 模块组织
//!
//! - **基础类型**：Vector3 类型别名
//! - **常量**：PI, DEG_TO_RAD 等
//! - **三角函数**：cotangent, secant, 角度/弧度转换（见 `trig`）
//! - **几何处理**：面法线计算（见 `geometry` 子模块）

/// 单精度三维向量
pub type Vector3 = nalgebra::Vector3<f32>;

/// 数学常量
pub mod constants {
    /// π
    pub const PI: f32 = std::f32::consts::PI;

    /// 角度转弧度的系数
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// 三角函数工具
///
/// 无状态的纯函数，供相机和投影矩阵计算使用。
pub mod trig {
    use super::constants::PI;

    /// 余切 `1 / tan(x)`
    #[inline]
    pub fn cotangent(radians: f32) -> f32 {
        1.0 / radians.tan()
    }

    /// 余割 `1 / sin(x)`
    #[inline]
    pub fn cosecant(radians: f32) -> f32 {
        1.0 / radians.sin()
    }

    /// 正割 `1 / cos(x)`
    #[inline]
    pub fn secant(radians: f32) -> f32 {
        1.0 / radians.cos()
    }

    /// 角度转弧度
    #[inline]
    pub fn degrees_to_radians(degrees: f32) -> f32 {
        PI * (degrees / 180.0)
    }

    /// 弧度转角度
    #[inline]
    pub fn radians_to_degrees(radians: f32) -> f32 {
        180.0 * (radians / PI)
    }
}

/// 浮点数近似相等比较
#[inline]
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

pub mod geometry;

#[cfg(test)]
mod tests {
    use super::*;
    use super::trig::*;

    #[test]
    fn test_degree_radian_conversion() {
        assert!(approx_eq(degrees_to_radians(180.0), constants::PI, 1e-6));
        assert!(approx_eq(radians_to_degrees(constants::PI / 2.0), 90.0, 1e-4));
        assert!(approx_eq(degrees_to_radians(45.0), 45.0 * constants::DEG_TO_RAD, 1e-6));
    }

    #[test]
    fn test_reciprocal_functions() {
        let angle = degrees_to_radians(45.0);
        assert!(approx_eq(cotangent(angle), 1.0, 1e-5));
        assert!(approx_eq(secant(0.0), 1.0, 1e-6));
        assert!(approx_eq(cosecant(constants::PI / 2.0), 1.0, 1e-6));
    }

    #[test]
    fn test_cotangent_of_zero_is_infinite() {
        assert!(cotangent(0.0).is_infinite());
    }
}
