//! 引脚配置模块
//!
//! 提供 GPIO 引脚句柄和引脚模式的编码定义，以及编译期覆盖值的解析规则

pub mod modes;
pub mod overrides;
pub mod pins;

// 重新导出常用类型
pub use modes::{mode_bits, GpioMode, ModeBits};
pub use pins::GpioPin;
