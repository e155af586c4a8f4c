//! 驱动默认参数
//!
//! 每个驱动类型提供一张默认参数表及对应的注册表元数据，驱动的运行时行为不在本 crate 内。

#[cfg(feature = "l3g4200d")]
pub mod l3g4200d;
