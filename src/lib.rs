//! LPC11U34 外设配置层
//!
//! 为上层驱动提供纯数据的硬件描述：
//!
//! - [`config`]: GPIO 引脚句柄与引脚模式的位编码
//! - [`peripherals`]: PWM / SPI 外设描述表、ADC 分辨率与 SPI 时钟编码
//! - [`drivers`]: 驱动实例的默认参数表（可在编译期覆盖）
//! - [`registry`]: 与参数表一一对应的注册表元数据
//!
//! 本 crate 不做任何 I/O，所有表都是编译期常量。

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod drivers;
pub mod peripherals;
pub mod registry;

// 重新导出常用类型
pub use config::modes::{mode_bits, Direction, GpioMode, ModeBits};
pub use config::pins::GpioPin;
pub use peripherals::{PwmConf, SpiConf, PWM_CONFIG, SPI_CONFIG};
pub use registry::{auto_init, DeviceRegistry, DeviceTable, RegistryInfo};

/// CPU ID 长度（字节）
pub const CPUID_LEN: usize = 16;
