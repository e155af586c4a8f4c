//! PWM 配置
//!
//! 每个用作 PWM 的定时器对应一条描述，最多驱动 [`PWM_CHAN_NUMOF`] 路匹配输出，
//! 未使用的通道为 `None`。

use super::registers::{iocon, CtxxBxRegisters, PinCell, StaticRef, CT16B0, CT32B1};
use crate::config::pins::GpioPin;

/// 每个 PWM 外设的通道数
pub const PWM_CHAN_NUMOF: usize = 3;

/// PWM 外设描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmConf {
    /// 定时器寄存器块
    pub dev: StaticRef<CtxxBxRegisters>,
    /// 各通道引脚的 IOCON 寄存器，未使用的通道为 `None`
    pub pins: [Option<PinCell>; PWM_CHAN_NUMOF],
    /// SYSAHBCLKCTRL 中的时钟使能位号
    pub clk_bit: u16,
    /// 引脚复用功能号
    pub af: u8,
}

impl PwmConf {
    /// 获取通道的 IOCON 寄存器
    ///
    /// # 参数
    /// - `chan`: 通道号
    ///
    /// # 返回
    /// 通道未使用或越界时返回 `None`
    pub fn channel(&self, chan: usize) -> Option<PinCell> {
        self.pins.get(chan).copied().flatten()
    }

    /// 已使用的通道及其通道号
    pub fn channels(&self) -> impl Iterator<Item = (usize, PinCell)> + '_ {
        self.pins
            .iter()
            .enumerate()
            .filter_map(|(chan, pin)| pin.map(|cell| (chan, cell)))
    }

    /// 时钟使能掩码，与 SYSAHBCLKCTRL 按位或即可开启时钟
    pub const fn clk_mask(&self) -> u32 {
        1 << self.clk_bit
    }
}

/// 用作 PWM 的定时器数量
pub const PWM_NUMOF: usize = 2;

/// PWM 外设描述表，按外设编号索引
pub static PWM_CONFIG: [PwmConf; PWM_NUMOF] = [
    PwmConf {
        dev: CT16B0,
        pins: [
            Some(iocon(GpioPin::new(0, 8))),
            Some(iocon(GpioPin::new(0, 9))),
            None,
        ],
        clk_bit: 7,
        af: 2,
    },
    PwmConf {
        dev: CT32B1,
        pins: [
            Some(iocon(GpioPin::new(0, 13))),
            Some(iocon(GpioPin::new(0, 14))),
            Some(iocon(GpioPin::new(0, 15))),
        ],
        clk_bit: 10,
        af: 3,
    },
];

/// 按编号获取 PWM 外设描述
///
/// # 参数
/// - `dev`: 外设编号
///
/// # Panics
/// `dev >= PWM_NUMOF` 时 panic，需要检查时使用 [`get_pwm`]
pub fn pwm_config(dev: usize) -> &'static PwmConf {
    &PWM_CONFIG[dev]
}

/// 带越界检查的查找
pub fn get_pwm(dev: usize) -> Option<&'static PwmConf> {
    PWM_CONFIG.get(dev)
}
