//! SPI 配置
//!
//! SSP 通过 PRESETCTRL 解除复位，通过 SYSAHBCLKCTRL 开启时钟。
//! 这两个寄存器由多个外设共用，每条描述只保存自己那一位的掩码。

use super::registers::{SspRegisters, StaticRef, SSP0, SSP1};

/// SPI 时钟档位
///
/// 取值为 CR0 的 SCR 分频值，按 12MHz 主频计算。
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpiClk {
    /// 100KHz
    Clk100Khz = 119,
    /// 400KHz
    Clk400Khz = 29,
    /// 1MHz
    Clk1Mhz = 11,
    /// 名义 5MHz，实际 4MHz
    Clk5Mhz = 2,
    /// 名义 10MHz，实际 12MHz
    Clk10Mhz = 0,
}

impl SpiClk {
    const CORE_CLOCK_HZ: u32 = 12_000_000;

    /// CR0 中 SCR 字段的分频值
    pub const fn divider(self) -> u8 {
        self as u8
    }

    /// 预分频为 1 时总线的实际时钟
    pub const fn frequency_hz(self) -> u32 {
        Self::CORE_CLOCK_HZ / (self.divider() as u32 + 1)
    }
}

/// SPI 总线描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiConf {
    /// SSP 寄存器块
    pub dev: StaticRef<SspRegisters>,
    /// PRESETCTRL 中的复位位掩码
    pub preset_bit: u32,
    /// SYSAHBCLKCTRL 中的时钟位掩码
    pub ahb_bit: u32,
}

impl SpiConf {
    /// 检查总线时钟是否已开启
    ///
    /// # 参数
    /// - `sysahbclkctrl`: SYSAHBCLKCTRL 当前值
    pub const fn is_clock_enabled(&self, sysahbclkctrl: u32) -> bool {
        sysahbclkctrl & self.ahb_bit != 0
    }

    /// 检查总线是否已解除复位
    ///
    /// # 参数
    /// - `presetctrl`: PRESETCTRL 当前值，置位表示解除复位
    pub const fn is_released_from_reset(&self, presetctrl: u32) -> bool {
        presetctrl & self.preset_bit != 0
    }
}

/// SPI 总线数量
pub const SPI_NUMOF: usize = 2;

/// SPI 总线描述表，按总线编号索引
pub static SPI_CONFIG: [SpiConf; SPI_NUMOF] = [
    SpiConf {
        dev: SSP0,
        preset_bit: 1 << 0,
        ahb_bit: 1 << 11,
    },
    SpiConf {
        dev: SSP1,
        preset_bit: 1 << 2,
        ahb_bit: 1 << 18,
    },
];

/// 按编号获取 SPI 总线描述
///
/// # Panics
/// `bus >= SPI_NUMOF` 时 panic，需要检查时使用 [`get_spi`]
pub fn spi_config(bus: usize) -> &'static SpiConf {
    &SPI_CONFIG[bus]
}

pub fn get_spi(bus: usize) -> Option<&'static SpiConf> {
    SPI_CONFIG.get(bus)
}
