//! ADC 分辨率设置

/// 可用的 ADC 通道数
pub const ADC_NUMOF: usize = 8;

/// ADC 分辨率
///
/// 支持的取值位于 AD0CR 的 CLKS 字段（第 17..19 位）。不支持的取值是小整数，
/// 与 [`ModeBits`](crate::config::modes::ModeBits) 的位重叠，两者不会混用。
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdcRes {
    /// 6 位
    Res6Bit = 0x4 << 17,
    /// 8 位
    Res8Bit = 0x2 << 17,
    /// 10 位
    Res10Bit = 0x0 << 17,
    /// 12 位，不支持
    Res12Bit = 1,
    /// 14 位，不支持
    Res14Bit = 2,
    /// 16 位，不支持
    Res16Bit = 3,
}

impl AdcRes {
    const CLKS_MASK: u32 = 0x7 << 17;

    pub const fn bits(self) -> u32 {
        self as u32
    }

    pub const fn is_supported(self) -> bool {
        matches!(self, AdcRes::Res6Bit | AdcRes::Res8Bit | AdcRes::Res10Bit)
    }

    /// CLKS 字段的值，硬件不支持的分辨率返回 `None`
    pub const fn clks(self) -> Option<u32> {
        if self.is_supported() {
            Some((self.bits() & Self::CLKS_MASK) >> 17)
        } else {
            None
        }
    }
}
