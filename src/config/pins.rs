//! 引脚句柄定义
//!
//! 一个引脚由 (port, pin) 唯一确定，打包进一个 16 位整数：
//! port 占高字节，pin 占低字节。

use core::fmt;

/// GPIO 引脚句柄
///
/// 只能通过 [`GpioPin::new`] 构造。`port` 和 `pin` 都是 `u8`，
/// 正好占满 16 位句柄，因此编码是单射的，也没有多余的位留给有效性标记。
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GpioPin(u16);

impl GpioPin {
    /// 编码引脚句柄
    ///
    /// # 参数
    /// * `port` - GPIO 端口号
    /// * `pin` - 端口内的引脚号
    pub const fn new(port: u8, pin: u8) -> Self {
        Self(((port as u16) << 8) | pin as u16)
    }

    /// 解码为 `(port, pin)`，是 [`GpioPin::new`] 的逆运算
    pub const fn decode(self) -> (u8, u8) {
        (self.port(), self.pin())
    }

    pub const fn port(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn pin(self) -> u8 {
        self.0 as u8
    }

    /// 原始 16 位句柄值
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for GpioPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}.{}", self.port(), self.pin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_layout() {
        assert_eq!(GpioPin::new(0, 0).raw(), 0x0000);
        assert_eq!(GpioPin::new(1, 5).raw(), 0x0105);
        assert_eq!(GpioPin::new(0xff, 0xff).raw(), 0xffff);
    }

    #[test]
    fn test_round_trip_full_domain() {
        for port in 0..=u8::MAX {
            for pin in 0..=u8::MAX {
                assert_eq!(GpioPin::new(port, pin).decode(), (port, pin));
            }
        }
    }

    #[test]
    fn test_injective() {
        let mut seen = HashSet::new();
        for port in 0..=u8::MAX {
            for pin in 0..=u8::MAX {
                // 每个 (port, pin) 必须得到不同的句柄
                assert!(seen.insert(GpioPin::new(port, pin)));
            }
        }
        assert_eq!(seen.len(), 1 << 16);
    }

    #[test]
    fn test_interrupt_lines_differ() {
        let int1 = GpioPin::new(0, 0);
        let int2 = GpioPin::new(0, 1);
        assert_ne!(int1, int2);
        assert_ne!(int1.raw(), int2.raw());
    }

    #[test]
    fn test_display() {
        assert_eq!(GpioPin::new(1, 13).to_string(), "P1.13");
    }
}
