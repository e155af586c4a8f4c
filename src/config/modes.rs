//! 引脚模式编码
//!
//! 使用以下位描述引脚模式：
//! - bit  0: 0 为输入，1 为输出
//! - bit  3: 下拉电阻使能
//! - bit  4: 上拉电阻使能
//! - bit 10: 开漏使能
//!
//! 这些位与其他外设的编码（例如 [`AdcRes`](crate::peripherals::adc::AdcRes)）
//! 可能重叠，两种句柄是不同的类型，不会混在同一个值里。

bitflags::bitflags! {
    /// 打包后的引脚模式句柄
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModeBits: u32 {
        /// 方向：置位为输出
        const OUTPUT     = 1 << 0;
        /// 下拉电阻使能
        const PULL_DOWN  = 1 << 3;
        /// 上拉电阻使能
        const PULL_UP    = 1 << 4;
        /// 开漏使能
        const OPEN_DRAIN = 1 << 10;
    }
}

/// 引脚方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Input,
    Output,
}

/// 打包四个模式标志
///
/// 对全部 16 种组合都有定义。同时使能上拉和下拉可以表示出来，
/// 但硬件行为未定义，见 [`ModeBits::has_pull_conflict`]。
pub const fn mode_bits(pull_up: bool, pull_down: bool, open_drain: bool, direction: Direction) -> ModeBits {
    let out = match direction {
        Direction::Input => 0,
        Direction::Output => 1,
    };
    ModeBits::from_bits_retain(
        ((pull_up as u32) << 4) | ((pull_down as u32) << 3) | ((open_drain as u32) << 10) | out,
    )
}

impl ModeBits {
    pub const fn direction(self) -> Direction {
        if self.contains(Self::OUTPUT) {
            Direction::Output
        } else {
            Direction::Input
        }
    }

    pub const fn pull_up(self) -> bool {
        self.contains(Self::PULL_UP)
    }

    pub const fn pull_down(self) -> bool {
        self.contains(Self::PULL_DOWN)
    }

    pub const fn open_drain(self) -> bool {
        self.contains(Self::OPEN_DRAIN)
    }

    /// 上拉和下拉同时使能，硬件行为未定义。
    ///
    /// 本层不拒绝这种组合，由消费该值的 GPIO 驱动决定如何处理。
    pub const fn has_pull_conflict(self) -> bool {
        self.contains(Self::PULL_UP.union(Self::PULL_DOWN))
    }
}

/// 预定义的引脚模式
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpioMode {
    /// 输入，无上下拉
    In = mode_bits(false, false, false, Direction::Input).bits(),
    /// 输入，下拉
    InPd = mode_bits(false, true, false, Direction::Input).bits(),
    /// 输入，上拉
    InPu = mode_bits(true, false, false, Direction::Input).bits(),
    /// 推挽输出
    Out = mode_bits(false, false, false, Direction::Output).bits(),
    /// 开漏输出
    Od = mode_bits(false, false, true, Direction::Output).bits(),
    /// 开漏输出，上拉
    OdPu = mode_bits(true, false, true, Direction::Output).bits(),
}

impl GpioMode {
    pub const ALL: [GpioMode; 6] = [
        GpioMode::In,
        GpioMode::InPd,
        GpioMode::InPu,
        GpioMode::Out,
        GpioMode::Od,
        GpioMode::OdPu,
    ];

    pub const fn bits(self) -> ModeBits {
        ModeBits::from_bits_retain(self as u32)
    }
}

impl From<GpioMode> for ModeBits {
    fn from(mode: GpioMode) -> Self {
        mode.bits()
    }
}
