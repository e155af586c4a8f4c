//! LPC11U34 寄存器块布局与固定地址引用
//!
//! 外设描述符只保存这些寄存器块的地址，本 crate 不会解引用它们。
//! 真正读写寄存器的驱动必须运行在目标芯片上。

use core::fmt;
use core::ops::Deref;
use core::ptr;

use tock_registers::register_structs;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};

use crate::config::pins::GpioPin;

/// 固定地址上寄存器块的引用
///
/// 寄存器块由硬件持有，这里只保存它的地址。
pub struct StaticRef<T> {
    ptr: *const T,
}

impl<T> StaticRef<T> {
    /// 从固定地址创建引用
    ///
    /// # Safety
    ///
    /// 每次解引用时 `ptr` 都必须指向一个有效的 `T`，且在整个程序运行期间有效。
    /// `StaticRef` 可以放进 `static` 并在任意执行上下文（包括中断）中共享，
    /// 因此 `T` 必须是可以从任意上下文并发访问的 MMIO 寄存器块，
    /// 即只通过 `tock_registers` 的寄存器类型做单次易失性读写。
    pub const unsafe fn new(ptr: *const T) -> Self {
        Self { ptr }
    }

    /// 寄存器块的地址
    pub fn addr(&self) -> usize {
        self.ptr as usize
    }

    pub const fn as_ptr(&self) -> *const T {
        self.ptr
    }
}

impl<T> Clone for StaticRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StaticRef<T> {}

impl<T> PartialEq for StaticRef<T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.ptr, other.ptr)
    }
}

impl<T> Eq for StaticRef<T> {}

impl<T> fmt::Debug for StaticRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StaticRef({:#010x})", self.addr())
    }
}

impl<T> Deref for StaticRef<T> {
    type Target = T;

    fn deref(&self) -> &T {
        unsafe { &*self.ptr }
    }
}

// 跨上下文共享的前提由 `StaticRef::new` 的调用方保证，见其 Safety 说明
unsafe impl<T> Send for StaticRef<T> {}
unsafe impl<T> Sync for StaticRef<T> {}

register_structs! {
    /// 16/32 位计数器/定时器（CT16B0、CT16B1、CT32B0、CT32B1）
    pub CtxxBxRegisters {
        (0x000 => ir: ReadWrite<u32>),
        (0x004 => tcr: ReadWrite<u32>),
        (0x008 => tc: ReadWrite<u32>),
        (0x00C => pr: ReadWrite<u32>),
        (0x010 => pc: ReadWrite<u32>),
        (0x014 => mcr: ReadWrite<u32>),
        /// 匹配寄存器 MR0..MR3
        (0x018 => mr: [ReadWrite<u32>; 4]),
        (0x028 => ccr: ReadWrite<u32>),
        /// 捕获寄存器 CR0..CR3
        (0x02C => cr: [ReadOnly<u32>; 4]),
        (0x03C => emr: ReadWrite<u32>),
        (0x040 => _reserved0),
        (0x070 => ctcr: ReadWrite<u32>),
        /// PWM 控制，每个匹配通道一位
        (0x074 => pwmc: ReadWrite<u32>),
        (0x078 => @END),
    }
}

register_structs! {
    /// SSP 控制器（SSP0、SSP1）
    pub SspRegisters {
        (0x000 => cr0: ReadWrite<u32>),
        (0x004 => cr1: ReadWrite<u32>),
        (0x008 => dr: ReadWrite<u32>),
        (0x00C => sr: ReadOnly<u32>),
        /// 时钟预分频
        (0x010 => cpsr: ReadWrite<u32>),
        (0x014 => imsc: ReadWrite<u32>),
        (0x018 => ris: ReadOnly<u32>),
        (0x01C => mis: ReadOnly<u32>),
        (0x020 => icr: WriteOnly<u32>),
        (0x024 => @END),
    }
}

/// 单个引脚的 IOCON 功能寄存器
pub type PinCell = StaticRef<ReadWrite<u32>>;

pub const CT16B0_BASE: usize = 0x4000_C000;
pub const CT16B1_BASE: usize = 0x4001_0000;
pub const CT32B0_BASE: usize = 0x4001_4000;
pub const CT32B1_BASE: usize = 0x4001_8000;
pub const SSP0_BASE: usize = 0x4004_0000;
pub const SSP1_BASE: usize = 0x4005_8000;
pub const IOCON_BASE: usize = 0x4004_4000;

/// 端口 0 与端口 1 的 IOCON 块间距
const IOCON_PORT_STRIDE: usize = 0x60;

pub const CT16B0: StaticRef<CtxxBxRegisters> = unsafe { StaticRef::new(CT16B0_BASE as *const _) };
pub const CT16B1: StaticRef<CtxxBxRegisters> = unsafe { StaticRef::new(CT16B1_BASE as *const _) };
pub const CT32B0: StaticRef<CtxxBxRegisters> = unsafe { StaticRef::new(CT32B0_BASE as *const _) };
pub const CT32B1: StaticRef<CtxxBxRegisters> = unsafe { StaticRef::new(CT32B1_BASE as *const _) };
pub const SSP0: StaticRef<SspRegisters> = unsafe { StaticRef::new(SSP0_BASE as *const _) };
pub const SSP1: StaticRef<SspRegisters> = unsafe { StaticRef::new(SSP1_BASE as *const _) };

/// 计算引脚的 IOCON 寄存器地址
///
/// # 参数
/// - `pin`: 引脚句柄
///
/// # 返回
/// IOCON 基址 + 端口偏移 + 引脚号 × 4
pub const fn iocon_addr(pin: GpioPin) -> usize {
    IOCON_BASE + pin.port() as usize * IOCON_PORT_STRIDE + pin.pin() as usize * 4
}

/// 引脚的 IOCON 寄存器引用
///
/// 不检查该引脚在当前封装上是否存在。
pub const fn iocon(pin: GpioPin) -> PinCell {
    unsafe { StaticRef::new(iocon_addr(pin) as *const _) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;
    use tock_registers::interfaces::{Readable, Writeable};

    #[test]
    fn test_block_sizes() {
        // 字段偏移由 register_structs! 在编译期检查
        assert_eq!(size_of::<CtxxBxRegisters>(), 0x78);
        assert_eq!(size_of::<SspRegisters>(), 0x24);
    }

    #[test]
    fn test_iocon_addresses() {
        assert_eq!(iocon_addr(GpioPin::new(0, 0)), 0x4004_4000);
        assert_eq!(iocon_addr(GpioPin::new(0, 8)), 0x4004_4020);
        assert_eq!(iocon_addr(GpioPin::new(1, 0)), 0x4004_4060);
        assert_eq!(iocon(GpioPin::new(1, 13)).addr(), 0x4004_4094);
    }

    #[test]
    fn test_static_ref_identity() {
        assert_eq!(CT16B0, CT16B0);
        assert_ne!(CT16B0, CT16B1);
        assert_eq!(SSP1.addr(), SSP1_BASE);
        assert_eq!(format!("{:?}", SSP0), "StaticRef(0x40040000)");
    }

    #[test]
    fn test_pin_cell_access() {
        // 用普通内存模拟一个 IOCON 寄存器
        let mut backing: u32 = 0;
        let reg: PinCell = unsafe { StaticRef::new(&mut backing as *mut u32 as *const ReadWrite<u32>) };
        reg.set(0x81);
        assert_eq!(reg.get(), 0x81);
        reg.set(0x2);
        assert_eq!(reg.get(), 0x2);
    }
}
