//! L3G4200D 三轴陀螺仪
//!
//! 参数类型与默认参数构造器。默认参数表见 [`params`]。

pub mod params;

use embedded_hal::i2c::SevenBitAddress;

use crate::config::pins::GpioPin;

pub use params::{L3G4200D, L3G4200D_NUMOF, L3G4200D_PARAMS_DEFAULT};

/// I2C 总线编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct I2cDev(u8);

impl I2cDev {
    pub const fn new(bus: u8) -> Self {
        Self(bus)
    }

    pub const fn index(self) -> u8 {
        self.0
    }
}

/// 输出数据率与截止频率，即 CTRL_REG1 的 DR/BW 字段
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum L3g4200dMode {
    /// 数据率 100Hz，截止频率 12.5Hz
    Mode100_12 = 0x0,
    /// 数据率 100Hz，截止频率 25Hz
    Mode100_25 = 0x1,
    /// 数据率 200Hz，截止频率 12.5Hz
    Mode200_12 = 0x4,
    /// 数据率 200Hz，截止频率 25Hz
    Mode200_25 = 0x5,
    /// 数据率 200Hz，截止频率 50Hz
    Mode200_50 = 0x6,
    /// 数据率 200Hz，截止频率 70Hz
    Mode200_70 = 0x7,
    /// 数据率 400Hz，截止频率 20Hz
    Mode400_20 = 0x8,
    /// 数据率 400Hz，截止频率 25Hz
    Mode400_25 = 0x9,
    /// 数据率 400Hz，截止频率 50Hz
    Mode400_50 = 0xa,
    /// 数据率 400Hz，截止频率 110Hz
    Mode400_110 = 0xb,
    /// 数据率 800Hz，截止频率 30Hz
    Mode800_30 = 0xc,
    /// 数据率 800Hz，截止频率 35Hz
    Mode800_35 = 0xd,
    /// 数据率 800Hz，截止频率 50Hz
    Mode800_50 = 0xe,
    /// 数据率 800Hz，截止频率 110Hz
    Mode800_110 = 0xf,
}

impl L3g4200dMode {
    pub const ALL: [L3g4200dMode; 14] = [
        L3g4200dMode::Mode100_12,
        L3g4200dMode::Mode100_25,
        L3g4200dMode::Mode200_12,
        L3g4200dMode::Mode200_25,
        L3g4200dMode::Mode200_50,
        L3g4200dMode::Mode200_70,
        L3g4200dMode::Mode400_20,
        L3g4200dMode::Mode400_25,
        L3g4200dMode::Mode400_50,
        L3g4200dMode::Mode400_110,
        L3g4200dMode::Mode800_30,
        L3g4200dMode::Mode800_35,
        L3g4200dMode::Mode800_50,
        L3g4200dMode::Mode800_110,
    ];

    pub const fn from_raw(raw: u8) -> Option<Self> {
        let mut i = 0;
        while i < Self::ALL.len() {
            if Self::ALL[i] as u8 == raw {
                return Some(Self::ALL[i]);
            }
            i += 1;
        }
        None
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// 输出数据率 (Hz)
    pub const fn data_rate_hz(self) -> u16 {
        100 << (self.raw() >> 2)
    }

    /// CTRL_REG1 的值：DR/BW 加上上电和 XYZ 三轴使能
    pub const fn ctrl_reg1(self) -> u8 {
        (self.raw() << 4) | 0x0f
    }

    /// 编译期覆盖中使用的记号，例如 `200_25`
    pub const fn token(self) -> &'static str {
        match self {
            Self::Mode100_12 => "100_12",
            Self::Mode100_25 => "100_25",
            Self::Mode200_12 => "200_12",
            Self::Mode200_25 => "200_25",
            Self::Mode200_50 => "200_50",
            Self::Mode200_70 => "200_70",
            Self::Mode400_20 => "400_20",
            Self::Mode400_25 => "400_25",
            Self::Mode400_50 => "400_50",
            Self::Mode400_110 => "400_110",
            Self::Mode800_30 => "800_30",
            Self::Mode800_35 => "800_35",
            Self::Mode800_50 => "800_50",
            Self::Mode800_110 => "800_110",
        }
    }
}

/// 量程，即 CTRL_REG4 的 FS 字段
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum L3g4200dScale {
    /// 250 度/秒
    Dps250 = 0x0,
    /// 500 度/秒
    Dps500 = 0x1,
    /// 2000 度/秒
    Dps2000 = 0x3,
}

impl L3g4200dScale {
    pub const ALL: [L3g4200dScale; 3] = [L3g4200dScale::Dps250, L3g4200dScale::Dps500, L3g4200dScale::Dps2000];

    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0x0 => Some(Self::Dps250),
            0x1 => Some(Self::Dps500),
            0x3 => Some(Self::Dps2000),
            _ => None,
        }
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }

    pub const fn dps(self) -> u16 {
        match self {
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps2000 => 2000,
        }
    }

    pub const fn ctrl_reg4(self) -> u8 {
        self.raw() << 4
    }

    /// 编译期覆盖中使用的记号，例如 `500`
    pub const fn token(self) -> &'static str {
        match self {
            Self::Dps250 => "250",
            Self::Dps500 => "500",
            Self::Dps2000 => "2000",
        }
    }
}

/// L3G4200D 设备参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct L3g4200dParams {
    /// I2C 总线
    pub i2c: I2cDev,
    /// 7 位 I2C 地址
    pub addr: SevenBitAddress,
    /// INT1 中断引脚
    pub int1_pin: GpioPin,
    /// INT2 中断引脚
    pub int2_pin: GpioPin,
    /// 工作模式
    pub mode: L3g4200dMode,
    /// 量程
    pub scale: L3g4200dScale,
}

/// 平台默认值
pub mod defaults {
    use super::{GpioPin, I2cDev, L3g4200dMode, L3g4200dScale, SevenBitAddress};

    pub const I2C: I2cDev = I2cDev::new(0);
    pub const ADDR: SevenBitAddress = 0x68;
    pub const INT1: GpioPin = GpioPin::new(0, 0);
    pub const INT2: GpioPin = GpioPin::new(0, 1);
    pub const MODE: L3g4200dMode = L3g4200dMode::Mode200_25;
    pub const SCALE: L3g4200dScale = L3g4200dScale::Dps500;
}

/// 默认参数构造器
///
/// 两级覆盖：
/// 1. [`custom`](Self::custom) 给出整条记录时，[`build`](Self::build) 原样返回它，忽略所有字段级覆盖；
/// 2. 否则每个字段独立决定：设置过就用覆盖值，没设置就用 [`defaults`] 中的平台默认值。
///
/// 所有方法都是 `const fn`，可以直接用来初始化静态表。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct L3g4200dParamsBuilder {
    i2c: Option<I2cDev>,
    addr: Option<SevenBitAddress>,
    int1_pin: Option<GpioPin>,
    int2_pin: Option<GpioPin>,
    mode: Option<L3g4200dMode>,
    scale: Option<L3g4200dScale>,
    custom: Option<L3g4200dParams>,
}

impl L3g4200dParamsBuilder {
    pub const fn new() -> Self {
        Self {
            i2c: None,
            addr: None,
            int1_pin: None,
            int2_pin: None,
            mode: None,
            scale: None,
            custom: None,
        }
    }

    pub const fn i2c(mut self, i2c: I2cDev) -> Self {
        self.i2c = Some(i2c);
        self
    }

    pub const fn addr(mut self, addr: SevenBitAddress) -> Self {
        self.addr = Some(addr);
        self
    }

    pub const fn int1_pin(mut self, pin: GpioPin) -> Self {
        self.int1_pin = Some(pin);
        self
    }

    pub const fn int2_pin(mut self, pin: GpioPin) -> Self {
        self.int2_pin = Some(pin);
        self
    }

    pub const fn mode(mut self, mode: L3g4200dMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub const fn scale(mut self, scale: L3g4200dScale) -> Self {
        self.scale = Some(scale);
        self
    }

    /// 整条记录覆盖
    pub const fn custom(mut self, params: L3g4200dParams) -> Self {
        self.custom = Some(params);
        self
    }

    pub const fn build(self) -> L3g4200dParams {
        if let Some(params) = self.custom {
            return params;
        }
        L3g4200dParams {
            i2c: match self.i2c {
                Some(v) => v,
                None => defaults::I2C,
            },
            addr: match self.addr {
                Some(v) => v,
                None => defaults::ADDR,
            },
            int1_pin: match self.int1_pin {
                Some(v) => v,
                None => defaults::INT1,
            },
            int2_pin: match self.int2_pin {
                Some(v) => v,
                None => defaults::INT2,
            },
            mode: match self.mode {
                Some(v) => v,
                None => defaults::MODE,
            },
            scale: match self.scale {
                Some(v) => v,
                None => defaults::SCALE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::overrides::{parse_mode, parse_scale, MODE_TOKENS, SCALE_TOKENS};

    fn platform_defaults() -> L3g4200dParams {
        L3g4200dParams {
            i2c: I2cDev::new(0),
            addr: 0x68,
            int1_pin: GpioPin::new(0, 0),
            int2_pin: GpioPin::new(0, 1),
            mode: L3g4200dMode::Mode200_25,
            scale: L3g4200dScale::Dps500,
        }
    }

    #[test]
    fn test_no_overrides() {
        assert_eq!(L3g4200dParamsBuilder::new().build(), platform_defaults());
        assert_eq!(L3g4200dParamsBuilder::default(), L3g4200dParamsBuilder::new());
    }

    #[test]
    fn test_single_field_override() {
        let params = L3g4200dParamsBuilder::new().addr(0x69).build();
        assert_eq!(params.addr, 0x69);
        // 其余字段保持平台默认值
        assert_eq!(
            params,
            L3g4200dParams {
                addr: 0x69,
                ..platform_defaults()
            }
        );
    }

    #[test]
    fn test_each_field_independent() {
        let base = platform_defaults();
        let cases = [
            (L3g4200dParamsBuilder::new().i2c(I2cDev::new(1)), L3g4200dParams { i2c: I2cDev::new(1), ..base }),
            (L3g4200dParamsBuilder::new().int1_pin(GpioPin::new(1, 4)), L3g4200dParams { int1_pin: GpioPin::new(1, 4), ..base }),
            (L3g4200dParamsBuilder::new().int2_pin(GpioPin::new(1, 5)), L3g4200dParams { int2_pin: GpioPin::new(1, 5), ..base }),
            (L3g4200dParamsBuilder::new().mode(L3g4200dMode::Mode800_110), L3g4200dParams { mode: L3g4200dMode::Mode800_110, ..base }),
            (L3g4200dParamsBuilder::new().scale(L3g4200dScale::Dps2000), L3g4200dParams { scale: L3g4200dScale::Dps2000, ..base }),
        ];
        for (builder, expected) in cases {
            assert_eq!(builder.build(), expected);
        }
    }

    #[test]
    fn test_custom_wins_over_fields() {
        let custom = L3g4200dParams {
            i2c: I2cDev::new(2),
            addr: 0x69,
            int1_pin: GpioPin::new(1, 0),
            int2_pin: GpioPin::new(1, 1),
            mode: L3g4200dMode::Mode100_12,
            scale: L3g4200dScale::Dps250,
        };
        // 字段级覆盖在整条覆盖前后设置都不影响结果
        let before = L3g4200dParamsBuilder::new().addr(0x10).scale(L3g4200dScale::Dps2000).custom(custom);
        let after = L3g4200dParamsBuilder::new().custom(custom).addr(0x10).mode(L3g4200dMode::Mode800_50);
        assert_eq!(before.build(), custom);
        assert_eq!(after.build(), custom);
    }

    #[test]
    fn test_const_build() {
        const PARAMS: L3g4200dParams = L3g4200dParamsBuilder::new().int2_pin(GpioPin::new(0, 7)).build();
        assert_eq!(PARAMS.int2_pin, GpioPin::new(0, 7));
        assert_eq!(PARAMS.int1_pin, defaults::INT1);
    }

    #[test]
    fn test_mode_raw_round_trip() {
        for mode in L3g4200dMode::ALL {
            assert_eq!(L3g4200dMode::from_raw(mode.raw()), Some(mode));
        }
        assert_eq!(L3g4200dMode::from_raw(0x2), None);
        assert_eq!(L3g4200dMode::from_raw(0x10), None);
    }

    #[test]
    fn test_mode_registers() {
        assert_eq!(L3g4200dMode::Mode100_25.data_rate_hz(), 100);
        assert_eq!(L3g4200dMode::Mode200_25.data_rate_hz(), 200);
        assert_eq!(L3g4200dMode::Mode400_110.data_rate_hz(), 400);
        assert_eq!(L3g4200dMode::Mode800_30.data_rate_hz(), 800);
        assert_eq!(L3g4200dMode::Mode200_25.ctrl_reg1(), 0x5f);
        assert_eq!(L3g4200dScale::Dps2000.ctrl_reg4(), 0x30);
    }

    #[test]
    fn test_scale_raw_round_trip() {
        for scale in L3g4200dScale::ALL {
            assert_eq!(L3g4200dScale::from_raw(scale.raw()), Some(scale));
        }
        assert_eq!(L3g4200dScale::from_raw(0x2), None);
        assert_eq!(L3g4200dScale::Dps500.dps(), 500);
    }

    #[test]
    fn test_override_tokens_match_enums() {
        // 编译期覆盖的记号表必须与枚举一致
        assert_eq!(MODE_TOKENS.len(), L3g4200dMode::ALL.len());
        for (token, raw) in MODE_TOKENS {
            let mode = L3g4200dMode::from_raw(raw).unwrap();
            assert_eq!(mode.token(), token);
            assert!(token.starts_with(&mode.data_rate_hz().to_string()));
        }
        assert_eq!(SCALE_TOKENS.len(), L3g4200dScale::ALL.len());
        for (token, raw) in SCALE_TOKENS {
            let scale = L3g4200dScale::from_raw(raw).unwrap();
            assert_eq!(scale.token(), token);
            assert_eq!(token, scale.dps().to_string());
        }
    }

    #[test]
    fn test_token_parses_back() {
        for mode in L3g4200dMode::ALL {
            assert_eq!(parse_mode(mode.token()), Ok(mode.raw()));
        }
        for scale in L3g4200dScale::ALL {
            assert_eq!(parse_scale(scale.token()), Ok(scale.raw()));
        }
        assert_eq!(L3g4200dMode::Mode400_110.token(), "400_110");
        assert_eq!(L3g4200dScale::Dps2000.token(), "2000");
    }
}
