//! L3G4200D 默认参数表
//!
//! 集成方在编译前设置的环境变量由 `build.rs` 转换成 `FIELD_OVERRIDES`（字段级覆盖）
//! 和 `CUSTOM_PARAMS`（整表覆盖），这里把它们组装成最终的静态表。
//! 整表覆盖存在时，字段级覆盖全部被忽略。

use super::{L3g4200dMode, L3g4200dParams, L3g4200dParamsBuilder, L3g4200dScale};
use crate::config::overrides::DEFAULT_NAME;
use crate::registry::{DeviceTable, RegistryInfo};

// 生成代码使用的名字
#[allow(unused_imports)]
use super::I2cDev;
#[allow(unused_imports)]
use crate::config::pins::GpioPin;

/// 生成代码中的原始模式值，非法值在编译期报错
#[allow(dead_code)]
const fn mode_from_raw(raw: u8) -> L3g4200dMode {
    match L3g4200dMode::from_raw(raw) {
        Some(mode) => mode,
        None => panic!("invalid L3G4200D mode"),
    }
}

/// 生成代码中的原始量程值，非法值在编译期报错
#[allow(dead_code)]
const fn scale_from_raw(raw: u8) -> L3g4200dScale {
    match L3g4200dScale::from_raw(raw) {
        Some(scale) => scale,
        None => panic!("invalid L3G4200D scale"),
    }
}

include!(concat!(env!("OUT_DIR"), "/l3g4200d_params.rs"));

/// 应用字段级覆盖后的默认记录
pub const L3G4200D_PARAMS_DEFAULT: L3g4200dParams = FIELD_OVERRIDES.build();

/// 参数表与元数据表，两者长度均为 [`L3G4200D_NUMOF`]
pub static L3G4200D: DeviceTable<L3g4200dParams, L3G4200D_NUMOF> = match CUSTOM_PARAMS {
    Some(entries) => DeviceTable::from_entries(entries),
    None => DeviceTable::new(
        [L3G4200D_PARAMS_DEFAULT; L3G4200D_NUMOF],
        [RegistryInfo::new(DEFAULT_NAME); L3G4200D_NUMOF],
    ),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::l3g4200d::defaults;

    #[test]
    fn test_table_parity() {
        assert_eq!(L3G4200D.params().len(), L3G4200D.info().len());
        assert_eq!(L3G4200D.len(), L3G4200D_NUMOF);
        assert!(!L3G4200D.is_empty());
    }

    #[test]
    fn test_names_non_empty() {
        for info in L3G4200D.info() {
            assert!(!info.name.is_empty());
        }
    }

    #[test]
    fn test_default_build() {
        // 未设置任何覆盖时：一条记录，全部为平台默认值
        if CUSTOM_PARAMS.is_some() || FIELD_OVERRIDES != L3g4200dParamsBuilder::new() {
            return;
        }
        assert_eq!(L3G4200D_NUMOF, 1);
        assert_eq!(L3G4200D.info()[0].name, "l3g4200d");

        let params = L3G4200D.params()[0];
        assert_eq!(params, L3G4200D_PARAMS_DEFAULT);
        assert_eq!(params.i2c, defaults::I2C);
        assert_eq!(params.addr, 0x68);
        assert_eq!(params.int1_pin, GpioPin::new(0, 0));
        assert_eq!(params.int2_pin, GpioPin::new(0, 1));
        assert_ne!(params.int1_pin, params.int2_pin);
        assert_eq!(params.mode, L3g4200dMode::Mode200_25);
        assert_eq!(params.scale, L3g4200dScale::Dps500);
    }

    #[test]
    fn test_table_follows_override_source() {
        match CUSTOM_PARAMS {
            Some(entries) => {
                for (i, (params, name)) in entries.iter().enumerate() {
                    assert_eq!(L3G4200D.params()[i], *params);
                    assert_eq!(L3G4200D.info()[i].name, *name);
                }
            }
            None => {
                assert!(L3G4200D.params().iter().all(|p| *p == FIELD_OVERRIDES.build()));
            }
        }
    }

    #[test]
    fn test_raw_helpers() {
        assert_eq!(mode_from_raw(0x5), L3g4200dMode::Mode200_25);
        assert_eq!(scale_from_raw(0x3), L3g4200dScale::Dps2000);
    }

    #[test]
    #[should_panic(expected = "invalid L3G4200D mode")]
    fn test_invalid_raw_mode() {
        mode_from_raw(0x2);
    }
}
