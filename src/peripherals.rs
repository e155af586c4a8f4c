//! 外设描述模块
//!
//! 每个物理外设实例对应一条静态描述，按外设编号索引，启动后只读。

pub mod adc;
pub mod pwm;
pub mod registers;
pub mod spi;

// 重新导出常用类型
pub use adc::{AdcRes, ADC_NUMOF};
pub use pwm::{get_pwm, pwm_config, PwmConf, PWM_CHAN_NUMOF, PWM_CONFIG, PWM_NUMOF};
pub use spi::{get_spi, spi_config, SpiClk, SpiConf, SPI_CONFIG, SPI_NUMOF};
