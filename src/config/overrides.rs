//! 编译期覆盖值的解析规则
//!
//! 集成方在编译前通过环境变量覆盖 L3G4200D 默认参数，`build.rs` 用这里的
//! 函数解析变量值，再用 [`render`] 生成覆盖代码。本文件只依赖 `core` 和
//! `thiserror`，会被 `build.rs` 通过 `#[path]` 直接引入。

use core::fmt::{self, Write};

use thiserror::Error;

/// 覆盖值解析错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OverrideError {
    #[error("值为空")]
    Empty,

    #[error("无效的无符号整数")]
    InvalidInteger,

    #[error("数值 {value} 超出范围（最大 {max}）")]
    OutOfRange { value: u32, max: u32 },

    #[error("无效引脚，应为 `port:pin`、`port,pin` 或 `GPIO_PIN(port, pin)`")]
    InvalidPin,

    #[error("未知的工作模式")]
    UnknownMode,

    #[error("未知的量程")]
    UnknownScale,

    #[error("应为 `key=value`")]
    MalformedPair,

    #[error("未知的键")]
    UnknownKey,

    #[error("键 `{0}` 重复出现")]
    DuplicateKey(&'static str),

    #[error("自定义记录缺少 `{0}`")]
    MissingField(&'static str),

    #[error("自定义记录列表为空")]
    NoRecords,
}

pub type Result<T> = core::result::Result<T, OverrideError>;

/// 工作模式记号与 CTRL_REG1 中 DR/BW 字段（高四位）的对应关系
pub const MODE_TOKENS: [(&str, u8); 14] = [
    ("100_12", 0x0),
    ("100_25", 0x1),
    ("200_12", 0x4),
    ("200_25", 0x5),
    ("200_50", 0x6),
    ("200_70", 0x7),
    ("400_20", 0x8),
    ("400_25", 0x9),
    ("400_50", 0xa),
    ("400_110", 0xb),
    ("800_30", 0xc),
    ("800_35", 0xd),
    ("800_50", 0xe),
    ("800_110", 0xf),
];

/// 量程记号与 CTRL_REG4 中 FS 字段的对应关系
pub const SCALE_TOKENS: [(&str, u8); 3] = [("250", 0x0), ("500", 0x1), ("2000", 0x3)];

/// 自定义记录中的键
pub const RECORD_KEYS: [&str; 7] = ["i2c", "addr", "int1", "int2", "mode", "scale", "name"];

/// 默认的注册表显示名
pub const DEFAULT_NAME: &str = "l3g4200d";

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> &'a str {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &s[prefix.len()..],
        _ => s,
    }
}

fn strip_suffix_ci<'a>(s: &'a str, suffix: &str) -> &'a str {
    match s.len().checked_sub(suffix.len()).and_then(|at| s.get(at..).map(|tail| (at, tail))) {
        Some((at, tail)) if tail.eq_ignore_ascii_case(suffix) => &s[..at],
        _ => s,
    }
}

/// 解析无符号整数，支持 `0x`、`0o`、`0b` 前缀
pub fn parse_uint(s: &str) -> Result<u32> {
    let s = s.trim();
    if s.is_empty() {
        return Err(OverrideError::Empty);
    }
    let (digits, radix) = match s.as_bytes() {
        [b'0', b'x' | b'X', ..] => (&s[2..], 16),
        [b'0', b'o' | b'O', ..] => (&s[2..], 8),
        [b'0', b'b' | b'B', ..] => (&s[2..], 2),
        _ => (s, 10),
    };
    u32::from_str_radix(digits, radix).map_err(|_| OverrideError::InvalidInteger)
}

/// 解析 `u8`，超出范围时返回 [`OverrideError::OutOfRange`]
pub fn parse_u8(s: &str) -> Result<u8> {
    let value = parse_uint(s)?;
    u8::try_from(value).map_err(|_| OverrideError::OutOfRange {
        value,
        max: u8::MAX as u32,
    })
}

/// 解析引脚，返回 `(port, pin)`
pub fn parse_pin(s: &str) -> Result<(u8, u8)> {
    let s = strip_prefix_ci(s.trim(), "GPIO_PIN").trim();
    let s = match s.strip_prefix('(') {
        Some(inner) => inner.strip_suffix(')').ok_or(OverrideError::InvalidPin)?,
        None => s,
    };
    let (port, pin) = s.split_once([':', ',']).ok_or(OverrideError::InvalidPin)?;
    if port.trim().is_empty() || pin.trim().is_empty() {
        return Err(OverrideError::InvalidPin);
    }
    Ok((parse_u8(port)?, parse_u8(pin)?))
}

/// 解析工作模式，返回 DR/BW 原始值
///
/// 接受 `200_25`、`MODE_200_25` 和 `L3G4200D_MODE_200_25`。
pub fn parse_mode(s: &str) -> Result<u8> {
    let s = strip_prefix_ci(s.trim(), "L3G4200D_");
    let s = strip_prefix_ci(s, "MODE_");
    MODE_TOKENS
        .iter()
        .find(|(token, _)| *token == s)
        .map(|&(_, raw)| raw)
        .ok_or(OverrideError::UnknownMode)
}

/// 解析量程，返回 FS 原始值
///
/// 接受 `500`、`500DPS`、`SCALE_500DPS` 和 `L3G4200D_SCALE_500DPS`。
pub fn parse_scale(s: &str) -> Result<u8> {
    let s = strip_prefix_ci(s.trim(), "L3G4200D_");
    let s = strip_prefix_ci(s, "SCALE_");
    let s = strip_suffix_ci(s, "DPS");
    SCALE_TOKENS
        .iter()
        .find(|(token, _)| *token == s)
        .map(|&(_, raw)| raw)
        .ok_or(OverrideError::UnknownScale)
}

/// 一条完整的自定义参数记录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomRecord<'a> {
    pub i2c: u8,
    pub addr: u8,
    pub int1: (u8, u8),
    pub int2: (u8, u8),
    pub mode: u8,
    pub scale: u8,
    pub name: &'a str,
}

#[derive(Default)]
struct PartialRecord<'a> {
    i2c: Option<u8>,
    addr: Option<u8>,
    int1: Option<(u8, u8)>,
    int2: Option<(u8, u8)>,
    mode: Option<u8>,
    scale: Option<u8>,
    name: Option<&'a str>,
}

fn set_once<T>(slot: &mut Option<T>, key: &'static str, value: T) -> Result<()> {
    if slot.is_some() {
        return Err(OverrideError::DuplicateKey(key));
    }
    *slot = Some(value);
    Ok(())
}

/// 按空白拆分 `key=value`，括号内的空白不拆分
fn pairs(s: &str) -> impl Iterator<Item = &str> {
    let mut depth = 0u32;
    s.split(move |c: char| {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        depth == 0 && c.is_whitespace()
    })
    .filter(|t| !t.is_empty())
}

/// 解析一条自定义记录，例如 `i2c=0 addr=0x69 int1=0:2 int2=0,3 mode=400_50 scale=2000`
///
/// 键值对之间用空白分隔，引脚值可以使用 [`parse_pin`] 接受的任意写法。
/// 自定义记录整体替换默认记录，因此除 `name` 外的每个键都必须给出。
pub fn parse_record(s: &str) -> Result<CustomRecord<'_>> {
    let mut record = PartialRecord::default();

    for pair in pairs(s) {
        let (key, value) = pair.split_once('=').ok_or(OverrideError::MalformedPair)?;
        let key = RECORD_KEYS
            .iter()
            .copied()
            .find(|k| k.eq_ignore_ascii_case(key))
            .ok_or(OverrideError::UnknownKey)?;
        match key {
            "i2c" => set_once(&mut record.i2c, key, parse_u8(value)?)?,
            "addr" => set_once(&mut record.addr, key, parse_u8(value)?)?,
            "int1" => set_once(&mut record.int1, key, parse_pin(value)?)?,
            "int2" => set_once(&mut record.int2, key, parse_pin(value)?)?,
            "mode" => set_once(&mut record.mode, key, parse_mode(value)?)?,
            "scale" => set_once(&mut record.scale, key, parse_scale(value)?)?,
            _ => {
                if value.is_empty() {
                    return Err(OverrideError::Empty);
                }
                set_once(&mut record.name, key, value)?
            }
        }
    }

    Ok(CustomRecord {
        i2c: record.i2c.ok_or(OverrideError::MissingField("i2c"))?,
        addr: record.addr.ok_or(OverrideError::MissingField("addr"))?,
        int1: record.int1.ok_or(OverrideError::MissingField("int1"))?,
        int2: record.int2.ok_or(OverrideError::MissingField("int2"))?,
        mode: record.mode.ok_or(OverrideError::MissingField("mode"))?,
        scale: record.scale.ok_or(OverrideError::MissingField("scale"))?,
        name: record.name.unwrap_or(DEFAULT_NAME),
    })
}

/// 按 `;` 拆分自定义记录列表，忽略空段
pub fn records(s: &str) -> impl Iterator<Item = Result<CustomRecord<'_>>> {
    s.split(';').filter(|r| !r.trim().is_empty()).map(parse_record)
}

/// 字段级覆盖值，`None` 表示沿用平台默认值
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldOverrides {
    pub i2c: Option<u8>,
    pub addr: Option<u8>,
    pub int1: Option<(u8, u8)>,
    pub int2: Option<(u8, u8)>,
    pub mode: Option<u8>,
    pub scale: Option<u8>,
}

/// 生成 `l3g4200d_params.rs` 的内容
///
/// 生成的代码定义 `FIELD_OVERRIDES`、`L3G4200D_NUMOF` 和 `CUSTOM_PARAMS`，
/// 由 `drivers::l3g4200d::params` 通过 `include!` 引入。
///
/// # 参数
/// - `out`: 输出目标
/// - `fields`: 字段级覆盖
/// - `records`: 整表覆盖的记录，为空表示没有整表覆盖
///
/// # 返回
/// 只在 `out` 写入失败时返回错误
pub fn render(out: &mut impl Write, fields: &FieldOverrides, records: &[CustomRecord<'_>]) -> fmt::Result {
    writeln!(out, "// @generated by build.rs from L3G4200D_* environment variables\n")?;

    write!(out, "const FIELD_OVERRIDES: L3g4200dParamsBuilder = L3g4200dParamsBuilder::new()")?;
    if let Some(bus) = fields.i2c {
        write!(out, "\n    .i2c(I2cDev::new({bus}))")?;
    }
    if let Some(addr) = fields.addr {
        write!(out, "\n    .addr({addr:#04x})")?;
    }
    if let Some((port, pin)) = fields.int1 {
        write!(out, "\n    .int1_pin(GpioPin::new({port}, {pin}))")?;
    }
    if let Some((port, pin)) = fields.int2 {
        write!(out, "\n    .int2_pin(GpioPin::new({port}, {pin}))")?;
    }
    if let Some(mode) = fields.mode {
        write!(out, "\n    .mode(mode_from_raw({mode:#x}))")?;
    }
    if let Some(scale) = fields.scale {
        write!(out, "\n    .scale(scale_from_raw({scale:#x}))")?;
    }
    writeln!(out, ";\n")?;

    writeln!(out, "/// 实例数")?;
    writeln!(out, "pub const L3G4200D_NUMOF: usize = {};\n", records.len().max(1))?;
    write!(out, "const CUSTOM_PARAMS: Option<[(L3g4200dParams, &str); L3G4200D_NUMOF]> = ")?;
    if records.is_empty() {
        return writeln!(out, "None;");
    }
    writeln!(out, "Some([")?;
    for record in records {
        render_record(out, record)?;
    }
    writeln!(out, "]);")
}

// 整表覆盖也经过 FIELD_OVERRIDES，由构建器决定优先级
fn render_record(out: &mut impl Write, r: &CustomRecord<'_>) -> fmt::Result {
    writeln!(out, "    (")?;
    writeln!(out, "        FIELD_OVERRIDES")?;
    writeln!(out, "            .custom(L3g4200dParams {{")?;
    writeln!(out, "                i2c: I2cDev::new({}),", r.i2c)?;
    writeln!(out, "                addr: {:#04x},", r.addr)?;
    writeln!(out, "                int1_pin: GpioPin::new({}, {}),", r.int1.0, r.int1.1)?;
    writeln!(out, "                int2_pin: GpioPin::new({}, {}),", r.int2.0, r.int2.1)?;
    writeln!(out, "                mode: mode_from_raw({:#x}),", r.mode)?;
    writeln!(out, "                scale: scale_from_raw({:#x}),", r.scale)?;
    writeln!(out, "            }})")?;
    writeln!(out, "            .build(),")?;
    writeln!(out, "        {:?},", r.name)?;
    writeln!(out, "    ),")
}
