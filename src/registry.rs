//! 设备注册表元数据
//!
//! 每个驱动类型有一张参数表和一张等长的元数据表，下标 `i` 描述同一个设备实例。
//! 两张表放在同一个 [`DeviceTable`] 里，长度由同一个常量泛型 `N` 决定。
//! 注册表本身是外部组件，通过 [`DeviceRegistry`] 接入。

use core::fmt;
use thiserror::Error;

/// 注册表元数据
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryInfo {
    /// 显示名
    pub name: &'static str,
}

impl RegistryInfo {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

/// 参数表与元数据表
#[derive(Debug)]
pub struct DeviceTable<P, const N: usize> {
    params: [P; N],
    info: [RegistryInfo; N],
}

impl<P: Copy, const N: usize> DeviceTable<P, N> {
    pub const fn new(params: [P; N], info: [RegistryInfo; N]) -> Self {
        Self { params, info }
    }

    /// 由 `(参数, 显示名)` 列表构造
    ///
    /// # Panics
    /// `N` 为 0 时 panic，在 `static` 初始化中表现为编译错误
    pub const fn from_entries(entries: [(P, &'static str); N]) -> Self {
        assert!(N > 0, "DeviceTable::from_entries 需要至少一条记录");
        let mut params = [entries[0].0; N];
        let mut info = [RegistryInfo::new(entries[0].1); N];
        let mut i = 1;
        while i < N {
            params[i] = entries[i].0;
            info[i] = RegistryInfo::new(entries[i].1);
            i += 1;
        }
        Self { params, info }
    }
}

impl<P, const N: usize> DeviceTable<P, N> {
    pub const fn params(&self) -> &[P; N] {
        &self.params
    }

    pub const fn info(&self) -> &[RegistryInfo; N] {
        &self.info
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// 按下标配对遍历
    pub fn iter(&self) -> impl Iterator<Item = (&RegistryInfo, &P)> + '_ {
        self.info.iter().zip(self.params.iter())
    }
}

/// 外部设备注册表
pub trait DeviceRegistry<P: 'static> {
    type Error: fmt::Debug;

    /// 注册一个设备实例
    ///
    /// # 参数
    /// * `index` - 实例在参数表中的下标
    /// * `info` - 实例的元数据
    /// * `params` - 实例的参数
    fn register(&mut self, index: usize, info: &'static RegistryInfo, params: &'static P) -> Result<(), Self::Error>;
}

/// 自动注册错误
#[derive(Debug, Error)]
pub enum AutoInitError<E: fmt::Debug> {
    #[error("设备 {name} (#{index}) 注册失败: {error:?}")]
    Register {
        index: usize,
        name: &'static str,
        error: E,
    },
}

/// 将整张表按顺序交给注册表
///
/// 遇到第一个失败即停止。
///
/// # 返回
/// * `Ok(usize)` - 已注册的实例数
/// * `Err(AutoInitError)` - 注册失败的实例及原因
pub fn auto_init<P, R, const N: usize>(
    table: &'static DeviceTable<P, N>,
    registry: &mut R,
) -> Result<usize, AutoInitError<R::Error>>
where
    P: 'static,
    R: DeviceRegistry<P>,
{
    for (index, (info, params)) in table.iter().enumerate() {
        log::debug!("注册设备 #{index}: {}", info.name);
        if let Err(error) = registry.register(index, info, params) {
            log::error!("设备 {} (#{index}) 注册失败: {error:?}", info.name);
            return Err(AutoInitError::Register {
                index,
                name: info.name,
                error,
            });
        }
    }
    log::info!("已注册 {N} 个设备");
    Ok(N)
}
