//! 遥测访问器表
//!
//! 连接成功后，控制器把遥测模式物化成一张 `字段 -> 访问器` 的
//! 显式映射。访问器捕获声明的整形类型，调用时经由控制器持有的
//! 客户端引用取数——每次成功连接都会重建这张表，保证访问器
//! 绑定在当前会话的客户端上。
//!
//! 遥测读取是轻量操作，不走受护指令的日志协议。

use std::collections::BTreeMap;

use tello_device::{DeviceClient, TelemetryField, TelemetrySchema, TelemetryValue, ValueKind};

use crate::error::TelloError;

/// 单个遥测访问器
///
/// 零参数读取操作：查客户端的读取原语，取原始采样值，
/// 按声明类型整形。
#[derive(Debug, Clone, Copy)]
pub struct TelemetryAccessor {
    field: TelemetryField,
    kind: ValueKind,
}

impl TelemetryAccessor {
    /// 声明的字段
    pub fn field(&self) -> TelemetryField {
        self.field
    }

    /// 声明的整形类型
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// 经由客户端读取一次
    ///
    /// # Errors
    ///
    /// - [`TelloError::UnsupportedTelemetry`]: 客户端不提供该字段
    ///   的读取原语（模式与客户端不匹配）
    /// - [`TelloError::TelemetryType`]: 采样值无法整形成声明类型
    pub fn read<C: DeviceClient>(&self, client: &C) -> Result<TelemetryValue, TelloError> {
        let raw = client
            .read_raw(self.field)
            .ok_or(TelloError::UnsupportedTelemetry { field: self.field })?;

        self.kind.coerce(&raw).ok_or(TelloError::TelemetryType {
            field: self.field,
            expected: self.kind,
        })
    }
}

/// 访问器表
///
/// 未连接时为空表；每次成功连接后用模式重建。
#[derive(Debug, Default)]
pub(crate) struct AccessorTable {
    entries: BTreeMap<TelemetryField, TelemetryAccessor>,
}

impl AccessorTable {
    /// 空表（未连接状态）
    pub(crate) fn empty() -> Self {
        AccessorTable {
            entries: BTreeMap::new(),
        }
    }

    /// 按模式物化访问器表
    ///
    /// 同一字段重复声明时，后声明的类型生效。
    pub(crate) fn materialize(schema: &TelemetrySchema) -> Self {
        let mut entries = BTreeMap::new();
        for spec in schema.iter() {
            entries.insert(
                spec.field,
                TelemetryAccessor {
                    field: spec.field,
                    kind: spec.kind,
                },
            );
        }
        AccessorTable { entries }
    }

    /// 查找某字段的访问器
    pub(crate) fn get(&self, field: TelemetryField) -> Option<&TelemetryAccessor> {
        self.entries.get(&field)
    }

    /// 表中访问器个数
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空表
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
