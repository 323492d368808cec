//! 会话控制器错误类型
//!
//! 三类失败：连接前提不满足、模式与客户端配置不匹配、
//! 设备指令失败（原样透传，不翻译）。

use tello_device::{DeviceError, TelemetryField, ValueKind};
use thiserror::Error;

/// 会话控制器错误
#[derive(Error, Debug)]
pub enum TelloError {
    /// 未连接时调用了需要会话的操作
    #[error("Tello is not connected")]
    NotConnected,

    /// 模式声明了字段，但客户端不提供对应的读取原语
    #[error("No telemetry reader for `{field}` on the device client")]
    UnsupportedTelemetry {
        /// 声明的字段
        field: TelemetryField,
    },

    /// 客户端返回的采样值无法整形成声明的类型
    #[error("Telemetry sample for `{field}` cannot be read as {expected}")]
    TelemetryType {
        /// 声明的字段
        field: TelemetryField,
        /// 声明的类型
        expected: ValueKind,
    },

    /// 设备指令失败（原样传播）
    #[error(transparent)]
    Device(#[from] DeviceError),
}

impl TelloError {
    /// 是否为连接前提失败
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::NotConnected)
    }

    /// 是否为配置错误（模式与客户端不匹配）
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedTelemetry { .. } | Self::TelemetryType { .. }
        )
    }

    /// 是否为设备层失败
    pub fn is_device(&self) -> bool {
        matches!(self, Self::Device(_))
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TelloError>;
