//! 设备层错误类型定义

use thiserror::Error;

/// 设备客户端错误类型
///
/// 底层 SDK 客户端在执行指令时暴露的失败。控制器不翻译、
/// 不重试这些错误，原样向调用方传播。
#[derive(Error, Debug)]
pub enum DeviceError {
    /// 传输 I/O 错误
    #[error("Device I/O error: {0}")]
    Io(String),

    /// 指令被无人机拒绝（如未就绪、低电量保护）
    #[error("Command rejected by device: {0}")]
    Rejected(String),

    /// 指令响应超时
    #[error("No response from device after {timeout_ms}ms")]
    Timeout {
        /// 超时时间（毫秒）
        timeout_ms: u64,
    },

    /// 视频流尚未开启
    #[error("Video stream not started")]
    StreamNotStarted,
}

impl DeviceError {
    /// 创建 I/O 错误
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// 创建指令拒绝错误
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    /// 创建超时错误
    pub fn timeout(timeout_ms: u64) -> Self {
        Self::Timeout { timeout_ms }
    }

    /// 是否可重试
    ///
    /// 超时和 I/O 错误重新执行可能会成功；拒绝类错误不会。
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Timeout { .. })
    }
}
