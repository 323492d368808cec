//! 设备客户端能力接口
//!
//! [`DeviceClient`] 是控制器与外部 SDK 客户端之间的接缝：
//! 真正的无人机协议（UDP 指令、状态广播、视频流）全部在接口
//! 后面实现，控制器只通过这些公开操作组合能力。
//!
//! # 遥测读取
//!
//! [`read_raw`](DeviceClient::read_raw) 按字段返回客户端缓存的
//! 最新采样值。返回 `None` 表示该客户端不提供此字段——这属于
//! 模式与客户端的配置不匹配，由上层按配置错误报出。读取本身
//! 不做网络往返，因此没有失败通道。

use crate::error::DeviceError;
use crate::frame::FrameRead;
use crate::telemetry::{RawSample, TelemetryField};

/// 设备客户端能力
///
/// 指令类操作（`connect`/`takeoff`/`land`/`stream_on`）是阻塞的：
/// 实现应在指令被确认或失败后才返回。
pub trait DeviceClient {
    /// 进入 SDK 模式并建立会话
    fn connect(&mut self) -> Result<(), DeviceError>;

    /// 起飞
    fn takeoff(&mut self) -> Result<(), DeviceError>;

    /// 降落
    fn land(&mut self) -> Result<(), DeviceError>;

    /// 开启视频流
    fn stream_on(&mut self) -> Result<(), DeviceError>;

    /// 取回帧读取句柄
    ///
    /// # Errors
    ///
    /// - [`DeviceError::StreamNotStarted`]: 视频流未开启
    fn frame_read(&self) -> Result<FrameRead, DeviceError>;

    /// 读取某字段的原始采样值
    ///
    /// 返回 `None` 表示该客户端不提供此字段。
    fn read_raw(&self, field: TelemetryField) -> Option<RawSample>;
}
