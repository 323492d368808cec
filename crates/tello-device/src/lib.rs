//! # Tello Device
//!
//! 设备能力抽象层（无硬件依赖）。
//!
//! ## 模块
//!
//! - `client`: 设备客户端能力接口（[`DeviceClient`]）
//! - `config`: 客户端构造配置（[`DeviceConfig`]）
//! - `telemetry`: 遥测字段、模式与整形规则
//! - `frame`: 视频帧载荷与读取句柄
//! - `error`: 设备层错误类型
//!
//! 本 crate 只定义类型与接口，不包含任何网络或解码实现：
//! 实际与无人机对话的 SDK 客户端在接口后面注入。

pub mod client;
pub mod config;
pub mod error;
pub mod frame;
pub mod telemetry;

// 重新导出常用类型
pub use client::DeviceClient;
pub use config::DeviceConfig;
pub use error::DeviceError;
pub use frame::{Frame, FrameRead};
pub use telemetry::{FieldSpec, RawSample, TelemetryField, TelemetrySchema, TelemetryValue, ValueKind};
