//! # Tello SDK
//!
//! Tello 无人机会话控制的统一入口。
//!
//! ## 架构设计
//!
//! 本 SDK 采用分层架构，从底层到高层：
//!
//! - **设备层** (`tello-device`): 设备客户端能力接缝、配置与遥测类型
//! - **客户端层** (`tello-client`): 会话控制器、受护指令、遥测访问器
//!
//! 实际的无人机协议（UDP 指令、状态广播、视频解码）不在本 SDK 内：
//! 它由实现 [`DeviceClient`] 的外部客户端提供，经由工厂注入。
//!
//! ## 快速开始
//!
//! ```rust,ignore
//! use tello_sdk::prelude::*;
//!
//! tello_sdk::init_tracing();
//!
//! let mut tello = TelloBuilder::new()
//!     .docker(std::env::var("IN_CONTAINER").is_ok())
//!     .build(|config| UdpDeviceClient::open(config))?;
//!
//! tello.connect_with(ConnectOptions::with_stream())?;
//! tello.takeoff()?;
//! println!("battery: {}%", tello.battery()?);
//! tello.land()?;
//! ```

pub mod prelude;

mod logging;

pub use logging::init_tracing;

// --- 用户以此为界 ---
// 以下是通过 Facade Pattern 提供的公共 API

// 设备层常用类型
pub use tello_device::{
    DeviceClient, DeviceConfig, DeviceError, FieldSpec, Frame, FrameRead, RawSample,
    TelemetryField, TelemetrySchema, TelemetryValue, ValueKind,
};

// 客户端层（推荐的入口点）
pub use tello_client::{
    CommandLog, CommandSpec, ConnectOptions, LogLines, StateKey, Tello, TelloBuilder, TelloError,
    TracingLog,
};
