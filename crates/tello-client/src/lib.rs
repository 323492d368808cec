//! 会话控制器接口模块
//!
//! 本模块提供 Tello 无人机的用户友好接口，包括：
//! - 会话状态管理（连接前提、状态映射）
//! - 受护指令执行（前/后日志、原样错误传播）
//! - 按模式物化的遥测访问器表
//! - Builder 链式构造
//!
//! # 使用场景
//!
//! 这是大多数用户应该使用的模块。实际与无人机通信的 SDK 客户端
//! 通过 [`tello_device::DeviceClient`] 接缝注入，本模块只做会话
//! 编排与可观测性。
//!
//! # 执行模型
//!
//! 单线程、同步、阻塞：每个操作完整执行完（或失败）才把控制权
//! 还给调用方。核心不持锁、没有异步挂起点；客户端内部的后台
//! I/O 对核心是黑盒。

pub mod builder;
pub mod command;
pub mod error;
pub mod state;
pub mod telemetry;
pub mod tello;

// 重新导出常用类型
pub use builder::TelloBuilder;
pub use command::{CommandLog, CommandSpec, LogLines, TracingLog};
pub use error::{Result, TelloError};
pub use state::{SessionState, StateKey};
pub use telemetry::TelemetryAccessor;
pub use tello::{ConnectOptions, Tello};
