//! Prelude - 常用类型的便捷导入
//!
//! 大多数用户应该使用这个模块来导入常用类型：
//!
//! ```rust
//! use tello_sdk::prelude::*;
//! ```

// 客户端层（推荐使用）
pub use tello_client::{ConnectOptions, Tello, TelloBuilder};

// 设备层（注入客户端时需要的类型）
pub use tello_device::{DeviceClient, DeviceConfig};

// 遥测模式
pub use tello_device::{FieldSpec, TelemetryField, TelemetrySchema};

// 错误类型
pub use tello_client::TelloError;
pub use tello_device::DeviceError;
