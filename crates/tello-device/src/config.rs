//! 设备连接配置
//!
//! 无人机 SDK 客户端的构造参数。所有字段都是显式的强类型字段，
//! 包括容器环境开关（`docker`），不使用任何进程级全局状态。

use std::time::Duration;

/// Tello 默认指令地址
pub const DEFAULT_HOST: &str = "192.168.10.1";

/// 默认指令端口（UDP）
pub const DEFAULT_CONTROL_PORT: u16 = 8889;

/// 默认状态广播端口（UDP）
pub const DEFAULT_STATE_PORT: u16 = 8890;

/// 默认视频流端口（UDP）
pub const DEFAULT_VIDEO_PORT: u16 = 11111;

/// 默认指令响应超时
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_secs(7);

/// 设备客户端配置
///
/// 传递给设备客户端工厂的完整构造参数。配置是实例级的：
/// 同一进程内可以用不同配置创建多个客户端，互不影响。
///
/// # 示例
///
/// ```rust
/// use tello_device::DeviceConfig;
///
/// let config = DeviceConfig {
///     docker: true,
///     ..DeviceConfig::default()
/// };
/// assert_eq!(config.host, "192.168.10.1");
/// assert!(config.docker);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceConfig {
    /// 无人机指令地址
    pub host: String,
    /// 指令端口
    pub control_port: u16,
    /// 状态广播端口
    pub state_port: u16,
    /// 视频流端口
    pub video_port: u16,
    /// 指令响应超时
    pub response_timeout: Duration,
    /// 容器环境模式
    ///
    /// 在容器内运行时调整客户端的视频流绑定行为（无本机显示环境）。
    /// 实例级开关，不修改任何全局状态。
    pub docker: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DeviceConfig {
            host: DEFAULT_HOST.to_string(),
            control_port: DEFAULT_CONTROL_PORT,
            state_port: DEFAULT_STATE_PORT,
            video_port: DEFAULT_VIDEO_PORT,
            response_timeout: DEFAULT_RESPONSE_TIMEOUT,
            docker: false,
        }
    }
}
