//! Builder 模式实现
//!
//! 链式配置并创建 [`Tello`] 控制器。配置以强类型字段收集，
//! 最终整体交给调用方提供的设备客户端工厂——控制器对配置内容
//! 不做解释，只负责转交。

use std::sync::Arc;

use tello_device::{DeviceClient, DeviceConfig, DeviceError, TelemetrySchema};

use crate::command::{CommandLog, TracingLog};
use crate::error::{Result, TelloError};
use crate::tello::Tello;

/// Tello Builder（链式构造）
///
/// # 示例
///
/// ```rust,ignore
/// use tello_client::TelloBuilder;
///
/// let tello = TelloBuilder::new()
///     .host("192.168.10.1")
///     .response_timeout(Duration::from_secs(5))
///     .docker(true)
///     .build(|config| UdpDeviceClient::open(config))?;
/// ```
pub struct TelloBuilder {
    config: DeviceConfig,
    schema: TelemetrySchema,
    log: Option<Arc<dyn CommandLog>>,
}

impl TelloBuilder {
    /// 创建新的 Builder
    pub fn new() -> Self {
        TelloBuilder {
            config: DeviceConfig::default(),
            schema: TelemetrySchema::standard(),
            log: None,
        }
    }

    /// 设置无人机指令地址（可选，默认 192.168.10.1）
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// 设置指令端口（可选，默认 8889）
    pub fn control_port(mut self, port: u16) -> Self {
        self.config.control_port = port;
        self
    }

    /// 设置状态广播端口（可选，默认 8890）
    pub fn state_port(mut self, port: u16) -> Self {
        self.config.state_port = port;
        self
    }

    /// 设置视频流端口（可选，默认 11111）
    pub fn video_port(mut self, port: u16) -> Self {
        self.config.video_port = port;
        self
    }

    /// 设置指令响应超时（可选，默认 7s）
    pub fn response_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config.response_timeout = timeout;
        self
    }

    /// 容器环境模式（可选，默认关闭）
    ///
    /// 实例级开关，随配置传给客户端工厂。
    pub fn docker(mut self, docker: bool) -> Self {
        self.config.docker = docker;
        self
    }

    /// 覆盖遥测模式（可选，默认标准模式）
    pub fn telemetry_schema(mut self, schema: TelemetrySchema) -> Self {
        self.schema = schema;
        self
    }

    /// 覆盖指令日志实现（可选，默认 `tracing`）
    pub fn command_log(mut self, log: Arc<dyn CommandLog>) -> Self {
        self.log = Some(log);
        self
    }

    /// 当前配置（只读）
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// 构建控制器
    ///
    /// 把收集好的配置交给客户端工厂，用返回的客户端组装控制器。
    ///
    /// # Errors
    ///
    /// - [`TelloError::Device`]: 工厂创建客户端失败
    pub fn build<C, F>(self, factory: F) -> Result<Tello<C>>
    where
        C: DeviceClient,
        F: FnOnce(DeviceConfig) -> std::result::Result<C, DeviceError>,
    {
        let log = self
            .log
            .unwrap_or_else(|| Arc::new(TracingLog::named(crate::tello::LOGGER_NAME)));
        let client = factory(self.config).map_err(TelloError::from)?;

        Ok(Tello::assemble(client, self.schema, log))
    }
}

impl Default for TelloBuilder {
    fn default() -> Self {
        Self::new()
    }
}
