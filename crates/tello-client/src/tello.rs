//! Tello 会话控制器
//!
//! 单线程、阻塞式的设备会话控制器：持有注入的设备客户端，
//! 跟踪会话状态，把每条指令包进受护调用（前/后日志加原样
//! 错误传播），并在连接成功后按遥测模式暴露一组读数访问器。
//!
//! # 前提检查的不对称性
//!
//! 遥测读取强制要求会话已建立（未连接返回
//! [`TelloError::NotConnected`]）；`takeoff`/`land`/`frame` 不做
//! 控制器级检查，未连接时的失败由客户端自己报出并原样传播。
//! 这是有意保留的行为差异，不要"顺手"补齐。

use std::sync::Arc;

use tello_device::{DeviceClient, DeviceError, Frame, TelemetryField, TelemetrySchema, TelemetryValue};

use crate::command::{CommandLog, CommandSpec, TracingLog, execute};
use crate::error::{Result, TelloError};
use crate::state::{SessionState, StateKey};
use crate::telemetry::AccessorTable;

/// 控制器的命名日志器名称
pub(crate) const LOGGER_NAME: &str = "tello";

/// 连接选项
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectOptions {
    /// 连接成功后顺带开启视频流
    pub stream_on: bool,
}

impl ConnectOptions {
    /// 连接并开启视频流
    pub fn with_stream() -> Self {
        ConnectOptions { stream_on: true }
    }
}

/// Tello 会话控制器
///
/// 对注入的设备客户端（[`DeviceClient`]）做会话管理与指令编排。
/// 客户端归控制器独占所有；日志器是共享能力。
///
/// # 示例
///
/// ```rust,ignore
/// use tello_client::{ConnectOptions, TelloBuilder};
///
/// let mut tello = TelloBuilder::new()
///     .docker(true)
///     .build(|config| UdpDeviceClient::open(config))?;
///
/// tello.connect_with(ConnectOptions::with_stream())?;
/// tello.takeoff()?;
/// println!("battery: {}%", tello.battery()?);
/// tello.land()?;
/// ```
pub struct Tello<C: DeviceClient> {
    client: C,
    log: Arc<dyn CommandLog>,
    state: SessionState,
    schema: TelemetrySchema,
    accessors: AccessorTable,
}

impl<C: DeviceClient> std::fmt::Debug for Tello<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tello")
            .field("connected", &self.state.is_connected())
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl<C: DeviceClient> Tello<C> {
    /// 用已构造好的客户端创建控制器
    ///
    /// 使用标准遥测模式与默认的 `tracing` 日志器。
    pub fn from_client(client: C) -> Self {
        Self::assemble(
            client,
            TelemetrySchema::standard(),
            Arc::new(TracingLog::named(LOGGER_NAME)),
        )
    }

    /// 从零件组装控制器（Builder 使用）
    pub(crate) fn assemble(
        client: C,
        schema: TelemetrySchema,
        log: Arc<dyn CommandLog>,
    ) -> Self {
        Tello {
            client,
            log,
            state: SessionState::new(),
            schema,
            accessors: AccessorTable::empty(),
        }
    }

    // ==================== 会话操作 ====================

    /// 建立会话（不开视频流）
    pub fn connect(&mut self) -> Result<()> {
        self.connect_with(ConnectOptions::default())
    }

    /// 建立会话
    ///
    /// 受护调用客户端的 `connect`，成功后把会话状态置为已连接，
    /// 并按遥测模式重建访问器表。`stream_on` 选项会再执行一条
    /// 受护的开流指令。重复连接不报错，只产生一条提示日志。
    ///
    /// # Errors
    ///
    /// - [`TelloError::Device`]: 客户端的 `connect` 或 `stream_on` 失败
    pub fn connect_with(&mut self, options: ConnectOptions) -> Result<()> {
        // 重复连接只提示，不拦截
        self.check_connected(false)?;

        let log = self.log.clone();
        let spec = CommandSpec::named("connect")
            .before("Connecting...")
            .after("Connected.");
        {
            let client = &mut self.client;
            let state = &mut self.state;
            execute(log.as_ref(), &spec, || {
                client.connect()?;
                state.set(StateKey::Connected, true);
                Ok::<_, DeviceError>(())
            })?;
        }

        // 访问器绑定当前会话：每次成功连接都重建
        self.accessors = AccessorTable::materialize(&self.schema);

        if options.stream_on {
            let spec = CommandSpec::named("stream_on")
                .before("Turning camera on...")
                .after("Camera ready.");
            let client = &mut self.client;
            let state = &mut self.state;
            execute(log.as_ref(), &spec, || {
                client.stream_on()?;
                state.set(StateKey::StreamEnabled, true);
                Ok::<_, DeviceError>(())
            })?;
        }

        Ok(())
    }

    /// 起飞
    ///
    /// # Errors
    ///
    /// - [`TelloError::Device`]: 客户端拒绝或通信失败（包括未连接）
    pub fn takeoff(&mut self) -> Result<()> {
        let log = self.log.clone();
        let spec = CommandSpec::named("takeoff")
            .before("Taking off...")
            .after("Took off.");
        let client = &mut self.client;
        execute(log.as_ref(), &spec, || client.takeoff())?;
        Ok(())
    }

    /// 降落
    ///
    /// # Errors
    ///
    /// - [`TelloError::Device`]: 客户端拒绝或通信失败（包括未连接）
    pub fn land(&mut self) -> Result<()> {
        let log = self.log.clone();
        let spec = CommandSpec::named("land")
            .before("Landing...")
            .after("Landed.");
        let client = &mut self.client;
        execute(log.as_ref(), &spec, || client.land())?;
        Ok(())
    }

    /// 当前视频帧
    ///
    /// 受护取回客户端的帧读取句柄，然后从句柄取出当前帧载荷。
    ///
    /// # Errors
    ///
    /// - [`TelloError::Device`]: 视频流未开启或客户端取帧失败
    pub fn frame(&self) -> Result<Frame> {
        let spec = CommandSpec::named("frame_read")
            .before("Fetching frame read...")
            .after("Frame read fetched.");
        let client = &self.client;
        let read = execute(self.log.as_ref(), &spec, || client.frame_read())?;
        Ok(read.into_frame())
    }

    // ==================== 遥测读取 ====================

    /// 按字段读取遥测值
    ///
    /// 检查顺序：会话已建立 -> 字段已在访问器表中物化 ->
    /// 客户端提供读取原语 -> 按声明类型整形。
    ///
    /// # Errors
    ///
    /// - [`TelloError::NotConnected`]: 会话未建立
    /// - [`TelloError::UnsupportedTelemetry`]: 字段未声明，或客户端
    ///   不提供对应读取原语
    /// - [`TelloError::TelemetryType`]: 采样值无法整形成声明类型
    pub fn telemetry(&self, field: TelemetryField) -> Result<TelemetryValue> {
        self.check_connected(true)?;

        let accessor = self
            .accessors
            .get(field)
            .ok_or(TelloError::UnsupportedTelemetry { field })?;
        accessor.read(&self.client)
    }

    /// 电量百分比
    pub fn battery(&self) -> Result<i64> {
        Ok(self.telemetry(TelemetryField::Battery)?.as_int())
    }

    /// 横滚角（度）
    pub fn roll(&self) -> Result<i64> {
        Ok(self.telemetry(TelemetryField::Roll)?.as_int())
    }

    /// 偏航角（度）
    pub fn yaw(&self) -> Result<i64> {
        Ok(self.telemetry(TelemetryField::Yaw)?.as_int())
    }

    /// 相对起飞点高度（厘米）
    pub fn height(&self) -> Result<i64> {
        Ok(self.telemetry(TelemetryField::Height)?.as_int())
    }

    /// 累计飞行时间（秒）
    pub fn flight_time(&self) -> Result<i64> {
        Ok(self.telemetry(TelemetryField::FlightTime)?.as_int())
    }

    /// 气压计读数（厘米）
    pub fn barometer(&self) -> Result<i64> {
        Ok(self.telemetry(TelemetryField::Barometer)?.as_int())
    }

    // ==================== 状态查询 ====================

    /// 会话是否已建立
    pub fn connected(&self) -> bool {
        self.state.is_connected()
    }

    /// 客户端引用（只读）
    pub fn client(&self) -> &C {
        &self.client
    }

    /// 当前遥测模式
    pub fn schema(&self) -> &TelemetrySchema {
        &self.schema
    }

    /// 连接前提检查
    ///
    /// 返回当前连接状态。未连接且 `raise_err` 为真时返回
    /// [`TelloError::NotConnected`]；已连接时发一条提示日志。
    fn check_connected(&self, raise_err: bool) -> Result<bool> {
        let connected = self.state.is_connected();

        if !connected {
            if raise_err {
                return Err(TelloError::NotConnected);
            }
        } else {
            self.log.info("Tello already connected.");
        }

        Ok(connected)
    }
}
