//! Mock 设备客户端
//!
//! 用于测试的模拟无人机客户端与录制日志实现。
//! 客户端状态放在 `Arc<Mutex<...>>` 里，通过 [`MockHandle`]
//! 在客户端被移进控制器之后仍然可以注入故障、检查调用日志。

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crossbeam_channel::{Receiver, Sender, unbounded};
use tello_sdk::{
    CommandLog, DeviceClient, DeviceConfig, DeviceError, Frame, FrameRead, RawSample,
    TelemetryField,
};

/// 模拟设备状态
#[derive(Debug)]
pub struct MockState {
    pub connected: bool,
    pub stream_enabled: bool,
    pub airborne: bool,
    pub fail_connect: bool,
    pub fail_takeoff: bool,
    pub fail_land: bool,
    pub fail_stream_on: bool,
    /// 按字段缓存的原始采样值
    pub samples: BTreeMap<TelemetryField, RawSample>,
    /// 指令原语的调用日志
    pub journal: Vec<&'static str>,
}

impl Default for MockState {
    fn default() -> Self {
        let mut samples = BTreeMap::new();
        samples.insert(TelemetryField::Battery, RawSample::Int(87));
        samples.insert(TelemetryField::Roll, RawSample::Int(-3));
        samples.insert(TelemetryField::Pitch, RawSample::Int(2));
        samples.insert(TelemetryField::Yaw, RawSample::Int(45));
        samples.insert(TelemetryField::Height, RawSample::Int(120));
        samples.insert(TelemetryField::FlightTime, RawSample::Text("61".to_string()));
        samples.insert(TelemetryField::Barometer, RawSample::Float(163.9));
        // 注意：没有 Pressure 的读取原语

        MockState {
            connected: false,
            stream_enabled: false,
            airborne: false,
            fail_connect: false,
            fail_takeoff: false,
            fail_land: false,
            fail_stream_on: false,
            samples,
            journal: Vec::new(),
        }
    }
}

/// 模拟设备的外部操纵句柄
///
/// 客户端移交给控制器后，测试用它注入故障、读取调用日志。
#[derive(Clone, Default)]
pub struct MockHandle {
    state: Arc<Mutex<MockState>>,
}

impl MockHandle {
    pub fn journal(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().journal.clone()
    }

    pub fn is_connected(&self) -> bool {
        self.state.lock().unwrap().connected
    }

    pub fn is_airborne(&self) -> bool {
        self.state.lock().unwrap().airborne
    }

    pub fn set_fail_connect(&self, fail: bool) {
        self.state.lock().unwrap().fail_connect = fail;
    }

    pub fn set_fail_takeoff(&self, fail: bool) {
        self.state.lock().unwrap().fail_takeoff = fail;
    }

    pub fn set_fail_land(&self, fail: bool) {
        self.state.lock().unwrap().fail_land = fail;
    }

    pub fn set_fail_stream_on(&self, fail: bool) {
        self.state.lock().unwrap().fail_stream_on = fail;
    }

    pub fn set_sample(&self, field: TelemetryField, sample: RawSample) {
        self.state.lock().unwrap().samples.insert(field, sample);
    }
}

/// 模拟设备客户端
pub struct MockDeviceClient {
    config: DeviceConfig,
    handle: MockHandle,
}

impl MockDeviceClient {
    pub fn new() -> Self {
        Self::from_config(DeviceConfig::default())
    }

    pub fn from_config(config: DeviceConfig) -> Self {
        MockDeviceClient {
            config,
            handle: MockHandle::default(),
        }
    }

    pub fn handle(&self) -> MockHandle {
        self.handle.clone()
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }
}

impl Default for MockDeviceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceClient for MockDeviceClient {
    fn connect(&mut self) -> Result<(), DeviceError> {
        let mut state = self.handle.state.lock().unwrap();
        state.journal.push("connect");
        if state.fail_connect {
            return Err(DeviceError::timeout(
                self.config.response_timeout.as_millis() as u64,
            ));
        }
        state.connected = true;
        Ok(())
    }

    fn takeoff(&mut self) -> Result<(), DeviceError> {
        let mut state = self.handle.state.lock().unwrap();
        state.journal.push("takeoff");
        if !state.connected {
            return Err(DeviceError::io("command socket not open"));
        }
        if state.fail_takeoff {
            return Err(DeviceError::rejected("error Motor stop"));
        }
        state.airborne = true;
        Ok(())
    }

    fn land(&mut self) -> Result<(), DeviceError> {
        let mut state = self.handle.state.lock().unwrap();
        state.journal.push("land");
        if !state.connected {
            return Err(DeviceError::io("command socket not open"));
        }
        if state.fail_land {
            return Err(DeviceError::rejected("error"));
        }
        state.airborne = false;
        Ok(())
    }

    fn stream_on(&mut self) -> Result<(), DeviceError> {
        let mut state = self.handle.state.lock().unwrap();
        state.journal.push("stream_on");
        if state.fail_stream_on {
            return Err(DeviceError::rejected("error"));
        }
        state.stream_enabled = true;
        Ok(())
    }

    fn frame_read(&self) -> Result<FrameRead, DeviceError> {
        let mut state = self.handle.state.lock().unwrap();
        state.journal.push("frame_read");
        if !state.stream_enabled {
            return Err(DeviceError::StreamNotStarted);
        }
        Ok(FrameRead::new(Frame::new(vec![7, 7, 7], 1, 1)))
    }

    fn read_raw(&self, field: TelemetryField) -> Option<RawSample> {
        let mut state = self.handle.state.lock().unwrap();
        state.journal.push("read_raw");
        state.samples.get(&field).cloned()
    }
}

/// 录制的日志行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Info(String),
    Success(String),
}

/// 录制日志实现：把每行日志发进 channel
pub struct ChannelLog {
    tx: Sender<LogEntry>,
}

impl CommandLog for ChannelLog {
    fn info(&self, message: &str) {
        let _ = self.tx.try_send(LogEntry::Info(message.to_string()));
    }

    fn success(&self, message: &str) {
        let _ = self.tx.try_send(LogEntry::Success(message.to_string()));
    }
}

/// 创建录制日志与接收端
pub fn channel_log() -> (Arc<ChannelLog>, Receiver<LogEntry>) {
    let (tx, rx) = unbounded();
    (Arc::new(ChannelLog { tx }), rx)
}
