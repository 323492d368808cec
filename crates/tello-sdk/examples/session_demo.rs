//! 会话控制演示（无硬件）
//!
//! 用内置的模拟客户端走一遍完整会话：连接、开流、起飞、
//! 读遥测、取帧、降落。运行：
//!
//! ```bash
//! RUST_LOG=info cargo run -p tello-sdk --example session_demo
//! ```

use tello_sdk::prelude::*;
use tello_sdk::{ConnectOptions, Frame, FrameRead, RawSample};

/// 模拟设备客户端：指令全部成功，遥测返回固定采样值
struct SimClient {
    connected: bool,
    stream_enabled: bool,
}

impl SimClient {
    fn open(_config: DeviceConfig) -> Result<Self, DeviceError> {
        Ok(SimClient {
            connected: false,
            stream_enabled: false,
        })
    }
}

impl DeviceClient for SimClient {
    fn connect(&mut self) -> Result<(), DeviceError> {
        self.connected = true;
        Ok(())
    }

    fn takeoff(&mut self) -> Result<(), DeviceError> {
        if !self.connected {
            return Err(DeviceError::io("command socket not open"));
        }
        Ok(())
    }

    fn land(&mut self) -> Result<(), DeviceError> {
        if !self.connected {
            return Err(DeviceError::io("command socket not open"));
        }
        Ok(())
    }

    fn stream_on(&mut self) -> Result<(), DeviceError> {
        self.stream_enabled = true;
        Ok(())
    }

    fn frame_read(&self) -> Result<FrameRead, DeviceError> {
        if !self.stream_enabled {
            return Err(DeviceError::StreamNotStarted);
        }
        Ok(FrameRead::new(Frame::new(vec![0u8; 960 * 720 * 3], 960, 720)))
    }

    fn read_raw(&self, field: TelemetryField) -> Option<RawSample> {
        match field {
            TelemetryField::Battery => Some(RawSample::Int(91)),
            TelemetryField::Roll => Some(RawSample::Int(-1)),
            TelemetryField::Yaw => Some(RawSample::Int(30)),
            TelemetryField::Height => Some(RawSample::Int(0)),
            TelemetryField::FlightTime => Some(RawSample::Int(12)),
            TelemetryField::Barometer => Some(RawSample::Float(163.2)),
            _ => None,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tello_sdk::init_tracing();

    let mut tello = TelloBuilder::new().docker(false).build(SimClient::open)?;

    tello.connect_with(ConnectOptions::with_stream())?;
    println!("connected: {}", tello.connected());

    tello.takeoff()?;
    println!("battery:     {}%", tello.battery()?);
    println!("roll:        {}", tello.roll()?);
    println!("yaw:         {}", tello.yaw()?);
    println!("height:      {} cm", tello.height()?);
    println!("flight time: {} s", tello.flight_time()?);
    println!("barometer:   {} cm", tello.barometer()?);

    let frame = tello.frame()?;
    println!("frame:       {}x{} ({} bytes)", frame.width, frame.height, frame.data.len());

    tello.land()?;
    Ok(())
}
