//! 视频帧类型
//!
//! `Frame` 是自包含的帧载荷，`FrameRead` 是从客户端取回的帧读取句柄。
//! 客户端内部的视频线程持续更新最新帧；句柄只是某一时刻的快照入口，
//! 解码本身完全在客户端内完成。

/// 单帧视频载荷
///
/// 原始像素缓冲区（BGR24，按行排列）加上尺寸信息。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// 像素数据
    pub data: Vec<u8>,
    /// 帧宽（像素）
    pub width: u32,
    /// 帧高（像素）
    pub height: u32,
}

impl Frame {
    /// 创建帧
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Frame {
            data,
            width,
            height,
        }
    }

    /// 是否为空帧
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// 帧读取句柄
///
/// 持有客户端当前的最新帧。句柄本身是一次性的：
/// 用 [`into_frame`](FrameRead::into_frame) 取出载荷。
#[derive(Debug, Clone)]
pub struct FrameRead {
    frame: Frame,
}

impl FrameRead {
    /// 用当前帧创建句柄
    pub fn new(frame: Frame) -> Self {
        FrameRead { frame }
    }

    /// 当前帧的引用
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// 取出当前帧载荷
    pub fn into_frame(self) -> Frame {
        self.frame
    }
}
