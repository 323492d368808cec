//! 会话状态
//!
//! 控制器独占持有的进程内状态映射。单线程模型：没有锁，
//! 所有写入都经由控制器的 `&mut self` 操作完成。

use std::collections::BTreeMap;

/// 会话状态键
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StateKey {
    /// 会话已建立
    Connected,
    /// 视频流已开启
    StreamEnabled,
}

/// 会话状态映射
///
/// 未写入过的键按 `false` 读出。
#[derive(Debug, Default)]
pub struct SessionState {
    entries: BTreeMap<StateKey, bool>,
}

impl SessionState {
    /// 创建空状态
    pub fn new() -> Self {
        SessionState {
            entries: BTreeMap::new(),
        }
    }

    /// 读取某个状态键
    pub fn get(&self, key: StateKey) -> bool {
        self.entries.get(&key).copied().unwrap_or(false)
    }

    /// 写入某个状态键
    pub(crate) fn set(&mut self, key: StateKey, value: bool) {
        self.entries.insert(key, value);
    }

    /// 会话是否已建立
    pub fn is_connected(&self) -> bool {
        self.get(StateKey::Connected)
    }
}
