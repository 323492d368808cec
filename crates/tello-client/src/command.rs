//! 受护指令执行
//!
//! 每条设备指令都包在一个"受护调用"里：先按顺序发出全部
//! 前置日志行，执行指令本身（恰好一次），只有指令成功才按
//! 顺序发出全部后置日志行。指令失败时不发后置日志，错误
//! 原样向上传播——没有重试，也没有吞错。
//!
//! 日志通过 [`CommandLog`] 能力注入：默认实现转发到 `tracing`，
//! 测试里可以换成录制实现来断言日志序列。

use std::sync::Arc;

/// 指令日志能力
///
/// 控制器消费的完整日志接口：前置行走 `info`，后置行走
/// `success`。实现必须非阻塞、不可失败——日志是尽力而为的
/// 可观测性，不参与错误契约。
pub trait CommandLog: Send + Sync {
    /// 信息级日志行
    fn info(&self, message: &str);

    /// 成功级日志行（指令完成后）
    fn success(&self, message: &str);
}

impl<L: CommandLog + ?Sized> CommandLog for Arc<L> {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn success(&self, message: &str) {
        (**self).success(message);
    }
}

/// 默认日志实现：转发到 `tracing`
///
/// `tracing` 没有 success 级别，后置行以 `outcome = "success"`
/// 字段标注在 info 级别上。
#[derive(Debug, Clone)]
pub struct TracingLog {
    name: &'static str,
}

impl TracingLog {
    /// 创建命名日志器
    pub fn named(name: &'static str) -> Self {
        TracingLog { name }
    }

    /// 日志器名称
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl CommandLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!(logger = self.name, "{}", message);
    }

    fn success(&self, message: &str) {
        tracing::info!(logger = self.name, outcome = "success", "{}", message);
    }
}

/// 有序日志行序列
///
/// 单条字符串与字符串列表统一收敛成同一种形态（可以为空）。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogLines(Vec<String>);

impl LogLines {
    /// 行迭代器（按原始顺序）
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 是否为空序列
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for LogLines {
    fn from(line: &str) -> Self {
        LogLines(vec![line.to_string()])
    }
}

impl From<String> for LogLines {
    fn from(line: String) -> Self {
        LogLines(vec![line])
    }
}

impl From<Vec<String>> for LogLines {
    fn from(lines: Vec<String>) -> Self {
        LogLines(lines)
    }
}

impl From<&[&str]> for LogLines {
    fn from(lines: &[&str]) -> Self {
        LogLines(lines.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for LogLines {
    fn from(lines: [&str; N]) -> Self {
        LogLines(lines.iter().map(|s| s.to_string()).collect())
    }
}

/// 单次受护调用的描述
///
/// 按次创建、用完即弃：指令名加上可选的前置/后置日志行。
/// 未给出的日志行按指令名合成默认文案。
#[derive(Debug, Clone)]
pub struct CommandSpec {
    name: &'static str,
    before: Option<LogLines>,
    after: Option<LogLines>,
}

impl CommandSpec {
    /// 用指令名创建描述（日志行走默认文案）
    pub fn named(name: &'static str) -> Self {
        CommandSpec {
            name,
            before: None,
            after: None,
        }
    }

    /// 设置前置日志行
    pub fn before(mut self, lines: impl Into<LogLines>) -> Self {
        self.before = Some(lines.into());
        self
    }

    /// 设置后置日志行
    pub fn after(mut self, lines: impl Into<LogLines>) -> Self {
        self.after = Some(lines.into());
        self
    }

    /// 指令名
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 解析后的前置日志行
    pub fn before_lines(&self) -> LogLines {
        match &self.before {
            Some(lines) => lines.clone(),
            None => LogLines::from(format!("Executing command {}", self.name)),
        }
    }

    /// 解析后的后置日志行
    pub fn after_lines(&self) -> LogLines {
        match &self.after {
            Some(lines) => lines.clone(),
            None => LogLines::from(format!("Command {} executed.", self.name)),
        }
    }
}

/// 执行一次受护调用
///
/// 契约：
/// 1. 按顺序发出全部前置行（info 级）；
/// 2. 调用 `cmd` 恰好一次；
/// 3. 仅当 `cmd` 返回 `Ok` 时按顺序发出全部后置行（success 级）
///    并返回结果；`Err` 原样传播，不发任何后置行。
pub(crate) fn execute<T, E>(
    log: &dyn CommandLog,
    spec: &CommandSpec,
    cmd: impl FnOnce() -> std::result::Result<T, E>,
) -> std::result::Result<T, E> {
    for line in spec.before_lines().iter() {
        log.info(line);
    }

    let value = cmd()?;

    for line in spec.after_lines().iter() {
        log.success(line);
    }

    Ok(value)
}
