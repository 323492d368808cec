//! 遥测字段与模式定义
//!
//! 遥测读取不走字符串反射：字段集合是封闭的枚举（[`TelemetryField`]），
//! 模式（[`TelemetrySchema`]）是一组有序的 `字段 -> 类型` 声明。
//! 客户端按字段返回原始采样值（[`RawSample`]），声明的类型
//! （[`ValueKind`]）负责把采样值整形成对外暴露的读数。
//!
//! # 模式与客户端的关系
//!
//! 模式声明"控制器想暴露什么"，客户端决定"实际能提供什么"。
//! 声明了但客户端不支持的字段属于配置错误，在访问器调用时报出，
//! 而不是静默返回坏数据。

use std::fmt;

/// 遥测字段
///
/// 封闭枚举，每个成员对应设备状态广播里的一个读数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TelemetryField {
    /// 电量百分比
    Battery,
    /// 横滚角（度）
    Roll,
    /// 俯仰角（度）
    Pitch,
    /// 偏航角（度）
    Yaw,
    /// 相对起飞点高度（厘米）
    Height,
    /// 累计飞行时间（秒）
    FlightTime,
    /// 气压计读数（厘米）
    Barometer,
    /// 气压（并非所有固件都广播此字段）
    Pressure,
}

impl TelemetryField {
    /// 字段的规范名称（状态广播里的键名）
    pub fn name(self) -> &'static str {
        match self {
            Self::Battery => "battery",
            Self::Roll => "roll",
            Self::Pitch => "pitch",
            Self::Yaw => "yaw",
            Self::Height => "height",
            Self::FlightTime => "flight_time",
            Self::Barometer => "barometer",
            Self::Pressure => "pressure",
        }
    }
}

impl fmt::Display for TelemetryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 客户端返回的原始采样值
///
/// 状态广播是文本协议，不同固件对同一字段可能给出整数、
/// 小数或未解析的文本，统一收敛到这三种形态。
#[derive(Debug, Clone, PartialEq)]
pub enum RawSample {
    /// 整数采样
    Int(i64),
    /// 浮点采样
    Float(f64),
    /// 未解析文本
    Text(String),
}

/// 声明的读数类型
///
/// 模式里每个字段声明一个整形目标，默认为整数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// 整数读数（默认）
    #[default]
    Int,
    /// 浮点读数
    Float,
}

impl ValueKind {
    /// 把原始采样整形成声明的读数类型
    ///
    /// 浮点到整数按截断处理；文本按对应类型解析。
    /// 无法整形时返回 `None`（模式与客户端不匹配）。
    pub fn coerce(self, raw: &RawSample) -> Option<TelemetryValue> {
        match (self, raw) {
            (Self::Int, RawSample::Int(v)) => Some(TelemetryValue::Int(*v)),
            (Self::Int, RawSample::Float(v)) => Some(TelemetryValue::Int(*v as i64)),
            (Self::Int, RawSample::Text(s)) => {
                s.trim().parse::<i64>().ok().map(TelemetryValue::Int)
            },
            (Self::Float, RawSample::Int(v)) => Some(TelemetryValue::Float(*v as f64)),
            (Self::Float, RawSample::Float(v)) => Some(TelemetryValue::Float(*v)),
            (Self::Float, RawSample::Text(s)) => {
                s.trim().parse::<f64>().ok().map(TelemetryValue::Float)
            },
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
        }
    }
}

/// 整形后的遥测读数
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TelemetryValue {
    /// 整数读数
    Int(i64),
    /// 浮点读数
    Float(f64),
}

impl TelemetryValue {
    /// 作为整数取出（浮点截断）
    pub fn as_int(self) -> i64 {
        match self {
            Self::Int(v) => v,
            Self::Float(v) => v as i64,
        }
    }

    /// 作为浮点取出
    pub fn as_float(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

/// 单条模式声明：`字段 -> 类型`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSpec {
    /// 声明的字段
    pub field: TelemetryField,
    /// 声明的读数类型
    pub kind: ValueKind,
}

impl FieldSpec {
    /// 整数字段声明（默认类型）
    pub fn int(field: TelemetryField) -> Self {
        FieldSpec {
            field,
            kind: ValueKind::Int,
        }
    }

    /// 浮点字段声明
    pub fn float(field: TelemetryField) -> Self {
        FieldSpec {
            field,
            kind: ValueKind::Float,
        }
    }
}

/// 遥测模式：有序的字段声明集合
///
/// 控制器连接成功后按模式生成访问器表。顺序即声明顺序；
/// 同一字段重复声明时后者生效。
///
/// # 示例
///
/// ```rust
/// use tello_device::{FieldSpec, TelemetryField, TelemetrySchema};
///
/// let schema = TelemetrySchema::standard();
/// assert!(schema.contains(TelemetryField::Battery));
/// assert!(!schema.contains(TelemetryField::Pressure));
///
/// let custom = TelemetrySchema::new(vec![FieldSpec::int(TelemetryField::Pressure)]);
/// assert_eq!(custom.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TelemetrySchema {
    specs: Vec<FieldSpec>,
}

impl TelemetrySchema {
    /// 用给定声明创建模式
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        TelemetrySchema { specs }
    }

    /// 标准模式
    ///
    /// 固件常规广播的六个读数，全部按整数暴露。
    pub fn standard() -> Self {
        TelemetrySchema::new(vec![
            FieldSpec::int(TelemetryField::Battery),
            FieldSpec::int(TelemetryField::Roll),
            FieldSpec::int(TelemetryField::Yaw),
            FieldSpec::int(TelemetryField::Height),
            FieldSpec::int(TelemetryField::FlightTime),
            FieldSpec::int(TelemetryField::Barometer),
        ])
    }

    /// 追加一条声明
    pub fn push(&mut self, spec: FieldSpec) {
        self.specs.push(spec);
    }

    /// 声明迭代器（按声明顺序）
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.iter()
    }

    /// 声明条数
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// 是否为空模式
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// 是否声明了某字段
    pub fn contains(&self, field: TelemetryField) -> bool {
        self.specs.iter().any(|spec| spec.field == field)
    }
}

impl Default for TelemetrySchema {
    fn default() -> Self {
        Self::standard()
    }
}
