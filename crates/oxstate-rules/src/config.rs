use serde::{Deserialize, Serialize};

/// 规则树节点定义：条件单元 + 互斥子分支，结构与运行时 Node 一一对应。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeConfig {
    /// 节点唯一标识
    pub id: String,
    /// 条件单元列表，或 "root" / "else" 标记无条件节点
    pub units: UnitsConfig,
    /// 子节点（互斥分支，按声明顺序尝试）
    #[serde(default)]
    pub children: Vec<NodeConfig>,
}

/// Unit list of a node, or the marker making the node unconditional.
///
/// An unconditional node structurally cannot carry units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnitsConfig {
    Always(AlwaysKind),
    Conditions(Vec<UnitConfig>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlwaysKind {
    Root,
    Else,
}

/// 叶子条件：指标 + 滑动窗口 + 聚合 + 区间比较。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitConfig {
    /// 监控指标名（如 "speed"）
    pub metric: String,
    pub window: WindowConfig,
    /// 聚合函数名；"none" 表示窗口内逐点比较
    pub aggregation: String,
    pub comparator: CompareConfig,
}

/// 滑动窗口尺寸定义。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    /// time 按时长换算容量（pps*sec+1），count 直接指定点数
    pub mode: WindowMode,
    #[serde(default = "default_window_sec")]
    pub sec: u32,
    #[serde(default = "default_window_size")]
    pub size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    Time,
    Count,
}

/// 区间比较定义。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompareConfig {
    /// 区间类型：closed / open / left_closed / right_closed（或 [] () [) (]）
    pub kind: String,
    /// (lower, upper)，要求 lower <= upper
    pub bounds: (f64, f64),
}

fn default_window_sec() -> u32 {
    1
}

fn default_window_size() -> u32 {
    1
}
