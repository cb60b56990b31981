use crate::model::Signal;

/// 输入事件（逻辑按键事件）。
///
/// 说明：
/// - `Session`/processor 只关心“语义事件”，不关心具体平台按钮。
/// - 宿主（键盘视图、CLI）负责把点击/焦点变化转换成这些事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// 点或划
    Signal(Signal),
    /// 删除键
    Delete,
    /// 空格键
    Space,
    /// 光标被移动（非本会话自己的编辑引起）
    CursorMoved,
}

impl InputEvent {
    pub const DOT: InputEvent = InputEvent::Signal(Signal::Dot);
    pub const DASH: InputEvent = InputEvent::Signal(Signal::Dash);
}

/// 引擎输出动作（对宿主文本框的编辑请求）。
///
/// 同一事件产生的多个动作必须按顺序应用：后一个动作依赖前一个动作之后的文本状态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 在光标处插入文本
    Insert(String),
    /// 删除光标前一个字符
    DeleteBackward,
}
