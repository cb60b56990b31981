//! `processor`：输入事件处理链。
//!
//! 按顺序处理 `InputEvent`，对 `Context` 做状态变更，并产生 `Action`（插入/删除）。
//!
//! 当前链路（`Session::new` 默认组装）：
//! - `SignalProcessor`：点/划，追加信号并替换光标前的字符
//! - `DeleteProcessor`：删除键（回退信号 / 重新打开已上屏字符 / 普通退格）
//! - `SpaceProcessor`：空格键（结束当前字符 / 插入空格）
//! - `CursorProcessor`：光标被外部移动，清空缓冲

use crate::{
    context::Context,
    key_event::{Action, InputEvent},
    model::Signal,
    surface::TextSurface,
};

/// 给 processors 的对象安全引擎接口。
pub trait EngineFacade {
    /// 信号序列 -> 要插入的文本（未匹配时为占位字符）
    fn resolve_text(&self, signals: &[Signal]) -> String;
    /// 字符 -> 信号序列（反查）
    fn signals_for(&self, ch: char) -> Option<Vec<Signal>>;
}

/// Processor 执行结果：是否“消费”了本次事件。
///
/// - `Consume`：本 processor 已处理该事件，后续 processor 不再执行
/// - `Continue`：本 processor 不处理该事件，交给下一个 processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Consume,
    Continue,
}

/// Processor：处理输入事件并改变 Context；必要时产生编辑动作。
///
/// `surface` 只读：processor 只能查询宿主文本，编辑一律通过返回的 `Action` 完成。
pub trait Processor: Send + Sync {
    fn process(
        &mut self,
        engine: &dyn EngineFacade,
        context: &mut Context,
        surface: &dyn TextSurface,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>);
}

pub struct SignalProcessor;

impl Processor for SignalProcessor {
    fn process(
        &mut self,
        engine: &dyn EngineFacade,
        context: &mut Context,
        _surface: &dyn TextSurface,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *input_event {
            InputEvent::Signal(signal) => (
                ProcessStatus::Consume,
                (&mut *context).append_signal(engine, signal),
            ),
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

pub struct DeleteProcessor;

impl Processor for DeleteProcessor {
    fn process(
        &mut self,
        engine: &dyn EngineFacade,
        context: &mut Context,
        surface: &dyn TextSurface,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *input_event {
            InputEvent::Delete => (
                ProcessStatus::Consume,
                (&mut *context).delete_pressed(engine, surface),
            ),
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

pub struct SpaceProcessor;

impl Processor for SpaceProcessor {
    fn process(
        &mut self,
        _engine: &dyn EngineFacade,
        context: &mut Context,
        _surface: &dyn TextSurface,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *input_event {
            InputEvent::Space => (ProcessStatus::Consume, (&mut *context).space_pressed()),
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

pub struct CursorProcessor;

impl Processor for CursorProcessor {
    fn process(
        &mut self,
        _engine: &dyn EngineFacade,
        context: &mut Context,
        _surface: &dyn TextSurface,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *input_event {
            InputEvent::CursorMoved => (ProcessStatus::Consume, (&mut *context).cursor_moved()),
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}
