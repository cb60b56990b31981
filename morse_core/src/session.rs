//! `Session`：对上层（键盘视图 / CLI）提供的会话对象。
//!
//! `Session` 自身不做业务判断，而是：
//! - 持有 `Context`（信号缓冲）
//! - 持有 processors 链（可插拔）
//! - 把每次 `InputEvent` 依次交给 processors，直到被消费
//! - 按顺序把产生的 `Action` 应用到宿主文本，最后输出 `UiState` + `Action`

use tracing::debug;

use crate::{
    context::Context,
    engine::Engine,
    key_event::{Action, InputEvent},
    model::{Signal, UiState},
    processor::{
        CursorProcessor, DeleteProcessor, ProcessStatus, Processor, SignalProcessor,
        SpaceProcessor,
    },
    surface::{TextSurface, apply_actions},
    table::CodeTable,
};

/// 输入会话（一个获得焦点的文本框对应一个）。
pub struct Session<T> {
    /// 引擎（码表 + 占位字符）
    engine: Engine<T>,
    /// 信号缓冲
    ctx: Context,
    /// processors 链
    processors: Vec<Box<dyn Processor>>,
}

impl<T> Session<T>
where
    T: CodeTable,
{
    /// 创建会话，并组装默认 processors 链。
    pub fn new(engine: Engine<T>) -> Self {
        Self {
            engine,
            ctx: Context::default(),
            processors: vec![
                Box::new(SignalProcessor),
                Box::new(DeleteProcessor),
                Box::new(SpaceProcessor),
                Box::new(CursorProcessor),
            ],
        }
    }

    pub fn engine(&self) -> &Engine<T> {
        &self.engine
    }

    pub fn signals(&self) -> &[Signal] {
        &self.ctx.signals
    }

    /// 获取当前 UI 快照（只读）。
    pub fn ui_state(&self) -> UiState {
        self.engine.ui_state(&self.ctx.signals)
    }

    /// 结束本次输入会话，回到空闲。
    pub fn reset(&mut self) {
        self.ctx.reset();
    }

    /// 只跑 processors 链，不应用动作。
    ///
    /// 给异步宿主用：调用方必须按返回顺序应用动作。
    pub fn process(&mut self, ev: InputEvent, surface: &dyn TextSurface) -> Vec<Action> {
        let mut actions = Vec::new();
        for p in &mut self.processors {
            let (status, mut a) = p.process(&self.engine, &mut self.ctx, surface, &ev);
            actions.append(&mut a);
            if status == ProcessStatus::Consume {
                break;
            }
        }
        debug!(
            event = ?ev,
            buffer = %crate::model::render_signals(&self.ctx.signals),
            actions = actions.len(),
            "handled input event"
        );
        actions
    }

    /// 处理一个输入事件并把动作应用到 `surface`，返回最新 UI 快照与动作列表。
    pub fn handle(
        &mut self,
        ev: InputEvent,
        surface: &mut dyn TextSurface,
    ) -> (UiState, Vec<Action>) {
        let actions = self.process(ev, &*surface);
        apply_actions(surface, &actions);
        (self.ui_state(), actions)
    }
}
