//! `Context`：processor 链共享的唯一状态容器，即“信号缓冲”。
//!
//! 约定：
//! - `signals` 只描述光标前紧挨着的那一个字符
//! - 光标被外部移动后缓冲必须清空
//! - 先改状态，再返回动作；动作由调用方按顺序应用到宿主
use crate::{key_event::Action, model::Signal, processor::EngineFacade, surface::TextSurface};

/// 输入会话上下文（每个获得焦点的文本框一份）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    /// 尚未结束的信号序列；空表示空闲
    pub signals: Vec<Signal>,
}

impl Context {
    pub fn is_idle(&self) -> bool {
        self.signals.is_empty()
    }

    /// 清空缓冲（等价于回到空闲状态）。
    pub fn reset(&mut self) {
        (&mut self.signals).clear();
    }

    /// 追加一个信号，并把光标前显示的字符替换为新的查表结果。
    pub fn append_signal(&mut self, engine: &dyn EngineFacade, signal: Signal) -> Vec<Action> {
        let was_idle = self.is_idle();
        (&mut self.signals).push(signal);
        let text = engine.resolve_text(&self.signals);
        if was_idle {
            vec![Action::Insert(text)]
        } else {
            vec![Action::DeleteBackward, Action::Insert(text)]
        }
    }

    /// 删除键。
    ///
    /// 缓冲为空时尝试反查光标前的字符：能反查到就把它的信号装回缓冲（重新进入编辑），
    /// 本次不产生任何编辑；反查不到就退化为普通退格。
    pub fn delete_pressed(
        &mut self,
        engine: &dyn EngineFacade,
        surface: &dyn TextSurface,
    ) -> Vec<Action> {
        if self.is_idle() {
            let reopened = surface
                .character_before_cursor()
                .and_then(|ch| engine.signals_for(ch));
            return match reopened {
                Some(signals) => {
                    self.signals = signals;
                    Vec::new()
                }
                None => {
                    tracing::warn!("光标前字符不在码表中，按普通退格处理");
                    vec![Action::DeleteBackward]
                }
            };
        }

        (&mut self.signals).pop();
        if self.is_idle() {
            vec![Action::DeleteBackward]
        } else {
            vec![
                Action::DeleteBackward,
                Action::Insert(engine.resolve_text(&self.signals)),
            ]
        }
    }

    /// 空格键：有缓冲时只结束当前字符（已显示的字符保留），否则插入空格。
    pub fn space_pressed(&mut self) -> Vec<Action> {
        if self.is_idle() {
            vec![Action::Insert(" ".to_string())]
        } else {
            self.reset();
            Vec::new()
        }
    }

    /// 光标被外部移动：缓冲不再描述光标前的字符，直接丢弃。
    pub fn cursor_moved(&mut self) -> Vec<Action> {
        self.reset();
        Vec::new()
    }
}
