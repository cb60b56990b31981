use crate::model::{Resolution, Signal, UiState, render_signals};
use crate::processor::EngineFacade;
use crate::table::CodeTable;

/// 未匹配时默认插入的占位字符。
pub const DEFAULT_PLACEHOLDER: char = '?';

/// 引擎：持有码表，负责把信号缓冲转成“要插入的文本”和 `UiState`。
pub struct Engine<T> {
    /// 码表（内置或从 TSV 加载）
    table: T,
    /// 未匹配时的占位字符
    placeholder: char,
}

impl<T> Engine<T>
where
    T: CodeTable,
{
    pub fn new(table: T) -> Self {
        Self {
            table,
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }

    /// 设置占位字符；空白字符会回退到默认值（空白会和空格键的输出混淆）。
    pub fn placeholder(mut self, ch: char) -> Self {
        if ch.is_whitespace() {
            self.placeholder = DEFAULT_PLACEHOLDER;
        } else {
            self.placeholder = ch;
        }
        self
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn resolve(&self, signals: &[Signal]) -> Resolution {
        if signals.is_empty() {
            return Resolution::Unknown;
        }
        self.table.resolve(signals)
    }

    /// 查表结果的展示文本（即插入到宿主的文本）。
    pub fn resolve_text(&self, signals: &[Signal]) -> String {
        self.resolve(signals)
            .display_char(self.placeholder)
            .to_string()
    }

    pub fn signals_for(&self, ch: char) -> Option<&[Signal]> {
        self.table.signals_for(ch)
    }

    pub fn ui_state(&self, signals: &[Signal]) -> UiState {
        let resolution = self.resolve(signals);
        let preview = if signals.is_empty() {
            String::new()
        } else {
            format!(
                "{} = {}",
                render_signals(signals),
                resolution.display_char(self.placeholder)
            )
        };
        UiState {
            signals: signals.to_vec(),
            resolution,
            preview,
        }
    }
}

impl<T> EngineFacade for Engine<T>
where
    T: CodeTable,
{
    fn resolve_text(&self, signals: &[Signal]) -> String {
        Engine::<T>::resolve_text(self, signals)
    }

    fn signals_for(&self, ch: char) -> Option<Vec<Signal>> {
        Engine::<T>::signals_for(self, ch).map(<[Signal]>::to_vec)
    }
}
