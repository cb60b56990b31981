use thiserror::Error;

/// 单个电码信号（点/划）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Signal {
    Dot,
    Dash,
}

impl Signal {
    /// 展示符号：`.` / `-`
    pub fn symbol(self) -> char {
        match self {
            Signal::Dot => '.',
            Signal::Dash => '-',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Signal::Dot),
            '-' => Some(Signal::Dash),
            _ => None,
        }
    }
}

/// 解析 `.-` 串失败。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSignalError {
    #[error("空的电码串")]
    Empty,
    #[error("第 {position} 个字符 {found:?} 不是 '.' 或 '-'")]
    UnexpectedChar { found: char, position: usize },
}

/// 把信号序列渲染成 `".-"` 形式。
pub fn render_signals(signals: &[Signal]) -> String {
    signals.iter().map(|s| s.symbol()).collect()
}

/// 把 `".-"` 形式的串解析为信号序列；空串视为错误。
pub fn parse_signals(code: &str) -> Result<Vec<Signal>, ParseSignalError> {
    if code.is_empty() {
        return Err(ParseSignalError::Empty);
    }
    code.chars()
        .enumerate()
        .map(|(i, ch)| {
            Signal::from_symbol(ch).ok_or(ParseSignalError::UnexpectedChar {
                found: ch,
                position: i + 1,
            })
        })
        .collect()
}

/// 查表结果。
///
/// `Unknown` 只作为查表结果出现，从不进入信号缓冲。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Char(char),
    Unknown,
}

impl Resolution {
    /// 展示字符：未匹配时使用 `placeholder`。
    pub fn display_char(self, placeholder: char) -> char {
        match self {
            Resolution::Char(ch) => ch,
            Resolution::Unknown => placeholder,
        }
    }
}

/// 引擎给 UI 的只读快照。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// 当前信号缓冲
    pub signals: Vec<Signal>,
    /// 当前缓冲的查表结果（缓冲为空时为 `Unknown`）
    pub resolution: Resolution,
    /// 预览行：缓冲为空时为空串，否则形如 ".- = a"
    pub preview: String,
}

impl UiState {
    pub fn is_idle(&self) -> bool {
        self.signals.is_empty()
    }
}
