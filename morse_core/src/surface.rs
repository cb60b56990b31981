//! `surface`：宿主文本编辑面的抽象，以及一个内存实现 `TextField`。
//!
//! core 只通过这三个操作读写宿主文本，不假设它是单行输入框还是多行文本视图。
use crate::key_event::Action;

/// 宿主文本编辑面。
pub trait TextSurface {
    /// 在光标处插入文本，光标移到插入内容之后。
    fn insert_text(&mut self, text: &str);

    /// 删除光标前的一个字符；光标在开头时什么也不做。
    fn delete_backward(&mut self);

    /// 光标前的一个字符（只读）。
    fn character_before_cursor(&self) -> Option<char>;
}

/// 按顺序把动作应用到文本编辑面。
pub fn apply_actions(surface: &mut dyn TextSurface, actions: &[Action]) {
    for action in actions {
        match action {
            Action::Insert(text) => surface.insert_text(text),
            Action::DeleteBackward => surface.delete_backward(),
        }
    }
}

/// 内存文本框：文本 + 光标（按字符计数）。
///
/// 对应练习界面里的单行输入框；CLI 与测试都用它当宿主。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    chars: Vec<char>,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以给定文本初始化，光标在末尾。
    pub fn with_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 移动光标到 `pos`（超出末尾时 clamp）；返回光标是否真的移动了。
    pub fn move_cursor_to(&mut self, pos: usize) -> bool {
        let pos = pos.min(self.chars.len());
        let moved = pos != self.cursor;
        self.cursor = pos;
        moved
    }

    pub fn move_left(&mut self) -> bool {
        match self.cursor.checked_sub(1) {
            Some(pos) => self.move_cursor_to(pos),
            None => false,
        }
    }

    pub fn move_right(&mut self) -> bool {
        self.move_cursor_to(self.cursor + 1)
    }

    /// 带光标标记的文本，例如 `"ab|c"`。
    pub fn render_with_cursor(&self, marker: char) -> String {
        let mut out = String::with_capacity(self.chars.len() + 1);
        out.extend(&self.chars[..self.cursor]);
        out.push(marker);
        out.extend(&self.chars[self.cursor..]);
        out
    }
}

impl TextSurface for TextField {
    fn insert_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.chars.insert(self.cursor, ch);
            self.cursor += 1;
        }
    }

    fn delete_backward(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    fn character_before_cursor(&self) -> Option<char> {
        self.cursor.checked_sub(1).map(|i| self.chars[i])
    }
}
