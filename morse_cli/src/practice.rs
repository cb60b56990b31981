//! 练习模式：在内存文本框上模拟键盘按钮。
//!
//! 每行是一串按键：
//! - `.` 点，`-` 划，`<` 删除，`_` 空格
//! - `[` / `]` 光标左移 / 右移（真的移动了才会通知会话）
//! - 其他空白字符忽略
use std::io::{self, BufRead, Write};

use morse_core::{
    key_event::InputEvent,
    model::Signal,
    session::Session,
    surface::TextField,
    table::CodeTable,
};
use morse_table::MorseTable;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Event(InputEvent),
    Left,
    Right,
}

fn parse_keys(line: &str) -> Result<Vec<Key>, char> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '.' => Ok(Key::Event(InputEvent::Signal(Signal::Dot))),
            '-' => Ok(Key::Event(InputEvent::Signal(Signal::Dash))),
            '<' => Ok(Key::Event(InputEvent::Delete)),
            '_' => Ok(Key::Event(InputEvent::Space)),
            '[' => Ok(Key::Left),
            ']' => Ok(Key::Right),
            other => Err(other),
        })
        .collect()
}

/// 把一行按键喂给会话。
fn feed<T: CodeTable>(session: &mut Session<T>, field: &mut TextField, keys: &[Key]) {
    for key in keys {
        let ev = match *key {
            Key::Event(ev) => ev,
            Key::Left => {
                if !field.move_left() {
                    continue;
                }
                InputEvent::CursorMoved
            }
            Key::Right => {
                if !field.move_right() {
                    continue;
                }
                InputEvent::CursorMoved
            }
        };
        session.handle(ev, field);
    }
}

fn print_chart(table: &MorseTable, out: &mut impl Write) -> io::Result<()> {
    for (i, (ch, signals)) in table.entries().enumerate() {
        let code = morse_core::model::render_signals(signals);
        write!(out, "{ch} {code:<7}")?;
        if i % 6 == 5 {
            writeln!(out)?;
        }
    }
    if table.len() % 6 != 0 {
        writeln!(out)?;
    }
    Ok(())
}

pub fn repl(
    session: &mut Session<MorseTable>,
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()> {
    let mut field = TextField::new();
    writeln!(out, "morse practice | . 点  - 划  < 删除  _ 空格  [ ] 移动光标")?;
    writeln!(out, "命令：:chart 码表  :clear 清空  :q 退出")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        match line {
            "" => continue,
            ":q" | ":quit" | ":exit" => break,
            ":chart" => {
                print_chart(session.engine().table(), &mut out)?;
                continue;
            }
            ":clear" => {
                session.reset();
                field = TextField::new();
            }
            _ => match parse_keys(line) {
                Ok(keys) => {
                    debug!(keys = keys.len(), "feeding keys");
                    feed(session, &mut field, &keys);
                }
                Err(bad) => {
                    writeln!(out, "(忽略：无效按键 {bad:?})")?;
                    continue;
                }
            },
        }

        let ui = session.ui_state();
        writeln!(out, "text: {}", field.render_with_cursor('|'))?;
        if !ui.preview.is_empty() {
            writeln!(out, "  {}", ui.preview)?;
        }
        out.flush()?;
    }
    Ok(())
}
