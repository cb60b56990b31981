use morse_core::{
    engine::Engine,
    key_event::{Action, InputEvent},
    model::{Resolution, Signal},
    session::Session,
    surface::{TextField, TextSurface},
};
use morse_table::MorseTable;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use Signal::{Dash, Dot};

/// 记录所有编辑调用的宿主，同时把编辑落到内部 `TextField` 上。
#[derive(Default)]
struct RecordingSurface {
    field: TextField,
    log: Vec<String>,
}

impl RecordingSurface {
    fn with_text(text: &str) -> Self {
        Self {
            field: TextField::with_text(text),
            log: Vec::new(),
        }
    }

    fn take_log(&mut self) -> Vec<String> {
        std::mem::take(&mut self.log)
    }
}

impl TextSurface for RecordingSurface {
    fn insert_text(&mut self, text: &str) {
        self.log.push(format!("insert({text})"));
        self.field.insert_text(text);
    }

    fn delete_backward(&mut self) {
        self.log.push("delete".to_string());
        self.field.delete_backward();
    }

    fn character_before_cursor(&self) -> Option<char> {
        self.field.character_before_cursor()
    }
}

fn session() -> Session<MorseTable> {
    Session::new(Engine::new(MorseTable::standard()))
}

#[test]
fn dot_then_dash_types_a() {
    let mut s = session();
    let mut host = RecordingSurface::default();

    let (ui, _) = s.handle(InputEvent::DOT, &mut host);
    assert_eq!(ui.resolution, Resolution::Char('e'));
    assert_eq!(host.take_log(), vec!["insert(e)"]);

    let (ui, actions) = s.handle(InputEvent::DASH, &mut host);
    assert_eq!(s.signals(), &[Dot, Dash]);
    assert_eq!(ui.resolution, Resolution::Char('a'));
    assert_eq!(ui.preview, ".- = a");
    assert_eq!(
        actions,
        vec![Action::DeleteBackward, Action::Insert("a".to_string())]
    );
    assert_eq!(host.take_log(), vec!["delete", "insert(a)"]);
    assert_eq!(host.field.text(), "a");
}

#[test]
fn first_unmatched_signal_inserts_placeholder() {
    let mut s = session();
    let mut host = RecordingSurface::default();
    for _ in 0..6 {
        s.handle(InputEvent::DASH, &mut host);
    }
    assert_eq!(s.ui_state().resolution, Resolution::Unknown);
    assert_eq!(s.ui_state().preview, "------ = ?");
    assert_eq!(host.field.text(), "?");
}

#[test]
fn delete_shrinks_buffer_and_replaces_character() {
    let mut s = session();
    let mut host = RecordingSurface::default();
    s.handle(InputEvent::DASH, &mut host);
    s.handle(InputEvent::DASH, &mut host);
    s.handle(InputEvent::DASH, &mut host);
    assert_eq!(host.field.text(), "o");
    host.take_log();

    let (ui, _) = s.handle(InputEvent::Delete, &mut host);
    assert_eq!(s.signals(), &[Dash, Dash]);
    assert_eq!(ui.resolution, Resolution::Char('m'));
    assert_eq!(host.take_log(), vec!["delete", "insert(m)"]);
    assert_eq!(host.field.text(), "m");
}

#[test]
fn delete_after_a_falls_back_to_e() {
    let mut s = session();
    let mut host = RecordingSurface::default();
    s.handle(InputEvent::DOT, &mut host);
    s.handle(InputEvent::DASH, &mut host);
    assert_eq!(s.signals(), &[Dot, Dash]);
    host.take_log();

    let (ui, actions) = s.handle(InputEvent::Delete, &mut host);
    assert_eq!(s.signals(), &[Dot]);
    // 单个点在标准表里就是 e，不是占位字符
    assert_eq!(ui.resolution, Resolution::Char('e'));
    assert_eq!(
        actions,
        vec![Action::DeleteBackward, Action::Insert("e".to_string())]
    );
    assert_eq!(host.take_log(), vec!["delete", "insert(e)"]);
    assert_eq!(host.field.text(), "e");
}

#[test]
fn delete_last_signal_removes_character() {
    let mut s = session();
    let mut host = RecordingSurface::with_text("x");
    s.handle(InputEvent::DOT, &mut host);
    host.take_log();

    let (ui, actions) = s.handle(InputEvent::Delete, &mut host);
    assert!(ui.is_idle());
    assert_eq!(ui.preview, "");
    assert_eq!(actions, vec![Action::DeleteBackward]);
    assert_eq!(host.field.text(), "x");
}

#[test]
fn delete_on_idle_reopens_committed_character() {
    let mut s = session();
    let mut host = RecordingSurface::with_text("he");

    let (_, actions) = s.handle(InputEvent::Delete, &mut host);
    assert!(actions.is_empty());
    assert!(host.take_log().is_empty());
    assert_eq!(s.signals(), &[Dot]);

    // 继续输入会在原字符上修改：e(.) + - => a
    s.handle(InputEvent::DASH, &mut host);
    assert_eq!(host.field.text(), "ha");

    // 连续删除：a -> e -> 删掉字符
    s.handle(InputEvent::Delete, &mut host);
    assert_eq!(host.field.text(), "he");
    s.handle(InputEvent::Delete, &mut host);
    assert_eq!(host.field.text(), "h");
    assert!(s.signals().is_empty());
}

#[test]
fn delete_on_idle_after_foreign_character_is_plain_backspace() {
    let mut s = session();
    let mut host = RecordingSurface::with_text("hE");
    let (_, actions) = s.handle(InputEvent::Delete, &mut host);
    assert_eq!(actions, vec![Action::DeleteBackward]);
    assert!(s.signals().is_empty());
    assert_eq!(host.field.text(), "h");
}

#[test]
fn delete_on_idle_after_space_is_plain_backspace() {
    let mut s = session();
    let mut host = RecordingSurface::with_text("a ");
    s.handle(InputEvent::Delete, &mut host);
    assert_eq!(host.field.text(), "a");
    assert!(s.signals().is_empty());
}

#[test]
fn delete_on_empty_field_is_harmless() {
    let mut s = session();
    let mut host = RecordingSurface::default();
    let (_, actions) = s.handle(InputEvent::Delete, &mut host);
    assert_eq!(actions, vec![Action::DeleteBackward]);
    assert_eq!(host.field.text(), "");
}

#[test]
fn space_commits_without_edit_then_inserts_space() {
    let mut s = session();
    let mut host = RecordingSurface::default();
    s.handle(InputEvent::DOT, &mut host);
    s.handle(InputEvent::DASH, &mut host);
    host.take_log();

    let (ui, actions) = s.handle(InputEvent::Space, &mut host);
    assert!(ui.is_idle());
    assert!(actions.is_empty());
    assert!(host.take_log().is_empty());
    assert_eq!(host.field.text(), "a");

    s.handle(InputEvent::Space, &mut host);
    assert_eq!(host.take_log(), vec!["insert( )"]);
    assert_eq!(host.field.text(), "a ");
}

#[test]
fn cursor_move_clears_buffer_without_edit() {
    let mut s = session();
    let mut host = RecordingSurface::with_text("ab");
    s.handle(InputEvent::DASH, &mut host);
    host.take_log();

    host.field.move_cursor_to(1);
    let (ui, actions) = s.handle(InputEvent::CursorMoved, &mut host);
    assert!(ui.is_idle());
    assert!(actions.is_empty());
    assert!(host.take_log().is_empty());

    // 新位置上输入的信号从空缓冲开始
    s.handle(InputEvent::DOT, &mut host);
    assert_eq!(host.field.text(), "aebt");
}

#[test]
fn types_a_word() {
    let mut s = session();
    let mut host = RecordingSurface::default();
    // s o s
    let word = [
        vec![Dot, Dot, Dot],
        vec![Dash, Dash, Dash],
        vec![Dot, Dot, Dot],
    ];
    for letter in &word {
        for &sig in letter {
            s.handle(InputEvent::Signal(sig), &mut host);
        }
        s.handle(InputEvent::Space, &mut host);
    }
    s.handle(InputEvent::Space, &mut host);
    assert_eq!(host.field.text(), "sos ");
}

#[test]
fn custom_placeholder_is_inserted() {
    let mut s = Session::new(Engine::new(MorseTable::standard()).placeholder('*'));
    let mut host = TextField::new();
    for _ in 0..6 {
        s.handle(InputEvent::DOT, &mut host);
    }
    assert_eq!(host.text(), "*");
    assert_eq!(s.ui_state().preview, "...... = *");
}

#[test]
fn process_does_not_touch_surface() {
    let mut s = session();
    let host = RecordingSurface::default();
    let actions = s.process(InputEvent::DOT, &host);
    assert_eq!(actions, vec![Action::Insert("e".to_string())]);
    assert!(host.log.is_empty());
    assert_eq!(s.signals(), &[Dot]);
}

#[test]
fn reset_returns_to_idle() {
    let mut s = session();
    let mut host = TextField::new();
    s.handle(InputEvent::DASH, &mut host);
    s.reset();
    assert!(s.ui_state().is_idle());
    assert_eq!(host.text(), "t");
}

fn event() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        4 => Just(InputEvent::DOT),
        4 => Just(InputEvent::DASH),
        2 => Just(InputEvent::Delete),
        2 => Just(InputEvent::Space),
    ]
}

proptest! {
    /// 不移动光标时：缓冲非空 => 光标前的字符就是缓冲的查表结果。
    #[test]
    fn buffer_always_describes_character_before_cursor(events in prop::collection::vec(event(), 0..64)) {
        let mut s = session();
        let mut host = TextField::new();
        for ev in events {
            s.handle(ev, &mut host);
            let ui = s.ui_state();
            if !ui.is_idle() {
                let expected = ui.resolution.display_char('?');
                prop_assert_eq!(host.character_before_cursor(), Some(expected));
            }
        }
    }

    /// 每个事件最多产生一对 delete + insert。
    #[test]
    fn at_most_one_delete_insert_pair(events in prop::collection::vec(event(), 0..64)) {
        let mut s = session();
        let mut host = TextField::with_text("x");
        for ev in events {
            let (_, actions) = s.handle(ev, &mut host);
            prop_assert!(actions.len() <= 2);
            if actions.len() == 2 {
                prop_assert_eq!(&actions[0], &Action::DeleteBackward);
                prop_assert!(matches!(actions[1], Action::Insert(_)));
            }
        }
    }
}
