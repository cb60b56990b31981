//! 整段文本与电码串互转（`encode` / `decode` 子命令）。
//!
//! 电码串格式：字符之间用空格分隔，单词之间用 `/` 分隔，例如 `... --- ... / .-`。
use morse_core::model::{ParseSignalError, Resolution, parse_signals, render_signals};
use morse_core::table::CodeTable;

/// 文本 -> 电码串。码表里找不到的字符（先精确查，再查小写）输出占位字符。
pub fn encode(table: &dyn CodeTable, text: &str, placeholder: char) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .map(|ch| {
                    table
                        .signals_for(ch)
                        .or_else(|| ch.to_lowercase().next().and_then(|l| table.signals_for(l)))
                        .map(render_signals)
                        .unwrap_or_else(|| placeholder.to_string())
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

/// 电码串 -> 文本。未匹配的电码输出占位字符；含非 `.`/`-` 字符时报错。
pub fn decode(
    table: &dyn CodeTable,
    code: &str,
    placeholder: char,
) -> Result<String, ParseSignalError> {
    let mut words = Vec::new();
    for word in code.split('/') {
        let mut out = String::new();
        for token in word.split_whitespace() {
            let signals = parse_signals(token)?;
            match table.resolve(&signals) {
                Resolution::Char(ch) => out.push(ch),
                Resolution::Unknown => out.push(placeholder),
            }
        }
        if !out.is_empty() {
            words.push(out);
        }
    }
    Ok(words.join(" "))
}
