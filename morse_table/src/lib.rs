//! 摩尔斯码表：内置 ITU 标准表（a-z、0-9），以及 TSV 码表加载。
use std::{collections::HashMap, fs, io, path::Path, path::PathBuf};

use morse_core::model::{ParseSignalError, Resolution, Signal, parse_signals, render_signals};
use morse_core::table::CodeTable;
use thiserror::Error;

const O: Signal = Signal::Dot;
const X: Signal = Signal::Dash;

/// 标准码表：唯一的 (字符, 信号序列) 清单，正反两张映射都由它生成。
pub const STANDARD: &[(char, &[Signal])] = &[
    ('a', &[O, X]),
    ('b', &[X, O, O, O]),
    ('c', &[X, O, X, O]),
    ('d', &[X, O, O]),
    ('e', &[O]),
    ('f', &[O, O, X, O]),
    ('g', &[X, X, O]),
    ('h', &[O, O, O, O]),
    ('i', &[O, O]),
    ('j', &[O, X, X, X]),
    ('k', &[X, O, X]),
    ('l', &[O, X, O, O]),
    ('m', &[X, X]),
    ('n', &[X, O]),
    ('o', &[X, X, X]),
    ('p', &[O, X, X, O]),
    ('q', &[X, X, O, X]),
    ('r', &[O, X, O]),
    ('s', &[O, O, O]),
    ('t', &[X]),
    ('u', &[O, O, X]),
    ('v', &[O, O, O, X]),
    ('w', &[O, X, X]),
    ('x', &[X, O, O, X]),
    ('y', &[X, O, X, X]),
    ('z', &[X, X, O, O]),
    ('1', &[O, X, X, X, X]),
    ('2', &[O, O, X, X, X]),
    ('3', &[O, O, O, X, X]),
    ('4', &[O, O, O, O, X]),
    ('5', &[O, O, O, O, O]),
    ('6', &[X, O, O, O, O]),
    ('7', &[X, X, O, O, O]),
    ('8', &[X, X, X, O, O]),
    ('9', &[X, X, X, X, O]),
    ('0', &[X, X, X, X, X]),
];

#[derive(Debug, Error)]
pub enum TableError {
    #[error("字符 {0:?} 重复定义")]
    DuplicateChar(char),

    #[error("电码 {code} 同时对应 {existing:?} 和 {new:?}")]
    DuplicateCode {
        code: String,
        existing: char,
        new: char,
    },

    #[error("字符 {0:?} 的电码为空")]
    EmptyCode(char),

    #[error("第 {line} 行：{message}")]
    Malformed { line: usize, message: String },

    #[error("第 {line} 行电码无效：{source}")]
    InvalidCode {
        line: usize,
        #[source]
        source: ParseSignalError,
    },

    #[error("读取码表 '{path}' 失败：{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 双向码表：`forward` 负责解码，`reverse` 负责反查。
#[derive(Debug, Clone, Default)]
pub struct MorseTable {
    forward: HashMap<Vec<Signal>, char>,
    reverse: HashMap<char, Vec<Signal>>,
    /// 插入顺序（用于打印码表）
    order: Vec<char>,
}

impl MorseTable {
    /// 内置标准表。
    pub fn standard() -> Self {
        let mut table = Self::default();
        for &(ch, signals) in STANDARD {
            table.insert_unchecked(ch, signals.to_vec());
        }
        table
    }

    /// 从 (字符, 信号序列) 清单构建，并校验唯一性。
    pub fn from_entries<I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (char, Vec<Signal>)>,
    {
        let mut table = Self::default();
        for (ch, signals) in entries {
            table.insert(ch, signals)?;
        }
        Ok(table)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_tsv_str(&s)?;
        tracing::info!(path = %path.display(), entries = table.len(), "loaded code table");
        Ok(table)
    }

    /// TSV 格式：
    ///
    /// - `char<TAB>code`，code 由 `.` 和 `-` 组成
    /// - 允许 `#` 开头注释行与空行
    pub fn from_tsv_str(s: &str) -> Result<Self, TableError> {
        let mut table = Self::default();
        for (idx, raw) in s.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut it = line.split('\t');
            let key = it.next().unwrap_or("").trim();
            let code = it.next().unwrap_or("").trim();
            if it.next().is_some() {
                return Err(TableError::Malformed {
                    line: line_no,
                    message: "多余的列".to_string(),
                });
            }
            let mut chars = key.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    return Err(TableError::Malformed {
                        line: line_no,
                        message: format!("第一列必须是单个字符，实际为 {key:?}"),
                    });
                }
            };
            let signals = parse_signals(code).map_err(|source| TableError::InvalidCode {
                line: line_no,
                source,
            })?;
            table.insert(ch, signals)?;
        }
        Ok(table)
    }

    /// 用 `overrides` 覆盖/扩展本表：同一字符以 `overrides` 为准。
    ///
    /// 先整体移除被覆盖的字符再逐个插入，只校验合并后的表是否唯一，
    /// 因此可以互换两个字符的电码。
    pub fn with_overrides(mut self, overrides: &MorseTable) -> Result<Self, TableError> {
        for (ch, _) in overrides.entries() {
            if let Some(old) = self.reverse.remove(&ch) {
                self.forward.remove(&old);
            }
        }
        self.order.retain(|c| overrides.signals_for(*c).is_none());
        for (ch, signals) in overrides.entries() {
            self.insert(ch, signals.to_vec())?;
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// 按插入顺序遍历 (字符, 信号序列)。
    pub fn entries(&self) -> impl Iterator<Item = (char, &[Signal])> + '_ {
        self.order
            .iter()
            .filter_map(|ch| self.reverse.get(ch).map(|s| (*ch, s.as_slice())))
    }

    fn insert(&mut self, ch: char, signals: Vec<Signal>) -> Result<(), TableError> {
        if signals.is_empty() {
            return Err(TableError::EmptyCode(ch));
        }
        if self.reverse.contains_key(&ch) {
            return Err(TableError::DuplicateChar(ch));
        }
        if let Some(&existing) = self.forward.get(&signals) {
            return Err(TableError::DuplicateCode {
                code: render_signals(&signals),
                existing,
                new: ch,
            });
        }
        self.insert_unchecked(ch, signals);
        Ok(())
    }

    fn insert_unchecked(&mut self, ch: char, signals: Vec<Signal>) {
        self.forward.insert(signals.clone(), ch);
        self.reverse.insert(ch, signals);
        self.order.push(ch);
    }
}

impl CodeTable for MorseTable {
    fn resolve(&self, signals: &[Signal]) -> Resolution {
        match self.forward.get(signals) {
            Some(&ch) => Resolution::Char(ch),
            None => Resolution::Unknown,
        }
    }

    fn signals_for(&self, ch: char) -> Option<&[Signal]> {
        self.reverse.get(&ch).map(Vec::as_slice)
    }
}
