use crate::model::{Resolution, Signal};

/// 码表抽象：core 不关心码表来自内置数据还是 TSV 文件。
///
/// 约定：
/// - `resolve` 只做精确匹配；空序列永远是 `Unknown`
/// - 正反两个方向必须一致：`resolve(signals_for(c)) == Char(c)`
pub trait CodeTable: Send + Sync {
    /// 信号序列 -> 字符。
    fn resolve(&self, signals: &[Signal]) -> Resolution;

    /// 字符 -> 信号序列（反查，用于“重新打开”已上屏的字符）。
    fn signals_for(&self, ch: char) -> Option<&[Signal]>;
}

impl<T: CodeTable + ?Sized> CodeTable for &T {
    fn resolve(&self, signals: &[Signal]) -> Resolution {
        (**self).resolve(signals)
    }

    fn signals_for(&self, ch: char) -> Option<&[Signal]> {
        (**self).signals_for(ch)
    }
}
