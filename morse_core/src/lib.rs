//! `morse_core`：摩尔斯键盘的纯逻辑层，不做任何 I/O。
//!
//! 设计目标：
//! - **核心可复用**：键盘扩展、练习界面、CLI 都能复用同一套逻辑
//! - **分层清晰**：session -> processor -> context(信号缓冲) -> engine(码表) -> 输出（`Action` + `UiState`）
//! - **宿主无关**：只通过 `TextSurface` 的插入/删除/查询三个操作编辑宿主文本
pub mod context;
pub mod engine;
pub mod key_event;
pub mod model;
pub mod processor;
pub mod session;
pub mod surface;
pub mod table;
