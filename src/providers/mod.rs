//! 提供商模块
//!
//! 每个子模块对应一个播客目录后端的客户端实现。
//! 目前只有 iTunes 目录一个提供商；传输抽象见 [`crate::transport`]。

pub mod itunes;
