//! Parser tests module
//!
//! - state: ParserState 单元测试
//! - neutralization: 缺失 / 多余 token 的修复
//! - fuzz: 随机 token 序列的性质测试

mod state;
