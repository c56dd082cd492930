//! Lexer tests module
//!
//! - basic: 基础测试（位置、空白符、大小写）
//! - operators: 运算符测试
//! - keywords: 关键字测试（THEN / ELSE / ELSEIF / END IF）
//! - errors: 错误恢复测试
//! - state: 状态机契约测试

mod basic;
