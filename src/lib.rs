//! Peer Evaluation - 互评提交记录
//!
//! 一条记录表示某门课程某次评估中，一名学生对队友的打分。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体（存储形态）
//! - `errors`: 统一错误处理
//! - `models`: 提交记录的构造、校验、拷贝与诊断输出
//! - `services`: 批量读取与检查
//! - `utils`: 字段清洗与校验规则

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod services;
pub mod utils;
