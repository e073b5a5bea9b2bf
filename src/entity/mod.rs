//! SeaORM 实体定义
//!
//! 这些实体描述记录在存储中的形态，与 models 模块中的业务实体分离。
//! 本 crate 不负责读写数据库，只负责两种形态之间的转换。

pub mod submissions;
