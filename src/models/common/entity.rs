/// 各类记录共有的诊断接口
///
/// 日志、批量校验等通用代码通过该 trait 处理不同种类的记录。
pub trait EntityAttributes {
    /// 返回所有校验错误，合法时为空
    fn invalidity_info(&self) -> Vec<String>;

    /// 用于日志的可读标识，不保证唯一
    fn identification_string(&self) -> String;

    /// 记录种类名称
    fn entity_type_label(&self) -> &'static str;

    fn is_valid(&self) -> bool {
        self.invalidity_info().is_empty()
    }
}
