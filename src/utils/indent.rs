/// 诊断输出使用的缩进单位
pub const INDENT_UNIT: &str = " ";

/// 生成 `level` 个缩进单位组成的前缀
pub fn indent(level: usize) -> String {
    INDENT_UNIT.repeat(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(3), "   ");
    }
}
