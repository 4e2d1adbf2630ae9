use std::collections::HashMap;

/// 本次运行内已经下载成功的标题，跨所有区间共享。
/// 进程退出即丢弃，不做持久化
#[derive(Debug, Default)]
pub struct SeenTitles {
    inner: HashMap<String, i64>,
}

impl SeenTitles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.inner.contains_key(title)
    }

    /// 只在文件完整写盘之后调用
    pub fn record(&mut self, title: &str, question_id: i64) {
        self.inner.insert(title.to_string(), question_id);
    }

    pub fn question_id(&self, title: &str) -> Option<i64> {
        self.inner.get(title).copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
