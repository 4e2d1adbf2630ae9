use crate::config::DownloadRange;

/// 按 (start, end, step) 产生递增的题目ID序列，闭区间。
/// 空区间 (start > end) 不产生任何ID，也不报错
pub struct RangeIds {
    next: u64,
    end: u64,
    step: u64,
    done: bool,
}

impl RangeIds {
    pub fn new(range: &DownloadRange) -> Self {
        Self {
            next: range.start_id,
            end: range.end_id,
            // 步长为 0 会原地踏步，按 1 处理
            step: range.step.max(1),
            done: false,
        }
    }
}

impl Iterator for RangeIds {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done || self.next > self.end {
            self.done = true;
            return None;
        }

        let current = self.next;
        match current.checked_add(self.step) {
            Some(v) => self.next = v,
            None => self.done = true,
        }

        Some(current)
    }
}
