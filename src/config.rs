use std::path::{Path, PathBuf};

// 短视频接口，{id} 会被替换成题目ID
pub const SHORT_ENDPOINT: &str =
    "http://sirius.kakamobi.cn/api/web/short-video/get-data.htm?questionId={id}&_r=11116166127466086078";

// 长视频接口，{id} 会被替换成章节ID
pub const LONG_ENDPOINT: &str =
    "http://sirius.kakamobi.cn/api/web/long-video/get-data.htm?chapterId={id}&projectId=0&_r=11116166127466086078";

/// 一段题目ID的扫描区间，对应一个输出目录
#[derive(Debug, Clone)]
pub struct DownloadRange {
    pub start_id: u64,
    /// 闭区间，end_id 本身也会被处理
    pub end_id: u64,
    pub step: u64,
    pub dest_dir: PathBuf,
}

#[derive(Debug, Clone, Copy)]
pub struct ChapterRange {
    pub start: u64,
    pub end: u64,
}

/// 一次运行的完整配置。全部显式传入，测试时可以换成桩服务和临时目录
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub ranges: Vec<DownloadRange>,
    pub chapter_range: ChapterRange,
    pub short_endpoint: String,
    pub long_endpoint: String,
    /// 章节目录的父目录
    pub chapter_root: PathBuf,
}

impl SweepConfig {
    /// 线上固定配置，区间按各科目章节的题目ID分布划分
    pub fn production(output_root: impl AsRef<Path>) -> Self {
        let root = output_root.as_ref();
        let range = |start_id: u64, end_id: u64, dir: &str| DownloadRange {
            start_id,
            end_id,
            step: 100,
            dest_dir: root.join(dir),
        };

        Self {
            ranges: vec![
                range(800_000, 836_400, "第1章 道路交通安全法律，法律和规章"),
                range(836_500, 867_600, "第2章 交通信号"),
                range(867_700, 886_300, "第3章 安全行驶，文明驾驶基础知识"),
                range(886_400, 897_200, "第4章 机动车驾驶操作相关基础知识"),
                range(1_092_200, 1_259_700, "第5章 其他"),
            ],
            chapter_range: ChapterRange { start: 1, end: 25 },
            short_endpoint: SHORT_ENDPOINT.to_string(),
            long_endpoint: LONG_ENDPOINT.to_string(),
            chapter_root: root.to_path_buf(),
        }
    }

    pub fn short_url(&self, question_id: u64) -> String {
        self.short_endpoint.replace("{id}", &question_id.to_string())
    }

    pub fn long_url(&self, chapter_id: u64) -> String {
        self.long_endpoint.replace("{id}", &chapter_id.to_string())
    }
}
