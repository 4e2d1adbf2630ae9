use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// 驾考视频批量下载器
#[derive(Parser, Debug)]
#[command(name = "jkdl")]
#[command(version = "1.0")]
#[command(about = "驾考宝典视频批量下载工具", long_about = None)]
pub struct Cli {
    /// 下载模式
    #[arg(long, value_enum)]
    #[arg(default_value_t = SweepMode::Short)]
    #[arg(help = "short=按题目ID区间扫描短视频, long=按章节下载长视频")]
    pub mode: SweepMode,

    /// 视频保存目录
    #[arg(long, value_name = "DIR")]
    #[arg(default_value = "video")]
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub output_dir: PathBuf,

    /// 单次请求超时时间 (秒)
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub timeout: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SweepMode {
    /// 按题目ID区间扫描短视频
    Short,
    /// 按章节下载长视频
    Long,
}
