use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use tracing::info;

use jiakao_downloader::cli::{Cli, SweepMode};
use jiakao_downloader::common::api::client::ApiClient;
use jiakao_downloader::config::SweepConfig;
use jiakao_downloader::downloader::{SeenTitles, run_chapter_sweep, run_short_sweep};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Cli::parse();
    let config = SweepConfig::production(&args.output_dir);
    let client = ApiClient::new(Duration::from_secs(args.timeout))?;

    // 单个条目的失败只记日志，整体始终跑完所有区间
    let stats = match args.mode {
        SweepMode::Short => {
            info!("开始短视频扫描，共 {} 段区间", config.ranges.len());
            let mut seen = SeenTitles::new();
            run_short_sweep(&client, &config, &mut seen).await
        }
        SweepMode::Long => {
            info!(
                "开始长视频章节扫描: 第 {} - {} 章",
                config.chapter_range.start, config.chapter_range.end
            );
            run_chapter_sweep(&client, &config).await
        }
    };

    println!(
        "{} 下载 {} 个，重复 {} 个，跳过 {} 个，失败 {} 个",
        "扫描完成！".green(),
        stats.downloaded,
        stats.duplicates,
        stats.skipped,
        stats.failed
    );

    Ok(())
}
