use std::path::Path;

use tracing::{debug, error, info};

use crate::common::api::client::ApiClient;
use crate::common::api::models::{VideoDetail, VideoDetailResponse};
use crate::common::utils::sanitize_filename;
use crate::config::SweepConfig;

use super::core::download_to_file;
use super::dedupe::SeenTitles;
use super::error::DownloadError;
use super::range::RangeIds;

// -----------------------------------------------------------------------------------------------

/// 单个题目ID的处理结果，驱动循环据此记日志并继续，错误不会向外抛
#[derive(Debug)]
pub enum ItemOutcome {
    Downloaded { title: String, question_id: i64 },
    DuplicateTitle(String),
    NotDownloadable,
    Failed(DownloadError),
}

/// 一次扫描的汇总计数
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepStats {
    pub downloaded: u64,
    pub duplicates: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl SweepStats {
    pub fn record(&mut self, outcome: &ItemOutcome) {
        match outcome {
            ItemOutcome::Downloaded { .. } => self.downloaded += 1,
            ItemOutcome::DuplicateTitle(_) => self.duplicates += 1,
            ItemOutcome::NotDownloadable => self.skipped += 1,
            ItemOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.downloaded + self.duplicates + self.skipped + self.failed
    }
}

// -----------------------------------------------------------------------------------------------

/// 短视频扫描：按配置的区间顺序逐个题目ID串行处理，重复标题只下载一次。
/// 去重集合跨区间共享，由调用方持有
pub async fn run_short_sweep(
    client: &ApiClient,
    config: &SweepConfig,
    seen: &mut SeenTitles,
) -> SweepStats {
    let mut stats = SweepStats::default();

    for range in &config.ranges {
        let mut first = true;
        for question_id in RangeIds::new(range) {
            // 处理区间第一个ID之前确保输出目录存在
            if first {
                first = false;
                if let Err(e) = tokio::fs::create_dir_all(&range.dest_dir).await {
                    error!("创建目录失败: {}, 错误: {}", range.dest_dir.display(), e);
                }
            }

            let outcome =
                process_question(client, config, &range.dest_dir, question_id, seen).await;
            log_outcome(question_id, &outcome);
            stats.record(&outcome);
        }
    }

    stats
}

// 取元数据、查重、下载，任何一步失败都只影响当前ID
async fn process_question(
    client: &ApiClient,
    config: &SweepConfig,
    dest_dir: &Path,
    question_id: u64,
    seen: &mut SeenTitles,
) -> ItemOutcome {
    let url = config.short_url(question_id);
    let resp = match client.get::<VideoDetailResponse>(&url).await {
        Ok(resp) => resp,
        Err(e) => return ItemOutcome::Failed(e.into()),
    };

    let detail = resp.data;
    if seen.contains(&detail.title) {
        return ItemOutcome::DuplicateTitle(detail.title);
    }

    if !detail.is_downloadable() {
        return ItemOutcome::NotDownloadable;
    }

    info!("获取Id为{}的下载链接: {}", detail.question_id, detail.title);

    match download_video(client, &detail, dest_dir).await {
        Ok(_) => {
            // 只有完整写盘之后才记入去重集合，失败的标题之后还有机会重下
            seen.record(&detail.title, detail.question_id);
            ItemOutcome::Downloaded {
                title: detail.title,
                question_id: detail.question_id,
            }
        }
        Err(e) => ItemOutcome::Failed(e),
    }
}

async fn download_video(
    client: &ApiClient,
    detail: &VideoDetail,
    dest_dir: &Path,
) -> Result<u64, DownloadError> {
    let file_name = format!("{}.mp4", sanitize_filename(&detail.title));
    let output_path = dest_dir.join(file_name);
    download_to_file(client, &detail.video_url, &output_path).await
}

fn log_outcome(question_id: u64, outcome: &ItemOutcome) {
    match outcome {
        ItemOutcome::Downloaded { title, .. } => info!("下载完成: {}", title),
        ItemOutcome::DuplicateTitle(title) => info!("重复文件: {}", title),
        ItemOutcome::NotDownloadable => debug!("Id {} 没有有效视频，跳过", question_id),
        ItemOutcome::Failed(e) => error!("Id {} 处理失败: {}", question_id, e),
    }
}
