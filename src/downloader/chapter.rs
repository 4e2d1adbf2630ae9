use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::common::api::client::ApiClient;
use crate::common::api::models::{ChapterResponse, LectureItem};
use crate::common::utils::sanitize_filename;
use crate::config::SweepConfig;

use super::core::download_to_file;
use super::error::DownloadError;
use super::sweep::SweepStats;

/// 长视频扫描：按章节ID逐个拉取课程列表，挨个下载中等清晰度的视频。
/// 这条路径不做去重，课程在源数据里本身就不重复
pub async fn run_chapter_sweep(client: &ApiClient, config: &SweepConfig) -> SweepStats {
    let mut stats = SweepStats::default();

    for chapter_id in config.chapter_range.start..=config.chapter_range.end {
        let url = config.long_url(chapter_id);
        let resp = match client.get::<ChapterResponse>(&url).await {
            Ok(resp) => resp,
            Err(e) => {
                error!("章节 {} 获取失败: {}", chapter_id, e);
                stats.failed += 1;
                continue;
            }
        };

        let Some(chapter) = resp.data else {
            warn!("章节 {} 返回为空，跳过", chapter_id);
            stats.skipped += 1;
            continue;
        };

        info!(
            "章节 {} 共有 {} 个课程",
            chapter.chapter_name,
            chapter.lecture_data_list.len()
        );

        let chapter_dir = config
            .chapter_root
            .join(sanitize_filename(&chapter.chapter_name));
        if let Err(e) = tokio::fs::create_dir_all(&chapter_dir).await {
            error!("创建章节目录失败: {}, 错误: {}", chapter_dir.display(), e);
            stats.failed += 1;
            continue;
        }

        for lecture in &chapter.lecture_data_list {
            if !lecture.is_downloadable() {
                debug!("课程 {} 没有中等清晰度地址，跳过", lecture.subtitle);
                stats.skipped += 1;
                continue;
            }

            match download_lecture(client, lecture, &chapter_dir).await {
                Ok(_) => {
                    info!("下载完成: {}", lecture.subtitle);
                    stats.downloaded += 1;
                }
                Err(e) => {
                    error!("课程 {} 下载失败: {}", lecture.subtitle, e);
                    stats.failed += 1;
                }
            }
        }
    }

    stats
}

async fn download_lecture(
    client: &ApiClient,
    lecture: &LectureItem,
    chapter_dir: &Path,
) -> Result<u64, DownloadError> {
    let file_name = format!("{}.mp4", sanitize_filename(&lecture.subtitle));
    let output_path = chapter_dir.join(file_name);
    download_to_file(client, &lecture.middle_video_url, &output_path).await
}
