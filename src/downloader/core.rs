use std::path::Path;

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::common::api::client::ApiClient;

use super::error::DownloadError;

/// 把媒体地址的响应体直接写到目标文件，返回写入的字节数。
/// 同名文件会被直接覆盖；中途失败可能留下写了一半的文件，不做清理
pub async fn download_to_file(
    client: &ApiClient,
    url: &str,
    output_path: &Path,
) -> Result<u64, DownloadError> {
    let response = client.get_raw_response(url).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(DownloadError::BadStatus(status));
    }

    let total_size = response
        .headers()
        .get(reqwest::header::CONTENT_LENGTH)
        .and_then(|ct_len| ct_len.to_str().ok())
        .and_then(|ct_len| ct_len.parse().ok())
        .unwrap_or(0u64);

    // 拿得到文件大小时才显示进度条
    let pb = if total_size > 0 {
        let pb = ProgressBar::new(total_size);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
            )
            .unwrap()
            .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    debug!("开始下载媒体文件: {}", url);

    let mut file = tokio::fs::File::create(output_path).await?;
    let mut stream = response.bytes_stream();

    let mut downloaded = 0u64;
    while let Some(chunk_result) = stream.next().await {
        let chunk = match chunk_result {
            Ok(chunk) => chunk,
            Err(error) => {
                if let Some(pb) = &pb {
                    pb.finish_with_message("下载失败");
                }
                return Err(DownloadError::Stream(error.to_string()));
            }
        };

        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(pb) = &pb {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(pb) = pb {
        pb.finish_with_message("下载完成");
    }

    Ok(downloaded)
}
