use thiserror::Error;

use crate::common::api::error::ApiError;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("接口请求失败: {0}")]
    Api(#[from] ApiError),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("媒体地址返回异常状态码: {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("下载流中断: {0}")]
    Stream(String),
}
