use serde::Deserialize;

// -----------------------------------------------------------------------------------------------
// 短视频接口的返回格式

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetailResponse {
    #[serde(default)]
    pub data: VideoDetail,
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetail {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub question_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub video_image: String,
    #[serde(default)]
    pub video_url: String,
}

impl VideoDetail {
    // 题目ID、标题、视频地址都有效才允许下载
    pub fn is_downloadable(&self) -> bool {
        self.question_id > 0 && !self.title.is_empty() && !self.video_url.is_empty()
    }
}

// -----------------------------------------------------------------------------------------------
// 长视频（章节）接口的返回格式

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterResponse {
    pub data: Option<ChapterDetail>,
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterDetail {
    #[serde(default)]
    pub chapter_id: i64,
    #[serde(default)]
    pub chapter_name: String,
    #[serde(default)]
    pub lecture_data_list: Vec<LectureItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureItem {
    #[serde(default)]
    pub article_id: i64,
    #[serde(default)]
    pub chapter_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub high_video_url: String,
    #[serde(default)]
    pub middle_video_url: String,
    #[serde(default)]
    pub low_video_url: String,
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub play_count: i64,
    #[serde(default)]
    pub praise_count: i64,
}

impl LectureItem {
    // 只消费中等清晰度的地址
    pub fn is_downloadable(&self) -> bool {
        !self.middle_video_url.is_empty()
    }
}
