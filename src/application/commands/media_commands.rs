//! Media Commands - 转写与插图生成

/// 转写录音命令
#[derive(Debug, Clone)]
pub struct TranscribeAudio {
    pub audio: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

/// 生成插图命令
#[derive(Debug, Clone)]
pub struct GenerateImage {
    pub prompt: String,
}
