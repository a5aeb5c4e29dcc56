//! Editor Session - 编辑器会话与异步流程编排
//!
//! 持有打开的绘本和当前编辑器状态。转写和插图生成拆成三步：
//! - `begin_*`: 同步置 LOADING，记下页面 ID，返回任务
//! - 调用外部服务（期间可以继续 dispatch 其他动作）
//! - `complete`: 按页面 ID 找回当前位置后写入结果
//!
//! 页面在等待期间被删除时丢弃结果

use crate::application::commands::handlers::NO_TRANSCRIPT_FALLBACK;
use crate::application::commands::SaveBook;
use crate::application::ports::{
    GenerateImageRequest, ImageGeneratorPort, TranscribeRequest, TranscriberPort,
};
use crate::domain::book::{Book, PageId};
use crate::domain::editor::{build_illustration_prompt, reduce, Action, EditorState, PagePatch};
use crate::domain::AsyncData;

/// 转写失败时展示的信息
pub const TRANSCRIPTION_FAILED: &str = "Transcription failed";
/// 插图生成失败时展示的信息
pub const IMAGE_GENERATION_FAILED: &str = "Image generation failed";

/// 异步流程类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    /// 录音转写，结果写入 caption
    Transcription,
    /// 插图生成，结果写入 image
    ImageGeneration,
}

impl Workflow {
    fn failure_message(self) -> &'static str {
        match self {
            Workflow::Transcription => TRANSCRIPTION_FAILED,
            Workflow::ImageGeneration => IMAGE_GENERATION_FAILED,
        }
    }

    fn patch(self, value: AsyncData<String>) -> PagePatch {
        match self {
            Workflow::Transcription => PagePatch::caption(value),
            Workflow::ImageGeneration => PagePatch::image(value),
        }
    }
}

/// 进行中的任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingJob {
    pub workflow: Workflow,
    pub page_id: PageId,
    /// 插图提示词，转写任务为 None
    pub prompt: Option<String>,
}

/// 任务结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Succeeded(String),
    Failed,
}

/// 编辑器会话
#[derive(Debug, Clone)]
pub struct EditorSession {
    book: Book,
    state: EditorState,
}

impl EditorSession {
    pub fn new(book: Book, state: EditorState) -> Self {
        Self { book, state }
    }

    /// 打开绘本并定位到指定页
    pub fn open(book: Book, page_index: usize) -> Self {
        let state = EditorState::from_book(&book, page_index);
        Self { book, state }
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// 应用一个动作
    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(action = action.name(), "Dispatch");
        self.state = reduce(&self.state, action);
    }

    /// 开始转写当前页
    ///
    /// 当前页文字正在转写时拒绝，返回 None
    pub fn begin_transcription(&mut self) -> Option<PendingJob> {
        if !self.state.view().can_record() {
            tracing::debug!(page_index = self.state.page_index(), "Transcription already in flight");
            return None;
        }

        Some(self.begin(Workflow::Transcription, None))
    }

    /// 开始为当前页生成插图
    ///
    /// 文字为空或插图正在生成时为空操作
    pub fn begin_image_generation(&mut self) -> Option<PendingJob> {
        if !self.state.view().can_generate_image() {
            return None;
        }

        let prompt = build_illustration_prompt(&self.state, self.state.page_index())?;
        Some(self.begin(Workflow::ImageGeneration, Some(prompt)))
    }

    fn begin(&mut self, workflow: Workflow, prompt: Option<String>) -> PendingJob {
        let page_index = self.state.page_index();
        let page_id = self.state.current_page().id().clone();

        self.dispatch(Action::update_page(
            page_index,
            workflow.patch(AsyncData::loading()),
        ));

        tracing::debug!(page_id = %page_id, workflow = ?workflow, "Workflow started");

        PendingJob {
            workflow,
            page_id,
            prompt,
        }
    }

    /// 写入任务结果
    ///
    /// 返回结果是否落到页面上；页面已删除时返回 false
    pub fn complete(&mut self, job: &PendingJob, outcome: JobOutcome) -> bool {
        let Some(page_index) = self.state.position_of(&job.page_id) else {
            tracing::warn!(
                page_id = %job.page_id,
                workflow = ?job.workflow,
                "Page deleted before workflow finished, dropping result"
            );
            return false;
        };

        let action = match outcome {
            JobOutcome::Succeeded(value) => Action::UpdatePage {
                page_index,
                payload: job.workflow.patch(AsyncData::loaded(value)),
                error: None,
            },
            JobOutcome::Failed => {
                let message = job.workflow.failure_message().to_string();
                Action::UpdatePage {
                    page_index,
                    payload: job.workflow.patch(AsyncData::failed(message.clone())),
                    error: Some(message),
                }
            }
        };

        self.dispatch(action);
        true
    }

    /// 转写录音并写入当前页
    pub async fn run_transcription(
        &mut self,
        transcriber: &dyn TranscriberPort,
        audio: Vec<u8>,
    ) -> bool {
        let Some(job) = self.begin_transcription() else {
            return false;
        };

        let outcome = match transcriber.transcribe(TranscribeRequest::webm(audio)).await {
            Ok(response) => JobOutcome::Succeeded(
                response
                    .transcript
                    .unwrap_or_else(|| NO_TRANSCRIPT_FALLBACK.to_string()),
            ),
            Err(e) => {
                tracing::error!(page_id = %job.page_id, error = %e, "Transcription failed");
                JobOutcome::Failed
            }
        };

        self.complete(&job, outcome)
    }

    /// 为当前页生成插图
    pub async fn run_image_generation(&mut self, generator: &dyn ImageGeneratorPort) -> bool {
        let Some(job) = self.begin_image_generation() else {
            return false;
        };
        let prompt = job.prompt.clone().unwrap_or_default();

        let outcome = match generator.generate(GenerateImageRequest { prompt }).await {
            Ok(image) => JobOutcome::Succeeded(image.into_value()),
            Err(e) => {
                tracing::error!(page_id = %job.page_id, error = %e, "Image generation failed");
                JobOutcome::Failed
            }
        };

        self.complete(&job, outcome)
    }

    /// 生成保存命令
    pub fn save_command(&self) -> SaveBook {
        SaveBook {
            base: self.book.clone(),
            draft: self.state.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::{BookId, Page};
    use crate::infrastructure::adapters::{FakeImageGenerator, FakeTranscriber};

    fn session(captions: &[&str], page_index: usize) -> EditorSession {
        let pages = captions
            .iter()
            .enumerate()
            .map(|(i, c)| Page::new(PageId::from(format!("p{}", i).as_str()), *c, ""))
            .collect();
        EditorSession::open(Book::new(BookId::from("b"), "T", pages), page_index)
    }

    #[test]
    fn test_begin_transcription_sets_loading() {
        let mut s = session(&["one"], 0);
        let job = s.begin_transcription().unwrap();
        assert_eq!(job.page_id, PageId::from("p0"));
        assert!(s.state().current_page().caption().is_loading());
    }

    #[test]
    fn test_retrigger_transcription_refused() {
        let mut s = session(&["one"], 0);
        assert!(s.begin_transcription().is_some());
        assert!(s.begin_transcription().is_none());
    }

    #[test]
    fn test_image_noop_on_blank_caption() {
        let mut s = session(&["  "], 0);
        assert!(s.begin_image_generation().is_none());
        assert_eq!(s.state().current_page().image(), &AsyncData::loaded(String::new()));
    }

    #[test]
    fn test_image_noop_while_in_flight() {
        let mut s = session(&["a cat"], 0);
        assert!(s.begin_image_generation().is_some());
        assert!(s.begin_image_generation().is_none());
    }

    #[test]
    fn test_image_job_carries_context_prompt() {
        let mut s = session(&["A", "B"], 1);
        let job = s.begin_image_generation().unwrap();
        let prompt = job.prompt.unwrap();
        assert!(prompt.starts_with("Previous pages:\n1. A\nCurrent page:\nB"));
    }

    #[test]
    fn test_failure_mirrors_message_into_error() {
        let mut s = session(&["one"], 0);
        let job = s.begin_image_generation().unwrap();
        assert!(s.complete(&job, JobOutcome::Failed));

        assert_eq!(
            s.state().current_page().image(),
            &AsyncData::failed(IMAGE_GENERATION_FAILED.to_string())
        );
        assert_eq!(s.state().error(), Some(IMAGE_GENERATION_FAILED));
    }

    #[test]
    fn test_result_follows_page_after_earlier_delete() {
        let mut s = session(&["zero", "one", "two"], 2);
        let job = s.begin_transcription().unwrap();

        s.dispatch(Action::DeletePage { page_index: 0 });
        assert!(s.complete(&job, JobOutcome::Succeeded("new text".to_string())));

        assert_eq!(s.state().position_of(&PageId::from("p2")), Some(1));
        assert_eq!(s.state().pages()[1].caption_text(), "new text");
        assert_eq!(s.state().pages()[0].caption_text(), "one");
    }

    #[test]
    fn test_result_dropped_when_page_deleted() {
        let mut s = session(&["zero", "one"], 1);
        let job = s.begin_image_generation().unwrap();
        s.dispatch(Action::DeletePage { page_index: 1 });
        let before = s.state().clone();

        assert!(!s.complete(&job, JobOutcome::Succeeded("/img.png".to_string())));
        assert_eq!(s.state(), &before);
    }

    #[tokio::test]
    async fn test_run_transcription_with_fake() {
        let mut s = session(&[], 0);
        let transcriber = FakeTranscriber::with_transcript("Hello");
        assert!(s.run_transcription(&transcriber, b"audio".to_vec()).await);
        assert_eq!(
            s.state().current_page().caption(),
            &AsyncData::loaded("Hello".to_string())
        );
        assert!(s.state().error().is_none());
    }

    #[tokio::test]
    async fn test_run_transcription_fallback_and_failure() {
        let mut s = session(&[], 0);
        assert!(s.run_transcription(&FakeTranscriber::silent(), vec![1]).await);
        assert_eq!(s.state().current_page().caption_text(), NO_TRANSCRIPT_FALLBACK);

        assert!(s.run_transcription(&FakeTranscriber::failing(), vec![1]).await);
        assert_eq!(s.state().error(), Some(TRANSCRIPTION_FAILED));
        assert!(s.state().current_page().caption().has_error());
    }

    #[tokio::test]
    async fn test_run_transcription_keeps_empty_text() {
        let mut s = session(&["old"], 0);
        assert!(s.run_transcription(&FakeTranscriber::with_transcript(""), vec![1]).await);
        assert_eq!(s.state().current_page().caption(), &AsyncData::loaded(String::new()));
    }

    #[tokio::test]
    async fn test_run_image_generation_then_save() {
        let mut s = session(&["A lighthouse"], 0);
        assert!(s.run_image_generation(&FakeImageGenerator::new()).await);
        assert!(s.state().current_page().image().is_ready());

        let command = s.save_command();
        let saved = command.draft.to_book(&command.base);
        assert!(!saved.pages()[0].image().is_empty());
    }
}
