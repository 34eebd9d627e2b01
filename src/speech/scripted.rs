//! 台本どおりのイベントを返す音声認識（テスト・デモ用）

use super::{
    EndHandler, ResultHandler, SpeechError, SpeechRecognition, SpeechRecognitionEvent,
    SpeechRecognitionProvider,
};

/// 事前に用意したイベントを再生する音声認識
///
/// - `start` で台本のイベントを順に `on_result` へ通知する
/// - 連続認識でなければ最初のイベントの後に停止し、`on_end` を呼ぶ
/// - 連続認識なら `stop` が呼ばれるまで認識中のまま
pub struct ScriptedRecognition {
    script: Vec<SpeechRecognitionEvent>,
    continuous: bool,
    interim_results: bool,
    listening: bool,
    on_result: Option<ResultHandler>,
    on_end: Option<EndHandler>,
}

impl ScriptedRecognition {
    pub fn new(script: Vec<SpeechRecognitionEvent>) -> Self {
        Self {
            script,
            continuous: false,
            interim_results: false,
            listening: false,
            on_result: None,
            on_end: None,
        }
    }

    /// 認識中かどうか
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    fn finish(&mut self) {
        self.listening = false;
        if let Some(on_end) = self.on_end.as_mut() {
            on_end();
        }
    }
}

impl SpeechRecognition for ScriptedRecognition {
    fn continuous(&self) -> bool {
        self.continuous
    }

    fn set_continuous(&mut self, continuous: bool) {
        self.continuous = continuous;
    }

    fn interim_results(&self) -> bool {
        self.interim_results
    }

    fn set_interim_results(&mut self, interim_results: bool) {
        self.interim_results = interim_results;
    }

    fn set_on_result(&mut self, handler: ResultHandler) {
        self.on_result = Some(handler);
    }

    fn set_on_end(&mut self, handler: EndHandler) {
        self.on_end = Some(handler);
    }

    fn start(&mut self) -> Result<(), SpeechError> {
        if self.listening {
            return Err(SpeechError::AlreadyStarted);
        }
        self.listening = true;
        log::debug!(
            "Scripted speech recognition started (continuous={}, events={})",
            self.continuous,
            self.script.len()
        );

        let limit = if self.continuous { self.script.len() } else { 1 };
        if let Some(on_result) = self.on_result.as_mut() {
            for event in self.script.iter().take(limit) {
                on_result(event);
            }
        }

        if !self.continuous {
            self.finish();
        }
        Ok(())
    }

    fn stop(&mut self) {
        if self.listening {
            log::debug!("Scripted speech recognition stopped");
            self.finish();
        }
    }
}

/// `ScriptedRecognition` を生成するプロバイダ
///
/// 台本が空のプロバイダは音声認識が使えない環境として振る舞う
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    script: Vec<SpeechRecognitionEvent>,
}

impl ScriptedProvider {
    pub fn new(script: Vec<SpeechRecognitionEvent>) -> Self {
        Self { script }
    }
}

impl SpeechRecognitionProvider for ScriptedProvider {
    fn create(&self) -> Result<Box<dyn SpeechRecognition>, SpeechError> {
        if self.script.is_empty() {
            log::warn!("Speech recognition is not available: no scripted events");
            return Err(SpeechError::Unavailable("no scripted events".to_string()));
        }
        Ok(Box::new(ScriptedRecognition::new(self.script.clone())))
    }
}
