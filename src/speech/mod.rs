// =============================================================================
// 音声認識ケイパビリティ
// =============================================================================
// 音声検索で使用する音声認識機能のインターフェースを定義
//
// - ブラウザのSpeechRecognition相当の形（continuous, interimResults,
//   onresult, onend, start, stop）をトレイトとして表現
// - 呼び出し側はトレイトのみに依存し、グローバルなコンストラクタを参照しない
// - テスト用に台本どおりのイベントを返す実装を提供
// =============================================================================

mod scripted;

pub use scripted::{ScriptedProvider, ScriptedRecognition};

use std::ops::Index;
use thiserror::Error;

/// 音声認識エラー
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Speech recognition is already started")]
    AlreadyStarted,

    #[error("Speech recognition is unavailable: {0}")]
    Unavailable(String),
}

/// 認識候補
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechAlternative {
    pub transcript: String,
}

impl SpeechAlternative {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

/// 認識結果イベント
///
/// `results[i][j]` が i 番目の認識結果の j 番目の候補。
/// `event[0][0].transcript` のように2次元でインデックスできる
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeechRecognitionEvent {
    results: Vec<Vec<SpeechAlternative>>,
}

impl SpeechRecognitionEvent {
    pub fn new(results: Vec<Vec<SpeechAlternative>>) -> Self {
        Self { results }
    }

    /// 各結果の第一候補のみからなるイベントを作成
    pub fn from_transcripts<I, S>(transcripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            transcripts
                .into_iter()
                .map(|t| vec![SpeechAlternative::new(t)])
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[SpeechAlternative]> {
        self.results.get(index).map(Vec::as_slice)
    }

    pub fn transcript(&self, result: usize, alternative: usize) -> Option<&str> {
        self.get(result)?
            .get(alternative)
            .map(|a| a.transcript.as_str())
    }

    /// 各結果の第一候補を連結した文字列
    pub fn best_transcript(&self) -> String {
        self.results
            .iter()
            .filter_map(|alternatives| alternatives.first())
            .map(|a| a.transcript.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Index<usize> for SpeechRecognitionEvent {
    type Output = [SpeechAlternative];

    fn index(&self, index: usize) -> &Self::Output {
        &self.results[index]
    }
}

/// 認識結果のコールバック
pub type ResultHandler = Box<dyn FnMut(&SpeechRecognitionEvent) + Send>;

/// 認識終了のコールバック
pub type EndHandler = Box<dyn FnMut() + Send>;

/// 音声認識の実装が満たすべきインターフェース
pub trait SpeechRecognition: Send {
    /// 連続認識モードかどうか（falseなら最初の結果で終了）
    fn continuous(&self) -> bool;
    fn set_continuous(&mut self, continuous: bool);

    /// 確定前の途中結果も通知するかどうか
    fn interim_results(&self) -> bool;
    fn set_interim_results(&mut self, interim_results: bool);

    fn set_on_result(&mut self, handler: ResultHandler);
    fn set_on_end(&mut self, handler: EndHandler);

    /// 認識を開始
    ///
    /// # Errors
    /// 既に開始している場合は `SpeechError::AlreadyStarted`
    fn start(&mut self) -> Result<(), SpeechError>;

    /// 認識を停止（開始していなければ何もしない）
    fn stop(&mut self);
}

/// 音声認識インスタンスの生成元
pub trait SpeechRecognitionProvider {
    fn create(&self) -> Result<Box<dyn SpeechRecognition>, SpeechError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> SpeechRecognitionEvent {
        SpeechRecognitionEvent::new(vec![
            vec![
                SpeechAlternative::new("funny cats"),
                SpeechAlternative::new("funny hats"),
            ],
            vec![SpeechAlternative::new(" compilation ")],
        ])
    }

    #[test]
    fn test_two_dimensional_index() {
        let event = event();
        assert_eq!(event.len(), 2);
        assert_eq!(event[0][0].transcript, "funny cats");
        assert_eq!(event[0][1].transcript, "funny hats");
        assert_eq!(event[1][0].transcript, " compilation ");
    }

    #[test]
    fn test_transcript_lookup() {
        let event = event();
        assert_eq!(event.transcript(0, 1), Some("funny hats"));
        assert_eq!(event.transcript(1, 1), None);
        assert_eq!(event.transcript(2, 0), None);
        assert!(event.get(5).is_none());
    }

    #[test]
    fn test_best_transcript() {
        assert_eq!(event().best_transcript(), "funny cats compilation");

        let empty = SpeechRecognitionEvent::default();
        assert!(empty.is_empty());
        assert_eq!(empty.best_transcript(), "");

        // 候補が空の結果は読み飛ばす
        let sparse = SpeechRecognitionEvent::new(vec![vec![], vec![SpeechAlternative::new("dogs")]]);
        assert_eq!(sparse.best_transcript(), "dogs");
    }

    #[test]
    fn test_from_transcripts() {
        let event = SpeechRecognitionEvent::from_transcripts(["lofi", "beats"]);
        assert_eq!(event.len(), 2);
        assert_eq!(event[1][0], SpeechAlternative::new("beats"));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let _ = &SpeechRecognitionEvent::default()[0];
    }
}
