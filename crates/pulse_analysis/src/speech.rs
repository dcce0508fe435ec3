use async_trait::async_trait;
use pulse_core::{Error, Result, SpeechSynthesizer};
use reqwest::Client;
use std::time::Duration;

/// Text-to-speech via the Google Translate TTS endpoint, returning MP3
/// bytes for the given text and language code.
pub struct GoogleTranslateTts {
    client: Client,
    base_url: String,
}

impl GoogleTranslateTts {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(Error::Http)?;
        Ok(Self {
            client,
            base_url: "https://translate.google.com/translate_tts".to_string(),
        })
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateTts {
    fn name(&self) -> &str {
        "GoogleTranslate"
    }

    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>> {
        let url = format!(
            "{}?ie=UTF-8&client=tw-ob&tl={}&q={}",
            self.base_url,
            lang,
            urlencoding::encode(text)
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(Error::Speech("Empty audio response".to_string()));
        }
        Ok(bytes.to_vec())
    }
}
