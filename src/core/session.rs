use crate::domain::model::{Content, GenerationConfig};
use crate::domain::ports::TextGenerator;
use crate::utils::error::Result;

/// 帶有角色歷史的對話，每次送出都附上完整歷史
pub struct ChatSession<'a, G: TextGenerator + ?Sized> {
    generator: &'a G,
    config: &'a GenerationConfig,
    history: Vec<Content>,
}

impl<'a, G: TextGenerator + ?Sized> ChatSession<'a, G> {
    pub fn start(generator: &'a G, config: &'a GenerationConfig, history: Vec<Content>) -> Self {
        Self {
            generator,
            config,
            history,
        }
    }

    pub async fn send_message(&mut self, text: &str) -> Result<String> {
        let mut contents = self.history.clone();
        contents.push(Content::user(text));

        let reply = self.generator.generate(&contents, self.config).await?;

        // 只有成功時才更新歷史
        contents.push(Content::model(reply.clone()));
        self.history = contents;
        Ok(reply)
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }
}
