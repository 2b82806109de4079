use crate::core::forms::Form;
use crate::core::render::render;
use crate::core::session::ChatSession;
use crate::domain::model::{GenerationConfig, Rendered};
use crate::domain::ports::{Storage, TextGenerator};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// 驗證表單、組提示詞、呼叫模型、格式化回覆
pub struct Studio<G: TextGenerator> {
    generator: G,
    generation: GenerationConfig,
    monitor: SystemMonitor,
}

impl<G: TextGenerator> Studio<G> {
    pub fn new(generator: G, generation: GenerationConfig) -> Self {
        Self::new_with_monitoring(generator, generation, false)
    }

    pub fn new_with_monitoring(generator: G, generation: GenerationConfig, monitor: bool) -> Self {
        Self {
            generator,
            generation,
            monitor: SystemMonitor::new(monitor),
        }
    }

    pub async fn run(&self, form: &Form) -> Result<Rendered> {
        let mode = form.mode();
        tracing::info!("{} | {}", mode.title(), mode.subheading());

        let plan = form.plan()?;
        tracing::debug!("Prompt for {}: {}", mode, plan.history[0].text());

        self.monitor.log_stats("Before request");
        tracing::info!("⏳ {}", mode.progress_message());

        let mut session = ChatSession::start(&self.generator, &self.generation, plan.history);
        let reply = session.send_message(&plan.message).await;

        self.monitor.log_final_stats();

        let reply = reply?;
        tracing::debug!("Received {} characters for {}", reply.len(), mode);
        Ok(render(mode, &reply))
    }
}

/// 以 `{mode}-{timestamp}.md` 存檔，回傳實際路徑
pub async fn save_rendered<S: Storage>(storage: &S, rendered: &Rendered) -> Result<String> {
    let filename = format!(
        "{}-{}.md",
        rendered.mode,
        chrono::Local::now().format("%Y%m%dT%H%M%S")
    );
    let path = storage
        .write_file(&filename, rendered.body.as_bytes())
        .await?;
    tracing::info!("📁 Output saved to: {}", path);
    Ok(path)
}
