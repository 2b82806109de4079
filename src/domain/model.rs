use serde::{Deserialize, Serialize};
use std::fmt;

/// 五種操作模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Translate,
    Blog,
    Code,
    Caption,
    Ask,
}

impl Mode {
    pub const ALL: [Mode; 5] = [Mode::Translate, Mode::Blog, Mode::Code, Mode::Caption, Mode::Ask];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Translate => "translate",
            Mode::Blog => "blog",
            Mode::Code => "code",
            Mode::Caption => "caption",
            Mode::Ask => "ask",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Translate => "TRANSLATION GENERATOR 🌍",
            Mode::Blog => "BLOG GENERATOR 📝",
            Mode::Code => "CODE GENERATOR 💻",
            Mode::Caption => "CAPTION & HASHTAG GENERATOR 📷",
            Mode::Ask => "ASK AI 🤖",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Mode::Translate => "T R A N S L A T I O N 🌍",
            Mode::Blog => "B L O G 😎",
            Mode::Code => "C O D E 🤖",
            Mode::Caption => "C A P T I O N  &  H A S H T A G S 📷",
            Mode::Ask => "ASK AI 🤖",
        }
    }

    pub fn subheading(&self) -> &'static str {
        match self {
            Mode::Translate => "ENTER TEXT TO TRANSLATE INTO ANOTHER LANGUAGE!",
            Mode::Blog => "ENTER YOUR TOPIC AND GET A BLOG POST GENERATED FOR YOU!",
            Mode::Code => "ENTER YOUR PROBLEM STATEMENT AND GET CODE GENERATED!",
            Mode::Caption => "UPLOAD AN IMAGE AND GENERATE CAPTION AND HASHTAGS!",
            Mode::Ask => "Enter your question and get an AI-generated answer!",
        }
    }

    /// 等待模型回應時顯示的訊息
    pub fn progress_message(&self) -> &'static str {
        match self {
            Mode::Translate => "Translating...!",
            Mode::Blog => "Generating blog post...!",
            Mode::Code => "Generating code...!",
            Mode::Caption => "Generating caption and hashtags...!",
            Mode::Ask => "Generating answer...!",
        }
    }

    pub fn render_kind(&self) -> RenderKind {
        match self {
            Mode::Code => RenderKind::Code,
            _ => RenderKind::Text,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    Text,
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// 一則帶角色標記的訊息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some(Role::User),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Some(Role::Model),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }

    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            top_p: 1.0,
            max_output_tokens: 2048,
            response_mime_type: "text/plain".to_string(),
        }
    }
}

/// 送給模型的一次請求: 聊天歷史加上新訊息
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPlan {
    pub history: Vec<Content>,
    pub message: String,
}

/// 已經格式化好的輸出
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub mode: Mode,
    pub kind: RenderKind,
    pub body: String,
}
