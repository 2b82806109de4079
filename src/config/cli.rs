use crate::core::forms::{
    AskForm, BlogForm, CaptionForm, CodeForm, Form, ProgrammingType, TranslateForm, MIN_BLOG_WORDS,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "gemini-studio")]
#[command(about = "Translate, write blog posts, generate code, captions and answers with Gemini")]
#[command(version)]
pub struct CliConfig {
    /// Path to TOML configuration file (defaults to ./gemini-studio.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API key, overrides the config file and GEMINI_API_KEY
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, global = true)]
    pub model: Option<String>,

    #[arg(long, global = true)]
    pub temperature: Option<f64>,

    #[arg(long, global = true)]
    pub top_p: Option<f64>,

    #[arg(long, global = true)]
    pub max_output_tokens: Option<u32>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// Save the rendered output as markdown
    #[arg(long, global = true)]
    pub save: bool,

    #[arg(long, global = true)]
    pub output_dir: Option<String>,

    /// Print the prompt without calling the model
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[arg(long, global = true, help = "Log CPU and memory usage around the model call")]
    pub monitor: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// TRANSLATION GENERATOR 🌍
    Translate {
        #[arg(long = "from", default_value = "")]
        input_language: String,

        #[arg(long = "to", default_value = "")]
        output_language: String,

        #[arg(long, default_value = "")]
        text: String,
    },

    /// BLOG GENERATOR 📝
    Blog {
        #[arg(long, default_value = "")]
        title: String,

        /// Comma-separated keywords
        #[arg(long, default_value = "")]
        keywords: String,

        #[arg(long, default_value_t = MIN_BLOG_WORDS)]
        words: u32,
    },

    /// CODE GENERATOR 💻
    Code {
        #[arg(long, default_value = "")]
        problem: String,

        #[arg(long, default_value = "")]
        language: String,

        #[arg(long = "type", value_enum, ignore_case = true, default_value_t = ProgrammingType::Static)]
        programming_type: ProgrammingType,
    },

    /// CAPTION & HASHTAG GENERATOR 📷
    Caption {
        /// jpg, jpeg or png image
        #[arg(long)]
        image: Option<PathBuf>,

        #[arg(long, default_value = "")]
        language: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// ASK AI 🤖
    Ask {
        #[arg(default_value = "")]
        question: String,
    },

    /// List the available modes
    Modes,
}

impl Command {
    pub fn into_form(self) -> Option<Form> {
        let form = match self {
            Command::Translate {
                input_language,
                output_language,
                text,
            } => Form::Translate(TranslateForm {
                input_language,
                output_language,
                text,
            }),
            Command::Blog {
                title,
                keywords,
                words,
            } => Form::Blog(BlogForm {
                title,
                keywords,
                words,
            }),
            Command::Code {
                problem,
                language,
                programming_type,
            } => Form::Code(CodeForm {
                problem,
                language,
                programming_type,
            }),
            Command::Caption {
                image,
                language,
                description,
            } => Form::Caption(CaptionForm {
                image,
                language,
                description,
            }),
            Command::Ask { question } => Form::Ask(AskForm { question }),
            Command::Modes => return None,
        };
        Some(form)
    }
}
