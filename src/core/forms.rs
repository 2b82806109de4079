use crate::domain::model::{ChatPlan, Content, Mode};
use crate::utils::error::{Result, StudioError};
use crate::utils::validation::{is_blank, validate_file_extension, validate_range};
use std::fmt;
use std::path::PathBuf;

pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub const MIN_BLOG_WORDS: u32 = 1000;
pub const MAX_BLOG_WORDS: u32 = 100_000;
pub const BLOG_WORDS_STEP: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ProgrammingType {
    #[default]
    Static,
    Dynamic,
}

impl fmt::Display for ProgrammingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgrammingType::Static => f.write_str("STATIC"),
            ProgrammingType::Dynamic => f.write_str("DYNAMIC"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TranslateForm {
    pub input_language: String,
    pub output_language: String,
    pub text: String,
}

impl TranslateForm {
    fn validate(&self) -> Result<()> {
        if is_blank(&self.input_language) || is_blank(&self.output_language) || is_blank(&self.text)
        {
            return Err(StudioError::form(
                Mode::Translate.name(),
                "Please provide input language, output language, and text to translate.",
            ));
        }
        Ok(())
    }

    fn prompt(&self) -> String {
        format!(
            "Translate this text from {} into {}, using simple language:\n\"{}\"",
            self.input_language, self.output_language, self.text
        )
    }
}

#[derive(Debug, Clone)]
pub struct BlogForm {
    pub title: String,
    pub keywords: String,
    pub words: u32,
}

impl Default for BlogForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            keywords: String::new(),
            words: MIN_BLOG_WORDS,
        }
    }
}

impl BlogForm {
    fn validate(&self) -> Result<()> {
        if is_blank(&self.title) || is_blank(&self.keywords) {
            return Err(StudioError::form(
                Mode::Blog.name(),
                "Please provide both a blog title and keywords.",
            ));
        }

        if validate_range("words", self.words, MIN_BLOG_WORDS, MAX_BLOG_WORDS).is_err() {
            return Err(StudioError::form(
                Mode::Blog.name(),
                format!(
                    "Number of words must be between {} and {}.",
                    MIN_BLOG_WORDS, MAX_BLOG_WORDS
                ),
            ));
        }

        if self.words % BLOG_WORDS_STEP != 0 {
            return Err(StudioError::form(
                Mode::Blog.name(),
                format!("Number of words must be a multiple of {}.", BLOG_WORDS_STEP),
            ));
        }
        Ok(())
    }

    fn prompt(&self) -> String {
        format!(
            "Generate a comprehensive, engaging blog post relevant to the title '{}' \
             and incorporating the keywords: {}. The blog should be approximately {} words long.",
            self.title, self.keywords, self.words
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodeForm {
    pub problem: String,
    pub language: String,
    pub programming_type: ProgrammingType,
}

impl CodeForm {
    fn validate(&self) -> Result<()> {
        if is_blank(&self.problem) || is_blank(&self.language) {
            return Err(StudioError::form(
                Mode::Code.name(),
                "Please provide a problem statement, programming language, and choose a programming type.",
            ));
        }
        Ok(())
    }

    fn prompt(&self) -> String {
        format!(
            "Generate code for the following problem statement: '{}' in {}. \
             The code should be in {} type of programming.",
            self.problem, self.language, self.programming_type
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct CaptionForm {
    pub image: Option<PathBuf>,
    pub language: String,
    pub description: String,
}

impl CaptionForm {
    fn validate(&self) -> Result<()> {
        let image = match &self.image {
            Some(image) if !is_blank(&self.language) => image,
            _ => {
                return Err(StudioError::form(
                    Mode::Caption.name(),
                    "Please upload an image and provide the language for caption and hashtags.",
                ))
            }
        };

        let image_str = image.to_string_lossy();
        validate_file_extension("image", &image_str, &IMAGE_EXTENSIONS)
            .map_err(|e| StudioError::form(Mode::Caption.name(), e.user_friendly_message()))?;

        if !image.is_file() {
            return Err(StudioError::form(
                Mode::Caption.name(),
                format!("Image file not found: {}", image_str),
            ));
        }

        if is_blank(&self.description) {
            tracing::warn!("No image description provided. Please add one for better results.");
            return Err(StudioError::form(
                Mode::Caption.name(),
                "Please provide an image description.",
            ));
        }
        Ok(())
    }

    fn prompt(&self) -> String {
        format!(
            "Write a caption for the image in {}. Generate 5 hashtags for the image in a line in {}:\n\"{}\"",
            self.language, self.language, self.description
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct AskForm {
    pub question: String,
}

impl AskForm {
    fn validate(&self) -> Result<()> {
        if is_blank(&self.question) {
            return Err(StudioError::form(
                Mode::Ask.name(),
                "Question cannot be empty. Please enter a question.",
            ));
        }
        Ok(())
    }

    fn prompt(&self) -> String {
        format!(
            "give me the big paragrapic answer for whatever is asked\nquestion = {}",
            self.question
        )
    }
}

/// 使用者填寫的表單
#[derive(Debug, Clone)]
pub enum Form {
    Translate(TranslateForm),
    Blog(BlogForm),
    Code(CodeForm),
    Caption(CaptionForm),
    Ask(AskForm),
}

impl Form {
    pub fn mode(&self) -> Mode {
        match self {
            Form::Translate(_) => Mode::Translate,
            Form::Blog(_) => Mode::Blog,
            Form::Code(_) => Mode::Code,
            Form::Caption(_) => Mode::Caption,
            Form::Ask(_) => Mode::Ask,
        }
    }

    /// 檢查必填欄位，失敗時不得呼叫模型
    pub fn validate(&self) -> Result<()> {
        match self {
            Form::Translate(form) => form.validate(),
            Form::Blog(form) => form.validate(),
            Form::Code(form) => form.validate(),
            Form::Caption(form) => form.validate(),
            Form::Ask(form) => form.validate(),
        }
    }

    pub fn prompt(&self) -> String {
        match self {
            Form::Translate(form) => form.prompt(),
            Form::Blog(form) => form.prompt(),
            Form::Code(form) => form.prompt(),
            Form::Caption(form) => form.prompt(),
            Form::Ask(form) => form.prompt(),
        }
    }

    /// 聊天歷史以提示詞開頭; ask 模式接著送出原始問題，其他模式重送提示詞
    pub fn plan(&self) -> Result<ChatPlan> {
        self.validate()?;

        let prompt = self.prompt();
        let message = match self {
            Form::Ask(form) => form.question.clone(),
            _ => prompt.clone(),
        };

        Ok(ChatPlan {
            history: vec![Content::user(prompt)],
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn form_message(form: &Form) -> String {
        match form.validate().unwrap_err() {
            StudioError::FormError { message, .. } => message,
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_translate_prompt() {
        let form = Form::Translate(TranslateForm {
            input_language: "English".to_string(),
            output_language: "French".to_string(),
            text: "Good morning".to_string(),
        });
        assert!(form.validate().is_ok());
        assert_eq!(
            form.prompt(),
            "Translate this text from English into French, using simple language:\n\"Good morning\""
        );
    }

    #[test]
    fn test_translate_requires_all_fields() {
        let form = Form::Translate(TranslateForm {
            input_language: "English".to_string(),
            output_language: "   ".to_string(),
            text: "Good morning".to_string(),
        });
        assert_eq!(
            form_message(&form),
            "Please provide input language, output language, and text to translate."
        );
    }

    #[test]
    fn test_blog_prompt_and_word_bounds() {
        let mut blog = BlogForm {
            title: "Rust in production".to_string(),
            keywords: "safety, speed".to_string(),
            words: 3000,
        };
        let form = Form::Blog(blog.clone());
        assert!(form.validate().is_ok());
        assert_eq!(
            form.prompt(),
            "Generate a comprehensive, engaging blog post relevant to the title 'Rust in production' \
             and incorporating the keywords: safety, speed. The blog should be approximately 3000 words long."
        );

        blog.words = 500;
        assert!(Form::Blog(blog.clone()).validate().is_err());
        blog.words = 1500;
        assert!(Form::Blog(blog.clone()).validate().is_err());
        blog.words = 100_000;
        assert!(Form::Blog(blog).validate().is_ok());
    }

    #[test]
    fn test_blog_word_count_messages() {
        let mut blog = BlogForm {
            title: "Rust in production".to_string(),
            keywords: "safety".to_string(),
            words: 200_000,
        };
        assert_eq!(
            form_message(&Form::Blog(blog.clone())),
            "Number of words must be between 1000 and 100000."
        );

        blog.words = 2500;
        assert_eq!(
            form_message(&Form::Blog(blog)),
            "Number of words must be a multiple of 1000."
        );
    }

    #[test]
    fn test_blog_requires_title_and_keywords() {
        let form = Form::Blog(BlogForm {
            title: "Title".to_string(),
            ..BlogForm::default()
        });
        assert_eq!(
            form_message(&form),
            "Please provide both a blog title and keywords."
        );
    }

    #[test]
    fn test_code_prompt_uses_programming_type() {
        let form = Form::Code(CodeForm {
            problem: "reverse a string".to_string(),
            language: "Python".to_string(),
            programming_type: ProgrammingType::Dynamic,
        });
        assert_eq!(
            form.prompt(),
            "Generate code for the following problem statement: 'reverse a string' in Python. \
             The code should be in DYNAMIC type of programming."
        );
        assert_eq!(form.mode().render_kind(), crate::domain::model::RenderKind::Code);
    }

    #[test]
    fn test_code_requires_problem_and_language() {
        let expected =
            "Please provide a problem statement, programming language, and choose a programming type.";

        let blank_problem = Form::Code(CodeForm {
            problem: "  \t".to_string(),
            language: "Rust".to_string(),
            programming_type: ProgrammingType::Static,
        });
        assert_eq!(form_message(&blank_problem), expected);

        let blank_language = Form::Code(CodeForm {
            problem: "sort a list".to_string(),
            language: " ".to_string(),
            programming_type: ProgrammingType::Dynamic,
        });
        assert_eq!(form_message(&blank_language), expected);
        assert!(blank_language.plan().is_err());
    }

    #[test]
    fn test_caption_requires_image_and_language() {
        let form = Form::Caption(CaptionForm {
            image: None,
            language: "English".to_string(),
            description: "a cat".to_string(),
        });
        assert_eq!(
            form_message(&form),
            "Please upload an image and provide the language for caption and hashtags."
        );
    }

    #[test]
    fn test_caption_rejects_unsupported_image() {
        let form = Form::Caption(CaptionForm {
            image: Some(PathBuf::from("holiday.gif")),
            language: "English".to_string(),
            description: "a beach".to_string(),
        });
        assert!(form_message(&form).contains("Unsupported file extension"));
    }

    #[test]
    fn test_caption_requires_description() {
        let mut image = Builder::new().suffix(".png").tempfile().unwrap();
        image.write_all(b"\x89PNG").unwrap();

        let mut caption = CaptionForm {
            image: Some(image.path().to_path_buf()),
            language: "Spanish".to_string(),
            description: String::new(),
        };
        assert_eq!(
            form_message(&Form::Caption(caption.clone())),
            "Please provide an image description."
        );

        caption.description = "sunset over the sea".to_string();
        let form = Form::Caption(caption);
        assert!(form.validate().is_ok());
        assert_eq!(
            form.prompt(),
            "Write a caption for the image in Spanish. Generate 5 hashtags for the image in a line in Spanish:\n\"sunset over the sea\""
        );
    }

    #[test]
    fn test_ask_plan_sends_raw_question() {
        let form = Form::Ask(AskForm {
            question: "What is ownership?".to_string(),
        });
        let plan = form.plan().unwrap();
        assert_eq!(
            plan.history,
            vec![Content::user(
                "give me the big paragrapic answer for whatever is asked\nquestion = What is ownership?"
            )]
        );
        assert_eq!(plan.message, "What is ownership?");
    }

    #[test]
    fn test_ask_rejects_blank_question() {
        let form = Form::Ask(AskForm {
            question: " \n ".to_string(),
        });
        assert_eq!(
            form_message(&form),
            "Question cannot be empty. Please enter a question."
        );
        assert!(form.plan().is_err());
    }

    #[test]
    fn test_other_modes_resend_prompt() {
        let form = Form::Translate(TranslateForm {
            input_language: "German".to_string(),
            output_language: "English".to_string(),
            text: "Hallo".to_string(),
        });
        let plan = form.plan().unwrap();
        assert_eq!(plan.history, vec![Content::user(form.prompt())]);
        assert_eq!(plan.message, form.prompt());
    }
}
