use crate::domain::model::{Mode, RenderKind, Rendered};

pub fn render(mode: Mode, reply: &str) -> Rendered {
    let kind = mode.render_kind();
    let body = match kind {
        RenderKind::Text => reply.trim().to_string(),
        RenderKind::Code => code_block(reply),
    };
    Rendered { mode, kind, body }
}

/// 回覆中已有 ``` 圍欄時原樣保留
fn code_block(reply: &str) -> String {
    let trimmed = reply.trim();
    if trimmed.contains("```") {
        trimmed.to_string()
    } else {
        format!("```\n{}\n```", trimmed)
    }
}

impl Rendered {
    /// 終端輸出用，含標題
    pub fn to_display(&self) -> String {
        let heading = if self.mode == Mode::Ask { "Answer:\n\n" } else { "" };
        format!("{}{}", heading, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_trimmed() {
        let rendered = render(Mode::Translate, "\n  Bonjour  \n");
        assert_eq!(rendered.kind, RenderKind::Text);
        assert_eq!(rendered.body, "Bonjour");
    }

    #[test]
    fn test_code_is_fenced() {
        let rendered = render(Mode::Code, "print('hi')\n");
        assert_eq!(rendered.body, "```\nprint('hi')\n```");
    }

    #[test]
    fn test_fenced_code_is_kept() {
        let reply = "```python\nprint('hi')\n```";
        assert_eq!(render(Mode::Code, reply).body, reply);
    }

    #[test]
    fn test_fence_after_leading_text_is_not_nested() {
        let reply = "Here is the solution:\n```rust\nfn main() {}\n```\nIt compiles.";
        let rendered = render(Mode::Code, reply);
        assert_eq!(rendered.body, reply);
        assert_eq!(rendered.body.matches("```").count(), 2);
    }

    #[test]
    fn test_ask_display_has_heading() {
        let rendered = render(Mode::Ask, "Ownership is...");
        assert_eq!(rendered.to_display(), "Answer:\n\nOwnership is...");
        assert_eq!(render(Mode::Blog, "Post").to_display(), "Post");
    }
}
