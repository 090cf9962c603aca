//! 扩展名 → 语言映射

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
    Html,
    Css,
    Scss,
    Less,
    Json,
    Markdown,
    Python,
    Java,
    CSharp,
    Php,
    Ruby,
    Go,
    Sql,
    Xml,
    Yaml,
    Shell,
    C,
    Cpp,
    PlainText,
}

impl Language {
    /// 按文件名推断语言，未知或缺失扩展名回落到 `PlainText`
    pub fn from_filename(name: &str) -> Self {
        match file_extension(name).as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Self::JavaScript,
            "ts" | "tsx" => Self::TypeScript,
            "html" | "htm" | "xhtml" => Self::Html,
            "css" => Self::Css,
            "scss" => Self::Scss,
            "less" => Self::Less,
            "json" => Self::Json,
            "md" | "markdown" => Self::Markdown,
            "py" | "pyc" | "pyd" | "pyo" => Self::Python,
            "java" => Self::Java,
            "cs" => Self::CSharp,
            "php" => Self::Php,
            "rb" => Self::Ruby,
            "go" => Self::Go,
            "sql" => Self::Sql,
            "xml" => Self::Xml,
            "yml" | "yaml" => Self::Yaml,
            "sh" | "bash" => Self::Shell,
            "c" => Self::C,
            "cpp" | "h" | "hpp" => Self::Cpp,
            _ => Self::PlainText,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Html => "html",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Less => "less",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Python => "python",
            Self::Java => "java",
            Self::CSharp => "csharp",
            Self::Php => "php",
            Self::Ruby => "ruby",
            Self::Go => "go",
            Self::Sql => "sql",
            Self::Xml => "xml",
            Self::Yaml => "yaml",
            Self::Shell => "shell",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::PlainText => "plaintext",
        }
    }

    /// 状态栏显示用
    pub fn status_label(self) -> String {
        self.as_str().to_uppercase()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 文件树图标分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIcon {
    Code,
    Json,
    Text,
    Image,
    Generic,
}

impl FileIcon {
    pub fn from_filename(name: &str) -> Self {
        match file_extension(name).as_str() {
            "js" | "jsx" | "ts" | "tsx" => Self::Code,
            "json" => Self::Json,
            "md" | "txt" => Self::Text,
            "png" | "jpg" | "jpeg" | "gif" | "svg" => Self::Image,
            _ => Self::Generic,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Json => "{ }",
            Self::Text => " ≡ ",
            Self::Image => " ▣ ",
            Self::Generic => " · ",
        }
    }
}

/// 最后一个 `.` 之后的部分（小写）；没有 `.` 时整个名字即扩展名
pub fn file_extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or_default().to_lowercase()
}

#[cfg(test)]
#[path = "../../tests/unit/models/language.rs"]
mod tests;
