//! Source Languages
//!
//! Maps file names to a language, explorer icon and editor mode.

use serde::{Deserialize, Serialize};

/// Language of a file, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    JavaScript,
    TypeScript,
    Python,
    Html,
    Css,
    Json,
    Markdown,
    C,
    Cpp,
    #[default]
    PlainText,
}

impl Language {
    /// Editor mode identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::PlainText => "plaintext",
        }
    }

    pub fn from_file_name(name: &str) -> Self {
        let ext = match name.rsplit_once('.') {
            Some((_, ext)) => ext.to_lowercase(),
            None => return Language::PlainText,
        };
        match ext.as_str() {
            "java" => Language::Java,
            "js" | "jsx" => Language::JavaScript,
            "ts" | "tsx" => Language::TypeScript,
            "py" => Language::Python,
            "html" => Language::Html,
            "css" => Language::Css,
            "json" => Language::Json,
            "md" => Language::Markdown,
            "c" => Language::C,
            "cpp" => Language::Cpp,
            _ => Language::PlainText,
        }
    }

    /// Whether the execution backend can run a file of this language
    pub fn is_executable(&self) -> bool {
        matches!(self, Language::Java)
    }
}

/// Presentation hints for a file in the explorer and tab strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTypeInfo {
    pub icon: &'static str,
    pub color: &'static str,
    pub language: Language,
}

pub fn file_type_info(name: &str) -> FileTypeInfo {
    let language = Language::from_file_name(name);
    let (icon, color) = match language {
        Language::Java => ("fab fa-java", "text-orange-500"),
        Language::JavaScript => ("fab fa-js", "text-yellow-400"),
        Language::TypeScript => ("fas fa-code", "text-blue-400"),
        Language::Python => ("fab fa-python", "text-blue-500"),
        Language::Html => ("fab fa-html5", "text-orange-600"),
        Language::Css => ("fab fa-css3-alt", "text-blue-500"),
        Language::Json => ("fas fa-file-code", "text-yellow-500"),
        Language::Markdown => ("fab fa-markdown", "text-blue-300"),
        Language::C => ("fas fa-c", "text-blue-600"),
        Language::Cpp => ("fas fa-plus-circle", "text-blue-700"),
        Language::PlainText if name.to_lowercase().ends_with(".txt") => {
            ("fas fa-file-alt", "text-gray-400")
        }
        Language::PlainText => ("fas fa-file-lines", "text-gray-400"),
    };
    FileTypeInfo { icon, color, language }
}

/// Whether the name denotes a runnable entry file
pub fn is_executable_name(name: &str) -> bool {
    Language::from_file_name(name).is_executable()
}

/// Class name for a Java source file: extension stripped, every
/// non-alphanumeric character replaced by `_`
pub fn class_name_for(file_name: &str) -> String {
    let stem = if file_name.to_lowercase().ends_with(".java") {
        &file_name[..file_name.len() - ".java".len()]
    } else {
        file_name
    };
    stem.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Skeleton class used for newly created Java files
pub fn java_template(class_name: &str) -> String {
    format!(
        "public class {} {{\n    public static void main(String[] args) {{\n        // Your code here\n    }}\n}}",
        class_name
    )
}

/// Initial content for a newly created file
pub fn default_content_for(file_name: &str) -> String {
    match Language::from_file_name(file_name) {
        Language::Java => java_template(&class_name_for(file_name)),
        _ => String::new(),
    }
}

/// Append `.java` when the user typed a bare name
pub fn normalize_new_file_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains('.') {
        Some(trimmed.to_string())
    } else {
        Some(format!("{}.java", trimmed))
    }
}
