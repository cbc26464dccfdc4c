//! 字句解析のエラー型
//!
//! スキャナ自体は失敗しない。認識できないバイトは `Illegal` トークンとして
//! ストリームに流れるので、それを致命的に扱いたい呼び出し側のために
//! ここでエラー型と診断メッセージへの変換を提供する。

use crate::lexer::Span;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

/// レキサーエラーの詳細
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("認識できないトークン: {literal:?} (オフセット {})", .span.start)]
    UnrecognizedToken { literal: String, span: Span },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            LexerError::UnrecognizedToken { span, .. } => span.clone(),
        }
    }

    /// codespan-reportingのDiagnosticに変換
    pub fn to_diagnostic<FileId: Copy>(&self, file_id: FileId) -> Diagnostic<FileId> {
        match self {
            LexerError::UnrecognizedToken { literal, span } => Diagnostic::error()
                .with_message(format!("認識できないトークン: {:?}", literal))
                .with_labels(vec![Label::primary(file_id, span.clone())
                    .with_message("ここに不正なトークンがあります")]),
        }
    }
}

/// Result型のエイリアス
pub type LexResult<T> = Result<T, Vec<LexerError>>;

#[cfg(test)]
mod tests {
    use super::*;
    use codespan_reporting::files::SimpleFiles;
    use codespan_reporting::term::{self, termcolor::Buffer};

    #[test]
    fn test_error_message() {
        let error = LexerError::UnrecognizedToken {
            literal: "@".to_string(),
            span: 4..5,
        };
        assert_eq!(error.to_string(), "認識できないトークン: \"@\" (オフセット 4)");
        assert_eq!(error.span(), 4..5);
    }

    #[test]
    fn test_render_diagnostic() {
        let mut files = SimpleFiles::new();
        let file_id = files.add("input.monkey", "let x = @;");

        let error = LexerError::UnrecognizedToken {
            literal: "@".to_string(),
            span: 8..9,
        };
        let diagnostic = error.to_diagnostic(file_id);
        assert_eq!(diagnostic.labels.len(), 1);
        assert_eq!(diagnostic.labels[0].range, 8..9);

        let mut buffer = Buffer::no_color();
        term::emit(&mut buffer, &term::Config::default(), &files, &diagnostic).unwrap();
        let rendered = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(rendered.contains("input.monkey"));
        assert!(rendered.contains("let x = @;"));
    }
}
