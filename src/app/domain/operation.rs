use std::str::FromStr;

use crate::app::infrastructure::error::AppError;
use crate::app::services::text_ops;

/// Options read by operations that take more than the text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CleanOptions {
    pub remove_accents: bool,
}

/// Every transformation a user can apply to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Clean,
    Upper,
    Lower,
    Title,
    Dedupe,
    Sort,
    RemoveBlank,
    StripHtml,
    RemoveNonPrintable,
    NormalizeSpaces,
    RemoveAccents,
}

impl Operation {
    /// Name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Title => "title",
            Self::Dedupe => "dedupe",
            Self::Sort => "sort",
            Self::RemoveBlank => "remove-blank",
            Self::StripHtml => "strip-html",
            Self::RemoveNonPrintable => "remove-non-printable",
            Self::NormalizeSpaces => "normalize-spaces",
            Self::RemoveAccents => "remove-accents",
        }
    }

    /// Get the display name for this operation
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clean => "Clean Text",
            Self::Upper => "UPPERCASE",
            Self::Lower => "lowercase",
            Self::Title => "Title Case",
            Self::Dedupe => "Remove Duplicate Lines",
            Self::Sort => "Sort Lines",
            Self::RemoveBlank => "Remove Blank Lines",
            Self::StripHtml => "Remove HTML Tags",
            Self::RemoveNonPrintable => "Remove Non-Printable",
            Self::NormalizeSpaces => "Normalize Spaces",
            Self::RemoveAccents => "Remove Accents",
        }
    }

    /// Get all available operations
    pub fn all() -> &'static [Operation] {
        &[
            Self::Clean,
            Self::Upper,
            Self::Lower,
            Self::Title,
            Self::Dedupe,
            Self::Sort,
            Self::RemoveBlank,
            Self::StripHtml,
            Self::RemoveNonPrintable,
            Self::NormalizeSpaces,
            Self::RemoveAccents,
        ]
    }

    pub fn apply(&self, text: &str, options: &CleanOptions) -> String {
        match self {
            Self::Clean => text_ops::clean_text(text, options.remove_accents),
            Self::Upper => text_ops::to_upper_case(text),
            Self::Lower => text_ops::to_lower_case(text),
            Self::Title => text_ops::to_title_case(text),
            Self::Dedupe => text_ops::remove_duplicate_lines(text),
            Self::Sort => text_ops::sort_lines(text),
            Self::RemoveBlank => text_ops::remove_blank_lines(text),
            Self::StripHtml => text_ops::strip_html(text),
            Self::RemoveNonPrintable => text_ops::remove_non_printable(text),
            Self::NormalizeSpaces => text_ops::normalize_spaces(text),
            Self::RemoveAccents => text_ops::remove_accents(text),
        }
    }
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|op| op.name() == wanted)
            .ok_or_else(|| AppError::UnknownOperation(s.to_string()))
    }
}
