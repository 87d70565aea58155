//! 出力言語の選択と UI 文字列の翻訳
//!
//! 言語一覧はプロンプトの「Please provide the response in {name}」に使う名前も兼ねる。

mod table;

use crate::domain::LanguageCode;

/// 選択可能な言語（コードとその言語自身での名前）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// 未知の言語コードに使う名前
pub const FALLBACK_LANGUAGE_NAME: &str = "English";

pub const LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "es", name: "Español" },
    Language { code: "fr", name: "Français" },
    Language { code: "de", name: "Deutsch" },
    Language { code: "ja", name: "日本語" },
    Language { code: "zh", name: "中文" },
];

/// コードから言語を探す
pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code == code)
}

/// プロンプトに埋め込む言語名。未知のコードは English
pub fn language_name(code: &LanguageCode) -> &'static str {
    find_language(code)
        .map(|l| l.name)
        .unwrap_or(FALLBACK_LANGUAGE_NAME)
}

/// UI 文字列の翻訳器
///
/// 解決順: 選択言語 → English → キーそのもの
#[derive(Debug, Clone)]
pub struct Translator {
    language: LanguageCode,
}

impl Translator {
    pub fn new(language: LanguageCode) -> Self {
        Self { language }
    }

    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        table::lookup(&self.language, key)
            .or_else(|| table::lookup("en", key))
            .unwrap_or(key)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(LanguageCode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_name_known_codes() {
        assert_eq!(language_name(&LanguageCode::new("en")), "English");
        assert_eq!(language_name(&LanguageCode::new("ja")), "日本語");
        assert_eq!(language_name(&LanguageCode::new("es")), "Español");
    }

    #[test]
    fn test_language_name_unknown_code_falls_back_to_english() {
        assert_eq!(language_name(&LanguageCode::new("xx")), "English");
        assert_eq!(language_name(&LanguageCode::new("")), "English");
    }

    #[test]
    fn test_translate_selected_language() {
        let t = Translator::new(LanguageCode::new("ja"));
        assert_eq!(t.t("generatingButton"), "生成中...");
    }

    #[test]
    fn test_translate_unknown_language_uses_english() {
        let t = Translator::new(LanguageCode::new("xx"));
        assert_eq!(t.t("summarizeTextButton"), "Summarize Text");
    }

    #[test]
    fn test_translate_unknown_key_returns_key() {
        let t = Translator::new(LanguageCode::new("fr"));
        assert_eq!(t.t("noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_every_language_covers_english_keys() {
        for lang in LANGUAGES {
            for key in table::english_keys() {
                assert!(
                    table::lookup(lang.code, key).is_some(),
                    "{} is missing {}",
                    lang.code,
                    key
                );
            }
        }
    }
}
