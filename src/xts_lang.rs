// Multi-language support module
// Localized on-screen strings for English and Chinese

#[derive(Clone, Debug)]
pub struct Assets {
    // Key help, drawn under the board
    pub help_move: &'static str,
    pub help_open: &'static str,

    // Clock line
    pub status_time_fmt: &'static str, // "Time: {}sec"

    // End of game
    pub win_message: &'static str,
    pub loss_message: &'static str,
}

/// Returns English language assets
pub fn english_assets() -> Assets {
    Assets {
        help_move: "Move: [h][j][k][l], Mark: [Tab]",
        help_open: "Open: [SPACE], Quit: [ESC]",
        status_time_fmt: "Time: {}sec",
        win_message: "Congratulations! (Hit any key)",
        loss_message: "Bomb! (Hit any key)",
    }
}

/// Returns Chinese language assets
pub fn chinese_assets() -> Assets {
    Assets {
        help_move: "移动：[h][j][k][l]，标记：[Tab]",
        help_open: "翻开：[空格]，退出：[ESC]",
        status_time_fmt: "时间：{} 秒",
        win_message: "恭喜过关！（按任意键）",
        loss_message: "踩到地雷！（按任意键）",
    }
}

/// Current language code plus its string assets
#[derive(Clone, Debug)]
pub struct Lang {
    pub current_lang: String,
    pub assets: Assets,
}

impl Lang {
    /// Creates a Lang from a code; "zh-CN" and friends select Chinese, anything else English
    pub fn new(lang_code: &str) -> Self {
        let code = if lang_code.to_lowercase().starts_with("zh") {
            "zh"
        } else {
            "en"
        };
        Lang {
            current_lang: code.to_string(),
            assets: if code == "zh" {
                chinese_assets()
            } else {
                english_assets()
            },
        }
    }

    /// Language of the running system, English when it cannot be read
    pub fn from_system() -> Self {
        let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
        Lang::new(&locale)
    }

    pub fn time_status(&self, secs: u64) -> String {
        self.assets.status_time_fmt.replace("{}", &secs.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_normalize_to_supported_languages() {
        assert_eq!(Lang::new("zh-CN").current_lang, "zh");
        assert_eq!(Lang::new("ZH_tw").current_lang, "zh");
        assert_eq!(Lang::new("en-US").current_lang, "en");
        assert_eq!(Lang::new("fr").current_lang, "en");
    }

    #[test]
    fn time_status_fills_seconds() {
        assert_eq!(Lang::new("en").time_status(42), "Time: 42sec");
        assert_eq!(Lang::new("zh").time_status(3), "时间：3 秒");
    }
}
