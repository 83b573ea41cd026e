//! Bilingual (English/Japanese) UI strings.
//!
//! One closed `Lang` set, toggled as a whole; static labels come from a
//! lookup table per language and parameterized messages are built by
//! methods on `Lang`. Labels are never mixed between languages.

/// Active UI language. Also the `lang` value sent to the explain endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Ja,
}

/// Static label table for one language.
#[derive(Debug, PartialEq)]
pub struct Labels {
    pub scan_title: &'static str,
    pub scan_btn: &'static str,
    pub path_placeholder: &'static str,
    pub path_required: &'static str,
    pub loading: &'static str,
    pub viz_title: &'static str,
    pub view_tree: &'static str,
    pub view_chart: &'static str,
    pub chart_unavailable: &'static str,
    pub scan_empty: &'static str,
    pub dedup_title: &'static str,
    pub check_dup_btn: &'static str,
    pub dedup_empty: &'static str,
    pub files: &'static str,
    pub per_copy: &'static str,
    pub wasted_space: &'static str,
    pub suggestion: &'static str,
    pub explanation: &'static str,
    pub explain_btn: &'static str,
    pub delete_btn: &'static str,
    pub nothing_selected: &'static str,
    pub scan_failed: &'static str,
    pub dup_failed: &'static str,
    pub explain_failed: &'static str,
    pub delete_failed: &'static str,
}

const EN: Labels = Labels {
    scan_title: "Directory Scanner",
    scan_btn: "Scan",
    path_placeholder: "Enter path (e.g., F:/)",
    path_required: "Please enter a path first.",
    loading: "Scanning...",
    viz_title: "File Visualization",
    view_tree: "Tree",
    view_chart: "Chart",
    chart_unavailable: "Chart visualization unavailable.",
    scan_empty: "Nothing scanned yet.",
    dedup_title: "Duplicates & Improvements",
    check_dup_btn: "Check Duplicates",
    dedup_empty: "No duplicates check passed yet.",
    files: "files",
    per_copy: "each",
    wasted_space: "Potential Wasted Space",
    suggestion: "Suggestion: Review these files and delete unnecessary copies.",
    explanation: "AI Explanation",
    explain_btn: "Explain with AI",
    delete_btn: "Delete Selected",
    nothing_selected: "No files selected.",
    scan_failed: "Error scanning directory",
    dup_failed: "Error checking duplicates",
    explain_failed: "Error generating explanations",
    delete_failed: "Error deleting files",
};

const JA: Labels = Labels {
    scan_title: "ディレクトリスキャナー",
    scan_btn: "スキャン",
    path_placeholder: "パスを入力 (例: F:/)",
    path_required: "先にパスを入力してください。",
    loading: "スキャン中...",
    viz_title: "ファイル可視化",
    view_tree: "ツリー",
    view_chart: "チャート",
    chart_unavailable: "チャートを表示できません。",
    scan_empty: "まだスキャンされていません。",
    dedup_title: "重複・改善提案",
    check_dup_btn: "重複チェック",
    dedup_empty: "まだ重複チェックを行っていません。",
    files: "ファイル",
    per_copy: "各",
    wasted_space: "無駄なスペースの可能性",
    suggestion: "改善案: これらのファイルを確認し、不要なコピーを削除してください。",
    explanation: "AIによる解説",
    explain_btn: "AIで解説",
    delete_btn: "選択したファイルを削除",
    nothing_selected: "ファイルが選択されていません。",
    scan_failed: "スキャン中にエラーが発生しました",
    dup_failed: "重複チェック中にエラーが発生しました",
    explain_failed: "解説の生成中にエラーが発生しました",
    delete_failed: "ファイルの削除中にエラーが発生しました",
};

impl Lang {
    pub fn toggle(self) -> Lang {
        match self {
            Lang::En => Lang::Ja,
            Lang::Ja => Lang::En,
        }
    }

    /// Locale code as sent to the backend.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ja => "ja",
        }
    }

    /// Short badge for the language toggle button.
    pub fn badge(self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Ja => "JA",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Lang::En => &EN,
            Lang::Ja => &JA,
        }
    }

    pub fn delete_confirm(self, count: usize) -> String {
        match self {
            Lang::En => format!("Delete {} selected files? This cannot be undone.", count),
            Lang::Ja => format!("選択した{}個のファイルを削除しますか？この操作は取り消せません。", count),
        }
    }

    pub fn delete_success(self, count: u64) -> String {
        match self {
            Lang::En => format!("Deleted {} files.", count),
            Lang::Ja => format!("{}個のファイルを削除しました。", count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_identity() {
        assert_eq!(Lang::En.toggle().toggle(), Lang::En);
        assert_eq!(Lang::Ja.toggle().toggle(), Lang::Ja);
        // and the label table comes back with it
        assert_eq!(Lang::En.toggle().toggle().labels(), &EN);
    }

    #[test]
    fn languages_never_mix() {
        assert_ne!(EN, JA);
        assert_eq!(Lang::En.labels().scan_btn, "Scan");
        assert_eq!(Lang::Ja.labels().scan_btn, "スキャン");
    }

    #[test]
    fn codes_match_backend_contract() {
        assert_eq!(Lang::En.code(), "en");
        assert_eq!(Lang::Ja.code(), "ja");
        assert_eq!(Lang::default(), Lang::En);
    }

    #[test]
    fn parameterized_messages_carry_the_count() {
        assert!(Lang::En.delete_confirm(3).contains('3'));
        assert!(Lang::Ja.delete_confirm(3).contains('3'));
        assert!(Lang::En.delete_success(7).contains('7'));
        assert!(Lang::Ja.delete_success(7).contains('7'));
    }
}
