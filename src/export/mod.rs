use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use fs_err as fs;
use regex::Regex;

use crate::plan::GeneratedLessonPlan;
use crate::render;

/// Suggested download name: `GiaoAn_<title with whitespace as underscores>.doc`.
pub fn doc_file_name(title: &str) -> String {
    static WS: OnceLock<Regex> = OnceLock::new();
    let ws = WS.get_or_init(|| Regex::new(r"\s+").unwrap());
    format!("GiaoAn_{}.doc", ws.replace_all(title, "_"))
}

/// Writes the word-processor artifact: a UTF-8 byte-order mark followed by
/// the standalone HTML document. Word opens this as a formatted page.
pub fn write_doc(
    dir: &Path,
    plan: &GeneratedLessonPlan,
    teacher: &str,
    school: &str,
) -> Result<PathBuf> {
    let html = render::to_document_html(plan, teacher, school);
    let path = dir.join(doc_file_name(&plan.tieu_de));
    fs::create_dir_all(dir)?;
    let mut bytes = Vec::with_capacity(html.len() + 3);
    bytes.extend_from_slice("\u{feff}".as_bytes());
    bytes.extend_from_slice(html.as_bytes());
    fs::write(&path, bytes)?;
    Ok(path)
}

/// Puts the plain-text rendering on the system clipboard. Best effort: on a
/// headless machine this fails and the caller falls back to printing.
pub fn copy_plain_text(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
    clipboard.set_text(text.to_string()).context("clipboard write failed")?;
    Ok(())
}
