use crate::config::Config;
use crate::plan::GeneratedLessonPlan;
use crate::wire::GenRequest;
use fs_err as fs;
use serde_json::to_string_pretty;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct SavedPaths {
    pub dir: PathBuf,
    pub request: Option<PathBuf>,
    pub response: Option<PathBuf>,
}

fn tx_dir(root: &Path, tx: Uuid) -> PathBuf {
    root.join(".giaoan").join("tx").join(tx.to_string())
}

/// Saves the request/response JSON for one generate-or-edit stage under the
/// per-transaction directory, honoring the save flags.
pub fn save_stage(
    stage: &str,
    req: &GenRequest,
    resp: Option<&GeneratedLessonPlan>,
    tx: Uuid,
    cfg: &Config,
    save_request: bool,
    save_response: bool,
) -> anyhow::Result<SavedPaths> {
    let dir = tx_dir(Path::new(&cfg.root), tx);
    fs::create_dir_all(&dir)?;

    let mut request_path = None;
    let mut response_path = None;

    if save_request {
        let p = dir.join(format!("{stage}.request.json"));
        fs::write(&p, to_string_pretty(req)?)?;
        request_path = Some(p);
    }

    if save_response {
        if let Some(plan) = resp {
            let p = dir.join(format!("{stage}.response.json"));
            fs::write(&p, to_string_pretty(plan)?)?;
            response_path = Some(p);
        }
    }

    Ok(SavedPaths { dir, request: request_path, response: response_path })
}

pub fn print_saved_paths(stage: &str, saved: &SavedPaths) {
    println!("debug[{stage}]: artifacts directory: {}", saved.dir.display());
    if let Some(p) = &saved.request {
        println!("debug[{stage}]: request saved at: {}", p.display());
    } else {
        println!("debug[{stage}]: request not saved (flag off)");
    }
    if let Some(p) = &saved.response {
        println!("debug[{stage}]: response saved at: {}", p.display());
    } else {
        println!("debug[{stage}]: response not saved (flag off or failed call)");
    }
    std::io::stdout().flush().ok();
}
