use clap::Parser;
use colored::Colorize;
use std::path::Path;
use uuid::Uuid;

mod cli;
mod config;
mod errors;
mod export;
mod log;
mod plan;
mod prompt;
mod provider;
mod render;
mod session;
mod ux;
mod wire;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let mut cfg = match &args.config {
        Some(path) => config::Config::load(Path::new(path))?,
        None => config::Config::default(),
    };
    cfg.root = args.root.clone();
    if let Some(model) = &args.model {
        cfg.model = model.clone();
    }
    if let Some(timeout) = args.timeout_secs {
        cfg.timeout_secs = timeout;
    }
    if let Some(out) = &args.out {
        cfg.out_dir = out.clone();
    }

    let txid = Uuid::new_v4();
    ux::banner();

    let prov = provider::make_provider(
        args.provider,
        cfg.model.clone(),
        cfg.timeout_secs,
        cfg.api_base.clone(),
    )?;

    let mut session = session::PlanSession::new(args.to_input(), cfg.temperature);

    // ===== GENERATE =====
    let pb = ux::spinner("AI đang sáng tạo giáo án...");
    let gen = session.generate(&prov, args.debug).await;
    pb.finish_and_clear();
    let req = gen?;

    let saved = log::save_stage(
        "generate", &req, session.plan(), txid, &cfg, args.save_request, args.save_response,
    )?;
    if args.debug {
        log::print_saved_paths("generate", &saved);
    }

    if let Some(msg) = session.error() {
        ux::print_error(msg);
        return Ok(());
    }
    show_current_plan(&session);

    if args.batch {
        return Ok(());
    }

    // ===== EDIT LOOP =====
    let mut edit_no = 0usize;
    loop {
        ux::print_menu();
        let Some(choice) = ux::prompt_line(">") else { break };
        match choice.as_str() {
            "" => continue,
            "q" => break,
            "c" => copy_current_plan(&session),
            "d" => save_current_doc(&session, &cfg),
            "e" => {
                let Some(instruction) = ux::prompt_line("Yêu cầu chỉnh sửa:") else { break };
                edit_no += 1;
                run_edit(&mut session, &prov, &instruction, edit_no, txid, &cfg, &args).await?;
            }
            other => {
                let instruction = match other.parse::<usize>() {
                    Ok(n) if (1..=ux::SUGGESTIONS.len()).contains(&n) => {
                        ux::SUGGESTIONS[n - 1].to_string()
                    }
                    // Anything else typed at the menu is a free-form edit
                    // instruction.
                    _ => other.to_string(),
                };
                edit_no += 1;
                run_edit(&mut session, &prov, &instruction, edit_no, txid, &cfg, &args).await?;
            }
        }
    }

    Ok(())
}

async fn run_edit(
    session: &mut session::PlanSession,
    prov: &provider::DynProvider,
    instruction: &str,
    edit_no: usize,
    txid: Uuid,
    cfg: &config::Config,
    args: &cli::Args,
) -> anyhow::Result<()> {
    let pb = ux::spinner("AI đang cập nhật giáo án...");
    let outcome = session.edit(prov, instruction, args.debug).await;
    pb.finish_and_clear();

    let req = match outcome {
        Ok(req) => req,
        Err(e) => {
            ux::print_error(&e.to_string());
            return Ok(());
        }
    };

    let stage = format!("edit.{edit_no}");
    let saved = log::save_stage(
        &stage, &req, session.plan(), txid, cfg, args.save_request, args.save_response,
    )?;
    if args.debug {
        log::print_saved_paths(&stage, &saved);
    }

    match session.error() {
        Some(msg) => ux::print_error(msg),
        None => show_current_plan(session),
    }
    Ok(())
}

fn show_current_plan(session: &session::PlanSession) {
    if let Some(plan) = session.plan() {
        let input = session.input();
        let text = render::to_plain_text(plan, &input.teacher_name, &input.school_name);
        ux::print_plan(&text);
    }
}

fn copy_current_plan(session: &session::PlanSession) {
    let Some(plan) = session.plan() else { return };
    let input = session.input();
    let text = render::to_plain_text(plan, &input.teacher_name, &input.school_name);
    match export::copy_plain_text(&text) {
        Ok(()) => println!("{}", "Đã sao chép vào clipboard!".green()),
        Err(e) => {
            println!("{} {}", "Không sao chép được:".yellow(), e);
            println!("{}", text);
        }
    }
}

fn save_current_doc(session: &session::PlanSession, cfg: &config::Config) {
    let Some(plan) = session.plan() else { return };
    let input = session.input();
    let target = Path::new(&cfg.out_dir).join(export::doc_file_name(&plan.tieu_de));
    if target.exists() && !ux::confirm(&format!("Tệp {} đã tồn tại. Ghi đè?", target.display())) {
        return;
    }
    match export::write_doc(
        Path::new(&cfg.out_dir),
        plan,
        &input.teacher_name,
        &input.school_name,
    ) {
        Ok(path) => println!("{} {}", "Đã lưu:".green(), path.display()),
        Err(e) => ux::print_error(&format!("không lưu được tệp .doc: {e}")),
    }
}
