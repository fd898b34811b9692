use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// The edit shortcuts offered under the rendered plan.
pub const SUGGESTIONS: &[&str] = &[
    "Làm chi tiết hơn mục I",
    "Thêm hoạt động khởi động",
    "Thêm trò chơi củng cố",
    "Rút ngắn phần Luyện tập",
];

pub fn banner() {
    println!("\n{}", "Trợ lý Soạn Giáo án AI".bold());
    println!("{}\n", "Kế hoạch bài dạy theo định hướng phát triển năng lực".dimmed());
}

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

pub fn print_plan(text: &str) {
    println!(
        "\n{}",
        "┏━━━━━━━━━━━━━━━━━━━━ Kế hoạch bài dạy ━━━━━━━━━━━━━━━━━━━┓".bold()
    );
    println!("{}", text);
    println!(
        "{}",
        "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".bold()
    );
}

pub fn print_error(msg: &str) {
    println!("{} {}", "Lỗi!".red().bold(), msg.red());
}

pub fn print_menu() {
    println!("\n{}", "Bạn muốn làm gì tiếp?".bold());
    println!("  {}  nhập yêu cầu chỉnh sửa (hoặc 1-{} cho gợi ý)", "[e]".yellow().bold(), SUGGESTIONS.len());
    for (i, s) in SUGGESTIONS.iter().enumerate() {
        println!("      {}. {}", i + 1, s.dimmed());
    }
    println!("  {}  sao chép văn bản vào clipboard", "[c]".cyan().bold());
    println!("  {}  tải về tệp .doc", "[d]".green().bold());
    println!("  {}  thoát", "[q]".bold());
}

pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N]: ", prompt);
    let _ = io::stdout().flush();
    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        let ans = s.trim().to_lowercase();
        ans == "y" || ans == "yes"
    } else {
        false
    }
}

/// Reads one trimmed line from stdin. None on EOF.
pub fn prompt_line(label: &str) -> Option<String> {
    print!("{} ", label.bold());
    let _ = io::stdout().flush();
    let mut s = String::new();
    match io::stdin().read_line(&mut s) {
        Ok(0) => None,
        Ok(_) => Some(s.trim().to_string()),
        Err(_) => None,
    }
}
