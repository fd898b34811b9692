use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::plan::LessonPlanInput;

#[derive(ValueEnum, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[value(alias = "google")]
    Gemini,
}

#[derive(Parser, Debug)]
#[command(name = "giaoan", version, about = "Trợ lý soạn Kế hoạch bài dạy cho giáo viên tiểu học")]
pub struct Args {
    /// Môn học (subject)
    #[arg(long, default_value = "Toán")]
    pub subject: String,

    /// Lớp (grade)
    #[arg(long, default_value = "Lớp 1")]
    pub grade: String,

    /// Bộ sách (book set)
    #[arg(long = "book-set", default_value = "Kết nối tri thức với cuộc sống")]
    pub book_set: String,

    /// Tên bài học (lesson title)
    #[arg(long = "title")]
    pub lesson_title: Option<String>,

    /// Số tiết (periods)
    #[arg(long)]
    pub periods: Option<String>,

    /// Người soạn (teacher name)
    #[arg(long = "teacher")]
    pub teacher_name: Option<String>,

    /// Đơn vị (school name)
    #[arg(long = "school")]
    pub school_name: Option<String>,

    /// Ngày soạn, ISO date; defaults to today
    #[arg(long = "prep-date")]
    pub prep_date: Option<String>,

    /// Ngày dạy, ISO date; defaults to today
    #[arg(long = "teaching-date")]
    pub teaching_date: Option<String>,

    #[arg(long, default_value = ".")]
    pub root: String,

    #[arg(long, value_enum, default_value_t = ProviderKind::Gemini)]
    pub provider: ProviderKind,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Directory for the .doc artifact
    #[arg(long)]
    pub out: Option<String>,

    #[arg(long)]
    pub config: Option<String>,

    /// Generate once, print the plain-text plan and exit
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,

    #[arg(long, default_value_t = true)]
    pub save_request: bool,

    #[arg(long, default_value_t = true)]
    pub save_response: bool,
}

impl Args {
    pub fn to_input(&self) -> LessonPlanInput {
        let defaults = LessonPlanInput::default();
        LessonPlanInput {
            subject: self.subject.clone(),
            grade: self.grade.clone(),
            book_set: self.book_set.clone(),
            lesson_title: self.lesson_title.clone().unwrap_or_default(),
            periods: self.periods.clone().unwrap_or_default(),
            teacher_name: self.teacher_name.clone().unwrap_or_default(),
            school_name: self.school_name.clone().unwrap_or_default(),
            prep_date: self.prep_date.clone().unwrap_or_else(|| defaults.prep_date.clone()),
            teaching_date: self
                .teaching_date
                .clone()
                .unwrap_or_else(|| defaults.teaching_date.clone()),
        }
    }
}
