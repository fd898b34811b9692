use serde::{Deserialize, Serialize};

/// ========================================
/// Lesson plan data model
/// ========================================

/// Select options offered by the input form. Free text is still accepted;
/// these only back the CLI defaults and the help text.
pub const SUBJECTS: &[&str] = &[
    "Toán",
    "Tiếng Việt",
    "Đạo đức",
    "Tự nhiên và Xã hội",
    "Khoa học",
    "Lịch sử và Địa lí",
    "Hoạt động trải nghiệm",
    "Âm nhạc",
    "Mĩ thuật",
    "Giáo dục thể chất",
];

pub const GRADES: &[&str] = &["Lớp 1", "Lớp 2", "Lớp 3", "Lớp 4", "Lớp 5"];

pub const BOOK_SETS: &[&str] = &[
    "Kết nối tri thức với cuộc sống",
    "Chân trời sáng tạo",
    "Cánh Diều",
];

/// What the teacher fills in before asking for a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlanInput {
    pub subject: String,
    pub grade: String,
    pub book_set: String,
    pub lesson_title: String,
    pub periods: String,
    pub teacher_name: String,
    pub school_name: String,
    pub prep_date: String,
    pub teaching_date: String,
}

impl Default for LessonPlanInput {
    fn default() -> Self {
        let today = chrono::Local::now().date_naive().to_string();
        Self {
            subject: SUBJECTS[0].to_string(),
            grade: GRADES[0].to_string(),
            book_set: BOOK_SETS[0].to_string(),
            lesson_title: String::new(),
            periods: String::new(),
            teacher_name: String::new(),
            school_name: String::new(),
            prep_date: today.clone(),
            teaching_date: today,
        }
    }
}

impl LessonPlanInput {
    /// A generate action is only allowed when every required field has
    /// content after trimming.
    pub fn validate(&self) -> Result<(), crate::errors::PlanError> {
        let mut missing = Vec::new();
        if self.lesson_title.trim().is_empty() { missing.push("lesson title"); }
        if self.periods.trim().is_empty() { missing.push("periods"); }
        if self.teacher_name.trim().is_empty() { missing.push("teacher name"); }
        if self.school_name.trim().is_empty() { missing.push("school name"); }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(crate::errors::PlanError::Validation(format!(
                "required fields are empty: {}",
                missing.join(", ")
            )))
        }
    }
}

/// The complete record returned by the generation service. Replaced
/// wholesale on every successful generate/edit; never merged or patched.
///
/// Every field is defaulted on deserialize: the service's output is parsed
/// optimistically and the renderer treats missing collections as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedLessonPlan {
    #[serde(default)]
    pub tieu_de: String,
    #[serde(default)]
    pub mon_hoc: String,
    #[serde(default)]
    pub lop: String,
    #[serde(default)]
    pub so_tiet: String,
    #[serde(default)]
    pub thoi_gian_thuc_hien: String,
    #[serde(default)]
    pub yeu_cau_can_dat: Objectives,
    #[serde(default)]
    pub do_dung_day_hoc: TeachingAids,
    #[serde(default)]
    pub hoat_dong: Vec<TeachingActivity>,
    #[serde(default)]
    pub dieu_chinh: String,
}

/// Two schema revisions exist for the objectives section. The legacy one is
/// a flat bullet list; the current one groups items under knowledge/skills,
/// competencies and qualities. Both deserialize into this sum type and the
/// renderer handles either shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Objectives {
    Structured(StructuredObjectives),
    Flat(Vec<String>),
}

impl Default for Objectives {
    fn default() -> Self {
        Objectives::Flat(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredObjectives {
    #[serde(default)]
    pub kien_thuc_ky_nang: Vec<String>,
    #[serde(default)]
    pub nang_luc: CompetencyGroups,
    #[serde(default)]
    pub pham_chat: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetencyGroups {
    #[serde(default)]
    pub chung: Vec<String>,
    #[serde(default)]
    pub dac_thu: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingAids {
    #[serde(default)]
    pub giao_vien: Vec<String>,
    #[serde(default)]
    pub hoc_sinh: Vec<String>,
}

/// One phase of the lesson. The teacher/student narratives are multi-line
/// strings, one instructional step per line, paired by index at render time.
/// The legacy revision used the short field names `hoatDongGV`/`hoatDongHS`
/// and had no objective; both spellings parse into the canonical fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingActivity {
    #[serde(default)]
    pub ten: String,
    #[serde(default)]
    pub thoi_gian: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muc_tieu: Option<String>,
    #[serde(default, alias = "hoatDongGV")]
    pub hoat_dong_giao_vien: String,
    #[serde(default, alias = "hoatDongHS")]
    pub hoat_dong_hoc_sinh: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_legacy_revision() {
        let raw = r#"{
            "tieuDe": "Phép cộng trong 10",
            "monHoc": "Toán",
            "lop": "Lớp 1",
            "soTiet": "1",
            "thoiGianThucHien": "Tuần 5",
            "yeuCauCanDat": ["Biết cộng trong phạm vi 10", "Làm được bài tập mẫu"],
            "doDungDayHoc": { "giaoVien": ["Que tính"], "hocSinh": [] },
            "hoatDong": [
                {
                    "ten": "A. Khởi động",
                    "thoiGian": "5 phút",
                    "hoatDongGV": "Nêu câu hỏi\nNhận xét",
                    "hoatDongHS": "Trả lời"
                }
            ],
            "dieuChinh": ""
        }"#;

        let plan: GeneratedLessonPlan = serde_json::from_str(raw).unwrap();
        assert_eq!(plan.tieu_de, "Phép cộng trong 10");
        assert!(matches!(plan.yeu_cau_can_dat, Objectives::Flat(ref items) if items.len() == 2));
        let act = &plan.hoat_dong[0];
        assert_eq!(act.hoat_dong_giao_vien, "Nêu câu hỏi\nNhận xét");
        assert_eq!(act.hoat_dong_hoc_sinh, "Trả lời");
        assert!(act.muc_tieu.is_none());
    }

    #[test]
    fn parses_current_revision() {
        let raw = r#"{
            "tieuDe": "Bài 12: Cây xanh",
            "monHoc": "Tự nhiên và Xã hội",
            "lop": "Lớp 2",
            "soTiet": "2",
            "thoiGianThucHien": "Tuần 12",
            "yeuCauCanDat": {
                "kienThucKyNang": ["Kể tên các bộ phận của cây"],
                "nangLuc": {
                    "chung": ["Giao tiếp và hợp tác"],
                    "dacThu": ["Năng lực khoa học"]
                },
                "phamChat": ["Chăm chỉ"]
            },
            "doDungDayHoc": { "giaoVien": ["Tranh ảnh"], "hocSinh": ["Vở bài tập"] },
            "hoatDong": [
                {
                    "ten": "B. Khám phá",
                    "thoiGian": "15 phút",
                    "mucTieu": "Nhận biết bộ phận của cây",
                    "hoatDongGiaoVien": "Chia nhóm\nPhát phiếu",
                    "hoatDongHocSinh": "Thảo luận nhóm\nGhi phiếu"
                }
            ],
            "dieuChinh": "Không có"
        }"#;

        let plan: GeneratedLessonPlan = serde_json::from_str(raw).unwrap();
        match &plan.yeu_cau_can_dat {
            Objectives::Structured(obj) => {
                assert_eq!(obj.kien_thuc_ky_nang.len(), 1);
                assert_eq!(obj.nang_luc.chung[0], "Giao tiếp và hợp tác");
                assert_eq!(obj.pham_chat[0], "Chăm chỉ");
            }
            Objectives::Flat(_) => panic!("expected structured objectives"),
        }
        assert_eq!(plan.hoat_dong[0].muc_tieu.as_deref(), Some("Nhận biết bộ phận của cây"));
    }

    #[test]
    fn canonical_serialization_round_trips() {
        let plan = GeneratedLessonPlan {
            tieu_de: "Ôn tập".into(),
            mon_hoc: "Toán".into(),
            lop: "Lớp 3".into(),
            so_tiet: "1".into(),
            thoi_gian_thuc_hien: "Tuần 1".into(),
            yeu_cau_can_dat: Objectives::Structured(StructuredObjectives {
                kien_thuc_ky_nang: vec!["Nhẩm nhanh".into()],
                nang_luc: CompetencyGroups {
                    chung: vec!["Tự chủ và tự học".into()],
                    dac_thu: vec!["Tư duy toán học".into()],
                },
                pham_chat: vec!["Trung thực".into()],
            }),
            do_dung_day_hoc: TeachingAids {
                giao_vien: vec!["Bảng phụ".into()],
                hoc_sinh: vec![],
            },
            hoat_dong: vec![TeachingActivity {
                ten: "A. Khởi động".into(),
                thoi_gian: "5 phút".into(),
                muc_tieu: Some("Tạo hứng thú".into()),
                hoat_dong_giao_vien: "Tổ chức trò chơi".into(),
                hoat_dong_hoc_sinh: "Tham gia trò chơi".into(),
            }],
            dieu_chinh: String::new(),
        };

        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"tieuDe\""));
        assert!(json.contains("\"hoatDongGiaoVien\""));
        let back: GeneratedLessonPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let raw = r#"{ "tieuDe": "Bài học", "monHoc": "Toán", "lop": "Lớp 1", "soTiet": "1", "thoiGianThucHien": "" }"#;
        let plan: GeneratedLessonPlan = serde_json::from_str(raw).unwrap();
        assert!(plan.hoat_dong.is_empty());
        assert!(plan.do_dung_day_hoc.giao_vien.is_empty());
        assert!(matches!(plan.yeu_cau_can_dat, Objectives::Flat(ref items) if items.is_empty()));
        assert_eq!(plan.dieu_chinh, "");
    }

    #[test]
    fn validation_gates_on_required_fields() {
        let mut input = LessonPlanInput {
            lesson_title: "Phép cộng trong 10".into(),
            periods: "1".into(),
            teacher_name: "Nguyễn Văn A".into(),
            school_name: "Tiểu học Sao Mai".into(),
            ..LessonPlanInput::default()
        };
        assert!(input.validate().is_ok());

        input.teacher_name = "   ".into();
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("teacher name"));

        input.lesson_title.clear();
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("lesson title"));
        assert!(err.to_string().contains("teacher name"));
    }
}
