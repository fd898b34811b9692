use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// ========================================
/// Generation service wire contract
/// ========================================

/// The logical request sent to the generation service: one prompt, the
/// schema the response body must conform to, and the sampling temperature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenRequest {
    pub prompt: String,
    pub response_schema: Value,
    pub temperature: f32,
}

/// Machine-readable descriptor of `GeneratedLessonPlan`, in the generation
/// service's schema dialect. Mirrors the current (structured-objectives)
/// revision; the parser still accepts the legacy shape if the model drifts.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "tieuDe": { "type": "STRING" },
            "monHoc": { "type": "STRING" },
            "lop": { "type": "STRING" },
            "soTiet": { "type": "STRING" },
            "thoiGianThucHien": { "type": "STRING" },
            "yeuCauCanDat": {
                "type": "OBJECT",
                "properties": {
                    "kienThucKyNang": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "nangLuc": {
                        "type": "OBJECT",
                        "properties": {
                            "chung": { "type": "ARRAY", "items": { "type": "STRING" } },
                            "dacThu": { "type": "ARRAY", "items": { "type": "STRING" } }
                        },
                        "required": ["chung", "dacThu"]
                    },
                    "phamChat": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["kienThucKyNang", "nangLuc", "phamChat"]
            },
            "doDungDayHoc": {
                "type": "OBJECT",
                "properties": {
                    "giaoVien": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "hocSinh": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["giaoVien", "hocSinh"]
            },
            "hoatDong": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "ten": { "type": "STRING" },
                        "thoiGian": { "type": "STRING" },
                        "mucTieu": { "type": "STRING" },
                        "hoatDongGiaoVien": {
                            "type": "STRING",
                            "description": "Mô tả chi tiết hoạt động của giáo viên, thể hiện rõ các bước. Sử dụng ký tự xuống dòng '\n' để định dạng."
                        },
                        "hoatDongHocSinh": {
                            "type": "STRING",
                            "description": "Mô tả chi tiết hoạt động của học sinh, thể hiện rõ các bước. Sử dụng ký tự xuống dòng '\n' để định dạng."
                        }
                    },
                    "required": ["ten", "thoiGian", "mucTieu", "hoatDongGiaoVien", "hoatDongHocSinh"]
                }
            },
            "dieuChinh": { "type": "STRING" }
        }
    })
}
