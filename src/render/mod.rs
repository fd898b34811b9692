use std::sync::OnceLock;

use regex::Regex;

use crate::plan::{GeneratedLessonPlan, Objectives, TeachingActivity};

/// Rendered wherever a list or note from the service comes back empty.
pub const NONE_MARKER: &str = "Không có";

/// ========================================
/// Plain-text document
/// ========================================

pub fn to_plain_text(plan: &GeneratedLessonPlan, teacher: &str, school: &str) -> String {
    let mut text = String::new();
    text.push_str("KẾ HOẠCH BÀI DẠY\n\n");
    text.push_str(&format!("Môn học: {}\n", plan.mon_hoc));
    text.push_str(&format!("Lớp: {}\n", plan.lop));
    text.push_str(&format!("Tên bài học: {}\n", plan.tieu_de));
    text.push_str(&format!("Số tiết: {}\n", plan.so_tiet));
    text.push_str(&format!("Thời gian thực hiện: {}\n", plan.thoi_gian_thuc_hien));
    text.push_str(&format!("Người soạn: {}\n", teacher));
    text.push_str(&format!("Đơn vị: {}\n\n", school));

    text.push_str("I. YÊU CẦU CẦN ĐẠT\n");
    match &plan.yeu_cau_can_dat {
        Objectives::Flat(items) => {
            for item in items {
                text.push_str(&format!("- {}\n", item));
            }
        }
        Objectives::Structured(obj) => {
            text.push_str("1. Kiến thức, kĩ năng:\n");
            push_bullets(&mut text, &obj.kien_thuc_ky_nang);
            text.push_str("2. Năng lực:\n");
            text.push_str("a) Năng lực chung:\n");
            push_bullets(&mut text, &obj.nang_luc.chung);
            text.push_str("b) Năng lực đặc thù:\n");
            push_bullets(&mut text, &obj.nang_luc.dac_thu);
            text.push_str("3. Phẩm chất:\n");
            push_bullets(&mut text, &obj.pham_chat);
        }
    }
    text.push('\n');

    text.push_str("II. ĐỒ DÙNG DẠY HỌC\n");
    text.push_str("1. Đối với giáo viên:\n");
    push_bullets(&mut text, &plan.do_dung_day_hoc.giao_vien);
    text.push_str("2. Đối với học sinh:\n");
    push_bullets(&mut text, &plan.do_dung_day_hoc.hoc_sinh);
    text.push('\n');

    text.push_str("III. CÁC HOẠT ĐỘNG DẠY HỌC CHỦ YẾU\n");
    for activity in &plan.hoat_dong {
        text.push_str(&format!("\n{} ({})\n", activity.ten, activity.thoi_gian));
        if let Some(muc_tieu) = &activity.muc_tieu {
            if !muc_tieu.trim().is_empty() {
                text.push_str(&format!("Mục tiêu: {}\n", muc_tieu));
            }
        }
        for (gv, hs) in paired_lines(activity) {
            text.push_str(&format!("  - GV: {}\n", gv));
            text.push_str(&format!("  - HS: {}\n", hs));
        }
    }
    text.push('\n');

    text.push_str("IV. ĐIỀU CHỈNH SAU BÀI DẠY (nếu có)\n");
    if plan.dieu_chinh.trim().is_empty() {
        text.push_str(NONE_MARKER);
    } else {
        text.push_str(&plan.dieu_chinh);
    }
    text.push('\n');

    text
}

fn push_bullets(text: &mut String, items: &[String]) {
    if items.is_empty() {
        text.push_str(&format!("- {}\n", NONE_MARKER));
        return;
    }
    for item in items {
        text.push_str(&format!("- {}\n", item));
    }
}

/// ========================================
/// Standalone HTML document
/// ========================================

/// Produces a complete document with its own styling, so wrapping it as a
/// `.doc` download opens as a correctly formatted page. Generated text is
/// embedded as-is apart from the bold-marker substitution: the service's
/// output is trusted not to contain hostile markup.
pub fn to_document_html(plan: &GeneratedLessonPlan, teacher: &str, school: &str) -> String {
    let styles = r#"
        <style>
            body { font-family: 'Times New Roman', serif; line-height: 1.5; }
            h1, h2, h3 { font-weight: bold; }
            h1 { text-align: center; font-size: 16pt; }
            h2 { font-size: 14pt; }
            h3 { font-size: 13pt; }
            p, li { font-size: 12pt; }
            table { border-collapse: collapse; width: 100%; margin-top: 1em; }
            th, td { border: 1px solid black; padding: 8px; text-align: left; vertical-align: top; }
            th { background-color: #f2f2f2; }
            .school-info { text-align: center; }
        </style>
    "#;

    let mut html = String::new();
    html.push_str("<html><head><meta charset=\"UTF-8\">");
    html.push_str(styles);
    html.push_str("</head><body>\n");

    html.push_str("<div class=\"school-info\">\n");
    html.push_str(&format!("<p><strong>{}</strong></p>\n", school.to_uppercase()));
    html.push_str(&format!("<p><strong>Giáo viên: {}</strong></p>\n", teacher));
    html.push_str("</div>\n");
    html.push_str("<h1>KẾ HOẠCH BÀI DẠY</h1>\n");
    html.push_str(&format!("<p><strong>Môn học/Hoạt động giáo dục:</strong> {}</p>\n", plan.mon_hoc));
    html.push_str(&format!("<p><strong>Lớp:</strong> {}</p>\n", plan.lop));
    html.push_str(&format!("<p><strong>Tên bài học:</strong> {}</p>\n", plan.tieu_de));
    html.push_str(&format!("<p><strong>Số tiết:</strong> {}</p>\n", plan.so_tiet));
    html.push_str(&format!("<p><strong>Thời gian thực hiện:</strong> {}</p>\n", plan.thoi_gian_thuc_hien));

    html.push_str("<h2>I. YÊU CẦU CẦN ĐẠT</h2>\n");
    match &plan.yeu_cau_can_dat {
        Objectives::Flat(items) => html.push_str(&list_html(items)),
        Objectives::Structured(obj) => {
            html.push_str("<h3>1. Kiến thức, kĩ năng</h3>\n");
            html.push_str(&list_html(&obj.kien_thuc_ky_nang));
            html.push_str("<h3>2. Năng lực</h3>\n");
            html.push_str("<p><em>a) Năng lực chung:</em></p>\n");
            html.push_str(&list_html(&obj.nang_luc.chung));
            html.push_str("<p><em>b) Năng lực đặc thù:</em></p>\n");
            html.push_str(&list_html(&obj.nang_luc.dac_thu));
            html.push_str("<h3>3. Phẩm chất</h3>\n");
            html.push_str(&list_html(&obj.pham_chat));
        }
    }

    html.push_str("<h2>II. ĐỒ DÙNG DẠY HỌC</h2>\n");
    html.push_str("<h3>1. Đối với giáo viên:</h3>\n");
    html.push_str(&list_html(&plan.do_dung_day_hoc.giao_vien));
    html.push_str("<h3>2. Đối với học sinh:</h3>\n");
    html.push_str(&list_html(&plan.do_dung_day_hoc.hoc_sinh));

    html.push_str("<h2>III. CÁC HOẠT ĐỘNG DẠY HỌC CHỦ YẾU</h2>\n");
    html.push_str("<table>\n<thead>\n<tr>\n");
    html.push_str("<th>Thời gian</th>\n");
    html.push_str("<th>Hoạt động của Giáo viên (GV)</th>\n");
    html.push_str("<th>Hoạt động của Học sinh (HS)</th>\n");
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for activity in &plan.hoat_dong {
        html.push_str(&activity_rows(activity));
    }
    html.push_str("</tbody>\n</table>\n");

    html.push_str("<h2>IV. ĐIỀU CHỈNH SAU BÀI DẠY (nếu có)</h2>\n");
    let dieu_chinh = if plan.dieu_chinh.trim().is_empty() {
        NONE_MARKER.to_string()
    } else {
        with_breaks(&emphasize(&plan.dieu_chinh))
    };
    html.push_str(&format!("<p>{}</p>\n", dieu_chinh));

    html.push_str("</body></html>\n");
    html
}

fn list_html(items: &[String]) -> String {
    if items.is_empty() {
        return format!("<ul><li>{}</li></ul>\n", NONE_MARKER);
    }
    let mut out = String::from("<ul>");
    for item in items {
        out.push_str(&format!("<li>{}</li>", emphasize(item)));
    }
    out.push_str("</ul>\n");
    out
}

fn activity_rows(activity: &TeachingActivity) -> String {
    let pairs = paired_lines(activity);
    let mut rows = String::new();
    for (i, &(gv, hs)) in pairs.iter().enumerate() {
        rows.push_str("<tr>\n");
        if i == 0 {
            let mut label = format!(
                "<strong>{}</strong><br>({})",
                emphasize(&activity.ten),
                activity.thoi_gian
            );
            if let Some(muc_tieu) = &activity.muc_tieu {
                if !muc_tieu.trim().is_empty() {
                    label.push_str(&format!(
                        "<br><em>Mục tiêu: {}</em>",
                        with_breaks(&emphasize(muc_tieu))
                    ));
                }
            }
            rows.push_str(&format!("<td rowspan=\"{}\">{}</td>\n", pairs.len(), label));
        }
        rows.push_str(&format!("<td>{}</td>\n", emphasize(gv)));
        rows.push_str(&format!("<td>{}</td>\n", emphasize(hs)));
        rows.push_str("</tr>\n");
    }
    rows
}

/// ========================================
/// Pairing and inline markup helpers
/// ========================================

/// Splits the two narratives on newlines and pads the shorter side with
/// empty lines up to `max(gv, hs, 1)`. Lines are never dropped and a
/// mismatch never fails; it just leaves blank counterpart cells.
fn paired_lines(activity: &TeachingActivity) -> Vec<(&str, &str)> {
    let gv: Vec<&str> = activity.hoat_dong_giao_vien.split('\n').collect();
    let hs: Vec<&str> = activity.hoat_dong_hoc_sinh.split('\n').collect();
    let rows = gv.len().max(hs.len()).max(1);
    (0..rows)
        .map(|i| (gv.get(i).copied().unwrap_or(""), hs.get(i).copied().unwrap_or("")))
        .collect()
}

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").unwrap())
}

/// `**span**` becomes `<strong>span</strong>`.
fn emphasize(s: &str) -> String {
    bold_re().replace_all(s, "<strong>$1</strong>").into_owned()
}

/// Literal newlines become `<br>` where the container is not a list.
fn with_breaks(s: &str) -> String {
    s.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{StructuredObjectives, TeachingAids};

    fn activity(gv: &str, hs: &str) -> TeachingActivity {
        TeachingActivity {
            ten: "A. Khởi động".into(),
            thoi_gian: "5 phút".into(),
            muc_tieu: None,
            hoat_dong_giao_vien: gv.into(),
            hoat_dong_hoc_sinh: hs.into(),
        }
    }

    fn sample_plan() -> GeneratedLessonPlan {
        GeneratedLessonPlan {
            tieu_de: "Phép cộng trong 10".into(),
            mon_hoc: "Toán".into(),
            lop: "Lớp 1".into(),
            so_tiet: "1".into(),
            thoi_gian_thuc_hien: "Tuần 5".into(),
            yeu_cau_can_dat: Objectives::Flat(vec!["Cộng được trong phạm vi 10".into()]),
            do_dung_day_hoc: TeachingAids {
                giao_vien: vec!["Que tính".into()],
                hoc_sinh: vec![],
            },
            hoat_dong: vec![activity("Bước 1\nBước 2", "Đáp 1")],
            dieu_chinh: String::new(),
        }
    }

    #[test]
    fn ragged_narratives_pad_the_shorter_side() {
        let a1 = activity("Bước 1\nBước 2", "Đáp 1");
        let pairs = paired_lines(&a1);
        assert_eq!(pairs, vec![("Bước 1", "Đáp 1"), ("Bước 2", "")]);

        let a2 = activity("", "");
        let pairs = paired_lines(&a2);
        assert_eq!(pairs, vec![("", "")]);

        let a3 = activity("x", "a\nb\nc");
        let pairs = paired_lines(&a3);
        assert_eq!(pairs, vec![("x", "a"), ("", "b"), ("", "c")]);
    }

    #[test]
    fn plain_text_renders_two_paired_rows_for_ragged_activity() {
        let text = to_plain_text(&sample_plan(), "Nguyễn Văn A", "Tiểu học Sao Mai");
        assert_eq!(text.matches("  - GV: ").count(), 2);
        assert_eq!(text.matches("  - HS: ").count(), 2);
        assert!(text.contains("  - GV: Bước 2\n  - HS: \n"));
    }

    #[test]
    fn html_renders_two_rows_with_rowspan_for_ragged_activity() {
        let html = to_document_html(&sample_plan(), "Nguyễn Văn A", "Tiểu học Sao Mai");
        assert!(html.contains("<td rowspan=\"2\">"));
        assert_eq!(html.matches("<td>Bước").count(), 2);
        assert!(html.contains("<td>Đáp 1</td>"));
    }

    #[test]
    fn empty_collections_render_none_marker() {
        let mut plan = sample_plan();
        plan.do_dung_day_hoc.giao_vien.clear();

        let text = to_plain_text(&plan, "A", "B");
        let student_section = text.split("2. Đối với học sinh:").nth(1).unwrap();
        assert!(student_section.starts_with("\n- Không có\n"));
        assert!(text.contains("1. Đối với giáo viên:\n- Không có\n"));
        assert!(text.contains("IV. ĐIỀU CHỈNH SAU BÀI DẠY (nếu có)\nKhông có\n"));

        let html = to_document_html(&plan, "A", "B");
        assert_eq!(html.matches("<li>Không có</li>").count(), 2);
    }

    #[test]
    fn renderers_are_pure() {
        let plan = sample_plan();
        assert_eq!(
            to_plain_text(&plan, "A", "B"),
            to_plain_text(&plan, "A", "B")
        );
        assert_eq!(
            to_document_html(&plan, "A", "B"),
            to_document_html(&plan, "A", "B")
        );
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let plan = sample_plan();
        for doc in [
            to_plain_text(&plan, "A", "B"),
            to_document_html(&plan, "A", "B"),
        ] {
            let i1 = doc.find("I. YÊU CẦU CẦN ĐẠT").unwrap();
            let i2 = doc.find("II. ĐỒ DÙNG DẠY HỌC").unwrap();
            let i3 = doc.find("III. CÁC HOẠT ĐỘNG DẠY HỌC CHỦ YẾU").unwrap();
            let i4 = doc.find("IV. ĐIỀU CHỈNH SAU BÀI DẠY").unwrap();
            assert!(i1 < i2 && i2 < i3 && i3 < i4);
        }
    }

    #[test]
    fn bold_markers_become_strong_only_in_html() {
        let mut plan = sample_plan();
        plan.hoat_dong[0].hoat_dong_giao_vien = "Tổ chức **trò chơi** nhỏ".into();

        let html = to_document_html(&plan, "A", "B");
        assert!(html.contains("Tổ chức <strong>trò chơi</strong> nhỏ"));

        let text = to_plain_text(&plan, "A", "B");
        assert!(text.contains("Tổ chức **trò chơi** nhỏ"));
    }

    #[test]
    fn adjustment_newlines_become_breaks_in_html() {
        let mut plan = sample_plan();
        plan.dieu_chinh = "Dòng một\nDòng hai".into();
        let html = to_document_html(&plan, "A", "B");
        assert!(html.contains("<p>Dòng một<br>Dòng hai</p>"));
    }

    #[test]
    fn structured_objectives_render_subsections() {
        let mut plan = sample_plan();
        plan.yeu_cau_can_dat = Objectives::Structured(StructuredObjectives {
            kien_thuc_ky_nang: vec!["Cộng nhẩm nhanh".into()],
            nang_luc: Default::default(),
            pham_chat: vec!["Chăm chỉ".into()],
        });

        let text = to_plain_text(&plan, "A", "B");
        assert!(text.contains("1. Kiến thức, kĩ năng:\n- Cộng nhẩm nhanh\n"));
        assert!(text.contains("a) Năng lực chung:\n- Không có\n"));
        assert!(text.contains("3. Phẩm chất:\n- Chăm chỉ\n"));

        let html = to_document_html(&plan, "A", "B");
        assert!(html.contains("<h3>1. Kiến thức, kĩ năng</h3>"));
        assert!(html.contains("<li>Chăm chỉ</li>"));
    }

    #[test]
    fn html_document_is_self_contained() {
        let html = to_document_html(&sample_plan(), "Nguyễn Văn A", "Tiểu học Sao Mai");
        assert!(html.starts_with("<html><head><meta charset=\"UTF-8\">"));
        assert!(html.contains("<style>"));
        assert!(html.contains("TIỂU HỌC SAO MAI"));
        assert!(html.contains("Giáo viên: Nguyễn Văn A"));
        assert!(html.trim_end().ends_with("</body></html>"));
    }

    #[test]
    fn objective_line_renders_when_present() {
        let mut plan = sample_plan();
        plan.hoat_dong[0].muc_tieu = Some("Tạo hứng thú".into());

        let text = to_plain_text(&plan, "A", "B");
        assert!(text.contains("A. Khởi động (5 phút)\nMục tiêu: Tạo hứng thú\n"));

        let html = to_document_html(&plan, "A", "B");
        assert!(html.contains("<em>Mục tiêu: Tạo hứng thú</em>"));
    }
}
