use crate::plan::{GeneratedLessonPlan, LessonPlanInput};

/// Builds the one-shot generation prompt. Deterministic: the same input
/// always produces the same text, and every input field is embedded.
pub fn generation_prompt(input: &LessonPlanInput) -> String {
    format!(
        r#"#YÊU CẦU SOẠN KẾ HOẠCH BÀI DẠY MẪU

1. VAI TRÒ:
Bạn là một giáo viên dạy giỏi cấp Quốc gia, chuyên về phương pháp giảng dạy tích cực và xây dựng giáo án theo định hướng phát triển năng lực học sinh.

2. THÔNG TIN BÀI DẠY:
- Môn học: {subject}
- Lớp: {grade}
- Bài học: {title}
- Bộ sách: {book_set}
- Thời lượng: {periods} tiết
- Ngày soạn: {prep_date}
- Ngày dạy: {teaching_date}

3. NHIỆM VỤ:
Soạn thảo một Kế hoạch bài dạy chi tiết, sáng tạo, và chuẩn mực, tuân thủ nghiêm ngặt cấu trúc JSON được yêu cầu và Phụ lục 3 về Hướng dẫn xây dựng Kế hoạch bài dạy.

4. CẤU TRÚC VÀ NỘI DUNG CHI TIẾT (Theo đúng định dạng JSON):

MỤC 1: YÊU CẦU CẦN ĐẠT (yeuCauCanDat)
- Kiến thức & Kĩ năng (kienThucKyNang): Nêu cụ thể học sinh *làm được gì* sau bài học.
- Năng lực (nangLuc):
  - Năng lực chung (chung): Tập trung vào Giao tiếp và Hợp tác, Tự chủ và Tự học.
  - Năng lực đặc thù (dacThu): Tập trung vào Năng lực Ngôn ngữ và Năng lực Văn học (nếu là môn Tiếng Việt) hoặc năng lực phù hợp với môn học.
- Phẩm chất (phamChat): Nhấn mạnh phẩm chất Nhân ái và Chăm chỉ.

MỤC 2: ĐỒ DÙNG DẠY HỌC (doDungDayHoc)
Liệt kê cụ thể, có tính ứng dụng cho giáo viên (giaoVien) và học sinh (hocSinh).

MỤC 3: CÁC HOẠT ĐỘNG DẠY HỌC CHỦ YẾU (hoatDong)
Thiết kế 4 hoạt động theo tiến trình: A. Khởi động -> B. Khám phá -> C. Luyện tập -> D. Vận dụng.
Mỗi hoạt động phải là một object trong array hoatDong, có các trường sau:
- ten: Tên hoạt động (VD: "A. Khởi động")
- thoiGian: Thời gian dự kiến (VD: "5 phút")
- mucTieu: Nêu rõ mục tiêu của hoạt động.
- hoatDongGiaoVien: Mô tả chi tiết, rõ ràng các hành động của GIÁO VIÊN.
- hoatDongHocSinh: Mô tả chi tiết, rõ ràng các hành động của HỌC SINH tương ứng với hoạt động của giáo viên.

QUAN TRỌNG: Nội dung của 'hoatDongGiaoVien' và 'hoatDongHocSinh' khi kết hợp lại phải thể hiện được chuỗi 4 bước:
1. Chuyển giao nhiệm vụ: GV nêu yêu cầu, HS tiếp nhận.
2. Thực hiện nhiệm vụ: HS thực hiện (cá nhân, cặp, nhóm), GV quan sát, hỗ trợ.
3. Báo cáo, thảo luận: HS trình bày, các HS khác nhận xét.
4. Kết luận, nhận định: GV tổng hợp, chuẩn hóa kiến thức, động viên.

Hai trường 'hoatDongGiaoVien' và 'hoatDongHocSinh' phải có cùng số dòng để ghép được thành từng cặp tương ứng. Sử dụng ký tự xuống dòng ('\n') để xuống dòng và tạo các gạch đầu dòng cho dễ đọc trong các trường chuỗi dài.

MỤC 4: ĐIỀU CHỈNH SAU BÀI DẠY (dieuChinh)
Ghi một vài gợi ý thiết thực.

TỔNG KẾT:
Hãy đảm bảo rằng giáo án cuối cùng vừa khoa học, chặt chẽ, vừa thể hiện được sự vui tươi, phù hợp với tâm lý học sinh {grade}, và phát huy được tối đa tính tích cực, chủ động của các em. Trả về kết quả dưới dạng một đối tượng JSON duy nhất, không có giải thích gì thêm.
"#,
        subject = input.subject,
        grade = input.grade,
        title = input.lesson_title,
        book_set = input.book_set,
        periods = input.periods,
        prep_date = input.prep_date,
        teaching_date = input.teaching_date,
    )
}

/// Builds the edit prompt: the entire current record serialized as canonical
/// JSON plus the teacher's free-text instruction, verbatim. The caller is
/// responsible for rejecting empty instructions before getting here.
pub fn edit_prompt(current: &GeneratedLessonPlan, instruction: &str) -> anyhow::Result<String> {
    let plan_json = serde_json::to_string(current)?;
    Ok(format!(
        r#"Bạn là một trợ lý AI chuyên chỉnh sửa giáo án cho giáo viên tiểu học tại Việt Nam.
Đây là giáo án hiện tại ở định dạng JSON:
{plan_json}

Giáo viên có một yêu cầu chỉnh sửa như sau:
"{instruction}"

Nhiệm vụ của bạn là cập nhật lại giáo án dựa trên yêu cầu này. Hãy trả về TOÀN BỘ giáo án đã được cập nhật.
LƯU Ý QUAN TRỌNG: Phải giữ nguyên cấu trúc JSON ban đầu. Trong mỗi hoạt động, hãy đảm bảo điền đầy đủ cả hai trường "hoatDongGiaoVien" và "hoatDongHocSinh" để mô tả song song hoạt động của hai bên, với cùng số dòng ở cả hai trường, và đảm bảo sự kết hợp của chúng thể hiện 4 bước của một hoạt động dạy học. Sử dụng ký tự '\n' để định dạng.
Không thêm bất kỳ văn bản giải thích nào ngoài đối tượng JSON.
"#,
    ))
}
