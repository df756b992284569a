//! Instruction text sent as the system message.

/// Embed the template and the user's situation in the fixed drafting instruction.
///
/// Both inputs are inserted unchanged; nothing is escaped or truncated.
pub fn compose_prompt(template: &str, user_input: &str) -> String {
    format!(
        "다음은 이혼 판결문 작성 형식입니다:\n\n{template}\n\n\
         그리고 아래는 사용자가 입력한 상황입니다:\n\n{user_input}\n\n\
         이 상황을 바탕으로 위 형식에 맞게 이혼 판결문을 작성하세요."
    )
}
