//! Prompt construction for chord progression queries
//! 和弦进行查询的提示词构建

/// Build the generation prompt for a validated key and music type.
/// The worked example anchors the model's output format, so the text
/// is kept stable.
/// 为已验证的调与风格构建生成提示词。示例用于固定模型的输出格式，
/// 因此文本保持稳定。
pub fn chord_progressions_prompt(musical_key: &str, music_type: &str) -> String {
    format!(
        "List common chord progressions in {musical_key} for {music_type} music.
For each progression, also list a few well-known songs that use it.
Return the output in a structured format, like JSON if possible, or clearly delineated sections.
Example for a progression:
Progression: I-IV-V
Songs: La Bamba, Twist and Shout

Progression: ii-V-I
Songs: Autumn Leaves, Tune Up
"
    )
}
