/// Fixed instruction sent alongside the photo on `/identify`.
pub fn identify_prompt() -> String {
    r#"Analyze the image and identify the main object.
Respond in JSON only. Do NOT include markdown or triple backticks.
Respond in this strict JSON format:

{
  "prediction": "The name of the object",
  "confidence": "Confidence score as a percentage",
  "alternatives": ["Alternative 1", "Alternative 2", "Alternative 3"],
  "summary": "A short, friendly explanation of the object (no more than 80 words)"
}
"#
    .to_string()
}
