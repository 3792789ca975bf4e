// src/models/classify.rs
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub description: String,
    pub additional_info: Option<Map<String, Value>>,
}

impl ClassifyRequest {
    /// Renders the classification prompt. The additional-info block only
    /// appears when the client supplied one.
    pub fn prompt(&self) -> String {
        let mut prompt = format!(
            "סווג את המוצר הבא לפי תעריף המכס הישראלי:\n\n**תיאור המוצר:** {}\n",
            self.description
        );

        if let Some(info) = &self.additional_info {
            prompt.push_str("\n**מידע נוסף:**\n");
            for (key, value) in info {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                prompt.push_str(&format!("- {}: {}\n", key, rendered));
            }
        }

        prompt.push_str(
            "\nאנא החזר:\n\
             1. קוד HS מלא (10 ספרות)\n\
             2. תיאור בעברית ובאנגלית\n\
             3. שיעור מכס\n\
             4. מס קנייה (אם יש)\n\
             5. דרישות מיוחדות (רישיונות, תקנים)\n\
             6. הסכמי סחר רלוונטיים\n\
             7. רמת ודאות בסיווג (0-100%)",
        );

        prompt
    }
}
