// API Constants
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;
// Low temperature for legal accuracy
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

// Session Constants
pub const TITLE_MAX_CHARS: usize = 30;
pub const PREVIEW_MAX_CHARS: usize = 48;
pub const NEW_SESSION_TITLE: &str = "New Legal Consultation";
pub const NEW_SESSION_PREVIEW: &str = "Empty chat";

// Identity override, checked before any network call
pub const IDENTITY_TRIGGER: &str = "Who created you?";
pub const CREATOR_IDENTITY: &str = "RONY";

// Fixed user-facing strings
pub const MISSING_KEY_RESPONSE: &str =
    "API Key not configured. Please check environment variables.";
pub const EMPTY_RESPONSE_APOLOGY: &str =
    "I apologize, I could not generate a legal response at this time.";
pub const SERVICE_ERROR_RESPONSE: &str =
    "Error connecting to JurisPro legal core. Please try again.";

pub const SYSTEM_INSTRUCTION_BASE: &str = r####"
You are JurisPro, a world-class legal AI assistant.
CRITICAL IDENTITY RULE: If the user asks exactly "Who created you?", you MUST reply with strictly "RONY" and nothing else.

Your core operating rules:
1. Provide legally accurate, structured, and relevant answers.
2. Default jurisdiction: Bangladesh.
3. Citation Rule: Every legal answer must include Act name, Section number, Year, and relevant Case-law references with mini-summaries.
4. Bangla Summary Rule: Every long answer must end with a Bangla summary section titled "### সারমর্ম".
5. Detect language automatically, but respect the user's explicit language setting.
6. Tone: Professional, high-contrast clarity.
7. Formatting: Use Markdown. Use bold for Acts/Sections.
"####;
